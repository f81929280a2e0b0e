pub mod config;
pub mod emitter;
pub mod error;
pub mod fixtures;
pub mod midi_utils;
pub mod model;
pub mod scenarios;

pub use error::FixtureError;
pub use model::{EffectsPreset, NoteEvent, NoteSequence, SynthType};
