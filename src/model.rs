/*
    Payload models for the play_notes tool.
 */

pub mod note;
pub mod vocabulary;

pub use note::{NoteEvent, NoteSequence};
pub use vocabulary::{EffectsPreset, SynthType};
