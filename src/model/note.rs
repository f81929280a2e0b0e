use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::FixtureError;
use crate::midi_utils;
use crate::model::vocabulary::{EffectsPreset, SynthType};

/*
    One hit as the play_notes tool expects it. Field order is the order of the keys in the
    emitted JSON, so don't shuffle these around.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    pub synth_type: SynthType,
    pub start_time: f64, // Seconds from sequence start
    pub duration: f64,   // Seconds
    pub velocity: u8,
    pub synth_amplitude: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects_preset: Option<EffectsPreset>,
}

impl NoteEvent {
    pub fn new(synth_type: SynthType, start_time: f64, duration: f64, velocity: u8, synth_amplitude: f32) -> NoteEvent {
        NoteEvent { synth_type, start_time, duration, velocity, synth_amplitude, effects_preset: None }
    }

    pub fn with_effects(mut self, preset: EffectsPreset) -> NoteEvent {
        self.effects_preset = Some(preset);
        self
    }

    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    pub fn validate(&self) -> Result<(), String> {
        if !midi_utils::is_valid_velocity(self.velocity) {
            return Err(format!("velocity {} is above {}", self.velocity, midi_utils::MAX_VELOCITY));
        }

        if !midi_utils::is_valid_amplitude(self.synth_amplitude) {
            return Err(format!("synth_amplitude {} is outside 0.0-1.0", self.synth_amplitude));
        }

        if !self.start_time.is_finite() || self.start_time < 0.0 {
            return Err(format!("start_time {} must be a non-negative number of seconds", self.start_time));
        }

        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(format!("duration {} must be a positive number of seconds", self.duration));
        }

        Ok(())
    }
}

fn default_tempo() -> u32 {
    config::DEFAULT_TEMPO
}

/*
    Notes are kept in the order they were written, which is not necessarily time order.
    start_time decides when things actually play on the receiving end.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSequence {
    pub notes: Vec<NoteEvent>,
    #[serde(default = "default_tempo")]
    pub tempo: u32, // BPM, passed along as metadata
}

impl NoteSequence {
    pub fn new(notes: Vec<NoteEvent>, tempo: u32) -> NoteSequence {
        NoteSequence { notes, tempo }
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        if self.tempo == 0 {
            return Err(FixtureError::InvalidSequence("tempo must be above zero".to_string()));
        }

        if self.notes.is_empty() {
            return Err(FixtureError::InvalidSequence("sequence contains no notes".to_string()));
        }

        for (index, note) in self.notes.iter().enumerate() {
            note.validate().map_err(|reason| FixtureError::InvalidNote { index, reason })?;
        }

        Ok(())
    }

    // Point in seconds where the last ringing note stops
    pub fn end_time(&self) -> f64 {
        self.notes.iter().map(|n| n.end_time()).fold(0.0, f64::max)
    }

    pub fn end_beat(&self) -> Result<BigDecimal, FixtureError> {
        let end_time = midi_utils::to_decimal(self.end_time())
            .ok_or_else(|| FixtureError::InvalidSequence(format!("end time {} is not a number", self.end_time())))?;

        Ok(midi_utils::seconds_to_beats(&end_time, self.tempo))
    }

    pub fn has_effects(&self) -> bool {
        self.notes.iter().any(|n| n.effects_preset.is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::{NoteEvent, NoteSequence};
    use crate::error::FixtureError;
    use crate::model::vocabulary::{EffectsPreset, SynthType};

    fn big(inp: &str) -> BigDecimal {
        BigDecimal::from_str(inp).unwrap()
    }

    fn kick() -> NoteEvent {
        NoteEvent::new(SynthType::Kick, 0.0, 0.1, 127, 0.9)
    }

    #[test]
    fn keys_in_declaration_order() {
        let json = serde_json::to_string(&kick().with_effects(EffectsPreset::Studio)).unwrap();
        assert_eq!(
            json,
            r#"{"synth_type":"kick","start_time":0.0,"duration":0.1,"velocity":127,"synth_amplitude":0.9,"effects_preset":"studio"}"#
        );

        let json = serde_json::to_string(&NoteSequence::new(vec![], 120)).unwrap();
        assert_eq!(json, r#"{"notes":[],"tempo":120}"#);
    }

    #[test]
    fn no_preset_no_key() {
        let json = serde_json::to_string(&kick()).unwrap();
        assert!(!json.contains("effects_preset"));
    }

    #[test]
    fn decode_payload() {
        let payload = r#"{
            "notes": [
                {"synth_type": "hihat", "start_time": 1, "duration": 0.05, "velocity": 80, "synth_amplitude": 0.6},
                {"synth_type": "snare", "start_time": 0.5, "duration": 0.1, "velocity": 120, "synth_amplitude": 0.8, "effects_preset": "concert_hall"}
            ]
        }"#;

        let sequence: NoteSequence = serde_json::from_str(payload).unwrap();
        assert_eq!(sequence.tempo, 120); // Default when left out
        assert_eq!(sequence.notes[0], NoteEvent::new(SynthType::HiHat, 1.0, 0.05, 80, 0.6));
        assert_eq!(sequence.notes[1].effects_preset, Some(EffectsPreset::ConcertHall));
    }

    #[test]
    fn decode_rejects_unknown_synth() {
        let payload = r#"{"notes": [{"synth_type": "tuba", "start_time": 0, "duration": 1, "velocity": 1, "synth_amplitude": 0.1}], "tempo": 90}"#;
        assert!(serde_json::from_str::<NoteSequence>(payload).is_err());
    }

    #[test]
    fn decode_requires_all_note_fields() {
        let payload = r#"{"notes": [{"synth_type": "kick", "start_time": 0, "duration": 1, "velocity": 1}], "tempo": 90}"#;
        assert!(serde_json::from_str::<NoteSequence>(payload).is_err());
    }

    #[test]
    fn validate_note() {
        assert!(kick().validate().is_ok());
        assert!(NoteEvent::new(SynthType::Kick, 0.0, 0.1, 128, 0.9).validate().is_err());
        assert!(NoteEvent::new(SynthType::Kick, 0.0, 0.1, 100, 1.5).validate().is_err());
        assert!(NoteEvent::new(SynthType::Kick, -0.5, 0.1, 100, 0.5).validate().is_err());
        assert!(NoteEvent::new(SynthType::Kick, 0.0, 0.0, 100, 0.5).validate().is_err());
        assert!(NoteEvent::new(SynthType::Kick, 0.0, f64::NAN, 100, 0.5).validate().is_err());
    }

    #[test]
    fn validate_sequence() {
        assert!(NoteSequence::new(vec![kick()], 120).validate().is_ok());

        match NoteSequence::new(vec![kick()], 0).validate() {
            Err(FixtureError::InvalidSequence(_)) => {}
            other => panic!("Expected invalid sequence, got {:?}", other),
        }

        match NoteSequence::new(vec![], 120).validate() {
            Err(FixtureError::InvalidSequence(_)) => {}
            other => panic!("Expected invalid sequence, got {:?}", other),
        }

        let loud = NoteEvent::new(SynthType::Snare, 0.5, 0.1, 200, 0.8);
        match NoteSequence::new(vec![kick(), loud], 120).validate() {
            Err(FixtureError::InvalidNote { index, .. }) => assert_eq!(index, 1),
            other => panic!("Expected invalid note, got {:?}", other),
        }
    }

    #[test]
    fn end_time_and_beat() {
        let sequence = NoteSequence::new(vec![
            NoteEvent::new(SynthType::Cymbal, 1.5, 1.0, 110, 0.8),
            kick(),
        ], 120);

        assert_eq!(sequence.end_time(), 2.5);
        assert_eq!(sequence.end_beat().unwrap(), big("5"));

        let empty = NoteSequence::new(vec![], 120);
        assert_eq!(empty.end_time(), 0.0);
        assert_eq!(empty.end_beat().unwrap(), big("0"));
    }
}
