/*
    Hand-written drum sequences for poking at the play_notes tool.
    Notes are listed in playback order; times are in seconds.
 */

use crate::model::{EffectsPreset, NoteEvent, NoteSequence, SynthType};

const TEMPO: u32 = 120;

// Plain drum synthesis, no presets. Should come out as drums rather than sine waves.
pub fn direct_drums() -> NoteSequence {
    NoteSequence::new(vec![
        NoteEvent::new(SynthType::Kick, 0.0, 0.1, 127, 0.9),
        NoteEvent::new(SynthType::Snare, 0.5, 0.1, 110, 0.8),
        NoteEvent::new(SynthType::HiHat, 1.0, 0.05, 80, 0.6),
        NoteEvent::new(SynthType::Cymbal, 1.5, 1.0, 110, 0.8),
    ], TEMPO)
}

// Same kit on a looser grid, for the consolidated playback path
pub fn consolidated_drums() -> NoteSequence {
    NoteSequence::new(vec![
        NoteEvent::new(SynthType::Kick, 0.0, 0.1, 127, 0.9),
        NoteEvent::new(SynthType::HiHat, 0.5, 0.05, 80, 0.6),
        NoteEvent::new(SynthType::Snare, 1.0, 0.1, 110, 0.8),
        NoteEvent::new(SynthType::Cymbal, 2.0, 1.0, 110, 0.8),
    ], TEMPO)
}

// One preset per hit
pub fn drums_with_effects() -> NoteSequence {
    NoteSequence::new(vec![
        NoteEvent::new(SynthType::Kick, 0.0, 0.1, 127, 0.9).with_effects(EffectsPreset::Studio),
        NoteEvent::new(SynthType::Snare, 0.5, 0.1, 120, 0.8).with_effects(EffectsPreset::ConcertHall),
        NoteEvent::new(SynthType::HiHat, 1.0, 0.05, 100, 0.6).with_effects(EffectsPreset::Vintage),
        NoteEvent::new(SynthType::Cymbal, 1.5, 1.0, 110, 0.7).with_effects(EffectsPreset::Ambient),
    ], TEMPO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::midi_utils;

    fn all() -> Vec<NoteSequence> {
        vec![direct_drums(), consolidated_drums(), drums_with_effects()]
    }

    #[test]
    fn values_in_range() {
        for sequence in all() {
            assert!(sequence.validate().is_ok());
            for note in sequence.notes.iter() {
                assert!(note.velocity <= midi_utils::MAX_VELOCITY);
                assert!(note.synth_amplitude >= 0.0 && note.synth_amplitude <= 1.0);
                assert!(note.synth_type.is_drum());
            }
        }
    }

    #[test]
    fn basic_drums_have_no_presets() {
        for sequence in vec![direct_drums(), consolidated_drums()] {
            assert_eq!(sequence.notes.len(), 4);
            assert_eq!(sequence.tempo, 120);
            assert!(!sequence.has_effects());
        }
    }

    #[test]
    fn every_effects_hit_has_a_preset() {
        let presets: Vec<_> = drums_with_effects().notes.iter().map(|n| n.effects_preset).collect();
        assert_eq!(presets, vec![
            Some(EffectsPreset::Studio),
            Some(EffectsPreset::ConcertHall),
            Some(EffectsPreset::Vintage),
            Some(EffectsPreset::Ambient),
        ]);
    }

    #[test]
    fn consolidated_kit_order() {
        let kit: Vec<_> = consolidated_drums().notes.iter().map(|n| n.synth_type).collect();
        assert_eq!(kit, vec![SynthType::Kick, SynthType::HiHat, SynthType::Snare, SynthType::Cymbal]);
        assert_eq!(consolidated_drums().end_time(), 3.0);
    }
}
