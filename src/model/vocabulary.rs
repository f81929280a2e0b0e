use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FixtureError;

/*
    Synth types understood by the play service, drums and sound effects included.
    Serialized by their lowercase wire names, e.g. "kick" or "hihat".
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthType {
    Sine,
    Square,
    Sawtooth,
    Triangle,
    Noise,
    Fm,
    Granular,
    Wavetable,
    Kick,
    Snare,
    #[serde(rename = "hihat")]
    HiHat,
    Cymbal,
    Swoosh,
    Zap,
    Chime,
    Burst,
    Pad,
    Texture,
    Drone,
}

impl SynthType {
    pub const ALL: [SynthType; 19] = [
        SynthType::Sine,
        SynthType::Square,
        SynthType::Sawtooth,
        SynthType::Triangle,
        SynthType::Noise,
        SynthType::Fm,
        SynthType::Granular,
        SynthType::Wavetable,
        SynthType::Kick,
        SynthType::Snare,
        SynthType::HiHat,
        SynthType::Cymbal,
        SynthType::Swoosh,
        SynthType::Zap,
        SynthType::Chime,
        SynthType::Burst,
        SynthType::Pad,
        SynthType::Texture,
        SynthType::Drone,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SynthType::Sine => "sine",
            SynthType::Square => "square",
            SynthType::Sawtooth => "sawtooth",
            SynthType::Triangle => "triangle",
            SynthType::Noise => "noise",
            SynthType::Fm => "fm",
            SynthType::Granular => "granular",
            SynthType::Wavetable => "wavetable",
            SynthType::Kick => "kick",
            SynthType::Snare => "snare",
            SynthType::HiHat => "hihat",
            SynthType::Cymbal => "cymbal",
            SynthType::Swoosh => "swoosh",
            SynthType::Zap => "zap",
            SynthType::Chime => "chime",
            SynthType::Burst => "burst",
            SynthType::Pad => "pad",
            SynthType::Texture => "texture",
            SynthType::Drone => "drone",
        }
    }

    pub fn is_drum(&self) -> bool {
        matches!(self, SynthType::Kick | SynthType::Snare | SynthType::HiHat | SynthType::Cymbal)
    }
}

impl fmt::Display for SynthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Synth names are matched exactly, same as the service does
impl FromStr for SynthType {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SynthType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| FixtureError::UnknownSynthType(s.to_string()))
    }
}

/*
    Named effect chains applied by the play service. Only the name travels in the payload;
    what each chain contains is up to the service.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectsPreset {
    // Studio
    Studio,
    ConcertHall,
    LiveStage,
    TightMix,
    // Ambient
    Ambient,
    Dreamy,
    Spacious,
    // Vintage
    Vintage,
    AnalogWarmth,
    RetroEcho,
    // Creative
    Psychedelic,
    Distorted,
    Filtered,
    LushChorus,
}

impl EffectsPreset {
    pub const ALL: [EffectsPreset; 14] = [
        EffectsPreset::Studio,
        EffectsPreset::ConcertHall,
        EffectsPreset::LiveStage,
        EffectsPreset::TightMix,
        EffectsPreset::Ambient,
        EffectsPreset::Dreamy,
        EffectsPreset::Spacious,
        EffectsPreset::Vintage,
        EffectsPreset::AnalogWarmth,
        EffectsPreset::RetroEcho,
        EffectsPreset::Psychedelic,
        EffectsPreset::Distorted,
        EffectsPreset::Filtered,
        EffectsPreset::LushChorus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EffectsPreset::Studio => "studio",
            EffectsPreset::ConcertHall => "concert_hall",
            EffectsPreset::LiveStage => "live_stage",
            EffectsPreset::TightMix => "tight_mix",
            EffectsPreset::Ambient => "ambient",
            EffectsPreset::Dreamy => "dreamy",
            EffectsPreset::Spacious => "spacious",
            EffectsPreset::Vintage => "vintage",
            EffectsPreset::AnalogWarmth => "analog_warmth",
            EffectsPreset::RetroEcho => "retro_echo",
            EffectsPreset::Psychedelic => "psychedelic",
            EffectsPreset::Distorted => "distorted",
            EffectsPreset::Filtered => "filtered",
            EffectsPreset::LushChorus => "lush_chorus",
        }
    }
}

impl fmt::Display for EffectsPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Preset lookup is case-insensitive on the service side, so "Studio" is fine
impl FromStr for EffectsPreset {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        EffectsPreset::ALL
            .iter()
            .find(|p| p.as_str() == name)
            .copied()
            .ok_or_else(|| FixtureError::UnknownEffectsPreset(s.to_string()))
    }
}
