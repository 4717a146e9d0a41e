//! # Moods
//!
//! Each mood pairs a 10-note pentatonic scale with an oscillator waveform.
//! Frequencies are in Hz; the tables are fixed and part of the scoring
//! contract (a character's note is `scale[code % 10]`).

use serde::{Deserialize, Serialize};

/// Notes per scale.
pub const SCALE_LEN: usize = 10;

/// Oscillator waveform a synthesizer should use for a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    /// Pure sine.
    Sine,
    /// Bright sawtooth.
    Sawtooth,
    /// Soft triangle.
    Triangle,
}

/// The listening mood: scale register plus timbre.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Mood {
    /// C major pentatonic around middle C.
    #[default]
    Classic = 0,
    /// C minor pentatonic, low octaves.
    Dark = 1,
    /// C major pentatonic, high octaves.
    Ambient = 2,
    /// E major pentatonic.
    Fantasy = 3,
}

/// C major pentatonic from C4.
const CLASSIC_SCALE: [f64; SCALE_LEN] = [
    261.63, 293.66, 329.63, 392.00, 440.00, 523.25, 587.33, 659.25, 783.99, 880.00,
];

/// C minor pentatonic, lower octaves.
const DARK_SCALE: [f64; SCALE_LEN] = [
    130.81, 155.56, 174.61, 196.00, 233.08, 261.63, 311.13, 349.23, 392.00, 466.16,
];

/// High C major pentatonic.
const AMBIENT_SCALE: [f64; SCALE_LEN] = [
    523.25, 587.33, 659.25, 783.99, 880.00, 1046.50, 1174.66, 1318.51, 1567.98, 1760.00,
];

/// E major pentatonic.
const FANTASY_SCALE: [f64; SCALE_LEN] = [
    329.63, 369.99, 415.30, 493.88, 554.37, 659.25, 739.99, 830.61, 987.77, 1108.73,
];

impl Mood {
    /// The mood's 10-note frequency table.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> &'static [f64; SCALE_LEN] {
        match self {
            Self::Classic => &CLASSIC_SCALE,
            Self::Dark => &DARK_SCALE,
            Self::Ambient => &AMBIENT_SCALE,
            Self::Fantasy => &FANTASY_SCALE,
        }
    }

    /// The waveform this mood is voiced with.
    #[inline]
    #[must_use]
    pub const fn waveform(self) -> Waveform {
        match self {
            Self::Classic | Self::Ambient => Waveform::Sine,
            Self::Dark => Waveform::Sawtooth,
            Self::Fantasy => Waveform::Triangle,
        }
    }

    /// Converts from u8. Values past the last mood saturate to `Fantasy`.
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Classic,
            1 => Self::Dark,
            2 => Self::Ambient,
            _ => Self::Fantasy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scale_has_ten_ascending_notes() {
        for mood in [Mood::Classic, Mood::Dark, Mood::Ambient, Mood::Fantasy] {
            let scale = mood.scale();
            assert_eq!(scale.len(), SCALE_LEN);
            for pair in scale.windows(2) {
                assert!(pair[0] < pair[1], "{mood:?} scale should ascend");
            }
        }
    }

    #[test]
    fn test_waveform_per_mood() {
        assert_eq!(Mood::Classic.waveform(), Waveform::Sine);
        assert_eq!(Mood::Dark.waveform(), Waveform::Sawtooth);
        assert_eq!(Mood::Ambient.waveform(), Waveform::Sine);
        assert_eq!(Mood::Fantasy.waveform(), Waveform::Triangle);
    }

    #[test]
    fn test_dark_sits_below_classic() {
        let classic = Mood::Classic.scale();
        let dark = Mood::Dark.scale();
        assert!(dark[0] < classic[0]);
        assert!(dark[SCALE_LEN - 1] < classic[SCALE_LEN - 1]);
    }
}
