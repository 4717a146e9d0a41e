//! # Scoring
//!
//! Maps page text to a sequence of note events a synthesizer can play.
//!
//! Timing model (milliseconds, derived from the speed setting):
//! a note's gap to the next event is `(1.1 - speed) * 200`, a rest's gap is
//! `(1.1 - speed) * 400`, so whitespace reads as phrasing. Notes hold for
//! 600 ms with a 50 ms attack and a 500 ms decay.

use serde::{Deserialize, Serialize};

use crate::mood::{Mood, Waveform, SCALE_LEN};

/// Note hold time in milliseconds.
const NOTE_DURATION_MS: f64 = 600.0;
/// Attack ramp length in milliseconds.
const ATTACK_MS: f64 = 50.0;
/// Decay tail length in milliseconds.
const DECAY_MS: f64 = 500.0;
/// Envelope peak gain before the master gain is applied.
const PEAK_GAIN: f64 = 0.5;
/// Master gain scale; keeps full volume soft.
const MASTER_GAIN_SCALE: f64 = 0.2;
/// Gap factor for sounding characters.
const NOTE_GAP_MS: f64 = 200.0;
/// Gap factor for whitespace rests.
const REST_GAP_MS: f64 = 400.0;
/// Speed is subtracted from this base, so speed 1.0 still leaves a gap.
const GAP_BASE: f64 = 1.1;

/// Listening settings for one session.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scale and timbre selection.
    pub mood: Mood,
    /// Playback speed in [0, 1]; higher is faster.
    pub speed: f64,
    /// Volume in [0, 1].
    pub volume: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mood: Mood::Classic,
            speed: 0.5,
            volume: 0.5,
        }
    }
}

impl Settings {
    /// Copy with speed and volume clamped into [0, 1].
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            mood: self.mood,
            speed: self.speed.clamp(0.0, 1.0),
            volume: self.volume.clamp(0.0, 1.0),
        }
    }

    /// The master gain a synthesizer should apply to every note.
    #[inline]
    #[must_use]
    pub fn master_gain(&self) -> f64 {
        self.volume.clamp(0.0, 1.0) * MASTER_GAIN_SCALE
    }
}

/// A sounding note.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    /// Oscillator frequency in Hz, from the mood's scale.
    pub frequency_hz: f64,
    /// Oscillator waveform, from the mood.
    pub waveform: Waveform,
    /// Hold time in milliseconds.
    pub duration_ms: f64,
    /// Attack ramp in milliseconds.
    pub attack_ms: f64,
    /// Decay tail in milliseconds.
    pub decay_ms: f64,
    /// Envelope peak gain before master gain.
    pub peak_gain: f64,
}

/// One scored character: a note or a rest, plus the gap to the next event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoteEvent {
    /// Index of the character in the source text.
    ///
    /// External consumers highlight the page per character, so this index
    /// must track the plain string exactly.
    pub char_index: usize,
    /// The note to play, or `None` for a whitespace rest.
    pub note: Option<Note>,
    /// Milliseconds until the next event.
    pub gap_ms: f64,
}

/// Scores one character under the given settings.
fn score_char(index: usize, c: char, settings: &Settings) -> NoteEvent {
    let speed = settings.speed.clamp(0.0, 1.0);
    if c.is_whitespace() {
        return NoteEvent {
            char_index: index,
            note: None,
            gap_ms: (GAP_BASE - speed) * REST_GAP_MS,
        };
    }

    let scale = settings.mood.scale();
    let note_index = (u32::from(c) as usize) % SCALE_LEN;
    NoteEvent {
        char_index: index,
        note: Some(Note {
            frequency_hz: scale[note_index],
            waveform: settings.mood.waveform(),
            duration_ms: NOTE_DURATION_MS,
            attack_ms: ATTACK_MS,
            decay_ms: DECAY_MS,
            peak_gain: PEAK_GAIN,
        }),
        gap_ms: (GAP_BASE - speed) * NOTE_GAP_MS,
    }
}

/// Scores a whole text in one call.
#[must_use]
pub fn score(text: &str, settings: &Settings) -> Vec<NoteEvent> {
    text.chars()
        .enumerate()
        .map(|(i, c)| score_char(i, c, settings))
        .collect()
}

/// A caller-owned listening session: text, settings, and a cursor.
///
/// Replaces ambient playback state with a value the caller constructs per
/// session and drops when done. Independent sessions never interact.
#[derive(Clone, Debug)]
pub struct Session {
    /// The page text being played.
    text: Vec<char>,
    /// Current settings; adjustable mid-session.
    settings: Settings,
    /// Next character to score.
    cursor: usize,
}

impl Session {
    /// Starts a session over the given text.
    #[must_use]
    pub fn new(text: &str, settings: Settings) -> Self {
        Self {
            text: text.chars().collect(),
            settings: settings.clamped(),
            cursor: 0,
        }
    }

    /// Scores the next character and advances the cursor.
    ///
    /// Returns `None` at the end of the text; callers that loop rewind and
    /// continue.
    pub fn next_event(&mut self) -> Option<NoteEvent> {
        let c = *self.text.get(self.cursor)?;
        let event = score_char(self.cursor, c, &self.settings);
        self.cursor += 1;
        Some(event)
    }

    /// Moves the cursor back to the start of the text.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Current cursor position, for progress display.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Whether the session has played through the whole text.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Adjusts settings mid-session; takes effect from the next event.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings.clamped();
    }

    /// The active settings.
    #[inline]
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_is_deterministic() {
        let settings = Settings::default();
        assert_eq!(
            score("Some page text.", &settings),
            score("Some page text.", &settings)
        );
    }

    #[test]
    fn test_whitespace_scores_as_rest_with_longer_gap() {
        let settings = Settings::default();
        let events = score("a b", &settings);
        assert!(events[0].note.is_some());
        assert!(events[1].note.is_none());
        assert!(events[2].note.is_some());
        assert!(events[1].gap_ms > events[0].gap_ms);
    }

    #[test]
    fn test_notes_come_from_the_mood_scale() {
        for mood in [Mood::Classic, Mood::Dark, Mood::Ambient, Mood::Fantasy] {
            let settings = Settings {
                mood,
                ..Settings::default()
            };
            for event in score("The lamp burns, slowly.", &settings) {
                if let Some(note) = event.note {
                    assert!(mood.scale().contains(&note.frequency_hz));
                    assert_eq!(note.waveform, mood.waveform());
                }
            }
        }
    }

    #[test]
    fn test_same_character_same_note() {
        let settings = Settings::default();
        let events = score("aba", &settings);
        let first = events[0].note.unwrap();
        let third = events[2].note.unwrap();
        assert_eq!(first.frequency_hz, third.frequency_hz);
    }

    #[test]
    fn test_faster_speed_shortens_gaps() {
        let slow = Settings {
            speed: 0.0,
            ..Settings::default()
        };
        let fast = Settings {
            speed: 1.0,
            ..Settings::default()
        };
        let slow_events = score("ab", &slow);
        let fast_events = score("ab", &fast);
        assert!(fast_events[0].gap_ms < slow_events[0].gap_ms);
        // Even at full speed a gap remains.
        assert!(fast_events[0].gap_ms > 0.0);
    }

    #[test]
    fn test_char_indices_track_the_text() {
        let events = score("one two", &Settings::default());
        let indices: Vec<usize> = events.iter().map(|e| e.char_index).collect();
        assert_eq!(indices, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_session_walks_the_text_once() {
        let mut session = Session::new("ab c", Settings::default());
        let mut count = 0;
        while let Some(event) = session.next_event() {
            assert_eq!(event.char_index, count);
            count += 1;
        }
        assert_eq!(count, 4);
        assert!(session.is_finished());

        session.rewind();
        assert_eq!(session.position(), 0);
        assert!(session.next_event().is_some());
    }

    #[test]
    fn test_session_clamps_settings() {
        let session = Session::new(
            "x",
            Settings {
                mood: Mood::Dark,
                speed: 7.0,
                volume: -1.0,
            },
        );
        assert!(session.settings().speed <= 1.0);
        assert!(session.settings().volume >= 0.0);
        assert!(session.settings().master_gain().abs() < f64::EPSILON);
    }

    #[test]
    fn test_master_gain_is_soft() {
        let settings = Settings {
            volume: 1.0,
            ..Settings::default()
        };
        assert!((settings.master_gain() - 0.2).abs() < 1e-12);
    }
}
