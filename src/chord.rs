//! Chord typing
//!
//! Chord-typing schemas read a group of keys pressed together as one stroke.
//! Key-downs are collected here; once no new key arrives within the chord
//! duration, the whole group is released at once.

use std::time::{Duration, Instant};

use crate::keycode::{EngineKeyEvent, KeySym};

/// Most keys tracked in one chord
pub const KEY_ROLL_OVER: usize = 50;

/// Chord duration when settings give none
pub const DEFAULT_CHORD_DURATION: Duration = Duration::from_millis(100);

const CHORDING_MODIFIER_KEYS: [KeySym; 6] = [
    KeySym::CONTROL_L,
    KeySym::CONTROL_R,
    KeySym::ALT_L,
    KeySym::ALT_R,
    KeySym::SHIFT_L,
    KeySym::SHIFT_R,
];

/// Printable ASCII plus the left and right Control, Alt and Shift keys
pub fn is_chording_key(keycode: KeySym) -> bool {
    keycode.is_printable_ascii() || CHORDING_MODIFIER_KEYS.contains(&keycode)
}

/// Keys held for the current chord, with the deadline for releasing them
#[derive(Debug, Clone)]
pub struct ChordBuffer {
    keys: Vec<EngineKeyEvent>,
    duration: Duration,
    deadline: Option<Instant>,
}

impl Default for ChordBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CHORD_DURATION)
    }
}

impl ChordBuffer {
    /// Create an empty buffer. A zero duration falls back to the default.
    pub fn new(duration: Duration) -> Self {
        let duration = if duration.is_zero() {
            DEFAULT_CHORD_DURATION
        } else {
            duration
        };
        Self {
            keys: Vec::with_capacity(KEY_ROLL_OVER),
            duration,
            deadline: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Add a key to the chord and re-arm the deadline.
    ///
    /// Returns false when the key is already held or the roll-over limit is
    /// reached; the deadline is left alone in that case.
    pub fn record(&mut self, event: EngineKeyEvent, now: Instant) -> bool {
        if self.keys.iter().any(|held| held.keycode == event.keycode) {
            return false;
        }
        if self.keys.len() >= KEY_ROLL_OVER {
            tracing::debug!(keycode = %event.keycode, "chord roll-over limit reached");
            return false;
        }

        self.keys.push(event);
        self.deadline = Some(now + self.duration);
        true
    }

    /// Feed a key the engine handled while chord typing is on.
    ///
    /// Chording keys join the chord. Any other key press abandons it.
    pub fn observe(&mut self, event: EngineKeyEvent, now: Instant) {
        if is_chording_key(event.keycode) {
            self.record(event, now);
        } else if !event.is_release() {
            self.clear();
        }
    }

    /// True once the deadline has passed with keys still held
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.deadline = None;
    }

    /// Empty the chord, returning a release event for every held key in press order
    pub fn take_release_events(&mut self) -> Vec<EngineKeyEvent> {
        self.deadline = None;
        self.keys.drain(..).map(EngineKeyEvent::released).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::EngineModifiers;

    fn key(c: char) -> EngineKeyEvent {
        EngineKeyEvent::key(KeySym::from_char(c))
    }

    #[test]
    fn test_chording_keys() {
        assert!(is_chording_key(KeySym::SPACE));
        assert!(is_chording_key(KeySym::from_char('a')));
        assert!(is_chording_key(KeySym::ASCIITILDE));
        assert!(is_chording_key(KeySym::SHIFT_R));
        assert!(is_chording_key(KeySym::ALT_L));
        assert!(!is_chording_key(KeySym::RETURN));
        assert!(!is_chording_key(KeySym::SUPER_L));
        assert!(!is_chording_key(KeySym::new(0x4e2d)));
    }

    #[test]
    fn test_zero_duration_uses_default() {
        assert_eq!(ChordBuffer::new(Duration::ZERO).duration(), DEFAULT_CHORD_DURATION);
        assert_eq!(ChordBuffer::default().duration(), Duration::from_millis(100));
    }

    #[test]
    fn test_record_and_release() {
        let start = Instant::now();
        let mut chord = ChordBuffer::default();
        assert!(chord.record(key('a'), start));
        assert!(chord.record(key('s'), start + Duration::from_millis(20)));
        assert_eq!(chord.len(), 2);

        let released = chord.take_release_events();
        assert_eq!(released.len(), 2);
        assert_eq!(released[0].keycode, KeySym::from_char('a'));
        assert_eq!(released[1].keycode, KeySym::from_char('s'));
        assert!(released.iter().all(EngineKeyEvent::is_release));
        assert!(chord.is_empty());
        assert_eq!(chord.deadline(), None);
    }

    #[test]
    fn test_release_keeps_modifiers() {
        let mut chord = ChordBuffer::default();
        chord.record(
            EngineKeyEvent::new(KeySym::from_char('A'), EngineModifiers::SHIFT),
            Instant::now(),
        );
        let released = chord.take_release_events();
        assert_eq!(
            released[0].modifiers,
            EngineModifiers::SHIFT | EngineModifiers::RELEASE
        );
    }

    #[test]
    fn test_duplicates_ignored() {
        let now = Instant::now();
        let mut chord = ChordBuffer::default();
        assert!(chord.record(key('a'), now));
        assert!(!chord.record(key('a'), now));
        assert_eq!(chord.len(), 1);
    }

    #[test]
    fn test_roll_over_limit() {
        let now = Instant::now();
        let mut chord = ChordBuffer::default();
        for code in 0x20..0x20 + KEY_ROLL_OVER as u32 {
            assert!(chord.record(EngineKeyEvent::key(KeySym::new(code)), now));
        }
        assert!(!chord.record(key('~'), now));
        assert_eq!(chord.len(), KEY_ROLL_OVER);
    }

    #[test]
    fn test_deadline_rearms_on_each_key() {
        let start = Instant::now();
        let mut chord = ChordBuffer::new(Duration::from_millis(50));
        chord.record(key('a'), start);
        assert_eq!(chord.deadline(), Some(start + Duration::from_millis(50)));
        assert!(!chord.is_expired(start + Duration::from_millis(40)));

        let later = start + Duration::from_millis(40);
        chord.record(key('b'), later);
        assert!(!chord.is_expired(start + Duration::from_millis(60)));
        assert!(chord.is_expired(later + Duration::from_millis(50)));
    }

    #[test]
    fn test_empty_chord_never_expires() {
        let chord = ChordBuffer::default();
        assert!(!chord.is_expired(Instant::now() + Duration::from_secs(10)));
    }

    #[test]
    fn test_observe_non_chording_press_clears() {
        let now = Instant::now();
        let mut chord = ChordBuffer::default();
        chord.observe(key('a'), now);
        chord.observe(EngineKeyEvent::key(KeySym::RETURN).released(), now);
        assert_eq!(chord.len(), 1);

        chord.observe(EngineKeyEvent::key(KeySym::RETURN), now);
        assert!(chord.is_empty());
    }
}
