//! Key events on both sides of the translation

use std::fmt;
use std::str::FromStr;

use super::keysym::KeySym;
use super::modifiers::{EngineModifiers, PlatformModifiers};
use super::names::{parse_engine_keycode_name, parse_engine_modifier_name, KeyNameError};
use super::platform::VirtualKeyCode;

/// A key event as the host delivers it.
///
/// Produced once per physical key event and translated immediately.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlatformKeyEvent {
    pub raw_keycode: VirtualKeyCode,
    /// Typed character, if the event carried one
    pub character: Option<char>,
    pub modifiers: PlatformModifiers,
    pub shift_active: bool,
    pub caps_lock_active: bool,
}

impl PlatformKeyEvent {
    /// Create an event, deriving shift and caps lock state from the modifier flags
    pub const fn new(
        raw_keycode: VirtualKeyCode,
        character: Option<char>,
        modifiers: PlatformModifiers,
    ) -> Self {
        Self {
            raw_keycode,
            character,
            modifiers,
            shift_active: modifiers.shift(),
            caps_lock_active: modifiers.caps_lock(),
        }
    }

    /// Command+key shortcuts belong to the application, not the input method
    pub const fn is_command_shortcut(&self) -> bool {
        self.modifiers.command()
    }
}

/// A key event in the engine's vocabulary: the argument pair of `process_key`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EngineKeyEvent {
    pub keycode: KeySym,
    pub modifiers: EngineModifiers,
}

impl EngineKeyEvent {
    pub const fn new(keycode: KeySym, modifiers: EngineModifiers) -> Self {
        Self { keycode, modifiers }
    }

    /// Event with no modifiers
    pub const fn key(keycode: KeySym) -> Self {
        Self {
            keycode,
            modifiers: EngineModifiers::empty(),
        }
    }

    /// Same key, marked as released
    pub fn released(self) -> Self {
        Self {
            keycode: self.keycode,
            modifiers: self.modifiers | EngineModifiers::RELEASE,
        }
    }

    pub const fn is_release(&self) -> bool {
        self.modifiers.is_release()
    }

    pub const fn is_void(&self) -> bool {
        self.keycode.is_void()
    }

    /// Keys that take a vim-like editor back to command mode:
    /// Escape, Control+c, Control+C, Control+bracketleft
    pub fn is_vim_escape(&self) -> bool {
        if self.keycode == KeySym::ESCAPE {
            return true;
        }
        self.modifiers.contains(EngineModifiers::CONTROL)
            && [
                KeySym::from_char('c'),
                KeySym::from_char('C'),
                KeySym::BRACKETLEFT,
            ]
            .contains(&self.keycode)
    }
}

/// Text form `Modifier+Modifier+key`. Only named modifiers are printed; the
/// engine's `HANDLED` and `FORWARD` bits have no name and are left out, so text
/// of an engine-returned event parses back without them.
impl fmt::Display for EngineKeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.modifiers.names() {
            write!(f, "{}+", name)?;
        }
        write!(f, "{}", self.keycode)
    }
}

impl FromStr for EngineKeyEvent {
    type Err = KeyNameError;

    /// Parse `Modifier+Modifier+key`, e.g. `"Control+Shift+Page_Up"`
    fn from_str(repr: &str) -> Result<Self, Self::Err> {
        let repr = repr.trim();
        if repr.is_empty() {
            return Err(KeyNameError::Empty);
        }

        // the key is the last segment; a literal plus key is spelled "plus"
        let (mods_part, key_part) = match repr.rsplit_once('+') {
            Some((mods, key)) => (Some(mods), key),
            None => (None, repr),
        };

        let mut modifiers = EngineModifiers::empty();
        if let Some(mods) = mods_part {
            for name in mods.split('+') {
                modifiers |= parse_engine_modifier_name(name)?;
            }
        }

        let keycode = parse_key_token(key_part)?;
        Ok(Self { keycode, modifiers })
    }
}

/// A key token is a keysym name or a `0x` hex keysym
fn parse_key_token(token: &str) -> Result<KeySym, KeyNameError> {
    if let Some(hex) = token.strip_prefix("0x") {
        if !hex.is_empty() {
            if let Ok(code) = u32::from_str_radix(hex, 16) {
                return Ok(KeySym::new(code));
            }
        }
    }
    parse_engine_keycode_name(token)
}
