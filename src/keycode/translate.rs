//! Platform → engine translation
//!
//! Every function here is pure: the result depends only on the arguments.

use super::event::{EngineKeyEvent, PlatformKeyEvent};
use super::keysym::KeySym;
use super::modifiers::{EngineModifiers, PlatformModifiers};
use super::platform::{positional_keysym, special_keysym, VirtualKeyCode};

/// Platform modifier → engine modifier. Platform bits not listed have no engine equivalent.
///
/// The host sets Function on every arrow, navigation and F-key event, so it is
/// not a modifier the engine can see.
const MODIFIER_MAP: [(PlatformModifiers, EngineModifiers); 5] = [
    (PlatformModifiers::CAPS_LOCK, EngineModifiers::LOCK),
    (PlatformModifiers::SHIFT, EngineModifiers::SHIFT),
    (PlatformModifiers::CONTROL, EngineModifiers::CONTROL),
    (PlatformModifiers::OPTION, EngineModifiers::ALT),
    (PlatformModifiers::COMMAND, EngineModifiers::SUPER),
];

/// Modifier keys reported by flags-changed events, in the order the engine sees them
const TRACKED_MODIFIERS: [PlatformModifiers; 4] = [
    PlatformModifiers::SHIFT,
    PlatformModifiers::CONTROL,
    PlatformModifiers::OPTION,
    PlatformModifiers::COMMAND,
];

/// Re-project platform modifier flags onto the engine's mask
pub fn modifiers_to_engine_mask(modifiers: PlatformModifiers) -> EngineModifiers {
    MODIFIER_MAP
        .iter()
        .filter(|(platform, _)| modifiers.contains(*platform))
        .fold(EngineModifiers::empty(), |mask, (_, engine)| mask | *engine)
}

/// Engine keysym for a physical key, or `KeySym::VOID` if it has none
pub fn keycode_from_platform_code(code: VirtualKeyCode) -> KeySym {
    special_keysym(code)
        .or_else(|| positional_keysym(code))
        .unwrap_or_else(|| {
            tracing::trace!(keycode = code, "no engine keysym for platform key");
            KeySym::VOID
        })
}

/// Engine keysym for a typed character.
///
/// Lowercase ASCII letters become uppercase when exactly one of shift and caps
/// lock is active. Control characters produced by Control+`[`, `\`, `]` and `_`
/// map back to their printable keys; other ASCII controls have no keysym.
/// Non-ASCII characters pass through as their scalar value.
pub fn keycode_from_character(character: char, shift: bool, caps_lock: bool) -> KeySym {
    if !character.is_ascii() {
        return KeySym::from_char(character);
    }

    if character.is_ascii_lowercase() && shift != caps_lock {
        return KeySym::from_char(character.to_ascii_uppercase());
    }

    match character as u32 {
        0x20..=0x7e => KeySym::from_char(character),
        0x1b => KeySym::BRACKETLEFT,
        0x1c => KeySym::BACKSLASH,
        0x1d => KeySym::BRACKETRIGHT,
        0x1f => KeySym::MINUS,
        _ => KeySym::VOID,
    }
}

/// Translate a key-down event.
///
/// Resolution order: layout-independent keys, the typed ASCII character, the
/// key's US-ANSI position, a non-ASCII typed character, then `VoidSymbol`.
pub fn translate_key_down(event: &PlatformKeyEvent) -> EngineKeyEvent {
    let keycode = special_keysym(event.raw_keycode)
        .or_else(|| {
            event
                .character
                .filter(char::is_ascii)
                .map(|c| keycode_from_character(c, event.shift_active, event.caps_lock_active))
                .filter(|sym| !sym.is_void())
        })
        .or_else(|| positional_keysym(event.raw_keycode))
        .or_else(|| {
            event
                .character
                .filter(|c| !c.is_ascii())
                .map(KeySym::from_char)
        })
        .unwrap_or_else(|| {
            tracing::trace!(
                keycode = event.raw_keycode,
                character = ?event.character,
                "key-down has no engine keysym"
            );
            KeySym::VOID
        });

    EngineKeyEvent::new(keycode, modifiers_to_engine_mask(event.modifiers))
}

/// Engine events for a modifier-flags change.
///
/// The host reports a flags change after the fact, so when caps lock changed
/// every event in the group carries the lock bit as it was before the change.
/// Releases are ordered before presses, since a release can arrive late with
/// the next press.
pub fn modifier_change_events(
    previous: PlatformModifiers,
    current: PlatformModifiers,
    raw_keycode: VirtualKeyCode,
) -> Vec<EngineKeyEvent> {
    if previous == current {
        return Vec::new();
    }

    let changes = previous.symmetric_difference(current);
    let keycode = keycode_from_platform_code(raw_keycode);
    let mut mask = modifiers_to_engine_mask(current);

    let mut events = Vec::with_capacity(1 + TRACKED_MODIFIERS.len());
    if changes.contains(PlatformModifiers::CAPS_LOCK) {
        mask ^= EngineModifiers::LOCK;
        events.push(EngineKeyEvent::new(keycode, mask));
    }

    let mut releases = Vec::new();
    let mut presses = Vec::new();
    for flag in TRACKED_MODIFIERS {
        if !changes.contains(flag) {
            continue;
        }
        if current.contains(flag) {
            presses.push(EngineKeyEvent::new(keycode, mask));
        } else {
            releases.insert(0, EngineKeyEvent::new(keycode, mask | EngineModifiers::RELEASE));
        }
    }

    events.extend(releases);
    events.extend(presses);
    events
}
