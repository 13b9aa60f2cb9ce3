//! macOS virtual key codes (`kVK_*` in HIToolbox `Events.h`)
//!
//! These are positional: the same physical key reports the same code under
//! every keyboard layout.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::keysym::KeySym;

/// macOS hardware virtual keycode (`NSEvent.keyCode`)
pub type VirtualKeyCode = u16;

// ANSI letters
pub const VK_ANSI_A: VirtualKeyCode = 0x00;
pub const VK_ANSI_S: VirtualKeyCode = 0x01;
pub const VK_ANSI_D: VirtualKeyCode = 0x02;
pub const VK_ANSI_F: VirtualKeyCode = 0x03;
pub const VK_ANSI_H: VirtualKeyCode = 0x04;
pub const VK_ANSI_G: VirtualKeyCode = 0x05;
pub const VK_ANSI_Z: VirtualKeyCode = 0x06;
pub const VK_ANSI_X: VirtualKeyCode = 0x07;
pub const VK_ANSI_C: VirtualKeyCode = 0x08;
pub const VK_ANSI_V: VirtualKeyCode = 0x09;
pub const VK_ISO_SECTION: VirtualKeyCode = 0x0a;
pub const VK_ANSI_B: VirtualKeyCode = 0x0b;
pub const VK_ANSI_Q: VirtualKeyCode = 0x0c;
pub const VK_ANSI_W: VirtualKeyCode = 0x0d;
pub const VK_ANSI_E: VirtualKeyCode = 0x0e;
pub const VK_ANSI_R: VirtualKeyCode = 0x0f;
pub const VK_ANSI_Y: VirtualKeyCode = 0x10;
pub const VK_ANSI_T: VirtualKeyCode = 0x11;
pub const VK_ANSI_1: VirtualKeyCode = 0x12;
pub const VK_ANSI_2: VirtualKeyCode = 0x13;
pub const VK_ANSI_3: VirtualKeyCode = 0x14;
pub const VK_ANSI_4: VirtualKeyCode = 0x15;
pub const VK_ANSI_6: VirtualKeyCode = 0x16;
pub const VK_ANSI_5: VirtualKeyCode = 0x17;
pub const VK_ANSI_EQUAL: VirtualKeyCode = 0x18;
pub const VK_ANSI_9: VirtualKeyCode = 0x19;
pub const VK_ANSI_7: VirtualKeyCode = 0x1a;
pub const VK_ANSI_MINUS: VirtualKeyCode = 0x1b;
pub const VK_ANSI_8: VirtualKeyCode = 0x1c;
pub const VK_ANSI_0: VirtualKeyCode = 0x1d;
pub const VK_ANSI_RIGHT_BRACKET: VirtualKeyCode = 0x1e;
pub const VK_ANSI_O: VirtualKeyCode = 0x1f;
pub const VK_ANSI_U: VirtualKeyCode = 0x20;
pub const VK_ANSI_LEFT_BRACKET: VirtualKeyCode = 0x21;
pub const VK_ANSI_I: VirtualKeyCode = 0x22;
pub const VK_ANSI_P: VirtualKeyCode = 0x23;
pub const VK_RETURN: VirtualKeyCode = 0x24;
pub const VK_ANSI_L: VirtualKeyCode = 0x25;
pub const VK_ANSI_J: VirtualKeyCode = 0x26;
pub const VK_ANSI_QUOTE: VirtualKeyCode = 0x27;
pub const VK_ANSI_K: VirtualKeyCode = 0x28;
pub const VK_ANSI_SEMICOLON: VirtualKeyCode = 0x29;
pub const VK_ANSI_BACKSLASH: VirtualKeyCode = 0x2a;
pub const VK_ANSI_COMMA: VirtualKeyCode = 0x2b;
pub const VK_ANSI_SLASH: VirtualKeyCode = 0x2c;
pub const VK_ANSI_N: VirtualKeyCode = 0x2d;
pub const VK_ANSI_M: VirtualKeyCode = 0x2e;
pub const VK_ANSI_PERIOD: VirtualKeyCode = 0x2f;
pub const VK_TAB: VirtualKeyCode = 0x30;
pub const VK_SPACE: VirtualKeyCode = 0x31;
pub const VK_ANSI_GRAVE: VirtualKeyCode = 0x32;
pub const VK_DELETE: VirtualKeyCode = 0x33;
pub const VK_ESCAPE: VirtualKeyCode = 0x35;
pub const VK_RIGHT_COMMAND: VirtualKeyCode = 0x36;
pub const VK_COMMAND: VirtualKeyCode = 0x37;
pub const VK_SHIFT: VirtualKeyCode = 0x38;
pub const VK_CAPS_LOCK: VirtualKeyCode = 0x39;
pub const VK_OPTION: VirtualKeyCode = 0x3a;
pub const VK_CONTROL: VirtualKeyCode = 0x3b;
pub const VK_RIGHT_SHIFT: VirtualKeyCode = 0x3c;
pub const VK_RIGHT_OPTION: VirtualKeyCode = 0x3d;
pub const VK_RIGHT_CONTROL: VirtualKeyCode = 0x3e;
pub const VK_FUNCTION: VirtualKeyCode = 0x3f;
pub const VK_F17: VirtualKeyCode = 0x40;
pub const VK_ANSI_KEYPAD_DECIMAL: VirtualKeyCode = 0x41;
pub const VK_ANSI_KEYPAD_MULTIPLY: VirtualKeyCode = 0x43;
pub const VK_ANSI_KEYPAD_PLUS: VirtualKeyCode = 0x45;
pub const VK_ANSI_KEYPAD_CLEAR: VirtualKeyCode = 0x47;
pub const VK_VOLUME_UP: VirtualKeyCode = 0x48;
pub const VK_VOLUME_DOWN: VirtualKeyCode = 0x49;
pub const VK_MUTE: VirtualKeyCode = 0x4a;
pub const VK_ANSI_KEYPAD_DIVIDE: VirtualKeyCode = 0x4b;
pub const VK_ANSI_KEYPAD_ENTER: VirtualKeyCode = 0x4c;
pub const VK_ANSI_KEYPAD_MINUS: VirtualKeyCode = 0x4e;
pub const VK_F18: VirtualKeyCode = 0x4f;
pub const VK_F19: VirtualKeyCode = 0x50;
pub const VK_ANSI_KEYPAD_EQUALS: VirtualKeyCode = 0x51;
pub const VK_ANSI_KEYPAD_0: VirtualKeyCode = 0x52;
pub const VK_ANSI_KEYPAD_1: VirtualKeyCode = 0x53;
pub const VK_ANSI_KEYPAD_2: VirtualKeyCode = 0x54;
pub const VK_ANSI_KEYPAD_3: VirtualKeyCode = 0x55;
pub const VK_ANSI_KEYPAD_4: VirtualKeyCode = 0x56;
pub const VK_ANSI_KEYPAD_5: VirtualKeyCode = 0x57;
pub const VK_ANSI_KEYPAD_6: VirtualKeyCode = 0x58;
pub const VK_ANSI_KEYPAD_7: VirtualKeyCode = 0x59;
pub const VK_F20: VirtualKeyCode = 0x5a;
pub const VK_ANSI_KEYPAD_8: VirtualKeyCode = 0x5b;
pub const VK_ANSI_KEYPAD_9: VirtualKeyCode = 0x5c;
pub const VK_JIS_YEN: VirtualKeyCode = 0x5d;
pub const VK_JIS_UNDERSCORE: VirtualKeyCode = 0x5e;
pub const VK_JIS_KEYPAD_COMMA: VirtualKeyCode = 0x5f;
pub const VK_F5: VirtualKeyCode = 0x60;
pub const VK_F6: VirtualKeyCode = 0x61;
pub const VK_F7: VirtualKeyCode = 0x62;
pub const VK_F3: VirtualKeyCode = 0x63;
pub const VK_F8: VirtualKeyCode = 0x64;
pub const VK_F9: VirtualKeyCode = 0x65;
pub const VK_JIS_EISU: VirtualKeyCode = 0x66;
pub const VK_F11: VirtualKeyCode = 0x67;
pub const VK_JIS_KANA: VirtualKeyCode = 0x68;
pub const VK_F13: VirtualKeyCode = 0x69;
pub const VK_F16: VirtualKeyCode = 0x6a;
pub const VK_F14: VirtualKeyCode = 0x6b;
pub const VK_F10: VirtualKeyCode = 0x6d;
pub const VK_F12: VirtualKeyCode = 0x6f;
pub const VK_F15: VirtualKeyCode = 0x71;
pub const VK_HELP: VirtualKeyCode = 0x72;
pub const VK_HOME: VirtualKeyCode = 0x73;
pub const VK_PAGE_UP: VirtualKeyCode = 0x74;
pub const VK_FORWARD_DELETE: VirtualKeyCode = 0x75;
pub const VK_F4: VirtualKeyCode = 0x76;
pub const VK_END: VirtualKeyCode = 0x77;
pub const VK_F2: VirtualKeyCode = 0x78;
pub const VK_PAGE_DOWN: VirtualKeyCode = 0x79;
pub const VK_F1: VirtualKeyCode = 0x7a;
pub const VK_LEFT_ARROW: VirtualKeyCode = 0x7b;
pub const VK_RIGHT_ARROW: VirtualKeyCode = 0x7c;
pub const VK_DOWN_ARROW: VirtualKeyCode = 0x7d;
pub const VK_UP_ARROW: VirtualKeyCode = 0x7e;

const fn ch(c: char) -> KeySym {
    KeySym::from_char(c)
}

const fn f(n: u8) -> KeySym {
    match KeySym::function(n) {
        Some(sym) => sym,
        None => KeySym::VOID,
    }
}

const fn kp(n: u8) -> KeySym {
    match KeySym::keypad_digit(n) {
        Some(sym) => sym,
        None => KeySym::VOID,
    }
}

/// Keys whose engine keysym does not depend on the keyboard layout:
/// modifiers, editing and navigation keys, function keys, keypad, ISO/JIS extras.
pub(crate) const SPECIAL_KEYS: &[(VirtualKeyCode, KeySym)] = &[
    // modifiers
    (VK_CAPS_LOCK, KeySym::CAPS_LOCK),
    (VK_COMMAND, KeySym::SUPER_L),
    (VK_RIGHT_COMMAND, KeySym::SUPER_R),
    (VK_CONTROL, KeySym::CONTROL_L),
    (VK_RIGHT_CONTROL, KeySym::CONTROL_R),
    (VK_FUNCTION, KeySym::HYPER_L),
    (VK_OPTION, KeySym::ALT_L),
    (VK_RIGHT_OPTION, KeySym::ALT_R),
    (VK_SHIFT, KeySym::SHIFT_L),
    (VK_RIGHT_SHIFT, KeySym::SHIFT_R),
    // editing
    (VK_DELETE, KeySym::BACKSPACE),
    (VK_ESCAPE, KeySym::ESCAPE),
    (VK_FORWARD_DELETE, KeySym::DELETE),
    (VK_HELP, KeySym::HELP),
    (VK_RETURN, KeySym::RETURN),
    (VK_SPACE, KeySym::SPACE),
    (VK_TAB, KeySym::TAB),
    // function
    (VK_F1, f(1)),
    (VK_F2, f(2)),
    (VK_F3, f(3)),
    (VK_F4, f(4)),
    (VK_F5, f(5)),
    (VK_F6, f(6)),
    (VK_F7, f(7)),
    (VK_F8, f(8)),
    (VK_F9, f(9)),
    (VK_F10, f(10)),
    (VK_F11, f(11)),
    (VK_F12, f(12)),
    (VK_F13, f(13)),
    (VK_F14, f(14)),
    (VK_F15, f(15)),
    (VK_F16, f(16)),
    (VK_F17, f(17)),
    (VK_F18, f(18)),
    (VK_F19, f(19)),
    (VK_F20, f(20)),
    // cursor
    (VK_UP_ARROW, KeySym::UP),
    (VK_DOWN_ARROW, KeySym::DOWN),
    (VK_LEFT_ARROW, KeySym::LEFT),
    (VK_RIGHT_ARROW, KeySym::RIGHT),
    (VK_PAGE_UP, KeySym::PAGE_UP),
    (VK_PAGE_DOWN, KeySym::PAGE_DOWN),
    (VK_HOME, KeySym::HOME),
    (VK_END, KeySym::END),
    // keypad
    (VK_ANSI_KEYPAD_0, kp(0)),
    (VK_ANSI_KEYPAD_1, kp(1)),
    (VK_ANSI_KEYPAD_2, kp(2)),
    (VK_ANSI_KEYPAD_3, kp(3)),
    (VK_ANSI_KEYPAD_4, kp(4)),
    (VK_ANSI_KEYPAD_5, kp(5)),
    (VK_ANSI_KEYPAD_6, kp(6)),
    (VK_ANSI_KEYPAD_7, kp(7)),
    (VK_ANSI_KEYPAD_8, kp(8)),
    (VK_ANSI_KEYPAD_9, kp(9)),
    (VK_ANSI_KEYPAD_CLEAR, KeySym::CLEAR),
    (VK_ANSI_KEYPAD_DECIMAL, KeySym::KP_DECIMAL),
    (VK_ANSI_KEYPAD_EQUALS, KeySym::KP_EQUAL),
    (VK_ANSI_KEYPAD_MINUS, KeySym::KP_SUBTRACT),
    (VK_ANSI_KEYPAD_MULTIPLY, KeySym::KP_MULTIPLY),
    (VK_ANSI_KEYPAD_PLUS, KeySym::KP_ADD),
    (VK_ANSI_KEYPAD_DIVIDE, KeySym::KP_DIVIDE),
    (VK_ANSI_KEYPAD_ENTER, KeySym::KP_ENTER),
    // ISO / JIS
    (VK_ISO_SECTION, KeySym::SECTION),
    (VK_JIS_YEN, KeySym::YEN),
    (VK_JIS_UNDERSCORE, KeySym::UNDERSCORE),
    (VK_JIS_KEYPAD_COMMA, KeySym::COMMA),
    (VK_JIS_EISU, KeySym::EISU_SHIFT),
    (VK_JIS_KANA, KeySym::KANA_SHIFT),
];

/// Keys whose character depends on the layout, resolved by US-ANSI position.
///
/// Consulted after the typed character, so non-Latin layouts still reach the engine
/// as Latin keysyms.
pub(crate) const POSITIONAL_KEYS: &[(VirtualKeyCode, KeySym)] = &[
    // numbers
    (VK_ANSI_0, ch('0')),
    (VK_ANSI_1, ch('1')),
    (VK_ANSI_2, ch('2')),
    (VK_ANSI_3, ch('3')),
    (VK_ANSI_4, ch('4')),
    (VK_ANSI_5, ch('5')),
    (VK_ANSI_6, ch('6')),
    (VK_ANSI_7, ch('7')),
    (VK_ANSI_8, ch('8')),
    (VK_ANSI_9, ch('9')),
    // punctuation
    (VK_ANSI_RIGHT_BRACKET, ch(']')),
    (VK_ANSI_LEFT_BRACKET, ch('[')),
    (VK_ANSI_COMMA, ch(',')),
    (VK_ANSI_GRAVE, ch('`')),
    (VK_ANSI_PERIOD, ch('.')),
    (VK_ANSI_SEMICOLON, ch(';')),
    (VK_ANSI_QUOTE, ch('\'')),
    (VK_ANSI_BACKSLASH, ch('\\')),
    (VK_ANSI_MINUS, ch('-')),
    (VK_ANSI_SLASH, ch('/')),
    (VK_ANSI_EQUAL, ch('=')),
    // letters
    (VK_ANSI_A, ch('a')),
    (VK_ANSI_B, ch('b')),
    (VK_ANSI_C, ch('c')),
    (VK_ANSI_D, ch('d')),
    (VK_ANSI_E, ch('e')),
    (VK_ANSI_F, ch('f')),
    (VK_ANSI_G, ch('g')),
    (VK_ANSI_H, ch('h')),
    (VK_ANSI_I, ch('i')),
    (VK_ANSI_J, ch('j')),
    (VK_ANSI_K, ch('k')),
    (VK_ANSI_L, ch('l')),
    (VK_ANSI_M, ch('m')),
    (VK_ANSI_N, ch('n')),
    (VK_ANSI_O, ch('o')),
    (VK_ANSI_P, ch('p')),
    (VK_ANSI_Q, ch('q')),
    (VK_ANSI_R, ch('r')),
    (VK_ANSI_S, ch('s')),
    (VK_ANSI_T, ch('t')),
    (VK_ANSI_U, ch('u')),
    (VK_ANSI_V, ch('v')),
    (VK_ANSI_W, ch('w')),
    (VK_ANSI_X, ch('x')),
    (VK_ANSI_Y, ch('y')),
    (VK_ANSI_Z, ch('z')),
];

static SPECIAL_LOOKUP: LazyLock<HashMap<VirtualKeyCode, KeySym>> =
    LazyLock::new(|| SPECIAL_KEYS.iter().copied().collect());

static POSITIONAL_LOOKUP: LazyLock<HashMap<VirtualKeyCode, KeySym>> =
    LazyLock::new(|| POSITIONAL_KEYS.iter().copied().collect());

/// Layout-independent keysym for a key, if it has one
pub fn special_keysym(code: VirtualKeyCode) -> Option<KeySym> {
    SPECIAL_LOOKUP.get(&code).copied()
}

/// US-ANSI keysym for a character key, if it is one
pub fn positional_keysym(code: VirtualKeyCode) -> Option<KeySym> {
    POSITIONAL_LOOKUP.get(&code).copied()
}
