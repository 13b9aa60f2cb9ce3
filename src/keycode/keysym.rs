//! Engine keysyms and the keysym name table
//!
//! Rime uses the X11 keysym space: printable ASCII and Latin-1 characters are
//! their own code point, function and navigation keys live at `0xffXX`, and
//! `VoidSymbol` marks "no engine key".

use std::fmt;

/// An engine key code (X11-style keysym)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeySym(u32);

impl KeySym {
    /// Sentinel for keys with no engine equivalent
    pub const VOID: KeySym = KeySym(0x00ff_ffff);

    // TTY function keys
    pub const BACKSPACE: KeySym = KeySym(0xff08);
    pub const TAB: KeySym = KeySym(0xff09);
    pub const LINEFEED: KeySym = KeySym(0xff0a);
    pub const CLEAR: KeySym = KeySym(0xff0b);
    pub const RETURN: KeySym = KeySym(0xff0d);
    pub const PAUSE: KeySym = KeySym(0xff13);
    pub const SCROLL_LOCK: KeySym = KeySym(0xff14);
    pub const SYS_REQ: KeySym = KeySym(0xff15);
    pub const ESCAPE: KeySym = KeySym(0xff1b);
    pub const DELETE: KeySym = KeySym(0xffff);

    // International & multi-key character composition
    pub const MULTI_KEY: KeySym = KeySym(0xff20);
    pub const KANJI: KeySym = KeySym(0xff21);
    pub const MUHENKAN: KeySym = KeySym(0xff22);
    pub const HENKAN_MODE: KeySym = KeySym(0xff23);
    pub const ROMAJI: KeySym = KeySym(0xff24);
    pub const HIRAGANA: KeySym = KeySym(0xff25);
    pub const KATAKANA: KeySym = KeySym(0xff26);
    pub const HIRAGANA_KATAKANA: KeySym = KeySym(0xff27);
    pub const ZENKAKU: KeySym = KeySym(0xff28);
    pub const HANKAKU: KeySym = KeySym(0xff29);
    pub const ZENKAKU_HANKAKU: KeySym = KeySym(0xff2a);
    pub const TOUROKU: KeySym = KeySym(0xff2b);
    pub const MASSYO: KeySym = KeySym(0xff2c);
    pub const KANA_LOCK: KeySym = KeySym(0xff2d);
    pub const KANA_SHIFT: KeySym = KeySym(0xff2e);
    pub const EISU_SHIFT: KeySym = KeySym(0xff2f);
    pub const EISU_TOGGLE: KeySym = KeySym(0xff30);
    pub const CODEINPUT: KeySym = KeySym(0xff37);

    // Cursor control & motion
    pub const HOME: KeySym = KeySym(0xff50);
    pub const LEFT: KeySym = KeySym(0xff51);
    pub const UP: KeySym = KeySym(0xff52);
    pub const RIGHT: KeySym = KeySym(0xff53);
    pub const DOWN: KeySym = KeySym(0xff54);
    pub const PAGE_UP: KeySym = KeySym(0xff55);
    pub const PAGE_DOWN: KeySym = KeySym(0xff56);
    pub const END: KeySym = KeySym(0xff57);
    pub const BEGIN: KeySym = KeySym(0xff58);

    // Misc functions
    pub const SELECT: KeySym = KeySym(0xff60);
    pub const PRINT: KeySym = KeySym(0xff61);
    pub const EXECUTE: KeySym = KeySym(0xff62);
    pub const INSERT: KeySym = KeySym(0xff63);
    pub const UNDO: KeySym = KeySym(0xff65);
    pub const REDO: KeySym = KeySym(0xff66);
    pub const MENU: KeySym = KeySym(0xff67);
    pub const FIND: KeySym = KeySym(0xff68);
    pub const CANCEL: KeySym = KeySym(0xff69);
    pub const HELP: KeySym = KeySym(0xff6a);
    pub const BREAK: KeySym = KeySym(0xff6b);
    pub const MODE_SWITCH: KeySym = KeySym(0xff7e);
    pub const NUM_LOCK: KeySym = KeySym(0xff7f);

    // Keypad
    pub const KP_SPACE: KeySym = KeySym(0xff80);
    pub const KP_TAB: KeySym = KeySym(0xff89);
    pub const KP_ENTER: KeySym = KeySym(0xff8d);
    pub const KP_F1: KeySym = KeySym(0xff91);
    pub const KP_F2: KeySym = KeySym(0xff92);
    pub const KP_F3: KeySym = KeySym(0xff93);
    pub const KP_F4: KeySym = KeySym(0xff94);
    pub const KP_HOME: KeySym = KeySym(0xff95);
    pub const KP_LEFT: KeySym = KeySym(0xff96);
    pub const KP_UP: KeySym = KeySym(0xff97);
    pub const KP_RIGHT: KeySym = KeySym(0xff98);
    pub const KP_DOWN: KeySym = KeySym(0xff99);
    pub const KP_PAGE_UP: KeySym = KeySym(0xff9a);
    pub const KP_PAGE_DOWN: KeySym = KeySym(0xff9b);
    pub const KP_END: KeySym = KeySym(0xff9c);
    pub const KP_BEGIN: KeySym = KeySym(0xff9d);
    pub const KP_INSERT: KeySym = KeySym(0xff9e);
    pub const KP_DELETE: KeySym = KeySym(0xff9f);
    pub const KP_EQUAL: KeySym = KeySym(0xffbd);
    pub const KP_MULTIPLY: KeySym = KeySym(0xffaa);
    pub const KP_ADD: KeySym = KeySym(0xffab);
    pub const KP_SEPARATOR: KeySym = KeySym(0xffac);
    pub const KP_SUBTRACT: KeySym = KeySym(0xffad);
    pub const KP_DECIMAL: KeySym = KeySym(0xffae);
    pub const KP_DIVIDE: KeySym = KeySym(0xffaf);
    pub const KP_0: KeySym = KeySym(0xffb0);

    // Modifier keys
    pub const SHIFT_L: KeySym = KeySym(0xffe1);
    pub const SHIFT_R: KeySym = KeySym(0xffe2);
    pub const CONTROL_L: KeySym = KeySym(0xffe3);
    pub const CONTROL_R: KeySym = KeySym(0xffe4);
    pub const CAPS_LOCK: KeySym = KeySym(0xffe5);
    pub const SHIFT_LOCK: KeySym = KeySym(0xffe6);
    pub const META_L: KeySym = KeySym(0xffe7);
    pub const META_R: KeySym = KeySym(0xffe8);
    pub const ALT_L: KeySym = KeySym(0xffe9);
    pub const ALT_R: KeySym = KeySym(0xffea);
    pub const SUPER_L: KeySym = KeySym(0xffeb);
    pub const SUPER_R: KeySym = KeySym(0xffec);
    pub const HYPER_L: KeySym = KeySym(0xffed);
    pub const HYPER_R: KeySym = KeySym(0xffee);

    // Latin-1 characters the platform table maps to directly
    pub const SPACE: KeySym = KeySym(0x20);
    pub const COMMA: KeySym = KeySym(0x2c);
    pub const MINUS: KeySym = KeySym(0x2d);
    pub const BRACKETLEFT: KeySym = KeySym(0x5b);
    pub const BACKSLASH: KeySym = KeySym(0x5c);
    pub const BRACKETRIGHT: KeySym = KeySym(0x5d);
    pub const UNDERSCORE: KeySym = KeySym(0x5f);
    pub const ASCIITILDE: KeySym = KeySym(0x7e);
    pub const YEN: KeySym = KeySym(0xa5);
    pub const SECTION: KeySym = KeySym(0xa7);

    const F1_CODE: u32 = 0xffbe;

    /// Wrap a raw keysym value
    pub const fn new(code: u32) -> Self {
        KeySym(code)
    }

    /// Keysym for a character: its Unicode scalar value
    pub const fn from_char(c: char) -> Self {
        KeySym(c as u32)
    }

    /// Function key `F<n>` for n in 1..=35
    pub const fn function(n: u8) -> Option<Self> {
        if n >= 1 && n <= 35 {
            Some(KeySym(Self::F1_CODE + n as u32 - 1))
        } else {
            None
        }
    }

    /// Keypad digit `KP_<n>` for n in 0..=9
    pub const fn keypad_digit(n: u8) -> Option<Self> {
        if n <= 9 {
            Some(KeySym(Self::KP_0.0 + n as u32))
        } else {
            None
        }
    }

    /// Raw keysym value
    #[inline]
    pub const fn code(self) -> u32 {
        self.0
    }

    /// True for the `VoidSymbol` sentinel
    #[inline]
    pub const fn is_void(self) -> bool {
        self.0 == Self::VOID.0
    }

    /// True for `space..=asciitilde`
    #[inline]
    pub const fn is_printable_ascii(self) -> bool {
        self.0 >= Self::SPACE.0 && self.0 <= Self::ASCIITILDE.0
    }
}

impl Default for KeySym {
    fn default() -> Self {
        KeySym::VOID
    }
}

impl fmt::Display for KeySym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match super::names::keysym_name(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#06x}", self.0),
        }
    }
}

impl From<KeySym> for u32 {
    fn from(sym: KeySym) -> u32 {
        sym.0
    }
}

/// Names of `0x20..=0x7e`, indexed from `space`
pub(crate) const ASCII_NAMES: [&str; 95] = [
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand",
    "apostrophe", "parenleft", "parenright", "asterisk", "plus", "comma", "minus", "period",
    "slash", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "colon", "semicolon", "less",
    "equal", "greater", "question", "at", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J",
    "K", "L", "M", "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "bracketleft", "backslash", "bracketright", "asciicircum", "underscore", "grave", "a",
    "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z", "braceleft", "bar", "braceright", "asciitilde",
];

/// Names of `0xa0..=0xff`, indexed from `nobreakspace`
pub(crate) const LATIN1_NAMES: [&str; 96] = [
    "nobreakspace", "exclamdown", "cent", "sterling", "currency", "yen", "brokenbar",
    "section", "diaeresis", "copyright", "ordfeminine", "guillemotleft", "notsign", "hyphen",
    "registered", "macron", "degree", "plusminus", "twosuperior", "threesuperior", "acute",
    "mu", "paragraph", "periodcentered", "cedilla", "onesuperior", "masculine",
    "guillemotright", "onequarter", "onehalf", "threequarters", "questiondown", "Agrave",
    "Aacute", "Acircumflex", "Atilde", "Adiaeresis", "Aring", "AE", "Ccedilla", "Egrave",
    "Eacute", "Ecircumflex", "Ediaeresis", "Igrave", "Iacute", "Icircumflex", "Idiaeresis",
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocircumflex", "Otilde", "Odiaeresis", "multiply",
    "Oslash", "Ugrave", "Uacute", "Ucircumflex", "Udiaeresis", "Yacute", "THORN", "ssharp",
    "agrave", "aacute", "acircumflex", "atilde", "adiaeresis", "aring", "ae", "ccedilla",
    "egrave", "eacute", "ecircumflex", "ediaeresis", "igrave", "iacute", "icircumflex",
    "idiaeresis", "eth", "ntilde", "ograve", "oacute", "ocircumflex", "otilde", "odiaeresis",
    "division", "oslash", "ugrave", "uacute", "ucircumflex", "udiaeresis", "yacute", "thorn",
    "ydiaeresis",
];

/// Names of `F1..=F35`
pub(crate) const FUNCTION_KEY_NAMES: [&str; 35] = [
    "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12", "F13", "F14",
    "F15", "F16", "F17", "F18", "F19", "F20", "F21", "F22", "F23", "F24", "F25", "F26", "F27",
    "F28", "F29", "F30", "F31", "F32", "F33", "F34", "F35",
];

/// Names of `KP_0..=KP_9`
pub(crate) const KEYPAD_DIGIT_NAMES: [&str; 10] = [
    "KP_0", "KP_1", "KP_2", "KP_3", "KP_4", "KP_5", "KP_6", "KP_7", "KP_8", "KP_9",
];

/// Non-character keysyms by name.
///
/// Aliases follow their canonical name: the first entry for a keysym is what
/// `keysym_name` reports.
pub(crate) const SPECIAL_KEY_NAMES: &[(&str, KeySym)] = &[
    ("BackSpace", KeySym::BACKSPACE),
    ("Tab", KeySym::TAB),
    ("Linefeed", KeySym::LINEFEED),
    ("Clear", KeySym::CLEAR),
    ("Return", KeySym::RETURN),
    ("Pause", KeySym::PAUSE),
    ("Scroll_Lock", KeySym::SCROLL_LOCK),
    ("Sys_Req", KeySym::SYS_REQ),
    ("Escape", KeySym::ESCAPE),
    ("Delete", KeySym::DELETE),
    ("Multi_key", KeySym::MULTI_KEY),
    ("Codeinput", KeySym::CODEINPUT),
    ("Kanji", KeySym::KANJI),
    ("Muhenkan", KeySym::MUHENKAN),
    ("Henkan_Mode", KeySym::HENKAN_MODE),
    ("Henkan", KeySym::HENKAN_MODE),
    ("Romaji", KeySym::ROMAJI),
    ("Hiragana", KeySym::HIRAGANA),
    ("Katakana", KeySym::KATAKANA),
    ("Hiragana_Katakana", KeySym::HIRAGANA_KATAKANA),
    ("Zenkaku", KeySym::ZENKAKU),
    ("Hankaku", KeySym::HANKAKU),
    ("Zenkaku_Hankaku", KeySym::ZENKAKU_HANKAKU),
    ("Touroku", KeySym::TOUROKU),
    ("Massyo", KeySym::MASSYO),
    ("Kana_Lock", KeySym::KANA_LOCK),
    ("Kana_Shift", KeySym::KANA_SHIFT),
    ("Eisu_Shift", KeySym::EISU_SHIFT),
    ("Eisu_toggle", KeySym::EISU_TOGGLE),
    ("Home", KeySym::HOME),
    ("Left", KeySym::LEFT),
    ("Up", KeySym::UP),
    ("Right", KeySym::RIGHT),
    ("Down", KeySym::DOWN),
    ("Page_Up", KeySym::PAGE_UP),
    ("Prior", KeySym::PAGE_UP),
    ("Page_Down", KeySym::PAGE_DOWN),
    ("Next", KeySym::PAGE_DOWN),
    ("End", KeySym::END),
    ("Begin", KeySym::BEGIN),
    ("Select", KeySym::SELECT),
    ("Print", KeySym::PRINT),
    ("Execute", KeySym::EXECUTE),
    ("Insert", KeySym::INSERT),
    ("Undo", KeySym::UNDO),
    ("Redo", KeySym::REDO),
    ("Menu", KeySym::MENU),
    ("Find", KeySym::FIND),
    ("Cancel", KeySym::CANCEL),
    ("Help", KeySym::HELP),
    ("Break", KeySym::BREAK),
    ("Mode_switch", KeySym::MODE_SWITCH),
    ("Num_Lock", KeySym::NUM_LOCK),
    ("KP_Space", KeySym::KP_SPACE),
    ("KP_Tab", KeySym::KP_TAB),
    ("KP_Enter", KeySym::KP_ENTER),
    ("KP_F1", KeySym::KP_F1),
    ("KP_F2", KeySym::KP_F2),
    ("KP_F3", KeySym::KP_F3),
    ("KP_F4", KeySym::KP_F4),
    ("KP_Home", KeySym::KP_HOME),
    ("KP_Left", KeySym::KP_LEFT),
    ("KP_Up", KeySym::KP_UP),
    ("KP_Right", KeySym::KP_RIGHT),
    ("KP_Down", KeySym::KP_DOWN),
    ("KP_Page_Up", KeySym::KP_PAGE_UP),
    ("KP_Prior", KeySym::KP_PAGE_UP),
    ("KP_Page_Down", KeySym::KP_PAGE_DOWN),
    ("KP_Next", KeySym::KP_PAGE_DOWN),
    ("KP_End", KeySym::KP_END),
    ("KP_Begin", KeySym::KP_BEGIN),
    ("KP_Insert", KeySym::KP_INSERT),
    ("KP_Delete", KeySym::KP_DELETE),
    ("KP_Equal", KeySym::KP_EQUAL),
    ("KP_Multiply", KeySym::KP_MULTIPLY),
    ("KP_Add", KeySym::KP_ADD),
    ("KP_Separator", KeySym::KP_SEPARATOR),
    ("KP_Subtract", KeySym::KP_SUBTRACT),
    ("KP_Decimal", KeySym::KP_DECIMAL),
    ("KP_Divide", KeySym::KP_DIVIDE),
    ("Shift_L", KeySym::SHIFT_L),
    ("Shift_R", KeySym::SHIFT_R),
    ("Control_L", KeySym::CONTROL_L),
    ("Control_R", KeySym::CONTROL_R),
    ("Caps_Lock", KeySym::CAPS_LOCK),
    ("Shift_Lock", KeySym::SHIFT_LOCK),
    ("Meta_L", KeySym::META_L),
    ("Meta_R", KeySym::META_R),
    ("Alt_L", KeySym::ALT_L),
    ("Alt_R", KeySym::ALT_R),
    ("Super_L", KeySym::SUPER_L),
    ("Super_R", KeySym::SUPER_R),
    ("Hyper_L", KeySym::HYPER_L),
    ("Hyper_R", KeySym::HYPER_R),
    ("VoidSymbol", KeySym::VOID),
];
