//! Modifier masks on both sides of the translation
//!
//! `PlatformModifiers` mirrors `NSEvent.ModifierFlags` (device-independent
//! bits 16..=23); `EngineModifiers` mirrors Rime's `RimeModifier` enum.

use std::fmt;

bitflags::bitflags! {
    /// macOS modifier flags as delivered with a key event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PlatformModifiers: u64 {
        const CAPS_LOCK = 1 << 16;
        const SHIFT = 1 << 17;
        const CONTROL = 1 << 18;
        const OPTION = 1 << 19;
        const COMMAND = 1 << 20;
        const NUMERIC_PAD = 1 << 21;
        const HELP = 1 << 22;
        const FUNCTION = 1 << 23;
    }
}

bitflags::bitflags! {
    /// Engine modifier mask passed alongside a keysym
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EngineModifiers: u32 {
        const SHIFT = 1 << 0;
        const LOCK = 1 << 1;
        const CONTROL = 1 << 2;
        /// Mod1
        const ALT = 1 << 3;
        const MOD2 = 1 << 4;
        const MOD3 = 1 << 5;
        const MOD4 = 1 << 6;
        const MOD5 = 1 << 7;
        const BUTTON1 = 1 << 8;
        const BUTTON2 = 1 << 9;
        const BUTTON3 = 1 << 10;
        const BUTTON4 = 1 << 11;
        const BUTTON5 = 1 << 12;
        /// Set by the engine on events it has consumed
        const HANDLED = 1 << 24;
        /// Set by the engine on events it forwards to the client
        const FORWARD = 1 << 25;
        const SUPER = 1 << 26;
        const HYPER = 1 << 27;
        const META = 1 << 28;
        /// Key-up rather than key-down
        const RELEASE = 1 << 30;
    }
}

/// Engine modifier names in bit order.
///
/// `Handled` and `Forward` are engine-internal and have no configuration name.
pub(crate) const ENGINE_MODIFIER_NAMES: &[(&str, EngineModifiers)] = &[
    ("Shift", EngineModifiers::SHIFT),
    ("Lock", EngineModifiers::LOCK),
    ("Control", EngineModifiers::CONTROL),
    ("Alt", EngineModifiers::ALT),
    ("Mod2", EngineModifiers::MOD2),
    ("Mod3", EngineModifiers::MOD3),
    ("Mod4", EngineModifiers::MOD4),
    ("Mod5", EngineModifiers::MOD5),
    ("Button1", EngineModifiers::BUTTON1),
    ("Button2", EngineModifiers::BUTTON2),
    ("Button3", EngineModifiers::BUTTON3),
    ("Button4", EngineModifiers::BUTTON4),
    ("Button5", EngineModifiers::BUTTON5),
    ("Super", EngineModifiers::SUPER),
    ("Hyper", EngineModifiers::HYPER),
    ("Meta", EngineModifiers::META),
    ("Release", EngineModifiers::RELEASE),
];

/// Platform modifier names in bit order
pub(crate) const PLATFORM_MODIFIER_NAMES: &[(&str, PlatformModifiers)] = &[
    ("Caps_Lock", PlatformModifiers::CAPS_LOCK),
    ("Shift", PlatformModifiers::SHIFT),
    ("Control", PlatformModifiers::CONTROL),
    ("Option", PlatformModifiers::OPTION),
    ("Command", PlatformModifiers::COMMAND),
    ("Numeric_Pad", PlatformModifiers::NUMERIC_PAD),
    ("Help", PlatformModifiers::HELP),
    ("Function", PlatformModifiers::FUNCTION),
];

impl PlatformModifiers {
    /// Build from a raw `NSEvent.modifierFlags` value, dropping device-dependent bits
    pub const fn from_raw(raw: u64) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Check if caps lock is on
    #[inline]
    pub const fn caps_lock(self) -> bool {
        self.contains(Self::CAPS_LOCK)
    }

    /// Check if command is held
    #[inline]
    pub const fn command(self) -> bool {
        self.contains(Self::COMMAND)
    }
}

impl EngineModifiers {
    /// Names of the set bits, in bit order
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        ENGINE_MODIFIER_NAMES
            .iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
    }

    /// True if the release bit is set
    #[inline]
    pub const fn is_release(self) -> bool {
        self.contains(Self::RELEASE)
    }
}

impl fmt::Display for EngineModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.names().collect();
        write!(f, "{}", parts.join("+"))
    }
}

impl fmt::Display for PlatformModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = PLATFORM_MODIFIER_NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        write!(f, "{}", parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_bits_match_appkit() {
        assert_eq!(PlatformModifiers::CAPS_LOCK.bits(), 0x1_0000);
        assert_eq!(PlatformModifiers::SHIFT.bits(), 0x2_0000);
        assert_eq!(PlatformModifiers::CONTROL.bits(), 0x4_0000);
        assert_eq!(PlatformModifiers::OPTION.bits(), 0x8_0000);
        assert_eq!(PlatformModifiers::COMMAND.bits(), 0x10_0000);
        assert_eq!(PlatformModifiers::FUNCTION.bits(), 0x80_0000);
    }

    #[test]
    fn test_from_raw_drops_device_bits() {
        // left shift down: device-dependent bit 1 plus the SHIFT flag
        let mods = PlatformModifiers::from_raw(0x2_0102);
        assert_eq!(mods, PlatformModifiers::SHIFT);
        assert!(mods.shift());
        assert!(!mods.caps_lock());
    }

    #[test]
    fn test_engine_bits_match_rime() {
        assert_eq!(EngineModifiers::SHIFT.bits(), 1);
        assert_eq!(EngineModifiers::LOCK.bits(), 2);
        assert_eq!(EngineModifiers::CONTROL.bits(), 4);
        assert_eq!(EngineModifiers::ALT.bits(), 8);
        assert_eq!(EngineModifiers::SUPER.bits(), 1 << 26);
        assert_eq!(EngineModifiers::RELEASE.bits(), 1 << 30);
    }

    #[test]
    fn test_engine_names_in_bit_order() {
        let mods = EngineModifiers::RELEASE | EngineModifiers::CONTROL | EngineModifiers::SHIFT;
        let names: Vec<_> = mods.names().collect();
        assert_eq!(names, vec!["Shift", "Control", "Release"]);
        assert_eq!(mods.to_string(), "Shift+Control+Release");
    }

    #[test]
    fn test_engine_internal_bits_have_no_name() {
        let mods = EngineModifiers::HANDLED | EngineModifiers::FORWARD;
        assert_eq!(mods.names().count(), 0);
    }

    #[test]
    fn test_platform_display() {
        let mods = PlatformModifiers::COMMAND | PlatformModifiers::SHIFT;
        assert_eq!(mods.to_string(), "Shift+Command");
        assert_eq!(PlatformModifiers::empty().to_string(), "");
    }
}
