//! Command-line argument parsing
//!
//! Supports:
//! - Translating a key-down or modifier change the way the input method does
//! - Parsing key-binding text
//! - Listing the documented key and modifier names
//! - Checking a settings file

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::keycode::{parse_platform_modifier_name, PlatformModifiers, VirtualKeyCode};

/// Inspect macOS to Rime key translation
#[derive(Parser, Debug)]
#[command(name = "squirrel-keys", version, about = "Inspect macOS to Rime key translation")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Also write logs to the Rime user directory
    #[arg(long, global = true)]
    pub log_file: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommand {
    /// Translate a key-down event
    Translate {
        /// Virtual key code, decimal or 0x hex
        #[arg(value_parser = parse_keycode)]
        keycode: VirtualKeyCode,

        /// Typed character, literal or U+XXXX
        #[arg(long = "char", value_name = "CHAR", value_parser = parse_character)]
        character: Option<char>,

        /// Modifiers held, e.g. Shift,Command
        #[arg(long, value_name = "MODS", value_parser = parse_platform_modifiers)]
        modifiers: Option<PlatformModifiers>,
    },

    /// Translate a modifier-flags change
    Flags {
        /// Virtual key code of the modifier key, decimal or 0x hex
        #[arg(value_parser = parse_keycode)]
        keycode: VirtualKeyCode,

        /// Modifiers before the change
        #[arg(long, value_name = "MODS", value_parser = parse_platform_modifiers)]
        from: Option<PlatformModifiers>,

        /// Modifiers after the change
        #[arg(long, value_name = "MODS", value_parser = parse_platform_modifiers)]
        to: Option<PlatformModifiers>,
    },

    /// Parse key-binding text such as Control+Page_Up
    Parse {
        #[arg(value_name = "KEY")]
        repr: String,
    },

    /// List documented key names
    Names {
        /// List modifier names instead
        #[arg(long)]
        modifiers: bool,
    },

    /// Validate a settings file (default: the user's squirrel.yaml)
    Check {
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

/// Parse a virtual key code in decimal or `0x` hex
pub fn parse_keycode(text: &str) -> Result<VirtualKeyCode, String> {
    let text = text.trim();
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => VirtualKeyCode::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed.map_err(|e| format!("invalid key code {:?}: {}", text, e))
}

/// Parse a single character, or `U+XXXX` for one that is hard to type
pub fn parse_character(text: &str) -> Result<char, String> {
    if let Some(hex) = text.strip_prefix("U+").or_else(|| text.strip_prefix("u+")) {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| format!("invalid code point {:?}", text));
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected one character, got {:?}", text)),
    }
}

/// Parse platform modifier names separated by `,` or `+`
pub fn parse_platform_modifiers(text: &str) -> Result<PlatformModifiers, String> {
    text.split([',', '+'])
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .try_fold(PlatformModifiers::empty(), |mods, name| {
            parse_platform_modifier_name(name)
                .map(|flag| mods | flag)
                .map_err(|e| e.to_string())
        })
}
