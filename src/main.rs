use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use squirrel_keys::cli::{CliArgs, CliCommand};
use squirrel_keys::config::SquirrelSettings;
use squirrel_keys::keybinding::{load_key_bindings, KeyBinder};
use squirrel_keys::keycode::{
    engine_modifier_names, key_names, modifier_change_events, platform_modifier_names,
    translate_key_down, EngineKeyEvent, PlatformKeyEvent,
};

fn print_event(event: &EngineKeyEvent) {
    println!(
        "{}\tkeycode={:#06x} modifiers={:#010x}",
        event,
        event.keycode.code(),
        event.modifiers.bits()
    );
}

fn check_settings(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => squirrel_keys::config_paths::settings_file()
            .context("no Rime user directory available")?,
    };

    let settings = SquirrelSettings::load_from(&path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    let user_bindings = settings
        .key_bindings()
        .with_context(|| format!("bad key binding in {}", path.display()))?;

    let binder = KeyBinder::with_bindings(load_key_bindings(&settings));
    println!("{}: ok", path.display());
    println!("  keyboard_layout: {}", settings.keyboard_layout);
    println!("  chord_duration: {:?}", settings.chord_duration());
    println!("  app_options: {} apps", settings.app_options.len());
    println!(
        "  key_bindings: {} user, {} active",
        user_bindings.len(),
        binder.len()
    );
    Ok(())
}

fn run(command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Translate {
            keycode,
            character,
            modifiers,
        } => {
            let event = PlatformKeyEvent::new(keycode, character, modifiers.unwrap_or_default());
            if event.is_command_shortcut() {
                tracing::info!("Command shortcuts are passed to the application");
            }
            print_event(&translate_key_down(&event));
        }
        CliCommand::Flags { keycode, from, to } => {
            let events =
                modifier_change_events(from.unwrap_or_default(), to.unwrap_or_default(), keycode);
            if events.is_empty() {
                println!("(no change)");
            }
            for event in &events {
                print_event(event);
            }
        }
        CliCommand::Parse { repr } => {
            let event: EngineKeyEvent = repr
                .parse()
                .with_context(|| format!("cannot parse {:?}", repr))?;
            print_event(&event);
        }
        CliCommand::Names { modifiers } => {
            if modifiers {
                println!("# engine");
                for (name, flag) in engine_modifier_names() {
                    println!("{}\t{:#010x}", name, flag.bits());
                }
                println!("# platform");
                for (name, flag) in platform_modifier_names() {
                    println!("{}\t{:#010x}", name, flag.bits());
                }
            } else {
                for (name, sym) in key_names() {
                    println!("{}\t{:#06x}", name, sym.code());
                }
            }
        }
        CliCommand::Check { path } => check_settings(path)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.log_file {
        squirrel_keys::tracing::init();
    } else {
        squirrel_keys::tracing::init_console();
    }

    run(args.command)
}
