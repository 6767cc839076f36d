use crate::libs::messages::Message;
use crate::libs::preferences::{LanguageMode, Preferences, ThemeMode};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum PrefsCommands {
    #[command(about = "Show current preferences")]
    Show,
    #[command(about = "Set the display language (english or korean)")]
    SetLanguage(PrefValueArgs),
    #[command(about = "Set the theme (light, dark, or system)")]
    SetTheme(PrefValueArgs),
}

#[derive(Debug, Args)]
pub struct PrefValueArgs {
    #[arg(required = true)]
    value: String,
}

pub fn cmd(command: PrefsCommands) -> Result<()> {
    let mut preferences = Preferences::load()?;

    match command {
        PrefsCommands::Show => {
            msg_print!(Message::PreferencesHeader);
            println!("  language: {}", preferences.language_mode().as_str());
            println!("  theme:    {}", preferences.theme_mode().as_str());
        }
        PrefsCommands::SetLanguage(args) => {
            let known = ["ENGLISH", "KOREAN"];
            if !known.contains(&args.value.to_ascii_uppercase().as_str()) {
                msg_error!(Message::PreferenceUnknownValue("language".to_string(), args.value));
                return Ok(());
            }
            let mode = LanguageMode::parse(&args.value);
            preferences.set_language_mode(mode)?;
            msg_success!(Message::PreferenceSet("language".to_string(), mode.as_str().to_string()));
        }
        PrefsCommands::SetTheme(args) => {
            let known = ["LIGHT", "DARK", "SYSTEM"];
            if !known.contains(&args.value.to_ascii_uppercase().as_str()) {
                msg_error!(Message::PreferenceUnknownValue("theme".to_string(), args.value));
                return Ok(());
            }
            let mode = ThemeMode::parse(&args.value);
            preferences.set_theme_mode(mode)?;
            msg_success!(Message::PreferenceSet("theme".to_string(), mode.as_str().to_string()));
        }
    }

    Ok(())
}
