//! Profile management: add, list, activate, and interactive switching.

use dialoguer::Select;

use crate::config::store::{Config, Profile};
use crate::error::ReviewError;

/// Append a new profile. The first profile added becomes active.
pub fn add_profile(
    config: &mut Config,
    name: &str,
    api_key: &str,
    model: &str,
    system_message: &str,
) {
    config.profiles.push(Profile {
        name: name.to_string(),
        api_key: api_key.to_string(),
        model: model.to_string(),
        system_message: system_message.to_string(),
    });

    if config.profiles.len() == 1 {
        config.active_profile = Some(name.to_string());
    }
}

/// Print all profile names, annotating the active one.
pub fn list_profiles(config: &Config) {
    println!("Profiles:");
    for profile in &config.profiles {
        let marker = if Some(&profile.name) == config.active_profile.as_ref() {
            " (active)"
        } else {
            ""
        };
        println!("- {}{marker}", profile.name);
    }
}

/// Activate the profile with the given name. Returns false (leaving the
/// active profile unchanged) when no profile matches.
pub fn set_active_profile(config: &mut Config, name: &str) -> bool {
    if config.profiles.iter().any(|p| p.name == name) {
        config.active_profile = Some(name.to_string());
        true
    } else {
        false
    }
}

/// Present a selection prompt over all profile names and activate the choice.
///
/// Returns the selected name, or None when there are no profiles to choose
/// from.
pub fn switch_profile_interactive(config: &mut Config) -> Result<Option<String>, ReviewError> {
    if config.profiles.is_empty() {
        return Ok(None);
    }

    let names: Vec<&str> = config.profiles.iter().map(|p| p.name.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Select a profile to activate")
        .items(&names)
        .default(0)
        .interact()
        .map_err(ReviewError::PromptFailed)?;

    let name = names[selection].to_string();
    set_active_profile(config, &name);
    Ok(Some(name))
}
