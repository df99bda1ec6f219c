//! scriptor - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scriptor::completion::{CompletionClient, GenerationParams};
use scriptor::config::store::{
    DEFAULT_MODEL, parse_max_tokens, parse_temperature, parse_timeout_ms,
};
use scriptor::config::{
    Config, add_profile, config_path, list_profiles, set_active_profile,
    switch_profile_interactive,
};
use scriptor::error::ConfigError;
use scriptor::review::TerminalPrompt;
use scriptor::workflow::{WorkflowOptions, run_workflow};

/// Stage changes, draft the commit message with an LLM, commit, and push.
#[derive(Parser, Debug)]
#[command(name = "scriptor")]
#[command(about = "Stage changes, draft the commit message with an LLM, commit, and push")]
#[command(version)]
struct Cli {
    /// Add a new profile
    #[arg(long = "add-profile", value_name = "NAME")]
    add_profile: Option<String>,

    /// Set the API key for the active profile
    #[arg(long = "set-api-key", value_name = "KEY")]
    set_api_key: Option<String>,

    /// Set the model for the active profile
    #[arg(long = "set-model", value_name = "MODEL")]
    set_model: Option<String>,

    /// Set the system message for the active profile
    #[arg(long = "set-system-message", value_name = "MESSAGE")]
    set_system_message: Option<String>,

    /// Print the current API key for the active profile
    #[arg(long = "print-api-key")]
    print_api_key: bool,

    /// Print the current model for the active profile
    #[arg(long = "print-model")]
    print_model: bool,

    /// Print the current system message for the active profile
    #[arg(long = "print-system-message")]
    print_system_message: bool,

    /// List all profiles
    #[arg(long = "list-profiles")]
    list_profiles: bool,

    /// Set the active profile
    #[arg(long = "set-active-profile", value_name = "NAME")]
    set_active_profile: Option<String>,

    /// Switch profile interactively
    #[arg(long = "switch-profile")]
    switch_profile: bool,

    /// Enable commit message review
    #[arg(long = "enable-review")]
    enable_review: bool,

    /// Disable commit message review
    #[arg(long = "disable-review")]
    disable_review: bool,

    /// Set verbose mode (1 for on, 0 for off)
    #[arg(long = "set-verbose", value_name = "0|1")]
    set_verbose: Option<String>,

    /// Set API request timeout in milliseconds
    #[arg(long = "set-timeout", value_name = "MS")]
    set_timeout: Option<String>,

    /// Set maximum number of tokens for the response
    #[arg(long = "set-max-tokens", value_name = "N")]
    set_max_tokens: Option<String>,

    /// Set temperature for the model (0.0 to 1.0)
    #[arg(long = "set-temperature", value_name = "T")]
    set_temperature: Option<String>,

    /// Set auto push (1 for on, 0 for off)
    #[arg(long = "set-auto-push", value_name = "0|1")]
    set_auto_push: Option<String>,

    /// Enable verbose output for this run
    #[arg(long)]
    verbose: bool,

    /// Skip the push for this run only
    #[arg(long)]
    np: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let path = config_path()?;
    let mut config = Config::load(&path)?;

    // Mutation flags: first match fully handles the invocation.
    if let Some(code) = route_mutation(&cli, &mut config, &path)? {
        return Ok(code);
    }

    // Gate: the workflow needs an active profile with an API key, checked
    // before any git or network activity.
    let profile = config
        .active_profile()
        .ok_or(ConfigError::NoActiveProfile)?
        .clone();
    if profile.api_key.is_empty() {
        return Err(ConfigError::MissingApiKey.into());
    }

    let params = GenerationParams {
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        timeout_ms: config.timeout,
    };
    let client = CompletionClient::new(&profile, params);

    let options = WorkflowOptions {
        review_enabled: config.review_enabled,
        verbose: config.verbose || cli.verbose,
        auto_push: config.auto_push,
        skip_push: cli.np,
        profile_name: profile.name.clone(),
        model: profile.model.clone(),
    };

    let mut prompt = TerminalPrompt;
    run_workflow(Path::new("."), &options, &client, &mut prompt)
        .await
        .context("Commit workflow failed")?;

    Ok(ExitCode::SUCCESS)
}

/// Handle configuration-mutation flags in fixed priority order.
///
/// Returns `Some(exit_code)` when a flag matched (the invocation is fully
/// handled), `None` to fall through to the commit workflow. Completed
/// mutations exit 0; validation failures and unknown profile names report
/// to stderr and exit 1.
fn route_mutation(cli: &Cli, config: &mut Config, path: &Path) -> Result<Option<ExitCode>> {
    if let Some(ref name) = cli.add_profile {
        add_profile(config, name, "", DEFAULT_MODEL, "");
        config.save(path)?;
        println!("Profile \"{name}\" added successfully.");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if let Some(ref key) = cli.set_api_key {
        let Some(profile) = config.active_profile_mut() else {
            return Err(ConfigError::NoActiveProfile.into());
        };
        profile.api_key = key.clone();
        config.save(path)?;
        println!("API key saved successfully.");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if let Some(ref model) = cli.set_model {
        let Some(profile) = config.active_profile_mut() else {
            return Err(ConfigError::NoActiveProfile.into());
        };
        profile.model = model.clone();
        config.save(path)?;
        println!("Model saved successfully: {model}");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if let Some(ref message) = cli.set_system_message {
        let Some(profile) = config.active_profile_mut() else {
            return Err(ConfigError::NoActiveProfile.into());
        };
        profile.system_message = message.clone();
        config.save(path)?;
        println!("System message saved successfully: {message}");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if cli.print_api_key {
        let profile = config
            .active_profile()
            .ok_or(ConfigError::NoActiveProfile)?;
        let shown = if profile.api_key.is_empty() {
            "Not set"
        } else {
            &profile.api_key
        };
        println!("Current API key: {shown}");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if cli.print_model {
        let profile = config
            .active_profile()
            .ok_or(ConfigError::NoActiveProfile)?;
        println!("Current model: {}", profile.model);
        return Ok(Some(ExitCode::SUCCESS));
    }

    if cli.print_system_message {
        let profile = config
            .active_profile()
            .ok_or(ConfigError::NoActiveProfile)?;
        println!("Current system message: {}", profile.system_message);
        return Ok(Some(ExitCode::SUCCESS));
    }

    if cli.list_profiles {
        list_profiles(config);
        return Ok(Some(ExitCode::SUCCESS));
    }

    if let Some(ref name) = cli.set_active_profile {
        return if set_active_profile(config, name) {
            config.save(path)?;
            println!("Active profile set to \"{name}\".");
            Ok(Some(ExitCode::SUCCESS))
        } else {
            eprintln!("Profile \"{name}\" not found.");
            Ok(Some(ExitCode::FAILURE))
        };
    }

    if cli.switch_profile {
        match switch_profile_interactive(config)? {
            Some(name) => {
                config.save(path)?;
                println!("Active profile set to \"{name}\".");
            }
            None => println!("No profiles configured. Add one using --add-profile <name>."),
        }
        return Ok(Some(ExitCode::SUCCESS));
    }

    if cli.enable_review {
        config.review_enabled = true;
        config.save(path)?;
        println!("Commit message review enabled.");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if cli.disable_review {
        config.review_enabled = false;
        config.save(path)?;
        println!("Commit message review disabled.");
        return Ok(Some(ExitCode::SUCCESS));
    }

    if let Some(ref value) = cli.set_verbose {
        let enabled = value == "1";
        config.verbose = enabled;
        config.save(path)?;
        println!(
            "Verbose mode {}.",
            if enabled { "enabled" } else { "disabled" }
        );
        return Ok(Some(ExitCode::SUCCESS));
    }

    if let Some(ref value) = cli.set_timeout {
        return match parse_timeout_ms(value) {
            Some(timeout) => {
                config.timeout = timeout;
                config.save(path)?;
                println!("API request timeout set to {timeout} milliseconds.");
                Ok(Some(ExitCode::SUCCESS))
            }
            None => {
                eprintln!("Invalid timeout value. Please provide a positive integer.");
                Ok(Some(ExitCode::FAILURE))
            }
        };
    }

    if let Some(ref value) = cli.set_max_tokens {
        return match parse_max_tokens(value) {
            Some(max_tokens) => {
                config.max_tokens = max_tokens;
                config.save(path)?;
                println!("Maximum tokens set to {max_tokens}.");
                Ok(Some(ExitCode::SUCCESS))
            }
            None => {
                eprintln!("Invalid max tokens value. Please provide a positive integer.");
                Ok(Some(ExitCode::FAILURE))
            }
        };
    }

    if let Some(ref value) = cli.set_temperature {
        return match parse_temperature(value) {
            Some(temperature) => {
                config.temperature = temperature;
                config.save(path)?;
                println!("Temperature set to {temperature}.");
                Ok(Some(ExitCode::SUCCESS))
            }
            None => {
                eprintln!("Invalid temperature value. Please provide a number between 0 and 1.");
                Ok(Some(ExitCode::FAILURE))
            }
        };
    }

    if let Some(ref value) = cli.set_auto_push {
        let enabled = value == "1";
        config.auto_push = enabled;
        config.save(path)?;
        println!("Auto push {}.", if enabled { "enabled" } else { "disabled" });
        return Ok(Some(ExitCode::SUCCESS));
    }

    Ok(None)
}
