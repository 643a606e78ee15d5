//! Config command handler

use crate::args::ConfigSubcommand;
use gaucho_class::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
///
/// Returns `false` when the command failed.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> bool {
    let outcome = match subcommand {
        None => Ok(show(config, None)),
        Some(ConfigSubcommand::Get { key }) => Ok(show(config, key.as_deref())),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| save(config))
            .map(|()| format!("✓ Set {key} = {value}")),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| save(config))
            .map(|()| format!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    };

    match outcome {
        Ok(message) => {
            println!("{message}");
            true
        }
        Err(e) => {
            eprintln!("{e}");
            false
        }
    }
}

/// One value, or the whole config under a banner
fn show(config: &Config, key: Option<&str>) -> String {
    match key {
        Some(k) => config
            .get(k)
            .unwrap_or_else(|| format!("Unknown config key: '{k}'")),
        None => format!("\n=== Configuration ===\n\n{config}"),
    }
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// Delete the config file after a y/yes confirmation read from `input`
fn reset(input: &mut dyn BufRead) -> Result<String, String> {
    if !Config::get_config_file_path().exists() {
        return Ok("✓ Config is already at defaults".to_string());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if confirmed(&response) {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        Ok("✓ Config reset to defaults".to_string())
    } else {
        Ok("✗ Reset cancelled".to_string())
    }
}

fn confirmed(response: &str) -> bool {
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
