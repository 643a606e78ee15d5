//! Command-line interface entry point for `GauchoClass`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gaucho_class::config::Config;
use gaucho_class::core::dataset::source_for;
use gaucho_class::core::session::{show_intro_once, FileIntroFlag};
use gaucho_class::logger::{Level, Setup};
use gaucho_class::{info, Catalog};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // The stored config is what `config` subcommands edit and save; CLI
    // overrides only go into the per-run copy
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    let setup = logging_setup(&args, &config);
    if !setup.apply() {
        if let Some(path) = &setup.file {
            eprintln!("✗ Failed to initialize file logging at: {}", path.display());
        }
    }

    let json = args.wants_json();
    let ok = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults)
        }
        Command::Departments { .. } => load_catalog(&config, json).is_some_and(|catalog| {
            commands::catalog::departments(&catalog, json);
            true
        }),
        Command::Courses { department, .. } => {
            load_catalog(&config, json).is_some_and(|catalog| {
                commands::catalog::courses(&catalog, &department, json);
                true
            })
        }
        Command::Show {
            department,
            number,
            all_offerings,
            ..
        } => load_catalog(&config, json).is_some_and(|catalog| {
            commands::show::run(&catalog, &department, &number, all_offerings, json)
        }),
        Command::Report {
            department,
            number,
            format,
            output,
        } => load_catalog(&config, json).is_some_and(|catalog| {
            commands::report::run(
                &catalog,
                &department,
                &number,
                &format,
                output.as_deref(),
                &config,
            )
        }),
    };
    exit_code(ok)
}

/// Show the intro on first use, then load the configured dataset
///
/// The intro is held back while output is JSON so it stays parseable; it
/// then shows on the next plain run. Returns `None` after reporting a failed
/// load.
fn load_catalog(config: &Config, json: bool) -> Option<Catalog> {
    if !json {
        let mut intro = FileIntroFlag::new(Config::get_intro_marker_path());
        show_intro_once(&mut intro, print_intro);
    }

    let source = source_for(&config.data.source);
    let catalog = Catalog::load(source.as_ref());
    if let Some(err) = catalog.error() {
        eprintln!("✗ Could not load courses: {err}");
        return None;
    }
    info!("{} course records ready", catalog.records().len());
    Some(catalog)
}

/// Resolve runtime logging from CLI flags, falling back to config
///
/// `--debug` forces debug level; verbose is on if either the flag or the
/// config asks for it; `--log-file` wins over the configured file.
fn logging_setup(args: &Cli, config: &Config) -> Setup {
    let level = if args.debug_flag {
        Level::Debug
    } else {
        args.log_level
            .map(Level::from)
            .or_else(|| config.logging.level.parse().ok())
            .unwrap_or(Level::Warn)
    };

    let file = args.log_file.clone().or_else(|| {
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file))
    });

    Setup {
        level,
        verbose: args.verbose || config.logging.verbose,
        file,
    }
}

/// Banner goes to stderr so piped command output stays clean
fn print_intro() {
    eprintln!("Welcome to GauchoClass!");
    eprintln!("Browse courses by department, then pick a course number to see its");
    eprintln!("grade distribution. Try `gauchoclass departments` to get started.\n");
}

const fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
