use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use keybinds::cli::{CliArgs, CliCommand, OutputFormat};
use keybinds::config::ResolverConfig;
use keybinds::keymap::{load_action_names_file, ActionNames, KeyBind, KeyBindRepository, LoadReport};

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    keybinds::tracing::init(args.verbose);

    let config = args.resolve_config().map_err(anyhow::Error::msg)?;
    let names = action_names(&config)?;

    let Some(default_path) = config.default_binds.as_deref() else {
        bail!("No default key-bind file; pass --defaults or set default_binds in the config file");
    };

    let mut repo = KeyBindRepository::new(names);
    let mut report = match repo.init_defaults(default_path) {
        Ok(report) => report,
        Err(e) if args.command == CliCommand::Check => {
            println!("defaults: {}", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Failed to load default key binds"),
    };

    if let Some(user_path) = config.user_binds.as_deref() {
        match repo.init_modified_key_binds(user_path) {
            Ok(user_report) => report += user_report,
            Err(e) => {
                eprintln!("Warning: {}", e);
                report.user_missing = true;
            }
        }
    }

    match args.command {
        CliCommand::List { format } => {
            print_binds(&repo.snapshot(), format)?;
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Lookup { key } => match repo.lookup(&key) {
            Some(bind) => {
                println!("{}", bind.action());
                Ok(ExitCode::SUCCESS)
            }
            None => {
                eprintln!("{} is not bound", key);
                Ok(ExitCode::from(1))
            }
        },
        CliCommand::KeysFor { action } => {
            for bind in repo.keys_for_action(&action) {
                println!("{}", bind.key());
            }
            Ok(ExitCode::SUCCESS)
        }
        CliCommand::Check => {
            print_summary(&repo, &report);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Built-in names, extended by the configured table if any
fn action_names(config: &ResolverConfig) -> Result<ActionNames> {
    let mut names = ActionNames::builtin();

    let extra = config
        .action_names
        .clone()
        .or_else(|| keybinds::config_paths::action_names_file().filter(|p| p.exists()));

    if let Some(path) = extra {
        let table = load_action_names_file(&path)
            .with_context(|| format!("Failed to load action names from {}", path.display()))?;
        tracing::info!(
            "Merging action names from {} ({} entries)",
            path.display(),
            table.len()
        );
        names.extend(table);
    }

    Ok(names)
}

fn print_summary(repo: &KeyBindRepository<ActionNames>, report: &LoadReport) {
    println!("defaults: ok");
    if repo.user_path().is_some() {
        let status = if report.user_missing { "unavailable" } else { "ok" };
        println!("user: {}", status);
    }
    println!(
        "{} bindings ({} applied, {} removed, {} ignored)",
        repo.len(),
        report.applied,
        report.removed,
        report.ignored
    );
}

fn print_binds(binds: &[KeyBind], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for bind in binds {
                println!("{}", bind.display_string());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(binds).context("Failed to serialize binds")?
            );
        }
        OutputFormat::Yaml => {
            print!(
                "{}",
                serde_yaml::to_string(binds).context("Failed to serialize binds")?
            );
        }
    }
    Ok(())
}
