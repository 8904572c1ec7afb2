use std::io::BufRead;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::calculator::{CalcResult, evaluate, group_digits, is_calculator_input};
use crate::config::{AppConfig, config, config_path, validate_config};
use crate::session::Session;

#[derive(Parser)]
#[command(name = "calcdgtl")]
#[command(about = "A keypad calculator with degree-based trig")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a single expression
    Eval {
        /// Expression as typed on the keypad, e.g. "3+4×2" or "sin90"
        expression: String,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay key presses and print the resulting display
    Press {
        /// Key labels, e.g. 3 + 4 × 2 =
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Check the config file for problems
    CheckConfig,
}

/// Run the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = config();

    match cli.command {
        Some(Commands::Eval { expression, json }) => eval_command(&expression, json, &config),
        Some(Commands::Press { keys }) => press_command(&keys, &config),
        Some(Commands::CheckConfig) => check_config_command(&config),
        None => stdin_command(&config),
    }
}

/// Apply the presentation settings to a successful display string.
pub fn render_display(display: &str, config: &AppConfig) -> String {
    if config.group_digits {
        group_digits(display)
    } else {
        display.to_string()
    }
}

fn render_result(result: &CalcResult, config: &AppConfig) -> String {
    if result.is_success() {
        render_display(&result.display(), config)
    } else {
        config.error_text.clone()
    }
}

fn eval_command(expression: &str, json: bool, config: &AppConfig) -> Result<()> {
    if !is_calculator_input(expression) {
        tracing::warn!("'{}' contains symbols that are not on the keypad", expression);
    }
    let result = evaluate(expression);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_result(&result, config));
    }

    if let Some(error) = result.error() {
        anyhow::bail!("Failed to evaluate '{}': {}", expression, error);
    }
    Ok(())
}

fn press_command(keys: &[String], config: &AppConfig) -> Result<()> {
    let mut session = Session::from_config(config);
    for key in keys {
        session.press_label(key)?;
    }

    if config.show_history
        && let Some(history) = session.visible_history()
    {
        println!("{}", history);
    }

    if session.is_error() {
        println!("{}", session.display());
    } else {
        println!("{}", render_display(session.display(), config));
    }
    Ok(())
}

fn check_config_command(config: &AppConfig) -> Result<()> {
    match config_path() {
        Ok(path) if path.exists() => println!("Config file: {}", path.display()),
        Ok(path) => println!("Config file: {} (not found, using defaults)", path.display()),
        Err(e) => println!("{}", e),
    }

    let warnings = validate_config(config);
    if warnings.is_empty() {
        println!("No problems found");
    }
    for warning in &warnings {
        println!("{}: {}", warning.field, warning.message);
    }
    Ok(())
}

/// Evaluate one expression per stdin line until EOF.
fn stdin_command(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result = evaluate(&line);
        if !result.is_success() {
            tracing::info!("{}: {}", line.trim(), result.display());
        }
        println!("{}", render_result(&result, config));
    }
    Ok(())
}
