//! formkit CLI
//!
//! - `formkit run <scenario.json>`: drive a fresh login form through a
//!   scenario, print the report, exit non-zero when an assertion fails
//! - `formkit render`: print the login screen's element tree as JSON
//! - `formkit theme`: print the resolved theme as TOML

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formkit_app::headless::{run_loaded_scenario, HeadlessHost, HeadlessScenario};
use formkit_core::Platform;
use formkit_theme::{Theme, ThemeConfig, ThemeState};

#[derive(Parser, Debug)]
#[command(name = "formkit")]
#[command(about = "Headless runner for the formkit login form")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scenario file against a fresh login form
    Run {
        /// Scenario JSON file
        scenario: PathBuf,

        /// Also write the report to this (relative) path
        #[arg(long)]
        report: Option<PathBuf>,

        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Print the rendered login screen as JSON
    Render {
        #[command(flatten)]
        theme: ThemeArgs,
    },
    /// Print the resolved theme as TOML
    Theme {
        #[command(flatten)]
        theme: ThemeArgs,
    },
}

#[derive(Args, Debug, Default)]
struct ThemeArgs {
    /// Theme TOML file
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Target platform (ios, android, desktop)
    #[arg(long)]
    platform: Option<String>,
}

impl ThemeArgs {
    /// File values first, then the platform flag on top
    fn resolve(&self) -> Result<Theme> {
        let theme = match &self.theme {
            Some(path) => ThemeConfig::load_from_path(path)
                .and_then(ThemeConfig::into_theme)
                .with_context(|| format!("failed to load theme {}", path.display()))?,
            None => Theme::native(),
        };

        match &self.platform {
            Some(name) => {
                let platform: Platform = name
                    .parse()
                    .with_context(|| format!("invalid --platform `{name}`"))?;
                Ok(theme.with_platform(platform))
            }
            None => Ok(theme),
        }
    }
}

/// Filter directives: `RUST_LOG` when set, otherwise the level picked by
/// `--verbose`
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => directives,
        _ if verbose => "debug".to_string(),
        _ => "warn".to_string(),
    }
}

fn init_logging(verbose: bool) {
    let rust_log = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
    let directives = log_directives(verbose, rust_log);
    let filter = tracing_subscriber::EnvFilter::try_new(&directives).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter `{directives}`: {err}");
        tracing_subscriber::EnvFilter::new("warn")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run {
            scenario,
            report,
            theme,
        } => cmd_run(&scenario, report.as_deref(), &theme),
        Command::Render { theme } => {
            cmd_render(&theme)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Theme { theme } => {
            cmd_theme(&theme)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_theme(args: &ThemeArgs) -> Result<Theme> {
    let theme = args.resolve()?;
    tracing::debug!(platform = %theme.platform, "theme resolved");
    ThemeState::init(theme.clone());
    Ok(theme)
}

fn cmd_run(scenario_path: &Path, report_path: Option<&Path>, args: &ThemeArgs) -> Result<ExitCode> {
    let theme = init_theme(args)?;
    let scenario = HeadlessScenario::from_path(scenario_path)?;

    tracing::info!(
        scenario = %scenario_path.display(),
        steps = scenario.steps.len(),
        "running scenario"
    );

    let mut host = HeadlessHost::new(theme);
    let outcome = run_loaded_scenario(&scenario, &mut host);
    let report = outcome.report();

    report.write_to_writer(&mut std::io::stdout().lock())?;
    if let Some(path) = report_path {
        report
            .write_to_path(path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
    }

    Ok(if outcome.is_failed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn cmd_render(args: &ThemeArgs) -> Result<()> {
    let host = HeadlessHost::new(init_theme(args)?);
    let tree = serde_json::to_string_pretty(&host.render())?;
    println!("{tree}");
    Ok(())
}

fn cmd_theme(args: &ThemeArgs) -> Result<()> {
    let theme = init_theme(args)?;
    print!("{}", ThemeConfig::from_theme(&theme).to_toml()?);
    Ok(())
}
