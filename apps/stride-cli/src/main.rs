use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use stride_common::CharacterConfig;
use stride_host::{Script, Session};
use stride_input::InputBindings;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stride-cli",
    about = "Drive the first-person locomotion controller from the command line"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Print the default key binding table as YAML
    Bindings,
    /// Print the default character config as YAML
    Config,
    /// Play an input script against a simulated character
    Run {
        /// YAML input script
        script: PathBuf,
        /// Character config YAML (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Key binding table YAML (first-person layout when omitted)
        #[arg(short, long)]
        bindings: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Info => {
            println!("stride-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", stride_common::crate_info());
            println!("input: {}", stride_input::crate_info());
            println!("controller: {}", stride_controller::crate_info());
            println!("host: {}", stride_host::crate_info());
        }
        Commands::Bindings => {
            print!("{}", InputBindings::first_person().to_yaml()?);
        }
        Commands::Config => {
            print!("{}", CharacterConfig::default().to_yaml()?);
        }
        Commands::Run {
            script,
            config,
            bindings,
            json,
        } => {
            let config = match config {
                Some(path) => CharacterConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => CharacterConfig::default(),
            };
            let bindings = match bindings {
                Some(path) => {
                    let data = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading bindings {}", path.display()))?;
                    InputBindings::from_yaml_str(&data)
                        .with_context(|| format!("parsing bindings {}", path.display()))?
                }
                None => InputBindings::first_person(),
            };
            let script = Script::load(&script)
                .with_context(|| format!("loading script {}", script.display()))?;

            tracing::debug!(frames = script.frame_count(), "script loaded");
            let mut session = Session::new(&config, bindings);
            let report = session.run_script(&script)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "frames={} elapsed={:.3}s position=({:.2}, {:.2}, {:.2})",
                    report.frames,
                    report.elapsed_seconds,
                    report.position.x,
                    report.position.y,
                    report.position.z
                );
                println!(
                    "yaw={:.2} pitch={:.2} capsule=(r {:.1}, hh {:.1})",
                    report.yaw, report.pitch, report.capsule.radius, report.capsule.half_height
                );
                println!(
                    "max_walk_speed={} input_mode={:?} cursor_visible={} jumping={}",
                    report.max_walk_speed, report.input_mode, report.cursor_visible, report.jumping
                );
                println!(
                    "primary={} secondary={} sprint={} ui_only={} commands={}",
                    report.controller.primary_down(),
                    report.controller.secondary_down(),
                    report.controller.modifier_down(),
                    report.controller.ui_only_mode(),
                    report.commands
                );
            }
        }
    }

    Ok(())
}
