use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

use zeal_deploy::config::{ZealDeployConfig, CONFIG_FILE};
use zeal_deploy::notifier::{AudioCue, CompletionNotifier, NullCue, TerminalChime};
use zeal_deploy::render;
use zeal_deploy::session::Session;
use zeal_deploy::telemetry::init_telemetry;

#[derive(Parser)]
#[command(name = "zeal-deploy")]
#[command(about = "Simulated deployment progress display")]
#[command(long_about = "Zeal Deploy plays a fixed sequence of deployment stages on randomized \
                       timers, then reveals a synthetic tracking number with a celebratory \
                       finish. There is no real deployment behind it; it is timing theater. \
                       Get started with 'zeal-deploy run'.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the simulated deployment in the terminal
    Run {
        /// Stream snapshots as JSON lines instead of the emoji display
        #[arg(long, help = "Emit one JSON snapshot per transition on stdout")]
        json: bool,
        /// Suppress the completion chime
        #[arg(long, help = "Disable the audio cue for this run")]
        quiet: bool,
    },
    /// List the configured deployment stages
    Stages,
    /// Write a default zeal-deploy.toml to the working directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, help = "Overwrite zeal-deploy.toml if it already exists")]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ZealDeployConfig::load()?;
    init_telemetry(&config.observability)?;

    match cli.command {
        Some(Commands::Run { json, quiet }) => run_deployment(config, json, quiet).await,
        Some(Commands::Stages) => {
            print!("{}", render::render_catalog(&config.catalog()));
            Ok(())
        }
        Some(Commands::Init { force }) => init_config(force),
        None => {
            print_overview(&config);
            Ok(())
        }
    }
}

async fn run_deployment(config: ZealDeployConfig, json: bool, quiet: bool) -> Result<()> {
    let catalog = config.catalog();
    let mut session = Session::start(catalog.clone(), config.schedule())?;
    let mut receiver = session.subscribe();

    let cue: Box<dyn AudioCue> = if config.audio.enabled && !quiet {
        Box::new(TerminalChime)
    } else {
        Box::new(NullCue)
    };
    let mut notifier = CompletionNotifier::new(cue);

    if !json {
        println!("🚀 ZEAL AUTOMATED DEPLOY");
        println!("========================");
        println!();
        print!("{}", render::render_timeline(&catalog, &session.snapshot()));
        println!();
    }

    loop {
        let snapshot = receiver.borrow_and_update().clone();
        if json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!("{}", render::render_status_line(&catalog, &snapshot));
        }
        notifier.observe(&snapshot);
        if snapshot.done {
            break;
        }

        tokio::select! {
            changed = receiver.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                session.stop();
                if !json {
                    println!();
                    println!("🛑 Display interrupted; session torn down.");
                }
                return Ok(());
            }
        }
    }

    let final_snapshot = session.wait().await;
    if json {
        return Ok(());
    }

    println!();
    print!("{}", render::render_timeline(&catalog, &final_snapshot));
    println!();
    if let Some(card) = render::render_completion_card(&final_snapshot) {
        print!("{card}");
    }
    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    if Path::new(CONFIG_FILE).exists() && !force {
        anyhow::bail!("{CONFIG_FILE} already exists; pass --force to overwrite");
    }
    ZealDeployConfig::default().save_to_file(CONFIG_FILE)?;
    println!("📝 Wrote default configuration to {CONFIG_FILE}");
    Ok(())
}

fn print_overview(config: &ZealDeployConfig) {
    println!("🚀 ZEAL DEPLOY - Simulated Deployment Progress");
    println!("==============================================");
    println!();
    println!("Plays a staged deployment sequence on randomized timers and");
    println!("reveals a tracking number when the final stage lands.");
    println!();
    print!("{}", render::render_catalog(&config.catalog()));
    println!();
    println!("📊 Quick start:");
    println!("   zeal-deploy run            # play the deployment display");
    println!("   zeal-deploy run --json     # stream progress snapshots as JSON");
    println!("   zeal-deploy stages         # list the configured stages");
    println!("   zeal-deploy init           # write a default zeal-deploy.toml");
}
