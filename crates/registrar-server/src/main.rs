//! `registrar` binary: serve the web app, seed the catalog, or dump the data.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use registrar_core::catalog::seed_catalog;
use registrar_core::models::SeedOutcome;
use registrar_core::traits::IRegistryStorage;
use registrar_core::RegistrarConfig;
use registrar_observability::init_tracing;
use registrar_server::{inspect, server};

#[derive(Parser)]
#[command(name = "registrar", version, about = "Student course registration service")]
struct Cli {
    /// TOML config file; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Install the seed course catalog if the catalog is empty.
    InitCourses,
    /// Print all students and courses.
    Inspect,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RegistrarConfig::load(cli.config.as_deref()).context("loading configuration")?;
    init_tracing(&config.observability);

    let storage = server::open_storage(&config)
        .with_context(|| format!("opening database at {}", config.storage.db_path))?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("building tokio runtime")?;
            runtime
                .block_on(server::serve(config, storage))
                .context("serving HTTP")?;
        }
        Command::InitCourses => match storage.seed_courses(&seed_catalog())? {
            SeedOutcome::AlreadySeeded { existing } => {
                println!("Courses already initialized ({existing} present).");
            }
            SeedOutcome::Seeded { inserted } => {
                println!("Courses initialized successfully ({inserted} added).");
            }
        },
        Command::Inspect => {
            print!("{}", inspect::render_report(storage.as_ref())?);
        }
    }
    Ok(())
}
