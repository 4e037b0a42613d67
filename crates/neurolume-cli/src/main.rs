//! Neurolume CLI: region painting, particle animation, and benchmarking.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "neurolume")]
#[command(version, about = "Neurolume: brain region highlighting and surface particle flow")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the zones of the built-in or configured region table.
    Regions {
        /// Path to a scene config (TOML or JSON).
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Paint one region and print summary statistics.
    Paint {
        /// Region name, or "All" / "None" to reset.
        #[arg(short, long)]
        region: String,

        /// Path to a scene config (TOML or JSON).
        #[arg(short, long)]
        config: Option<String>,

        /// Path to a JSON mesh. Defaults to a procedural brain ellipsoid.
        #[arg(short, long)]
        mesh: Option<String>,
    },

    /// Run the frame loop and record frames for the browser viewer.
    Animate {
        /// Number of frames to record.
        #[arg(short, long, default_value_t = 120)]
        frames: u32,

        /// Output JSON file path.
        #[arg(short, long, default_value = "neurolume_frames.json")]
        output: String,

        /// Region to highlight for the whole run.
        #[arg(short, long)]
        region: Option<String>,

        /// Path to a scene config (TOML or JSON).
        #[arg(short, long)]
        config: Option<String>,

        /// Path to a JSON mesh. Defaults to a procedural brain ellipsoid.
        #[arg(short, long)]
        mesh: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (brain_ellipsoid, unit_sphere, dense_brain, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a scene config or mesh file.
    Validate {
        /// Path to a .toml/.json config or a .json mesh.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Regions { config } => commands::regions(config.as_deref()),
        Commands::Paint { region, config, mesh } => {
            commands::paint(&region, config.as_deref(), mesh.as_deref())
        }
        Commands::Animate {
            frames,
            output,
            region,
            config,
            mesh,
        } => commands::animate(
            frames,
            &output,
            region.as_deref(),
            config.as_deref(),
            mesh.as_deref(),
        ),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
