use clap::{Parser, Subcommand};
use modboot::app::cli::{self, DEV_MODE_VAR, MODULE_VERSION_VAR};
use modboot::{AppError, LaunchConfig};

#[derive(Parser)]
#[command(name = "modboot")]
#[command(version)]
#[command(about = "Fetch a versioned WebAssembly module and hand it to a host runtime", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve the module and run it
    #[clap(visible_alias = "l")]
    Launch {
        /// Module version to fetch from the production endpoint
        version: Option<String>,
        /// Fetch from the local development endpoint instead
        #[arg(long)]
        dev: bool,
    },
    /// Print the retrieval target without fetching anything
    #[clap(visible_alias = "r")]
    Resolve {
        /// Module version to interpolate into the production endpoint
        version: Option<String>,
        /// Resolve the local development endpoint instead
        #[arg(long)]
        dev: bool,
    },
}

/// Assemble the launch configuration from the parsed arguments and the
/// ambient process environment.
fn config_from(dev: bool, version: Option<String>) -> Result<LaunchConfig, AppError> {
    let ambient_dev = std::env::var(DEV_MODE_VAR).ok();
    let ambient_version = std::env::var(MODULE_VERSION_VAR).ok();
    cli::launch_config_from(dev, version, ambient_dev.as_deref(), ambient_version)
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Launch { version, dev } => {
            // A rejected retrieval has already rendered its body; it is a
            // graceful stop, not a process fault.
            config_from(dev, version).and_then(|config| modboot::launch(&config)).map(|_| ())
        }
        Commands::Resolve { version, dev } => config_from(dev, version).map(|config| {
            println!("{}", modboot::resolve(&config));
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
