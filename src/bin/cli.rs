//! PJLink CLI
//!
//! Command-line interface for querying and controlling PJLink devices.
//! All protocol work happens in the library; this shell only parses
//! arguments and prints results.

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use pjlink::{Projector, Response};

/// PJLink CLI
#[derive(Parser, Debug)]
#[command(name = "pjlink-cli")]
#[command(about = "Control projectors via the PJLink protocol")]
#[command(version)]
struct Args {
    /// Device address (hostname or IP)
    #[arg(short, long, env = "PJLINK_ADDRESS")]
    address: String,

    /// Device port (0 uses the well-known PJLink port)
    #[arg(short, long, default_value = "0", env = "PJLINK_PORT")]
    port: u16,

    /// Device password
    #[arg(short = 'w', long, default_value = "", env = "PJLINK_PASSWORD")]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display the power status of the device
    Status,

    /// Power the device on or off
    Power {
        /// Desired power state
        state: PowerState,
    },

    /// Query a property by its 4-character command code
    Get {
        /// Command code, e.g. NAME or LAMP
        property: String,
    },

    /// Set a property by its 4-character command code
    Set {
        /// Command code, e.g. INPT
        property: String,

        /// Value to set
        value: String,
    },

    /// Display device identification info
    Info,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PowerState {
    On,
    Off,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    let projector = Projector::new(&args.address, args.port, &args.password);

    let outcome = match args.command {
        Commands::Status => projector.power_status().map(|r| print_response(&r)),
        Commands::Power { state } => {
            let result = match state {
                PowerState::On => projector.power_on(),
                PowerState::Off => projector.power_off(),
            };
            // Report the resulting state either way
            result.and_then(|_| projector.power_status().map(|r| print_response(&r)))
        }
        Commands::Get { property } => projector
            .get_property_values(&property.to_uppercase())
            .map(|values| println!("{}", values.join(" "))),
        Commands::Set { property, value } => {
            let property = property.to_uppercase();
            projector
                .set_property(&property, &value)
                .map(|_| println!("{}: {}", property, value))
        }
        Commands::Info => print_info(&projector),
    };

    if let Err(e) = outcome {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Print a response as a JSON report
fn print_response(response: &Response) {
    match serde_json::to_string(response) {
        Ok(blob) => println!("{}", blob),
        Err(e) => eprintln!("error: failed to serialize response: {}", e),
    }
}

/// Query and print the identification properties
fn print_info(projector: &Projector) -> pjlink::Result<()> {
    for property in ["NAME", "INF1", "INF2", "INFO", "CLSS"] {
        let value = projector.get_property(property)?;
        println!("{}: {}", property, value);
    }
    Ok(())
}
