//! jsonapi-docs - Entry point

use tracing::error;

use jsonapi_docs_cli::{generate, load_config, Command, HELP, VERSION};
use jsonapi_docs_telemetry::{init_logging, LogConfig};

fn main() {
    let args = match Command::parse() {
        Ok(Command::Generate(args)) => args,
        Ok(Command::Help) => {
            print!("{HELP}");
            return;
        }
        Ok(Command::Version) => {
            println!("jsonapi-docs {VERSION}");
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            // The configured subscriber is unknown until the config loads.
            let _ = init_logging(&LogConfig::default());
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.logging.to_log_config()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match generate(&args, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            if config.logging.enabled {
                error!("{e:#}");
            } else {
                eprintln!("{e:#}");
            }
            std::process::exit(1);
        }
    }
}
