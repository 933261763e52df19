//! Command-line front end for route patterns and route files.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use route_dispatch::config::{load_config, DispatchConfig};
use route_dispatch::dispatch::{Args, Handler};
use route_dispatch::observability::logging;
use route_dispatch::routing::{PatternCache, Router};

#[derive(Parser)]
#[command(name = "route-dispatch")]
#[command(about = "Match, build and dispatch route patterns", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a path against a pattern and print the extracted params
    Match {
        pattern: String,
        path: String,
        #[arg(long)]
        case_sensitive: bool,
    },
    /// Build a path from a pattern and values (JSON literals or plain strings)
    Make {
        pattern: String,
        values: Vec<String>,
    },
    /// Load and validate a route file
    Check {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show which configured route a path dispatches to
    Dispatch {
        #[arg(short, long)]
        config: PathBuf,
        path: String,
    },
}

impl Commands {
    fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Commands::Check { config } | Commands::Dispatch { config, .. } => Some(config),
            Commands::Match { .. } | Commands::Make { .. } => None,
        }
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.command.config_path() {
        Some(path) => load_config(path)?,
        None => DispatchConfig::default(),
    };
    logging::init(&config.observability)?;

    match cli.command {
        Commands::Match {
            pattern,
            path,
            case_sensitive,
        } => {
            let mut router = Router::new();
            if !router.match_path(&pattern, &path, case_sensitive) {
                eprintln!("No match");
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", serde_json::to_string_pretty(&router.params().to_json())?);
        }
        Commands::Make { pattern, values } => {
            let values: Vec<Value> = values
                .into_iter()
                .map(|v| serde_json::from_str(&v).unwrap_or(Value::String(v)))
                .collect();
            match Router::new().make(&pattern, &values) {
                Some(path) => println!("{}", path),
                None => {
                    eprintln!("Not enough values for pattern {}", pattern);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Check { config: path } => {
            println!("{}: {} routes OK", path.display(), config.routes.len());
        }
        Commands::Dispatch { path, .. } => {
            let mut dispatcher = config.dispatcher(&PatternCache::new(), &path);

            // Bind each route to an inspector instead of its class
            for route in &config.routes {
                let pattern = route.pattern.clone();
                let handler = route.handler.clone();
                dispatcher.set(
                    route.pattern.as_str(),
                    Handler::callable(move |args: Args| {
                        json!({
                            "pattern": pattern,
                            "handler": handler,
                            "packed": args.is_packed(),
                            "args": args.as_slice(),
                        })
                    }),
                );
            }

            if !dispatcher.run() {
                eprintln!("No route matched {}", path);
                return Ok(ExitCode::FAILURE);
            }
            let result = dispatcher.result().cloned().unwrap_or(Value::Null);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
