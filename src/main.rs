use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use nu_ansi_term::Color;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oss::{render, Config, Error, LicenseRegistry, ManifestStore, SpdxRegistry};

#[derive(Parser)]
#[command(name = "oss", version)]
#[command(about = "Tools for managing Open Source assets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize project
    Init,
    /// Add asset
    Add {
        /// SPDX license identifier, e.g. MIT
        license: String,
        /// Path of the vendored file
        file: String,
        /// Free-text description
        description: Option<String>,
    },
    /// Stop tracking a file
    Rm {
        file: String,
    },
    /// Display information about a file
    Show {
        file: String,
    },
    /// List assets of the project
    #[command(alias = "list")]
    Status,
    /// List SPDX licenses, optionally only those matching a pattern
    #[command(alias = "list-licenses")]
    Licenses {
        term: Option<String>,
    },
    /// Update SPDX licenses list
    Update,
    /// Display current version
    Version,
}

/// Initialize tracing with output to stderr so stdout carries only command output
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "oss=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", Color::Red.bold().paint("error:"), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Option<Commands>, config: &Config) -> anyhow::Result<()> {
    let registry = SpdxRegistry::from_config(config);

    let Some(command) = command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Init => {
            let mut store = ManifestStore::new(&config.manifest_path, registry);
            println!("Downloading SPDX licenses list...");
            let outcome = store.init().await?;
            if outcome.created {
                println!("Manifest created at {}", store.path().display());
            } else {
                println!("Manifest loaded: {} assets", store.assets().len());
            }
            println!("{} bytes downloaded", outcome.downloaded);
        }
        Commands::Update => {
            println!("Downloading SPDX licenses list...");
            let bytes = registry.refresh().await?;
            println!("{} bytes downloaded", bytes);
        }
        Commands::Add {
            license,
            file,
            description,
        } => {
            let mut store = ManifestStore::open(&config.manifest_path, registry)?;
            match store.add_licensed(&license, file, description.unwrap_or_default()) {
                Ok(asset) => {
                    println!("{}", render::asset_row(&asset));
                    println!("Manifest saved");
                }
                Err(e) if e.is_not_found() => {
                    let mut message =
                        format!("License {} is not registered in SPDX database.", license);
                    if let Ok(suggestion) = store.registry().search_around(&license) {
                        message.push_str(&format!(
                            " Did you mean {} ({})?",
                            suggestion.identifier, suggestion.name
                        ));
                    }
                    anyhow::bail!(message);
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Rm { file } => {
            let mut store = ManifestStore::open(&config.manifest_path, registry)?;
            match store.remove(&file)? {
                Some(asset) => println!("{} is no longer tracked", asset.file),
                None => return Err(Error::asset_not_found(file).into()),
            }
        }
        Commands::Show { file } => {
            let store = ManifestStore::open(&config.manifest_path, registry)?;
            let asset = store.get(&file)?;
            println!("{}", render::asset_row(asset));
        }
        Commands::Status => {
            let store = ManifestStore::open(&config.manifest_path, registry)?;
            print!("{}", render::status(store.assets(), |a| a.file_exists()));
        }
        Commands::Licenses { term } => match term {
            Some(term) => print!("{}", render::match_list(&registry.search_matching(&term)?)),
            None => print!("{}", render::license_list(&registry.all()?)),
        },
        Commands::Version => {
            println!("oss {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
