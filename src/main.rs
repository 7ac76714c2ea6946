// flowgen — n8n workflow generator backed by a chat-completion model
// License: Apache-2.0

use clap::{Parser, Subcommand};
use flowgen::config::Config;
use flowgen::generator::{GenerateError, Generation, Generator};
use flowgen::provider::http::HTTPProvider;
use std::path::PathBuf;
use std::sync::Arc;

const LOGO: &str = "🤖";

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(
    name = "flowgen",
    about = "flowgen — n8n workflow generator backed by a chat-completion model",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the generator web UI
    Serve {
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Generate a workflow from a one-shot description
    Generate {
        /// Workflow description
        #[arg(short, long)]
        message: String,
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Show status of configuration
    Status {
        /// Config file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Show version information
    Version,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    flowgen::logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { config, port }) => {
            serve_cmd(config, port).await;
        }
        Some(Commands::Generate { message, config }) => {
            generate_cmd(message, config).await;
        }
        Some(Commands::Status { config }) => {
            status_cmd(config);
        }
        Some(Commands::Version) => {
            version_cmd();
        }
        None => {
            // Default: start the web UI
            serve_cmd(None, None).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Serve command
// ---------------------------------------------------------------------------

async fn serve_cmd(config_path: Option<String>, port: Option<u16>) {
    let cfg = load_config(config_path.as_deref());

    if let Err(e) = cfg.validate() {
        eprintln!("{} Configuration Error: {}", LOGO, e);
        std::process::exit(1);
    }

    let generator = build_generator(&cfg);

    let port = port.unwrap_or(cfg.server.port);
    let host: std::net::IpAddr = cfg.server.host.parse().unwrap_or_else(|_| {
        eprintln!("{} Invalid server host: {}", LOGO, cfg.server.host);
        std::process::exit(1);
    });
    let addr = std::net::SocketAddr::from((host, port));

    println!(
        "{} flowgen v{} — web UI at http://localhost:{}",
        LOGO,
        flowgen::VERSION,
        port
    );

    if let Err(e) = flowgen::web::start_web_server(addr, generator, cfg).await {
        eprintln!("{} Web UI error: {}", LOGO, e);
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// Generate command (one-shot)
// ---------------------------------------------------------------------------

async fn generate_cmd(message: String, config_path: Option<String>) {
    let cfg = load_config(config_path.as_deref());

    if let Err(e) = cfg.validate() {
        eprintln!("{} Configuration Error: {}", LOGO, e);
        std::process::exit(1);
    }

    let generator = build_generator(&cfg);

    match generator.generate(&message).await {
        Ok(Generation::Parsed { pretty }) => {
            println!("{}", pretty);
        }
        Ok(Generation::Unparsed { raw, error }) => {
            eprintln!("{} Couldn't parse valid JSON ({}). Raw output:", LOGO, error);
            println!("{}", raw);
            std::process::exit(1);
        }
        Err(GenerateError::EmptyDescription) => {
            eprintln!("{} Please describe your workflow first.", LOGO);
            std::process::exit(1);
        }
        Err(GenerateError::Request(e)) => {
            eprintln!("{} Completion API error: {}", LOGO, e);
            std::process::exit(1);
        }
    }
}

// ---------------------------------------------------------------------------
// Other commands
// ---------------------------------------------------------------------------

fn status_cmd(config_path: Option<String>) {
    println!("{} flowgen Status\n", LOGO);

    let cfg = load_config(config_path.as_deref());

    let default_path = Config::default_path().unwrap_or_default();
    if default_path.exists() {
        println!("  Config:  ✅ {}", default_path.display());
    } else {
        println!("  Config:  ❌ Not found (defaults in effect)");
    }

    println!("  Model:   {}", cfg.generator.model);

    if cfg.provider.api_key.is_empty() {
        println!("  API key: ❌ Not configured (set OPENAI_API_KEY)");
    } else {
        println!("  API key: ✅ Configured");
    }
}

fn version_cmd() {
    println!("{} flowgen v{}", LOGO, flowgen::VERSION);
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(path: Option<&str>) -> Config {
    let config_path = if let Some(p) = path {
        PathBuf::from(p)
    } else {
        Config::default_path().unwrap_or_else(|_| PathBuf::from("config.json"))
    };

    Config::load(&config_path).unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}, using defaults", e);
        Config::default()
    })
}

fn build_generator(cfg: &Config) -> Generator {
    let provider = Arc::new(HTTPProvider::new(
        cfg.provider.api_key.clone(),
        cfg.provider.api_base.clone(),
    ));
    Generator::new(provider, &cfg.generator)
}
