use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campcode_core::{GenerateError, GenerateOptions, generate, generate_with_rng};
use campcode_server::{AppState, JsonFileStore, ServerError, serve};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("server error: {0}")]
    Server(#[from] ServerError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "campcode", version, about = "Campaign code generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate codes for a campaign name and print them.
    Generate(GenerateArgs),
    /// Run the HTTP service.
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Campaign name.
    name: String,
    /// Optional campaign description, used as a secondary signal.
    #[arg(long)]
    description: Option<String>,
    /// Minimum code length.
    #[arg(long, default_value_t = 6)]
    min_len: usize,
    /// Maximum code length.
    #[arg(long, default_value_t = 12)]
    max_len: usize,
    /// Skip the year suffix heuristics.
    #[arg(long, default_value_t = false)]
    no_year: bool,
    /// Number of codes to return.
    #[arg(long, default_value_t = 8)]
    count: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the codes as a JSON array.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Bind port.
    #[arg(long, default_value_t = 8080)]
    port: u16,
    /// Path of the idempotency store file.
    #[arg(long, default_value = "code_store.json")]
    store: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so `generate` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Serve(args) => run_serve(args).await,
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let context = match args.description.as_deref() {
        Some(description) if !description.trim().is_empty() => {
            format!("{0} {0} {1}", args.name, description)
        }
        _ => args.name.clone(),
    };

    let options = GenerateOptions {
        min_len: args.min_len,
        max_len: args.max_len,
        include_year: !args.no_year,
        count: args.count,
    };

    let codes = match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_with_rng(&context, &options, &mut rng)?
        }
        None => generate(&context, &options)?,
    };
    info!(count = codes.len(), "codes generated");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        for code in codes {
            println!("{code}");
        }
    }
    Ok(())
}

async fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    info!(store = %args.store.display(), "opening idempotency store");
    let store = JsonFileStore::open(args.store);
    let state = AppState::new(store);
    let addr = format!("{}:{}", args.host, args.port);
    serve(&addr, state).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_args_use_spec_defaults() {
        let cli = Cli::try_parse_from(["campcode", "generate", "Summer Sale"]).expect("parses");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.name, "Summer Sale");
        assert_eq!(args.min_len, 6);
        assert_eq!(args.max_len, 12);
        assert_eq!(args.count, 8);
        assert!(!args.no_year);
        assert!(args.seed.is_none());
    }

    #[test]
    fn generate_flags_map_onto_options() {
        let cli = Cli::try_parse_from([
            "campcode",
            "generate",
            "NASA Mission 2025",
            "--description",
            "lunar launch",
            "--min-len",
            "7",
            "--max-len",
            "10",
            "--no-year",
            "--count",
            "3",
            "--seed",
            "42",
            "--json",
        ])
        .expect("parses");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.description.as_deref(), Some("lunar launch"));
        assert_eq!(args.min_len, 7);
        assert_eq!(args.max_len, 10);
        assert!(args.no_year);
        assert_eq!(args.count, 3);
        assert_eq!(args.seed, Some(42));
        assert!(args.json);
    }

    #[test]
    fn serve_args_have_local_defaults() {
        let cli = Cli::try_parse_from(["campcode", "serve"]).expect("parses");
        let Command::Serve(args) = cli.command else {
            panic!("expected serve command");
        };
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 8080);
        assert_eq!(args.store, PathBuf::from("code_store.json"));
    }

    #[test]
    fn missing_name_fails_to_parse() {
        assert!(Cli::try_parse_from(["campcode", "generate"]).is_err());
    }
}
