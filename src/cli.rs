use crate::config::{BridgeConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};
use crate::tools::{fetch, simplify};
use clap::{Args, Parser, Subcommand};
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "itembridge",
    version,
    about = "Bridge a desktop UI to the local item calculation server"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a calculation result for an item id
    Fetch(FetchArgs),
    /// Simplify raw item text (stdin → stdout)
    Simplify,
}

#[derive(Args)]
struct FetchArgs {
    /// Item identifier (percent-encoded into the query string)
    item_id: String,

    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Per-attempt timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Print the full outcome (transport, duration, attempts) as JSON
    #[arg(long)]
    json: bool,
}

pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Fetch(args) => run_fetch(args),
        Command::Simplify => run_simplify(),
    }
}

fn run_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let cfg = BridgeConfig {
        host: args.host,
        port: args.port,
        timeout_ms: args.timeout_ms,
    };

    let runtime = tokio::runtime::Runtime::new()?;
    eprintln!("Fetching calculation for {}...", args.item_id);

    let outcome = runtime.block_on(fetch::fetch_calculated_item_with(&args.item_id, &cfg))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", outcome.body);
    }
    eprintln!(
        "✓ Fetched via {} in {}ms ({} attempt{})",
        outcome.transport_used,
        outcome.duration_ms,
        outcome.attempts,
        if outcome.attempts == 1 { "" } else { "s" }
    );
    Ok(())
}

fn run_simplify() -> anyhow::Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    println!("{}", simplify::simplify(&input));
    Ok(())
}
