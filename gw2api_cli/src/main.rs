use anyhow::Result;
use clap::{Parser, Subcommand};
use gw2api::{Api, ApiOptions, language::Language};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod account;
mod money;
mod resource;

#[derive(Parser)]
#[command(author, version)]
struct Cli {
    #[arg(short, long, global = true, default_value("en"), value_parser(str::parse::<Language>))]
    lang: Language,

    /// API key for account endpoints. Also read from GW2_API_KEY or a .env file.
    #[arg(short, long, global = true, env = "GW2_API_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Seconds to wait for each request.
    #[arg(short, long, global = true, default_value_t = 5)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch entries of a resource by id. Any number of ids; large sets are fetched in batches.
    ///
    /// Without ids, prints what the resource lists by default (usually its ids).
    Get(resource::GetArgs),

    /// List every id of a resource.
    Ids(resource::IdsArgs),

    /// Fetch every entry of a resource through its id listing.
    All(resource::IdsArgs),

    /// Current game build.
    Build,

    /// Split an amount of copper into gold, silver and copper.
    Coins(money::CoinsArgs),

    /// Trading post fees and profit for a sell price.
    Profit(money::ProfitArgs),

    /// Account details for the key.
    Account,

    /// Name and permissions of the key.
    Tokeninfo,

    /// Endpoints served by version 2 of the API.
    #[clap(hide = true)]
    Endpoints,
}

pub fn run() -> Result<()> {
    _ = dotenvy::dotenv();
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let api: Api = ApiOptions::new()
        .with_language(args.lang)
        .with_timeout(Duration::from_secs(args.timeout))
        .with_token(args.key)
        .build();

    match args.command {
        Commands::Get(args) => resource::get(args, &api)?,
        Commands::Ids(args) => resource::ids(args, &api)?,
        Commands::All(args) => resource::all(args, &api)?,
        Commands::Build => println!("{}", api.get_build()?),
        Commands::Coins(args) => money::coins(args),
        Commands::Profit(args) => money::profit(args),
        Commands::Account => account::account(&api)?,
        Commands::Tokeninfo => account::tokeninfo(&api)?,
        Commands::Endpoints => api.endpoints().iter().for_each(|e| println!("{e}")),
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Encountered error: {e}");
        std::process::exit(1)
    }
}
