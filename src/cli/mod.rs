mod args;
mod config;
mod global;
mod handlers;
mod io;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "crockford")]
#[command(version)]
#[command(about = "Crockford Base32 encoder and decoder with synonym-aware comparison", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        crockford::encoders::algorithms::disable_color();
    }
    let color = !cli.global.no_color && std::env::var_os("NO_COLOR").is_none();
    let settings = config::load_settings(cli.global.config.as_deref(), color)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &settings),
        Commands::Check(args) => handlers::check::handle(args),
        Commands::Normalize(args) => handlers::normalize::handle(args),
        Commands::Compare(args) => handlers::compare::handle(args),
        Commands::Config(args) => handlers::config::handle(args, &settings),
    }
}
