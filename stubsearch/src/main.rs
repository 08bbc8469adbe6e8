use clap::{Parser, Subcommand};
use stubsearch_core::config::StubsearchConfig;
use stubsearch_core::logging::init_logging;
use stubsearch_core::server;

const DEFAULT_CONFIG: &str = "config/stubsearch.toml";

#[derive(Parser, Debug)]
#[command(
    name = "stubsearch",
    version,
    about = "Stubsearch: mock Elasticsearch test double for log pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the mock service (default)
    Run {
        /// Path to the stubsearch config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: String,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let config_path = match cli.command {
        Some(Command::Run { config }) => config,
        None => DEFAULT_CONFIG.to_string(),
    };

    let cfg =
        StubsearchConfig::load_or_default(&config_path).expect("Failed to load stubsearch config");

    server::run(cfg).expect("Failed to start stubsearch server");
}
