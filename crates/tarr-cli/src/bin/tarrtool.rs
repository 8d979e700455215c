use std::path::PathBuf;

use clap::{Parser, Subcommand};

use tarr_cli::commands::search_ops::SearchArgs;
use tarr_cli::commands::{config_ops, search_ops, translit_ops};
use tarr_cli::config::install_overrides;
use tarr_cli::die;

#[derive(Parser)]
#[command(name = "tarrtool", about = "Armenian transliteration and product search")]
struct Cli {
    /// Custom script map TOML (replaces the built-in tables)
    #[arg(long, global = true)]
    map: Option<PathBuf>,
    /// Custom settings TOML
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Write a JSON-lines trace into this directory
    #[cfg(feature = "trace")]
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Canonical Latin → Armenian rendering
    Forward {
        /// Text to convert
        text: String,
    },
    /// Armenian → Latin rendering
    Reverse {
        /// Text to convert
        text: String,
    },
    /// Show the greedy segmentation and each segment's substitutions
    Tokenize {
        /// Text to tokenize
        text: String,
    },
    /// List every spelling candidate for a Latin input
    Candidates {
        /// Text to expand
        text: String,
        /// Show at most this many candidates
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search the WooCommerce catalog with every spelling of a product name
    Search {
        /// Product name
        name: String,
        /// Store base URL
        #[arg(long, env = "WOOCOMMERCE_URL")]
        url: String,
        /// REST API consumer key
        #[arg(long, env = "WOOCOMMERCE_CONSUMER_KEY", hide_env_values = true)]
        key: String,
        /// REST API consumer secret
        #[arg(long, env = "WOOCOMMERCE_CONSUMER_SECRET", hide_env_values = true)]
        secret: String,
        /// Storefront base URL for the "more results" link (defaults to --url)
        #[arg(long)]
        storefront: Option<String>,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the built-in script map TOML
    MapExport,
    /// Validate a script map TOML file
    MapValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Print the built-in settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "trace")]
    let traced = cli
        .trace_dir
        .as_deref()
        .map(tarr_engine::init_tracing)
        .is_some();
    #[cfg(not(feature = "trace"))]
    let traced = false;
    if !traced {
        tarr_engine::init_logging();
    }

    die!(
        install_overrides(cli.map.as_deref(), cli.settings.as_deref()),
        "Error: {}"
    );

    match cli.command {
        Command::Forward { text } => translit_ops::forward(&text),
        Command::Reverse { text } => translit_ops::reverse(&text),
        Command::Tokenize { text } => translit_ops::tokenize_cmd(&text),
        Command::Candidates { text, limit, json } => translit_ops::candidates(&text, limit, json),
        Command::Search {
            name,
            url,
            key,
            secret,
            storefront,
            json,
        } => search_ops::search_cmd(SearchArgs {
            name,
            base_url: url,
            consumer_key: key,
            consumer_secret: secret,
            storefront,
            json,
        }),
        Command::MapExport => config_ops::map_export(),
        Command::MapValidate { file } => config_ops::map_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
