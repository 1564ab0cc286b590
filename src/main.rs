//! clipcite - strip trailing e-reader citations from clipboard text.

mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use clipcite::version;

/// Strips trailing Kindle citations from copied text.
#[derive(Parser)]
#[command(
    name = "clipcite",
    about = "Strips trailing Kindle citations from copied text",
    version,
    long_version = version::long(),
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch the clipboard and strip citations as they appear
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, value_name = "MS")]
        interval: Option<u64>,

        /// Poll a single time and exit
        #[arg(long)]
        once: bool,

        /// Run every changed snapshot through the full rule table
        #[arg(long)]
        no_precheck: bool,
    },

    /// Clean a single piece of text and print the result
    Clean {
        /// Text to clean; read from stdin when omitted
        text: Option<String>,

        /// Print nothing; exit 0 if a citation was removed, 1 otherwise
        #[arg(long)]
        check: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Watch {
            interval,
            once,
            no_precheck,
        } => commands::watch::handle(interval, once, no_precheck),
        Commands::Clean { text, check } => commands::clean::handle(text.as_deref(), check),
        Commands::Completions { shell } => commands::completions::handle(shell),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
