//! termspan CLI entry point

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::convert::ConvertOptions;

/// Version string with build metadata
#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TERMSPAN_BUILD_DATE"),
    ", git ",
    env!("VERGEN_GIT_SHA"),
    ")"
);

/// Version string for release builds (no git hash)
#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("TERMSPAN_BUILD_DATE"),
    ")"
);

#[derive(Parser)]
#[command(name = "termspan")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Convert ANSI terminal output into styled HTML")]
#[command(
    long_about = "Convert ANSI terminal output into styled HTML.\n\n\
    Bold, light, underline, blink, reverse and invisible text become CSS classes;\n\
    the eight standard foreground and background colors become inline styles.\n\
    Cursor movement, screen clearing and other control sequences are dropped."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert terminal output to HTML
    #[command(long_about = "Convert terminal output to an HTML fragment.\n\n\
        Reads FILE (or stdin when FILE is omitted or '-') and writes the result\n\
        to stdout unless --output is given. Output is not HTML-escaped;\n\
        only feed it trusted input.\n\n\
        Examples:\n  \
        termspan convert build.log -o build.html\n  \
        ls --color=always | termspan convert --document")]
    Convert {
        /// Input file (default: stdin)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Write HTML to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Wrap the fragment in a standalone HTML page
        #[arg(long)]
        document: bool,

        /// Do not embed the stylesheet in the page
        #[arg(long)]
        no_stylesheet: bool,

        /// Page title used with --document
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,
    },

    /// Print CSS for the generated class names
    Css {
        /// Selector to scope the rules under, e.g. ".terminal"
        #[arg(long, value_name = "SELECTOR")]
        scope: Option<String>,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("release"),
        "starting termspan"
    );

    match cli.command {
        Commands::Convert {
            input,
            output,
            document,
            no_stylesheet,
            title,
        } => commands::convert::handle(ConvertOptions {
            input,
            output,
            document,
            no_stylesheet,
            title,
        }),
        Commands::Css { scope } => commands::handle_css(scope.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
        },
    }
}
