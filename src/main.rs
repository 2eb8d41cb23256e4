use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dictfmt::config::Config;
use dictfmt::dictation::{self, FormatCommand};
use dictfmt::formatters::{self, Formatter};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dictfmt")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Format words with a chain of formatters
    Format {
        /// Formatter name (canonical or spoken), repeatable
        #[arg(short, long = "formatter")]
        formatters: Vec<String>,

        /// Words to format (read from stdin if omitted)
        words: Vec<String>,
    },
    /// Parse and run a spoken command, e.g. "snake hello world over"
    Say {
        utterance: String,
    },
    /// List recognized formatter names
    List {
        /// Show only spoken aliases
        #[arg(long)]
        spoken: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let default_chain = config
        .validate()
        .context("Invalid default_formatters in config")?;

    match cli.command {
        Command::Format { formatters, words } => {
            run_format(&config, &default_chain, formatters, words)
        }
        Command::Say { utterance } => run_say(&config, &utterance),
        Command::List { spoken } => {
            run_list(spoken);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_format(
    config: &Config,
    default_chain: &[Formatter],
    chain: Vec<String>,
    words: Vec<String>,
) -> anyhow::Result<()> {
    let chain = if chain.is_empty() {
        default_chain.to_vec()
    } else {
        formatters::resolve_chain(&chain).context("Failed to resolve formatters")?
    };

    let words = if words.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read words from stdin")?;
        dictation::split_blob(&input.replace(['\n', '\r'], " "))
    } else {
        words
    };

    let words = if config.dictation.strip_terminator {
        dictation::strip_terminator(&words, &config.dictation.terminator)
    } else {
        &words[..]
    };

    let out = formatters::format_formatters(words, &chain);
    println!("{}", out);
    Ok(())
}

fn run_say(config: &Config, utterance: &str) -> anyhow::Result<()> {
    let parser = config.dictation.parser();
    let Some(command) = parser.parse(utterance) else {
        bail!(
            "\"{}\" does not start with a formatter (try `dictfmt list --spoken`)",
            utterance
        );
    };

    let out = if command.is_empty() && config.dictation.clipboard_fallback {
        render_from_clipboard(&command)?
    } else {
        command.render()
    };
    println!("{}", out);
    Ok(())
}

#[cfg(feature = "clipboard")]
fn render_from_clipboard(command: &FormatCommand) -> anyhow::Result<String> {
    let words = dictfmt::clipboard::clipboard_words()?;
    tracing::debug!(count = words.len(), "formatting clipboard words");
    let out = command.render_words(&words);
    dictfmt::clipboard::set_clipboard(&out)?;
    Ok(out)
}

#[cfg(not(feature = "clipboard"))]
fn render_from_clipboard(command: &FormatCommand) -> anyhow::Result<String> {
    tracing::warn!("no phrase given and clipboard support is not built in");
    Ok(command.render())
}

fn run_list(spoken_only: bool) {
    if spoken_only {
        for f in Formatter::ALL {
            println!("{:<10} {}", f.spoken(), f.name());
        }
    } else {
        for name in formatters::list_formatter_names() {
            println!("{}", name);
        }
    }
}
