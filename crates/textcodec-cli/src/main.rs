mod config;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use textcodec_core::Translator;

/// textcodec - convert text between TEXT, BINARY and MORSE
///
/// Without a subcommand, translates the configured default text.
#[derive(Parser, Debug)]
#[command(name = "textcodec")]
#[command(author, version, about = "Converts text between TEXT, BINARY and MORSE", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// TOML file with default formats and text
    #[arg(long, global = true, env = "TEXTCODEC_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text from one format to another.
    Translate {
        /// Text to translate; read from stdin when omitted
        text: Option<String>,

        /// Source format tag (TEXT, BINARY, MORSE)
        #[arg(short, long)]
        from: Option<String>,

        /// Destination format tag (TEXT, BINARY, MORSE)
        #[arg(short, long)]
        to: Option<String>,

        /// Translate each stdin line on its own
        #[arg(long, conflicts_with = "text")]
        lines: bool,

        /// Print one JSON object per translation
        #[arg(long)]
        json: bool,
    },

    /// List the supported format tags.
    Formats {
        /// Print the tags as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns whether every translation succeeded.
async fn run(cli: Cli) -> Result<bool> {
    let config = CliConfig::load(cli.config.as_deref())?;
    info!(?config, "loaded configuration");
    let translator = Translator::new();

    match cli.command {
        None => Ok(translate_one(
            &translator,
            &config.default_text,
            config.source.as_str(),
            config.destination.as_str(),
            config.json,
        )),

        Some(Commands::Translate {
            text,
            from,
            to,
            lines,
            json,
        }) => {
            let from = from.as_deref().unwrap_or(config.source.as_str());
            let to = to.as_deref().unwrap_or(config.destination.as_str());
            let json = json || config.json;

            if lines {
                return translate_lines(&translator, from, to, json).await;
            }

            let input = match text {
                Some(text) => text,
                None => read_stdin().await?,
            };
            Ok(translate_one(&translator, &input, from, to, json))
        }

        Some(Commands::Formats { json }) => {
            println!("{}", output::render_formats(json || config.json));
            Ok(true)
        }
    }
}

fn translate_one(translator: &Translator, input: &str, from: &str, to: &str, json: bool) -> bool {
    debug!(from, to, len = input.len(), "translating");
    let result = translator.run(input, from, to);
    if let Err(err) = &result {
        warn!(kind = ?err.kind(), "translation failed: {err}");
    }
    println!("{}", output::render(&result, json));
    result.is_ok()
}

async fn translate_lines(translator: &Translator, from: &str, to: &str, json: bool) -> Result<bool> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut all_ok = true;
    let mut count = 0usize;
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        count += 1;
        all_ok &= translate_one(translator, &line, from, to, json);
    }
    debug!(count, all_ok, "finished line mode");
    Ok(all_ok)
}

/// Whole of stdin, minus one trailing newline.
async fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    tokio::io::stdin()
        .read_to_string(&mut buf)
        .await
        .context("failed to read stdin")?;
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}
