mod error;
mod fetch;
mod pipeline;
mod player;
mod render;
mod timedtext;
mod transcript;
mod video;

use crate::error::TranscrapeError;
use crate::fetch::HttpFetcher;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

fn main() {
    env_logger::init();
    match run() {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
        }
    }
}

#[derive(Parser)]
#[command(about = "Fetch the caption transcript of a YouTube video")]
struct Cli {
    #[arg(help = "The video URL. If not supplied, it will be read from standard input.")]
    url: Option<String>,
    #[arg(help = "The caption language code, e.g. 'en'. If not supplied, it will be read from standard input.")]
    language: Option<String>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let url = match cli.url {
        Some(url) => url,
        None => prompt("URL: ")?,
    };
    let language = match cli.language {
        Some(language) => language,
        None => prompt("Language code (e.g. 'en'): ")?,
    };

    let fetcher = HttpFetcher::new()?;
    let entries = match pipeline::get_transcript(&fetcher, &url, &language) {
        Ok(entries) => entries,
        // A page whose player response is missing or unreadable looks, to
        // the user, like a video without captions.
        Err(err @ (TranscrapeError::PlayerResponseMissing
        | TranscrapeError::PlayerResponseInvalid(_))) => {
            warn!("{}", err);
            println!("No captions available for this video.");
            return Ok(());
        }
        Err(TranscrapeError::NoCaptions) => {
            println!("No captions available for this video.");
            return Ok(());
        }
        Err(TranscrapeError::LanguageNotFound {
            requested,
            available,
        }) => {
            println!("No captions found for language code '{}'.", requested);
            println!("Available: {}", available.join(", "));
            return Ok(());
        }
        Err(TranscrapeError::BadStatus(status)) => {
            warn!("timed-text request returned HTTP {}", status);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let stdout = io::stdout();
    render::render(&mut stdout.lock(), &entries)?;

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush().context("Failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
