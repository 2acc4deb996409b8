use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, TraceLevel};
use colored::Colorize;
use futures::StreamExt;
use pulse_core::format::{format, DisplayRecord, Tone, UNAVAILABLE_TEXT};
use pulse_core::{Quote, Watchlist};
use pulse_feed::collect::{assemble, Board};
use pulse_feed::ClientExt;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

mod cli;
mod ui;

const DEFAULT_USER_AGENT: &str = "market-pulse/0.1";

fn preprocess(level: &str) {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn client() -> Result<reqwest::Client> {
    let user_agent =
        dotenv::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    let client = reqwest::ClientBuilder::new().user_agent(user_agent).build()?;
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.trace {
        TraceLevel::Debug => "debug",
        TraceLevel::Info => "info",
        TraceLevel::Warn => "warn",
        TraceLevel::Error => "error",
    };
    preprocess(log_level);
    log::debug!("Command line input recorded: {cli:#?}");

    // cli framework:
    // "> pulse <COMMAND>"
    match &cli.command {
        // "> pulse snapshot [SYMBOLS]..."
        // one refresh cycle of the dashboard, printed as terminal cards
        Commands::Snapshot { symbols } => {
            let watchlist = if symbols.is_empty() {
                Watchlist::default()
            } else {
                let mut watchlist = Watchlist::empty();
                for symbol in symbols {
                    let symbol = symbol.to_uppercase();
                    watchlist.add("SNAPSHOT", &symbol, &symbol);
                }
                watchlist
            };

            let client = client()?;
            let board = snapshot(&client, &watchlist).await;
            print_board(&board);
        }

        // "> pulse history AAPL --interval 1m --range 1d"
        // dump the candle series used by the chart view
        Commands::History {
            symbol,
            interval,
            range,
        } => {
            let client = client()?;
            let symbol = symbol.to_uppercase();
            let candles = client.fetch_history(&symbol, interval, range).await?;

            if candles.is_empty() {
                println!("{}", UNAVAILABLE_TEXT.dimmed());
            }
            for candle in candles {
                println!(
                    "{}  open {:>10.4}  high {:>10.4}  low {:>10.4}  close {:>10.4}  vol {:>12}",
                    candle.dated, candle.open, candle.high, candle.low, candle.close, candle.volume
                );
            }
        }
    }

    Ok(())
}

/// Fetch every watchlist symbol concurrently, with a progress bar, and build
/// the board. A symbol that fails stays on the board as an absent card.
async fn snapshot(client: &reqwest::Client, watchlist: &Watchlist) -> Board {
    let symbols: Vec<String> = watchlist
        .sections()
        .iter()
        .flat_map(|section| section.entries.iter().map(|entry| entry.symbol.clone()))
        .collect();

    let pb = Arc::new(Mutex::new(ui::fetch_pb(symbols.len() as u64)));
    let quotes: HashMap<String, Option<Quote>> = futures::stream::iter(symbols)
        .map(|symbol| {
            let pb = pb.clone();
            async move {
                let quote = match client.fetch_quote(&symbol).await {
                    Ok(quote) => quote,
                    Err(e) => {
                        log::error!("[{symbol}] quote fetch failed: {e}");
                        None
                    }
                };
                pb.lock().await.inc(1);
                (symbol, quote)
            }
        })
        .buffer_unordered(num_cpus::get())
        .collect()
        .await;
    pb.lock().await.finish_and_clear();

    assemble(watchlist, &quotes)
}

fn print_board(board: &Board) {
    for section in &board.sections {
        println!("\n{}", section.label.as_str().bold().underline());

        for card in &section.cards {
            match format(card.quote.as_ref()) {
                DisplayRecord::Quote {
                    price_text,
                    change_text,
                    tone,
                    arrow,
                } => {
                    let line =
                        format!("{price_text:>12}  {change_text:>9} {arrow}  {}", card.name);
                    let line = match tone {
                        Tone::Positive => line.as_str().green(),
                        Tone::Negative => line.as_str().red(),
                    };
                    println!("{:>10}  {line}", card.symbol.as_str().bold());
                }

                DisplayRecord::Unavailable => {
                    println!(
                        "{:>10}  {}",
                        card.symbol.as_str().bold(),
                        UNAVAILABLE_TEXT.dimmed()
                    );
                }
            }
        }
    }
}
