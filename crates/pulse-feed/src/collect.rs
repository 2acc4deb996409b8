use crate::client_ext::ClientExt;
use futures::StreamExt;
use pulse_core::{Quote, TtlCache, Watchlist};
use reqwest::Client;
use serde::Serialize;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Shared quote memoization; absent results are cached for the same window as
/// live ones, so a dead symbol is not re-fetched every refresh.
pub type QuoteCache = Mutex<TtlCache<String, Option<Quote>>>;

/// One dashboard card: a watchlist entry plus whatever this cycle fetched.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub symbol: String,
    pub name: String,
    pub quote: Option<Quote>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BoardSection {
    pub label: String,
    pub cards: Vec<Card>,
}

/// The whole dashboard for one refresh cycle, in watchlist order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Board {
    pub sections: Vec<BoardSection>,
}

/// Fetch every watchlist symbol (one independent request each, fanned out
/// across the runtime) and assemble the board. Failures degrade to absent
/// cards; this function itself never errors.
pub async fn collect(client: &Client, watchlist: &Watchlist, cache: &QuoteCache) -> Board {
    // dedupe across sections; each symbol is fetched at most once per cycle
    let mut symbols: Vec<String> = watchlist
        .sections()
        .iter()
        .flat_map(|section| section.entries.iter().map(|entry| entry.symbol.clone()))
        .collect();
    symbols.sort();
    symbols.dedup();

    let quotes: HashMap<String, Option<Quote>> = futures::stream::iter(symbols)
        .map(|symbol| async move {
            {
                let cache = cache.lock().await;
                if let Some(hit) = cache.get(&symbol) {
                    log::trace!("[{symbol}] quote cache hit");
                    return (symbol.clone(), hit.clone());
                }
            }

            let quote = match client.fetch_quote(&symbol).await {
                Ok(quote) => quote,
                Err(e) => {
                    log::error!("[{symbol}] quote fetch failed: {e}");
                    None
                }
            };
            cache.lock().await.insert(symbol.clone(), quote.clone());
            (symbol, quote)
        })
        .buffer_unordered(num_cpus::get())
        .collect()
        .await;

    assemble(watchlist, &quotes)
}

/// Reassemble fetch results into watchlist order.
pub fn assemble(watchlist: &Watchlist, quotes: &HashMap<String, Option<Quote>>) -> Board {
    Board {
        sections: watchlist
            .sections()
            .iter()
            .map(|section| BoardSection {
                label: section.label.clone(),
                cards: section
                    .entries
                    .iter()
                    .map(|entry| Card {
                        symbol: entry.symbol.clone(),
                        name: entry.name.clone(),
                        quote: quotes.get(&entry.symbol).cloned().flatten(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
