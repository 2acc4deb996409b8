use serde::{Deserialize, Serialize};

/// A tracked symbol plus the display name the dashboard shows under it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub symbol: String,
    pub name: String,
}

/// One labelled group of the dashboard, in insertion order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: String,
    pub entries: Vec<Entry>,
}

/// Ordered groups of tracked ticker symbols.
///
/// Session-scoped only; mutations happen through the explicit methods below and
/// nothing persists across a restart.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    sections: Vec<Section>,
}

impl Watchlist {
    pub fn empty() -> Watchlist {
        Watchlist { sections: vec![] }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    /// Append a symbol to a section, creating the section on first use.
    /// Silently a no-op when the symbol is already present in that section.
    pub fn add(&mut self, section: &str, symbol: &str, name: &str) {
        let section = match self.sections.iter_mut().find(|s| s.label == section) {
            Some(existing) => existing,
            None => {
                self.sections.push(Section {
                    label: section.to_string(),
                    entries: vec![],
                });
                self.sections.last_mut().unwrap()
            }
        };

        if section.entries.iter().any(|e| e.symbol == symbol) {
            return;
        }
        section.entries.push(Entry {
            symbol: symbol.to_string(),
            name: name.to_string(),
        });
    }

    /// Drop one symbol from a section. Unknown section or symbol is a no-op.
    pub fn remove(&mut self, section: &str, symbol: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.label == section) {
            section.entries.retain(|e| e.symbol != symbol);
        }
    }

    /// Empty out a section's symbol sequence, keeping the section label.
    pub fn remove_all(&mut self, section: &str) {
        if let Some(section) = self.sections.iter_mut().find(|s| s.label == section) {
            section.entries.clear();
        }
    }

    pub fn clear(&mut self) {
        self.sections.clear();
    }
}

impl Default for Watchlist {
    /// The stock dashboard groups: indexes, large-cap tech, macro gauges, and
    /// fixed income / FX.
    fn default() -> Watchlist {
        let seed: [(&str, &[(&str, &str)]); 4] = [
            (
                "EQUITY INDEXES",
                &[
                    ("^GSPC", "S&P 500"),
                    ("^DJI", "Dow Jones"),
                    ("^IXIC", "NASDAQ"),
                    ("^RUT", "Russell 2000"),
                ],
            ),
            (
                "TECH/GROWTH",
                &[
                    ("AAPL", "Apple"),
                    ("MSFT", "Microsoft"),
                    ("NVDA", "NVIDIA"),
                    ("GOOGL", "Alphabet"),
                    ("AMZN", "Amazon"),
                    ("META", "Meta"),
                    ("TSLA", "Tesla"),
                    ("AMD", "AMD"),
                ],
            ),
            (
                "MACRO & RATES",
                &[
                    ("^TNX", "10Y Treasury Yield"),
                    ("DX-Y.NYB", "US Dollar Index"),
                    ("GC=F", "Gold Futures"),
                    ("CL=F", "Crude Oil WTI"),
                    ("BTC-USD", "Bitcoin"),
                ],
            ),
            (
                "FIXED INCOME/FX",
                &[
                    ("TLT", "20Y+ Treasury ETF"),
                    ("IEF", "7-10Y Treasury ETF"),
                    ("LQD", "Investment Grade Bond"),
                    ("EURUSD=X", "EUR/USD"),
                    ("GBPUSD=X", "GBP/USD"),
                ],
            ),
        ];

        let mut watchlist = Watchlist::empty();
        for (label, entries) in seed {
            for &(symbol, name) in entries {
                watchlist.add(label, symbol, name);
            }
        }
        watchlist
    }
}
