use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of logging
    #[arg(long, default_value = "info")]
    pub trace: TraceLevel,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print dashboard cards, either for the given symbols or for
    /// the whole default watchlist.
    Snapshot { symbols: Vec<String> },

    /// Print the OHLC candle series of one symbol.
    History {
        symbol: String,

        /// Sample width (Yahoo notation: 1m, 5m, 1d, ...).
        #[arg(long, default_value = "1m")]
        interval: String,

        /// Window to fetch (1d, 5d, 1mo, ...).
        #[arg(long, default_value = "1d")]
        range: String,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TraceLevel {
    Debug,
    Info,
    Warn,
    Error,
}
