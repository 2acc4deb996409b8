/// Quote snapshots; the normalized price/change model.
pub mod quote;

/// Display formatting of quotes into dashboard card text.
pub mod format;

/// Named, ordered groupings of tracked ticker symbols.
pub mod watchlist;

/// Time-bounded memoization of fetched data.
pub mod cache;

pub use cache::TtlCache;
pub use format::{format, DisplayRecord, SymbolClass, Tone};
pub use quote::Quote;
pub use watchlist::Watchlist;
