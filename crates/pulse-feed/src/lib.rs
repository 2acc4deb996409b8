/// Add-on fetch methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
pub mod client_ext;

/// Concurrent collection of a whole watchlist into a display board.
pub mod collect;

/// Provider endpoints.
pub mod endp;

/// Endpoint URL builders.
pub mod www;

pub use client_ext::ClientExt;
pub use collect::{Board, BoardSection, Card};
pub use endp::yahoo_finance::Candle;
