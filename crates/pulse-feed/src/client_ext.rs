use crate::endp::yahoo_finance as yf;
use crate::www;
use anyhow::Result;
use pulse_core::Quote;
use reqwest::Client;
use std::future::Future;

pub trait ClientExt {
    /// Fetch and normalize the current quote of a single symbol.
    ///
    /// `Ok(None)` covers everything the provider can get wrong short of a
    /// transport failure: unknown symbol, missing meta fields, zero previous
    /// close. Callers treat `Err` the same way; nothing retries.
    fn fetch_quote(&self, symbol: &str) -> impl Future<Output = Result<Option<Quote>>> + Send;

    /// Fetch the OHLC series of a single symbol over the given window.
    fn fetch_history(
        &self,
        symbol: &str,
        interval: &str,
        range: &str,
    ) -> impl Future<Output = Result<Vec<yf::Candle>>> + Send;
}

/// Add-on methods for [`reqwest::Client`].
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
impl ClientExt for Client {
    async fn fetch_quote(&self, symbol: &str) -> Result<Option<Quote>> {
        let url = www::quote_url(symbol);
        let response: yf::PriceHistory = self.get(url).send().await?.json().await?;

        let quote = match response.chart.result.as_deref().and_then(|r| r.first()) {
            Some(base) => {
                let quote = Quote::normalize(
                    symbol,
                    base.meta.regular_market_price,
                    base.meta.chart_previous_close,
                );
                if quote.is_none() {
                    log::warn!("[{symbol}] chart meta carried no usable price/previous-close pair");
                }
                quote
            }

            None => {
                log::warn!("[{symbol}] failed to extract quote data; treating as unavailable");
                None
            }
        };
        Ok(quote)
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        interval: &str,
        range: &str,
    ) -> Result<Vec<yf::Candle>> {
        let url = www::chart_url(symbol, interval, range);
        log::trace!("[{symbol}] fetching {interval}/{range} candles");
        let response: yf::PriceHistory = self.get(url).send().await?.json().await?;
        Ok(yf::candles(&response, symbol))
    }
}
