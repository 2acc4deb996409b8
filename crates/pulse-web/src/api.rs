use crate::AppState;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use pulse_core::format::{format, DisplayRecord, UNAVAILABLE_TEXT};
use pulse_feed::collect::{self, Board, Card};
use pulse_feed::ClientExt;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////

/// One rendered ticker card.
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "name": "Apple",
///     "available": true,
///     "price_text": "$150.12",
///     "change_text": "+1.43%",
///     "color": "positive",
///     "arrow": "▲"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, utoipa::ToSchema)]
pub struct CardView {
    symbol: String,
    name: String,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    change_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    arrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CardView {
    fn from_card(card: &Card) -> CardView {
        match format(card.quote.as_ref()) {
            DisplayRecord::Quote {
                price_text,
                change_text,
                tone,
                arrow,
            } => CardView {
                symbol: card.symbol.clone(),
                name: card.name.clone(),
                available: true,
                price_text: Some(price_text),
                change_text: Some(change_text),
                color: Some(tone.css_class().to_string()),
                arrow: Some(arrow.to_string()),
                message: None,
            },

            DisplayRecord::Unavailable => CardView {
                symbol: card.symbol.clone(),
                name: card.name.clone(),
                available: false,
                price_text: None,
                change_text: None,
                color: None,
                arrow: None,
                message: Some(UNAVAILABLE_TEXT.to_string()),
            },
        }
    }
}

#[derive(Serialize, Debug, utoipa::ToSchema)]
pub struct SectionView {
    label: String,
    cards: Vec<CardView>,
}

#[derive(Serialize, Debug, utoipa::ToSchema)]
pub struct DashboardResponse {
    updated: String,
    sections: Vec<SectionView>,
}

impl DashboardResponse {
    fn from_board(board: &Board) -> DashboardResponse {
        DashboardResponse {
            updated: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            sections: board
                .sections
                .iter()
                .map(|section| SectionView {
                    label: section.label.clone(),
                    cards: section.cards.iter().map(CardView::from_card).collect(),
                })
                .collect(),
        }
    }
}

/// The full dashboard: every watchlist card, formatted for display. Quotes are
/// served from the 60 s cache where fresh; a symbol that cannot be fetched
/// comes back as an unavailable card, never an error.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses((status = 200, description = "Formatted cards for every watchlist entry, grouped by section", body = DashboardResponse))
)]
#[get("/dashboard")]
pub async fn dashboard(state: web::Data<AppState>) -> impl Responder {
    let watchlist = state.watchlist.lock().await.clone();
    let board = collect::collect(&state.client, &watchlist, &state.quotes).await;
    HttpResponse::Ok().json(DashboardResponse::from_board(&board))
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, Debug)]
pub struct HistoryQuery {
    interval: Option<String>,
    range: Option<String>,
}

/// OHLC series for the candlestick view of one symbol. Defaults to one-minute
/// samples over the current session; cached per `(symbol, interval, range)`.
#[utoipa::path(
    get,
    path = "/history/{symbol}",
    responses((status = 200, description = "Candle series for the requested window; empty when the provider has nothing"))
)]
#[get("/history/{symbol}")]
pub async fn history(
    path: web::Path<String>,
    query: web::Query<HistoryQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let symbol = path.into_inner().to_uppercase();
    let interval = query.interval.clone().unwrap_or_else(|| "1m".to_string());
    let range = query.range.clone().unwrap_or_else(|| "1d".to_string());

    let key = (symbol.clone(), interval.clone(), range.clone());
    let cached = state.history.lock().await.get(&key).cloned();
    if let Some(hit) = cached {
        log::trace!("[{symbol}] history cache hit ({interval}/{range})");
        return HttpResponse::Ok().json(hit);
    }

    match state.client.fetch_history(&symbol, &interval, &range).await {
        Ok(candles) => {
            state.history.lock().await.insert(key, candles.clone());
            HttpResponse::Ok().json(candles)
        }
        Err(e) => {
            log::error!("[{symbol}] history fetch failed: {e}");
            HttpResponse::Ok().json(Vec::<pulse_feed::Candle>::new())
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Deserialize, Debug)]
pub struct AddQuery {
    name: Option<String>,
}

/// Add a symbol to a watchlist section, creating the section on first use.
/// Adding a symbol the section already tracks is a silent no-op.
#[utoipa::path(
    post,
    path = "/watchlist/{section}/{symbol}",
    responses((status = 200, description = "The section after the mutation"))
)]
#[post("/watchlist/{section}/{symbol}")]
pub async fn watchlist_add(
    path: web::Path<(String, String)>,
    query: web::Query<AddQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let (section, symbol) = path.into_inner();
    let symbol = symbol.to_uppercase();
    let name = query.name.clone().unwrap_or_else(|| symbol.clone());

    let mut watchlist = state.watchlist.lock().await;
    watchlist.add(&section, &symbol, &name);
    HttpResponse::Ok().json(watchlist.section(&section))
}

/// Drop one symbol from a section.
#[utoipa::path(
    delete,
    path = "/watchlist/{section}/{symbol}",
    responses((status = 200, description = "The section after the mutation"))
)]
#[delete("/watchlist/{section}/{symbol}")]
pub async fn watchlist_remove(
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> impl Responder {
    let (section, symbol) = path.into_inner();
    let mut watchlist = state.watchlist.lock().await;
    watchlist.remove(&section, &symbol.to_uppercase());
    HttpResponse::Ok().json(watchlist.section(&section))
}

/// Empty a whole section's symbol sequence.
#[utoipa::path(
    delete,
    path = "/watchlist/{section}",
    responses((status = 200, description = "The section after the mutation"))
)]
#[delete("/watchlist/{section}")]
pub async fn watchlist_remove_all(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> impl Responder {
    let section = path.into_inner();
    let mut watchlist = state.watchlist.lock().await;
    watchlist.remove_all(&section);
    HttpResponse::Ok().json(watchlist.section(&section))
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::Quote;

    fn card(symbol: &str, quote: Option<Quote>) -> Card {
        Card {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            quote,
        }
    }

    #[test]
    fn available_card_maps_every_field() {
        let quote = Quote::normalize("AAPL", Some(150.1234), Some(148.0));
        let view = CardView::from_card(&card("AAPL", quote));

        assert!(view.available);
        assert_eq!(view.price_text.as_deref(), Some("$150.12"));
        assert_eq!(view.change_text.as_deref(), Some("+1.43%"));
        assert_eq!(view.color.as_deref(), Some("positive"));
        assert_eq!(view.arrow.as_deref(), Some("▲"));
        assert_eq!(view.message, None);
    }

    #[test]
    fn absent_card_has_no_numeric_fields() {
        let view = CardView::from_card(&card("NOPE", None));

        assert!(!view.available);
        assert_eq!(view.price_text, None);
        assert_eq!(view.change_text, None);
        assert_eq!(view.color, None);
        assert_eq!(view.arrow, None);
        assert_eq!(view.message.as_deref(), Some(UNAVAILABLE_TEXT));
    }
}
