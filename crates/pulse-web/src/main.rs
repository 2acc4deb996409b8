use actix_web::{middleware::Logger, web, App, HttpServer};
use pulse_core::{TtlCache, Watchlist};
use pulse_feed::collect::QuoteCache;
use pulse_feed::Candle;
use tokio::sync::Mutex;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod api;

const DEFAULT_USER_AGENT: &str = "market-pulse/0.1";

/// Per-process state: one HTTP client, the session watchlist, and the two
/// refresh-cycle caches. Nothing here survives a restart.
pub struct AppState {
    pub client: reqwest::Client,
    pub watchlist: Mutex<Watchlist>,
    pub quotes: QuoteCache,
    pub history: Mutex<TtlCache<(String, String, String), Vec<Candle>>>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,actix_web=debug");
    }
    dotenv::dotenv().ok();
    env_logger::init();

    let user_agent =
        dotenv::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());
    let client = reqwest::ClientBuilder::new()
        .user_agent(user_agent)
        .build()
        .expect("build http client");

    let state = web::Data::new(AppState {
        client,
        watchlist: Mutex::new(Watchlist::default()),
        quotes: Mutex::new(TtlCache::default()),
        history: Mutex::new(TtlCache::default()),
    });

    // create API documentation
    #[derive(OpenApi)]
    #[openapi(paths(
        api::dashboard,
        api::history,
        api::watchlist_add,
        api::watchlist_remove,
        api::watchlist_remove_all
    ))]
    struct ApiDoc;
    let openapi = ApiDoc::openapi();

    let bind = dotenv::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("market-pulse listening on {bind}");

    // run server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            // api endpoints
            .service(api::dashboard)
            .service(api::history)
            .service(api::watchlist_add)
            .service(api::watchlist_remove)
            .service(api::watchlist_remove_all)
            // api documentation
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/openapi.json", openapi.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
