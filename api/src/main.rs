use std::sync::Arc;

use clap::Parser;
use foodlens_core::domain::scraper::{entities::TARGET_IMAGES, ports::ScraperService};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state};
use crate::args::{Args, LogArgs};

mod application;
mod args;

fn init_tracing(log: &LogArgs) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if log.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log);

    let app_state = state(args.clone())?;
    let router = router(app_state.clone())?;

    info!(
        categories = app_state.service.catalog().len(),
        models = app_state.service.models().len(),
        target_images = TARGET_IMAGES,
        "FoodLens starting with world food dataset"
    );

    if args.scraper.scrape_on_startup {
        let service = app_state.service.clone();
        tokio::spawn(async move {
            service.start_mass_scraping().await;
        });
    } else {
        info!("Background scraping disabled");
    }

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
