use std::sync::Arc;

use clap::Parser;
use lunchpick_api::{
    application::{
        http::server::http_server::{router, state},
        logger::init_logger,
    },
    args::Args,
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone()).await.inspect_err(|e| {
        error!("Failed to start Lunchpick: {:#}", e);
    })?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Lunchpick API listening on {}", addr);

    axum::serve(listener, router).await?;
    Ok(())
}
