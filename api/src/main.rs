use std::sync::Arc;

use clap::Parser;
use herdcheck_api::{
    application::{
        http::server::http_server::{router, state},
        telemetry::init_tracing,
    },
    args::Args,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_tracing(&args.log)?;

    let state = state(args.clone())?;
    let router = router(state)?;

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        addr = %addr,
        mode = ?args.predictor.mode,
        "herdcheck listening"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
