use std::sync::Arc;

use clap::Parser;
use ledger::STARTING_CASH;
use tracing::info;

use trading_service::{router, PaperBroker};

#[derive(Parser)]
#[command(name = "trading-service")]
#[command(about = "Paper trading sandbox - NEPSE snapshot and simulated order API")]
struct Args {
    /// Address to serve on
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
    /// Cash balance the simulated account starts with
    #[arg(long, default_value_t = STARTING_CASH)]
    starting_cash: f64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let broker = Arc::new(PaperBroker::new(args.starting_cash));
    let app = router(broker);

    let listener = tokio::net::TcpListener::bind(&args.bind).await.unwrap();

    info!("Paper trading service starting on http://{}", args.bind);
    info!("Available endpoints:");
    info!("  GET  / - Trading dashboard");
    info!("  GET  /health - Health check");
    info!("  GET  /market - Market snapshot");
    info!("  GET  /portfolio - Portfolio snapshot");
    info!("  POST /orders - Place a simulated order");

    axum::serve(listener, app).await.unwrap();
}
