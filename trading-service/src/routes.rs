use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use ledger::{OrderRequest, RejectReason};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::broker::PaperBroker;
use crate::types::{OrderResult, Rejection};

/// Builds the service router over a shared broker.
pub fn router(broker: Arc<PaperBroker>) -> Router {
    Router::new()
        .route("/", get(serve_dashboard))
        .route("/health", get(health_check))
        .route("/market", get(get_market))
        .route("/portfolio", get(get_portfolio))
        .route("/orders", post(place_order))
        .layer(CorsLayer::permissive())
        .with_state(broker)
}

async fn serve_dashboard() -> impl IntoResponse {
    Html(include_str!("../static/index.html"))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "trading-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_millis()
    }))
}

async fn get_market(State(broker): State<Arc<PaperBroker>>) -> impl IntoResponse {
    Json(broker.market_snapshot())
}

async fn get_portfolio(State(broker): State<Arc<PaperBroker>>) -> impl IntoResponse {
    Json(broker.portfolio_snapshot().await)
}

async fn place_order(
    State(broker): State<Arc<PaperBroker>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Unparseable bodies never reach the engine
    let Json(request) = payload.map_err(|_| AppError::InvalidPayload)?;

    let order = match broker.place_order(&request).await {
        Ok(order) => order,
        Err(reason) => {
            warn!(symbol = %request.symbol, qty = request.qty, %reason, "order rejected");
            return Err(AppError::Rejected(reason));
        }
    };

    info!(
        id = order.id,
        symbol = %order.symbol,
        side = ?order.side,
        qty = order.qty,
        price = order.price,
        "order filled"
    );

    Ok(Json(OrderResult {
        ok: true,
        message: "Order filled.".to_string(),
        order,
    }))
}

#[derive(Debug)]
pub enum AppError {
    InvalidPayload,
    Rejected(RejectReason),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::InvalidPayload => "Invalid payload.".to_string(),
            AppError::Rejected(reason) => reason.to_string(),
        };

        let body = Json(Rejection { ok: false, message });

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
