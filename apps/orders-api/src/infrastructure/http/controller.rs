//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to the order store.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, Request, State},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::{get, put},
};

use crate::domain::orders::OrderError;
use crate::domain::orders::repository::{ListOrdersQuery, MAX_PAGE_SIZE, OrderStore};
use crate::domain::shared::{CustomerId, OrderId};

use super::request::{CreateOrderRequest, ListOrdersParams, UpdateOrderStatusRequest};
use super::response::{ApiErrorResponse, HealthResponse, OrderResponse};

/// Application state shared across handlers.
pub struct AppState<S>
where
    S: OrderStore,
{
    /// Order store for all order operations.
    pub store: Arc<S>,
    /// Application name reported by the health endpoint.
    pub app_name: String,
    /// Application version.
    pub version: String,
}

impl<S> Clone for AppState<S>
where
    S: OrderStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            app_name: self.app_name.clone(),
            version: self.version.clone(),
        }
    }
}

/// Create the HTTP router with all endpoints.
///
/// Order routes are nested under `api_prefix`; the health endpoint stays at
/// the root.
pub fn create_router<S>(state: AppState<S>, api_prefix: &str) -> Router
where
    S: OrderStore + 'static,
{
    let orders = Router::new()
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order).delete(delete_order))
        .route("/orders/{id}/status", put(update_order_status));

    Router::new()
        .route("/status", get(health_check))
        .nest(api_prefix, orders)
        .layer(axum::middleware::from_fn(track_process_time))
        .with_state(state)
}

/// Record wall-clock handler time in an `x-process-time` response header.
async fn track_process_time(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;

    let elapsed = start.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&format!("{elapsed:.6}")) {
        response.headers_mut().insert("x-process-time", value);
    }
    response
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorResponse {
            code: "ORDER_NOT_FOUND".to_string(),
            message: "Order not found".to_string(),
        }),
    )
        .into_response()
}

fn bad_request(code: &str, message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiErrorResponse {
            code: code.to_string(),
            message,
        }),
    )
        .into_response()
}

fn internal_error(error: &OrderError) -> Response {
    tracing::error!("Order store operation failed: {error}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse {
            code: "INTERNAL_ERROR".to_string(),
            message: "Internal server error".to_string(),
        }),
    )
        .into_response()
}

/// Health check endpoint.
async fn health_check<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: OrderStore,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        name: state.app_name.clone(),
        version: state.version.clone(),
    })
}

/// List orders with optional filters and pagination.
async fn list_orders<S>(
    State(state): State<AppState<S>>,
    Query(params): Query<ListOrdersParams>,
) -> Response
where
    S: OrderStore,
{
    if params.limit < 1 || params.limit > MAX_PAGE_SIZE {
        return bad_request(
            "INVALID_LIMIT",
            format!("limit must be between 1 and {MAX_PAGE_SIZE}"),
        );
    }

    let query = ListOrdersQuery {
        skip: params.skip,
        limit: params.limit,
        customer_id: params.customer_id.map(CustomerId::new),
        status: params.status,
    };

    match state.store.list(query).await {
        Ok(orders) => {
            let body: Vec<OrderResponse> = orders.iter().map(OrderResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => internal_error(&e),
    }
}

/// Create a new order.
async fn create_order<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<CreateOrderRequest>,
) -> Response
where
    S: OrderStore,
{
    match state.store.create(request.into()).await {
        Ok(order) => {
            tracing::info!(order_id = %order.id(), "Order created");
            (StatusCode::CREATED, Json(OrderResponse::from(&order))).into_response()
        }
        Err(e @ OrderError::EmptyItems) => bad_request("EMPTY_ITEMS", e.to_string()),
    }
}

/// Get a single order by ID.
async fn get_order<S>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Response
where
    S: OrderStore,
{
    match state.store.get(&OrderId::new(id)).await {
        Ok(Some(order)) => (StatusCode::OK, Json(OrderResponse::from(&order))).into_response(),
        Ok(None) => not_found(),
        Err(e) => internal_error(&e),
    }
}

/// Update an order's status.
async fn update_order_status<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateOrderStatusRequest>,
) -> Response
where
    S: OrderStore,
{
    match state
        .store
        .update_status(&OrderId::new(id), request.status)
        .await
    {
        Ok(Some(order)) => {
            tracing::info!(order_id = %order.id(), status = %order.status(), "Order status updated");
            (StatusCode::OK, Json(OrderResponse::from(&order))).into_response()
        }
        Ok(None) => not_found(),
        Err(e) => internal_error(&e),
    }
}

/// Delete an order.
async fn delete_order<S>(State(state): State<AppState<S>>, Path(id): Path<String>) -> Response
where
    S: OrderStore,
{
    match state.store.delete(&OrderId::new(id)).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found(),
        Err(e) => internal_error(&e),
    }
}
