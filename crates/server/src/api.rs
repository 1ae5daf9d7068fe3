//! REST endpoints for the address service.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/addresses/` | Create an address |
//! | `PUT` | `/addresses/{address_id}` | Replace an address |
//! | `DELETE` | `/addresses/{address_id}` | Delete an address |
//! | `GET` | `/addresses/nearby/` | Addresses within `distance` km of a point |
//! | `GET` | `/health` | Liveness check |
//!
//! Every request becomes one [`Command`] executed on the blocking pool, since
//! each command does synchronous SQLite work on its own connection.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::error;

use geoaddr_executor::{AddressId, Command, Error, Executor, NewAddress, Output};

/// Application state shared across all handlers.
pub type AppState = Executor;

/// Build the router for all endpoints.
pub fn router(executor: AppState) -> Router {
    Router::new()
        .route("/addresses/", post(create_address))
        .route("/addresses/nearby/", get(nearby_addresses))
        .route(
            "/addresses/{address_id}",
            put(update_address).delete(delete_address),
        )
        .route("/health", get(health))
        .with_state(executor)
}

/// Body of a successful write.
#[derive(Debug, Serialize)]
struct MessageResponse {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<AddressId>,
}

impl MessageResponse {
    fn new(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    detail: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: String,
}

/// Query string of the nearby endpoint.
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    /// Latitude of the center point
    pub latitude: f64,
    /// Longitude of the center point
    pub longitude: f64,
    /// Radius in kilometers
    pub distance: f64,
}

/// Executor error rendered as an HTTP response.
#[derive(Debug)]
struct ApiError(Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            Error::InvalidInput { reason } => (StatusCode::UNPROCESSABLE_ENTITY, reason.clone()),
            Error::AddressNotFound { .. } => (StatusCode::NOT_FOUND, "Address not found".into()),
            Error::Storage { .. } | Error::Io { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage error".into())
            }
            Error::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal error".into()),
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

/// Run one command on the blocking pool.
async fn run(executor: Executor, cmd: Command) -> Result<Output, ApiError> {
    let name = cmd.name();
    match tokio::task::spawn_blocking(move || executor.execute(cmd)).await {
        Ok(result) => result.map_err(ApiError),
        Err(e) => {
            error!(command = name, error = %e, "command task failed");
            Err(ApiError(Error::Internal {
                reason: e.to_string(),
            }))
        }
    }
}

fn unexpected(output: Output) -> ApiError {
    ApiError(Error::Internal {
        reason: format!("unexpected output: {:?}", output),
    })
}

/// `POST /addresses/` - create an address.
async fn create_address(
    State(executor): State<AppState>,
    Json(address): Json<NewAddress>,
) -> Result<Json<MessageResponse>, ApiError> {
    match run(executor, Command::AddressCreate { address }).await? {
        Output::Created { id } => Ok(Json(MessageResponse {
            message: "Address created successfully",
            id: Some(id),
        })),
        other => Err(unexpected(other)),
    }
}

/// `PUT /addresses/{address_id}` - replace every field of an address.
async fn update_address(
    State(executor): State<AppState>,
    Path(id): Path<AddressId>,
    Json(address): Json<NewAddress>,
) -> Result<Json<MessageResponse>, ApiError> {
    run(executor, Command::AddressUpdate { id, address }).await?;
    Ok(Json(MessageResponse::new("Address updated successfully")))
}

/// `DELETE /addresses/{address_id}` - delete an address.
async fn delete_address(
    State(executor): State<AppState>,
    Path(id): Path<AddressId>,
) -> Result<Json<MessageResponse>, ApiError> {
    run(executor, Command::AddressDelete { id }).await?;
    Ok(Json(MessageResponse::new("Address deleted successfully")))
}

/// `GET /addresses/nearby/` - every address within `distance` km.
async fn nearby_addresses(
    State(executor): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<Response, ApiError> {
    let cmd = Command::AddressNearby {
        latitude: params.latitude,
        longitude: params.longitude,
        distance_km: params.distance,
    };
    match run(executor, cmd).await? {
        Output::Addresses(found) => Ok(Json(found).into_response()),
        other => Err(unexpected(other)),
    }
}

/// `GET /health` - liveness check.
async fn health(State(executor): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    match run(executor, Command::Ping).await? {
        Output::Pong { version } => Ok(Json(HealthResponse {
            status: "ok",
            version,
        })),
        other => Err(unexpected(other)),
    }
}
