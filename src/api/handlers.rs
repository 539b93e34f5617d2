//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use tracing::warn;

use super::responses::{
    AlertsResponse, ApiResponse, DismissResponse, ErrorResponse, HealthResponse, HomeResponse,
    StatusResponse, TableResponse, TimerView,
};
use crate::state::{format_clock, AppState, Doneness, EggSize};

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    warn!("Rejected request: {}", error);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

fn timer_view(state: &AppState) -> TimerView {
    TimerView::new(state.timer.snapshot(), state.alerts.pending_count())
}

/// Build the response for a command, recording it when it changed the timer
fn command_response(state: &AppState, action: &str, applied: bool, message: String) -> ApiResponse {
    if applied {
        state.record_action(action);
        ApiResponse::applied(message, timer_view(state))
    } else {
        ApiResponse::ignored(message, timer_view(state))
    }
}

/// Handle GET / - Home view
pub async fn home_handler() -> Json<HomeResponse> {
    Json(HomeResponse::new())
}

/// Handle GET /timer - Current timer view
pub async fn timer_handler(State(state): State<Arc<AppState>>) -> Json<TimerView> {
    Json(timer_view(&state))
}

/// Handle GET /timer/table - Full cook-time table
pub async fn table_handler() -> Json<TableResponse> {
    Json(TableResponse::full())
}

/// Handle POST /timer/size/:size - Select the egg size
pub async fn select_size_handler(
    State(state): State<Arc<AppState>>,
    Path(size): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let size: EggSize = size.parse().map_err(bad_request)?;
    let applied = state.timer.select_size(size);
    let message = if applied {
        format!("Egg size set to {}", size)
    } else {
        "Egg size is locked while cooking".to_string()
    };
    Ok(Json(command_response(&state, "size", applied, message)))
}

/// Handle POST /timer/doneness/:doneness - Select the doneness
pub async fn select_doneness_handler(
    State(state): State<Arc<AppState>>,
    Path(doneness): Path<String>,
) -> Result<Json<ApiResponse>, ApiError> {
    let doneness: Doneness = doneness.parse().map_err(bad_request)?;
    let applied = state.timer.select_doneness(doneness);
    let message = if applied {
        format!("Doneness set to {}", doneness)
    } else {
        "Doneness is locked while cooking".to_string()
    };
    Ok(Json(command_response(&state, "doneness", applied, message)))
}

/// Handle POST /timer/start - Start cooking
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let applied = state.timer.start();
    let message = if applied {
        format!("Timer started for {}", format_clock(state.timer.display_seconds()))
    } else {
        "Timer is already running".to_string()
    };
    Json(command_response(&state, "start", applied, message))
}

/// Handle POST /timer/stop - Cancel cooking
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let applied = state.timer.stop();
    let message = if applied {
        "Timer stopped".to_string()
    } else {
        "Timer is not running".to_string()
    };
    Json(command_response(&state, "stop", applied, message))
}

/// Handle GET /alerts - Alerts shown so far
pub async fn alerts_handler(State(state): State<Arc<AppState>>) -> Json<AlertsResponse> {
    Json(AlertsResponse {
        pending: state.alerts.pending_count(),
        alerts: state.alerts.alerts(),
    })
}

/// Handle POST /alerts/dismiss - Dismiss pending alerts
pub async fn dismiss_alerts_handler(State(state): State<Arc<AppState>>) -> Json<DismissResponse> {
    let dismissed = state.alerts.dismiss_all();
    if dismissed > 0 {
        state.record_action("dismiss");
    }
    Json(DismissResponse {
        dismissed,
        timestamp: Utc::now(),
    })
}

/// Handle GET /status - Timer plus server metadata
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_action, last_action_time) = state.get_last_action();
    Json(StatusResponse {
        timer: timer_view(&state),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
