//! HTTP front end: `GET /password-checker/{password}`.
//!
//! Responds with `{"Occurrences":N}`, plus `"Hash"` when the server runs in
//! debug mode and the request carries a truthy `debug` query parameter. Every
//! other method or path is a 404.

use axum::Router;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use hibp_range::BreachChecker;
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Route prefix; everything after it is taken as the password.
pub const PATH: &str = "/password-checker";

/// Body of every 404.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

#[derive(Clone)]
struct AppState {
    checker: BreachChecker,
    debug_mode: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CheckResponse {
    #[serde(rename = "Occurrences")]
    pub occurrences: u64,
    #[serde(rename = "Hash", skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Builds the router. `debug_mode` gates whether `?debug` is honored at all.
pub fn router(checker: BreachChecker, debug_mode: bool) -> Router {
    let state = AppState { checker, debug_mode };
    Router::new()
        .route(
            &format!("{PATH}/{{*password}}"),
            get(check_password).fallback(not_found),
        )
        .fallback(not_found)
        .with_state(state)
}

/// Serves the router on an already bound listener until it fails.
pub async fn serve(
    listener: TcpListener,
    checker: BreachChecker,
    debug_mode: bool,
) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, debug_mode, "Password checker listening");
    }
    axum::serve(listener, router(checker, debug_mode)).await
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

async fn check_password(
    method: Method,
    State(state): State<AppState>,
    password: Result<Path<String>, PathRejection>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    // `get` routes also answer HEAD.
    if method != Method::GET {
        return not_found().await.into_response();
    }

    let Path(password) = match password {
        Ok(password) => password,
        Err(rejection) => {
            warn!(error = %rejection, "Password is not valid UTF-8");
            return (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()).into_response();
        }
    };

    let supply_hash = state.debug_mode && debug_requested(first_value(&params, "debug"));

    let lookup = match state.checker.check(password.as_bytes()).await {
        Ok(lookup) => lookup,
        Err(e) => {
            warn!(error = %e, "Password check failed");
            return (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response();
        }
    };

    info!(
        hash = %lookup.hash,
        occurrences = lookup.occurrences,
        debug_info = supply_hash,
        "Password checked"
    );

    let body = CheckResponse {
        occurrences: lookup.occurrences,
        hash: supply_hash.then(|| lookup.hash.to_string()),
    };

    match serde_json::to_vec(&body) {
        Ok(json) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            json,
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to encode response");
            (StatusCode::FAILED_DEPENDENCY, e.to_string()).into_response()
        }
    }
}

/// First value of a repeated query key.
fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// `?debug` without a value counts as a request; otherwise the value must
/// parse as a boolean.
fn debug_requested(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some("") => true,
        Some(v) => parse_bool(v).unwrap_or(false),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
