use std::net::SocketAddr;

use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;

/// Range bodies served by the mock API, keyed by prefix.
///
/// "password" hashes to 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8 and
/// "Password" to 8BE3C943B1609FFFBFC51AAD666D0A04ADF83C9D.
const RANGES: &[(&str, &str)] = &[
    (
        "5BAA6",
        "1D2DA4053E34E76F6576ED1DA63134B5E2A:2\r\n\
         1E4C9B93F3F0682250B6CF8331B7EE68FD8:3645804\r\n\
         1E4F2E3F4E8AC0F1E3E2D2C7B3C3E7A9F1A:1",
    ),
    (
        "8BE3C",
        "943B1609FFFBFC51AAD666D0A04ADF83C9D:117316\r\n\
         94A08F1D4E8B7D8A5F1B0C6E2E5A61F3C0D:12",
    ),
    // "hunter2", served without the count separator
    ("F3BBB", "D66A63D4BF1747940578EC3D0103530E21D"),
];

/// Prefix of "hunter3"; the mock answers it with a server error.
pub const FAILING_PREFIX: &str = "71544";

async fn range(Path(prefix): Path<String>) -> (StatusCode, String) {
    if prefix == FAILING_PREFIX {
        return (StatusCode::INTERNAL_SERVER_ERROR, String::new());
    }
    let body = RANGES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, body)| body.to_string())
        .unwrap_or_default();
    (StatusCode::OK, body)
}

pub async fn bind_local() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// Starts the mock range API and returns its base URL.
pub async fn spawn_range_api() -> String {
    let (listener, addr) = bind_local().await;
    let app = Router::new().route("/range/{prefix}", get(range));
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}/range")
}
