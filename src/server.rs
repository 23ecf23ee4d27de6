//! Web UI: one page with a slider and a trigger button, backed by a small
//! JSON API. The calculation itself runs on a blocking thread so the
//! executor stays responsive while the sorts grind.

use crate::config::Config;
use crate::controller::{Controller, CycleError, Phase, PhaseFlag};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct AppState {
    // One cycle at a time: a second trigger waits on this mutex until the
    // running cycle publishes its results.
    controller: Arc<Mutex<Controller>>,
    phase: PhaseFlag,
    config: Arc<Config>,
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    elements: usize,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    status: String,
    bubble_time: String,
    insertion_time: String,
    chart_url: String,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    state: &'static str,
}

/// Bind the configured address (port 0 asks the OS for an ephemeral port)
/// and serve the UI until the process is stopped.
pub async fn serve(config: Config) -> Result<()> {
    let controller = Controller::new(config.clone())
        .context("failed to create chart directory")?;
    let phase = controller.phase();
    let state = AppState {
        controller: Arc::new(Mutex::new(controller)),
        phase,
        config: Arc::new(config.clone()),
    };

    let app = Router::new()
        .route("/", get(index))
        .route("/api/calculate", post(calculate))
        .route("/api/status", get(status))
        .route("/chart/:id", get(chart_png))
        .with_state(state);

    let ip: std::net::IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid bind host '{}'", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);

    let server = axum::Server::try_bind(&addr)
        .with_context(|| format!("cannot bind {}", addr))?
        .serve(app.into_make_service());

    println!(
        "Element count range: {}..={}",
        config.array.min_elements, config.array.max_elements
    );
    println!("✓ Serving sorting comparison UI on http://{}", server.local_addr());

    server.await.context("server error")?;
    Ok(())
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(index_page(&state.config))
}

async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let state_str = match state.phase.get() {
        Phase::Idle => "idle",
        Phase::Calculating => "calculating",
    };
    Json(StatusResponse { state: state_str })
}

async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, (StatusCode, String)> {
    let controller = state.controller.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let mut controller = controller.lock().expect("controller mutex poisoned");
        controller.run_cycle(request.elements)
    })
    .await
    .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    match outcome {
        Ok(output) => Ok(Json(CalculateResponse {
            status: output.status,
            bubble_time: output.bubble_line,
            insertion_time: output.insertion_line,
            chart_url: format!("/chart/{}", output.chart.id),
        })),
        Err(err @ CycleError::InvalidElementCount { .. }) => {
            Err((StatusCode::BAD_REQUEST, err.to_string()))
        }
        Err(err) => Err((StatusCode::INTERNAL_SERVER_ERROR, err.to_string())),
    }
}

async fn chart_png(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let bytes = {
        let controller = state.controller.lock().expect("controller mutex poisoned");
        let path = match controller.chart_path(id) {
            Some(path) => path.to_path_buf(),
            None => return Err((StatusCode::NOT_FOUND, format!("no chart with id {}", id))),
        };
        std::fs::read(&path).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?
    };
    Ok(([(header::CONTENT_TYPE, "image/png")], bytes))
}

/// The single UI page. Slider bounds come from the configuration.
fn index_page(config: &Config) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Sorting comparison</title>
</head>
<body>
<h2>Sorting comparison</h2>
<label for="elements">Number of elements: <span id="count">{default}</span></label><br>
<input type="range" id="elements" min="{min}" max="{max}" value="{default}">
<button id="calculate">Calculate</button>
<p id="status"></p>
<p id="bubble"></p>
<p id="insertion"></p>
<img id="histogram" alt="Sorting time comparison" hidden>
<script>
const slider = document.getElementById('elements');
const count = document.getElementById('count');
slider.addEventListener('input', () => {{ count.textContent = slider.value; }});
document.getElementById('calculate').addEventListener('click', async () => {{
  const status = document.getElementById('status');
  status.textContent = 'Calculating...';
  const resp = await fetch('/api/calculate', {{
    method: 'POST',
    headers: {{ 'Content-Type': 'application/json' }},
    body: JSON.stringify({{ elements: Number(slider.value) }})
  }});
  if (!resp.ok) {{
    status.textContent = 'Error: ' + await resp.text();
    return;
  }}
  const data = await resp.json();
  status.textContent = data.status;
  document.getElementById('bubble').textContent = data.bubble_time;
  document.getElementById('insertion').textContent = data.insertion_time;
  const img = document.getElementById('histogram');
  img.src = data.chart_url;
  img.hidden = false;
}});
</script>
</body>
</html>
"#,
        min = config.array.min_elements,
        max = config.array.max_elements,
        default = config.array.default_elements,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_page_uses_configured_bounds() {
        let mut config = Config::default();
        config.array.min_elements = 100;
        config.array.max_elements = 5000;
        config.array.default_elements = 1000;

        let page = index_page(&config);
        assert!(page.contains(r#"min="100""#));
        assert!(page.contains(r#"max="5000""#));
        assert!(page.contains(r#"value="1000""#));
        assert!(page.contains("/api/calculate"));
    }

    #[test]
    fn test_status_response_serialization() {
        let json = serde_json::to_string(&StatusResponse { state: "idle" }).unwrap();
        assert_eq!(json, r#"{"state":"idle"}"#);
    }
}
