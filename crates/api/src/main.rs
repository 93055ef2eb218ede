use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tubesense_core::error::{ErrorKind, PipelineError};
use tubesense_core::ingest::{CommentSource, YouTubeClient};
use tubesense_core::report::{DashboardReport, DEFAULT_PREVIEW_ROWS};
use tubesense_core::sentiment::{LexiconModel, SentimentModel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = tubesense_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let source: Option<Arc<dyn CommentSource>> = match YouTubeClient::from_settings(&settings) {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            sentry_anyhow::capture_anyhow(&e);
            tracing::error!(error = %e, "YouTube client unavailable; starting API in degraded mode");
            None
        }
    };

    let model = LexiconModel::load(settings.sentiment_lexicon_path.as_deref())?;
    tracing::info!(words = model.len(), "sentiment lexicon ready");

    let state = AppState {
        source,
        model: Arc::new(model),
        max_comments: settings.max_comments,
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/analyze", get(analyze))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Clone)]
struct AppState {
    source: Option<Arc<dyn CommentSource>>,
    model: Arc<dyn SentimentModel>,
    max_comments: usize,
}

#[derive(Debug, Deserialize)]
struct AnalyzeParams {
    url: String,
    max_comments: Option<usize>,
    preview: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    error: String,
    kind: Option<ErrorKind>,
}

#[derive(Debug)]
enum ApiError {
    Unavailable,
    Pipeline(PipelineError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiErrorBody {
                    error: "comment source is not configured".to_string(),
                    kind: None,
                },
            ),
            ApiError::Pipeline(err) => {
                let kind = err.kind();
                let status = match kind {
                    ErrorKind::Validation => StatusCode::BAD_REQUEST,
                    ErrorKind::Source | ErrorKind::Parse => StatusCode::BAD_GATEWAY,
                };
                (
                    status,
                    ApiErrorBody {
                        error: format!("Error: {err}"),
                        kind: Some(kind),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<DashboardReport>, ApiError> {
    let Some(source) = &state.source else {
        return Err(ApiError::Unavailable);
    };

    let max_comments = params.max_comments.unwrap_or(state.max_comments);
    let preview = params.preview.unwrap_or(DEFAULT_PREVIEW_ROWS);

    let batch = tubesense_core::pipeline::analyze_url(
        source.as_ref(),
        state.model.as_ref(),
        &params.url,
        max_comments,
    )
    .await
    .map_err(|e| {
        if e.kind() != ErrorKind::Validation {
            sentry::capture_error(&e);
        }
        tracing::warn!(error = %e, kind = ?e.kind(), url = %params.url, "analyze failed");
        ApiError::Pipeline(e)
    })?;

    Ok(Json(DashboardReport::build(&batch, preview)))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &tubesense_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}
