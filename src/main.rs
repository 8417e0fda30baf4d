//! Prediction API server.
//!
//! Loads the persisted preprocessor, regressor and target transformer once at
//! startup and serves single-row predictions. The artifacts are read-only
//! here, so the shared state is a plain `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};

use trip_duration_ml::pipeline::persist;
use trip_duration_ml::{
    ColumnPreprocessor, Frame, GradientBoostedRegressor, PowerTransformer, PredictionRequest,
};

struct AppState {
    preprocessor: ColumnPreprocessor,
    model: GradientBoostedRegressor,
    output_transformer: PowerTransformer,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let root = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let state = Arc::new(AppState {
        preprocessor: persist::load_artifact(&persist::transformer_path(
            &root,
            persist::PREPROCESSOR_FILE,
        ))?,
        model: persist::load_artifact(&persist::model_path(&root))?,
        output_transformer: persist::load_artifact(&persist::transformer_path(
            &root,
            persist::OUTPUT_TRANSFORMER_FILE,
        ))?,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(home))
        .route("/predictions", post(do_predictions))
        .layer(cors)
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 8000));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn home() -> &'static str {
    "Welcome to taxi price prediction app"
}

async fn do_predictions(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictionRequest>,
) -> Result<String, (StatusCode, String)> {
    predict_duration(&state, &request)
        .map(|minutes| format!("Trip duration for the trip is {minutes:.2} minutes"))
        .map_err(|e| {
            tracing::warn!("prediction failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })
}

fn predict_duration(
    state: &AppState,
    request: &PredictionRequest,
) -> trip_duration_ml::Result<f64> {
    let mut frame = Frame::new();
    for (name, value) in PredictionRequest::COLUMNS.iter().zip(request.values()) {
        frame.push_column(*name, vec![value])?;
    }

    let transformed = state.preprocessor.transform(&frame)?;
    let predictions = state.model.predict(&transformed.to_matrix());
    let minutes = state.output_transformer.inverse_transform(&predictions);
    Ok(minutes[0])
}
