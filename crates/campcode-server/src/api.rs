//! Route handlers for `/health` and `/generate`.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::info;

use campcode_core::{GenerateOptions, LEN_CEIL, LEN_FLOOR, generate, generate_with_rng};

use crate::envelope::{ApiResponse, Meta};
use crate::error::ApiError;
use crate::store::{CodeStore, JsonFileStore, normalize_key};

pub const SERVICE_NAME: &str = "campcode";

/// Shared state: the idempotency store behind a single-writer mutex.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<JsonFileStore>>,
}

impl AppState {
    pub fn new(store: JsonFileStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub service: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub campaign_name: String,
    #[serde(default)]
    pub campaign_description: String,
    #[serde(default = "default_min_len")]
    pub min_len: usize,
    #[serde(default = "default_max_len")]
    pub max_len: usize,
    #[serde(default = "default_include_year")]
    pub include_year: bool,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub request_id: Option<String>,
}

fn default_min_len() -> usize {
    LEN_FLOOR
}

fn default_max_len() -> usize {
    LEN_CEIL
}

fn default_include_year() -> bool {
    true
}

fn default_count() -> usize {
    8
}

#[derive(Debug, Serialize)]
pub struct GenerateData {
    pub campaign_name: String,
    pub campaign_description: String,
    pub generated_code: String,
    pub candidates: Vec<String>,
    pub generation_mode: &'static str,
}

pub async fn health() -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::new(
        HealthData {
            service: SERVICE_NAME,
            status: "healthy",
        },
        Meta::now(None),
    ))
}

pub async fn generate_code(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<GenerateData>>, ApiError> {
    let started = Instant::now();
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidJson(rejection.body_text()))?;

    let name = request.campaign_name.trim().to_string();
    let description = request.campaign_description.trim().to_string();
    if name.is_empty() {
        return Err(ApiError::Validation("campaign_name is required".into()));
    }
    if request.count == 0 {
        return Err(ApiError::Validation("count must be at least 1".into()));
    }

    let key = normalize_key(&name, &description);
    let mut store = state
        .store
        .lock()
        .map_err(|_| ApiError::Internal("store lock poisoned".into()))?;

    let (generated_code, candidates) = match store.get(&key) {
        Some(code) => {
            info!(key = %key, "idempotency store hit");
            (code.to_string(), vec![code.to_string()])
        }
        None => {
            // The name is the primary context; a description is a
            // secondary signal and gets half the weight.
            let context = if description.is_empty() {
                name.clone()
            } else {
                format!("{name} {name} {description}")
            };
            let options = GenerateOptions {
                min_len: request.min_len,
                max_len: request.max_len,
                include_year: request.include_year,
                count: request.count,
            };
            let candidates = match request.seed {
                Some(seed) => {
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    generate_with_rng(&context, &options, &mut rng)?
                }
                None => generate(&context, &options)?,
            };
            let code = candidates
                .first()
                .cloned()
                .ok_or_else(|| ApiError::Internal("empty candidate list".into()))?;
            store.put(key, code.clone())?;
            (code, candidates)
        }
    };
    drop(store);

    let elapsed_ms = started.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::new(
        GenerateData {
            campaign_name: name,
            campaign_description: description,
            generated_code,
            candidates,
            generation_mode: "rules_only",
        },
        Meta::now(request.request_id).with_processing_ms(elapsed_ms),
    )))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
