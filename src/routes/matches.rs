use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{FindMatchesForm, FindMatchesRequest, FindMatchesResponse, HealthResponse, ReloadResponse, ErrorResponse};
use crate::services::DatasetStore;
use crate::core::{Matcher, MatchError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DatasetStore,
    pub matcher: Matcher,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/form", web::post().to(find_matches_form))
        .route("/dataset/reload", web::post().to(reload_dataset));
}

/// Health check endpoint
///
/// Reports `degraded` when the dataset cannot be loaded.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = match state.store.get().await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::warn!("Dataset unavailable for health check: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Dataset reload endpoint
///
/// POST /api/v1/dataset/reload
///
/// Drops the cached snapshot and loads the file again.
async fn reload_dataset(state: web::Data<AppState>) -> impl Responder {
    state.store.invalidate().await;

    match state.store.get().await {
        Ok(dataset) => {
            tracing::info!("Reloaded {} records from {}", dataset.len(), state.store.path().display());
            HttpResponse::Ok().json(ReloadResponse {
                path: state.store.path().display().to_string(),
                records: dataset.len(),
            })
        }
        Err(e) => {
            tracing::error!("Failed to reload dataset {}: {}", state.store.path().display(), e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load dataset".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// { "userId": "string" }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> HttpResponse {
    rank_for(&state, req.into_inner()).await
}

/// Form variant of the find matches endpoint
///
/// POST /api/v1/matches/form with `user_id=...`
async fn find_matches_form(
    state: web::Data<AppState>,
    form: web::Form<FindMatchesForm>,
) -> HttpResponse {
    rank_for(&state, form.into_inner().into()).await
}

async fn rank_for(state: &AppState, req: FindMatchesRequest) -> HttpResponse {
    let req = req.normalized();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    tracing::info!("Finding matches for user: {}", user_id);

    let dataset = match state.store.get().await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset {}: {}", state.store.path().display(), e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load dataset".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    match state.matcher.find_matches(user_id, &dataset) {
        Ok(result) => {
            tracing::info!(
                "Returning {} ranked profiles for user {}",
                result.matches.len(),
                user_id
            );

            HttpResponse::Ok().json(FindMatchesResponse {
                user_id: user_id.clone(),
                total_results: result.total_candidates,
                matches: result.matches,
            })
        }
        Err(MatchError::UserNotFound(id)) => {
            tracing::info!("User {} not found in dataset", id);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "User not found".to_string(),
                message: "User ID not found.".to_string(),
                status_code: 404,
            })
        }
    }
}
