use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;
use validator::Validate;

use crate::core::{MatchError, Matcher};
use crate::models::{ErrorResponse, HealthResponse, MatchQuery};
use crate::services::ProfileStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
    pub matcher: Matcher,
}

/// Configure matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/matching/{entrepreneur_id}", web::get().to(find_matches));
}

/// Health check endpoint
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = match state.store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            tracing::warn!("Profile store health check failed: {}", e);
            false
        }
    };

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find mentor matches for an entrepreneur
///
/// GET /api/matching/{entrepreneurId}?limit=20&minScore=40
///
/// Responds with the ranked mentors as a JSON array of
/// `{ "mentor": {...}, "score": 0-100 }`.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for matching query: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let entrepreneur_id = path.into_inner();
    let span = tracing::info_span!("find_matches", request_id = %uuid::Uuid::new_v4());

    rank_for_entrepreneur(&state, entrepreneur_id, query.into_inner())
        .instrument(span)
        .await
}

async fn rank_for_entrepreneur(
    state: &AppState,
    entrepreneur_id: String,
    query: MatchQuery,
) -> HttpResponse {
    tracing::info!("Finding mentor matches for entrepreneur: {}", entrepreneur_id);

    let mut matches = match state
        .matcher
        .find_matches(state.store.as_ref(), &entrepreneur_id)
        .await
    {
        Ok(matches) => matches,
        Err(MatchError::NotFound(id)) => {
            tracing::info!("Entrepreneur {} not found", id);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Entrepreneur not found".to_string(),
                message: format!("No entrepreneur profile for user {}", id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to find matches for {}: {}", entrepreneur_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Server Error".to_string(),
                message: "Failed to load profiles".to_string(),
                status_code: 500,
            });
        }
    };

    let candidates = matches.len();

    if let Some(min_score) = query.min_score {
        matches.retain(|m| m.score >= min_score);
    }
    if let Some(limit) = query.limit {
        matches.truncate(limit as usize);
    }

    tracing::info!(
        "Returning {} matches for entrepreneur {} (from {} available mentors)",
        matches.len(),
        entrepreneur_id,
        candidates
    );

    HttpResponse::Ok().json(matches)
}
