use axum::{extract::State, Json};
use service::landing_page::LandingPageContent;
use tracing::error;

use crate::errors::{ApiError, LANDING_PAGE_MESSAGE};
use crate::state::ServerState;

/// Hero block, promotions and testimonials for the home page.
pub async fn get_landing_page(
    State(state): State<ServerState>,
) -> Result<Json<LandingPageContent>, ApiError> {
    state
        .services
        .landing_page
        .get_landing_page_data()
        .await
        .map(Json)
        .map_err(|e| {
            error!(event = "landing_page_failed", error = %e, "failed to load landing page data");
            ApiError::internal(LANDING_PAGE_MESSAGE)
        })
}
