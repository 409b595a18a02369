//! Review REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateReviewRequest, Identity, ReviewDto, ReviewListResponse,
    ReviewResponse,
};

use tm_core::{ErrorLocation, Review};
use tm_db::ReviewRepository;

use std::panic::Location;

use axum::{extract::State, Json};

/// POST /api/v1/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Identity(email): Identity,
    Json(req): Json<CreateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    if req.content.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "Review content must not be empty".to_string(),
            field: Some("content".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if !(1..=5).contains(&req.rating) {
        return Err(ApiError::Validation {
            message: "Rating must be between 1 and 5".to_string(),
            field: Some("rating".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let review = Review::new(email, req.name, req.content, req.rating);

    let repo = ReviewRepository::new(state.pool.clone());
    repo.create(&review).await?;

    log::info!("Created review {} ({})", review.id, review.email);

    Ok(Json(ReviewResponse {
        review: review.into(),
    }))
}

/// GET /api/v1/reviews
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<ReviewListResponse>> {
    let repo = ReviewRepository::new(state.pool.clone());
    let reviews = repo.find_all().await?;

    Ok(Json(ReviewListResponse {
        reviews: reviews.into_iter().map(ReviewDto::from).collect(),
    }))
}
