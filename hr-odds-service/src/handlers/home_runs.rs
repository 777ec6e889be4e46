use crate::dtos::{DayParams, HomeRunProjection};
use crate::services::metrics::{record_records_served, record_rejection};
use crate::startup::AppState;
use crate::utils::normalize_date;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub async fn index() -> impl IntoResponse {
    (StatusCode::OK, Json("Hello world"))
}

/// Every prediction stored for one day, most likely home run first.
#[tracing::instrument(name = "get_hr_probs_for_day", skip_all, fields(date = tracing::field::Empty))]
pub async fn get_hr_probs_for_day(
    State(state): State<AppState>,
    params: Result<Query<DayParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|rejection| {
        record_rejection("malformed_query");
        AppError::BadRequest(rejection.body_text())
    })?;

    let Some(requested) = params.date else {
        record_rejection("missing_date");
        return Err(AppError::BadRequest("Must specify date".to_string()));
    };

    let date = normalize_date(&requested).map_err(|e| {
        tracing::warn!(requested = %requested, "Rejected unparseable date");
        record_rejection("invalid_date");
        e
    })?;
    tracing::Span::current().record("date", date.as_str());

    let records = state.store.records_for_date(&date).await?;

    let projections = records
        .into_iter()
        .map(HomeRunProjection::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    record_records_served(projections.len());
    tracing::info!(
        requested = %requested,
        count = projections.len(),
        "Served home run probabilities"
    );

    Ok((StatusCode::OK, Json(projections)))
}
