use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::people::models::PersonRecord;
use crate::features::people::services::PeopleService;
use crate::shared::types::{DataResponse, ErrorResponse};

/// List every person record in the collection
#[utoipa::path(
    get,
    path = "/api/pessoas",
    tag = "People",
    responses(
        (status = 200, description = "All people records", body = DataResponse<Vec<PersonRecord>>),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Database unreachable or query failed", body = ErrorResponse)
    )
)]
pub async fn list_people(
    State(service): State<Arc<PeopleService>>,
) -> Result<Json<DataResponse<Vec<PersonRecord>>>> {
    let people = service.list_people().await?;
    Ok(Json(DataResponse::new(people)))
}

/// Any method other than GET on the people endpoint
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
