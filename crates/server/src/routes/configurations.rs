use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{AppendHeaders, IntoResponse},
    Json,
};
use service::domain::ConfigurationInput;

use crate::errors::ApiError;
use crate::representation::{
    self_link, ConfigurationList, ConfigurationRepr, Message, CONFIGURATIONS_PATH,
};
use crate::routes::ServerState;

/// List the whole collection with its hypermedia links.
#[utoipa::path(get, path = "/configurations", tag = "configurations", responses((status = 200, description = "OK")))]
pub async fn list_configurations(State(state): State<ServerState>) -> Json<ConfigurationList> {
    let records = state.store.list().await;
    Json(ConfigurationList::from_records(records, CONFIGURATIONS_PATH))
}

#[utoipa::path(get, path = "/configurations/{id}", tag = "configurations", params(("id" = u32, Path, description = "Configuration id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get_configuration(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> Result<Json<ConfigurationRepr>, StatusCode> {
    match state.store.get(id).await {
        Some(rec) => Ok(Json(ConfigurationRepr::from_record(rec, CONFIGURATIONS_PATH))),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// 201 with the new resource URI in the Location header and no body.
/// Validation happens before an id is allocated.
#[utoipa::path(post, path = "/configurations", tag = "configurations", request_body = crate::openapi::ConfigurationInputDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create_configuration(
    State(state): State<ServerState>,
    Json(input): Json<ConfigurationInput>,
) -> Result<impl IntoResponse, ApiError> {
    let rec = state.store.create(input).await?;
    let link = self_link(CONFIGURATIONS_PATH, rec.id);
    Ok((StatusCode::CREATED, AppendHeaders([(header::LOCATION, link.href)])))
}

/// Existence is reported before a payload defect: a PUT to an unknown id
/// with an empty body gets 404, not 400.
#[utoipa::path(put, path = "/configurations/{id}", tag = "configurations", params(("id" = u32, Path, description = "Configuration id")), request_body = crate::openapi::ConfigurationInputDoc, responses((status = 200, description = "OK"), (status = 400, description = "Bad Request"), (status = 404, description = "Not Found")))]
pub async fn update_configuration(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    Json(input): Json<ConfigurationInput>,
) -> Result<Json<Message>, ApiError> {
    state.store.update(id, input).await?;
    Ok(Json(Message::new("Config Updated Successfully")))
}

#[utoipa::path(delete, path = "/configurations/{id}", tag = "configurations", params(("id" = u32, Path, description = "Configuration id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn delete_configuration(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
) -> StatusCode {
    if state.store.delete(id).await {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
