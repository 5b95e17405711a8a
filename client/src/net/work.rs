//! Project and request endpoints.

use wire::endpoints;
use wire::{ApiError, Id, Project, ProjectDraft, Request, RequestDraft, ShareRequest};

use super::api::{self, Verb};

/// # Errors
///
/// See [`api::get`].
pub async fn projects() -> Result<Vec<Project>, ApiError> {
    api::get(endpoints::PROJECTS).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn create_project(draft: &ProjectDraft) -> Result<Project, ApiError> {
    api::post(endpoints::PROJECTS, draft).await
}

/// # Errors
///
/// See [`api::call`].
pub async fn delete_project(id: Id) -> Result<(), ApiError> {
    api::call(Verb::Delete, &endpoints::project(id)).await
}

/// Requests owned by the current user.
///
/// # Errors
///
/// See [`api::get`].
pub async fn requests() -> Result<Vec<Request>, ApiError> {
    api::get(endpoints::REQUESTS).await
}

/// Requests other users shared with the current user.
///
/// # Errors
///
/// See [`api::get`].
pub async fn shared_requests() -> Result<Vec<Request>, ApiError> {
    api::get(endpoints::REQUESTS_SHARED).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn request(id: Id) -> Result<Request, ApiError> {
    api::get(&endpoints::request(id)).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn create_request(draft: &RequestDraft) -> Result<Request, ApiError> {
    api::post(endpoints::REQUESTS, draft).await
}

/// # Errors
///
/// See [`api::put`].
pub async fn update_request(id: Id, draft: &RequestDraft) -> Result<Request, ApiError> {
    api::put(&endpoints::request(id), draft).await
}

/// # Errors
///
/// See [`api::call`].
pub async fn delete_request(id: Id) -> Result<(), ApiError> {
    api::call(Verb::Delete, &endpoints::request(id)).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn share_request(id: Id, user_ids: Vec<Id>) -> Result<Request, ApiError> {
    api::post(&endpoints::request_share(id), &ShareRequest { user_ids }).await
}
