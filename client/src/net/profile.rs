//! Developer profile and showcase endpoints.

use wire::endpoints;
use wire::{ApiError, DeveloperProfile, Id, ProfileUpdate, Showcase, ShowcaseDraft};

use super::api::{self, Verb};

/// # Errors
///
/// A developer without a profile yet gets [`ApiError::NotFound`].
pub async fn own_profile() -> Result<DeveloperProfile, ApiError> {
    api::get(endpoints::PROFILE_DEVELOPER).await
}

/// # Errors
///
/// See [`api::put`].
pub async fn update_profile(update: &ProfileUpdate) -> Result<DeveloperProfile, ApiError> {
    api::put(endpoints::PROFILE_DEVELOPER, update).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn public_developers() -> Result<Vec<DeveloperProfile>, ApiError> {
    api::get(endpoints::PROFILE_DEVELOPERS_PUBLIC).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn developer(id: Id) -> Result<DeveloperProfile, ApiError> {
    api::get(&endpoints::developer(id)).await
}

/// The current developer's showcase entries.
///
/// # Errors
///
/// See [`api::get`].
pub async fn showcases() -> Result<Vec<Showcase>, ApiError> {
    api::get(endpoints::SHOWCASE).await
}

/// # Errors
///
/// See [`api::post`].
pub async fn create_showcase(draft: &ShowcaseDraft) -> Result<Showcase, ApiError> {
    api::post(endpoints::SHOWCASE, draft).await
}

/// # Errors
///
/// See [`api::put`].
pub async fn update_showcase(id: Id, draft: &ShowcaseDraft) -> Result<Showcase, ApiError> {
    api::put(&endpoints::showcase(id), draft).await
}

/// # Errors
///
/// See [`api::call`].
pub async fn delete_showcase(id: Id) -> Result<(), ApiError> {
    api::call(Verb::Delete, &endpoints::showcase(id)).await
}
