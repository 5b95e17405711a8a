//! Marketplace endpoints.
//!
//! Uploads are multipart and therefore browser-only.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use wire::endpoints;
use wire::{ApiError, CheckoutSession, DownloadLink, Id, Product};

use super::api::{self, Verb};

/// Text fields of a product upload; the file travels separately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductUpload {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category: Option<String>,
}

impl ProductUpload {
    /// Multipart text fields in submission order.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("price", wire::format_price(self.price_cents).trim_start_matches('$').to_owned()),
        ];
        if let Some(category) = &self.category {
            fields.push(("category", category.clone()));
        }
        fields
    }
}

/// # Errors
///
/// See [`api::get`].
pub async fn products(search: Option<&str>) -> Result<Vec<Product>, ApiError> {
    api::get(&endpoints::products(search)).await
}

/// # Errors
///
/// See [`api::get`].
pub async fn product(id: Id) -> Result<Product, ApiError> {
    api::get(&endpoints::product(id)).await
}

/// Signed download URL for a product the user may download.
///
/// # Errors
///
/// See [`api::get`].
pub async fn download(id: Id) -> Result<DownloadLink, ApiError> {
    api::get(&endpoints::product_download(id)).await
}

/// Start a hosted checkout for a paid product.
///
/// # Errors
///
/// See [`api::post_empty`].
pub async fn purchase(id: Id) -> Result<CheckoutSession, ApiError> {
    api::post_empty(&endpoints::product_purchase(id)).await
}

/// # Errors
///
/// See [`api::call`].
pub async fn delete(id: Id) -> Result<(), ApiError> {
    api::call(Verb::Delete, &endpoints::product(id)).await
}

/// Upload a product with its file as multipart form data.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the form cannot be assembled.
#[cfg(feature = "hydrate")]
pub async fn upload(upload: &ProductUpload, file: web_sys::File) -> Result<Product, ApiError> {
    let js_error = |e: wasm_bindgen::JsValue| ApiError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in upload.form_fields() {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    form.append_with_blob_and_filename("file", &file, &file.name()).map_err(js_error)?;
    api::post_form(endpoints::PRODUCTS, form).await
}
