//! REST access layer.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! configured API base URL, with the stored bearer token attached.
//! Server-side (SSR): every call returns [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are classified once by [`ApiError::from_response`] and
//! undecodable bodies become [`ApiError::Decode`]. A 401 is handled here:
//! the token is cleared and the browser is sent to `/login`, unless the call
//! was itself a sign-in attempt or a token-addressed collaboration request.
//! No retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wire::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Request body.
pub enum Payload {
    Empty,
    Json(String),
    #[cfg(feature = "hydrate")]
    Form(web_sys::FormData),
}

impl Payload {
    /// Serialize `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when `body` cannot be serialized.
    pub fn json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_string(body)
            .map(Self::Json)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Whether a 401 on `path` should end the session.
///
/// Sign-in endpoints report bad credentials as 401, and collaboration
/// requests authenticate with their own access token.
pub fn should_redirect_on_unauthorized(path: &str) -> bool {
    !(path.starts_with("/auth/") || path.starts_with("/collaboration/"))
}

/// Map a response to its body text or a classified error.
///
/// # Errors
///
/// Returns the classified [`ApiError`] for any non-2xx status.
pub fn check_status(status: u16, body: String) -> Result<String, ApiError> {
    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(ApiError::from_response(status, &body))
    }
}

/// Body text of a response whose read may have failed midway.
///
/// # Errors
///
/// Returns [`ApiError::Network`] when the body could not be read.
pub fn read_body<E: std::fmt::Display>(read: Result<String, E>) -> Result<String, ApiError> {
    read.map_err(|e| ApiError::Network(format!("reading response body: {e}")))
}

/// Decode a JSON body.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] on malformed or mismatched JSON.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Perform a request and return the raw body of a 2xx response.
///
/// # Errors
///
/// Returns a network, status, or (on the server) availability error.
pub async fn send(verb: Verb, path: &str, payload: Payload) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::{Request, RequestBuilder};

        let url = crate::config::ClientConfig::current().url(path);
        let mut builder: RequestBuilder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        };
        builder = builder.header("Accept", "application/json");
        if let Some(token) = crate::util::session::load_token() {
            builder = builder.header("Authorization", &crate::util::session::bearer_header(&token));
        }

        let request = match payload {
            Payload::Empty => builder.build(),
            Payload::Json(text) => builder.header("Content-Type", "application/json").body(text),
            Payload::Form(form) => builder.body(form),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let result = read_body(resp.text().await).and_then(|body| check_status(status, body));
        if let Err(err) = &result {
            if err.is_unauthorized() && should_redirect_on_unauthorized(path) {
                handle_unauthorized();
            } else {
                leptos::logging::warn!("{} {path} failed: {err}", verb.as_str());
            }
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, payload);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn handle_unauthorized() {
    leptos::logging::warn!("session rejected by the backend; signing out");
    crate::util::session::clear_token();
    if let Some(window) = web_sys::window() {
        let on_login = window.location().pathname().is_ok_and(|p| p == "/login");
        if !on_login {
            let _ = window.location().set_href("/login");
        }
    }
}

/// `GET path` and decode the JSON response.
///
/// # Errors
///
/// See [`send`] and [`decode_body`].
pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let body = send(Verb::Get, path, Payload::Empty).await?;
    decode_body(&body)
}

/// Send a JSON body and decode the JSON response.
///
/// # Errors
///
/// See [`send`] and [`decode_body`].
pub async fn send_json<B: Serialize, T: DeserializeOwned>(verb: Verb, path: &str, body: &B) -> Result<T, ApiError> {
    let body = send(verb, path, Payload::json(body)?).await?;
    decode_body(&body)
}

/// `POST path` with a JSON body.
///
/// # Errors
///
/// See [`send_json`].
pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send_json(Verb::Post, path, body).await
}

/// `PUT path` with a JSON body.
///
/// # Errors
///
/// See [`send_json`].
pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    send_json(Verb::Put, path, body).await
}

/// Bodyless call whose response body is ignored.
///
/// # Errors
///
/// See [`send`].
pub async fn call(verb: Verb, path: &str) -> Result<(), ApiError> {
    send(verb, path, Payload::Empty).await.map(|_| ())
}

/// Bodyless `POST` that decodes a JSON response.
///
/// # Errors
///
/// See [`send`] and [`decode_body`].
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let body = send(Verb::Post, path, Payload::Empty).await?;
    decode_body(&body)
}

/// Multipart `POST`.
///
/// # Errors
///
/// See [`send`] and [`decode_body`].
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let body = send(Verb::Post, path, Payload::Form(form)).await?;
    decode_body(&body)
}
