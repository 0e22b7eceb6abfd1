//! Transport seam for the admin API.
//!
//! Feature clients describe a request as a path plus optional query parameters
//! and hand it to a [`Transport`]. The transport owns everything else: base URL,
//! headers, timeouts, the response envelope, and error mapping.

pub mod envelope;
pub mod errors;
pub mod http;

pub use self::errors::ApiError;
pub use self::http::{HttpConfig, HttpTransport};

use serde::{de::DeserializeOwned, Serialize};
use std::{future::Future, sync::Arc};

/// A GET request: a path relative to the API base and optional query params.
#[derive(Debug)]
pub struct GetRequest<'a, P: ?Sized = ()> {
    pub url: &'a str,
    pub params: Option<&'a P>,
}

impl<'a> GetRequest<'a> {
    /// Request without query parameters.
    #[must_use]
    pub fn new(url: &'a str) -> Self {
        Self { url, params: None }
    }
}

impl<'a, P: ?Sized> GetRequest<'a, P> {
    /// Request whose `params` are serialized into the query string.
    #[must_use]
    pub fn with_params(url: &'a str, params: &'a P) -> Self {
        Self {
            url,
            params: Some(params),
        }
    }
}

impl<P: ?Sized> Clone for GetRequest<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for GetRequest<'_, P> {}

/// Generic HTTP GET capability: issue one request, decode the body as `T`.
pub trait Transport: Send + Sync {
    fn get<T, P>(
        &self,
        request: GetRequest<'_, P>,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send,
        P: Serialize + Sync + ?Sized;
}

impl<R: Transport + ?Sized> Transport for Arc<R> {
    fn get<T, P>(
        &self,
        request: GetRequest<'_, P>,
    ) -> impl Future<Output = Result<T, ApiError>> + Send
    where
        T: DeserializeOwned + Send,
        P: Serialize + Sync + ?Sized,
    {
        (**self).get(request)
    }
}
