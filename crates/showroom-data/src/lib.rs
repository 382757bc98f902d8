//! Typed REST boundary for the Showroom storefront.
//!
//! The backend speaks Mongo-flavored JSON (`_id` keys, embedded documents).
//! Rather than letting those shapes leak into components untyped, this crate
//! decodes every response into explicit DTOs and validates them into domain
//! types at the boundary. A malformed payload becomes a [`FetchError`], not
//! a missing field three screens later.
//!
//! # Example
//!
//! ```rust,ignore
//! use showroom_data::StorefrontApi;
//!
//! let api = StorefrontApi::new("http://localhost:3000");
//! let products = api.products()?;
//! let cart = api.cart_items(&account_id)?;
//! ```

mod api;
mod dto;
mod error;
mod request;
mod response;

pub use api::{
    AddToCartRequest, CreateCommentRequest, CreateOrderRequest, LikeRequest, StorefrontApi,
};
pub use dto::{
    AccountDto, CartItemDto, CategoryDto, CommentDto, NewsDto, OrderDto, OrderLineDto,
    OrderedProductDto, ProductDto,
};
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// HTTP client for making outbound requests.
///
/// A lightweight wrapper over the platform's HTTP send with a builder API.
/// On non-WASM targets `send` is a stub; tests exercise the typed layer
/// through DTO decoding instead of live requests.
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: std::collections::HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: std::collections::HashMap::new(),
        }
    }

    /// Create a client with a base URL prepended to all relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.builder = self.builder.bearer_auth(token);
        self
    }

    /// Send the request and return the response.
    #[cfg(target_arch = "wasm32")]
    pub fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        tracing::debug!(
            method = self.builder.method.as_str(),
            url = %self.builder.url,
            "sending request"
        );

        let method = match self.builder.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.builder.url);

        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        let request = if let Some(body) = self.builder.body {
            request.body(body).map_err(|e| FetchError::Request(e.to_string()))?
        } else {
            request.build()
        };

        let response = spin_sdk::http::send(request)
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request and return the response (non-WASM stub).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(self) -> Result<Response, FetchError> {
        tracing::debug!(
            method = self.builder.method.as_str(),
            url = %self.builder.url,
            "sending request (stub)"
        );
        Ok(Response::new(
            200,
            std::collections::HashMap::new(),
            Vec::new(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_joining() {
        let client = FetchClient::new().with_base_url("http://localhost:3000/");
        let req = client.get("/api/products");
        assert_eq!(req.builder.url, "http://localhost:3000/api/products");
    }

    #[test]
    fn test_absolute_url_not_rewritten() {
        let client = FetchClient::new().with_base_url("http://localhost:3000");
        let req = client.get("https://cdn.example.com/image.jpg");
        assert_eq!(req.builder.url, "https://cdn.example.com/image.jpg");
    }

    #[test]
    fn test_default_headers_applied() {
        let client = FetchClient::new().with_default_header("Accept", "application/json");
        let req = client.get("/api/news");
        assert_eq!(
            req.builder.headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }
}
