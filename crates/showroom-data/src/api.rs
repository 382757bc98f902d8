//! Typed endpoints over the storefront backend.

use crate::dto::{CartItemDto, CommentDto, NewsDto, OrderDto, OrderLineDto, ProductDto};
use crate::{FetchClient, FetchError};
use serde::Serialize;
use showroom_commerce::cart::CartItem;
use showroom_commerce::catalog::Product;
use showroom_commerce::ids::{AccountId, CartItemId, NewsId, OrderId, ProductId};

/// Body for `POST /api/cart`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddToCartRequest {
    pub quantity: i64,
    pub product_id: String,
    pub account_id: String,
}

impl AddToCartRequest {
    /// The storefront only ever adds one unit per click.
    pub fn one(product_id: &ProductId, account_id: &AccountId) -> Self {
        Self {
            quantity: 1,
            product_id: product_id.as_str().to_string(),
            account_id: account_id.as_str().to_string(),
        }
    }
}

/// Body for `POST /api/comments/create`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateCommentRequest {
    pub comment: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "productId")]
    pub product_id: String,
}

/// Body for `POST /api/orders`: the checkout form plus the buyer's account.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreateOrderRequest {
    pub account_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub payment_method: String,
    pub note: String,
}

/// Body for the like/unlike endpoints.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LikeRequest {
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "productId")]
    pub product_id: String,
}

impl LikeRequest {
    pub fn new(account_id: &AccountId, product_id: &ProductId) -> Self {
        Self {
            account_id: account_id.as_str().to_string(),
            product_id: product_id.as_str().to_string(),
        }
    }
}

#[derive(Serialize)]
struct UpdateQuantityBody {
    quantity: i64,
}

/// The storefront's REST surface, typed.
///
/// Plain request/response shuttles: no retries, no backoff, no caching.
/// Errors propagate to the calling handler, which turns them into a toast.
pub struct StorefrontApi {
    client: FetchClient,
}

impl StorefrontApi {
    /// Create an API handle against a backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: FetchClient::new().with_base_url(base_url),
        }
    }

    /// Create an API handle over a preconfigured client.
    pub fn with_client(client: FetchClient) -> Self {
        Self { client }
    }

    /// `GET /api/products`: the full catalog.
    pub fn products(&self) -> Result<Vec<Product>, FetchError> {
        let dtos: Vec<ProductDto> = self
            .client
            .get("/api/products")
            .send()?
            .error_for_status()?
            .json()?;
        dtos.into_iter().map(Product::try_from).collect()
    }

    /// `GET /api/products/:id`.
    pub fn product(&self, id: &ProductId) -> Result<Product, FetchError> {
        let dto: ProductDto = self
            .client
            .get(format!("/api/products/{}", id))
            .send()?
            .error_for_status()?
            .json()?;
        Product::try_from(dto)
    }

    /// `GET /api/cart/:accountId`: the account's current cart lines.
    ///
    /// Add-to-cart handlers call this immediately before reconciling so the
    /// quantity check never runs against stale local state.
    pub fn cart_items(&self, account_id: &AccountId) -> Result<Vec<CartItem>, FetchError> {
        let dtos: Vec<CartItemDto> = self
            .client
            .get(format!("/api/cart/{}", account_id))
            .send()?
            .error_for_status()?
            .json()?;
        dtos.into_iter().map(CartItem::try_from).collect()
    }

    /// `POST /api/cart`: create or increment a cart line.
    ///
    /// The response body is not consumed; only the status matters.
    pub fn add_to_cart(&self, request: &AddToCartRequest) -> Result<(), FetchError> {
        self.client
            .post("/api/cart")
            .json(request)?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `PUT /api/cart/:id`: set a cart line's quantity.
    pub fn update_cart_item(
        &self,
        id: &CartItemId,
        quantity: i64,
    ) -> Result<(), FetchError> {
        self.client
            .put(format!("/api/cart/{}", id))
            .json(&UpdateQuantityBody { quantity })?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `DELETE /api/cart/:id`: remove a cart line.
    pub fn remove_cart_item(&self, id: &CartItemId) -> Result<(), FetchError> {
        self.client
            .delete(format!("/api/cart/{}", id))
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /api/orders`: place an order with the checkout form contents.
    ///
    /// The backend builds the order from the account's cart server-side; the
    /// response body is not consumed.
    pub fn create_order(&self, request: &CreateOrderRequest) -> Result<(), FetchError> {
        self.client
            .post("/api/orders")
            .json(request)?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `GET /api/orders/account/:accountId`: the account's order history.
    pub fn orders(&self, account_id: &AccountId) -> Result<Vec<OrderDto>, FetchError> {
        self.client
            .get(format!("/api/orders/account/{}", account_id))
            .send()?
            .error_for_status()?
            .json()
    }

    /// `GET /api/orders/detail/:orderId`: the lines of one placed order.
    pub fn order_lines(&self, order_id: &OrderId) -> Result<Vec<OrderLineDto>, FetchError> {
        self.client
            .get(format!("/api/orders/detail/{}", order_id))
            .send()?
            .error_for_status()?
            .json()
    }

    /// `DELETE /api/orders/:id`: cancel an order from the history page.
    pub fn delete_order(&self, order_id: &OrderId) -> Result<(), FetchError> {
        self.client
            .delete(format!("/api/orders/{}", order_id))
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /api/likes`: mark a product as liked by an account.
    pub fn like_product(&self, request: &LikeRequest) -> Result<(), FetchError> {
        self.client
            .post("/api/likes")
            .json(request)?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /api/likes/unlike`: withdraw a like.
    pub fn unlike_product(&self, request: &LikeRequest) -> Result<(), FetchError> {
        self.client
            .post("/api/likes/unlike")
            .json(request)?
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// `GET /api/likes/count/:productId`: how many accounts like a product.
    /// The backend returns a bare JSON number.
    pub fn product_like_count(&self, product_id: &ProductId) -> Result<i64, FetchError> {
        self.client
            .get(format!("/api/likes/count/{}", product_id))
            .send()?
            .error_for_status()?
            .json()
    }

    /// `GET /api/likes/check/:accountId/:productId`: whether this account
    /// likes this product. The backend returns a bare JSON boolean.
    pub fn is_product_liked(
        &self,
        account_id: &AccountId,
        product_id: &ProductId,
    ) -> Result<bool, FetchError> {
        self.client
            .get(format!("/api/likes/check/{}/{}", account_id, product_id))
            .send()?
            .error_for_status()?
            .json()
    }

    /// `GET /api/likes/account/:accountId`: the products an account likes,
    /// for the favorites page.
    pub fn favorite_products(&self, account_id: &AccountId) -> Result<Vec<Product>, FetchError> {
        let dtos: Vec<ProductDto> = self
            .client
            .get(format!("/api/likes/account/{}", account_id))
            .send()?
            .error_for_status()?
            .json()?;
        dtos.into_iter().map(Product::try_from).collect()
    }

    /// `GET /api/news`: all articles.
    pub fn news(&self) -> Result<Vec<NewsDto>, FetchError> {
        self.client
            .get("/api/news")
            .send()?
            .error_for_status()?
            .json()
    }

    /// `GET /api/news/:id`.
    pub fn news_item(&self, id: &NewsId) -> Result<NewsDto, FetchError> {
        self.client
            .get(format!("/api/news/{}", id))
            .send()?
            .error_for_status()?
            .json()
    }

    /// `GET /api/comments/:productId`: comments on a product.
    pub fn comments(&self, product_id: &ProductId) -> Result<Vec<CommentDto>, FetchError> {
        self.client
            .get(format!("/api/comments/{}", product_id))
            .send()?
            .error_for_status()?
            .json()
    }

    /// `POST /api/comments/create`.
    pub fn create_comment(&self, request: &CreateCommentRequest) -> Result<(), FetchError> {
        self.client
            .post("/api/comments/create")
            .json(request)?
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
