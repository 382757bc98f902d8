//! Response schemas for the storefront backend.
//!
//! The backend returns Mongo documents: `_id` primary keys, camelCase field
//! names, and reference fields populated into embedded documents (a cart
//! line's `product_id` is the whole product, not a string). Each DTO here
//! mirrors one of those shapes exactly, and converts into a domain type with
//! invariant validation via `TryFrom`.

use crate::FetchError;
use serde::Deserialize;
use showroom_auth::{Account, Role};
use showroom_commerce::cart::{CartItem, ProductSnapshot};
use showroom_commerce::catalog::{Category, Product};
use showroom_commerce::ids::{AccountId, CartItemId, CategoryId, ProductId};
use showroom_commerce::money::Money;

/// A category document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Category::new(CategoryId::new(dto.id), dto.name)
    }
}

/// A product document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProductDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Price in đồng.
    pub price: i64,
    /// Stock count.
    pub quantity: i64,
    /// Populated category reference, absent on some admin-created products.
    #[serde(rename = "category_id", default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl TryFrom<ProductDto> for Product {
    type Error = FetchError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        let category = dto
            .category
            .map(Category::from)
            .unwrap_or_else(|| Category::new("uncategorized", "Uncategorized"));

        let product = Product {
            id: ProductId::new(dto.id),
            name: dto.name,
            price: Money::vnd(dto.price),
            stock: dto.quantity,
            category,
            description: dto.description,
            image: dto.image,
        };
        product.validate()?;
        Ok(product)
    }
}

impl TryFrom<ProductDto> for ProductSnapshot {
    type Error = FetchError;

    fn try_from(dto: ProductDto) -> Result<Self, Self::Error> {
        if dto.quantity < 0 {
            return Err(FetchError::Invalid(format!(
                "negative stock {} for product {}",
                dto.quantity, dto.id
            )));
        }
        if dto.price < 0 {
            return Err(FetchError::Invalid(format!(
                "negative price {} for product {}",
                dto.price, dto.id
            )));
        }
        Ok(ProductSnapshot {
            id: ProductId::new(dto.id),
            name: dto.name,
            price: Money::vnd(dto.price),
            stock: dto.quantity,
            image: dto.image,
        })
    }
}

/// A cart line document, with its product reference populated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CartItemDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub quantity: i64,
    #[serde(rename = "product_id")]
    pub product: ProductDto,
    #[serde(rename = "account_id")]
    pub account_id: String,
}

impl TryFrom<CartItemDto> for CartItem {
    type Error = FetchError;

    fn try_from(dto: CartItemDto) -> Result<Self, Self::Error> {
        let item = CartItem::new(
            CartItemId::new(dto.id),
            AccountId::new(dto.account_id),
            dto.quantity,
            ProductSnapshot::try_from(dto.product)?,
        );
        item.validate().map_err(FetchError::from)?;
        Ok(item)
    }
}

/// An account document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AccountDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Role name; anything unrecognized falls back to customer.
    #[serde(default)]
    pub role: Option<String>,
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        Account {
            id: AccountId::new(dto.id),
            full_name: dto.full_name,
            email: dto.email,
            image: dto.image,
            role: dto
                .role
                .as_deref()
                .and_then(Role::from_str)
                .unwrap_or_default(),
        }
    }
}

/// An order document as the history page consumes it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub note: Option<String>,
    /// Backend-assigned status string, displayed verbatim.
    pub status: String,
    /// Order total in đồng.
    #[serde(default)]
    pub total: i64,
    /// ISO-8601 creation date as Mongo serializes it.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// The partial product embedded in an order line. The backend populates only
/// the fields the detail page renders, so this is narrower than [`ProductDto`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderedProductDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: i64,
}

/// An order line document, with its product reference populated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OrderLineDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "order_id")]
    pub order_id: String,
    #[serde(rename = "product_id")]
    pub product: OrderedProductDto,
    pub quantity: i64,
    /// Unit price in đồng captured at purchase time; the product's current
    /// price may have moved since.
    pub price: i64,
    /// ISO-8601 creation date as Mongo serializes it.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// A news article document. Consumed as-is; there is no richer domain type.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image: String,
    /// ISO-8601 creation date as Mongo serializes it.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// A product comment document, with its account reference populated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommentDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub comment: String,
    #[serde(rename = "accountId", default)]
    pub account: Option<AccountDto>,
    #[serde(rename = "productId", default)]
    pub product_id: Option<String>,
    /// ISO-8601 creation date as Mongo serializes it.
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "_id": "66a1",
        "name": "Toyota Camry 2.5Q",
        "price": 1400000000,
        "quantity": 3,
        "category_id": { "_id": "66c1", "name": "Sedan" },
        "description": "Mid-size sedan",
        "image": "/uploads/camry.jpg"
    }"#;

    #[test]
    fn test_decode_product() {
        let dto: ProductDto = serde_json::from_str(PRODUCT_JSON).unwrap();
        let product = Product::try_from(dto).unwrap();

        assert_eq!(product.id.as_str(), "66a1");
        assert_eq!(product.price.amount, 1_400_000_000);
        assert_eq!(product.stock, 3);
        assert_eq!(product.category.name, "Sedan");
    }

    #[test]
    fn test_decode_product_without_category() {
        let json = r#"{"_id": "66a2", "name": "Oil Filter", "price": 350000, "quantity": 12}"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        let product = Product::try_from(dto).unwrap();
        assert_eq!(product.category.name, "Uncategorized");
        assert!(product.description.is_empty());
    }

    #[test]
    fn test_decode_product_rejects_negative_stock() {
        let json = r#"{"_id": "66a3", "name": "Bad", "price": 100, "quantity": -2}"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        assert!(matches!(
            Product::try_from(dto),
            Err(FetchError::Invalid(_))
        ));
    }

    #[test]
    fn test_decode_product_rejects_negative_price() {
        let json = r#"{"_id": "66a4", "name": "Bad", "price": -100, "quantity": 2}"#;
        let dto: ProductDto = serde_json::from_str(json).unwrap();
        assert!(matches!(
            ProductSnapshot::try_from(dto),
            Err(FetchError::Invalid(_))
        ));
    }

    #[test]
    fn test_decode_product_missing_field_is_parse_error() {
        let json = r#"{"_id": "66a5", "price": 100, "quantity": 2}"#;
        let result: Result<ProductDto, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_cart_item() {
        let json = format!(
            r#"{{"_id": "77b1", "quantity": 2, "account_id": "55f1", "product_id": {}}}"#,
            PRODUCT_JSON
        );
        let dto: CartItemDto = serde_json::from_str(&json).unwrap();
        let item = CartItem::try_from(dto).unwrap();

        assert_eq!(item.id.as_str(), "77b1");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.product.stock, 3);
        assert_eq!(item.line_total().unwrap().amount, 2_800_000_000);
    }

    #[test]
    fn test_decode_cart_item_rejects_zero_quantity() {
        let json = format!(
            r#"{{"_id": "77b2", "quantity": 0, "account_id": "55f1", "product_id": {}}}"#,
            PRODUCT_JSON
        );
        let dto: CartItemDto = serde_json::from_str(&json).unwrap();
        assert!(CartItem::try_from(dto).is_err());
    }

    #[test]
    fn test_decode_account_role_fallback() {
        let json = r#"{"_id": "55f1", "fullName": "Tran Minh", "email": "minh@example.com", "role": "moderator"}"#;
        let dto: AccountDto = serde_json::from_str(json).unwrap();
        let account = Account::from(dto);
        assert_eq!(account.role, Role::Customer);
    }

    #[test]
    fn test_decode_account_admin() {
        let json = r#"{"_id": "55f2", "fullName": "Le Anh", "email": "anh@example.com", "role": "admin"}"#;
        let dto: AccountDto = serde_json::from_str(json).unwrap();
        let account = Account::from(dto);
        assert!(account.role.is_admin());
    }

    #[test]
    fn test_decode_order() {
        let json = r#"{
            "_id": "88d1",
            "name": "Tran Minh",
            "email": "minh@example.com",
            "phone": "0901234567",
            "address": "12 Ly Thuong Kiet, Ha Noi",
            "note": "",
            "status": "Pending",
            "total": 2800000000,
            "createdAt": "2024-11-02T08:15:00.000Z"
        }"#;
        let order: OrderDto = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "88d1");
        assert_eq!(order.status, "Pending");
        assert_eq!(order.total, 2_800_000_000);
    }

    #[test]
    fn test_decode_order_line_with_populated_product() {
        let json = r#"{
            "_id": "99e1",
            "order_id": "88d1",
            "product_id": {"_id": "66a1", "name": "Toyota Camry 2.5Q", "price": 1400000000},
            "quantity": 2,
            "price": 1400000000
        }"#;
        let line: OrderLineDto = serde_json::from_str(json).unwrap();
        assert_eq!(line.order_id, "88d1");
        assert_eq!(line.product.name, "Toyota Camry 2.5Q");
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_decode_news_list() {
        let json = r#"[
            {"_id": "n1", "title": "Showroom opening", "content": "...", "image": "/uploads/open.jpg"},
            {"_id": "n2", "title": "Year-end sale"}
        ]"#;
        let news: Vec<NewsDto> = serde_json::from_str(json).unwrap();
        assert_eq!(news.len(), 2);
        assert!(news[1].content.is_empty());
    }

    #[test]
    fn test_decode_comment_with_populated_account() {
        let json = r#"{
            "_id": "c1",
            "comment": "Great car",
            "accountId": {"_id": "55f1", "fullName": "Tran Minh", "email": "minh@example.com"},
            "productId": "66a1"
        }"#;
        let dto: CommentDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.comment, "Great car");
        assert_eq!(dto.account.as_ref().unwrap().full_name, "Tran Minh");
    }
}
