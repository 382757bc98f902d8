//! Account types.

use serde::{Deserialize, Serialize};
use showroom_commerce::ids::AccountId;

/// Account role for authorization.
///
/// The back office is gated on `Admin`; everything customer-facing runs as
/// `Customer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Customer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Check whether this role may enter the back office.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// A storefront account, as returned by the backend on login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Unique account identifier.
    pub id: AccountId,
    /// Full display name.
    pub full_name: String,
    /// Email address, unique per account.
    pub email: String,
    /// Avatar URI, if one was uploaded.
    pub image: Option<String>,
    /// Authorization role.
    pub role: Role,
}

impl Account {
    /// Create a customer account.
    pub fn new(
        id: impl Into<AccountId>,
        full_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: email.into(),
            image: None,
            role: Role::Customer,
        }
    }
}
