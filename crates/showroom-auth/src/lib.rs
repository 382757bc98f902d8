//! Account and session handling for the Showroom storefront.
//!
//! The storefront keeps its session (token plus user object) in a single
//! browser-storage slot. This crate wraps that slot behind one repository
//! type so expiry checks happen in exactly one place instead of wherever a
//! component happens to read storage.
//!
//! # Example
//!
//! ```rust,ignore
//! use showroom_auth::{MemoryStore, SessionRepository};
//!
//! let repo = SessionRepository::new(MemoryStore::default());
//! match repo.current_user()? {
//!     Some(account) => { /* render the account menu */ }
//!     None => { /* render the login button */ }
//! }
//! ```

mod error;
mod session;
mod user;

pub use error::AuthError;
pub use session::{MemoryStore, Session, SessionRepository, SessionStore};
pub use user::{Account, Role};
