//! Sort options for the product grid.

use serde::{Deserialize, Serialize};

/// Sort order selected in the grid's dropdown.
///
/// Like the filter set, this is per-page-view state with no persistence.
// TODO: confirm whether "newest" should compare created_at timestamps; the
// storefront ships it as a reversal of whatever order the backend returned,
// and that behavior is preserved here until product signs off on a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// List order exactly as received from the backend.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Reverse of the received order. Not a timestamp sort.
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "priceAsc",
            SortOption::PriceDesc => "priceDesc",
            SortOption::Newest => "newest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "default" => Some(SortOption::Default),
            "priceAsc" => Some(SortOption::PriceAsc),
            "priceDesc" => Some(SortOption::PriceDesc),
            "newest" => Some(SortOption::Newest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "Default",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
        }
    }
}
