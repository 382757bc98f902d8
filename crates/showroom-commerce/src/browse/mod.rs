//! Browse module: the product grid's filter/sort pipeline.
//!
//! Pure and synchronous; safe to call on every render. The grid component
//! keeps the full fetched list and runs [`refine`] against it whenever a
//! checkbox or the sort dropdown changes.

mod filter;
mod sort;

pub use filter::{BandThresholds, PriceBand, PriceFilterSet};
pub use sort::SortOption;

use crate::catalog::Product;

/// Apply price-band filtering and then the selected sort order.
///
/// Returns a new list; the input is never mutated. Identical inputs always
/// produce identical output. Price sorts are stable, so equally-priced
/// products keep their relative backend order.
pub fn refine(
    products: &[Product],
    filters: &PriceFilterSet,
    sort: SortOption,
    thresholds: &BandThresholds,
) -> Vec<Product> {
    let mut out: Vec<Product> = products
        .iter()
        .filter(|p| filters.matches(p.price.amount, thresholds))
        .cloned()
        .collect();

    match sort {
        SortOption::Default => {}
        SortOption::PriceAsc => out.sort_by_key(|p| p.price.amount),
        SortOption::PriceDesc => out.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        // Positional reversal of the received order, as the storefront does.
        SortOption::Newest => out.reverse(),
    }

    out
}

/// [`refine`] with the observed default thresholds.
pub fn refine_default(
    products: &[Product],
    filters: &PriceFilterSet,
    sort: SortOption,
) -> Vec<Product> {
    refine(products, filters, sort, &BandThresholds::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn product(id: &str, price: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Car {}", id),
            Money::vnd(price),
            5,
            Category::new("cat-1", "Sedan"),
        )
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_no_filter_identity() {
        let list = vec![
            product("a", 400_000_000),
            product("b", 900_000_000),
            product("c", 1_500_000_000),
        ];
        let out = refine_default(&list, &PriceFilterSet::new(), SortOption::Default);
        assert_eq!(out, list);
    }

    #[test]
    fn test_filter_or_semantics() {
        let list = vec![
            product("a", 100_000_000),
            product("b", 600_000_000),
            product("c", 1_500_000_000),
            product("d", 2_500_000_000),
        ];
        let mut filters = PriceFilterSet::new();
        filters.set(PriceBand::Under500M, true);
        filters.set(PriceBand::Above2B, true);

        let out = refine_default(&list, &filters, SortOption::Default);
        assert_eq!(ids(&out), vec!["a", "d"]);
    }

    #[test]
    fn test_single_band_end_to_end() {
        // [400M, 900M, 1.5B] with only the 500M-1B band active.
        let list = vec![
            product("1", 400_000_000),
            product("2", 900_000_000),
            product("3", 1_500_000_000),
        ];
        let mut filters = PriceFilterSet::new();
        filters.set(PriceBand::From500MTo1B, true);

        let out = refine_default(&list, &filters, SortOption::Default);
        assert_eq!(ids(&out), vec!["2"]);
        assert_eq!(out[0].price.amount, 900_000_000);
    }

    #[test]
    fn test_sort_price_asc() {
        let list = vec![
            product("a", 900_000_000),
            product("b", 400_000_000),
            product("c", 1_500_000_000),
        ];
        let out = refine_default(&list, &PriceFilterSet::new(), SortOption::PriceAsc);
        let prices: Vec<i64> = out.iter().map(|p| p.price.amount).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ids(&out), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_price_desc() {
        let list = vec![
            product("a", 900_000_000),
            product("b", 400_000_000),
            product("c", 1_500_000_000),
        ];
        let out = refine_default(&list, &PriceFilterSet::new(), SortOption::PriceDesc);
        let prices: Vec<i64> = out.iter().map(|p| p.price.amount).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_price_asc_stable() {
        let list = vec![
            product("a", 500_000_000),
            product("b", 500_000_000),
            product("c", 100_000_000),
        ];
        let out = refine_default(&list, &PriceFilterSet::new(), SortOption::PriceAsc);
        assert_eq!(ids(&out), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_newest_is_reversal() {
        let list = vec![
            product("a", 1),
            product("b", 2),
            product("c", 3),
        ];
        let out = refine_default(&list, &PriceFilterSet::new(), SortOption::Newest);
        assert_eq!(ids(&out), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let list = vec![
            product("a", 1_900_000_000),
            product("b", 1_100_000_000),
            product("c", 300_000_000),
            product("d", 1_500_000_000),
        ];
        let mut filters = PriceFilterSet::new();
        filters.set(PriceBand::From1BTo2B, true);

        let out = refine_default(&list, &filters, SortOption::PriceAsc);
        assert_eq!(ids(&out), vec!["b", "d", "a"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let list = vec![product("a", 900_000_000), product("b", 400_000_000)];
        let snapshot = list.clone();
        let _ = refine_default(&list, &PriceFilterSet::new(), SortOption::PriceAsc);
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_deterministic() {
        let list = vec![
            product("a", 900_000_000),
            product("b", 400_000_000),
            product("c", 2_500_000_000),
        ];
        let mut filters = PriceFilterSet::new();
        filters.set(PriceBand::Under500M, true);
        filters.set(PriceBand::Above2B, true);

        let first = refine_default(&list, &filters, SortOption::PriceDesc);
        let second = refine_default(&list, &filters, SortOption::PriceDesc);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        let out = refine_default(&[], &PriceFilterSet::new(), SortOption::PriceAsc);
        assert!(out.is_empty());
    }
}
