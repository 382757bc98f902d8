//! Price-band filters for the product grid.

use serde::{Deserialize, Serialize};

/// Band boundaries, in the smallest currency unit.
///
/// The storefront buckets by millions of đồng, so the defaults sit at 500M,
/// 1B, and 2B. Each band is half-open `[lower, upper)`; the top band has no
/// upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandThresholds {
    /// Upper bound of the cheapest band.
    pub entry: i64,
    /// Boundary between the two middle bands.
    pub mid: i64,
    /// Lower bound of the open-ended top band.
    pub premium: i64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        Self {
            entry: 500_000_000,
            mid: 1_000_000_000,
            premium: 2_000_000_000,
        }
    }
}

/// One of the four named price bands the filter sidebar offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    /// Price below the entry threshold.
    Under500M,
    /// Entry threshold up to (not including) the mid threshold.
    From500MTo1B,
    /// Mid threshold up to (not including) the premium threshold.
    From1BTo2B,
    /// Premium threshold and above, unbounded.
    Above2B,
}

impl PriceBand {
    /// All bands, in sidebar order.
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Under500M,
        PriceBand::From500MTo1B,
        PriceBand::From1BTo2B,
        PriceBand::Above2B,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Under500M => "under500",
            PriceBand::From500MTo1B => "500to1000",
            PriceBand::From1BTo2B => "1000to2000",
            PriceBand::Above2B => "above2000",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "under500" => Some(PriceBand::Under500M),
            "500to1000" => Some(PriceBand::From500MTo1B),
            "1000to2000" => Some(PriceBand::From1BTo2B),
            "above2000" => Some(PriceBand::Above2B),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PriceBand::Under500M => "Under 500 million",
            PriceBand::From500MTo1B => "500 million - 1 billion",
            PriceBand::From1BTo2B => "1 - 2 billion",
            PriceBand::Above2B => "Above 2 billion",
        }
    }

    /// Check whether a price falls inside this band.
    pub fn contains(&self, price: i64, thresholds: &BandThresholds) -> bool {
        match self {
            PriceBand::Under500M => price < thresholds.entry,
            PriceBand::From500MTo1B => price >= thresholds.entry && price < thresholds.mid,
            PriceBand::From1BTo2B => price >= thresholds.mid && price < thresholds.premium,
            PriceBand::Above2B => price >= thresholds.premium,
        }
    }
}

/// The set of price-band checkboxes currently ticked.
///
/// Created all-false per page view and discarded on navigation; nothing is
/// persisted. With no band active every product passes; with one or more
/// active a product passes if it matches **any** active band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceFilterSet {
    pub under_500m: bool,
    pub from_500m_to_1b: bool,
    pub from_1b_to_2b: bool,
    pub above_2b: bool,
}

impl PriceFilterSet {
    /// Create an empty filter set (all bands off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a band is active.
    pub fn is_active(&self, band: PriceBand) -> bool {
        match band {
            PriceBand::Under500M => self.under_500m,
            PriceBand::From500MTo1B => self.from_500m_to_1b,
            PriceBand::From1BTo2B => self.from_1b_to_2b,
            PriceBand::Above2B => self.above_2b,
        }
    }

    /// Set a band on or off.
    pub fn set(&mut self, band: PriceBand, on: bool) {
        match band {
            PriceBand::Under500M => self.under_500m = on,
            PriceBand::From500MTo1B => self.from_500m_to_1b = on,
            PriceBand::From1BTo2B => self.from_1b_to_2b = on,
            PriceBand::Above2B => self.above_2b = on,
        }
    }

    /// Flip a band, as a checkbox click does.
    pub fn toggle(&mut self, band: PriceBand) {
        self.set(band, !self.is_active(band));
    }

    /// Check whether no band is active.
    pub fn is_empty(&self) -> bool {
        !PriceBand::ALL.iter().any(|b| self.is_active(*b))
    }

    /// The currently active bands, in sidebar order.
    pub fn active_bands(&self) -> Vec<PriceBand> {
        PriceBand::ALL
            .iter()
            .copied()
            .filter(|b| self.is_active(*b))
            .collect()
    }

    /// Check whether a price passes the filter.
    ///
    /// An empty set passes everything; otherwise the match is an OR across
    /// active bands, so ticking "under 500M" and "above 2B" together selects
    /// products in either band.
    pub fn matches(&self, price: i64, thresholds: &BandThresholds) -> bool {
        if self.is_empty() {
            return true;
        }
        PriceBand::ALL
            .iter()
            .any(|b| self.is_active(*b) && b.contains(price, thresholds))
    }
}
