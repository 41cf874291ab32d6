//! Product categories and their tax rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicing_core::ValueObject;

/// Flat excise charged per unit on excise-bearing categories (5.56).
pub fn standard_excise() -> Decimal {
    Decimal::new(556, 2)
}

/// Closed set of product categories.
///
/// The rule set is fixed, so tax behaviour is dispatched by tag instead of
/// through an open trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    TaxFree,
    Dairy,
    Other,
    BottleOfWine,
    FuelCanister,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 5] = [
        ProductCategory::TaxFree,
        ProductCategory::Dairy,
        ProductCategory::Other,
        ProductCategory::BottleOfWine,
        ProductCategory::FuelCanister,
    ];

    /// Tax rate as a decimal fraction (0.08 = 8%).
    pub fn tax_rate(self) -> Decimal {
        match self {
            ProductCategory::TaxFree => Decimal::ZERO,
            ProductCategory::Dairy => Decimal::new(8, 2),
            ProductCategory::Other
            | ProductCategory::BottleOfWine
            | ProductCategory::FuelCanister => Decimal::new(23, 2),
        }
    }

    /// Flat per-unit excise amount.
    pub fn excise_tax(self) -> Decimal {
        match self {
            ProductCategory::BottleOfWine | ProductCategory::FuelCanister => standard_excise(),
            _ => Decimal::ZERO,
        }
    }

    pub fn tax_policy(self) -> TaxPolicy {
        TaxPolicy {
            rate: self.tax_rate(),
            excise: self.excise_tax(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProductCategory::TaxFree => "tax_free",
            ProductCategory::Dairy => "dairy",
            ProductCategory::Other => "other",
            ProductCategory::BottleOfWine => "bottle_of_wine",
            ProductCategory::FuelCanister => "fuel_canister",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage tax rate plus flat excise, as applied to one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxPolicy {
    pub rate: Decimal,
    pub excise: Decimal,
}

impl ValueObject for TaxPolicy {}

impl TaxPolicy {
    /// `net * (1 + rate)`. Excise is not part of the taxed base.
    ///
    /// `net` must already be bounded by `Product::new`.
    pub(crate) fn price_with_tax(&self, net: Decimal) -> Decimal {
        net * (Decimal::ONE + self.rate)
    }

    /// `price_with_tax(net) + excise`.
    pub(crate) fn gross_price(&self, net: Decimal) -> Decimal {
        self.price_with_tax(net) + self.excise
    }
}
