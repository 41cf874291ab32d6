use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicing_core::{AggregateId, DomainError, DomainResult, Entity};

use crate::category::{ProductCategory, TaxPolicy};

/// Product identifier.
///
/// Generated at construction, so two products built from identical fields are
/// still two different products.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Largest accepted net unit price.
pub const MAX_NET_PRICE: i64 = 1_000_000_000_000;

/// Most fraction digits a net price may carry (trailing zeros ignored).
///
/// With the two-digit tax rates and excise this keeps every unit amount well
/// inside `Decimal`'s 28-digit scale, so unit prices are always exact.
pub const MAX_PRICE_SCALE: u32 = 6;

/// A sellable product: name, net unit price and a tax category.
///
/// Immutable once built. Clones keep the same `ProductId` and therefore count
/// as the same product on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    net_price: Decimal,
    category: ProductCategory,
}

impl Product {
    /// Validate and build a product with a fresh identity.
    pub fn new(
        category: ProductCategory,
        name: impl Into<String>,
        net_price: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if net_price < Decimal::ZERO {
            return Err(DomainError::validation(format!(
                "net price cannot be negative (got {net_price})"
            )));
        }
        if net_price > Decimal::from(MAX_NET_PRICE) {
            return Err(DomainError::validation(format!(
                "net price cannot exceed {MAX_NET_PRICE} (got {net_price})"
            )));
        }
        if net_price.normalize().scale() > MAX_PRICE_SCALE {
            return Err(DomainError::validation(format!(
                "net price cannot have more than {MAX_PRICE_SCALE} fraction digits (got {net_price})"
            )));
        }

        Ok(Self {
            id: ProductId::new(AggregateId::new()),
            name,
            net_price,
            category,
        })
    }

    pub fn tax_free(name: impl Into<String>, net_price: Decimal) -> DomainResult<Self> {
        Self::new(ProductCategory::TaxFree, name, net_price)
    }

    pub fn dairy(name: impl Into<String>, net_price: Decimal) -> DomainResult<Self> {
        Self::new(ProductCategory::Dairy, name, net_price)
    }

    pub fn other(name: impl Into<String>, net_price: Decimal) -> DomainResult<Self> {
        Self::new(ProductCategory::Other, name, net_price)
    }

    pub fn bottle_of_wine(name: impl Into<String>, net_price: Decimal) -> DomainResult<Self> {
        Self::new(ProductCategory::BottleOfWine, name, net_price)
    }

    pub fn fuel_canister(name: impl Into<String>, net_price: Decimal) -> DomainResult<Self> {
        Self::new(ProductCategory::FuelCanister, name, net_price)
    }

    pub fn product_id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn tax_policy(&self) -> TaxPolicy {
        self.category.tax_policy()
    }

    /// Net unit price.
    pub fn price(&self) -> Decimal {
        self.net_price
    }

    /// Unit price including percentage tax, excluding excise.
    pub fn price_with_tax(&self) -> Decimal {
        self.tax_policy().price_with_tax(self.net_price)
    }

    /// Flat excise per unit (zero for most categories).
    pub fn excise_tax(&self) -> Decimal {
        self.category.excise_tax()
    }

    /// `price_with_tax() + excise_tax()`.
    pub fn gross_price(&self) -> Decimal {
        self.tax_policy().gross_price(self.net_price)
    }

    pub fn is_fuel_canister(&self) -> bool {
        self.category == ProductCategory::FuelCanister
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn dairy_price_with_tax_keeps_decimal_scale() {
        let product = Product::dairy("Kefir", dec("6")).unwrap();
        assert_eq!(product.price(), dec("6"));
        assert_eq!(product.price_with_tax().to_string(), "6.48");
        assert_eq!(product.excise_tax(), Decimal::ZERO);
        assert_eq!(product.gross_price(), dec("6.48"));
    }

    #[test]
    fn tax_free_price_is_unchanged() {
        let product = Product::tax_free("Warzywa", dec("199.99")).unwrap();
        assert_eq!(product.price_with_tax(), product.price());
        assert_eq!(product.gross_price(), dec("199.99"));
    }

    #[test]
    fn other_product_renders_two_fraction_digits() {
        let product = Product::other("Piwko", dec("8")).unwrap();
        assert_eq!(product.price_with_tax().to_string(), "9.84");
    }

    #[test]
    fn wine_gross_price_adds_excise_after_tax() {
        let product = Product::bottle_of_wine("Wino", dec("20")).unwrap();
        assert_eq!(product.price_with_tax(), dec("24.60"));
        assert_eq!(product.excise_tax(), dec("5.56"));
        assert_eq!(product.gross_price(), dec("30.16"));
        assert!(!product.is_fuel_canister());
    }

    #[test]
    fn fuel_canister_is_tagged() {
        let product = Product::fuel_canister("Paliwo", dec("100")).unwrap();
        assert!(product.is_fuel_canister());
        assert_eq!(product.gross_price(), dec("128.56"));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::other("   ", dec("1")).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::dairy("Mleko", dec("-0.01")).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("negative") => {}
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn rejects_price_above_upper_bound() {
        let err = Product::other("Max", Decimal::MAX).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("exceed") => {}
            _ => panic!("Expected Validation error for oversized price"),
        }

        let at_bound = Product::other("Big", Decimal::from(MAX_NET_PRICE)).unwrap();
        assert_eq!(at_bound.gross_price(), dec("1230000000000"));
    }

    #[test]
    fn rejects_price_finer_than_allowed_scale() {
        let err = Product::other("Tiny", Decimal::new(1, 28)).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("fraction digits") => {}
            _ => panic!("Expected Validation error for excessive scale"),
        }

        // Trailing zeros do not count towards the scale.
        let padded = Product::other("Padded", dec("1.500000000")).unwrap();
        assert_eq!(padded.price_with_tax(), dec("1.845"));

        let finest = Product::other("Finest", dec("0.000001")).unwrap();
        assert_eq!(finest.price_with_tax().to_string(), "0.00000123");
    }

    #[test]
    fn accepts_zero_price() {
        let product = Product::tax_free("Gratis", Decimal::ZERO).unwrap();
        assert_eq!(product.gross_price(), Decimal::ZERO);
    }

    #[test]
    fn identical_fields_do_not_share_identity() {
        let a = Product::other("Chipsy", dec("10")).unwrap();
        let b = Product::other("Chipsy", dec("10")).unwrap();
        assert!(!a.same_identity_as(&b));
        assert_ne!(a, b);

        let clone = a.clone();
        assert!(a.same_identity_as(&clone));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: gross price never drops below net price and equals
            /// price with tax plus excise.
            #[test]
            fn gross_decomposes_into_tax_and_excise(
                cents in 0i64..=MAX_NET_PRICE * 100,
                idx in 0usize..ProductCategory::ALL.len(),
            ) {
                let category = ProductCategory::ALL[idx];
                let product = Product::new(category, "Item", Decimal::new(cents, 2)).unwrap();

                prop_assert!(product.gross_price() >= product.price());
                prop_assert_eq!(
                    product.gross_price(),
                    product.price_with_tax() + product.excise_tax()
                );
            }
        }
    }
}
