//! Excise exemption calendar.

use chrono::{Datelike, NaiveDate};

use invoicing_products::Product;

/// A single calendar day on which excise is waived for fuel canisters.
///
/// This is one specific date, not a yearly rule: 2022-04-26 is an ordinary
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExciseExemption {
    year: i32,
    month: u32,
    day: u32,
}

impl ExciseExemption {
    /// Fuel excise holiday, 26 April 2021.
    pub const FUEL_2021: ExciseExemption = ExciseExemption {
        year: 2021,
        month: 4,
        day: 26,
    };

    pub fn is_exempt_day(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month && date.day() == self.day
    }

    /// True when `product` is a fuel canister sold on the exemption day.
    pub fn applies_to(&self, date: NaiveDate, product: &Product) -> bool {
        product.is_fuel_canister() && self.is_exempt_day(date)
    }
}
