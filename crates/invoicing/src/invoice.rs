use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicing_core::{AggregateRoot, DomainError, DomainResult, Entity};
use invoicing_products::{Product, ProductId};

use crate::excise::ExciseExemption;
use crate::numbering::InvoiceNumberSequence;
use crate::resume;
use crate::summary::InvoiceSummary;

/// Sequential invoice number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(pub u64);

impl InvoiceNumber {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One product on an invoice together with its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceLine {
    pub line_no: u32,
    pub product: Product,
    pub quantity: i32,
}

impl InvoiceLine {
    pub fn product_id(&self) -> ProductId {
        self.product.product_id()
    }

    pub fn net_amount(&self) -> DomainResult<Decimal> {
        line_amount(self.product.price(), self.quantity)
    }
}

/// `unit * quantity`, refusing results that overflow or had to be rounded to
/// fit `Decimal`'s 96-bit mantissa.
fn line_amount(unit: Decimal, quantity: i32) -> DomainResult<Decimal> {
    let amount = unit
        .checked_mul(Decimal::from(quantity))
        .ok_or_else(|| DomainError::invariant("invoice line amount overflow"))?;
    if amount.scale() < unit.scale() {
        return Err(DomainError::invariant(
            "invoice line amount exceeds decimal precision",
        ));
    }
    Ok(amount)
}

/// Exact `a + b`, same failure rules as [`line_amount`].
fn add_amounts(a: Decimal, b: Decimal) -> DomainResult<Decimal> {
    let sum = a
        .checked_add(b)
        .ok_or_else(|| DomainError::invariant("invoice total overflow"))?;
    if sum.scale() < a.scale().max(b.scale()) {
        return Err(DomainError::invariant(
            "invoice total exceeds decimal precision",
        ));
    }
    Ok(sum)
}

/// Aggregate root: Invoice.
///
/// Lines are kept in insertion order and keyed by product identity. Totals are
/// derived on every call; nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    number: InvoiceNumber,
    date: NaiveDate,
    lines: Vec<InvoiceLine>,
    exemption: ExciseExemption,
    version: u64,
}

impl Invoice {
    /// Create an empty invoice numbered from the process-wide sequence.
    pub fn new() -> Self {
        Self::with_sequence(InvoiceNumberSequence::global())
    }

    /// Create an empty invoice numbered from `sequence`, dated today in the
    /// local time zone.
    pub fn with_sequence(sequence: &InvoiceNumberSequence) -> Self {
        Self {
            number: sequence.next(),
            date: Local::now().date_naive(),
            lines: Vec::new(),
            exemption: ExciseExemption::FUEL_2021,
            version: 0,
        }
    }

    pub fn number(&self) -> InvoiceNumber {
        self.number
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Number of distinct products (not the sum of quantities).
    pub fn positions(&self) -> usize {
        self.lines.len()
    }

    pub fn quantity_of(&self, product: &Product) -> Option<i32> {
        self.line_for(product.id()).map(|line| line.quantity)
    }

    /// Add `product` with a quantity of one.
    pub fn add_single(&mut self, product: &Product) -> DomainResult<()> {
        self.add_product(product, 1)
    }

    /// Put `product` on the invoice.
    ///
    /// Re-adding the same product replaces its quantity and keeps its position.
    /// A non-positive quantity is rejected and the invoice stays unchanged.
    pub fn add_product(&mut self, product: &Product, quantity: i32) -> DomainResult<()> {
        if quantity <= 0 {
            tracing::warn!(
                invoice_number = %self.number,
                product = product.name(),
                quantity,
                "rejected non-positive quantity"
            );
            return Err(DomainError::invalid_argument(format!(
                "quantity must be positive (got {quantity})"
            )));
        }

        let product_id = product.product_id();
        match self.lines.iter().position(|l| l.product_id() == product_id) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                tracing::debug!(
                    invoice_number = %self.number,
                    line_no = line.line_no,
                    previous = line.quantity,
                    quantity,
                    "line quantity overwritten"
                );
                line.quantity = quantity;
            }
            None => {
                let line_no = self.lines.len() as u32 + 1;
                tracing::debug!(
                    invoice_number = %self.number,
                    line_no,
                    product = product.name(),
                    quantity,
                    "line added"
                );
                self.lines.push(InvoiceLine {
                    line_no,
                    product: product.clone(),
                    quantity,
                });
            }
        }

        // Deterministic version tracking: +1 per accepted mutation.
        self.version += 1;
        Ok(())
    }

    /// Sum of net price times quantity.
    ///
    /// Fails with `InvariantViolation` when the exact sum no longer fits a
    /// `Decimal`; the result is never rounded.
    pub fn net_total(&self) -> DomainResult<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |acc, line| {
            add_amounts(acc, line.net_amount()?)
        })
    }

    /// Sum of per-unit gross charge times quantity, honouring the excise
    /// exemption for the invoice date. Same failure rules as `net_total`.
    pub fn gross_total(&self) -> DomainResult<Decimal> {
        self.lines.iter().try_fold(Decimal::ZERO, |acc, line| {
            add_amounts(acc, self.line_gross(line)?)
        })
    }

    /// `gross_total() - net_total()`.
    pub fn tax_total(&self) -> DomainResult<Decimal> {
        let gross = self.gross_total()?;
        let net = self.net_total()?;
        gross
            .checked_sub(net)
            .ok_or_else(|| DomainError::invariant("invoice tax total overflow"))
    }

    /// Gross charge for one unit of `product` on this invoice's date.
    ///
    /// Unit amounts cannot overflow: `Product::new` bounds price and scale.
    pub fn unit_gross(&self, product: &Product) -> Decimal {
        if self.exemption.applies_to(self.date, product) {
            product.price_with_tax()
        } else {
            product.price_with_tax() + product.excise_tax()
        }
    }

    pub fn line_gross(&self, line: &InvoiceLine) -> DomainResult<Decimal> {
        line_amount(self.unit_gross(&line.product), line.quantity)
    }

    /// Printable summary, see [`resume::render`].
    pub fn resume(&self) -> String {
        resume::render(self)
    }

    pub fn summary(&self) -> DomainResult<InvoiceSummary> {
        InvoiceSummary::from_invoice(self)
    }

    fn line_for(&self, product_id: &ProductId) -> Option<&InvoiceLine> {
        self.lines.iter().find(|l| l.product_id() == *product_id)
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceNumber;

    fn id(&self) -> &Self::Id {
        &self.number
    }

    fn version(&self) -> u64 {
        self.version
    }
}
