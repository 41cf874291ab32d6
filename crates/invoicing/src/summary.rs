//! Serializable invoice snapshot.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicing_core::DomainResult;
use invoicing_products::{ProductCategory, ProductId};

use crate::invoice::{Invoice, InvoiceNumber};

/// Read view of one line, with amounts already resolved for the invoice date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryLine {
    pub line_no: u32,
    pub product_id: ProductId,
    pub name: String,
    pub category: ProductCategory,
    pub quantity: i32,
    pub unit_price_with_tax: Decimal,
    pub net_amount: Decimal,
    pub gross_amount: Decimal,
}

/// Point-in-time view of an invoice and its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub number: InvoiceNumber,
    pub date: NaiveDate,
    pub lines: Vec<SummaryLine>,
    pub positions: usize,
    pub net_total: Decimal,
    pub tax_total: Decimal,
    pub gross_total: Decimal,
}

impl InvoiceSummary {
    /// Fails when any line amount or total does not fit a `Decimal` exactly.
    pub fn from_invoice(invoice: &Invoice) -> DomainResult<Self> {
        let lines = invoice
            .lines()
            .iter()
            .map(|line| {
                Ok(SummaryLine {
                    line_no: line.line_no,
                    product_id: line.product_id(),
                    name: line.product.name().to_string(),
                    category: line.product.category(),
                    quantity: line.quantity,
                    unit_price_with_tax: line.product.price_with_tax(),
                    net_amount: line.net_amount()?,
                    gross_amount: invoice.line_gross(line)?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let net_total = invoice.net_total()?;
        let gross_total = invoice.gross_total()?;

        Ok(Self {
            number: invoice.number(),
            date: invoice.date(),
            lines,
            positions: invoice.positions(),
            net_total,
            tax_total: invoice.tax_total()?,
            gross_total,
        })
    }
}
