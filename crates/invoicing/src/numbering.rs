//! Sequential invoice numbering.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::InvoicingConfig;
use crate::invoice::InvoiceNumber;

static GLOBAL: InvoiceNumberSequence = InvoiceNumberSequence::starting_at(1);

/// Monotonic source of invoice numbers.
///
/// Each `next()` hands out the current value and advances the counter
/// atomically, so numbers are unique and strictly increasing in allocation
/// order even when invoices are created on several threads.
#[derive(Debug)]
pub struct InvoiceNumberSequence {
    next: AtomicU64,
}

impl InvoiceNumberSequence {
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Process-wide sequence used by `Invoice::new()`.
    pub fn global() -> &'static InvoiceNumberSequence {
        &GLOBAL
    }

    pub fn from_config(config: &InvoicingConfig) -> Self {
        Self::starting_at(config.first_invoice_number)
    }

    /// Allocate the next number.
    pub fn next(&self) -> InvoiceNumber {
        let number = self.next.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(invoice_number = number, "invoice number allocated");
        InvoiceNumber(number)
    }
}

impl Default for InvoiceNumberSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
