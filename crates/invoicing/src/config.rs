//! Environment-driven configuration for the invoicing module.

use invoicing_core::{DomainError, DomainResult};

/// Default first number handed out by a fresh sequence.
pub const DEFAULT_FIRST_INVOICE_NUMBER: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoicingConfig {
    /// First number a sequence built from this config allocates.
    pub first_invoice_number: u64,
}

impl Default for InvoicingConfig {
    fn default() -> Self {
        Self {
            first_invoice_number: DEFAULT_FIRST_INVOICE_NUMBER,
        }
    }
}

impl InvoicingConfig {
    /// Read `INVOICE_NUMBER_START` (defaults to 1 when unset).
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, with an injectable variable lookup.
    pub fn from_lookup<F>(lookup: F) -> DomainResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_invoice_number = match lookup("INVOICE_NUMBER_START") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                DomainError::validation(format!("INVOICE_NUMBER_START={raw:?}: {e}"))
            })?,
            None => {
                tracing::debug!(
                    default = DEFAULT_FIRST_INVOICE_NUMBER,
                    "INVOICE_NUMBER_START not set; using default"
                );
                DEFAULT_FIRST_INVOICE_NUMBER
            }
        };

        Ok(Self {
            first_invoice_number,
        })
    }
}
