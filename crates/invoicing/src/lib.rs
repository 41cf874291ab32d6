//! Invoicing domain module.
//!
//! Sales invoices as deterministic domain logic (no IO, no HTTP, no storage):
//! line items keyed by product identity, exact-decimal totals, the fuel
//! excise exemption day and the printable resume.

pub mod config;
pub mod excise;
pub mod invoice;
pub mod numbering;
pub mod resume;
pub mod summary;

pub use config::InvoicingConfig;
pub use excise::ExciseExemption;
pub use invoice::{Invoice, InvoiceLine, InvoiceNumber};
pub use numbering::InvoiceNumberSequence;
pub use summary::{InvoiceSummary, SummaryLine};
