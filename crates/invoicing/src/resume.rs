//! Plain-text invoice resume.
//!
//! ```text
//! Nr faktury: <number>
//! Nazwa: <name>\tSztuk: <quantity>\tCena 1szt: <price with tax>
//! Liczba pozycji: <count>
//! ```
//!
//! One item line per position in insertion order. Prices use `Decimal`'s own
//! `Display`, so the scale produced by the tax multiplication is kept.

use crate::invoice::Invoice;

pub fn render(invoice: &Invoice) -> String {
    let mut out = format!("Nr faktury: {}\n", invoice.number());
    for line in invoice.lines() {
        out.push_str(&format!(
            "Nazwa: {}\tSztuk: {}\tCena 1szt: {}\n",
            line.product.name(),
            line.quantity,
            line.product.price_with_tax()
        ));
    }
    out.push_str(&format!("Liczba pozycji: {}", invoice.positions()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::InvoiceNumberSequence;
    use invoicing_products::Product;
    use rust_decimal::Decimal;

    fn test_invoice() -> Invoice {
        Invoice::with_sequence(&InvoiceNumberSequence::starting_at(42))
    }

    #[test]
    fn empty_invoice_prints_header_and_footer_only() {
        let invoice = test_invoice();
        assert_eq!(invoice.resume(), "Nr faktury: 42\nLiczba pozycji: 0");
    }

    #[test]
    fn single_dairy_item_shows_price_with_tax() {
        let mut invoice = test_invoice();
        invoice
            .add_single(&Product::dairy("Product1", Decimal::new(6, 0)).unwrap())
            .unwrap();

        assert_eq!(
            invoice.resume(),
            "Nr faktury: 42\n\
             Nazwa: Product1\tSztuk: 1\tCena 1szt: 6.48\n\
             Liczba pozycji: 1"
        );
    }

    #[test]
    fn many_items_print_in_insertion_order() {
        let mut invoice = test_invoice();
        let p1 = Product::other("Product1", Decimal::new(5, 0)).unwrap();
        let p2 = Product::other("Product2", Decimal::new(8, 0)).unwrap();
        let p3 = Product::dairy("Product3", Decimal::new(16, 0)).unwrap();
        let p4 = Product::dairy("Product4", Decimal::new(20, 0)).unwrap();
        invoice.add_single(&p1).unwrap();
        invoice.add_product(&p2, 3).unwrap();
        invoice.add_product(&p3, 5).unwrap();
        invoice.add_single(&p4).unwrap();

        let expected = [
            "Nr faktury: 42",
            "Nazwa: Product1\tSztuk: 1\tCena 1szt: 6.15",
            "Nazwa: Product2\tSztuk: 3\tCena 1szt: 9.84",
            "Nazwa: Product3\tSztuk: 5\tCena 1szt: 17.28",
            "Nazwa: Product4\tSztuk: 1\tCena 1szt: 21.60",
            "Liczba pozycji: 4",
        ]
        .join("\n");
        assert_eq!(invoice.resume(), expected);
    }

    #[test]
    fn re_added_item_prints_once_with_latest_quantity() {
        let mut invoice = test_invoice();
        let p1 = Product::tax_free("Chleb", Decimal::new(5, 0)).unwrap();
        let p2 = Product::other("Chipsy", Decimal::new(10, 0)).unwrap();
        invoice.add_product(&p1, 2).unwrap();
        invoice.add_single(&p2).unwrap();
        invoice.add_product(&p1, 7).unwrap();

        let expected = [
            "Nr faktury: 42",
            "Nazwa: Chleb\tSztuk: 7\tCena 1szt: 5",
            "Nazwa: Chipsy\tSztuk: 1\tCena 1szt: 12.30",
            "Liczba pozycji: 2",
        ]
        .join("\n");
        assert_eq!(invoice.resume(), expected);
    }
}
