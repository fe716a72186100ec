use chrono::NaiveDate;
use fakturiolib::formats::isdoc::Isdoc;
use fakturiolib::model::{Company, Invoice, Item};
use fakturiolib::traits::WriteFormat;
use rust_decimal::Decimal;

fn company(name: &str, ico: &str, iban: Option<&str>) -> Company {
    Company {
        name: name.into(),
        ico: ico.into(),
        dic: format!("CZ{ico}"),
        street: "Dlouhá 12".into(),
        city: "Praha".into(),
        zip_code: "110 00".into(),
        country: "Česká republika".into(),
        iban: iban.map(Into::into),
        bank_name: Some("Česká spořitelna, a.s.".into()),
        email: None,
        phone: None,
    }
}

fn invoice() -> Invoice {
    Invoice {
        invoice_number: "20250115001".into(),
        supplier: company("Moravský Obchod s.r.o.", "12345678", Some("CZ6508000000192000145399")),
        customer: company("Praha Tech a.s.", "87654321", None),
        items: vec![
            Item {
                description: "Notebook Dell Latitude".into(),
                quantity: 3,
                unit: "ks".into(),
                unit_price: Decimal::new(100_000, 2),
                vat_rate: 21,
            },
            Item {
                description: "Konzultační služby".into(),
                quantity: 2,
                unit: "hod".into(),
                unit_price: Decimal::new(50_000, 2),
                vat_rate: 15,
            },
        ],
        issue_date: NaiveDate::from_ymd_opt(2025, 1, 15).expect("date"),
        due_date: NaiveDate::from_ymd_opt(2025, 1, 29).expect("date"),
        variable_symbol: "20250115001".into(),
        payment_method: "bankovní převod".into(),
        note: "Děkujeme za Vaši důvěru.".into(),
        currency: "CZK".into(),
    }
}

fn render() -> String {
    let mut out = Vec::new();
    Isdoc::write(&mut out, &invoice()).expect("write isdoc");
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn document_header() {
    let xml = render();
    assert!(xml.contains(r#"<Invoice xmlns="http://isdoc.cz/namespace/2013" version="6.0.1">"#));
    assert!(xml.contains("<DocumentType>1</DocumentType>"));
    assert!(xml.contains("<ID>20250115001</ID>"));
    assert!(xml.contains("<UUID>INV-20250115001-20250115</UUID>"));
    assert!(xml.contains("<IssueDate>2025-01-15</IssueDate>"));
    assert!(xml.contains("<DueDate>2025-01-29</DueDate>"));
    assert!(xml.contains("<LocalCurrencyCode>CZK</LocalCurrencyCode>"));
}

#[test]
fn parties_carry_identification() {
    let xml = render();
    assert!(xml.contains("<AccountingSupplierParty>"));
    assert!(xml.contains("<AccountingCustomerParty>"));
    assert!(xml.contains("<Name>Moravský Obchod s.r.o.</Name>"));
    assert!(xml.contains("<Name>Praha Tech a.s.</Name>"));
    assert!(xml.contains("<ID>12345678</ID>"));
    assert!(xml.contains("<CompanyID>CZ12345678</CompanyID>"));
    assert!(xml.contains("<IdentificationCode>CZ</IdentificationCode>"));
    assert!(xml.contains("<PostalZone>110 00</PostalZone>"));
}

#[test]
fn invoice_lines_and_amounts() {
    let xml = render();
    assert!(xml.contains(r#"<InvoicedQuantity unitCode="ks">3</InvoicedQuantity>"#));
    assert!(xml.contains(r#"<InvoicedQuantity unitCode="hod">2</InvoicedQuantity>"#));
    // 3 × 1000.00 / 21 % a 2 × 500.00 / 15 %
    assert!(xml.contains("<LineExtensionAmount>3000.00</LineExtensionAmount>"));
    assert!(xml.contains("<LineExtensionTaxAmount>630.00</LineExtensionTaxAmount>"));
    assert!(xml.contains("<LineExtensionAmountTaxInclusive>3630.00</LineExtensionAmountTaxInclusive>"));
    assert!(xml.contains("<LineExtensionAmount>1000.00</LineExtensionAmount>"));
    assert!(xml.contains("<UnitPrice>500.00</UnitPrice>"));
    assert!(xml.contains("<Description>Notebook Dell Latitude</Description>"));
}

#[test]
fn tax_summary_and_totals() {
    let xml = render();
    assert!(xml.contains("<TaxAmount>780.00</TaxAmount>"));
    assert_eq!(xml.matches("<TaxSubTotal>").count(), 2);
    assert!(xml.contains("<TaxableAmount>3000.00</TaxableAmount>"));
    assert!(xml.contains("<TaxableAmount>1000.00</TaxableAmount>"));
    assert!(xml.contains("<TaxExclusiveAmount>4000.00</TaxExclusiveAmount>"));
    assert!(xml.contains("<TaxInclusiveAmount>4780.00</TaxInclusiveAmount>"));
    assert!(xml.contains("<PayableAmount>4780.00</PayableAmount>"));
}

#[test]
fn payment_means_bank_transfer() {
    let xml = render();
    assert!(xml.contains("<PaymentMeansCode>42</PaymentMeansCode>"));
    assert!(xml.contains("<IBAN>CZ6508000000192000145399</IBAN>"));
    assert!(xml.contains("<ID>20250115001</ID>"));
}

#[test]
fn supplier_without_account_omits_paid_by() {
    let mut inv = invoice();
    inv.supplier.iban = None;
    let mut out = Vec::new();
    Isdoc::write(&mut out, &inv).expect("write isdoc");
    let xml = String::from_utf8(out).expect("utf-8");
    assert!(!xml.contains("<PaidBy>"));
    assert!(xml.contains("<PaymentMeansCode>42</PaymentMeansCode>"));
}
