use fakturiolib::datagen;
use fakturiolib::error::FakturioError;
use fakturiolib::iban;
use fakturiolib::payment::PaymentDescriptor;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn generated_invoice_passes_validation() {
    let mut rng = StdRng::seed_from_u64(2025);
    for _ in 0..20 {
        let invoice = datagen::generate_invoice(&mut rng, None, None).expect("invoice");
        invoice.validate().expect("valid invoice");

        assert_eq!(invoice.invoice_number.len(), 11);
        assert!(invoice.invoice_number.bytes().all(|b| b.is_ascii_digit()));
        assert!(!invoice.items.is_empty() && invoice.items.len() <= 8);
        assert!(invoice.due_date >= invoice.issue_date);

        let account = invoice.supplier.iban.as_deref().expect("supplier account");
        assert_eq!(account.len(), 24);
        assert!(iban::validate(account));
    }
}

#[test]
fn generated_company_is_coherent() {
    let mut rng = StdRng::seed_from_u64(99);
    let company = datagen::generate_company(&mut rng).expect("company");
    company.validate().expect("valid company");

    assert_eq!(company.dic, format!("CZ{}", company.ico));
    assert!(company.email.expect("email").starts_with("info@"));
    assert!(company.phone.expect("phone").starts_with("+420 "));
}

#[test]
fn totals_are_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    let invoice = datagen::generate_invoice(&mut rng, None, None).expect("invoice");

    assert_eq!(
        invoice.total_with_vat(),
        invoice.total_without_vat() + invoice.total_vat()
    );

    let summary = invoice.vat_summary();
    let base_sum: rust_decimal::Decimal = summary.values().map(|l| l.base).sum();
    let vat_sum: rust_decimal::Decimal = summary.values().map(|l| l.vat).sum();
    assert_eq!(base_sum, invoice.total_without_vat());
    assert_eq!(vat_sum, invoice.total_vat());
}

#[test]
fn seeded_generation_is_reproducible() {
    let a = datagen::generate_invoice(&mut StdRng::seed_from_u64(123), None, None).expect("a");
    let b = datagen::generate_invoice(&mut StdRng::seed_from_u64(123), None, None).expect("b");
    assert_eq!(a, b);
}

#[test]
fn batch_generates_requested_count() {
    let mut rng = StdRng::seed_from_u64(5);
    let invoices = datagen::generate_invoices(&mut rng, 5).expect("batch");
    assert_eq!(invoices.len(), 5);
}

#[test]
fn descriptor_uses_supplier_account_and_total() {
    let mut rng = StdRng::seed_from_u64(31);
    let invoice = datagen::generate_invoice(&mut rng, None, None).expect("invoice");
    let descriptor = PaymentDescriptor::for_invoice(&invoice, &mut rng).expect("descriptor");

    assert_eq!(Some(&descriptor.account), invoice.supplier.iban.as_ref());
    assert_eq!(descriptor.amount, invoice.total_with_vat());
    assert_eq!(
        descriptor.message,
        format!("Faktura {}", invoice.invoice_number)
    );
}

#[test]
fn json_config_round_trips() {
    let mut rng = StdRng::seed_from_u64(55);
    let invoice = datagen::generate_invoice(&mut rng, None, None).expect("invoice");

    let json = serde_json::to_string(&invoice).expect("serialize");
    let loaded = datagen::load_from_json(json.as_bytes()).expect("load");
    assert_eq!(invoice, loaded);
}

#[test]
fn json_config_is_validated() {
    let mut rng = StdRng::seed_from_u64(56);
    let mut invoice = datagen::generate_invoice(&mut rng, None, None).expect("invoice");
    invoice.due_date = invoice.issue_date - chrono::Duration::days(1);

    let json = serde_json::to_string(&invoice).expect("serialize");
    let err = datagen::load_from_json(json.as_bytes()).unwrap_err();
    assert!(matches!(err, FakturioError::Validation(_)));
}
