use fakturiolib::error::FakturioError;
use fakturiolib::iban;
use fakturiolib::payment::{self, PaymentDescriptor, BANK_CODES};
use rand::{rngs::StdRng, SeedableRng};
use rust_decimal::Decimal;

fn descriptor() -> PaymentDescriptor {
    PaymentDescriptor {
        account: "CZ6508000000192000145399".into(),
        amount: Decimal::new(121_000, 2),
        currency: "CZK".into(),
        message: "Faktura 2025000100".into(),
        variable_symbol: "2025000100".into(),
    }
}

#[test]
fn spd_field_order_and_tags() {
    // pevný externí kontrakt SPD 1.0 — přesné pořadí tagů i oddělovače
    assert_eq!(
        descriptor().to_string(),
        "SPD*1.0*ACC:CZ6508000000192000145399*AM:1210.00*CC:CZK*MSG:Faktura 2025000100*X-VS:2025000100"
    );
}

#[test]
fn amount_has_two_decimals_and_dot() {
    let mut d = descriptor();
    d.amount = Decimal::new(5, 0);
    assert!(d.to_string().contains("*AM:5.00*"));

    d.amount = Decimal::new(123_456, 1);
    assert!(d.to_string().contains("*AM:12345.60*"));

    // nulová i záporná částka se vykreslí — kontrakt volajícího, ne chyba
    d.amount = Decimal::ZERO;
    assert!(d.to_string().contains("*AM:0.00*"));
    d.amount = Decimal::new(-100, 2);
    assert!(d.to_string().contains("*AM:-1.00*"));
}

#[test]
fn message_truncates_before_stripping() {
    let mut d = descriptor();
    // 78 znaků; po zkrácení na 60 a odstranění rezervovaných znaků 47
    d.message = "Invoice*1:2;3".repeat(6);
    let rendered = d.to_string();

    let msg = rendered
        .split("MSG:")
        .nth(1)
        .and_then(|rest| rest.split('*').next())
        .expect("MSG field");
    assert_eq!(msg, "Invoice123Invoice123Invoice123Invoice123Invoice");
    assert_eq!(msg.chars().count(), 47);
}

#[test]
fn variable_symbol_truncates_then_filters_digits() {
    let mut d = descriptor();
    d.variable_symbol = "AB12-34CD56EFGH".into();
    // prvních 10 znaků je "AB12-34CD5", z nich zůstanou číslice
    assert!(d.to_string().ends_with("X-VS:12345"));

    d.variable_symbol = "20250001001".into();
    assert!(d.to_string().ends_with("X-VS:2025000100"));
}

#[test]
fn generated_account_is_valid_czech_iban() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let account = payment::generate_account(&mut rng, &BANK_CODES).expect("account");
        assert_eq!(account.len(), 24);
        assert!(account.starts_with("CZ"));
        assert!(account[2..].bytes().all(|b| b.is_ascii_digit()));
        assert!(iban::validate(&account));
        let code = &account[20..];
        assert!(BANK_CODES.contains(&code));
    }
}

#[test]
fn single_bank_code_is_honored() {
    let mut rng = StdRng::seed_from_u64(11);
    let account = payment::generate_account(&mut rng, &["2010"]).expect("account");
    assert_eq!(&account[20..], "2010");
}

#[test]
fn empty_bank_code_list_is_rejected() {
    let mut rng = StdRng::seed_from_u64(3);
    let err = payment::generate_account(&mut rng, &[]).unwrap_err();
    assert!(matches!(err, FakturioError::InvalidConfiguration(_)));
}

#[test]
fn independent_draws_differ() {
    let mut rng = StdRng::seed_from_u64(1);
    let a = payment::generate_account(&mut rng, &BANK_CODES).expect("first");
    let b = payment::generate_account(&mut rng, &BANK_CODES).expect("second");
    assert_ne!(a, b);
}
