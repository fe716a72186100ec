use fakturiolib::error::FakturioError;
use fakturiolib::iban;

#[test]
fn known_worked_example() {
    // reálné kontrolní číslice známého testovacího IBANu
    let check = iban::compute_check_digits("CZ", "08000000192000145399").expect("check digits");
    assert_eq!(check, "65");
}

#[test]
fn check_digits_are_zero_padded() {
    // tyto BBANy vedou na hodnoty pod 10
    assert_eq!(
        iban::compute_check_digits("CZ", "29141777631706690743").expect("check digits"),
        "02"
    );
    assert_eq!(
        iban::compute_check_digits("CZ", "72185182222541894232").expect("check digits"),
        "09"
    );
}

#[test]
fn degenerate_bodies() {
    assert_eq!(
        iban::compute_check_digits("CZ", "00000000000000000000").expect("check digits"),
        "79"
    );
    assert_eq!(
        iban::compute_check_digits("CZ", "11111111111111111111").expect("check digits"),
        "57"
    );
}

#[test]
fn pure_function_is_deterministic() {
    let a = iban::compute_check_digits("CZ", "08000000192000145399").expect("first");
    let b = iban::compute_check_digits("CZ", "08000000192000145399").expect("second");
    assert_eq!(a, b);
}

#[test]
fn letters_in_body_map_to_digits() {
    // schémata s písmeny v těle (GB): A=10 ... Z=35
    assert_eq!(
        iban::compute_check_digits("GB", "WEST12345698765432").expect("check digits"),
        "82"
    );
    assert!(iban::validate("GB82WEST12345698765432"));
}

#[test]
fn computed_identifiers_validate() {
    for body in [
        "08000000192000145399",
        "29141777631706690743",
        "00000000000000000000",
    ] {
        let check = iban::compute_check_digits("CZ", body).expect("check digits");
        assert!(iban::validate(&format!("CZ{check}{body}")));
    }
}

#[test]
fn validate_rejects_tampered_identifier() {
    assert!(iban::validate("CZ6508000000192000145399"));
    assert!(!iban::validate("CZ6508000000192000145398"));
    assert!(!iban::validate("CZ6608000000192000145399"));
    assert!(!iban::validate("CZ65"));
    assert!(!iban::validate(""));
}

#[test]
fn invalid_character_is_reported() {
    let err = iban::compute_check_digits("CZ", "0800-123").unwrap_err();
    assert!(matches!(err, FakturioError::InvalidCharacter('-')));

    let err = iban::compute_check_digits("cz", "0800").unwrap_err();
    assert!(matches!(err, FakturioError::InvalidCharacter('c')));
}
