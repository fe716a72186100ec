//! Kontrolní součet IBAN podle ISO 7064 (mod 97-10).

use crate::error::{FakturioError, Result};

/// Dvouciferné kontrolní číslice pro `country_code` + `account_body`.
///
/// Vstup se přeskládá na `body + country + "00"`, písmena se mapují
/// A→10 … Z→35 a zbytek po dělení 97 se počítá průběžně po číslicích,
/// bez velkých čísel. Výsledek `98 - zbytek` je vždy v rozsahu 1–98,
/// formátovaný na přesně dvě číslice.
pub fn compute_check_digits(country_code: &str, account_body: &str) -> Result<String> {
    let remainder = mod97(account_body, country_code, "00")?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Ověření celého identifikátoru: CC + kontrolní číslice + tělo ≡ 1 (mod 97).
pub fn validate(identifier: &str) -> bool {
    if identifier.len() < 5 || !identifier.is_ascii() {
        return false;
    }
    let (country, rest) = identifier.split_at(2);
    let (check, body) = rest.split_at(2);
    matches!(mod97(body, country, check), Ok(1))
}

/// Průběžné mod 97 přes přeskládaný řetězec `body + country + suffix`.
fn mod97(body: &str, country: &str, suffix: &str) -> Result<u32> {
    let mut remainder: u32 = 0;
    for part in [body, country, suffix] {
        for ch in part.chars() {
            match ch {
                '0'..='9' => {
                    remainder = (remainder * 10 + (ch as u32 - '0' as u32)) % 97;
                }
                'A'..='Z' => {
                    // dvouciferná hodnota písmene, po číslici
                    let value = ch as u32 - 'A' as u32 + 10;
                    remainder = (remainder * 10 + value / 10) % 97;
                    remainder = (remainder * 10 + value % 10) % 97;
                }
                other => return Err(FakturioError::InvalidCharacter(other)),
            }
        }
    }
    Ok(remainder)
}
