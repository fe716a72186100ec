//! Bankovní identifikátory a platební řetězec SPD 1.0 pro QR platby.

use rand::Rng;
use rust_decimal::Decimal;
use std::fmt;

use crate::error::{FakturioError, Result};
use crate::iban;
use crate::model::Invoice;

/// Reálné kódy bank v ČR (číselník ČNB, výběr).
pub const BANK_CODES: [&str; 8] = [
    "0100", // Komerční banka
    "0300", // ČSOB
    "0800", // Česká spořitelna
    "2010", // Fio banka
    "2700", // UniCredit Bank
    "3030", // Air Bank
    "5500", // Raiffeisenbank
    "6210", // mBank
];

const COUNTRY: &str = "CZ";
const PREFIX_DIGITS: usize = 6;
const NUMBER_DIGITS: usize = 10;

/// Náhodný syntakticky platný český IBAN (24 znaků).
///
/// BBAN má pevné pořadí polí dle ČNB: předčíslí (6) + číslo účtu (10)
/// + kód banky (4). Kód banky se losuje z `bank_codes`, číslice účtu
/// rovnoměrně po jedné. Zdroj náhody dodává volající; se stejným
/// seedem je výstup reprodukovatelný.
pub fn generate_account<R: Rng + ?Sized>(rng: &mut R, bank_codes: &[&str]) -> Result<String> {
    if bank_codes.is_empty() {
        return Err(FakturioError::InvalidConfiguration(
            "empty bank code list",
        ));
    }
    let bank_code = bank_codes[rng.gen_range(0..bank_codes.len())];

    let mut bban = String::with_capacity(PREFIX_DIGITS + NUMBER_DIGITS + bank_code.len());
    for _ in 0..PREFIX_DIGITS + NUMBER_DIGITS {
        bban.push(char::from(b'0' + rng.gen_range(0..10u8)));
    }
    bban.push_str(bank_code);

    let check = iban::compute_check_digits(COUNTRY, &bban)?;
    Ok(format!("{COUNTRY}{check}{bban}"))
}

/// Hodnotový typ platebního řetězce; sestaví se jednou na fakturu
/// a vykreslí do podoby `SPD*1.0*ACC:...*AM:...*CC:...*MSG:...*X-VS:...`.
#[derive(Debug, Clone)]
pub struct PaymentDescriptor {
    pub account: String,
    pub amount: Decimal,
    pub currency: String,
    pub message: String,
    pub variable_symbol: String,
}

impl PaymentDescriptor {
    /// Deskriptor pro fakturu: účet dodavatele, nebo čerstvě vygenerovaný,
    /// pokud dodavatel žádný nemá.
    pub fn for_invoice<R: Rng + ?Sized>(invoice: &Invoice, rng: &mut R) -> Result<Self> {
        let account = match &invoice.supplier.iban {
            Some(acc) => acc.clone(),
            None => generate_account(rng, &BANK_CODES)?,
        };
        Ok(PaymentDescriptor {
            account,
            amount: invoice.total_with_vat(),
            currency: invoice.currency.clone(),
            message: format!("Faktura {}", invoice.invoice_number),
            variable_symbol: invoice.vs(),
        })
    }
}

impl fmt::Display for PaymentDescriptor {
    /// Pořadí tagů i oddělovače jsou pevný externí kontrakt SPD 1.0;
    /// platební aplikace jiné pořadí nepřečtou.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SPD*1.0*ACC:{}*AM:{:.2}*CC:{}*MSG:{}*X-VS:{}",
            self.account,
            self.amount.round_dp(2),
            self.currency,
            sanitize_message(&self.message),
            sanitize_variable_symbol(&self.variable_symbol),
        )
    }
}

/// Zpráva: nejprve zkrácení na 60 znaků, teprve potom odstranění
/// rezervovaných oddělovačů `*`, `:`, `;` — výsledek smí být kratší.
fn sanitize_message(message: &str) -> String {
    message
        .chars()
        .take(60)
        .filter(|ch| !matches!(*ch, '*' | ':' | ';'))
        .collect()
}

/// Variabilní symbol: prvních 10 znaků, z nich jen číslice.
fn sanitize_variable_symbol(vs: &str) -> String {
    vs.chars()
        .take(10)
        .filter(char::is_ascii_digit)
        .collect()
}
