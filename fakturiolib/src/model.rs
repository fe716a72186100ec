//! Doménové modely — firma, položka, faktura.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{FakturioError, Result};
use crate::iban;

/// Povolené sazby DPH v procentech.
pub const VAT_RATES: [u32; 4] = [0, 10, 15, 21];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub name: String,
    /// IČO — 8 číslic.
    pub ico: String,
    /// DIČ — "CZ" + IČO.
    pub dic: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

fn default_country() -> String {
    "Česká republika".into()
}

impl Company {
    pub fn validate(&self) -> Result<()> {
        if self.ico.len() != 8 || !self.ico.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FakturioError::Validation(format!(
                "IČO musí být 8místné číslo: {}",
                self.ico
            )));
        }
        if !self.dic.starts_with("CZ") || self.dic.len() < 10 {
            return Err(FakturioError::Validation(format!(
                "DIČ musí začínat CZ a obsahovat 8-10 číslic: {}",
                self.dic
            )));
        }
        if let Some(acc) = &self.iban {
            if !acc.starts_with("CZ") || acc.len() != 24 || !iban::validate(acc) {
                return Err(FakturioError::Validation(format!(
                    "neplatný český IBAN: {acc}"
                )));
            }
        }
        Ok(())
    }

    /// Adresa na tři řádky (ulice / PSČ město / země).
    pub fn address_lines(&self) -> [String; 3] {
        [
            self.street.clone(),
            format!("{} {}", self.zip_code, self.city),
            self.country.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub description: String,
    pub quantity: u32,
    /// ks, hod, den, měsíc, balení, m², služba...
    pub unit: String,
    /// Jednotková cena bez DPH v Kč.
    pub unit_price: Decimal,
    #[serde(default = "default_vat_rate")]
    pub vat_rate: u32,
}

fn default_vat_rate() -> u32 {
    21
}

impl Item {
    pub fn total_without_vat(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    pub fn vat_amount(&self) -> Decimal {
        (self.total_without_vat() * Decimal::from(self.vat_rate) / Decimal::from(100)).round_dp(2)
    }

    pub fn total_with_vat(&self) -> Decimal {
        self.total_without_vat() + self.vat_amount()
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(FakturioError::Validation(
                "množství musí být kladné číslo".into(),
            ));
        }
        if self.unit_price <= Decimal::ZERO {
            return Err(FakturioError::Validation(
                "jednotková cena musí být kladné číslo".into(),
            ));
        }
        if !VAT_RATES.contains(&self.vat_rate) {
            return Err(FakturioError::Validation(format!(
                "neplatná sazba DPH: {} %",
                self.vat_rate
            )));
        }
        Ok(())
    }
}

/// Souhrn jedné sazby DPH: základ, daň, celkem.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VatLine {
    pub base: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Číslo faktury ve formátu YYYYMMDDNNN.
    pub invoice_number: String,
    pub supplier: Company,
    pub customer: Company,
    pub items: Vec<Item>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub variable_symbol: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_payment_method() -> String {
    "bankovní převod".into()
}

fn default_currency() -> String {
    "CZK".into()
}

impl Invoice {
    pub fn total_without_vat(&self) -> Decimal {
        self.items.iter().map(Item::total_without_vat).sum()
    }

    pub fn total_vat(&self) -> Decimal {
        self.items.iter().map(Item::vat_amount).sum()
    }

    pub fn total_with_vat(&self) -> Decimal {
        self.total_without_vat() + self.total_vat()
    }

    /// Variabilní symbol; pokud není vyplněn, číslo faktury bez lomítek.
    pub fn vs(&self) -> String {
        if self.variable_symbol.is_empty() {
            self.invoice_number.replace('/', "")
        } else {
            self.variable_symbol.clone()
        }
    }

    /// Rozpis DPH podle sazeb, seřazený vzestupně.
    pub fn vat_summary(&self) -> BTreeMap<u32, VatLine> {
        let mut summary: BTreeMap<u32, VatLine> = BTreeMap::new();
        for item in &self.items {
            let line = summary.entry(item.vat_rate).or_default();
            line.base += item.total_without_vat();
            line.vat += item.vat_amount();
            line.total += item.total_with_vat();
        }
        summary
    }

    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(FakturioError::Validation(
                "faktura musí obsahovat alespoň jednu položku".into(),
            ));
        }
        if self.due_date < self.issue_date {
            return Err(FakturioError::Validation(
                "datum splatnosti nemůže být před datem vystavení".into(),
            ));
        }
        self.supplier.validate()?;
        self.customer.validate()?;
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}
