//! PDF šablony faktur — tři rozložení nad jedním datovým modelem.

mod canvas;
mod classic;
mod minimal;
mod modern;

pub use canvas::{DocBuilder, PageCanvas};
pub use classic::Classic;
pub use minimal::Minimal;
pub use modern::Modern;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::model::Invoice;

/// Volby vykreslení jedné faktury.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Platební řetězec SPD; je-li zadán, šablona vykreslí QR kód.
    pub qr_payload: Option<String>,
    /// ISDOC XML k vložení do PDF jako příloha `isdoc.xml`.
    pub isdoc: Option<Vec<u8>>,
}

pub trait Template {
    fn render(&self, invoice: &Invoice, opts: &RenderOptions) -> Result<Vec<u8>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Classic,
    Modern,
    Minimal,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] =
        [TemplateKind::Classic, TemplateKind::Modern, TemplateKind::Minimal];

    pub fn for_name(name: &str) -> Option<TemplateKind> {
        match name {
            "classic" => Some(TemplateKind::Classic),
            "modern" => Some(TemplateKind::Modern),
            "minimal" => Some(TemplateKind::Minimal),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Classic => "classic",
            TemplateKind::Modern => "modern",
            TemplateKind::Minimal => "minimal",
        }
    }

    pub fn render(self, invoice: &Invoice, opts: &RenderOptions) -> Result<Vec<u8>> {
        match self {
            TemplateKind::Classic => Classic.render(invoice, opts),
            TemplateKind::Modern => Modern.render(invoice, opts),
            TemplateKind::Minimal => Minimal.render(invoice, opts),
        }
    }
}

/// Částka v Kč: mezera jako oddělovač tisíců, čárka před desetinami.
pub(crate) fn format_czk(value: Decimal) -> String {
    let rounded = format!("{:.2}", value.round_dp(2));
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped},{frac_part} Kč")
}

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
