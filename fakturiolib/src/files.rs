//! Pojmenování výstupních souborů; práce se souborovým systémem zůstává v CLI.

/// Bezpečný základ jména souboru — lomítka a mezery nahradí podtržítkem.
pub fn safe_stem(invoice_number: &str) -> String {
    invoice_number
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ' ' => '_',
            other => other,
        })
        .collect()
}

/// Název souboru `prefix_<číslo faktury>.<přípona>`.
pub fn output_filename(prefix: &str, invoice_number: &str, extension: &str) -> String {
    format!("{prefix}_{}.{extension}", safe_stem(invoice_number))
}
