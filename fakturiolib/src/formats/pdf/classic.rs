//! Klasická šablona — tradiční modrý design s linkovanou tabulkou.

use crate::error::Result;
use crate::formats::qr;
use crate::model::{Company, Invoice};

use super::canvas::{
    mm, DocBuilder, PageCanvas, FONT_BOLD, FONT_OBLIQUE, FONT_REGULAR, PAGE_HEIGHT, PAGE_WIDTH,
};
use super::{format_czk, format_date, RenderOptions, Template};

const BLUE: (f32, f32, f32) = (0.13, 0.30, 0.55);
const LIGHT_BLUE: (f32, f32, f32) = (0.88, 0.92, 0.97);

pub struct Classic;

impl Template for Classic {
    fn render(&self, invoice: &Invoice, opts: &RenderOptions) -> Result<Vec<u8>> {
        let left = mm(20.0);
        let right = PAGE_WIDTH - mm(20.0);

        let mut page = PageCanvas::new();
        let mut y = PAGE_HEIGHT - mm(25.0);

        // hlavička
        page.set_fill(BLUE.0, BLUE.1, BLUE.2);
        page.text(FONT_BOLD, 22.0, left, y, "FAKTURA");
        page.text_right(
            FONT_BOLD,
            13.0,
            right,
            y,
            &format!("č. {}", invoice.invoice_number),
        );
        y -= mm(3.0);
        page.set_stroke(BLUE.0, BLUE.1, BLUE.2);
        page.line(left, y, right, y, 1.5);
        y -= mm(10.0);

        // dodavatel / odběratel ve dvou sloupcích
        let col2 = left + (right - left) / 2.0 + mm(5.0);
        let top = y;
        party_block(&mut page, left, y, "DODAVATEL", &invoice.supplier, true);
        party_block(&mut page, col2, top, "ODBĚRATEL", &invoice.customer, false);
        y -= mm(48.0);

        // platební metadata
        let meta = [
            ("Datum vystavení:", format_date(invoice.issue_date)),
            ("Datum splatnosti:", format_date(invoice.due_date)),
            ("Variabilní symbol:", invoice.vs()),
            ("Způsob platby:", invoice.payment_method.clone()),
        ];
        for (label, value) in meta {
            page.set_fill(0.0, 0.0, 0.0);
            page.text(FONT_BOLD, 9.0, left, y, label);
            page.text(FONT_REGULAR, 9.0, left + mm(38.0), y, &value);
            y -= mm(5.0);
        }
        y -= mm(5.0);

        // tabulka položek
        y = items_table(&mut page, invoice, left, right, y);
        y -= mm(8.0);

        // rozpis DPH vlevo, součty vpravo
        vat_summary(&mut page, invoice, left, y);

        let total_label_x = right - mm(70.0);
        page.set_fill(LIGHT_BLUE.0, LIGHT_BLUE.1, LIGHT_BLUE.2);
        page.rect_fill(total_label_x - mm(3.0), y - mm(3.0), mm(73.0), mm(9.0));
        page.set_fill(BLUE.0, BLUE.1, BLUE.2);
        page.text(FONT_BOLD, 11.0, total_label_x, y, "Celkem k úhradě:");
        page.text_right(
            FONT_BOLD,
            11.0,
            right,
            y,
            &format_czk(invoice.total_with_vat()),
        );
        y -= mm(18.0);

        // platební údaje
        page.set_fill(0.0, 0.0, 0.0);
        page.text(FONT_BOLD, 10.0, left, y, "Platební údaje");
        y -= mm(5.5);
        if let Some(acc) = &invoice.supplier.iban {
            page.text(FONT_REGULAR, 9.0, left, y, &format!("IBAN: {acc}"));
            y -= mm(5.0);
        }
        if let Some(bank) = &invoice.supplier.bank_name {
            page.text(FONT_REGULAR, 9.0, left, y, &format!("Banka: {bank}"));
            y -= mm(5.0);
        }
        page.text(
            FONT_REGULAR,
            9.0,
            left,
            y,
            &format!("Variabilní symbol: {}", invoice.vs()),
        );

        // QR platba vpravo dole
        if let Some(payload) = &opts.qr_payload {
            let qr = qr::matrix(payload)?;
            let size = mm(40.0);
            let qr_x = right - size;
            let qr_y = mm(35.0);
            page.qr_grid(&qr, qr_x, qr_y, size);
            page.set_fill(0.0, 0.0, 0.0);
            page.text_center(
                FONT_REGULAR,
                8.0,
                qr_x + size / 2.0,
                qr_y - mm(5.0),
                "Naskenujte pro platbu",
            );
        }

        // poznámka
        if !invoice.note.is_empty() {
            page.set_fill(0.3, 0.3, 0.3);
            page.text(FONT_OBLIQUE, 8.0, left, mm(20.0), &invoice.note);
        }

        let mut builder = DocBuilder::new();
        if let Some(isdoc) = &opts.isdoc {
            builder.attach_file("isdoc.xml", isdoc.clone());
        }
        builder.add_page(page)?;
        builder.finish()
    }
}

fn party_block(
    page: &mut PageCanvas,
    x: f32,
    mut y: f32,
    label: &str,
    company: &Company,
    with_contact: bool,
) {
    page.set_fill(BLUE.0, BLUE.1, BLUE.2);
    page.text(FONT_BOLD, 9.0, x, y, label);
    y -= mm(6.0);

    page.set_fill(0.0, 0.0, 0.0);
    page.text(FONT_BOLD, 10.0, x, y, &company.name);
    y -= mm(5.0);
    for line in company.address_lines() {
        page.text(FONT_REGULAR, 9.0, x, y, &line);
        y -= mm(4.5);
    }
    y -= mm(1.5);
    page.text(FONT_REGULAR, 9.0, x, y, &format!("IČO: {}", company.ico));
    y -= mm(4.5);
    page.text(FONT_REGULAR, 9.0, x, y, &format!("DIČ: {}", company.dic));

    if with_contact {
        if let Some(email) = &company.email {
            y -= mm(4.5);
            page.text(FONT_REGULAR, 9.0, x, y, email);
        }
        if let Some(phone) = &company.phone {
            y -= mm(4.5);
            page.text(FONT_REGULAR, 9.0, x, y, phone);
        }
    }
}

/// Vrací y pod tabulkou.
fn items_table(page: &mut PageCanvas, invoice: &Invoice, left: f32, right: f32, mut y: f32) -> f32 {
    // sloupce: popis, množství, jednotka, cena/j., DPH, celkem
    let col_qty = left + mm(78.0);
    let col_unit = left + mm(94.0);
    let col_price = left + mm(120.0);
    let col_vat = left + mm(136.0);

    let row_h = mm(6.5);

    page.set_fill(BLUE.0, BLUE.1, BLUE.2);
    page.rect_fill(left, y - mm(2.0), right - left, row_h);
    page.set_fill(1.0, 1.0, 1.0);
    let head_y = y;
    page.text(FONT_BOLD, 9.0, left + mm(2.0), head_y, "Popis");
    page.text_right(FONT_BOLD, 9.0, col_qty + mm(10.0), head_y, "Množství");
    page.text(FONT_BOLD, 9.0, col_unit + mm(2.0), head_y, "Jedn.");
    page.text_right(FONT_BOLD, 9.0, col_price + mm(12.0), head_y, "Cena/j.");
    page.text_right(FONT_BOLD, 9.0, col_vat + mm(10.0), head_y, "DPH");
    page.text_right(FONT_BOLD, 9.0, right - mm(2.0), head_y, "Celkem");
    y -= row_h;

    page.set_fill(0.0, 0.0, 0.0);
    page.set_stroke(0.75, 0.75, 0.75);
    for item in &invoice.items {
        page.text(FONT_REGULAR, 9.0, left + mm(2.0), y, &item.description);
        page.text_right(
            FONT_REGULAR,
            9.0,
            col_qty + mm(10.0),
            y,
            &item.quantity.to_string(),
        );
        page.text(FONT_REGULAR, 9.0, col_unit + mm(2.0), y, &item.unit);
        page.text_right(
            FONT_REGULAR,
            9.0,
            col_price + mm(12.0),
            y,
            &format_czk(item.unit_price),
        );
        page.text_right(
            FONT_REGULAR,
            9.0,
            col_vat + mm(10.0),
            y,
            &format!("{} %", item.vat_rate),
        );
        page.text_right(
            FONT_REGULAR,
            9.0,
            right - mm(2.0),
            y,
            &format_czk(item.total_with_vat()),
        );
        page.line(left, y - mm(2.0), right, y - mm(2.0), 0.5);
        y -= row_h;
    }

    y
}

fn vat_summary(page: &mut PageCanvas, invoice: &Invoice, x: f32, mut y: f32) {
    page.set_fill(0.0, 0.0, 0.0);
    page.text(FONT_BOLD, 9.0, x, y, "Rozpis DPH");
    y -= mm(5.0);
    page.text(FONT_REGULAR, 8.0, x, y, "Sazba");
    page.text_right(FONT_REGULAR, 8.0, x + mm(30.0), y, "Základ");
    page.text_right(FONT_REGULAR, 8.0, x + mm(55.0), y, "DPH");
    y -= mm(4.5);
    for (rate, line) in invoice.vat_summary() {
        page.text(FONT_REGULAR, 8.0, x, y, &format!("{rate} %"));
        page.text_right(FONT_REGULAR, 8.0, x + mm(30.0), y, &format_czk(line.base));
        page.text_right(FONT_REGULAR, 8.0, x + mm(55.0), y, &format_czk(line.vat));
        y -= mm(4.5);
    }
}
