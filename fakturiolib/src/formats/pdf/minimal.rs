//! Minimalistická šablona — čistý černobílý design, jediný sloupec.

use crate::error::Result;
use crate::formats::qr;
use crate::model::{Company, Invoice};

use super::canvas::{
    mm, DocBuilder, PageCanvas, FONT_BOLD, FONT_REGULAR, PAGE_HEIGHT, PAGE_WIDTH,
};
use super::{format_czk, format_date, RenderOptions, Template};

pub struct Minimal;

impl Template for Minimal {
    fn render(&self, invoice: &Invoice, opts: &RenderOptions) -> Result<Vec<u8>> {
        let left = mm(25.0);
        let right = PAGE_WIDTH - mm(25.0);

        let mut page = PageCanvas::new();
        let mut y = PAGE_HEIGHT - mm(30.0);

        page.set_fill(0.0, 0.0, 0.0);
        page.text(FONT_REGULAR, 18.0, left, y, "Faktura");
        page.text_right(FONT_REGULAR, 18.0, right, y, &invoice.invoice_number);
        y -= mm(4.0);
        page.set_stroke(0.0, 0.0, 0.0);
        page.line(left, y, right, y, 0.75);
        y -= mm(10.0);

        // strany pod sebou
        y = party_lines(&mut page, left, y, "Dodavatel", &invoice.supplier);
        y -= mm(4.0);
        y = party_lines(&mut page, left, y, "Odběratel", &invoice.customer);
        y -= mm(8.0);

        page.text(
            FONT_REGULAR,
            9.0,
            left,
            y,
            &format!(
                "Vystaveno {} · Splatnost {} · VS {}",
                format_date(invoice.issue_date),
                format_date(invoice.due_date),
                invoice.vs()
            ),
        );
        y -= mm(10.0);

        // úzká tabulka: popis, množství, celkem
        let col_qty = right - mm(55.0);
        let row_h = mm(6.0);
        page.line(left, y + mm(3.0), right, y + mm(3.0), 0.5);
        page.text(FONT_BOLD, 9.0, left, y - mm(2.0), "Položka");
        page.text_right(FONT_BOLD, 9.0, col_qty, y - mm(2.0), "Množství");
        page.text_right(FONT_BOLD, 9.0, right, y - mm(2.0), "Celkem s DPH");
        y -= mm(5.0);
        page.line(left, y, right, y, 0.5);
        y -= mm(5.5);

        for item in &invoice.items {
            page.text(FONT_REGULAR, 9.0, left, y, &item.description);
            page.text_right(
                FONT_REGULAR,
                9.0,
                col_qty,
                y,
                &format!("{} {}", item.quantity, item.unit),
            );
            page.text_right(
                FONT_REGULAR,
                9.0,
                right,
                y,
                &format_czk(item.total_with_vat()),
            );
            y -= row_h;
        }
        page.line(left, y + mm(2.0), right, y + mm(2.0), 0.5);
        y -= mm(6.0);

        // rozpis DPH textově
        for (rate, line) in invoice.vat_summary() {
            page.text_right(
                FONT_REGULAR,
                8.5,
                right,
                y,
                &format!(
                    "DPH {rate} %: základ {}, daň {}",
                    format_czk(line.base),
                    format_czk(line.vat)
                ),
            );
            y -= mm(4.5);
        }
        y -= mm(4.0);

        page.text_right(
            FONT_BOLD,
            12.0,
            right,
            y,
            &format!("Celkem {}", format_czk(invoice.total_with_vat())),
        );
        y -= mm(14.0);

        // platba jedním odstavcem
        if let Some(acc) = &invoice.supplier.iban {
            let bank = invoice
                .supplier
                .bank_name
                .as_deref()
                .unwrap_or("bankovním převodem");
            page.text(
                FONT_REGULAR,
                9.0,
                left,
                y,
                &format!("Platbu zašlete na {acc} ({bank}), VS {}.", invoice.vs()),
            );
        } else {
            page.text(
                FONT_REGULAR,
                9.0,
                left,
                y,
                &format!("Platba: {}, VS {}.", invoice.payment_method, invoice.vs()),
            );
        }

        if let Some(payload) = &opts.qr_payload {
            let qr = qr::matrix(payload)?;
            let size = mm(35.0);
            let qr_x = right - size;
            let qr_y = mm(30.0);
            page.qr_grid(&qr, qr_x, qr_y, size);
            page.set_fill(0.0, 0.0, 0.0);
            page.text_center(
                FONT_REGULAR,
                7.5,
                qr_x + size / 2.0,
                qr_y - mm(4.5),
                "Naskenujte pro platbu",
            );
        }

        if !invoice.note.is_empty() {
            page.set_fill(0.0, 0.0, 0.0);
            page.text(FONT_REGULAR, 8.0, left, mm(18.0), &invoice.note);
        }

        let mut builder = DocBuilder::new();
        if let Some(isdoc) = &opts.isdoc {
            builder.attach_file("isdoc.xml", isdoc.clone());
        }
        builder.add_page(page)?;
        builder.finish()
    }
}

fn party_lines(page: &mut PageCanvas, x: f32, mut y: f32, label: &str, company: &Company) -> f32 {
    page.text(FONT_BOLD, 9.0, x, y, label);
    page.text(FONT_REGULAR, 9.0, x + mm(30.0), y, &company.name);
    y -= mm(4.5);
    let address = company.address_lines();
    page.text(
        FONT_REGULAR,
        8.5,
        x + mm(30.0),
        y,
        &format!("{}, {}", address[0], address[1]),
    );
    y -= mm(4.5);
    page.text(
        FONT_REGULAR,
        8.5,
        x + mm(30.0),
        y,
        &format!("IČO {} · DIČ {}", company.ico, company.dic),
    );
    y -= mm(4.5);
    y
}
