//! Moderní šablona — zeleno-oranžový design s barevnými pásy.

use crate::error::Result;
use crate::formats::qr;
use crate::model::{Company, Invoice};

use super::canvas::{
    mm, DocBuilder, PageCanvas, FONT_BOLD, FONT_OBLIQUE, FONT_REGULAR, PAGE_HEIGHT, PAGE_WIDTH,
};
use super::{format_czk, format_date, RenderOptions, Template};

const GREEN: (f32, f32, f32) = (0.16, 0.50, 0.34);
const ORANGE: (f32, f32, f32) = (0.93, 0.49, 0.13);
const GRAY_BG: (f32, f32, f32) = (0.94, 0.94, 0.94);
const GREEN_BG: (f32, f32, f32) = (0.88, 0.95, 0.90);

pub struct Modern;

impl Template for Modern {
    fn render(&self, invoice: &Invoice, opts: &RenderOptions) -> Result<Vec<u8>> {
        let left = mm(18.0);
        let right = PAGE_WIDTH - mm(18.0);

        let mut page = PageCanvas::new();

        // zelený pás přes celou šířku
        let band_h = mm(24.0);
        page.set_fill(GREEN.0, GREEN.1, GREEN.2);
        page.rect_fill(0.0, PAGE_HEIGHT - band_h, PAGE_WIDTH, band_h);
        page.set_fill(1.0, 1.0, 1.0);
        page.text(FONT_BOLD, 20.0, left, PAGE_HEIGHT - mm(15.5), "FAKTURA");
        page.text_right(
            FONT_REGULAR,
            12.0,
            right,
            PAGE_HEIGHT - mm(15.5),
            &invoice.invoice_number,
        );
        page.set_fill(ORANGE.0, ORANGE.1, ORANGE.2);
        page.rect_fill(0.0, PAGE_HEIGHT - band_h - mm(1.5), PAGE_WIDTH, mm(1.5));

        let mut y = PAGE_HEIGHT - band_h - mm(12.0);

        // bloky stran na šedém podkladu
        let block_w = (right - left - mm(8.0)) / 2.0;
        let block_h = mm(42.0);
        party_block(&mut page, left, y, block_w, block_h, "Dodavatel", &invoice.supplier);
        party_block(
            &mut page,
            left + block_w + mm(8.0),
            y,
            block_w,
            block_h,
            "Odběratel",
            &invoice.customer,
        );
        y -= block_h + mm(10.0);

        // metadata v jednom řádku
        let meta = [
            ("Vystaveno", format_date(invoice.issue_date)),
            ("Splatnost", format_date(invoice.due_date)),
            ("Var. symbol", invoice.vs()),
        ];
        let meta_w = (right - left) / meta.len() as f32;
        for (i, (label, value)) in meta.iter().enumerate() {
            let x = left + i as f32 * meta_w;
            page.set_fill(GREEN.0, GREEN.1, GREEN.2);
            page.text(FONT_BOLD, 8.0, x, y, label);
            page.set_fill(0.0, 0.0, 0.0);
            page.text(FONT_REGULAR, 10.0, x, y - mm(5.0), value);
        }
        y -= mm(14.0);

        // položky s podbarvenými lichými řádky, bez svislých linek
        y = items_table(&mut page, invoice, left, right, y);
        y -= mm(6.0);

        // mezisoučty a velký součet oranžově
        page.set_fill(0.0, 0.0, 0.0);
        page.text_right(
            FONT_REGULAR,
            9.0,
            right - mm(40.0),
            y,
            "Základ daně:",
        );
        page.text_right(
            FONT_REGULAR,
            9.0,
            right,
            y,
            &format_czk(invoice.total_without_vat()),
        );
        y -= mm(5.0);
        page.text_right(FONT_REGULAR, 9.0, right - mm(40.0), y, "DPH celkem:");
        page.text_right(FONT_REGULAR, 9.0, right, y, &format_czk(invoice.total_vat()));
        y -= mm(8.0);
        page.set_fill(ORANGE.0, ORANGE.1, ORANGE.2);
        page.text_right(
            FONT_BOLD,
            14.0,
            right,
            y,
            &format_czk(invoice.total_with_vat()),
        );
        page.text_right(FONT_BOLD, 10.0, right - mm(45.0), y, "K úhradě");
        y -= mm(14.0);

        // platební box na zeleném podkladu
        let box_h = mm(26.0);
        page.set_fill(GREEN_BG.0, GREEN_BG.1, GREEN_BG.2);
        page.rect_fill(left, y - box_h, mm(95.0), box_h);
        let mut py = y - mm(6.0);
        page.set_fill(GREEN.0, GREEN.1, GREEN.2);
        page.text(FONT_BOLD, 9.0, left + mm(3.0), py, "Platba převodem");
        py -= mm(5.5);
        page.set_fill(0.0, 0.0, 0.0);
        if let Some(acc) = &invoice.supplier.iban {
            page.text(FONT_REGULAR, 8.0, left + mm(3.0), py, &format!("IBAN: {acc}"));
            py -= mm(4.5);
        }
        if let Some(bank) = &invoice.supplier.bank_name {
            page.text(FONT_REGULAR, 8.0, left + mm(3.0), py, bank);
            py -= mm(4.5);
        }
        page.text(
            FONT_REGULAR,
            8.0,
            left + mm(3.0),
            py,
            &format!("VS: {}", invoice.vs()),
        );

        // QR vpravo vedle platebního boxu
        if let Some(payload) = &opts.qr_payload {
            let qr = qr::matrix(payload)?;
            let size = mm(38.0);
            let qr_x = right - size;
            let qr_y = y - box_h - mm(10.0);
            page.qr_grid(&qr, qr_x, qr_y, size);
            page.set_fill(GREEN.0, GREEN.1, GREEN.2);
            page.text_center(
                FONT_BOLD,
                8.0,
                qr_x + size / 2.0,
                qr_y - mm(5.0),
                "QR platba",
            );
        }

        // poznámka dole uprostřed
        if !invoice.note.is_empty() {
            page.set_fill(0.35, 0.35, 0.35);
            page.text_center(
                FONT_OBLIQUE,
                8.0,
                PAGE_WIDTH / 2.0,
                mm(15.0),
                &invoice.note,
            );
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
    top: f32,
    w: f32,
    h: f32,
    label: &str,
    company: &Company,
) {
    page.set_fill(GRAY_BG.0, GRAY_BG.1, GRAY_BG.2);
    page.rect_fill(x, top - h, w, h);

    let tx = x + mm(3.0);
    let mut y = top - mm(6.0);
    page.set_fill(GREEN.0, GREEN.1, GREEN.2);
    page.text(FONT_BOLD, 8.0, tx, y, label);
    y -= mm(6.0);
    page.set_fill(0.0, 0.0, 0.0);
    page.text(FONT_BOLD, 9.5, tx, y, &company.name);
    y -= mm(5.0);
    for line in company.address_lines() {
        page.text(FONT_REGULAR, 8.5, tx, y, &line);
        y -= mm(4.0);
    }
    y -= mm(1.0);
    page.text(
        FONT_REGULAR,
        8.5,
        tx,
        y,
        &format!("IČO: {}   DIČ: {}", company.ico, company.dic),
    );
}

fn items_table(page: &mut PageCanvas, invoice: &Invoice, left: f32, right: f32, mut y: f32) -> f32 {
    let col_qty = right - mm(72.0);
    let col_price = right - mm(48.0);
    let col_vat = right - mm(28.0);
    let row_h = mm(6.5);

    page.set_fill(GREEN.0, GREEN.1, GREEN.2);
    page.text(FONT_BOLD, 9.0, left, y, "Položka");
    page.text_right(FONT_BOLD, 9.0, col_qty, y, "Množství");
    page.text_right(FONT_BOLD, 9.0, col_price, y, "Cena/j.");
    page.text_right(FONT_BOLD, 9.0, col_vat, y, "DPH");
    page.text_right(FONT_BOLD, 9.0, right, y, "Celkem");
    y -= mm(2.5);
    page.set_stroke(GREEN.0, GREEN.1, GREEN.2);
    page.line(left, y, right, y, 1.0);
    y -= row_h - mm(2.0);

    for (i, item) in invoice.items.iter().enumerate() {
        if i % 2 == 1 {
            page.set_fill(GRAY_BG.0, GRAY_BG.1, GRAY_BG.2);
            page.rect_fill(left, y - mm(2.0), right - left, row_h);
        }
        page.set_fill(0.0, 0.0, 0.0);
        page.text(FONT_REGULAR, 9.0, left, y, &item.description);
        page.text_right(
            FONT_REGULAR,
            9.0,
            col_qty,
            y,
            &format!("{} {}", item.quantity, item.unit),
        );
        page.text_right(FONT_REGULAR, 9.0, col_price, y, &format_czk(item.unit_price));
        page.text_right(FONT_REGULAR, 9.0, col_vat, y, &format!("{} %", item.vat_rate));
        page.text_right(
            FONT_REGULAR,
            9.0,
            right,
            y,
            &format_czk(item.total_with_vat()),
        );
        y -= row_h;
    }

    y
}
