use chrono::NaiveDate;
use fakturiolib::formats::isdoc::Isdoc;
use fakturiolib::formats::pdf::{RenderOptions, TemplateKind};
use fakturiolib::formats::qr;
use fakturiolib::model::{Company, Invoice, Item};
use fakturiolib::traits::WriteFormat;
use rust_decimal::Decimal;

fn invoice() -> Invoice {
    let supplier = Company {
        name: "Západ Solutions s.r.o.".into(),
        ico: "11223344".into(),
        dic: "CZ11223344".into(),
        street: "Masarykova 101".into(),
        city: "Brno".into(),
        zip_code: "602 00".into(),
        country: "Česká republika".into(),
        iban: Some("CZ6508000000192000145399".into()),
        bank_name: Some("Česká spořitelna, a.s.".into()),
        email: Some("info@zapadsolutions.cz".into()),
        phone: Some("+420 601 123 456".into()),
    };
    let customer = Company {
        name: "Východ Market a.s.".into(),
        ico: "55667788".into(),
        dic: "CZ55667788".into(),
        street: "Hlavní 5".into(),
        city: "Ostrava".into(),
        zip_code: "702 00".into(),
        country: "Česká republika".into(),
        iban: None,
        bank_name: None,
        email: None,
        phone: None,
    };
    Invoice {
        invoice_number: "20250320007".into(),
        supplier,
        customer,
        items: vec![
            Item {
                description: "Vývoj webové aplikace".into(),
                quantity: 8,
                unit: "hod".into(),
                unit_price: Decimal::new(45_000, 2),
                vat_rate: 21,
            },
            Item {
                description: "Papír A4 5000 listů".into(),
                quantity: 2,
                unit: "balení".into(),
                unit_price: Decimal::new(15_000, 2),
                vat_rate: 15,
            },
            Item {
                description: "Hosting služby".into(),
                quantity: 1,
                unit: "měsíc".into(),
                unit_price: Decimal::new(30_000, 2),
                vat_rate: 21,
            },
        ],
        issue_date: NaiveDate::from_ymd_opt(2025, 3, 20).expect("date"),
        due_date: NaiveDate::from_ymd_opt(2025, 4, 3).expect("date"),
        variable_symbol: "20250320007".into(),
        payment_method: "bankovní převod".into(),
        note: "Faktura vystavena elektronicky a je platná bez podpisu.".into(),
        currency: "CZK".into(),
    }
}

const SPD: &str =
    "SPD*1.0*ACC:CZ6508000000192000145399*AM:7935.00*CC:CZK*MSG:Faktura 20250320007*X-VS:2025032000";

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn every_template_renders_pdf() {
    for kind in TemplateKind::ALL {
        let bytes = kind
            .render(&invoice(), &RenderOptions::default())
            .expect("render");
        assert!(bytes.starts_with(b"%PDF-"), "template {}", kind.name());
        assert!(bytes.len() > 1_000, "template {}", kind.name());
        assert!(contains(&bytes, b"%%EOF"), "template {}", kind.name());
    }
}

#[test]
fn qr_grid_grows_the_document() {
    let inv = invoice();
    let plain = TemplateKind::Classic
        .render(&inv, &RenderOptions::default())
        .expect("plain");
    let opts = RenderOptions {
        qr_payload: Some(SPD.to_string()),
        isdoc: None,
    };
    let with_qr = TemplateKind::Classic.render(&inv, &opts).expect("with qr");
    assert!(with_qr.len() > plain.len());
}

#[test]
fn isdoc_attachment_is_embedded() {
    let inv = invoice();
    let mut xml = Vec::new();
    Isdoc::write(&mut xml, &inv).expect("isdoc");

    let opts = RenderOptions {
        qr_payload: None,
        isdoc: Some(xml),
    };
    let bytes = TemplateKind::Classic.render(&inv, &opts).expect("render");
    assert!(contains(&bytes, b"EmbeddedFile"));
    assert!(contains(&bytes, b"isdoc.xml"));
    assert!(contains(&bytes, b"Filespec"));

    let plain = TemplateKind::Classic
        .render(&inv, &RenderOptions::default())
        .expect("plain");
    assert!(!contains(&plain, b"EmbeddedFile"));
}

#[test]
fn qr_png_sidecar_is_png() {
    let mut out = Vec::new();
    qr::write_png(&mut out, SPD).expect("png");
    assert!(out.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn qr_matrix_shape() {
    let matrix = qr::matrix(SPD).expect("matrix");
    // QR verze mají lichou šířku >= 21 modulů
    assert!(matrix.width() >= 21);
    assert_eq!(matrix.width() % 2, 1);
    // finder pattern v levém horním rohu je tmavý
    assert!(matrix.is_dark(0, 0));
}
