//! Nízkoúrovňové kreslení PDF: obsahové proudy, stránky, fonty a přílohy.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::{FakturioError, Result};
use crate::formats::qr::QrMatrix;

/// A4 v bodech.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Bodů na milimetr.
pub const MM: f32 = 2.834_65;

/// Milimetry na body.
pub fn mm(v: f32) -> f32 {
    v * MM
}

/// Jména fontů ve zdrojích stránky.
pub const FONT_REGULAR: &str = "F1";
pub const FONT_BOLD: &str = "F2";
pub const FONT_OBLIQUE: &str = "F3";

/// Hrubý odhad šířky textu v Helvetice (průměrná šířka znaku).
pub fn text_width(size: f32, text: &str) -> f32 {
    text.chars().count() as f32 * size * 0.52
}

/// Obsahový proud jedné stránky.
#[derive(Default)]
pub struct PageCanvas {
    ops: Vec<Operation>,
}

impl PageCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fill(&mut self, r: f32, g: f32, b: f32) {
        self.ops
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
    }

    pub fn set_stroke(&mut self, r: f32, g: f32, b: f32) {
        self.ops
            .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
    }

    pub fn text(&mut self, font: &str, size: f32, x: f32, y: f32, text: &str) {
        self.ops.push(Operation::new("BT", vec![]));
        self.ops
            .push(Operation::new("Tf", vec![font.into(), size.into()]));
        self.ops
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(text),
                StringFormat::Literal,
            )],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    /// Text zarovnaný pravým okrajem na `right_x`.
    pub fn text_right(&mut self, font: &str, size: f32, right_x: f32, y: f32, text: &str) {
        self.text(font, size, right_x - text_width(size, text), y, text);
    }

    /// Text vystředěný na `center_x`.
    pub fn text_center(&mut self, font: &str, size: f32, center_x: f32, y: f32, text: &str) {
        self.text(font, size, center_x - text_width(size, text) / 2.0, y, text);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32) {
        self.ops.push(Operation::new("w", vec![width.into()]));
        self.ops
            .push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.ops
            .push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.ops.push(Operation::new("S", vec![]));
    }

    pub fn rect_fill(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), w.into(), h.into()],
        ));
        self.ops.push(Operation::new("f", vec![]));
    }

    pub fn rect_stroke(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32) {
        self.ops.push(Operation::new("w", vec![width.into()]));
        self.ops.push(Operation::new(
            "re",
            vec![x.into(), y.into(), w.into(), h.into()],
        ));
        self.ops.push(Operation::new("S", vec![]));
    }

    /// QR mřížka jako černé obdélníky; `size` zahrnuje tichou zónu 4 modulů.
    pub fn qr_grid(&mut self, matrix: &QrMatrix, x: f32, y: f32, size: f32) {
        const QUIET: usize = 4;
        let total = matrix.width() + 2 * QUIET;
        let module = size / total as f32;

        self.set_fill(1.0, 1.0, 1.0);
        self.rect_fill(x, y, size, size);

        self.set_fill(0.0, 0.0, 0.0);
        for my in 0..matrix.width() {
            for mx in 0..matrix.width() {
                if matrix.is_dark(mx, my) {
                    // řádek 0 je nahoře, osa PDF roste vzhůru
                    let px = x + (QUIET + mx) as f32 * module;
                    let py = y + size - (QUIET + my + 1) as f32 * module;
                    self.rect_fill(px, py, module, module);
                }
            }
        }
    }

    fn into_content(self) -> Content {
        Content {
            operations: self.ops,
        }
    }
}

/// Překlad do WinAnsi (cp1252). Česká písmena, která v cp1252 nejsou,
/// se zapisují bez diakritiky, aby vestavěná Helvetica text zobrazila.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '\u{20}'..='\u{7e}' => ch as u8,
            '\u{a0}'..='\u{ff}' => ch as u8,
            'š' => 0x9A,
            'Š' => 0x8A,
            'ž' => 0x9E,
            'Ž' => 0x8E,
            'ě' => b'e',
            'Ě' => b'E',
            'č' => b'c',
            'Č' => b'C',
            'ř' => b'r',
            'Ř' => b'R',
            'ů' => b'u',
            'Ů' => b'U',
            'ď' => b'd',
            'Ď' => b'D',
            'ť' => b't',
            'Ť' => b'T',
            'ň' => b'n',
            'Ň' => b'N',
            '„' | '“' | '”' => b'"',
            '–' | '—' => b'-',
            _ => b'?',
        };
        out.push(byte);
    }
    out
}

/// Skládání celého dokumentu: stránky, zdroje, katalog, volitelná příloha.
pub struct DocBuilder {
    doc: Document,
    pages_id: (u32, u16),
    page_ids: Vec<Object>,
    attachment: Option<(String, Vec<u8>)>,
}

impl DocBuilder {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        DocBuilder {
            doc,
            pages_id,
            page_ids: Vec::new(),
            attachment: None,
        }
    }

    pub fn add_page(&mut self, canvas: PageCanvas) -> Result<()> {
        let encoded = canvas
            .into_content()
            .encode()
            .map_err(|e| FakturioError::Pdf(e.to_string()))?;
        let content_id = self.doc.add_object(Stream::new(dictionary! {}, encoded));

        let resources = dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => "Helvetica",
                    "Encoding" => "WinAnsiEncoding",
                },
                FONT_BOLD => dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => "Helvetica-Bold",
                    "Encoding" => "WinAnsiEncoding",
                },
                FONT_OBLIQUE => dictionary! {
                    "Type" => "Font",
                    "Subtype" => "Type1",
                    "BaseFont" => "Helvetica-Oblique",
                    "Encoding" => "WinAnsiEncoding",
                },
            },
        };

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
            "Resources" => resources,
            "Contents" => content_id,
        });
        self.page_ids.push(Object::Reference(page_id));
        Ok(())
    }

    /// Vloží soubor jako přílohu PDF (jmenný strom EmbeddedFiles).
    pub fn attach_file(&mut self, filename: &str, data: Vec<u8>) {
        self.attachment = Some((filename.to_string(), data));
    }

    pub fn finish(mut self) -> Result<Vec<u8>> {
        let count = self.page_ids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.page_ids,
                "Count" => count,
            }),
        );

        let mut catalog = dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        };

        if let Some((filename, data)) = self.attachment.take() {
            let size = data.len() as i64;
            let file_id = self.doc.add_object(Stream::new(
                dictionary! {
                    "Type" => "EmbeddedFile",
                    "Params" => dictionary! { "Size" => size },
                },
                data,
            ));
            let filespec_id = self.doc.add_object(dictionary! {
                "Type" => "Filespec",
                "F" => Object::string_literal(filename.as_str()),
                "UF" => Object::string_literal(filename.as_str()),
                "EF" => dictionary! { "F" => file_id },
            });
            catalog.set(
                "Names",
                dictionary! {
                    "EmbeddedFiles" => dictionary! {
                        "Names" => vec![
                            Object::string_literal(filename.as_str()),
                            Object::Reference(filespec_id),
                        ],
                    },
                },
            );
        }

        let catalog_id = self.doc.add_object(catalog);
        self.doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        self.doc
            .save_to(&mut out)
            .map_err(|e| FakturioError::Pdf(e.to_string()))?;
        log::debug!("PDF dokument: {} stran, {} B", count, out.len());
        Ok(out)
    }
}

impl Default for DocBuilder {
    fn default() -> Self {
        Self::new()
    }
}
