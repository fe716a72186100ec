//! QR symbol pro platební řetězec SPD; korekce chyb úrovně M.

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Luma};
use qrcode::{Color, EcLevel, QrCode};
use std::io::Write;

use crate::error::{FakturioError, Result};

/// Mřížka modulů QR kódu; tichou zónu si řeší vykreslení.
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules[y * self.width + x]
    }
}

/// Mřížka QR kódu pro zadaný platební řetězec.
pub fn matrix(payload: &str) -> Result<QrMatrix> {
    let code = encode(payload)?;
    let width = code.width();
    let modules = code
        .to_colors()
        .into_iter()
        .map(|c| c == Color::Dark)
        .collect();
    Ok(QrMatrix { width, modules })
}

/// Samostatný PNG soubor s QR kódem (pro přiložení vedle PDF).
pub fn write_png<W: Write>(w: W, payload: &str) -> Result<()> {
    let code = encode(payload)?;
    let img = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(240, 240)
        .build();

    PngEncoder::new(w)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::L8,
        )
        .map_err(|e| FakturioError::Qr(e.to_string()))
}

fn encode(payload: &str) -> Result<QrCode> {
    QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::M)
        .map_err(|e| FakturioError::Qr(e.to_string()))
}
