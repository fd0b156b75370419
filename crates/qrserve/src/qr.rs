use qrcode::{EcLevel, QrCode, render::unicode::Dense1x2};

use crate::error::Result;

/// Render `data` as a QR code made of unicode half blocks
///
/// Dark and light modules are swapped so the code scans on a dark terminal
/// background.
///
/// # Errors
/// Returns an error if `data` does not fit in a QR code at level M
pub fn render(data: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;

    Ok(code
        .render::<Dense1x2>()
        .dark_color(Dense1x2::Light)
        .light_color(Dense1x2::Dark)
        .quiet_zone(true)
        .build())
}
