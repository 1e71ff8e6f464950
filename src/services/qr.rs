/// QR code generation and validation for pub check-ins
use std::fs;
use std::path::{Path, PathBuf};

use qrcode::render::svg;
use qrcode::QrCode;

use crate::error::{AppError, Result};

/// The string a pub's QR code encodes
pub fn qr_payload(pub_name: &str) -> String {
    format!("Pub: {}", pub_name)
}

/// Render a pub's QR code as an SVG image and persist it under `output_dir`.
///
/// The file is named after the pub, so two pubs sharing a name overwrite
/// each other's image.
pub fn generate_qr_code(output_dir: &Path, pub_name: &str) -> Result<PathBuf> {
    let payload = qr_payload(pub_name);
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| AppError::Internal(format!("Failed to generate QR code: {}", e)))?;

    let image = code.render::<svg::Color>().build();

    fs::create_dir_all(output_dir)?;
    let file_path = output_dir.join(format!("{}.svg", pub_name));
    fs::write(&file_path, image.as_bytes())?;

    Ok(file_path)
}

/// A scanned string is valid iff it matches the derived payload exactly
pub fn validate_qr_code(pub_name: &str, scanned_data: &str) -> bool {
    scanned_data == qr_payload(pub_name)
}
