//! PNG header shape validation. Deliberately not a full decoder: only the
//! 8-byte signature and the `IHDR` chunk's declared dimensions are checked,
//! CRC and pixel data are out of scope.

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const IHDR_LENGTH: u32 = 13;
const IHDR_TYPE: [u8; 4] = *b"IHDR";
const MIN_DIMENSION: u32 = 8;
const MAX_DIMENSION: u32 = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngHeaderCheck {
    pub is_valid: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub errors: Vec<String>,
}

/// Validates the PNG signature and `IHDR` chunk shape of `bytes`, declared
/// as living at `path` (used only to make error messages actionable).
pub fn validate_png_header(bytes: &[u8], path: &str) -> PngHeaderCheck {
    let mut errors = Vec::new();

    if bytes.len() < 8 || bytes[..8] != PNG_SIGNATURE {
        errors.push(format!("{path}: missing or malformed PNG signature"));
        return PngHeaderCheck { is_valid: false, width: None, height: None, errors };
    }

    if bytes.len() < 8 + 4 + 4 + 13 {
        errors.push(format!("{path}: file too short to contain an IHDR chunk"));
        return PngHeaderCheck { is_valid: false, width: None, height: None, errors };
    }

    let ihdr_length = u32::from_be_bytes(bytes[8..12].try_into().unwrap());
    if ihdr_length != IHDR_LENGTH {
        errors.push(format!("{path}: IHDR chunk length {ihdr_length} != {IHDR_LENGTH}"));
    }

    let ihdr_type = &bytes[12..16];
    if ihdr_type != IHDR_TYPE {
        errors.push(format!("{path}: first chunk is not IHDR"));
    }

    if !errors.is_empty() {
        return PngHeaderCheck { is_valid: false, width: None, height: None, errors };
    }

    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());

    for (label, dim) in [("width", width), ("height", height)] {
        if dim < MIN_DIMENSION || dim > MAX_DIMENSION || dim % 8 != 0 {
            errors.push(format!(
                "{path}: {label} {dim} must be in {MIN_DIMENSION}..={MAX_DIMENSION} and divisible by 8"
            ));
        }
    }

    let is_valid = errors.is_empty();
    PngHeaderCheck {
        is_valid,
        width: is_valid.then_some(width),
        height: is_valid.then_some(height),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&IHDR_LENGTH.to_be_bytes());
        bytes.extend_from_slice(&IHDR_TYPE);
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[0; 5]); // bit depth, colour type, compression, filter, interlace
        bytes
    }

    #[test]
    fn accepts_well_formed_header() {
        let check = validate_png_header(&valid_png(16, 16), "sprite.png");
        assert!(check.is_valid);
        assert_eq!(check.width, Some(16));
        assert_eq!(check.height, Some(16));
    }

    #[test]
    fn rejects_missing_signature() {
        let check = validate_png_header(b"not a png", "sprite.png");
        assert!(!check.is_valid);
    }

    #[test]
    fn rejects_dimension_not_divisible_by_eight() {
        let check = validate_png_header(&valid_png(10, 16), "sprite.png");
        assert!(!check.is_valid);
    }

    #[test]
    fn rejects_dimension_out_of_range() {
        let check = validate_png_header(&valid_png(2048, 16), "sprite.png");
        assert!(!check.is_valid);
    }
}
