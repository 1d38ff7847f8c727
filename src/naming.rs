//! Centralized parsing and formatting for the serial filename convention.
//!
//! Every admitted image is named `PREFIX-NNNN.jpeg`: a fixed series prefix,
//! one dash, a four-digit zero-padded serial, and the `.jpeg` extension.
//! The allocator parses these names to find the highest serial in use; the
//! pipeline formats them when admitting new items. Both go through this
//! module so the two sides can never drift apart.
//!
//! Matching is strict: the prefix is case-sensitive, the serial is exactly
//! four ASCII digits, and the extension is the literal `.jpeg`. Anything
//! else in the destination directory is simply not part of the series.

/// Extension shared by every admitted file and its preview.
pub const SERIAL_EXTENSION: &str = "jpeg";

/// Format an admitted filename from a series prefix and serial.
///
/// Serials are zero-padded to four digits: `format_serial("LOP25", 7)` is
/// `"LOP25-0007.jpeg"`. Serials past 9999 widen naturally.
pub fn format_serial(prefix: &str, serial: u32) -> String {
    format!("{prefix}-{serial:04}.{SERIAL_EXTENSION}")
}

/// Parse the serial out of a filename, if it belongs to the series.
///
/// Returns `None` unless the whole name matches `PREFIX-NNNN.jpeg`:
/// - `parse_serial("LOP25", "LOP25-0012.jpeg")` → `Some(12)`
/// - `parse_serial("LOP25", "lop25-0012.jpeg")` → `None` (prefix case)
/// - `parse_serial("LOP25", "LOP25-012.jpeg")` → `None` (three digits)
/// - `parse_serial("LOP25", "LOP25-0012.jpg")` → `None` (extension)
pub fn parse_serial(prefix: &str, file_name: &str) -> Option<u32> {
    let rest = file_name.strip_prefix(prefix)?;
    let rest = rest.strip_prefix('-')?;
    let digits = rest.strip_suffix(".jpeg")?;

    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_pads_to_four_digits() {
        assert_eq!(format_serial("LOP25", 1), "LOP25-0001.jpeg");
        assert_eq!(format_serial("LOP25", 423), "LOP25-0423.jpeg");
    }

    #[test]
    fn format_widens_past_9999() {
        assert_eq!(format_serial("LOP25", 10001), "LOP25-10001.jpeg");
    }

    #[test]
    fn parse_round_trips() {
        assert_eq!(parse_serial("LOP25", &format_serial("LOP25", 12)), Some(12));
        assert_eq!(parse_serial("IMG", "IMG-9999.jpeg"), Some(9999));
        assert_eq!(parse_serial("IMG", "IMG-0000.jpeg"), Some(0));
    }

    #[test]
    fn parse_rejects_prefix_case_variants() {
        assert_eq!(parse_serial("LOP25", "lop25-0001.jpeg"), None);
        assert_eq!(parse_serial("LOP25", "Lop25-0001.jpeg"), None);
    }

    #[test]
    fn parse_rejects_wrong_digit_count() {
        assert_eq!(parse_serial("LOP25", "LOP25-001.jpeg"), None);
        assert_eq!(parse_serial("LOP25", "LOP25-00001.jpeg"), None);
    }

    #[test]
    fn parse_rejects_wrong_extension() {
        assert_eq!(parse_serial("LOP25", "LOP25-0001.jpg"), None);
        assert_eq!(parse_serial("LOP25", "LOP25-0001.JPEG"), None);
        assert_eq!(parse_serial("LOP25", "LOP25-0001.jpeg.bak"), None);
    }

    #[test]
    fn parse_rejects_unrelated_names() {
        assert_eq!(parse_serial("LOP25", "notes.txt"), None);
        assert_eq!(parse_serial("LOP25", "LOP25-.jpeg"), None);
        assert_eq!(parse_serial("LOP25", "LOP25-abcd.jpeg"), None);
        assert_eq!(parse_serial("LOP25", "OTHER-0001.jpeg"), None);
    }
}
