//! Encoding Repair
//!
//! Some backend strings arrive as UTF-8 bytes that were decoded as Latin-1
//! somewhere upstream ("Ð\u{9a}Ð¸Ñ\u{80}Ð¾Ð²" instead of "Киров").

/// Lead byte of two-byte Cyrillic sequences, as it looks after a Latin-1 decode.
pub const MOJIBAKE_MARKER: char = 'Ð';

/// Undo a UTF-8-as-Latin-1 mis-decode.
///
/// Text without the marker passes through unchanged. Otherwise each code point
/// is taken as one raw byte (its low byte, for code points above U+00FF) and
/// the bytes are decoded as UTF-8, with invalid sequences replaced.
pub fn fix_encoding(text: &str) -> String {
    if !text.contains(MOJIBAKE_MARKER) {
        return text.to_string();
    }

    let bytes: Vec<u8> = text.chars().map(|c| (u32::from(c) & 0xFF) as u8).collect();
    let fixed = String::from_utf8_lossy(&bytes).into_owned();
    if fixed.contains(char::REPLACEMENT_CHARACTER) {
        log::warn!("encoding repair was lossy for {:?}", text);
    }
    fixed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn garble(text: &str) -> String {
        text.bytes().map(char::from).collect()
    }

    #[test]
    fn test_repairs_latin1_misdecode() {
        let garbled = garble("г.Киров, ЖК Знак");
        assert!(garbled.contains(MOJIBAKE_MARKER));
        assert_eq!(fix_encoding(&garbled), "г.Киров, ЖК Знак");
    }

    #[test]
    fn test_clean_text_passes_through() {
        assert_eq!(fix_encoding("Строительство"), "Строительство");
        assert_eq!(fix_encoding("Build 42"), "Build 42");
        assert_eq!(fix_encoding(""), "");
    }

    #[test]
    fn test_broken_sequence_is_replaced_not_fatal() {
        // marker with no continuation byte
        let fixed = fix_encoding("Ð");
        assert_eq!(fixed, "\u{FFFD}");
    }
}
