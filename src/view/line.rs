//! Display line formatting.
//!
//! Every line starts with an 8-digit uppercase hex offset and `": "`, followed
//! by up to [`GROUP_SIZE`] bytes rendered for the current [`ViewMode`]:
//!
//! ```text
//! Hex:    00000000: 48 65 6C 6C 6F  Hello
//! Binary: 00000000: 01001000 01100101
//! Ascii:  00000000: Hello
//! ```
//!
//! The last line of a file may hold fewer bytes and is never padded.

use std::fmt::Write;

use crate::app::ViewMode;
use crate::config::GROUP_SIZE;

/// Width of the `"XXXXXXXX: "` offset prefix.
pub const OFFSET_PREFIX_WIDTH: usize = 10;

/// Separator between hex pairs and the ASCII column.
const HEX_GUTTER: &str = "  ";

/// Whether `byte` is shown literally in ASCII columns.
#[inline]
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// ASCII column character for `byte`.
#[inline]
pub fn printable_char(byte: u8) -> char {
    if is_printable(byte) {
        byte as char
    } else {
        '.'
    }
}

/// Number of display lines for a file of `len` bytes.
pub fn line_count(len: usize) -> usize {
    len.div_ceil(GROUP_SIZE)
}

/// Format the line starting at `offset`, covering
/// `[offset, min(offset + GROUP_SIZE, data.len()))`.
///
/// An offset at or past the end yields a line with no items.
pub fn format_line(data: &[u8], offset: usize, mode: ViewMode) -> String {
    let end = offset.saturating_add(GROUP_SIZE).min(data.len());
    let chunk = data.get(offset..end).unwrap_or_default();
    format_chunk(chunk, offset, mode)
}

/// Format an already sliced group of at most [`GROUP_SIZE`] bytes.
pub fn format_chunk(chunk: &[u8], offset: usize, mode: ViewMode) -> String {
    let mut line = String::with_capacity(line_width(mode, chunk.len()));

    let _ = write!(line, "{offset:08X}: ");

    match mode {
        ViewMode::Hex => {
            for (idx, &byte) in chunk.iter().enumerate() {
                if idx > 0 {
                    line.push(' ');
                }
                let _ = write!(line, "{byte:02X}");
            }
            line.push_str(HEX_GUTTER);
            push_ascii(&mut line, chunk);
        }
        ViewMode::Binary => {
            for &byte in chunk {
                let _ = write!(line, "{byte:08b} ");
            }
        }
        ViewMode::Ascii => push_ascii(&mut line, chunk),
    }

    line
}

fn push_ascii(line: &mut String, chunk: &[u8]) {
    line.extend(chunk.iter().map(|&b| printable_char(b)));
}

/// Character width of a line holding `items` bytes in `mode`.
///
/// Assumes an offset below `0x1_0000_0000`, i.e. an 8-digit prefix.
pub fn line_width(mode: ViewMode, items: usize) -> usize {
    let body = match mode {
        ViewMode::Hex => (items * 3).saturating_sub(1) + HEX_GUTTER.len() + items,
        ViewMode::Binary => items * 9,
        ViewMode::Ascii => items,
    };
    OFFSET_PREFIX_WIDTH + body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a_to_t() -> Vec<u8> {
        (0..20).map(|i| 0x41 + i as u8).collect()
    }

    #[test]
    fn test_printable_boundaries() {
        assert_eq!(printable_char(31), '.');
        assert_eq!(printable_char(32), ' ');
        assert_eq!(printable_char(126), '~');
        assert_eq!(printable_char(127), '.');
        assert_eq!(printable_char(0), '.');
        assert_eq!(printable_char(0xff), '.');
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(0), 0);
        assert_eq!(line_count(1), 1);
        assert_eq!(line_count(16), 1);
        assert_eq!(line_count(17), 2);
        assert_eq!(line_count(20), 2);
    }

    #[test]
    fn test_hex_full_line() {
        let data = a_to_t();
        let line = format_line(&data, 0, ViewMode::Hex);
        assert_eq!(
            line,
            "00000000: 41 42 43 44 45 46 47 48 49 4A 4B 4C 4D 4E 4F 50  ABCDEFGHIJKLMNOP"
        );
        assert_eq!(line.len(), line_width(ViewMode::Hex, 16));
    }

    #[test]
    fn test_hex_partial_line_not_padded() {
        let data = a_to_t();
        let line = format_line(&data, 16, ViewMode::Hex);
        assert_eq!(line, "00000010: 51 52 53 54  QRST");
        assert_eq!(line.len(), line_width(ViewMode::Hex, 4));
    }

    #[test]
    fn test_hex_uppercase_and_dots() {
        let data = [0x00, 0xab, 0x7f, 0x20, 0x7e];
        let line = format_line(&data, 0, ViewMode::Hex);
        assert_eq!(line, "00000000: 00 AB 7F 20 7E  ... ~");
    }

    #[test]
    fn test_binary_line() {
        let data = [0x80, 0x01, 0xff];
        let line = format_line(&data, 0, ViewMode::Binary);
        assert_eq!(line, "00000000: 10000000 00000001 11111111 ");
        assert_eq!(line.len(), line_width(ViewMode::Binary, 3));
    }

    #[test]
    fn test_binary_full_line_group_count() {
        let data = [0x5a; 32];
        let line = format_line(&data, 16, ViewMode::Binary);
        let body = line.strip_prefix("00000010: ").unwrap();
        let groups: Vec<&str> = body.split_terminator(' ').collect();
        assert_eq!(groups.len(), 16);
        assert!(groups.iter().all(|g| *g == "01011010"));
        assert!(!body.contains('.'));
    }

    #[test]
    fn test_ascii_line() {
        let data = b"Hi\x00\x1f there\x7f";
        let line = format_line(data, 0, ViewMode::Ascii);
        assert_eq!(line, "00000000: Hi.. there.");
        assert_eq!(line.len(), line_width(ViewMode::Ascii, data.len()));
    }

    #[test]
    fn test_offset_is_absolute() {
        let data = vec![0u8; 0x130];
        let line = format_line(&data, 0x120, ViewMode::Ascii);
        assert!(line.starts_with("00000120: "));
    }

    #[test]
    fn test_offset_past_end_has_no_items() {
        let data = [1, 2, 3];
        assert_eq!(format_line(&data, 16, ViewMode::Ascii), "00000010: ");
        assert_eq!(format_line(&data, 16, ViewMode::Binary), "00000010: ");
    }

    #[test]
    fn test_line_width_per_mode() {
        assert_eq!(line_width(ViewMode::Hex, 16), 75);
        assert_eq!(line_width(ViewMode::Binary, 16), 154);
        assert_eq!(line_width(ViewMode::Ascii, 16), 26);
    }
}
