//! Telephony extension derivation.
//!
//! The per-character "digit" is not bounded to 0..=9: it grows with the
//! callsign length and shrinks with the square of the position, and the fold
//! multiplies by ten regardless. Extensions already handed out depend on this
//! exact arithmetic, so it must not be normalised.

/// Derive the extension number for a callsign.
///
/// For each character of the uppercased callsign at byte offset `i` with code
/// point `c`, `digit = (c - '0') + (len - i*i)` where `len` is the byte length
/// of the callsign as given; the digits are folded as `ext = ext * 10 + digit`.
/// Arithmetic wraps at 64 bits.
pub fn generate_extension(callsign: &str) -> i64 {
    let length = callsign.len() as i64;
    let mut extension: i64 = 0;
    let mut offset: i64 = 0;

    for c in callsign.chars().map(simple_uppercase) {
        let digit = (c as i64 - '0' as i64)
            .wrapping_add(length.wrapping_sub(offset.wrapping_mul(offset)));
        extension = extension.wrapping_mul(10).wrapping_add(digit);
        offset += c.len_utf8() as i64;
    }

    extension
}

/// Simple (single-character) uppercase mapping.
///
/// `char::to_uppercase` applies the full mapping. Where that expands, the
/// simple mapping is either the titlecase letter with prosgegrammeni (Greek
/// letters with ypogegrammeni) or the character itself (e.g. `ß`).
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => iota_subscript_titlecase(c).unwrap_or(c),
    }
}

fn iota_subscript_titlecase(c: char) -> Option<char> {
    let offset = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => 8,
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => 9,
        _ => return None,
    };
    char::from_u32(c as u32 + offset)
}
