//! Real-valued gene to character mapping for the substring-mutation encoding.

/// Null character returned when a gene maps to "no replacement".
pub const NO_CHAR: char = '\0';

/// Lowest gene value mapped directly to a printable code point.
const PRINTABLE_MIN: f64 = 32.0;
/// Highest gene value mapped directly to a printable code point.
const PRINTABLE_MAX: f64 = 126.0;

/// Map a gene to a typeable character.
///
/// - below 32: [`NO_CHAR`]
/// - 32..=126: the character with code point `floor(d)`
/// - above 126: `'a' + floor(d) mod 25`, so the upper range only yields `'a'..='y'`
///
/// Values above the printable range fold onto lowercase letters, which makes
/// letters far more likely than any other symbol without needing a
/// probability distribution over the gene. Non-finite input is the caller's
/// problem; `NaN` maps to [`NO_CHAR`].
pub fn map_to_char(d: f64) -> char {
    if d > PRINTABLE_MAX {
        // fmod is exact for integral f64, so huge genes stay periodic
        let offset = (d.floor() % 25.0) as u8;
        (b'a' + offset) as char
    } else if d >= PRINTABLE_MIN {
        (d.floor() as u8) as char
    } else {
        NO_CHAR
    }
}
