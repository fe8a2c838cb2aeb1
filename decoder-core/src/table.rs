//! Code-number lookup table and character conversion

use crate::types::INVALID_CHAR;

/* === Generated by tablegen. Do not edit by hand. === */
pub const CODE_COUNT: usize = 59;

/// Code numbers in ASCII order, indexed by `ascii - b' '`, covering
/// `' '..='Z'`. Zero marks a character with no Morse code.
pub static MORSE_CODE: [u16; CODE_COUNT] = [
    363, 694, 221,   0, 375,   0,  61, 853, 214, 726,   0, 109,
    698, 190, 365, 110, 682, 341, 171,  87,  47,  31,  62, 122,
    234, 426, 490, 438,   0,  94,   0, 235, 437,   5,  30,  54,
     14,   1,  27,  26,  15,   3,  85,  22,  29,  10,   6,  42,
     53,  90,  13,   7,   2,  11,  23,  21,  46,  86,  58,
];
/* === End of generated code. === */

/// Convert a code number to its ASCII character.
///
/// The character is `b' '` plus the index of the code in [`MORSE_CODE`].
/// The empty code 0 maps to `'_'` (it cannot arise from a non-empty
/// dot/dash sequence, so the unused-slot sentinel doubles as one meaningful
/// symbol). Codes absent from the table yield [`INVALID_CHAR`].
pub fn lookup(code: u16) -> u8 {
    if code == 0 {
        return b'_';
    }
    match MORSE_CODE.iter().position(|&entry| entry == code) {
        Some(0) => b'_',
        Some(i) => b' ' + i as u8,
        None => INVALID_CHAR,
    }
}
