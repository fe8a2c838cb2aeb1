//! Generates `decoder-core/src/table.rs` from the raw Morse code list.
//!
//! Run manually and paste the output between the generated-code markers
//! whenever the raw list changes. The table is ordered by ASCII code so the
//! decoder can turn an index straight into a character by adding `b' '`.

use std::process::ExitCode;

/// Raw Morse code, ITU plus the usual punctuation. Order is irrelevant
/// here; the generator sorts everything into ASCII slots.
const RAW_CODE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('\'', ".----."),
    ('!', "-.-.--"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (':', "---..."),
    (';', "-.-.-."),
    ('=', "-...-"),
    ('+', ".-.-."),
    ('-', "-....-"),
    ('_', "..--.-"),
    ('"', ".-..-."),
    ('$', "...-..-"),
    ('@', ".--.-."),
];

/// Code numbers cover the printable range `' '..='Z'`.
const TABLE_LEN: usize = (b'Z' - b' ' + 1) as usize;

/// Translate a dot/dash string to its code number: a dot appends a 1 bit,
/// a dash a 0 bit then a 1 bit, least significant bit first.
fn code_number(spelling: &str) -> Result<u16, String> {
    let mut code: u32 = 0;
    let mut bitmask: u32 = 1;
    for c in spelling.chars() {
        match c {
            '-' => bitmask <<= 1,
            '.' => {}
            other => return Err(format!("found symbol {:?} in code", other)),
        }
        code |= bitmask;
        bitmask <<= 1;
    }
    u16::try_from(code).map_err(|_| format!("code too large: {} -> {}", spelling, code))
}

fn build_table() -> Result<[u16; TABLE_LEN], String> {
    let mut table = [0u16; TABLE_LEN];
    for &(c, spelling) in RAW_CODE {
        let slot = match c {
            '_' => 0, // shares the unused-slot sentinel position
            ' '..='Z' => (c as u8 - b' ') as usize,
            _ => return Err(format!("character {:?} outside the table range", c)),
        };
        let code = code_number(spelling)?;
        if table[slot] != 0 {
            return Err(format!("duplicate entry for {:?}", c));
        }
        table[slot] = code;
    }
    Ok(table)
}

fn render(table: &[u16; TABLE_LEN]) -> String {
    let mut out = String::new();
    out.push_str("/* === Generated by tablegen. Do not edit by hand. === */\n");
    out.push_str(&format!("pub const CODE_COUNT: usize = {};\n\n", TABLE_LEN));
    out.push_str("pub static MORSE_CODE: [u16; CODE_COUNT] = [\n");
    for (i, code) in table.iter().enumerate() {
        if i % 12 == 0 {
            out.push_str("    ");
        }
        out.push_str(&format!("{:3},", code));
        if i % 12 == 11 || i == TABLE_LEN - 1 {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }
    out.push_str("];\n");
    out.push_str("/* === End of generated code. === */\n");
    out
}

fn main() -> ExitCode {
    match build_table() {
        Ok(table) => {
            print!("{}", render(&table));
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("tablegen: {}", msg);
            ExitCode::FAILURE
        }
    }
}
