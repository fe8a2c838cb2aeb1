//! End-to-end scenarios through edge detector, tokenizer and decoder

use decoder_core::test_utils::{decode_message, push_char, push_gap, run_script, KeyScript};
use decoder_core::{DecodePipeline, KeyRate, INVALID_CHAR};
use heapless::Vec;

#[test]
fn test_s_then_word_end_at_slowest_rate() {
    // dot, gap(2u), dot, gap(2u), dot, gap(3u+) at rate index 0.
    let out: Vec<u8, 8> = decode_message("...", KeyRate::Wpm5, 0).unwrap();
    assert_eq!(&out[..], b"S ");
}

#[test]
fn test_paris_round() {
    let out: Vec<u8, 16> =
        decode_message(".--. .- .-. .. ...", KeyRate::Wpm12, 0).unwrap();
    assert_eq!(&out[..], b"PARIS ");
}

#[test]
fn test_two_words() {
    let out: Vec<u8, 16> = decode_message("... --- ... / --- -.-", KeyRate::Wpm18, 0).unwrap();
    assert_eq!(&out[..], b"SOS OK ");
}

#[test]
fn test_unmatched_code_emits_invalid_sentinel() {
    // Eight dots is no character; the decoder reports it and keeps going.
    let out: Vec<u8, 8> = decode_message("........ .", KeyRate::Wpm18, 0).unwrap();
    assert_eq!(out[0], INVALID_CHAR);
    assert_eq!(&out[1..], b"E ");
}

#[test]
fn test_digits_and_punctuation() {
    let out: Vec<u8, 16> = decode_message(".---- ..--- --..--", KeyRate::Wpm18, 0).unwrap();
    assert_eq!(&out[..], b"12, ");
}

#[test]
fn test_word_end_never_carries_stale_code() {
    // A word boundary can only be reached after the character was already
    // flushed by EndOfChar, so the element following a space must decode
    // from a clean accumulator.
    let out: Vec<u8, 8> = decode_message(". / -", KeyRate::Wpm18, 0).unwrap();
    assert_eq!(&out[..], b"E T ");
}

#[test]
fn test_decode_spans_clock_rollover() {
    // Start close enough to the wrap that every deadline in the exchange
    // crosses it.
    let start = u16::MAX - 200;
    let out: Vec<u8, 8> = decode_message("... ---", KeyRate::Wpm5, start).unwrap();
    assert_eq!(&out[..], b"SO ");
}

#[test]
fn test_long_session_transcript() {
    let rate = KeyRate::Wpm18;
    let unit = rate.dot_ticks();
    let mut script: KeyScript<128> = Vec::new();
    for (i, spelling) in ["-.-.", "--.-", "-.-.", "--.-"].iter().enumerate() {
        if i > 0 {
            push_gap(&mut script, 3, unit).unwrap();
        }
        push_char(&mut script, spelling, unit).unwrap();
    }
    push_gap(&mut script, 8, unit).unwrap();

    let mut pipeline = DecodePipeline::new(rate);
    let out: Vec<u8, 16> = run_script(&mut pipeline, &script, 0);
    assert_eq!(&out[..], b"CQCQ ");
}
