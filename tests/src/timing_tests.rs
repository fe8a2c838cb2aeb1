//! Timing boundary tests for the tokenizer and edge detector
//!
//! Boundary cases are driven at the tokenizer level, on the debounced edge
//! stream: that is where the 2-unit and 3-unit thresholds are defined. The
//! debounce lag of the raw key line is covered separately.

use decoder_core::test_utils::{run_script, KeyScript, KeyStep};
use decoder_core::{
    expired, Decoder, DecodePipeline, Edge, KeyRate, Tick, Tokenizer, UnitDelays,
    DEBOUNCE_TICKS,
};
use heapless::Vec;
use rstest::rstest;

/// Drive a tokenizer-decoder pair over (edge, time) events, polling every
/// tick in between, and collect the transcript.
///
/// The main loop runs much faster than the tick clock, so a timeout landing
/// on the same tick as an edge is observed first; an extra edge-less poll
/// ahead of each edge models that.
fn run_edges(rate: KeyRate, edges: &[(Edge, Tick)], until: Tick) -> std::vec::Vec<u8> {
    let mut tokenizer = Tokenizer::new(UnitDelays::for_rate(rate));
    let mut decoder = Decoder::new();
    let mut out = std::vec::Vec::new();
    let mut next = 0;
    for now in 0..=until {
        let edge = match edges.get(next) {
            Some(&(e, at)) if at == now => {
                next += 1;
                if let Some(sym) = tokenizer.advance(None, now) {
                    if let Some(byte) = decoder.feed(sym) {
                        out.push(byte);
                    }
                }
                Some(e)
            }
            _ => None,
        };
        if let Some(sym) = tokenizer.advance(edge, now) {
            if let Some(byte) = decoder.feed(sym) {
                out.push(byte);
            }
        }
    }
    out
}

#[rstest]
#[case(KeyRate::Wpm5)]
#[case(KeyRate::Wpm8)]
#[case(KeyRate::Wpm12)]
#[case(KeyRate::Wpm18)]
fn test_dot_dash_boundary(#[case] rate: KeyRate) {
    let unit = rate.dot_ticks();
    let flush = 8 * (unit as u32);
    // One tick under two units is still a dot.
    let down = 2 * unit - 1;
    let out = run_edges(rate, &[(Edge::Fall, 0), (Edge::Rise, down)], down + flush as Tick);
    assert_eq!(out, b"E ");
    // Exactly two units is already a dash.
    let down = 2 * unit;
    let out = run_edges(rate, &[(Edge::Fall, 0), (Edge::Rise, down)], down + flush as Tick);
    assert_eq!(out, b"T ");
}

#[rstest]
#[case(KeyRate::Wpm5)]
#[case(KeyRate::Wpm18)]
fn test_gap_classification(#[case] rate: KeyRate) {
    let unit = rate.dot_ticks();
    let press = |start: Tick| [(Edge::Fall, start), (Edge::Rise, start + unit)];

    // Gap under two units: the two dots belong to one character.
    let gap = 2 * unit - 1;
    let mut edges = std::vec::Vec::new();
    edges.extend_from_slice(&press(0));
    edges.extend_from_slice(&press(unit + gap));
    let out = run_edges(rate, &edges, 2 * unit + gap + 8 * unit);
    assert_eq!(out, b"I ");

    // Gap between two and three units: character boundary, same word.
    let gap = 2 * unit + unit / 2;
    let mut edges = std::vec::Vec::new();
    edges.extend_from_slice(&press(0));
    edges.extend_from_slice(&press(unit + gap));
    let out = run_edges(rate, &edges, 2 * unit + gap + 8 * unit);
    assert_eq!(out, b"EE ");

    // Gap past the additional three units: word boundary in between.
    let gap = 6 * unit;
    let mut edges = std::vec::Vec::new();
    edges.extend_from_slice(&press(0));
    edges.extend_from_slice(&press(unit + gap));
    let out = run_edges(rate, &edges, 2 * unit + gap + 8 * unit);
    assert_eq!(out, b"E E ");
}

#[test]
fn test_bounced_release_is_one_press() {
    // A release shorter than the debounce interval must not produce a
    // Rise/Fall pair: the two half-presses merge into one dash.
    let rate = KeyRate::Wpm18;
    let unit = rate.dot_ticks();
    let mut script: KeyScript<8> = Vec::new();
    script.push(KeyStep { down: true, ticks: unit }).unwrap();
    script.push(KeyStep { down: false, ticks: DEBOUNCE_TICKS - 1 }).unwrap();
    script.push(KeyStep { down: true, ticks: unit + unit }).unwrap();
    script.push(KeyStep { down: false, ticks: 8 * unit }).unwrap();
    let mut pipeline = DecodePipeline::new(rate);
    let out: Vec<u8, 8> = run_script(&mut pipeline, &script, 0);
    assert_eq!(&out[..], b"T ");
}

#[test]
fn test_debounce_lag_shifts_raw_thresholds() {
    // On the raw key line the rise is reported one debounce interval after
    // the release, so a raw press must stay that much shorter than two
    // units to classify as a dot.
    let rate = KeyRate::Wpm18;
    let unit = rate.dot_ticks();
    let mut script: KeyScript<4> = Vec::new();
    let down = 2 * unit - DEBOUNCE_TICKS - 1;
    script.push(KeyStep { down: true, ticks: down }).unwrap();
    script.push(KeyStep { down: false, ticks: 8 * unit }).unwrap();
    let mut pipeline = DecodePipeline::new(rate);
    let out: Vec<u8, 8> = run_script(&mut pipeline, &script, 0);
    assert_eq!(&out[..], b"E ");
}

#[rstest]
#[case(0, 0, true)]
#[case(100, 99, true)]
#[case(99, 100, false)]
#[case(0xFFFF, 0, false)] // deadline one tick ahead, just before the wrap
#[case(0, 0xFFFF, true)] // now has wrapped one tick past the deadline
#[case(0x8000, 1, true)] // largest past distance still seen as expired
fn test_expired_cases(#[case] now: Tick, #[case] deadline: Tick, #[case] want: bool) {
    assert_eq!(expired(now, deadline), want);
}

#[test]
fn test_expired_sweep_across_rollover() {
    // Walk now across the wrap point; expiry must flip exactly once, at
    // the deadline.
    let deadline: Tick = 5; // just past the wrap
    let mut previous = false;
    let mut flips = 0;
    for offset in 0..200u16 {
        let now = 0xFF80u16.wrapping_add(offset);
        let e = expired(now, deadline);
        if e != previous {
            flips += 1;
            assert_eq!(now, deadline);
        }
        previous = e;
    }
    assert_eq!(flips, 1);
}
