//! Test utilities: scripted key timelines for deterministic pipeline tests

use heapless::Vec;

use crate::pipeline::DecodePipeline;
use crate::types::{KeyRate, Tick};

/// One step of a key script: hold the given level for a number of ticks.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct KeyStep {
    pub down: bool,
    pub ticks: Tick,
}

/// A scripted key timeline.
pub type KeyScript<const N: usize> = Vec<KeyStep, N>;

/// Append the keying of one character in standard Morse timing: one unit
/// down per dot, three per dash, one unit up between elements.
///
/// Pass `code` as a dot/dash string such as `"-.-"`. Returns an error on
/// script overflow or a stray symbol.
pub fn push_char<const N: usize>(
    script: &mut KeyScript<N>,
    code: &str,
    unit: Tick,
) -> Result<(), &'static str> {
    let mut first = true;
    for c in code.chars() {
        if !first {
            script
                .push(KeyStep { down: false, ticks: unit })
                .map_err(|_| "script full")?;
        }
        first = false;
        let ticks = match c {
            '.' => unit,
            '-' => unit + unit + unit,
            _ => return Err("not a dot or dash"),
        };
        script
            .push(KeyStep { down: true, ticks })
            .map_err(|_| "script full")?;
    }
    Ok(())
}

/// Append a silent gap of the given number of units.
pub fn push_gap<const N: usize>(
    script: &mut KeyScript<N>,
    units: u16,
    unit: Tick,
) -> Result<(), &'static str> {
    let mut ticks: Tick = 0;
    for _ in 0..units {
        ticks = ticks.wrapping_add(unit);
    }
    script
        .push(KeyStep { down: false, ticks })
        .map_err(|_| "script full")
}

/// Drive a pipeline tick by tick over a script, starting at `start`, and
/// collect every decoded byte.
///
/// Trailing silence long enough to flush the final character and word is
/// the script author's responsibility.
pub fn run_script<const N: usize, const M: usize>(
    pipeline: &mut DecodePipeline,
    script: &KeyScript<N>,
    start: Tick,
) -> Vec<u8, M> {
    let mut out = Vec::new();
    let mut now = start;
    for step in script {
        for _ in 0..step.ticks {
            if let Some(byte) = pipeline.poll(step.down, now).byte {
                // Overflow means the script produced more output than the
                // test expected; surfacing the truncation is enough.
                let _ = out.push(byte);
            }
            now = now.wrapping_add(1);
        }
    }
    out
}

/// Key a whole message and decode it through a fresh pipeline.
///
/// `message` is a space-separated sequence of dot/dash strings; words are
/// separated by `/`. The transcript includes the trailing word space.
pub fn decode_message<const M: usize>(
    message: &str,
    rate: KeyRate,
    start: Tick,
) -> Result<Vec<u8, M>, &'static str> {
    let unit = rate.dot_ticks();
    let mut script: KeyScript<128> = Vec::new();
    for (i, chunk) in message.split(' ').enumerate() {
        if chunk == "/" {
            // The character gap already emitted leaves 3 more units to the
            // word boundary; pad well past it.
            push_gap(&mut script, 5, unit)?;
            continue;
        }
        if i > 0 {
            push_gap(&mut script, 3, unit)?;
        }
        push_char(&mut script, chunk, unit)?;
    }
    // Flush the final character and word.
    push_gap(&mut script, 8, unit)?;

    let mut pipeline = DecodePipeline::new(rate);
    Ok(run_script(&mut pipeline, &script, start))
}
