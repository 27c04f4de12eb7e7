//! Run-length pass over binary-digit strings.
//!
//! Tokens are either a bare digit (runs of one or two, emitted that many
//! times) or `<digit><count>` where the single count digit 2..=9 means the
//! digit occurs count + 1 times. Runs longer than ten split into several
//! capped tokens, so a count never needs more than one character and the
//! stream stays parseable with one character of lookahead.

/// Longest run a single token can carry (count digit 9).
const MAX_RUN: usize = 10;

/// Collapse runs into digit/count tokens.
pub fn encode_runs(bits: &str) -> String {
    let mut out = String::with_capacity(bits.len());
    let mut run: Option<(char, usize)> = None;

    for ch in bits.chars() {
        match run {
            Some((digit, len)) if digit == ch => run = Some((digit, len + 1)),
            Some((digit, len)) => {
                emit_run(&mut out, digit, len);
                run = Some((ch, 1));
            }
            None => run = Some((ch, 1)),
        }
    }
    if let Some((digit, len)) = run {
        emit_run(&mut out, digit, len);
    }

    out
}

fn emit_run(out: &mut String, digit: char, mut len: usize) {
    while len > MAX_RUN {
        out.push(digit);
        out.push('9');
        len -= MAX_RUN;
    }
    match len {
        0 => {}
        1 => out.push(digit),
        2 => {
            out.push(digit);
            out.push(digit);
        }
        n => {
            out.push(digit);
            // n - 1 is in 2..=9 here
            out.push(char::from_digit((n - 1) as u32, 10).unwrap_or('9'));
        }
    }
}

/// Expand digit/count tokens back into the original run.
pub fn expand_runs(encoded: &str) -> String {
    let chars: Vec<char> = encoded.chars().collect();
    let mut out = String::with_capacity(chars.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let digit = chars[i];
        match chars.get(i + 1).and_then(|c| c.to_digit(10)) {
            Some(count) if count >= 2 => {
                for _ in 0..=count {
                    out.push(digit);
                }
                i += 2;
            }
            _ => {
                out.push(digit);
                i += 1;
            }
        }
    }

    out
}
