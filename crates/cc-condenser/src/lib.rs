//! Binary condensation — lossless compaction of binary-digit strings.
//!
//! Three passes, applied in order and undone in reverse:
//! 1. Run-length encoding (single-digit counts, capped tokens)
//! 2. Common-replacer substitution (high-frequency 3-bit patterns → symbols)
//! 3. Greedy dictionary substitution (repeating windows → unused digits,
//!    declared in a '.'-joined header terminated by ':')

pub mod patterns;
pub mod rle;

use cc_core::{default_replacers, CommonReplacer};
use patterns::Substitution;

/// Window sizes considered by the dictionary pass.
const MAX_PATTERN_LEN: usize = 4;
const MIN_PATTERN_LEN: usize = 3;

/// Run-length + dictionary compressor for strings of `0`/`1` digits.
///
/// Pure and synchronous; `decode(encode(bits)) == bits` for every input.
/// Neither direction returns an error — malformed condensed input produces
/// best-effort output.
#[derive(Debug, Clone)]
pub struct BinaryCondenser {
    replacers: Vec<CommonReplacer>,
}

impl BinaryCondenser {
    pub fn new(replacers: Vec<CommonReplacer>) -> Self {
        Self { replacers }
    }

    pub fn replacers(&self) -> &[CommonReplacer] {
        &self.replacers
    }

    /// Condense a binary-digit string.
    pub fn encode(&self, bits: &str) -> String {
        if bits.is_empty() {
            return String::new();
        }

        let mut condensed = rle::encode_runs(bits);
        for replacer in &self.replacers {
            condensed = condensed.replace(&replacer.pattern, &replacer.symbol.to_string());
        }

        let free = patterns::free_digits(&condensed);
        let ranked = patterns::find_patterns(&condensed, MAX_PATTERN_LEN, MIN_PATTERN_LEN);

        match patterns::plan_substitutions(&free, &ranked) {
            Some(plan) => {
                tracing::debug!(substitutions = plan.len(), "applying dictionary pass");
                let mut header = Vec::with_capacity(plan.len());
                for Substitution { digit, pattern } in &plan {
                    header.push(format!("{digit}{pattern}"));
                    condensed = condensed.replace(pattern.as_str(), &digit.to_string());
                }
                format!("{}:{}", header.join("."), condensed)
            }
            None => condensed,
        }
    }

    /// Exact inverse of [`encode`](Self::encode).
    ///
    /// Variable substitutions are undone first, then common replacers, then
    /// run-length expansion — the reverse of the encoding order.
    pub fn decode(&self, condensed: &str) -> String {
        let mut body = condensed.to_string();

        if let Some((header, rest)) = condensed.split_once(':') {
            body = rest.to_string();
            for entry in header.split('.') {
                let mut chars = entry.chars();
                if let Some(digit) = chars.next() {
                    let pattern: String = chars.collect();
                    if !pattern.is_empty() {
                        body = body.replace(digit, &pattern);
                    }
                }
            }
        }

        for replacer in &self.replacers {
            body = body.replace(replacer.symbol, &replacer.pattern);
        }

        rle::expand_runs(&body)
    }
}

impl Default for BinaryCondenser {
    fn default() -> Self {
        Self::new(default_replacers())
    }
}
