//! ASCII-conformance filter.
//!
//! An all-ASCII source passes outright. Otherwise every source character
//! outside ASCII and outside a small allow-list of typographic punctuation
//! must also occur in the target; a character the target lacks points to an
//! encoding or alignment mismatch.
use std::collections::HashSet;

use lazy_static::lazy_static;

use super::{Filter, Verdict};
use crate::error::Error;
use crate::record::SentencePair;

pub const SIGN: &str = "ErRoR_asciiFilter";

lazy_static! {
    /// Typographic punctuation tolerated in the source without a target match.
    static ref TOLERATED: HashSet<char> =
        ['“', '”', '´', '`', '—', '–', '€', '‐', '‘', '‑'].into_iter().collect();
}

#[derive(Debug, Default)]
pub struct AsciiFilter;

impl AsciiFilter {
    /// True when the pair conforms to the ASCII rule.
    pub fn check(&self, pair: &SentencePair) -> bool {
        if pair.source.is_ascii() {
            return true;
        }
        pair.source
            .chars()
            .filter(|c| !c.is_ascii() && !TOLERATED.contains(c))
            .all(|c| pair.target.contains(c))
    }
}

impl Filter for AsciiFilter {
    fn evaluate(&mut self, pair: &SentencePair) -> Result<Option<Verdict>, Error> {
        Ok(Some(if self.check(pair) {
            Verdict::Pass
        } else {
            Verdict::Fail(SIGN)
        }))
    }
}
