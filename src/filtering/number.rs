//! Number-consistency filter.
//!
//! Every maximal digit run in the source must be covered by the target,
//! either verbatim or through the verbalization map ("2" -> "two",
//! "second", ...). An uncovered run alone is not enough to fail: the target
//! may spell the number in yet another form, so the pair is only flagged
//! when the sets of digit characters present on the two sides disagree too.
use super::{Filter, Verdict};
use crate::error::Error;
use crate::record::SentencePair;
use crate::resources::NumberMap;

pub const SIGN: &str = "ErRoR_numberFilter";

#[derive(Debug, Default)]
pub struct NumberFilter {
    map: NumberMap,
}

impl NumberFilter {
    pub fn new(map: NumberMap) -> Self {
        Self { map }
    }

    /// True when the pair's numbers are consistent.
    pub fn check(&self, pair: &SentencePair) -> bool {
        let source = pair.source.to_lowercase();
        let target = pair.target.to_lowercase();

        let any_missing = digit_runs(&source)
            .iter()
            .any(|run| !self.is_covered(&target, run));

        if any_missing {
            same_digit_sets(&source, &target)
        } else {
            true
        }
    }

    fn is_covered(&self, target: &str, run: &str) -> bool {
        if target.contains(run) {
            return true;
        }
        self.map
            .verbalizations(run)
            .map_or(false, |verbs| verbs.iter().any(|v| target.contains(v.as_str())))
    }
}

/// Maximal runs of ASCII digits, in order of appearance.
fn digit_runs(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current = String::new();
    for c in text.chars() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// True when the same digit characters 0-9 occur on both sides.
fn same_digit_sets(source: &str, target: &str) -> bool {
    ('0'..='9').all(|d| source.contains(d) == target.contains(d))
}

impl Filter for NumberFilter {
    fn evaluate(&mut self, pair: &SentencePair) -> Result<Option<Verdict>, Error> {
        Ok(Some(if self.check(pair) {
            Verdict::Pass
        } else {
            Verdict::Fail(SIGN)
        }))
    }
}
