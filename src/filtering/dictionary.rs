//! Dictionary-coverage filter.
//!
//! For each source word outside a small stop list, look up its translation
//! candidates and test whether any appears in the target; the covered-word
//! count over the target length gives a coverage ratio, and pairs below the
//! limit are flagged. Short segments are exempt, coverage is too unreliable
//! there.
//!
//! Candidate matching is deliberately crude: strip a trailing reflexive
//! particle (" si"/" se"), cut to 4 chars, substring test. The published
//! precision/recall figures were measured with exactly these rules, so no
//! real stemmer is substituted.
use super::{Filter, Verdict};
use crate::error::Error;
use crate::record::SentencePair;
use crate::resources::Dictionary;

pub const SIGN: &str = "ErRoR_dictionaryFilter";

/// Source words never looked up.
const STOP_LIST: [&str; 4] = ["in", "at", "by", "to"];
/// Candidates are truncated to this many chars before the substring test.
const STEM_LEN: usize = 4;

pub struct DictionaryFilter {
    dictionary: Dictionary,
    limit: f64,
}

impl DictionaryFilter {
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_limit(dictionary, 0.25)
    }

    pub fn with_limit(dictionary: Dictionary, limit: f64) -> Self {
        Self { dictionary, limit }
    }

    /// True when the pair is exempt or its coverage reaches the limit.
    pub fn check(&self, pair: &SentencePair) -> bool {
        let source = normalize(&pair.source);
        let target = normalize(&pair.target);

        let source_words: Vec<&str> = source.split(' ').collect();
        let target_len = target.split(' ').count();

        // short segments are exempt
        if source_words.len() < 2 || target_len <= 2 {
            return true;
        }

        self.coverage(&source_words, &target, target_len) >= self.limit
    }

    /// Fraction of the target length accounted for by covered source words.
    pub fn coverage(&self, source_words: &[&str], target: &str, target_len: usize) -> f64 {
        let covered = source_words
            .iter()
            .filter(|word| !STOP_LIST.contains(word))
            .filter(|word| self.is_covered(target, word))
            .count();
        covered as f64 / target_len as f64
    }

    fn is_covered(&self, target: &str, word: &str) -> bool {
        match self.dictionary.translations(word) {
            Some(candidates) => candidates
                .iter()
                .any(|candidate| candidate_matches(target, candidate)),
            // absent from the dictionary: the word may be a name or a loan,
            // try it as its own translation
            None => candidate_matches(target, word),
        }
    }
}

fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    match lowered.strip_suffix(" .") {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

fn candidate_matches(target: &str, candidate: &str) -> bool {
    let stem = candidate
        .strip_suffix(" si")
        .or_else(|| candidate.strip_suffix(" se"))
        .unwrap_or(candidate);
    let prefix: String = stem.chars().take(STEM_LEN).collect();
    target.contains(&prefix)
}

impl Filter for DictionaryFilter {
    fn evaluate(&mut self, pair: &SentencePair) -> Result<Option<Verdict>, Error> {
        Ok(Some(if self.check(pair) {
            Verdict::Pass
        } else {
            Verdict::Fail(SIGN)
        }))
    }
}
