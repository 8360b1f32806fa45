//! N-gram likelihood filter.
//!
//! Consumes SRILM per-sentence statistics synchronized line-for-line with
//! the corpus. A pair is flagged when its length-normalized log-probability
//! falls below the limit, but only for segments longer than
//! [`CHAR_EXEMPTION`] chars: likelihood estimates on short segments are too
//! noisy to act on.
use std::io::BufRead;

use super::{Filter, Verdict};
use crate::error::Error;
use crate::record::SentencePair;
use crate::scores::SrilmBlocks;

pub const SIGN: &str = "ErRoR_ngramFilter";

/// Segments at or below this many chars are never flagged.
const CHAR_EXEMPTION: f64 = 35.0;

pub struct NgramFilter<R: BufRead> {
    scores: SrilmBlocks<R>,
    limit: f64,
}

impl<R: BufRead> NgramFilter<R> {
    /// Default limit of -1.5 on the per-char log-probability.
    pub fn new(scores: R) -> Self {
        Self::with_limit(scores, -1.5)
    }

    pub fn with_limit(scores: R, limit: f64) -> Self {
        Self {
            scores: SrilmBlocks::new(scores),
            limit,
        }
    }
}

impl<R: BufRead> Filter for NgramFilter<R> {
    fn evaluate(&mut self, _pair: &SentencePair) -> Result<Option<Verdict>, Error> {
        match self.scores.next() {
            Some(record) => {
                let record = record?;
                let verdict = if record.score() < self.limit && record.chars > CHAR_EXEMPTION {
                    Verdict::Fail(SIGN)
                } else {
                    Verdict::Pass
                };
                Ok(Some(verdict))
            }
            None if self.scores.finished_normally() => Ok(None),
            None => Err(Error::Alignment(
                "SRILM stream ended before the corpus".to_string(),
            )),
        }
    }

    fn finish(&mut self) -> Result<(), Error> {
        match self.scores.next() {
            None => Ok(()),
            Some(Err(e)) => Err(e),
            Some(Ok(_)) => Err(Error::Alignment(
                "corpus ended before the SRILM stream".to_string(),
            )),
        }
    }
}
