//! Translation-probability filter.
//!
//! Consumes two GIZA++ alignment-score streams, one per translation
//! direction, in lock-step with the corpus. The symmetric score is the sum
//! of the two length-normalized log alignment probabilities; pairs under the
//! threshold are flagged.
use std::io::BufRead;

use super::{Filter, Verdict};
use crate::error::Error;
use crate::record::SentencePair;
use crate::scores::GizaBlocks;

pub const SIGN: &str = "ErRoR_gizaFilter";

pub struct GizaFilter<R1: BufRead, R2: BufRead> {
    forward: GizaBlocks<R1>,
    backward: GizaBlocks<R2>,
    threshold: f64,
}

impl<R1: BufRead, R2: BufRead> GizaFilter<R1, R2> {
    /// Default threshold of -10 on the symmetric score.
    pub fn new(forward: R1, backward: R2) -> Self {
        Self::with_threshold(forward, backward, -10.0)
    }

    pub fn with_threshold(forward: R1, backward: R2, threshold: f64) -> Self {
        Self {
            forward: GizaBlocks::new(forward),
            backward: GizaBlocks::new(backward),
            threshold,
        }
    }
}

impl<R1: BufRead, R2: BufRead> Filter for GizaFilter<R1, R2> {
    fn evaluate(&mut self, _pair: &SentencePair) -> Result<Option<Verdict>, Error> {
        let (forward, backward) = match (self.forward.next(), self.backward.next()) {
            (Some(f), Some(b)) => (f?, b?),
            _ => {
                return Err(Error::Alignment(
                    "GIZA++ stream ended before the corpus".to_string(),
                ))
            }
        };
        let score = forward.score() + backward.score();
        Ok(Some(if score < self.threshold {
            Verdict::Fail(SIGN)
        } else {
            Verdict::Pass
        }))
    }

    fn finish(&mut self) -> Result<(), Error> {
        match (self.forward.next(), self.backward.next()) {
            (None, None) => Ok(()),
            (Some(Err(e)), _) | (_, Some(Err(e))) => Err(e),
            _ => Err(Error::Alignment(
                "corpus ended before the GIZA++ streams".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::filtering::run_filter;
    use crate::record::PairReader;

    fn block(prob: f64, length: f64) -> String {
        format!(
            "# Sentence pair (1) source length 3 target length {} alignment score : {}\n\
             words go here\n\
             NULL ({{ }}) slova ({{ 1 }})\n",
            length, prob
        )
    }

    #[test]
    fn low_symmetric_score_is_flagged() {
        // ln(1e-30)/5 twice ~ -27.6, far under -10
        let fwd = block(1e-30, 5.0) + &block(0.9, 5.0);
        let bwd = block(1e-30, 5.0) + &block(0.9, 5.0);
        let mut filter = GizaFilter::new(Cursor::new(fwd), Cursor::new(bwd));
        let mut out = Vec::new();
        run_filter(
            PairReader::new(Cursor::new("bad\tpair\ngood\tpair\n")),
            &mut filter,
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("bad\tpair\t{}\ngood\tpair\n", SIGN)
        );
    }

    #[test]
    fn uneven_streams_are_fatal() {
        let fwd = block(0.9, 5.0);
        let bwd = String::new();
        let mut filter = GizaFilter::new(Cursor::new(fwd), Cursor::new(bwd));
        let mut out = Vec::new();
        let err = run_filter(
            PairReader::new(Cursor::new("a\tb\n")),
            &mut filter,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Alignment(_)));
    }

    #[test]
    fn leftover_scores_are_fatal() {
        let fwd = block(0.9, 5.0) + &block(0.9, 5.0);
        let bwd = block(0.9, 5.0) + &block(0.9, 5.0);
        let mut filter = GizaFilter::new(Cursor::new(fwd), Cursor::new(bwd));
        let mut out = Vec::new();
        let err = run_filter(
            PairReader::new(Cursor::new("a\tb\n")),
            &mut filter,
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Alignment(_)));
    }
}
