/*! Misalignment filters.

Every filter inspects one [SentencePair](crate::record::SentencePair) and
returns a [Verdict]: pass the pair through unchanged, or fail it with the
filter's error sign. Filters implement [Filter] so the driver and tests can
treat them uniformly; stream-backed filters (ngram, giza) additionally pull
one score record per pair from external scorer output.
!*/
mod ascii;
mod dictionary;
mod giza;
mod ngram;
mod number;

use std::io::Write;

pub use ascii::AsciiFilter;
pub use dictionary::DictionaryFilter;
pub use giza::GizaFilter;
pub use ngram::NgramFilter;
pub use number::NumberFilter;

use crate::error::Error;
use crate::record::SentencePair;

/// A filter's judgement of one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Likely misalignment, tagged with the filter's error sign.
    Fail(&'static str),
}

/// One misalignment heuristic.
///
/// `evaluate` takes `&mut self` because stream-backed filters consume their
/// companion score stream as they go. `Ok(None)` means that stream finished
/// normally and no further pairs will be judged.
pub trait Filter {
    fn evaluate(&mut self, pair: &SentencePair) -> Result<Option<Verdict>, Error>;

    /// Called once the pair stream is exhausted, so filters can check that
    /// their companion streams are too.
    fn finish(&mut self) -> Result<(), Error> {
        Ok(())
    }
}

/// Drives a filter over a pair stream, writing one record per pair:
/// the pair unchanged on [Verdict::Pass], with the error sign appended on
/// [Verdict::Fail].
pub fn run_filter<I, F, W>(pairs: I, filter: &mut F, out: &mut W) -> Result<(), Error>
where
    I: Iterator<Item = Result<SentencePair, Error>>,
    F: Filter,
    W: Write,
{
    for pair in pairs {
        let pair = pair?;
        match filter.evaluate(&pair)? {
            Some(Verdict::Pass) => writeln!(out, "{}", pair)?,
            Some(Verdict::Fail(sign)) => writeln!(out, "{}\t{}", pair, sign)?,
            None => return Ok(()),
        }
    }
    filter.finish()
}
