/*! Lock-step merge of several filter outputs.

Filters run independently over the same corpus, so line *k* of every output
refers to the same pair. [combine] reads all streams one line at a time,
collects each stream's error sign (when present and plausible) in stream
order, and writes one merged record per line. A stream ending before the
first one is fatal: silent misalignment would corrupt every tag downstream.
!*/
use std::io::{BufRead, Write};

use crate::error::Error;
use crate::record::Record;

/// Real error signs are long (`ErRoR_asciiFilter` is 17 chars); anything at
/// or under this length is a stray token, not a sign, and is dropped.
pub const MIN_SIGN_CHARS: usize = 5;

/// The plausibility test applied to every third field before it is merged.
pub fn is_plausible_sign(tag: &str) -> bool {
    tag.chars().count() > MIN_SIGN_CHARS
}

pub fn combine<R: BufRead, W: Write>(streams: Vec<R>, out: &mut W) -> Result<(), Error> {
    if streams.is_empty() {
        return Err(Error::Custom("no filter outputs to combine".to_string()));
    }
    let mut streams: Vec<_> = streams.into_iter().map(BufRead::lines).collect();
    let mut lineno = 0;

    loop {
        lineno += 1;
        let lead = match streams[0].next() {
            None => return Ok(()),
            Some(line) => Record::from_filter_line(&line?, lineno)?,
        };

        let mut errors: Vec<String> = Vec::new();
        errors.extend(lead.errors.into_iter().filter(|e| is_plausible_sign(e)));

        for (idx, stream) in streams.iter_mut().enumerate().skip(1) {
            let line = stream.next().ok_or_else(|| {
                Error::Alignment(format!(
                    "stream {} ended at line {} before the first stream",
                    idx, lineno
                ))
            })??;
            let record = Record::from_filter_line(&line, lineno)?;
            errors.extend(record.errors.into_iter().filter(|e| is_plausible_sign(e)));
        }

        writeln!(out, "{}", Record::new(lead.pair, errors))?;
    }
}
