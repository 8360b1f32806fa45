/*! Parsers for external scorer output.

Two statistical collaborators hand us per-sentence scores as fixed positional
text blocks: the SRILM n-gram scorer (4-line blocks) and GIZA++ alignment
output (3-line blocks, one stream per translation direction). Indexed field
access on those formats lives here and nowhere else; consumers get named
records.
!*/
use std::io::BufRead;

use crate::error::Error;

/// 0-based field of the SRILM block's second line holding the char count.
const SRILM_CHARS_FIELD: usize = 2;
/// 0-based field of the SRILM block's third line holding the log-probability.
const SRILM_LOGPROB_FIELD: usize = 3;
/// An SRILM marker line starting with this literal ends the scoring stream.
const SRILM_SENTINEL: &str = "file";

/// 0-based field of a GIZA++ header line holding the alignment probability.
const GIZA_PROB_FIELD: usize = 13;
/// 0-based field of a GIZA++ header line holding the segment length.
const GIZA_LENGTH_FIELD: usize = 9;

fn parse_field(line: &str, index: usize, what: &str, lineno: usize) -> Result<f64, Error> {
    let field = line.split(' ').nth(index).ok_or_else(|| {
        Error::Format(format!(
            "line {}: no {} in field {} of {:?}",
            lineno, what, index, line
        ))
    })?;
    field.parse().map_err(|_| {
        Error::Format(format!(
            "line {}: {} field {:?} is not a number",
            lineno, what, field
        ))
    })
}

/// One SRILM per-sentence score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SrilmRecord {
    pub chars: f64,
    pub log_probability: f64,
}

impl SrilmRecord {
    /// Length-normalized sentence likelihood.
    pub fn score(&self) -> f64 {
        self.log_probability / self.chars
    }
}

/// Iterates over SRILM output, one 4-line block at a time.
///
/// A marker line beginning with `file` is SRILM's trailing summary; it ends
/// the stream normally (see [SrilmBlocks::finished_normally]).
pub struct SrilmBlocks<R: BufRead> {
    lines: std::io::Lines<R>,
    lineno: usize,
    finished: bool,
}

impl<R: BufRead> SrilmBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            lineno: 0,
            finished: false,
        }
    }

    /// True once the summary sentinel was seen, as opposed to a bare EOF.
    pub fn finished_normally(&self) -> bool {
        self.finished
    }

    fn next_line(&mut self, what: &str) -> Result<String, Error> {
        self.lineno += 1;
        match self.lines.next() {
            Some(line) => Ok(line?),
            None => Err(Error::Format(format!(
                "line {}: truncated SRILM block, missing {}",
                self.lineno, what
            ))),
        }
    }
}

impl<R: BufRead> Iterator for SrilmBlocks<R> {
    type Item = Result<SrilmRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let marker = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.lineno += 1;
        if marker.starts_with(SRILM_SENTINEL) {
            self.finished = true;
            return None;
        }

        let block = (|| {
            let stats = self.next_line("sentence statistics")?;
            let chars = parse_field(&stats, SRILM_CHARS_FIELD, "char count", self.lineno)?;
            let probs = self.next_line("probability line")?;
            let log_probability =
                parse_field(&probs, SRILM_LOGPROB_FIELD, "log-probability", self.lineno)?;
            self.next_line("trailer")?;
            Ok(SrilmRecord {
                chars,
                log_probability,
            })
        })();
        Some(block)
    }
}

/// One GIZA++ per-sentence alignment score, for a single direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizaRecord {
    pub probability: f64,
    pub length: f64,
}

impl GizaRecord {
    /// Length-normalized log alignment probability.
    pub fn score(&self) -> f64 {
        self.probability.ln() / self.length
    }
}

/// Iterates over a GIZA++ `A3.final` file, one 3-line block at a time.
pub struct GizaBlocks<R: BufRead> {
    lines: std::io::Lines<R>,
    lineno: usize,
}

impl<R: BufRead> GizaBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            lineno: 0,
        }
    }

    fn skip_line(&mut self, what: &str) -> Result<(), Error> {
        self.lineno += 1;
        match self.lines.next() {
            Some(line) => {
                line?;
                Ok(())
            }
            None => Err(Error::Format(format!(
                "line {}: truncated GIZA++ block, missing {}",
                self.lineno, what
            ))),
        }
    }
}

impl<R: BufRead> Iterator for GizaBlocks<R> {
    type Item = Result<GizaRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.lineno += 1;

        let block = (|| {
            let probability = parse_field(&header, GIZA_PROB_FIELD, "probability", self.lineno)?;
            let length = parse_field(&header, GIZA_LENGTH_FIELD, "length", self.lineno)?;
            self.skip_line("source line")?;
            self.skip_line("alignment line")?;
            Ok(GizaRecord {
                probability,
                length,
            })
        })();
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    const SRILM: &str = "reading sentence 1\n\
        1 sentences, 40 words, 0 OOVs\n\
        0 zeroprobs, logprob= -60 ppl= 10 ppl1= 12\n\
        \n\
        file corpus.txt: 1 sentences, 40 words, 0 OOVs\n";

    #[test]
    fn srilm_block_fields() {
        let mut blocks = SrilmBlocks::new(Cursor::new(SRILM));
        let record = blocks.next().unwrap().unwrap();
        assert_eq!(record.chars, 40.0);
        assert_eq!(record.log_probability, -60.0);
        assert_eq!(record.score(), -1.5);
    }

    #[test]
    fn srilm_sentinel_ends_stream_normally() {
        let mut blocks = SrilmBlocks::new(Cursor::new(SRILM));
        blocks.next();
        assert!(blocks.next().is_none());
        assert!(blocks.finished_normally());
    }

    #[test]
    fn srilm_bare_eof_is_not_normal() {
        let truncated = "reading sentence 1\n1 sentences, 40 words, 0 OOVs\n0 zeroprobs, logprob= -60 ppl= 10 ppl1= 12\n\n";
        let mut blocks = SrilmBlocks::new(Cursor::new(truncated));
        assert!(blocks.next().unwrap().is_ok());
        assert!(blocks.next().is_none());
        assert!(!blocks.finished_normally());
    }

    #[test]
    fn srilm_truncated_block_is_a_format_error() {
        let mut blocks = SrilmBlocks::new(Cursor::new("reading sentence 1\n"));
        assert!(matches!(blocks.next(), Some(Err(Error::Format(_)))));
    }

    #[test]
    fn srilm_non_numeric_field_is_a_format_error() {
        let bad = "reading sentence 1\n1 sentences, many words, 0 OOVs\nx x x -60\n\n";
        let mut blocks = SrilmBlocks::new(Cursor::new(bad));
        assert!(matches!(blocks.next(), Some(Err(Error::Format(_)))));
    }

    fn giza_header(prob: f64, length: f64) -> String {
        format!(
            "# Sentence pair (1) source length 3 target length {} alignment score : {}\n\
             the cat sat\n\
             NULL ({{ }}) kocka ({{ 1 2 }})\n",
            length, prob
        )
    }

    #[test]
    fn giza_block_fields() {
        // field 10 (1-based) is the length, field 14 the probability
        let mut blocks = GizaBlocks::new(Cursor::new(giza_header(0.5, 8.0)));
        let record = blocks.next().unwrap().unwrap();
        assert_eq!(record.probability, 0.5);
        assert_eq!(record.length, 8.0);
        assert!((record.score() - 0.5_f64.ln() / 8.0).abs() < 1e-12);
    }

    #[test]
    fn giza_truncated_block_is_a_format_error() {
        let header = giza_header(0.5, 8.0);
        let only_header = header.lines().next().unwrap();
        let mut blocks = GizaBlocks::new(Cursor::new(only_header.to_string() + "\n"));
        assert!(matches!(blocks.next(), Some(Err(Error::Format(_)))));
    }
}
