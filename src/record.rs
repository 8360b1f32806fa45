/*! Sentence pair records and the tab-separated line formats they travel in.

Three formats share the same leading cells:

- pair: `source \t target`
- filter output: `source \t target [\t errorSign]`
- combined/annotated: `annotation \t source \t target [\t error1|error2|...]`

Parsing happens here and nowhere else, so that positional field access on
these formats stays in one place.

A record that carries no errors serializes *without* the trailing field:
absence distinguishes "judged clean" from an empty list downstream.
!*/
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::Error;

/// An aligned source/target sentence pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    pub source: String,
    pub target: String,
}

impl SentencePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Parses a `source \t target` line. Fields past the second are ignored.
    pub fn from_line(line: &str, lineno: usize) -> Result<Self, Error> {
        let mut fields = line.split('\t');
        match (fields.next(), fields.next()) {
            (Some(source), Some(target)) => Ok(Self::new(source, target)),
            _ => Err(Error::Format(format!(
                "line {}: expected source \\t target, got {:?}",
                lineno, line
            ))),
        }
    }
}

impl fmt::Display for SentencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.source, self.target)
    }
}

/// Human-assigned ground truth for a pair, used only for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoldAnnotation {
    /// `ok` on the wire: the pair is correctly aligned.
    Good,
    /// `x` on the wire: the pair is misaligned.
    Bad,
}

impl GoldAnnotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "ok",
            Self::Bad => "x",
        }
    }
}

impl FromStr for GoldAnnotation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Good),
            "x" => Ok(Self::Bad),
            _ => Err(()),
        }
    }
}

impl fmt::Display for GoldAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair plus the error signs filters attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub pair: SentencePair,
    pub errors: Vec<String>,
}

impl Record {
    pub fn new(pair: SentencePair, errors: Vec<String>) -> Self {
        Self { pair, errors }
    }

    /// Parses one filter output line: `source \t target [\t errorSign]`.
    pub fn from_filter_line(line: &str, lineno: usize) -> Result<Self, Error> {
        let pair = SentencePair::from_line(line, lineno)?;
        let errors = match line.split('\t').nth(2) {
            Some(sign) => vec![sign.to_string()],
            None => Vec::new(),
        };
        Ok(Self { pair, errors })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pair)?;
        if !self.errors.is_empty() {
            write!(f, "\t{}", self.errors.iter().join("|"))?;
        }
        Ok(())
    }
}

/// A combined record with its gold annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedRecord {
    pub annotation: GoldAnnotation,
    pub record: Record,
}

impl AnnotatedRecord {
    /// Parses one combined/annotated line:
    /// `annotation \t source \t target [\t error1|error2|...]`.
    ///
    /// The annotation is mandatory and closed-set; anything else is fatal.
    pub fn from_line(line: &str, lineno: usize) -> Result<Self, Error> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            return Err(Error::Format(format!(
                "line {}: expected annotation \\t source \\t target, got {:?}",
                lineno, line
            )));
        }
        let annotation = fields[0].parse().map_err(|_| Error::Annotation {
            line: lineno,
            value: fields[0].to_string(),
        })?;
        let pair = SentencePair::new(fields[1], fields[2]);
        let errors = match fields.get(3) {
            Some(list) => list.split('|').map(str::to_string).collect(),
            None => Vec::new(),
        };
        Ok(Self {
            annotation,
            record: Record { pair, errors },
        })
    }
}

impl fmt::Display for AnnotatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.annotation, self.record)
    }
}

/// Reads already-extracted pair-per-line corpora (the ngram/giza filter input).
pub struct PairReader<R: BufRead> {
    lines: std::io::Lines<R>,
    lineno: usize,
}

impl<R: BufRead> PairReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            lineno: 0,
        }
    }
}

impl<R: BufRead> Iterator for PairReader<R> {
    type Item = Result<SentencePair, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.lineno += 1;
        Some(SentencePair::from_line(&line, self.lineno))
    }
}
