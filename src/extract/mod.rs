/*! Export Format reading facilities.

Export Format carries one aligned pair per line in at least 6 tab-separated
cells; cells 1 and 5 hold the source and target sentences as space-separated
tokens of the form `surface|lemma|tag`. [ExportReader] projects one layer per
token (selected by [ExtractionMode]) and yields plain [SentencePair]s.
!*/
use std::io::BufRead;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::Error;
use crate::record::SentencePair;

const SOURCE_CELL: usize = 1;
const TARGET_CELL: usize = 5;
const MIN_CELLS: usize = 6;
const LAYERS: usize = 3;
/// Pseudo-lemmas are lowercased surface forms cut to this many chars.
const PSEUDOLEMMA_LEN: usize = 5;

/// Which annotation layer to project from each token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Surface form.
    Plain,
    Lemma,
    Tag,
    /// Lowercased surface form truncated to 5 chars, a cheap lemma stand-in.
    PseudoLemma,
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "lemma" => Ok(Self::Lemma),
            "tag" => Ok(Self::Tag),
            "pseudolemma" => Ok(Self::PseudoLemma),
            other => Err(format!(
                "unknown mode {:?} (expected plain, lemma, tag or pseudolemma)",
                other
            )),
        }
    }
}

impl ExtractionMode {
    /// Projects the selected layer of a single `surface|lemma|tag` token.
    fn project(&self, token: &str, lineno: usize) -> Result<String, Error> {
        let layers: Vec<&str> = token.split('|').collect();
        if layers.len() != LAYERS {
            return Err(Error::Format(format!(
                "line {}: token {:?} has {} layers, expected {}",
                lineno,
                token,
                layers.len(),
                LAYERS
            )));
        }
        Ok(match self {
            Self::Plain => layers[0].to_string(),
            Self::Lemma => layers[1].to_string(),
            Self::Tag => layers[2].to_string(),
            Self::PseudoLemma => layers[0].to_lowercase().chars().take(PSEUDOLEMMA_LEN).collect(),
        })
    }
}

/// Iterates over Export Format lines, yielding one extracted [SentencePair] each.
pub struct ExportReader<R: BufRead> {
    lines: std::io::Lines<R>,
    mode: ExtractionMode,
    lineno: usize,
}

impl<R: BufRead> ExportReader<R> {
    pub fn new(reader: R, mode: ExtractionMode) -> Self {
        Self {
            lines: reader.lines(),
            mode,
            lineno: 0,
        }
    }

    fn extract_cell(&self, cell: &str) -> Result<String, Error> {
        cell.split(' ')
            .map(|token| self.mode.project(token, self.lineno))
            .process_results(|mut layers| layers.join(" "))
    }

    fn extract_line(&self, line: &str) -> Result<SentencePair, Error> {
        let cells: Vec<&str> = line.split('\t').collect();
        if cells.len() < MIN_CELLS {
            return Err(Error::Format(format!(
                "line {}: expected at least {} cells, got {}",
                self.lineno,
                MIN_CELLS,
                cells.len()
            )));
        }
        Ok(SentencePair::new(
            self.extract_cell(cells[SOURCE_CELL])?,
            self.extract_cell(cells[TARGET_CELL])?,
        ))
    }
}

impl<R: BufRead> Iterator for ExportReader<R> {
    type Item = Result<SentencePair, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };
        self.lineno += 1;
        Some(self.extract_line(&line))
    }
}
