/*! Filter evaluation against gold annotation.

Consumes a combined, human-annotated stream and counts, per filter, how
often its sign landed on a gold-bad (`x`) segment (true positive) versus a
gold-good (`ok`) one (false positive). A synthetic `combined` filter counts
every line with at least one sign exactly once, regardless of how many
filters fired on it.

Precision of a filter that never fired is undefined and stays undefined
(`None`), it is not coerced to zero. Recall is set once, after the whole
stream is consumed, against the total number of gold-bad segments.
!*/
mod sweep;

use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::Error;
use crate::record::{AnnotatedRecord, GoldAnnotation};

pub use sweep::sweep;

/// Name of the synthetic union-of-all-filters entry.
pub const COMBINED: &str = "combined";

/// Counters for one filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterStats {
    name: String,
    true_positives: u32,
    false_positives: u32,
    recall: Option<f64>,
}

impl FilterStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            true_positives: 0,
            false_positives: 0,
            recall: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn true_positives(&self) -> u32 {
        self.true_positives
    }

    pub fn false_positives(&self) -> u32 {
        self.false_positives
    }

    pub fn times_fired(&self) -> u32 {
        self.true_positives + self.false_positives
    }

    /// `None` when the filter never fired: undefined, not zero.
    pub fn precision(&self) -> Option<f64> {
        match self.times_fired() {
            0 => None,
            fired => Some(f64::from(self.true_positives) / f64::from(fired)),
        }
    }

    pub fn recall(&self) -> Option<f64> {
        self.recall
    }

    fn set_recall(&mut self, total_bad: u32) {
        self.recall = match total_bad {
            0 => None,
            total => Some(f64::from(self.true_positives) / f64::from(total)),
        };
    }
}

/// Per-filter statistics, plus the synthetic [COMBINED] entry.
#[derive(Debug)]
pub struct Statistics {
    filters: HashMap<String, FilterStats>,
}

impl Default for Statistics {
    fn default() -> Self {
        let mut filters = HashMap::new();
        filters.insert(COMBINED.to_string(), FilterStats::new(COMBINED));
        Self { filters }
    }
}

impl Statistics {
    fn entry(&mut self, name: &str) -> &mut FilterStats {
        self.filters
            .entry(name.to_string())
            .or_insert_with(|| FilterStats::new(name))
    }

    /// Counts a gold-bad line: one true positive per contributing filter,
    /// and one for `combined` if anything fired at all.
    pub fn true_positives(&mut self, errors: &[String]) {
        for error in errors {
            self.entry(error).true_positives += 1;
        }
        if !errors.is_empty() {
            self.entry(COMBINED).true_positives += 1;
        }
    }

    /// Counts a gold-good line, symmetrically to [Statistics::true_positives].
    pub fn false_positives(&mut self, errors: &[String]) {
        for error in errors {
            self.entry(error).false_positives += 1;
        }
        if !errors.is_empty() {
            self.entry(COMBINED).false_positives += 1;
        }
    }

    pub fn set_recalls(&mut self, total_bad: u32) {
        for stats in self.filters.values_mut() {
            stats.set_recall(total_bad);
        }
    }

    /// Rows sorted by filter name, for deterministic reports.
    pub fn into_rows(self) -> Vec<FilterStats> {
        let mut rows: Vec<_> = self.filters.into_values().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }
}

/// Computes per-filter and combined statistics from an annotated, combined
/// stream. Pure function of the input: re-running it yields identical rows.
pub fn evaluate<R: BufRead>(input: R) -> Result<Vec<FilterStats>, Error> {
    let mut stats = Statistics::default();
    let mut total_bad = 0u32;

    for (idx, line) in input.lines().enumerate() {
        let record = AnnotatedRecord::from_line(&line?, idx + 1)?;
        match record.annotation {
            GoldAnnotation::Bad => {
                total_bad += 1;
                stats.true_positives(&record.record.errors);
            }
            GoldAnnotation::Good => stats.false_positives(&record.record.errors),
        }
    }

    stats.set_recalls(total_bad);
    Ok(stats.into_rows())
}

/// Writes the report: one row per filter with name, times fired, precision
/// and recall. Undefined statistics print as `undef`.
pub fn print_report<W: Write>(rows: &[FilterStats], out: &mut W) -> Result<(), Error> {
    writeln!(out, "Filter name\tTimes fired\tPrecision\tRecall")?;
    for row in rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            row.name(),
            row.times_fired(),
            format_ratio(row.precision()),
            format_ratio(row.recall()),
        )?;
    }
    Ok(())
}

fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "undef".to_string(),
    }
}
