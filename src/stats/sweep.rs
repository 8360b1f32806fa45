//! Threshold sweep for score-based filters.
//!
//! Input is one `score \t annotation` line per pair, sorted by score. Walking
//! the lines in order simulates setting the filter threshold just above each
//! score; the output row gives the cumulative precision and recall (in
//! percent) that threshold would achieve, plus the score itself.
use std::io::{BufRead, Write};

use crate::error::Error;
use crate::record::GoldAnnotation;

struct ScoredLine {
    score: f64,
    bad: bool,
}

pub fn sweep<R: BufRead, W: Write>(input: R, out: &mut W) -> Result<(), Error> {
    let mut data = Vec::new();
    let mut total_bad = 0u32;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let (score, annotation) = line.split_once('\t').ok_or_else(|| {
            Error::Format(format!(
                "line {}: expected score \\t annotation, got {:?}",
                lineno, line
            ))
        })?;
        let score: f64 = score.parse().map_err(|_| {
            Error::Format(format!("line {}: score {:?} is not a number", lineno, score))
        })?;
        let annotation: GoldAnnotation = annotation.parse().map_err(|_| Error::Annotation {
            line: lineno,
            value: annotation.to_string(),
        })?;
        let bad = annotation == GoldAnnotation::Bad;
        if bad {
            total_bad += 1;
        }
        data.push(ScoredLine { score, bad });
    }

    let mut tp = 0.0;
    let mut fp = 0.0;
    for line in &data {
        if line.bad {
            tp += 1.0;
        } else {
            fp += 1.0;
        }
        writeln!(
            out,
            "{}\t{}\t{}",
            tp / (tp + fp) * 100.0,
            tp / f64::from(total_bad) * 100.0,
            line.score
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn parse_row(line: &str) -> (f64, f64, f64) {
        let mut fields = line.split('\t').map(|f| f.parse().unwrap());
        (
            fields.next().unwrap(),
            fields.next().unwrap(),
            fields.next().unwrap(),
        )
    }

    #[test]
    fn cumulative_precision_and_recall() {
        let input = "-20\tx\n-15\tx\n-12\tok\n-9\tx\n";
        let mut out = Vec::new();
        sweep(Cursor::new(input), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let rows: Vec<(f64, f64, f64)> = output.lines().map(parse_row).collect();

        let expected = [
            (100.0, 100.0 / 3.0, -20.0),
            (100.0, 200.0 / 3.0, -15.0),
            (200.0 / 3.0, 200.0 / 3.0, -12.0),
            (75.0, 100.0, -9.0),
        ];
        assert_eq!(rows.len(), expected.len());
        for ((p, r, s), (ep, er, es)) in rows.into_iter().zip(expected) {
            assert!((p - ep).abs() < 1e-9);
            assert!((r - er).abs() < 1e-9);
            assert_eq!(s, es);
        }
    }

    #[test]
    fn bad_annotation_is_fatal() {
        let mut out = Vec::new();
        let err = sweep(Cursor::new("-1\tmaybe\n"), &mut out).unwrap_err();
        assert!(matches!(err, Error::Annotation { line: 1, .. }));
    }
}
