/*! Sampler for manual review.

Draws a bounded, error-balanced subset of combined lines: the first
`first_limit` lines go out unconditionally as an unbiased baseline, and any
later line carrying a requested error sign is emitted until that sign's
quota is used up. The pass stops as soon as every quota is filled (and the
baseline is complete); if the input runs dry first, the unmet quotas are
reported back to the caller.
!*/
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::error::Error;

/// Error names whose quota the input could not satisfy, with the number of
/// draws still missing. Sorted by name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SelectionReport {
    pub unsatisfied: Vec<(String, u32)>,
}

pub fn select<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    first_limit: usize,
    quotas: HashMap<String, u32>,
) -> Result<SelectionReport, Error> {
    let mut remaining = quotas;
    remaining.retain(|_, count| *count > 0);

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let mut emit = lineno <= first_limit;

        // 4th field of the combined format, if any
        if let Some(errors) = line.split('\t').nth(3) {
            for error in errors.split('|') {
                if let Entry::Occupied(mut quota) = remaining.entry(error.to_string()) {
                    emit = true;
                    *quota.get_mut() -= 1;
                    if *quota.get() == 0 {
                        quota.remove();
                    }
                }
            }
        }

        if emit {
            writeln!(out, "{}", line)?;
        }
        if remaining.is_empty() && lineno >= first_limit {
            break;
        }
    }

    let mut unsatisfied: Vec<_> = remaining.into_iter().collect();
    unsatisfied.sort();
    Ok(SelectionReport { unsatisfied })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn quotas(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(name, count)| (name.to_string(), *count))
            .collect()
    }

    fn run(
        input: &str,
        first_limit: usize,
        quotas: HashMap<String, u32>,
    ) -> (String, SelectionReport) {
        let mut out = Vec::new();
        let report = select(Cursor::new(input), &mut out, first_limit, quotas).unwrap();
        (String::from_utf8(out).unwrap(), report)
    }

    const INPUT: &str = "\
ok\ta\tb
ok\tc\td
ok\te\tf\tErRoR_asciiFilter
ok\tg\th
ok\ti\tj\tErRoR_asciiFilter
ok\tk\tl\tErRoR_asciiFilter
";

    #[test]
    fn baseline_lines_are_unconditional() {
        let (out, report) = run(INPUT, 2, quotas(&[]));
        assert_eq!(out, "ok\ta\tb\nok\tc\td\n");
        assert!(report.unsatisfied.is_empty());
    }

    #[test]
    fn quota_lines_are_drawn_and_capped() {
        let (out, _) = run(INPUT, 1, quotas(&[("ErRoR_asciiFilter", 2)]));
        // baseline line 1, then the first two flagged lines; the third
        // flagged line is past the quota
        assert_eq!(out, "ok\ta\tb\nok\te\tf\tErRoR_asciiFilter\nok\ti\tj\tErRoR_asciiFilter\n");
    }

    #[test]
    fn stops_once_quotas_and_baseline_are_done() {
        let (out, report) = run(INPUT, 0, quotas(&[("ErRoR_asciiFilter", 1)]));
        assert_eq!(out, "ok\te\tf\tErRoR_asciiFilter\n");
        assert!(report.unsatisfied.is_empty());
    }

    #[test]
    fn unmet_quotas_are_reported() {
        let (out, report) = run(
            INPUT,
            0,
            quotas(&[("ErRoR_asciiFilter", 5), ("ErRoR_gizaFilter", 2)]),
        );
        assert_eq!(out.lines().count(), 3);
        assert_eq!(
            report.unsatisfied,
            vec![
                ("ErRoR_asciiFilter".to_string(), 2),
                ("ErRoR_gizaFilter".to_string(), 2),
            ]
        );
    }

    #[test]
    fn one_line_can_satisfy_several_names() {
        let input = "ok\ta\tb\tErRoR_asciiFilter|ErRoR_numberFilter\n";
        let (out, report) = run(
            input,
            0,
            quotas(&[("ErRoR_asciiFilter", 1), ("ErRoR_numberFilter", 1)]),
        );
        assert_eq!(out, input);
        assert!(report.unsatisfied.is_empty());
    }
}
