//! # paraclean
//!
//! Misalignment filtering pipeline for bilingual sentence-aligned corpora.
//!
//! ```sh
//! paraclean 0.2.0
//! parallel corpus cleaning tool.
//!
//! USAGE:
//!     paraclean <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     ascii      Flag pairs whose non-ASCII source chars are missing from the target
//!     combine    Merge several filter outputs line by line
//!     dict       Flag pairs with low dictionary coverage of the target
//!     extract    Extract one sentence pair per line from Export Format input
//!     giza       Flag pairs with low symmetric alignment probability (GIZA++ output)
//!     help       Prints this message or the help of the given subcommand(s)
//!     ngram      Flag pairs scored unlikely by an n-gram model (SRILM output)
//!     number     Flag pairs whose source numbers are missing from the target
//!     select     Draw an error-balanced sample for manual annotation
//!     stats      Compute per-filter precision/recall against gold annotation
//!     sweep      Sweep a score threshold against gold annotation
//! ```
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use paraclean::error::Error;
use paraclean::extract::{ExportReader, ExtractionMode};
use paraclean::filtering::{run_filter, AsciiFilter, DictionaryFilter, Filter, GizaFilter, NgramFilter, NumberFilter};
use paraclean::record::PairReader;
use paraclean::resources::{Dictionary, NumberMap};
use paraclean::{combine, select, stats};

fn open_input(path: Option<PathBuf>) -> Result<Box<dyn BufRead>, Error> {
    match path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn open_file(path: &PathBuf) -> Result<BufReader<File>, Error> {
    Ok(BufReader::new(File::open(path)?))
}

/// Runs a filter over Export Format input, extracting the layer it expects.
fn filter_export<F: Filter>(
    input: Option<PathBuf>,
    mode: ExtractionMode,
    filter: &mut F,
    out: &mut impl Write,
) -> Result<(), Error> {
    let pairs = ExportReader::new(open_input(input)?, mode);
    run_filter(pairs, filter, out)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Paraclean::from_args();
    debug!("cli args\n{:#?}", opt);

    let mut out = io::stdout().lock();

    match opt {
        cli::Paraclean::Extract(e) => {
            let reader = ExportReader::new(open_input(e.input)?, e.mode);
            for pair in reader {
                writeln!(out, "{}", pair?)?;
            }
        }

        cli::Paraclean::Ascii(a) => {
            filter_export(a.input, ExtractionMode::Plain, &mut AsciiFilter, &mut out)?;
        }

        cli::Paraclean::Dict(d) => {
            let dictionary = Dictionary::from_files(d.dict.as_deref(), d.aligned.as_deref())?;
            let mut filter = DictionaryFilter::with_limit(dictionary, d.limit);
            filter_export(d.input, ExtractionMode::Lemma, &mut filter, &mut out)?;
        }

        cli::Paraclean::Number(n) => {
            let map = match n.map {
                Some(path) => NumberMap::from_file(&path)?,
                None => NumberMap::default(),
            };
            let mut filter = NumberFilter::new(map);
            filter_export(n.input, ExtractionMode::Plain, &mut filter, &mut out)?;
        }

        cli::Paraclean::Ngram(n) => {
            let mut filter = NgramFilter::with_limit(open_file(&n.scores)?, n.limit);
            let pairs = PairReader::new(open_file(&n.corpus)?);
            run_filter(pairs, &mut filter, &mut out)?;
        }

        cli::Paraclean::Giza(g) => {
            let mut filter = GizaFilter::with_threshold(
                open_file(&g.forward)?,
                open_file(&g.backward)?,
                g.threshold,
            );
            let pairs = PairReader::new(open_file(&g.corpus)?);
            run_filter(pairs, &mut filter, &mut out)?;
        }

        cli::Paraclean::Combine(c) => {
            let mut streams = Vec::with_capacity(c.inputs.len());
            for path in &c.inputs {
                streams.push(open_file(path)?);
            }
            combine::combine(streams, &mut out)?;
        }

        cli::Paraclean::Stats(s) => {
            let rows = stats::evaluate(open_input(s.input)?)?;
            stats::print_report(&rows, &mut out)?;
        }

        cli::Paraclean::Select(s) => {
            let quotas = s
                .errors
                .into_iter()
                .map(|name| (name, s.error_limit))
                .collect();
            let report = select::select(open_input(s.input)?, &mut out, s.first_limit, quotas)?;
            for (name, missing) in &report.unsatisfied {
                warn!("{}: quota not reached, {} draws missing", name, missing);
            }
        }

        cli::Paraclean::Sweep(s) => {
            stats::sweep(open_input(s.input)?, &mut out)?;
        }
    };

    Ok(())
}
