//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use paraclean::extract::ExtractionMode;

#[derive(Debug, StructOpt)]
#[structopt(name = "paraclean", about = "parallel corpus cleaning tool.")]
/// Holds every command callable through the `paraclean` binary.
pub enum Paraclean {
    #[structopt(about = "Extract one sentence pair per line from Export Format input")]
    Extract(Extract),
    #[structopt(about = "Flag pairs whose non-ASCII source chars are missing from the target")]
    Ascii(Ascii),
    #[structopt(about = "Flag pairs with low dictionary coverage of the target")]
    Dict(Dict),
    #[structopt(about = "Flag pairs whose source numbers are missing from the target")]
    Number(Number),
    #[structopt(about = "Flag pairs scored unlikely by an n-gram model (SRILM output)")]
    Ngram(Ngram),
    #[structopt(about = "Flag pairs with low symmetric alignment probability (GIZA++ output)")]
    Giza(Giza),
    #[structopt(about = "Merge several filter outputs line by line")]
    Combine(Combine),
    #[structopt(about = "Compute per-filter precision/recall against gold annotation")]
    Stats(Stats),
    #[structopt(about = "Draw an error-balanced sample for manual annotation")]
    Select(Select),
    #[structopt(about = "Sweep a score threshold against gold annotation")]
    Sweep(Sweep),
}

#[derive(Debug, StructOpt)]
pub struct Extract {
    #[structopt(help = "annotation layer to project: plain, lemma, tag or pseudolemma")]
    pub mode: ExtractionMode,
    #[structopt(parse(from_os_str), help = "Export Format corpus (stdin if omitted)")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Ascii {
    #[structopt(parse(from_os_str), help = "Export Format corpus (stdin if omitted)")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Dict {
    #[structopt(
        short = "d",
        long = "dict",
        parse(from_os_str),
        required_unless = "aligned",
        help = "hand-built dictionary file"
    )]
    pub dict: Option<PathBuf>,
    #[structopt(
        short = "g",
        long = "aligned",
        parse(from_os_str),
        required_unless = "dict",
        help = "binary dictionary extracted from aligned bitext"
    )]
    pub aligned: Option<PathBuf>,
    #[structopt(
        short = "l",
        long = "limit",
        default_value = "0.25",
        help = "minimal coverage ratio"
    )]
    pub limit: f64,
    #[structopt(parse(from_os_str), help = "Export Format corpus (stdin if omitted)")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Number {
    #[structopt(
        short = "t",
        long = "translations",
        parse(from_os_str),
        help = "number verbalization map file"
    )]
    pub map: Option<PathBuf>,
    #[structopt(parse(from_os_str), help = "Export Format corpus (stdin if omitted)")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Ngram {
    #[structopt(parse(from_os_str), help = "SRILM per-sentence output")]
    pub scores: PathBuf,
    #[structopt(parse(from_os_str), help = "extracted pair-per-line corpus")]
    pub corpus: PathBuf,
    #[structopt(
        short = "l",
        long = "limit",
        default_value = "-1.5",
        allow_hyphen_values = true,
        help = "minimal per-char log-probability"
    )]
    pub limit: f64,
}

#[derive(Debug, StructOpt)]
pub struct Giza {
    #[structopt(parse(from_os_str), help = "GIZA++ A3.final, source->target direction")]
    pub forward: PathBuf,
    #[structopt(parse(from_os_str), help = "GIZA++ A3.final, target->source direction")]
    pub backward: PathBuf,
    #[structopt(parse(from_os_str), help = "extracted pair-per-line corpus")]
    pub corpus: PathBuf,
    #[structopt(
        short = "l",
        long = "threshold",
        default_value = "-10",
        allow_hyphen_values = true,
        help = "minimal symmetric alignment score"
    )]
    pub threshold: f64,
}

#[derive(Debug, StructOpt)]
pub struct Combine {
    #[structopt(
        parse(from_os_str),
        required = true,
        help = "filter outputs to combine, in evaluation order"
    )]
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Stats {
    #[structopt(parse(from_os_str), help = "annotated combined corpus (stdin if omitted)")]
    pub input: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Select {
    #[structopt(help = "number of leading lines emitted unconditionally")]
    pub first_limit: usize,
    #[structopt(help = "draws wanted per error name")]
    pub error_limit: u32,
    #[structopt(help = "error names to balance the sample over")]
    pub errors: Vec<String>,
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        help = "combined corpus (stdin if omitted)"
    )]
    pub input: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Sweep {
    #[structopt(
        parse(from_os_str),
        help = "score \\t annotation lines, sorted by score (stdin if omitted)"
    )]
    pub input: Option<PathBuf>,
}
