/*! # paraclean

Misalignment filtering pipeline for bilingual sentence-aligned corpora.

A shared line format (`source \t target`) carries one sentence pair per
line. Independent [filters](filtering) each judge a pair and tag likely
misalignments with a filter-specific error sign; [combine] merges several
filters' verdicts per line; [stats] scores each filter (and their union)
against human annotation. Everything is a single-threaded, single-pass
stream processor.

Usable as a library or through the `paraclean` binary's subcommands.
!*/
pub mod combine;
pub mod error;
pub mod extract;
pub mod filtering;
pub mod record;
pub mod resources;
pub mod scores;
pub mod select;
pub mod stats;
