//! The five pipelines.
//!
//! Every `run_*` function prints a header followed by its result to the
//! given sink. They share no state: each one builds its own copy of the
//! input, so running them in any order, any number of times, prints the
//! same thing.

use crate::aggregate::{map_reduce_lengths, name_length_map, sum_lengths, NameLengthMap};
use crate::error::Result;
use crate::names::{capitalize, literal_names, split_names, starts_with_h, CHARACTERS, CHARACTERS_CSV};
use crate::render::{bracketed, count_message};
use itertools::Itertools;
use std::io::Write;
use tracing::{debug, trace};

pub type Procedure = fn(&mut dyn Write) -> Result<()>;

/// Every pipeline, in the order the program runs them.
pub const PROCEDURES: [(&str, Procedure); 5] = [
    ("run_baseline", run_baseline),
    ("run_for_each", run_for_each),
    ("run_collect", run_collect),
    ("run_collect_reduce", run_collect_reduce),
    ("run_map_reduce", run_map_reduce),
];

/// Run all five pipelines, separated by blank lines.
pub fn run_all(out: &mut dyn Write) -> Result<()> {
    for (index, (name, procedure)) in PROCEDURES.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        debug!(procedure = *name, "running pipeline");
        procedure(out)?;
    }
    Ok(())
}

// =============================================================================
// Baseline: imperative loop
// =============================================================================

/// Filter and capitalize in place, then sort.
///
/// The cursor only advances when an element is kept. Removing shifts the
/// next element into the current slot, which must be examined next.
pub fn baseline_names(mut names: Vec<String>) -> Vec<String> {
    let mut i = 0;
    while i < names.len() {
        if !starts_with_h(&names[i]) {
            let removed = names.remove(i);
            trace!(name = %removed, "removed");
        } else {
            names[i] = capitalize(&names[i]);
            i += 1;
        }
    }

    names.sort();
    names
}

pub fn run_baseline(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Results from run_baseline():")?;

    let names = baseline_names(literal_names());
    debug!(kept = names.len(), "baseline finished");

    for name in &names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

// =============================================================================
// Iterator pipelines
// =============================================================================

/// Filter → capitalize → sort, collected into a list.
pub fn pipeline_names<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter(|name| starts_with_h(name))
        .map(capitalize)
        .sorted()
        .collect()
}

/// Print each name as it comes out of the pipeline.
pub fn run_for_each(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Results from run_for_each():")?;

    CHARACTERS
        .into_iter()
        .filter(|name| starts_with_h(name))
        .map(capitalize)
        .sorted()
        .try_for_each(|name| writeln!(out, "{}", name))?;
    Ok(())
}

/// Collect into a list first, then print the list once.
pub fn run_collect(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Results from run_collect():")?;

    let results = pipeline_names(CHARACTERS);
    debug!(?results, "collected");

    writeln!(out, "{}", bracketed(&results))?;
    Ok(())
}

// =============================================================================
// Aggregating pipelines
// =============================================================================

/// Split, filter and capitalize a blob, group into a Name-Length Map, and
/// sum the map's values.
pub fn collect_reduce_summary(blob: &str) -> (NameLengthMap, usize) {
    let map = name_length_map(split_names(blob).filter(|name| starts_with_h(name)).map(capitalize));
    let count = sum_lengths(&map);
    (map, count)
}

pub fn run_collect_reduce(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Results from run_collect_reduce():")?;

    let (map, count) = collect_reduce_summary(CHARACTERS_CSV);
    debug!(?map, count, "grouped names by length");

    writeln!(out, "{}", count_message(map.keys(), count))?;
    Ok(())
}

/// Split a blob into the sorted list of matching names and reduce their
/// lengths with the map + combine reduction.
pub fn map_reduce_summary(blob: &str) -> (Vec<String>, usize) {
    let names = pipeline_names(split_names(blob));
    let count = map_reduce_lengths(&names);
    (names, count)
}

pub fn run_map_reduce(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Results from run_map_reduce():")?;

    let (names, count) = map_reduce_summary(CHARACTERS_CSV);
    debug!(?names, count, "reduced name lengths");

    writeln!(out, "{}", count_message(&names, count))?;
    Ok(())
}
