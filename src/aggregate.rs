//! Aggregations over capitalized names.
//!
//! Two ways to reach the same Aggregate Count:
//!
//! 1. Group names into an ordered Name-Length Map, then sum its values.
//! 2. Reduce the name list directly with an identity, an accumulator
//!    (the "map" step) and a combiner (the "reduce" step).
//!
//! The combiner is associative and commutative and `0` is its identity, so
//! the reduction gives the same answer however the input is chunked. The
//! rayon variant below relies on exactly that.

use crate::names::name_length;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::trace;

/// Ordered map from capitalized name to its total length.
pub type NameLengthMap = BTreeMap<String, usize>;

/// Group names by identity, summing lengths on collision.
pub fn name_length_map<I, S>(names: I) -> NameLengthMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().fold(BTreeMap::new(), |mut map, name| {
        let name = name.into();
        let length = name_length(&name);
        *map.entry(name).or_insert(0) += length;
        map
    })
}

/// Sum every value in the map.
pub fn sum_lengths(map: &NameLengthMap) -> usize {
    map.values().fold(0, |x, y| x + y)
}

/// The "map" step: fold one name's length into a running sum.
pub fn accumulate_length<S: AsRef<str>>(sum: usize, name: S) -> usize {
    sum + name_length(name.as_ref())
}

/// The "reduce" step: merge two partial sums.
pub fn combine_lengths(left: usize, right: usize) -> usize {
    left + right
}

/// Sequential map-reduce over a list of names.
///
/// Each name is folded into its own partial sum seeded with the identity and
/// the partials are merged with [`combine_lengths`], the same shape a
/// parallel run has with one chunk per element.
pub fn map_reduce_lengths<S: AsRef<str>>(names: &[S]) -> usize {
    names
        .iter()
        .map(|name| accumulate_length(0, name))
        .fold(0, combine_lengths)
}

/// Parallel map-reduce with the same identity, accumulator and combiner.
pub fn par_map_reduce_lengths<S: AsRef<str> + Sync>(names: &[S]) -> usize {
    let total = names
        .par_iter()
        .fold(|| 0, |sum, name| accumulate_length(sum, name))
        .reduce(|| 0, combine_lengths);
    trace!(total, "parallel map-reduce finished");
    total
}
