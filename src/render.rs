use itertools::Itertools;
use std::fmt::Display;

/// Render items as `[a, b, c]`.
pub fn bracketed<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!("[{}]", items.into_iter().join(", "))
}

/// Line reported by both aggregating pipelines.
pub fn count_message<I>(names: I, count: usize) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    format!(
        "Count of lengths of Hamlet characters' names {} starting with 'h' or 'H' = {}",
        bracketed(names),
        count
    )
}
