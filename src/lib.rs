//! # Name Pipelines
//!
//! Five equivalent ways to filter, capitalize, sort and aggregate the names
//! of the key characters in Hamlet.
//!
//! ## Pipelines Covered
//!
//! 1. **Baseline**
//!    - Imperative `while` loop over a `Vec`, removing and capitalizing in place
//!
//! 2. **Element-wise iteration**
//!    - `filter` → `map` → `sorted`, printing each name with `try_for_each`
//!
//! 3. **Collect into a list**
//!    - Same chain, materialized with `collect()` and printed once
//!
//! 4. **Collect into a grouped map, then reduce**
//!    - Split a comma-delimited blob, group into a `BTreeMap` of name lengths
//!      (lengths summed on collision) and fold the values
//!
//! 5. **Explicit map-reduce**
//!    - Identity + accumulator + combiner, the shape rayon's
//!      `fold`/`reduce` needs for parallel execution
//!
//! ## Running
//!
//! ```bash
//! cargo run --bin name_pipelines
//!
//! # Diagnostics on stderr
//! RUST_LOG=debug cargo run --bin name_pipelines
//! ```
//!
//! ## Expected Output
//!
//! ```text
//! Results from run_baseline():
//! Hamlet
//! Horatio
//!
//! Results from run_for_each():
//! Hamlet
//! Horatio
//!
//! Results from run_collect():
//! [Hamlet, Horatio]
//!
//! Results from run_collect_reduce():
//! Count of lengths of Hamlet characters' names [Hamlet, Horatio] starting with 'h' or 'H' = 13
//!
//! Results from run_map_reduce():
//! Count of lengths of Hamlet characters' names [Hamlet, Horatio] starting with 'h' or 'H' = 13
//! ```

pub mod aggregate;
pub mod error;
pub mod names;
pub mod pipelines;
pub mod render;
pub mod telemetry;

pub use error::{Error, Result};
pub use names::capitalize;
pub use pipelines::{
    run_all, run_baseline, run_collect, run_collect_reduce, run_for_each, run_map_reduce,
    PROCEDURES,
};
