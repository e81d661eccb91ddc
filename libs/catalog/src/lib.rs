//! # iguid-catalog
//!
//! The fixed list of GUID renderings and the filter that turns it into a
//! numbered pick list.
//!
//! A [`Candidate`] pairs one GUID with one [`RenderRule`]. The host shows
//! `label` and `description`, inserts `text`, and calls `regenerate` between
//! insertion points when every point should get its own GUID.

mod candidate;
mod rules;

pub use candidate::{build_candidates, build_candidates_from, Candidate, Categories};
pub use rules::{Category, RenderFn, RenderRule, CATALOG, PLACEHOLDER};
