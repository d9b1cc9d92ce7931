//! # annot-core
//!
//! Annotation overlay engine for sensor datastream configurations.
//!
//! A datastream carries a baseline, piecewise time-partitioned configuration
//! (which source to read datapoints from, and how). Externally authored
//! *annotations* override time ranges of that configuration: exclude the data,
//! attach an evaluation expression, or flag it. This crate reconciles the two
//! into a single canonical, time-ordered, non-overlapping partition describing
//! exactly which configuration and which accumulated directives apply at every
//! instant.
//!
//! The engine is pure: no I/O, no shared state, and caller-supplied documents
//! are never mutated. Re-running [`build`] on the same raw inputs reproduces a
//! byte-identical result.
//!
//! ## Modules
//!
//! - [`instant`] — sentinel instants and lenient ISO-8601 parsing
//! - [`interval`] — half-open interval arithmetic
//! - [`action`] — annotation actions and per-segment accumulated state
//! - [`document`] — serde shapes for input and output documents
//! - [`segment`] — immutable configuration segments
//! - [`normalize`] — baseline list → strict partition
//! - [`expand`] — annotation documents → actionable annotation intervals
//! - [`overlay`] — the overlay fold and the top-level [`build`] operation
//! - [`serialize`] — final partition → output documents
//! - [`error`] — error types

pub mod action;
pub mod document;
pub mod error;
pub mod expand;
pub mod instant;
pub mod interval;
pub mod normalize;
pub mod overlay;
pub mod segment;
pub mod serialize;

pub use action::{Action, ActionState};
pub use document::{ActionsOut, AnnotationDoc, BaselineEntry, ConfigEntry, IntervalDoc};
pub use error::AnnotError;
pub use expand::{expand, AnnotationInterval};
pub use instant::{format_instant, parse_instant_or, Sentinels};
pub use interval::Interval;
pub use normalize::normalize;
pub use overlay::{apply, build, build_json};
pub use segment::ConfigSegment;
