//! Pointer interaction for the PuzzleN sliding-tile puzzle.
//!
//! This crate turns raw pointer pixels into tile slides on a
//! [`puzzlen_core::Grid`]. A press engages a movable tile, motion shifts it
//! along its single permitted axis, and a release snaps it into the empty
//! slot, back home, or leaves it stuck in between.
//!
//! # Overview
//!
//! - [`Puzzle`]: the session owning grid and drag state; the entry point for
//!   a presentation adapter.
//! - [`DragController`]: the press/move/release state machine.
//! - [`PuzzleConfig`]: validated dimensions, cell size and glue distance.
//! - [`Snapshot`]: an owned view for rendering.
//! - [`InvariantPolicy`]: what happens when the grid turns out corrupted.
//! - [`geometry`]: pixel ↔ cell transforms.

mod config;
mod drag;
pub mod geometry;
mod policy;
mod puzzle;
mod snapshot;

pub use self::{
    config::{
        CELL_SIZE_RANGE, DEFAULT_CELL_SIZE, DEFAULT_DIMENSION, DEFAULT_GLUE_PERCENT,
        DIMENSION_RANGE, DragMetrics, MAX_GLUE_PERCENT, PuzzleConfig, ShuffleMode,
    },
    drag::{DragController, DragPhase, PressOutcome, ReleaseOutcome},
    policy::InvariantPolicy,
    puzzle::Puzzle,
    snapshot::Snapshot,
};
