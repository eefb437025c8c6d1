//! # Strategies for the preflow push algorithm
//!
//! Module containing decisions to be made during the preflow push algorithm that affect
//! its running time but not its result.
pub mod selection_rule;
