//! # Storing of networks in memory
//!
//! This module provides the data structures used to represent flow networks in memory.
//! Algorithms may introduce their specific data structures in `algorithm::my_algorithm`.
pub mod network;
pub mod number_types;
