//! # Integration tests
//!
//! Testing the solver through its public interface only. Convention for the modules:
//!
//! * `problem_1`: concrete networks with known maximum flow values
//! * `problem_2`: properties that should hold on any network
pub mod problem_1;
