//! # Number types
//!
//! The algorithms in this crate are generic over the type in which flow amounts and
//! capacities are expressed. This module bundles the operations they require.
use std::ops::Sub;

use num_traits::Zero;

/// Operations supported by flow values.
///
/// Flow amounts are ordered, can be added and subtracted and have a zero element. The
/// algorithms only ever subtract a value from a larger or equal one, so both signed and
/// unsigned types qualify.
///
/// Arithmetic is assumed to be exact: an arc whose capacity was pushed out entirely
/// should be left with a residual that compares equal to zero. Machine integers and
/// rational types satisfy this; floating point types may not and are at the caller's
/// risk.
pub trait FlowValue: Zero + Sub<Output = Self> + PartialOrd + Clone {}

impl<F> FlowValue for F where F: Zero + Sub<Output = F> + PartialOrd + Clone {}
