//! Small domain helpers.

pub mod eve;
