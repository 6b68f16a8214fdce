//! Formatting of service results into chat replies.

pub mod card;
