//! Services combining ESI lookups into the data the commands reply with.

pub mod distance;
pub mod incursion;
