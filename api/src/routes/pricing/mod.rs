//! Price estimation endpoints.

pub mod estimate;
