//! User accounts and role administration.

mod service;

pub use service::{UserService, UserStats};
