//! Property management: seller submissions, status changes, removal.

mod service;

#[cfg(test)]
mod tests;

pub use service::PropertyService;
