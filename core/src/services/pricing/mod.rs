//! Rent price estimation from property features.

mod service;

pub use service::{EstimateInput, FurnishingStatus, PriceEstimator, RentEstimate};
