//! Tests for the property management service.

mod service_tests;
