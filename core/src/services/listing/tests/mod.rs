//! Tests for the listing query service.

mod service_tests;
