//! Cross-module tests.

mod upload_tests;
