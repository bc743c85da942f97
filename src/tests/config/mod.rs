//! Config module tests.

mod options_tests;
mod profile_tests;
