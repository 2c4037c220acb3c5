//! Integration tests for pacer.

mod chapters_test;
mod cli_test;
mod helpers;
mod rate_test;
