//! Integration test harness.
//!
//! Exercises the `pixflip` binary end to end against fixture images
//! generated at test time.

mod helpers;

mod config_test;
mod info_test;
mod render_test;
mod view_test;
