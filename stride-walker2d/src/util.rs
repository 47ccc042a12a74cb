//! Utilities for tests and examples.
pub use test::KinematicHost;
