#![warn(missing_docs)]
//! Interface between reinforcement learning environments and the programs
//! that drive them.
//!
//! The crate defines the entities of an episodic interaction: an environment
//! ([`Env`]) emits observations ([`Obs`]) and consumes actions ([`Act`]);
//! every interaction step yields a [`Step`] object together with a
//! [`Record`](record::Record) of diagnostic values. Concrete environments,
//! such as the biped locomotion task in `stride-walker2d`, implement these
//! traits.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Env, Info, Obs, Step};
