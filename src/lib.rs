//! Password generation from selectable character classes.
//!
//! The core lives in [`pass`]: build a [`pass::GenerationConfig`], hand it
//! to [`pass::generate`] together with any [`rand::Rng`](::rand::Rng), and
//! get back a password that contains at least one character of every
//! enabled class.

pub mod pass;
pub mod rand;
pub mod settings;
