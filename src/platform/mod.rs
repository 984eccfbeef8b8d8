//! Platform abstraction layer
//!
//! Handles browser/native differences for input events. Storage lives in
//! `persistence`, audio in `audio`.

pub mod input;

pub use input::{Intent, RawInput, translate};
