//! `ConfigWriter` implementations.
//!
//! - [`fs`] – writes to the output directory on disk (production).
//! - [`mock`] – records writes in memory (tests).

pub mod fs;
pub mod mock;

pub use fs::FsConfigWriter;
pub use mock::MockConfigWriter;
