//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic draft creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod draft;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::AnytypeCommand;
#[allow(unused_imports)]
pub use draft::TestDraft;
#[allow(unused_imports)]
pub use env::TestEnv;
