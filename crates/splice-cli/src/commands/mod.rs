//! Command implementations for splice-cli

pub mod apply;
pub mod completions;
pub mod locate;
pub mod plan;

pub use apply::run_apply;
pub use completions::run_completions;
pub use locate::run_locate;
pub use plan::run_plan;
