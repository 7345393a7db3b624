pub mod classify;
pub mod clone;
pub mod collect;
pub mod errors;
pub mod logger;
pub mod pipeline;
pub mod refactor;
pub mod rename;
pub mod transform;

pub use errors::RefactorError;
pub use pipeline::{run_refactor, RefactorConfig};
