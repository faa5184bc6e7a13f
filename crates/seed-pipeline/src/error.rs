//! Error types for the pipeline.

use seed_generator::GeneratorError;
use seed_postgresql::LoadError;
use thiserror::Error;

/// Errors that can end a seeding run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The run's cancellation token fired at a batch boundary.
    #[error("run cancelled")]
    Cancelled,

    /// Generation error.
    #[error("generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Bulk-load error.
    #[error("load error: {0}")]
    Load(#[from] LoadError),
}

impl PipelineError {
    /// Whether this error is an operator-requested abort rather than a
    /// failure; cancelled runs end in `Cancelled`, not `Failed`.
    pub fn is_cancellation(&self) -> bool {
        match self {
            PipelineError::Cancelled => true,
            PipelineError::Generator(GeneratorError::Cancelled) => true,
            PipelineError::Load(e) => e.is_cancelled(),
        }
    }
}
