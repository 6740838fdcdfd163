//! The uniform result shape shared by all kernels.

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// Successful kernel computation: the output plus the ordered narration of
/// how it was reached. Steps are built inline with the arithmetic so the
/// narration always reflects the values actually used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trace {
    pub output: String,
    pub steps: Vec<String>,
}

/// What a kernel returns internally: a trace or a typed validation error.
pub type KernelResult = std::result::Result<Trace, KernelError>;

/// A kernel result as seen on the wire: exactly one of the two shapes
/// `{"output": …, "steps": […]}` or `{"error": …}` per invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    Success { output: String, steps: Vec<String> },
    Failure { error: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }
}

impl From<KernelResult> for Outcome {
    fn from(result: KernelResult) -> Self {
        match result {
            Ok(trace) => Outcome::Success {
                output: trace.output,
                steps: trace.steps,
            },
            Err(err) => Outcome::Failure {
                error: err.to_string(),
            },
        }
    }
}
