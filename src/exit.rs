// src/exit.rs
//! Process exit codes for the `pagerank` binary.
//!
//! Scripts can rely on these staying stable.

use std::process::Termination;

use crate::error::RankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum RankExit {
    /// Both reports were produced.
    Success = 0,
    /// Generic error.
    Error = 1,
    /// Bad arguments or configuration values.
    InvalidInput = 2,
    /// Corpus missing, unreadable or empty.
    CorpusError = 3,
    /// Iteration cap reached before convergence.
    NotConverged = 4,
}

impl RankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an application error onto an exit code, looking through `anyhow` context.
    #[must_use]
    pub fn classify(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<RankError>() {
            Some(e) if e.is_corpus_error() => Self::CorpusError,
            Some(e) if e.is_invalid_input() => Self::InvalidInput,
            Some(RankError::NotConverged { .. }) => Self::NotConverged,
            _ => Self::Error,
        }
    }
}

impl Termination for RankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
