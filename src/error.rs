use thiserror::Error;

use crate::types::Mark;

/// Why an intent was ignored.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("cell index out of range: {0}")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("game is already won by {0}")]
    GameOver(Mark),

    #[error("step {step} out of range for history of length {len}")]
    StepOutOfRange { step: usize, len: usize },
}
