use thiserror::Error;

/// Raised when the combinatorial search gives up on a seed. Handled inside
/// the generator by falling back to the puzzle bank; `generate` itself never
/// fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no expression reaching the target found after {attempts} attempts")]
    Exhausted { attempts: u32 },
}
