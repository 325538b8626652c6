//! Facade error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Machine error: {0}")]
    Machine(#[from] tabkit_machine::MachineError),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
