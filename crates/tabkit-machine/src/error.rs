//! Machine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MachineError {
    #[error("Unknown tab value: {0}")]
    UnknownValue(String),

    #[error("Tab is disabled: {0}")]
    DisabledValue(String),
}
