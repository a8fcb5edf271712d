//! Exit codes for the ec2names binary
//!
//! - `0` = Success
//! - `1` = User error (no input, invalid arguments)
//! - `2` = System error (I/O, output serialization)
//! - `3` = Configuration error (unreadable or invalid config file)

use crate::error::NamesError;

pub mod codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 1;
    pub const SYSTEM_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
}

pub fn exit_code_for_error(error: &NamesError) -> i32 {
    match error {
        NamesError::Config(_) => codes::CONFIG_ERROR,
        NamesError::Validation { .. } => codes::USER_ERROR,
        NamesError::Io(_) | NamesError::Json(_) => codes::SYSTEM_ERROR,
    }
}

/// Exit code for an error that reached `main`, falling back to
/// `SYSTEM_ERROR` when it did not originate in this crate.
pub fn exit_code_for_anyhow(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<NamesError>()
        .map_or(codes::SYSTEM_ERROR, exit_code_for_error)
}
