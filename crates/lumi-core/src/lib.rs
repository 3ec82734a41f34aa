//! Lumi Core
//!
//! Framework-free logic behind the Lumi marketing site and dashboard:
//! the scroll reveal engine that drives section entrance animations,
//! the simulated tutor chat, and the placeholder auth helpers.

pub mod auth;
pub mod chat;
pub mod reveal;

use thiserror::Error;

pub use chat::{Message, Sender, TutorScript};
pub use reveal::{Rect, Region, RegionHandle, RevealState, ScrollRevealController};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("bounds error: {0}")]
    Bounds(String),

    #[error("observer error: {0}")]
    Observer(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::Observer("unsupported".into());
        assert_eq!(err.to_string(), "observer error: unsupported");
    }
}
