//! Simulated tutor chat
//!
//! Everything here is local simulation: canned replies on a timer stand in
//! for the AI tutor, and scripted demo threads feed the marketing page's
//! phone mockups. No network I/O.

mod demo;
mod script;

pub use demo::{demo_threads, DemoMessage, DemoThread, DEMO_START_DELAY_MS, DEMO_STEP_MS};
pub use script::{TutorScript, REPLY_DELAY_MS};

use chrono::Local;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Student,
    Tutor,
}

/// One transcript entry. Stamps are display strings; the transcript is
/// ephemeral and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub body: String,
    pub stamp: String,
}

impl Message {
    pub fn student(body: impl Into<String>) -> Self {
        Self::stamped(Sender::Student, body)
    }

    pub fn tutor(body: impl Into<String>) -> Self {
        Self::stamped(Sender::Tutor, body)
    }

    fn stamped(sender: Sender, body: impl Into<String>) -> Self {
        Self {
            sender,
            body: body.into(),
            stamp: clock_label(),
        }
    }
}

/// Wall-clock label like "2:34 PM".
fn clock_label() -> String {
    Local::now().format("%l:%M %p").to_string().trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let question = Message::student("What is photosynthesis?");
        assert_eq!(question.sender, Sender::Student);
        assert!(!question.stamp.is_empty());

        let answer = Message::tutor("Let's start with sunlight.");
        assert_eq!(answer.sender, Sender::Tutor);
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&Sender::Tutor).unwrap();
        assert_eq!(json, "\"tutor\"");
    }
}
