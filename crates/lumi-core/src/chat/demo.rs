//! Scripted demo conversations for the marketing chat mockups

use super::Sender;

/// Milliseconds between revealed demo messages.
pub const DEMO_STEP_MS: u64 = 1_500;

/// Milliseconds after the section reveals before playback starts.
pub const DEMO_START_DELAY_MS: u64 = 500;

/// A demo transcript entry; stamps are part of the script, not the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoMessage {
    pub sender: Sender,
    pub body: &'static str,
    pub stamp: &'static str,
}

/// One phone mockup's worth of scripted conversation.
#[derive(Debug, Clone, Copy)]
pub struct DemoThread {
    /// Curriculum label shown in the mockup header, e.g. "CBSE Class 7".
    pub track: &'static str,
    pub placeholder: &'static str,
    pub messages: &'static [DemoMessage],
}

const CBSE_THREAD: &[DemoMessage] = &[
    DemoMessage {
        sender: Sender::Student,
        body: "I'm struggling with quadratic equations. Can you help me understand them?",
        stamp: "2:34 PM",
    },
    DemoMessage {
        sender: Sender::Tutor,
        body: "Hi! Let's solve quadratic equations step by step. For CBSE Class 7, we'll use the \
               factorization method. Take x\u{b2} + 5x + 6 = 0. We need two numbers that multiply \
               to 6 and add to 5. That's 2 and 3! So (x + 2)(x + 3) = 0.",
        stamp: "2:34 PM",
    },
    DemoMessage {
        sender: Sender::Student,
        body: "That makes sense! What's next?",
        stamp: "2:35 PM",
    },
    DemoMessage {
        sender: Sender::Tutor,
        body: "Great! So if (x + 2)(x + 3) = 0, then either x + 2 = 0 or x + 3 = 0. This gives us \
               x = -2 or x = -3. These are your solutions! Remember to always check by \
               substituting back.",
        stamp: "2:35 PM",
    },
];

const ICSE_THREAD: &[DemoMessage] = &[
    DemoMessage {
        sender: Sender::Student,
        body: "I'm struggling with quadratic equations. Can you help me understand them?",
        stamp: "2:34 PM",
    },
    DemoMessage {
        sender: Sender::Tutor,
        body: "Absolutely! For ICSE Class 7, let's explore quadratic equations using the quadratic \
               formula. For x\u{b2} + 5x + 6 = 0, we use x = (-b \u{b1} \u{221a}(b\u{b2} - 4ac)) / 2a \
               where a=1, b=5, c=6.",
        stamp: "2:34 PM",
    },
    DemoMessage {
        sender: Sender::Student,
        body: "Can you show me the calculation?",
        stamp: "2:35 PM",
    },
    DemoMessage {
        sender: Sender::Tutor,
        body: "Sure! x = (-5 \u{b1} \u{221a}(25 - 24)) / 2 = (-5 \u{b1} 1) / 2. So x = -2 or x = -3. \
               Notice how this method works for any quadratic equation, even when factoring is \
               difficult!",
        stamp: "2:35 PM",
    },
];

/// The two side-by-side mockups on the landing page.
pub fn demo_threads() -> [DemoThread; 2] {
    [
        DemoThread {
            track: "CBSE Class 7",
            placeholder: "Ask about CBSE...",
            messages: CBSE_THREAD,
        },
        DemoThread {
            track: "ICSE Class 7",
            placeholder: "Ask about ICSE...",
            messages: ICSE_THREAD,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threads_alternate_speakers() {
        for thread in demo_threads() {
            assert!(!thread.messages.is_empty());
            assert_eq!(thread.messages[0].sender, Sender::Student);
            for pair in thread.messages.windows(2) {
                assert_ne!(pair[0].sender, pair[1].sender);
            }
        }
    }

    #[test]
    fn test_threads_have_equal_length() {
        let [left, right] = demo_threads();
        // playback advances both mockups with one shared counter
        assert_eq!(left.messages.len(), right.messages.len());
    }
}
