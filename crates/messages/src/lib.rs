//! Herodex message log infrastructure.
//!
//! Implements the [`roster::MessageSink`] trait with an in-memory,
//! append-only log. The data-access service writes one line per completed
//! operation; the presentation layer reads the accumulated entries back out
//! (and may clear them).
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Storage and stamping live here; the service side sees
//! only [`roster::MessageSink`].

use std::sync::Mutex;

use roster::{MessageSink, Timestamp};

/// One logged message, stamped at append time.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// When the message was appended.
    pub at: Timestamp,

    /// The message text.
    pub text: String,
}

/// Thread-safe, append-only in-memory message log.
///
/// Intended to be shared behind an `Arc`: the data-access service holds it
/// as a `dyn MessageSink`, the presentation layer as the concrete type with
/// [`entries`](MessageLog::entries) and [`clear`](MessageLog::clear).
#[derive(Debug, Default)]
pub struct MessageLog {
    entries: Mutex<Vec<Message>>,
}

impl MessageLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all entries in append order.
    pub fn entries(&self) -> Vec<Message> {
        self.entries.lock().expect("message log lock poisoned").clone()
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.entries.lock().expect("message log lock poisoned").clear();
    }

    /// Returns `true` if no entries have been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("message log lock poisoned").is_empty()
    }
}

impl MessageSink for MessageLog {
    fn add(&self, message: &str) {
        let entry = Message {
            at: Timestamp::now(),
            text: message.to_string(),
        };
        self.entries
            .lock()
            .expect("message log lock poisoned")
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_in_order() {
        let log = MessageLog::new();
        log.add("first");
        log.add("second");

        let texts: Vec<String> = log.entries().into_iter().map(|m| m.text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let log = MessageLog::new();
        log.add("anything");
        assert!(!log.is_empty());

        log.clear();
        assert!(log.is_empty());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let log = MessageLog::new();
        log.add("first");
        let snapshot = log.entries();
        log.add("second");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.entries().len(), 2);
    }
}
