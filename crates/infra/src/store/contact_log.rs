use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use dixm_contact::{ContactMessage, NewContactMessage};
use dixm_core::{DomainError, DomainResult, MessageId};

/// Append-only record of customer inquiries.
pub trait ContactLog: Send + Sync {
    /// Store a message received at `received_at` and return its identifier.
    ///
    /// Accepts any field contents. The stored timestamp never precedes the
    /// previous message's timestamp.
    fn submit(&self, message: NewContactMessage, received_at: DateTime<Utc>) -> DomainResult<MessageId>;

    /// Every message, in submission order.
    fn all_messages(&self) -> DomainResult<Vec<ContactMessage>>;
}

impl<S> ContactLog for Arc<S>
where
    S: ContactLog + ?Sized,
{
    fn submit(&self, message: NewContactMessage, received_at: DateTime<Utc>) -> DomainResult<MessageId> {
        (**self).submit(message, received_at)
    }

    fn all_messages(&self) -> DomainResult<Vec<ContactMessage>> {
        (**self).all_messages()
    }
}

#[derive(Debug)]
struct LogState {
    messages: Vec<ContactMessage>,
    next_id: MessageId,
}

/// In-memory contact log guarded by a single coarse lock.
#[derive(Debug)]
pub struct InMemoryContactLog {
    state: RwLock<LogState>,
}

impl InMemoryContactLog {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LogState {
                messages: Vec::new(),
                next_id: MessageId::FIRST,
            }),
        }
    }
}

impl Default for InMemoryContactLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactLog for InMemoryContactLog {
    fn submit(&self, message: NewContactMessage, received_at: DateTime<Utc>) -> DomainResult<MessageId> {
        let mut state = self
            .state
            .write()
            .map_err(|_| DomainError::unavailable("contact log lock poisoned"))?;

        // Clamp so listing order and timestamp order agree if the clock steps back.
        let timestamp = match state.messages.last() {
            Some(last) if last.timestamp > received_at => last.timestamp,
            _ => received_at,
        };

        let id = state.next_id;
        state.next_id = id.next();
        state
            .messages
            .push(ContactMessage::from_new(id, timestamp, message));

        tracing::debug!(message_id = %id, "contact message stored");
        Ok(id)
    }

    fn all_messages(&self) -> DomainResult<Vec<ContactMessage>> {
        let state = self
            .state
            .read()
            .map_err(|_| DomainError::unavailable("contact log lock poisoned"))?;
        Ok(state.messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn jane() -> NewContactMessage {
        NewContactMessage::new("Jane", "jane@x.com", "Hi")
    }

    #[test]
    fn submit_then_list_returns_matching_message() {
        let log = InMemoryContactLog::new();
        let before = Utc::now();
        let id = log.submit(jane(), Utc::now()).unwrap();

        let all = log.all_messages().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(id, MessageId::FIRST);
        assert_eq!(all[0].name, "Jane");
        assert_eq!(all[0].email, "jane@x.com");
        assert_eq!(all[0].message, "Hi");
        assert!(all[0].timestamp >= before);
    }

    #[test]
    fn empty_fields_are_accepted() {
        let log = InMemoryContactLog::new();
        log.submit(NewContactMessage::new("", "", ""), Utc::now()).unwrap();

        assert_eq!(log.all_messages().unwrap().len(), 1);
    }

    #[test]
    fn listing_preserves_submission_order() {
        let log = InMemoryContactLog::new();
        let start = Utc::now();
        for i in 0..5 {
            log.submit(
                NewContactMessage::new(format!("n{i}"), "e", "m"),
                start + Duration::seconds(i),
            )
            .unwrap();
        }

        let all = log.all_messages().unwrap();
        let names: Vec<_> = all.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["n0", "n1", "n2", "n3", "n4"]);
        for pair in all.windows(2) {
            assert!(pair[0].id < pair[1].id);
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn clock_stepping_back_keeps_timestamps_non_decreasing() {
        let log = InMemoryContactLog::new();
        let now = Utc::now();
        log.submit(jane(), now).unwrap();
        log.submit(jane(), now - Duration::minutes(5)).unwrap();

        let all = log.all_messages().unwrap();
        assert_eq!(all[1].timestamp, now);
    }

    #[test]
    fn concurrent_submissions_get_distinct_ids() {
        let log = InMemoryContactLog::new();

        std::thread::scope(|s| {
            for _ in 0..4 {
                let log = &log;
                s.spawn(move || {
                    for _ in 0..25 {
                        log.submit(jane(), Utc::now()).unwrap();
                    }
                });
            }
        });

        let all = log.all_messages().unwrap();
        assert_eq!(all.len(), 100);
        for (idx, msg) in all.iter().enumerate() {
            assert_eq!(msg.id.get(), idx as u64 + 1);
        }
        for pair in all.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }
}
