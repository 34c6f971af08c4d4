use std::time::Duration;

use crate::state::codec;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

/// Current value of an instant field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstantValue {
    Text(String),
    Checkbox(bool),
    Select(String),
}

impl InstantValue {
    /// Text goes out raw, selects URL-encoded, checkboxes as `True` or empty.
    pub fn serialize(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Checkbox(checked) => codec::python_bool(*checked).to_string(),
            Self::Select(value) => codec::encode_component(value),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Pending { ticket: Ticket, url: String },
}

/// Debounced submitter for one field. Every edit replaces the pending
/// submission; only the ticket of the latest edit can fire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstantSubmitter {
    base_url: String,
    delay: Duration,
    state: SubmitState,
    next_ticket: u64,
}

impl InstantSubmitter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            delay: DEFAULT_DELAY,
            state: SubmitState::Idle,
            next_ticket: 0,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmitState::Pending { .. })
    }

    pub fn edit(&mut self, value: &InstantValue) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.state = SubmitState::Pending {
            ticket,
            url: format!("{}{}", self.base_url, value.serialize()),
        };
        ticket
    }

    /// Called when the timer of `ticket` elapses. Returns the URL to request
    /// if no later edit superseded it.
    pub fn fire(&mut self, ticket: Ticket) -> Option<String> {
        let current = match &self.state {
            SubmitState::Pending { ticket, .. } => *ticket,
            SubmitState::Idle => return None,
        };
        if current != ticket {
            return None;
        }
        match std::mem::replace(&mut self.state, SubmitState::Idle) {
            SubmitState::Pending { url, .. } => Some(url),
            SubmitState::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = SubmitState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_ticket_does_not_fire() {
        let mut submitter = InstantSubmitter::new("/users/edit/1000/gecos/");
        let first = submitter.edit(&InstantValue::Text("Bo".into()));
        let second = submitter.edit(&InstantValue::Text("Bob".into()));

        assert_eq!(submitter.fire(first), None);
        assert!(submitter.is_pending());
        assert_eq!(
            submitter.fire(second).as_deref(),
            Some("/users/edit/1000/gecos/Bob")
        );
        assert_eq!(submitter.state(), &SubmitState::Idle);
        assert_eq!(submitter.fire(second), None);
    }
}
