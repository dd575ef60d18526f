//! Cooperative cancellation for rate-limit retries.
//!
//! A [`CancelToken`] is handed to the retrying webhook calls. It is checked
//! once after every rate-limit wait; a cancelled token aborts the retry with
//! [`WebhookError::Cancelled`](crate::webhook::WebhookError::Cancelled)
//! instead of resubmitting the request. Requests already in flight are not
//! interrupted.

use tokio::sync::watch;

/// Creates a linked trigger/token pair.
///
/// # Example
///
/// ```
/// use discord_webhooks::cancel::cancellation;
///
/// let (trigger, token) = cancellation();
/// assert!(!token.is_cancelled());
///
/// trigger.cancel();
/// assert!(token.is_cancelled());
/// ```
#[must_use]
pub fn cancellation() -> (CancelTrigger, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelTrigger { tx }, CancelToken { rx: Some(rx) })
}

/// Sending half: requests cancellation of every linked [`CancelToken`].
#[derive(Debug)]
pub struct CancelTrigger {
    tx: watch::Sender<bool>,
}

impl CancelTrigger {
    /// Marks all linked tokens as cancelled.
    ///
    /// Cancelling is idempotent and never fails, even when every token
    /// has already been dropped.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Returns a new token linked to this trigger.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: Some(self.tx.subscribe()),
        }
    }
}

/// Receiving half: observed by retry loops.
///
/// Cloning is cheap; every clone observes the same trigger.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    rx: Option<watch::Receiver<bool>>,
}

impl CancelToken {
    /// A token that can never be cancelled.
    #[must_use]
    pub const fn never() -> Self {
        Self { rx: None }
    }

    /// Returns true once the linked trigger has requested cancellation.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().is_some_and(|rx| *rx.borrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_is_not_cancelled() {
        let (_trigger, token) = cancellation();
        assert!(!token.is_cancelled());
    }

    #[test]
    fn cancel_is_observed_by_token_and_clones() {
        let (trigger, token) = cancellation();
        let clone = token.clone();

        trigger.cancel();

        assert!(token.is_cancelled());
        assert!(clone.is_cancelled());
    }

    #[test]
    fn tokens_from_trigger_are_linked() {
        let (trigger, _token) = cancellation();
        let extra = trigger.token();

        trigger.cancel();

        assert!(extra.is_cancelled());
    }

    #[test]
    fn cancel_without_live_tokens_does_not_panic() {
        let (trigger, token) = cancellation();
        drop(token);

        trigger.cancel();
        assert!(trigger.token().is_cancelled());
    }

    #[test]
    fn never_token_is_never_cancelled() {
        assert!(!CancelToken::never().is_cancelled());
        assert!(!CancelToken::default().is_cancelled());
    }

    #[test]
    fn cancelled_token_stays_cancelled_after_trigger_drop() {
        let (trigger, token) = cancellation();
        trigger.cancel();
        drop(trigger);

        assert!(token.is_cancelled());
    }
}
