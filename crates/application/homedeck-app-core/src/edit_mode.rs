use std::sync::Arc;

use tokio::sync::watch;

/// Owner of the dashboard-wide edit-mode flag.
#[derive(Clone)]
pub struct EditModeStore {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for EditModeStore {
    fn default() -> Self {
        Self::new(false)
    }
}

impl EditModeStore {
    pub fn new(enabled: bool) -> Self {
        let (tx, _rx) = watch::channel(enabled);
        Self { tx: Arc::new(tx) }
    }

    pub fn is_enabled(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn set(&self, enabled: bool) {
        let previous = self.tx.send_replace(enabled);
        if previous != enabled {
            tracing::debug!("edit mode {}", if enabled { "enabled" } else { "disabled" });
        }
    }

    /// Flips the flag and returns the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.is_enabled();
        self.set(next);
        next
    }

    pub fn subscribe(&self) -> EditModeSubscription {
        EditModeSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

/// Read-only view of the edit-mode flag handed to tiles.
#[derive(Clone)]
pub struct EditModeSubscription {
    rx: watch::Receiver<bool>,
}

impl EditModeSubscription {
    /// Fixed flag, for callers without a store (one-shot CLI evaluation, tests).
    pub fn constant(enabled: bool) -> Self {
        let (tx, rx) = watch::channel(enabled);
        // Receivers keep the last value after the sender is gone.
        drop(tx);
        Self { rx }
    }

    pub fn is_enabled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits for the next change and returns the new value, or `None` once the
    /// store is gone.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscriptions_see_the_current_value() {
        let store = EditModeStore::new(false);
        let sub = store.subscribe();
        assert!(!sub.is_enabled());

        assert!(store.toggle());
        assert!(sub.is_enabled());

        store.set(false);
        assert!(!sub.is_enabled());
    }

    #[test]
    fn constant_subscription_outlives_its_sender() {
        assert!(EditModeSubscription::constant(true).is_enabled());
        assert!(!EditModeSubscription::constant(false).is_enabled());
    }

    #[tokio::test]
    async fn changed_wakes_on_updates_and_ends_with_the_store() {
        let store = EditModeStore::new(false);
        let mut sub = store.subscribe();

        let waiter = tokio::spawn(async move {
            let first = sub.changed().await;
            (first, sub)
        });
        store.set(true);
        let (first, mut sub) = waiter.await.unwrap();
        assert_eq!(first, Some(true));

        drop(store);
        assert_eq!(sub.changed().await, None);
    }
}
