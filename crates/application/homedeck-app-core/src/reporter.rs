use homedeck_core::LifecycleOutcome;

use crate::ports::Notifier;

/// Surfaces one lifecycle outcome to the user through a blocking [`Notifier`].
pub struct OutcomeReporter<N> {
    notifier: N,
}

impl<N: Notifier> OutcomeReporter<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Blocks until the user acknowledged the message.
    pub fn report(&self, outcome: &LifecycleOutcome) {
        self.notifier.notify(outcome.message());
    }
}
