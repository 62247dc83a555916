//! Payment timers and clipboard actions.

use std::time::Duration;

use crate::constants::{
    COPY_TOAST_TICKS, ERROR_TOAST_TICKS, PAYMENT_ADMISSION_DELAY, PAYMENT_PROCESSING_DELAY,
};

use super::{App, AppMessage, PaymentOutcome, PaymentStep};

impl App {
    // ========================================================================
    // Payment
    // ========================================================================

    /// Starts the simulated payment and schedules its settlement.
    pub(super) fn start_payment(&mut self) {
        if let Some(attempt) = self.payment.begin_processing() {
            tracing::info!(attempt, "processing simulated payment");
            self.schedule_payment_step(attempt, PaymentStep::Settled, PAYMENT_PROCESSING_DELAY);
        }
    }

    /// Applies a fired payment timer.
    pub(super) fn apply_payment_step(&mut self, attempt: u64, step: PaymentStep) {
        match self.payment.advance(attempt, step) {
            PaymentOutcome::Ignored => {
                tracing::debug!(attempt, ?step, "stale payment timer ignored");
            }
            PaymentOutcome::Settled => {
                self.schedule_payment_step(attempt, PaymentStep::Admitted, PAYMENT_ADMISSION_DELAY);
            }
            PaymentOutcome::Admitted => {
                tracing::info!(attempt, "visitor admitted");
                self.nav.show_map();
            }
        }
    }

    /// Posts a payment step back to the main loop after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    fn schedule_payment_step(&self, attempt: u64, step: PaymentStep, delay: Duration) {
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may be dropped during shutdown - safe to ignore
            let _ = message_tx.send(AppMessage::PaymentStep { attempt, step });
        });
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// Copies the shown exhibit's code and reports the result as a toast.
    pub(super) fn copy_exhibit_code(&mut self) {
        let Some(exhibit) = self
            .nav
            .current_exhibit()
            .and_then(|id| self.catalog.exhibit_by_id(id))
        else {
            return;
        };

        match self.clipboard.copy_text(&exhibit.code) {
            Ok(()) => {
                tracing::debug!(exhibit = %exhibit.id, "code copied");
                self.ui.show_toast("[+] Code copied", COPY_TOAST_TICKS);
            }
            Err(err) => {
                tracing::warn!(exhibit = %exhibit.id, "copy failed: {err}");
                self.ui.show_toast(format!("[x] {err}"), ERROR_TOAST_TICKS);
            }
        }
    }
}
