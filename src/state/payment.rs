//! Simulated entry payment.
//!
//! The dialog moves through `Offer → Processing → Complete` and then admits
//! the visitor. The two timed transitions are driven by timer messages that
//! carry the attempt number they were scheduled for; a message whose attempt
//! no longer matches (the dialog was closed, or closed and reopened) is
//! ignored. No money moves anywhere.

// ============================================================================
// Types
// ============================================================================

/// Where the payment dialog is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentStage {
    /// Dialog not shown.
    #[default]
    Closed,
    /// Showing the entry fee and the pay action.
    Offer,
    /// Waiting for the simulated processor.
    Processing,
    /// Payment accepted, about to enter the museum.
    Complete,
}

/// A timed transition requested by the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStep {
    /// Processing finished.
    Settled,
    /// Success screen shown long enough; enter the museum.
    Admitted,
}

/// What applying a timer message did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The message was stale or out of order.
    Ignored,
    /// Moved to [`PaymentStage::Complete`].
    Settled,
    /// Dialog closed; the visitor is in.
    Admitted,
}

// ============================================================================
// Payment State
// ============================================================================

#[derive(Debug, Default)]
pub struct PaymentState {
    stage: PaymentStage,
    attempt: u64,
}

impl PaymentState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn stage(&self) -> PaymentStage {
        self.stage
    }

    /// Number of the current dialog session.
    #[must_use]
    pub const fn attempt(&self) -> u64 {
        self.attempt
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.stage, PaymentStage::Closed)
    }

    /// Shows the dialog. Each opening starts a new attempt.
    pub fn open(&mut self) {
        if self.stage == PaymentStage::Closed {
            self.stage = PaymentStage::Offer;
            self.attempt = self.attempt.wrapping_add(1);
        }
    }

    /// Starts processing from the offer screen.
    ///
    /// Returns the attempt the settle timer must carry, or `None` if the
    /// dialog is not on the offer screen.
    pub fn begin_processing(&mut self) -> Option<u64> {
        (self.stage == PaymentStage::Offer).then(|| {
            self.stage = PaymentStage::Processing;
            self.attempt
        })
    }

    /// Closes the dialog. Only possible before the payment completes.
    ///
    /// Returns `true` if the dialog was closed.
    pub fn close(&mut self) -> bool {
        match self.stage {
            PaymentStage::Offer | PaymentStage::Processing => {
                self.stage = PaymentStage::Closed;
                true
            }
            PaymentStage::Closed | PaymentStage::Complete => false,
        }
    }

    /// Applies a timer message.
    pub fn advance(&mut self, attempt: u64, step: PaymentStep) -> PaymentOutcome {
        if attempt != self.attempt {
            return PaymentOutcome::Ignored;
        }

        match (self.stage, step) {
            (PaymentStage::Processing, PaymentStep::Settled) => {
                self.stage = PaymentStage::Complete;
                PaymentOutcome::Settled
            }
            (PaymentStage::Complete, PaymentStep::Admitted) => {
                self.stage = PaymentStage::Closed;
                PaymentOutcome::Admitted
            }
            _ => PaymentOutcome::Ignored,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payment_flow() {
        let mut payment = PaymentState::new();
        assert!(!payment.is_open());

        payment.open();
        assert_eq!(payment.stage(), PaymentStage::Offer);

        let attempt = payment.begin_processing().unwrap();
        assert_eq!(payment.stage(), PaymentStage::Processing);

        assert_eq!(payment.advance(attempt, PaymentStep::Settled), PaymentOutcome::Settled);
        assert_eq!(payment.stage(), PaymentStage::Complete);
        assert!(!payment.close(), "completed payment cannot be cancelled");

        assert_eq!(payment.advance(attempt, PaymentStep::Admitted), PaymentOutcome::Admitted);
        assert!(!payment.is_open());
    }

    #[test]
    fn test_begin_processing_requires_offer() {
        let mut payment = PaymentState::new();
        assert!(payment.begin_processing().is_none());

        payment.open();
        assert!(payment.begin_processing().is_some());
        assert!(payment.begin_processing().is_none(), "already processing");
    }

    #[test]
    fn test_closing_abandons_pending_timers() {
        let mut payment = PaymentState::new();
        payment.open();
        let stale = payment.begin_processing().unwrap();

        assert!(payment.close());
        assert_eq!(payment.advance(stale, PaymentStep::Settled), PaymentOutcome::Ignored);
        assert_eq!(payment.stage(), PaymentStage::Closed);

        // Reopening starts a fresh attempt; the old timer still does nothing.
        payment.open();
        let fresh = payment.begin_processing().unwrap();
        assert_ne!(fresh, stale);
        assert_eq!(payment.advance(stale, PaymentStep::Settled), PaymentOutcome::Ignored);
        assert_eq!(payment.stage(), PaymentStage::Processing);
        assert_eq!(payment.advance(fresh, PaymentStep::Settled), PaymentOutcome::Settled);
    }

    #[test]
    fn test_out_of_order_step_is_ignored() {
        let mut payment = PaymentState::new();
        payment.open();
        let attempt = payment.begin_processing().unwrap();

        assert_eq!(payment.advance(attempt, PaymentStep::Admitted), PaymentOutcome::Ignored);
        assert_eq!(payment.stage(), PaymentStage::Processing);
    }
}
