//! Application constants for the museum TUI.
//!
//! Timings, display text and toast durations shared across state and UI.

use std::time::Duration;

// ============================================================================
// Timing
// ============================================================================

/// Main loop tick: redraw, animations and toast countdowns.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// How long the simulated processor takes.
pub const PAYMENT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// How long the success screen stays up before entering the museum.
pub const PAYMENT_ADMISSION_DELAY: Duration = Duration::from_millis(1500);

/// Toast lifetime after copying code (2 seconds at [`TICK_RATE`]).
pub const COPY_TOAST_TICKS: u8 = 20;

/// Toast lifetime for errors.
pub const ERROR_TOAST_TICKS: u8 = 30;

// ============================================================================
// Display Text
// ============================================================================

/// Museum name shown on the entry screen and in the header.
pub const MUSEUM_NAME: &str = "Code Aesthetica";

/// Entry screen tagline.
pub const TAGLINE: &str = "Before AI perfects code, let's remember its imperfections.";

/// Simulated entry fee.
pub const ENTRY_FEE: &str = "1€";

/// Spinner frames for the processing screen, advanced once per tick.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
