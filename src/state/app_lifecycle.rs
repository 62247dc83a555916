//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Message draining and tick handling

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::constants::TICK_RATE;
use crate::domain::Catalog;
use crate::tui::Tui;
use crate::ui;

use super::{
    App, AppMessage, ClipboardManager, NavigationState, PaymentState, StartupOptions, UiState,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App over `catalog`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, startup_options: StartupOptions) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let mut nav = NavigationState::new();
        if startup_options.skip_entry {
            nav.show_map();
        }

        Self {
            catalog,
            nav,
            payment: PaymentState::new(),
            ui: UiState::new(),
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            clipboard: Box::new(ClipboardManager::new()),
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.on_tick();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!("exiting");
        Ok(())
    }

    /// Advances animations and toast countdowns by one tick.
    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        self.ui.tick_toast();
    }

    /// Applies every message waiting in the channel.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    /// Applies one message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PaymentStep { attempt, step } => self.apply_payment_step(attempt, step),
        }
    }
}
