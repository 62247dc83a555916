//! Command execution and input handling.

use crossterm::event::KeyEvent;

use crate::commands::{AppCommand, InputContext, KeyMapper};

use super::{App, View};

impl App {
    /// The key-mapping context for the current state.
    ///
    /// An open payment dialog captures input regardless of the view below it.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        if self.payment.is_open() {
            return InputContext::Payment;
        }

        match self.nav.view {
            View::Entry => InputContext::Entry,
            View::Map => InputContext::Map,
            View::Category(_) => InputContext::Category,
            View::Exhibit(_) => InputContext::Exhibit,
        }
    }

    /// Maps a key press in the current context and executes the result.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let command = KeyMapper::map_key(key, &self.input_context());
        if command != AppCommand::Noop {
            tracing::trace!(?command, context = ?self.input_context(), "key mapped");
        }
        self.execute_command(command);
    }

    /// Executes a command against the current state.
    pub fn execute_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Quit => self.exit = true,
            AppCommand::OpenPayment => self.payment.open(),
            AppCommand::Pay => self.start_payment(),
            AppCommand::Dismiss => self.dismiss(),
            AppCommand::Select => self.select_highlighted(),
            AppCommand::SelectPrevious => self.move_highlight(false),
            AppCommand::SelectNext => self.move_highlight(true),
            AppCommand::PreviousExhibit => self.step_exhibit(false),
            AppCommand::NextExhibit => self.step_exhibit(true),
            AppCommand::ReturnToMap => self.return_to_map(),
            AppCommand::CopyCode => self.copy_exhibit_code(),
            AppCommand::Noop => {}
        }
    }
}
