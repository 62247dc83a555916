//! Command pattern for key event handling in the museum TUI.
//!
//! This module keeps key input separate from what the app does with it:
//! - Key mappings can be tested in isolation
//! - Each view only reacts to the keys it documents in the footer
//!
//! # Example
//!
//! ```ignore
//! let context = app.input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Title screen.
    Entry,
    /// Payment dialog is open.
    Payment,
    /// Museum map.
    Map,
    /// Exhibit listing of a category.
    Category,
    /// Exhibit detail view.
    Exhibit,
}

impl InputContext {
    /// Footer hint for this context.
    #[must_use]
    pub const fn key_hints(&self) -> &'static str {
        match self {
            Self::Entry => "Enter:Enter Museum  q:Quit",
            Self::Payment => "Enter:Pay & Enter  Esc:Close",
            Self::Map => "↑↓←→:Choose  Enter:Visit  q:Quit",
            Self::Category => "↑↓:Choose  Enter:View  Esc:Map  q:Quit",
            Self::Exhibit => "←:Previous  →:Next  ↑↓:Scroll  c:Copy  Esc:Gallery  m:Map  q:Quit",
        }
    }
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,

    // === Entry & Payment ===
    /// Show the payment dialog.
    OpenPayment,
    /// Start the simulated payment.
    Pay,

    // === Navigation ===
    /// Close the dialog or go back one level.
    Dismiss,
    /// Open the highlighted item.
    Select,
    /// Highlight the previous item.
    SelectPrevious,
    /// Highlight the next item.
    SelectNext,
    /// Go to the previous exhibit.
    PreviousExhibit,
    /// Go to the next exhibit.
    NextExhibit,
    /// Jump back to the museum map.
    ReturnToMap,

    // === Exhibit Actions ===
    /// Copy the exhibit's code to the clipboard.
    CopyCode,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// This is a pure function. Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Entry => Self::map_entry_keys(key),
            InputContext::Payment => Self::map_payment_keys(key),
            InputContext::Map => Self::map_map_keys(key),
            InputContext::Category => Self::map_category_keys(key),
            InputContext::Exhibit => Self::map_exhibit_keys(key),
        }
    }

    fn map_entry_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => AppCommand::OpenPayment,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_payment_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('p') => AppCommand::Pay,
            KeyCode::Esc | KeyCode::Char('q') => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_map_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => {
                AppCommand::SelectPrevious
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => {
                AppCommand::SelectNext
            }
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_category_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppCommand::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::SelectNext,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char('m') => AppCommand::ReturnToMap,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }

    fn map_exhibit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => AppCommand::PreviousExhibit,
            KeyCode::Right | KeyCode::Char('l') => AppCommand::NextExhibit,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::SelectNext,
            KeyCode::Char('c') => AppCommand::CopyCode,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char('m') => AppCommand::ReturnToMap,
            KeyCode::Char('q') => AppCommand::Quit,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
