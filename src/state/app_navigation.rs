//! Moving between views, highlights and exhibits.
//!
//! Every step here is a synchronous replacement of navigation state, so
//! repeating a key simply re-applies the latest target.

use super::{App, View};

impl App {
    /// Closes the payment dialog, or goes back one level.
    pub(super) fn dismiss(&mut self) {
        if self.payment.is_open() {
            if self.payment.close() {
                tracing::debug!(attempt = self.payment.attempt(), "payment dialog closed");
            }
            return;
        }

        match &self.nav.view {
            View::Category(_) => self.return_to_map(),
            View::Exhibit(id) => {
                let id = id.clone();
                self.return_to_category_of(&id);
            }
            View::Entry | View::Map => {}
        }
    }

    /// Opens whatever is highlighted in the current view.
    pub(super) fn select_highlighted(&mut self) {
        match &self.nav.view {
            View::Map => {
                let target = self
                    .catalog
                    .categories()
                    .get(self.nav.map_index)
                    .map(|c| c.id.clone());
                if let Some(category_id) = target {
                    self.nav.show_category(category_id);
                }
            }
            View::Category(category_id) => {
                let target = self
                    .catalog
                    .exhibits_in_category(category_id)
                    .get(self.nav.list_index)
                    .map(|e| e.id.clone());
                if let Some(exhibit_id) = target {
                    self.nav.show_exhibit(exhibit_id);
                }
            }
            View::Entry | View::Exhibit(_) => {}
        }
    }

    /// Moves the highlight on the map or in the listing, or scrolls the
    /// shown exhibit's code.
    pub(super) fn move_highlight(&mut self, forward: bool) {
        match &self.nav.view {
            View::Map => {
                let len = self.catalog.categories().len();
                self.nav.cycle_map(len, forward);
            }
            View::Category(category_id) => {
                let len = self.catalog.exhibits_in_category(category_id).len();
                self.nav.move_list(len, forward);
            }
            View::Exhibit(exhibit_id) => {
                let line_count = self
                    .catalog
                    .exhibit_by_id(exhibit_id)
                    .map_or(0, |e| e.code.lines().count());
                self.nav.scroll_code(line_count, forward);
            }
            View::Entry => {}
        }
    }

    /// Replaces the shown exhibit with its previous or next neighbour.
    ///
    /// At either end of the sequence this does nothing.
    pub(super) fn step_exhibit(&mut self, forward: bool) {
        let Some(current) = self.nav.current_exhibit() else {
            return;
        };

        let adjacent = self.catalog.adjacent_in_category(current);
        let target = if forward {
            adjacent.next
        } else {
            adjacent.previous
        };

        if let Some(exhibit) = target {
            let id = exhibit.id.clone();
            self.nav.show_exhibit(id);
        }
    }

    /// Shows the map with the category we came from highlighted.
    pub(super) fn return_to_map(&mut self) {
        let from_category = match &self.nav.view {
            View::Category(id) => Some(id.clone()),
            View::Exhibit(id) => self.catalog.exhibit_by_id(id).map(|e| e.category.clone()),
            View::Entry | View::Map => None,
        };

        if let Some(index) = from_category
            .and_then(|id| self.catalog.categories().iter().position(|c| c.id == id))
        {
            self.nav.map_index = index;
        }
        self.nav.show_map();
    }

    /// Shows the listing of an exhibit's category with the exhibit highlighted.
    ///
    /// An unknown exhibit goes back to the map instead.
    fn return_to_category_of(&mut self, exhibit_id: &str) {
        let Some(category_id) = self
            .catalog
            .exhibit_by_id(exhibit_id)
            .map(|e| e.category.clone())
        else {
            self.nav.show_map();
            return;
        };

        let index = self
            .catalog
            .exhibits_in_category(&category_id)
            .iter()
            .position(|e| e.id == exhibit_id)
            .unwrap_or(0);

        self.nav.show_category(category_id);
        self.nav.list_index = index;
    }
}
