//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::settings::Settings;
use crate::models::{Category, CategoryField, CategoryId, Group};
use crate::services::{Answer, BudgetStore, Summary};
use crate::storage::KeyValueStore;

use super::widgets::TextInput;

/// Ticks a status message stays on screen
const STATUS_TICKS: u8 = 12;

/// What an edit dialog writes to when confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Income,
    Category(CategoryId, CategoryField),
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(CategoryId),
    Edit(EditTarget),
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// The budget and its backend
    pub store: BudgetStore<S>,

    /// Application settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Index into [`App::rows`]
    pub selected_index: usize,

    /// Text being typed into the edit dialog
    pub input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    status_ticks: u8,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new App instance
    pub fn new(store: BudgetStore<S>, settings: Settings) -> Self {
        Self {
            store,
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            selected_index: 0,
            input: TextInput::new(),
            status_message: None,
            status_ticks: 0,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn summary(&self) -> Summary {
        self.store.summary()
    }

    /// Category ids in on-screen order: each section in turn, then any
    /// categories with an unknown group
    pub fn rows(&self) -> Vec<CategoryId> {
        let budget = self.store.budget();
        Group::SECTION_ORDER
            .into_iter()
            .flat_map(|group| budget.in_group(group).map(|c| c.id))
            .chain(budget.unassigned().map(|c| c.id))
            .collect()
    }

    pub fn selected_id(&self) -> Option<CategoryId> {
        self.rows().get(self.selected_index).copied()
    }

    pub fn selected_category(&self) -> Option<&Category> {
        self.selected_id().and_then(|id| self.store.budget().find(id))
    }

    /// Group that `a` adds to: the selected row's, or Needs
    pub fn selected_group(&self) -> Group {
        self.selected_category()
            .and_then(Category::known_group)
            .unwrap_or(Group::Needs)
    }

    pub fn select(&mut self, id: CategoryId) {
        if let Some(index) = self.rows().iter().position(|row| *row == id) {
            self.selected_index = index;
        }
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        let count = self.rows().len();
        if self.selected_index < count.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.rows().len();
        self.selected_index = self.selected_index.min(count.saturating_sub(1));
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Count down and clear the status message
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        if let ActiveDialog::Edit(target) = dialog {
            self.input = TextInput::new()
                .label(self.edit_label(target))
                .content(self.edit_initial_value(target))
                .focused(true);
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Open the editor for one field of the selected category
    pub fn edit_selected(&mut self, field: CategoryField) {
        match self.selected_id() {
            Some(id) => self.open_dialog(ActiveDialog::Edit(EditTarget::Category(id, field))),
            None => self.set_status("No item selected"),
        }
    }

    /// Append a new item to `group`, select it and start naming it
    pub fn add_to(&mut self, group: Group) {
        let id = self.store.add_category(group);
        self.select(id);
        self.set_status(format!("Added item to {}", group.title()));
        self.open_dialog(ActiveDialog::Edit(EditTarget::Category(id, CategoryField::Name)));
    }

    /// Ask before deleting the selected category
    pub fn request_delete(&mut self) {
        match self.selected_id() {
            Some(id) => self.open_dialog(ActiveDialog::ConfirmDelete(id)),
            None => self.set_status("No item selected"),
        }
    }

    /// Answer the delete confirmation
    pub fn resolve_delete(&mut self, confirmed: bool) {
        if let ActiveDialog::ConfirmDelete(id) = self.active_dialog {
            if self.store.delete_category(id, &mut Answer(confirmed)) {
                self.clamp_selection();
                self.set_status("Item deleted");
            }
        }
        self.close_dialog();
    }

    /// Apply the edit dialog's text
    pub fn commit_edit(&mut self) {
        let ActiveDialog::Edit(target) = self.active_dialog else {
            return;
        };
        let value = self.input.value().to_string();

        match target {
            EditTarget::Income => {
                self.store.set_income_input(&value);
                let income = self.store.currency().format(self.store.income());
                self.set_status(format!("Income set to {}", income));
            }
            EditTarget::Category(id, field) => {
                if !self.store.update_category(id, field, &value) {
                    self.set_status(format!("Could not update {}", field));
                }
            }
        }

        self.close_dialog();
    }

    pub fn cycle_currency(&mut self) {
        let currency = self.store.cycle_currency();
        self.set_status(format!("Currency: {} ({})", currency.symbol(), currency.iso_code()));
    }

    /// Title shown on the edit dialog
    pub fn edit_title(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Income => "Monthly income".to_string(),
            EditTarget::Category(id, _) => self
                .store
                .budget()
                .find(id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Item".to_string()),
        }
    }

    fn edit_label(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Income => format!("Income ({})", self.store.currency().symbol()),
            EditTarget::Category(_, CategoryField::Name) => "Name".to_string(),
            EditTarget::Category(_, CategoryField::Planned) => "Planned".to_string(),
            EditTarget::Category(_, CategoryField::Actual) => "Actual".to_string(),
            EditTarget::Category(_, CategoryField::Group) => "Group".to_string(),
        }
    }

    fn edit_initial_value(&self, target: EditTarget) -> String {
        match target {
            EditTarget::Income => self.store.income().to_string(),
            EditTarget::Category(id, field) => {
                let Some(category) = self.store.budget().find(id) else {
                    return String::new();
                };
                match field {
                    CategoryField::Name => category.name.clone(),
                    CategoryField::Planned => category.planned.to_string(),
                    CategoryField::Actual => category.actual.to_string(),
                    CategoryField::Group => category.group.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn app() -> App<MemoryStore> {
        App::new(BudgetStore::open(MemoryStore::new()), Settings::default())
    }

    #[test]
    fn test_rows_follow_section_order() {
        let app = app();
        let ids: Vec<u64> = app.rows().iter().map(|id| id.value()).collect();
        // Needs, then Investments, then Wants
        assert_eq!(ids, vec![1, 2, 3, 8, 9, 12]);
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = app();
        app.move_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.selected_index, 5);
        assert_eq!(app.selected_group(), Group::Wants);
    }

    #[test]
    fn test_add_opens_name_editor() {
        let mut app = app();
        app.add_to(Group::Savings);
        let selected = app.selected_category().unwrap();
        assert_eq!(selected.name, "New Item");
        assert!(selected.is_in(Group::Savings));
        assert!(matches!(
            app.active_dialog,
            ActiveDialog::Edit(EditTarget::Category(_, CategoryField::Name))
        ));
        assert_eq!(app.input.value(), "New Item");
    }

    #[test]
    fn test_commit_income_edit() {
        let mut app = app();
        app.open_dialog(ActiveDialog::Edit(EditTarget::Income));
        assert_eq!(app.input.value(), "3000");
        app.input.clear();
        for c in "4500".chars() {
            app.input.insert(c);
        }
        app.commit_edit();
        assert_eq!(app.store.income(), 4500.0);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_delete_resolution() {
        let mut app = app();
        app.selected_index = 5;
        app.request_delete();
        app.resolve_delete(false);
        assert_eq!(app.rows().len(), 6);

        app.request_delete();
        app.resolve_delete(true);
        assert_eq!(app.rows().len(), 5);
        assert_eq!(app.selected_index, 4);
    }

    #[test]
    fn test_status_expires() {
        let mut app = app();
        app.set_status("hello");
        for _ in 0..STATUS_TICKS {
            app.tick();
        }
        assert!(app.status_message.is_none());
    }
}
