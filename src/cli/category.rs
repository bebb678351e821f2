//! Category CLI commands
//!
//! Implements CLI commands for listing, adding, editing and deleting
//! categories.

use clap::Subcommand;

use super::prompt::StdinConfirm;
use crate::config::Settings;
use crate::display::category::{format_category_details, format_category_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{CategoryField, CategoryId, Group};
use crate::services::{Answer, BudgetStore, Confirm};
use crate::storage::KeyValueStore;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories with their ids
    List,

    /// Add a category to a group
    Add {
        /// Group: needs, wants or savings (investments)
        group: String,
        /// Name (defaults to "New Item")
        #[arg(short, long)]
        name: Option<String>,
        /// Planned amount
        #[arg(short, long)]
        planned: Option<String>,
        /// Actual amount
        #[arg(short, long)]
        actual: Option<String>,
    },

    /// Change one field of a category
    Set {
        /// Category ID
        id: String,
        /// Field: name, planned, actual or group
        field: String,
        /// New value
        value: String,
    },

    /// Delete a category
    Delete {
        /// Category ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a category command
pub fn handle_category_command<S: KeyValueStore>(
    store: &mut BudgetStore<S>,
    settings: &Settings,
    cmd: CategoryCommands,
) -> BudgetResult<()> {
    let currency = store.currency();

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(store.categories(), currency));
        }

        CategoryCommands::Add {
            group,
            name,
            planned,
            actual,
        } => {
            let group: Group = group
                .parse()
                .map_err(|e: crate::models::group::GroupParseError| {
                    BudgetError::Validation(e.to_string())
                })?;

            let id = store.add_category(group);
            let edits = [
                (CategoryField::Name, name),
                (CategoryField::Planned, planned),
                (CategoryField::Actual, actual),
            ];
            for (field, value) in edits {
                if let Some(value) = value {
                    store.try_update_category(id, field, &value)?;
                }
            }

            let category = store
                .budget()
                .find(id)
                .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;
            println!("Added category to {}", group.title());
            print!("{}", format_category_details(category, currency));
        }

        CategoryCommands::Set { id, field, value } => {
            let id = parse_id(&id)?;
            let field: CategoryField = field
                .parse()
                .map_err(|e: crate::models::CategoryEditError| {
                    BudgetError::Validation(e.to_string())
                })?;

            let updated = store.try_update_category(id, field, &value)?;
            println!("Updated {} of '{}'", field, updated.name);
            print!("{}", format_category_details(updated, currency));
        }

        CategoryCommands::Delete { id, yes } => {
            let id = parse_id(&id)?;
            let name = store
                .budget()
                .find(id)
                .map(|c| c.name.clone())
                .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;

            let mut confirm: Box<dyn Confirm> = if yes || !settings.confirm_deletes {
                Box::new(Answer(true))
            } else {
                Box::new(StdinConfirm)
            };

            if store.delete_category(id, confirm.as_mut()) {
                println!("Deleted category: {}", name);
            } else {
                println!("Aborted.");
            }
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> BudgetResult<CategoryId> {
    raw.parse()
        .map_err(|_| BudgetError::Validation(format!("Invalid category id '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> BudgetStore<MemoryStore> {
        BudgetStore::open(MemoryStore::new())
    }

    #[test]
    fn test_add_with_fields() {
        let mut store = store();
        let cmd = CategoryCommands::Add {
            group: "investments".into(),
            name: Some("Pension".into()),
            planned: Some("150".into()),
            actual: Some("12x".into()),
        };
        handle_category_command(&mut store, &Settings::default(), cmd).unwrap();

        let added = store.categories().last().unwrap();
        assert_eq!(added.name, "Pension");
        assert!(added.is_in(Group::Savings));
        assert_eq!(added.planned, 150.0);
        assert_eq!(added.actual, 12.0);
    }

    #[test]
    fn test_add_unknown_group_is_validation_error() {
        let mut store = store();
        let cmd = CategoryCommands::Add {
            group: "bills".into(),
            name: None,
            planned: None,
            actual: None,
        };
        let err = handle_category_command(&mut store, &Settings::default(), cmd).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.categories().len(), 6);
    }

    #[test]
    fn test_set_and_errors() {
        let mut store = store();
        let cmd = CategoryCommands::Set {
            id: "3".into(),
            field: "actual".into(),
            value: "abc".into(),
        };
        handle_category_command(&mut store, &Settings::default(), cmd).unwrap();
        assert_eq!(store.budget().find(CategoryId::new(3)).unwrap().actual, 0.0);

        let cmd = CategoryCommands::Set {
            id: "404".into(),
            field: "name".into(),
            value: "x".into(),
        };
        let err = handle_category_command(&mut store, &Settings::default(), cmd).unwrap_err();
        assert!(err.is_not_found());

        let cmd = CategoryCommands::Set {
            id: "3".into(),
            field: "colour".into(),
            value: "red".into(),
        };
        let err = handle_category_command(&mut store, &Settings::default(), cmd).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_delete_with_yes() {
        let mut store = store();
        let cmd = CategoryCommands::Delete {
            id: "#12".into(),
            yes: true,
        };
        handle_category_command(&mut store, &Settings::default(), cmd).unwrap();
        assert!(store.budget().find(CategoryId::new(12)).is_none());
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = store();
        let cmd = CategoryCommands::Delete {
            id: "7".into(),
            yes: true,
        };
        let err = handle_category_command(&mut store, &Settings::default(), cmd).unwrap_err();
        assert!(err.is_not_found());
        assert!(parse_id("abc").unwrap_err().is_validation());
    }
}
