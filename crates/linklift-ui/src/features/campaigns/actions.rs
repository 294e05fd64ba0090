//! Campaign row actions and display helpers.

/// Row actions emitted from the campaign table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    /// Navigate to the campaign detail view.
    View,
    /// Open the edit form pre-populated with the row.
    Edit,
    /// Open the delete confirmation dialog.
    Delete,
}

/// Toast copy for a settled active toggle.
#[must_use]
pub fn toggle_success_message(now_active: bool) -> String {
    if now_active {
        "Campaign activated successfully!".to_string()
    } else {
        "Campaign deactivated successfully!".to_string()
    }
}

/// Toast copy for a saved campaign form.
#[must_use]
pub const fn save_success_message(is_edit: bool) -> &'static str {
    if is_edit {
        "Campaign updated successfully!"
    } else {
        "Campaign created!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_messages_switch_on_direction() {
        assert_ne!(toggle_success_message(true), toggle_success_message(false));
        assert!(toggle_success_message(true).contains("activated"));
    }

    #[test]
    fn save_messages_switch_on_mode() {
        assert_ne!(save_success_message(true), save_success_message(false));
    }
}
