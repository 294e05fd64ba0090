//! Shared campaign models and pure state transformations for testing
//! outside wasm.

use crate::core::logic::{StatusFilter, format_timestamp};
use chrono::{DateTime, Utc};
use linklift_api_models::{Campaign, Pagination};
use std::collections::HashMap;
use std::rc::Rc;

/// UI-friendly campaign snapshot used across list/state helpers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampaignRow {
    /// Opaque server-assigned identifier.
    pub id: String,
    /// Destination URL the campaign redirects to.
    pub original_url: String,
    /// Target country code.
    pub country: String,
    /// Suffix keys used at generation time.
    pub url_suffix: Vec<String>,
    /// Whether URL generation is permitted.
    pub is_active: bool,
    /// Server-assigned creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

impl CampaignRow {
    /// Creation timestamp rendered for the table, or an en dash.
    #[must_use]
    pub fn created_label(&self) -> String {
        self.created_at
            .as_ref()
            .map_or_else(|| "–".to_string(), format_timestamp)
    }
}

impl From<Campaign> for CampaignRow {
    fn from(value: Campaign) -> Self {
        Self {
            id: value.id,
            original_url: value.original_url,
            country: value.country,
            url_suffix: value.url_suffix,
            is_active: value.is_active,
            created_at: value.created_at,
        }
    }
}

/// Filter state for the campaign list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignFilters {
    /// Debounced search term used as the query parameter.
    pub search: String,
    /// Status constraint.
    pub status: StatusFilter,
}

/// Current campaigns slice stored in the app state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignsState {
    /// Map of campaign rows by id.
    pub by_id: HashMap<String, Rc<CampaignRow>>,
    /// Ordered list of visible campaign ids for the current page.
    pub visible_ids: Vec<String>,
    /// Server-echoed pagination for the current page.
    pub pagination: Pagination,
    /// Active filter state used for fetching.
    pub filters: CampaignFilters,
    /// Monotonic per-row version for in-flight active toggles. A toggle
    /// response only settles state while its captured epoch is current.
    pub toggle_epoch: HashMap<String, u64>,
    /// Whether a list fetch is in flight.
    pub loading: bool,
}

/// Capture of an optimistic toggle, used to settle or revert it later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleTicket {
    /// Row the toggle applies to.
    pub id: String,
    /// Epoch current when the toggle was issued.
    pub epoch: u64,
    /// Active flag requested by this toggle.
    pub requested: bool,
}

/// Replace the page rows and pagination echo with a fresh snapshot.
pub fn set_page(state: &mut CampaignsState, rows: Vec<CampaignRow>, pagination: Pagination) {
    state.visible_ids = rows.iter().map(|row| row.id.clone()).collect();
    state.by_id = rows
        .into_iter()
        .map(|row| (row.id.clone(), Rc::new(row)))
        .collect();
    state.pagination = pagination;
    state
        .toggle_epoch
        .retain(|id, _| state.by_id.contains_key(id));
}

/// Merge a saved campaign into the current page by id, leaving the row
/// untouched when it is not on this page.
pub fn merge_row(state: &mut CampaignsState, row: CampaignRow) {
    if state.by_id.contains_key(&row.id) {
        state.by_id.insert(row.id.clone(), Rc::new(row));
    }
}

/// Flip a row's active flag optimistically and bump its epoch. Returns the
/// ticket the response handler needs, or `None` for an unknown row.
pub fn begin_toggle(state: &mut CampaignsState, id: &str) -> Option<ToggleTicket> {
    let current = state.by_id.get(id)?;
    let mut next = (**current).clone();
    next.is_active = !next.is_active;
    let requested = next.is_active;
    state.by_id.insert(id.to_string(), Rc::new(next));
    let epoch = state
        .toggle_epoch
        .entry(id.to_string())
        .and_modify(|epoch| *epoch += 1)
        .or_insert(1);
    Some(ToggleTicket {
        id: id.to_string(),
        epoch: *epoch,
        requested,
    })
}

/// Whether a toggle response is still the newest one for its row.
#[must_use]
pub fn toggle_is_current(state: &CampaignsState, ticket: &ToggleTicket) -> bool {
    state.toggle_epoch.get(&ticket.id) == Some(&ticket.epoch)
}

/// Settle a confirmed toggle with the server's row. Stale responses (a newer
/// toggle was issued meanwhile) are discarded.
pub fn commit_toggle(state: &mut CampaignsState, ticket: &ToggleTicket, row: CampaignRow) {
    if toggle_is_current(state, ticket) && state.by_id.contains_key(&ticket.id) {
        state.by_id.insert(ticket.id.clone(), Rc::new(row));
    }
}

/// Revert a failed toggle to the pre-flip value, unless a newer toggle has
/// already superseded it.
pub fn rollback_toggle(state: &mut CampaignsState, ticket: &ToggleTicket) {
    if !toggle_is_current(state, ticket) {
        return;
    }
    if let Some(current) = state.by_id.get(&ticket.id) {
        let mut next = (**current).clone();
        next.is_active = !ticket.requested;
        state.by_id.insert(ticket.id.clone(), Rc::new(next));
    }
}

/// Update the debounced search term, resetting to the first page.
pub fn set_search(state: &mut CampaignsState, search: String) {
    state.filters.search = search;
    state.pagination.current_page = 1;
}

/// Update the status filter, resetting to the first page.
pub fn set_status(state: &mut CampaignsState, status: StatusFilter) {
    state.filters.status = status;
    state.pagination.current_page = 1;
}

/// Read the visible campaign rows in list order.
#[must_use]
pub fn select_visible_rows(state: &CampaignsState) -> Vec<CampaignRow> {
    state
        .visible_ids
        .iter()
        .filter_map(|id| state.by_id.get(id).map(|row| (**row).clone()))
        .collect()
}

/// Read a row by id.
#[must_use]
pub fn select_row(state: &CampaignsState, id: &str) -> Option<Rc<CampaignRow>> {
    state.by_id.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, active: bool) -> CampaignRow {
        CampaignRow {
            id: id.to_string(),
            original_url: format!("https://example.com/{id}"),
            country: "us".into(),
            url_suffix: vec!["ref".into()],
            is_active: active,
            created_at: None,
        }
    }

    fn page(state: &mut CampaignsState, rows: Vec<CampaignRow>) {
        set_page(state, rows, Pagination::default());
    }

    #[test]
    fn set_page_replaces_rows_and_prunes_epochs() {
        let mut state = CampaignsState::default();
        page(&mut state, vec![row("a", true), row("b", true)]);
        begin_toggle(&mut state, "a").unwrap();
        page(&mut state, vec![row("b", true)]);
        assert_eq!(state.visible_ids, vec!["b"]);
        assert!(state.toggle_epoch.is_empty());
    }

    #[test]
    fn toggle_flips_immediately_and_commit_settles() {
        let mut state = CampaignsState::default();
        page(&mut state, vec![row("a", true)]);
        let ticket = begin_toggle(&mut state, "a").unwrap();
        assert!(!select_row(&state, "a").unwrap().is_active);
        assert!(!ticket.requested);
        commit_toggle(&mut state, &ticket, row("a", false));
        assert!(!select_row(&state, "a").unwrap().is_active);
    }

    #[test]
    fn rollback_restores_previous_value() {
        let mut state = CampaignsState::default();
        page(&mut state, vec![row("a", true)]);
        let ticket = begin_toggle(&mut state, "a").unwrap();
        assert!(!select_row(&state, "a").unwrap().is_active);
        rollback_toggle(&mut state, &ticket);
        assert!(select_row(&state, "a").unwrap().is_active);
    }

    #[test]
    fn stale_toggle_responses_are_discarded() {
        let mut state = CampaignsState::default();
        page(&mut state, vec![row("a", true)]);
        let first = begin_toggle(&mut state, "a").unwrap();
        let second = begin_toggle(&mut state, "a").unwrap();
        assert!(select_row(&state, "a").unwrap().is_active);
        // The first request fails late; its rollback must not clobber the
        // state owned by the second request.
        rollback_toggle(&mut state, &first);
        assert!(select_row(&state, "a").unwrap().is_active);
        commit_toggle(&mut state, &first, row("a", false));
        assert!(select_row(&state, "a").unwrap().is_active);
        commit_toggle(&mut state, &second, row("a", true));
        assert!(select_row(&state, "a").unwrap().is_active);
        assert_ne!(first.epoch, second.epoch);
    }

    #[test]
    fn merge_only_touches_rows_on_this_page() {
        let mut state = CampaignsState::default();
        page(&mut state, vec![row("a", true)]);
        let mut edited = row("a", true);
        edited.country = "de".into();
        merge_row(&mut state, edited);
        assert_eq!(select_row(&state, "a").unwrap().country, "de");
        merge_row(&mut state, row("zz", true));
        assert!(select_row(&state, "zz").is_none());
        assert_eq!(state.visible_ids, vec!["a"]);
    }

    #[test]
    fn filter_updates_reset_to_page_one() {
        let mut state = CampaignsState::default();
        state.pagination.current_page = 4;
        set_search(&mut state, "shop".into());
        assert_eq!(state.pagination.current_page, 1);
        state.pagination.current_page = 4;
        set_status(&mut state, crate::core::logic::StatusFilter::Inactive);
        assert_eq!(state.pagination.current_page, 1);
    }

    #[test]
    fn visible_rows_preserve_order() {
        let mut state = CampaignsState::default();
        page(&mut state, vec![row("b", true), row("a", false)]);
        let rows = select_visible_rows(&state);
        assert_eq!(rows[0].id, "b");
        assert_eq!(rows[1].id, "a");
    }

    #[test]
    fn created_label_falls_back_to_dash() {
        assert_eq!(row("a", true).created_label(), "–");
    }
}
