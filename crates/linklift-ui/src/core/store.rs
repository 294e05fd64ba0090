//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts; session
//!   state in particular has a single owner so every consumer observes
//!   logout consistently.
//! - Use small, focused slices so reducers stay predictable.

use crate::core::auth::{SessionPhase, SessionToken};
use crate::features::campaigns::state::CampaignsState;
use crate::models::{Toast, ToastKind};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session gate + bearer token state.
    pub session: SessionSlice,
    /// Campaign list state.
    pub campaigns: CampaignsState,
    /// Transient notification state.
    pub toasts: ToastsState,
}

/// Shared session state for the UI.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSlice {
    /// Where the validation gate currently stands.
    pub phase: SessionPhase,
    /// Bearer token for outbound requests, when one exists.
    pub token: Option<SessionToken>,
}

/// Mark the session valid with the given token.
pub fn set_session(slice: &mut SessionSlice, token: SessionToken) {
    slice.token = Some(token);
    slice.phase = SessionPhase::Valid;
}

/// Drop the session; all consumers observe the logout on the next render.
pub fn clear_session(slice: &mut SessionSlice) {
    slice.token = None;
    slice.phase = SessionPhase::Invalid;
}

/// Transient notifications, newest last, capped at four.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastsState {
    /// Visible toasts in arrival order.
    pub items: Vec<Toast>,
    /// Id source for dismissal tracking.
    pub next_id: u64,
}

/// Append a toast, dropping the oldest beyond the cap.
pub fn push_toast(state: &mut ToastsState, kind: ToastKind, message: impl Into<String>) {
    state.next_id += 1;
    state.items.push(Toast {
        id: state.next_id,
        kind,
        message: message.into(),
    });
    if state.items.len() > 4 {
        let drain = state.items.len() - 4;
        state.items.drain(0..drain);
    }
}

/// Remove a toast by id.
pub fn dismiss_toast(state: &mut ToastsState, id: u64) {
    state.items.retain(|toast| toast.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_set_and_clear_round_trip() {
        let mut slice = SessionSlice::default();
        assert_eq!(slice.phase, SessionPhase::Validating);
        set_session(&mut slice, SessionToken::new("jwt").unwrap());
        assert_eq!(slice.phase, SessionPhase::Valid);
        assert_eq!(
            slice.token.as_ref().map(SessionToken::as_str),
            Some("jwt")
        );
        clear_session(&mut slice);
        assert_eq!(slice.phase, SessionPhase::Invalid);
        assert!(slice.token.is_none());
    }

    #[test]
    fn toasts_are_capped_and_dismissable() {
        let mut state = ToastsState::default();
        for n in 0..6 {
            push_toast(&mut state, ToastKind::Info, format!("m{n}"));
        }
        assert_eq!(state.items.len(), 4);
        assert_eq!(state.items.first().unwrap().message, "m2");
        let id = state.items.first().unwrap().id;
        dismiss_toast(&mut state, id);
        assert_eq!(state.items.len(), 3);
        assert!(state.items.iter().all(|toast| toast.id != id));
    }
}
