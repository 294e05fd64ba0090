//! Mount-time session gate for protected routes.
//!
//! # Design
//! - No stored token means an immediate redirect with zero network calls.
//! - With a token present, a single validation probe decides the gate; the
//!   guarded tree and the login redirect never flash while it is in flight.
//! - Session state lives in the shared store so every consumer observes
//!   logout on the next render.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, clear_token_storage, load_token};
use crate::app::Route;
use crate::core::auth::{SessionPhase, SessionToken};
use crate::core::store::{AppStore, clear_session, set_session};
use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct SessionGuardProps {
    pub children: Children,
}

#[function_component(SessionGuard)]
pub(crate) fn session_guard(props: &SessionGuardProps) -> Html {
    let phase = use_selector(|store: &AppStore| store.session.phase);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                match load_token().and_then(SessionToken::new) {
                    None => dispatch.reduce_mut(|store| clear_session(&mut store.session)),
                    Some(token) => {
                        let client = api_ctx.client.clone();
                        yew::platform::spawn_local(async move {
                            match client.validate_session().await {
                                Ok(()) => dispatch.reduce_mut(|store| {
                                    set_session(&mut store.session, token);
                                }),
                                Err(_) => {
                                    clear_token_storage();
                                    dispatch.reduce_mut(|store| {
                                        clear_session(&mut store.session);
                                    });
                                }
                            }
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    match *phase {
        SessionPhase::Validating => html! {
            <div class="session-validating">
                <span class="spinner" aria-hidden="true"></span>
                <p class="muted">{"Validating session..."}</p>
            </div>
        },
        SessionPhase::Invalid => html! { <Redirect<Route> to={Route::Login} /> },
        SessionPhase::Valid => html! { <>{ for props.children.iter() }</> },
    }
}
