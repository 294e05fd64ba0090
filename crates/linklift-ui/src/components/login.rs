//! Admin login page.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, load_token, persist_token};
use crate::core::auth::SessionToken;
use crate::core::logic::validate_login;
use crate::core::store::{AppStore, push_toast, set_session};
use crate::models::ToastKind;
use linklift_api_models::LoginRequest;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::Dispatch;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);
    let busy = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    let submit = {
        let email = email.clone();
        let password = password.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(err) = validate_login(&email, &password) {
                dispatch.reduce_mut(|store| {
                    push_toast(&mut store.toasts, ToastKind::Error, err.message());
                });
                return;
            }
            busy.set(true);
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let busy = busy.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            yew::platform::spawn_local(async move {
                match client.login(&request).await {
                    Ok(response) => match response.into_token().and_then(SessionToken::new) {
                        Some(token) => {
                            persist_token(token.as_str());
                            client.set_token(Some(token.as_str().to_string()));
                            dispatch.reduce_mut(|store| {
                                set_session(&mut store.session, token);
                                push_toast(
                                    &mut store.toasts,
                                    ToastKind::Success,
                                    "Login successful!",
                                );
                            });
                            if let Some(navigator) = navigator {
                                navigator.push(&Route::Dashboard);
                            }
                        }
                        None => dispatch.reduce_mut(|store| {
                            push_toast(
                                &mut store.toasts,
                                ToastKind::Error,
                                "Login response carried no token",
                            );
                        }),
                    },
                    Err(err) => dispatch.reduce_mut(|store| {
                        push_toast(&mut store.toasts, ToastKind::Error, err.message);
                    }),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="card login-card">
                <header>
                    <h2>{"Admin Login"}</h2>
                    <p class="muted">{"Sign in to access the admin panel"}</p>
                </header>
                <form onsubmit={submit}>
                    <label class="stack">
                        <span>{"Email Address"}</span>
                        <input
                            type="email"
                            autocomplete="username"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        email.set(input.value());
                                    }
                                })
                            }}
                        />
                    </label>
                    <label class="stack">
                        <span>{"Password"}</span>
                        <div class="password-field">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                autocomplete="current-password"
                                placeholder="Enter your password"
                                value={(*password).clone()}
                                oninput={{
                                    let password = password.clone();
                                    Callback::from(move |e: InputEvent| {
                                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                            password.set(input.value());
                                        }
                                    })
                                }}
                            />
                            <button
                                type="button"
                                class="ghost"
                                tabindex="-1"
                                aria-label={if *show_password { "Hide password" } else { "Show password" }}
                                onclick={{
                                    let show_password = show_password.clone();
                                    Callback::from(move |_| show_password.set(!*show_password))
                                }}
                            >
                                {if *show_password { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>
                    <button class="solid" type="submit" disabled={*busy}>
                        {if *busy { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
