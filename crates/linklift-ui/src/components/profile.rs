//! Admin profile page with the change-password flow.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, load_token};
use crate::core::logic::{format_timestamp, password_checklist, validate_change_password};
use crate::core::store::{AppStore, push_toast};
use crate::models::ToastKind;
use linklift_api_models::{AdminProfile, ChangePasswordRequest};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let profile = use_state(|| None as Option<AdminProfile>);
    let loading = use_state(|| true);
    let modal_open = use_state(|| false);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    {
        let profile = profile.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_profile().await {
                        Ok(found) => profile.set(Some(found)),
                        Err(err) => dispatch.reduce_mut(|store| {
                            push_toast(&mut store.toasts, ToastKind::Error, err.message);
                        }),
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |()| modal_open.set(false))
    };

    html! {
        <div class="profile">
            <div class="card">
                <h3>{"Profile"}</h3>
                {if *loading {
                    html! { <p class="muted">{"Loading..."}</p> }
                } else if let Some(profile) = (*profile).clone() {
                    html! {
                        <div class="meta-grid">
                            <div>
                                <span class="muted">{"Email"}</span>
                                <strong>{profile.email.clone()}</strong>
                            </div>
                            <div>
                                <span class="muted">{"Name"}</span>
                                <strong>{profile.name.clone().unwrap_or_else(|| "Admin".to_string())}</strong>
                            </div>
                            <div>
                                <span class="muted">{"Last login"}</span>
                                <strong>
                                    {profile.last_login.as_ref().map_or_else(
                                        || "Never".to_string(),
                                        format_timestamp,
                                    )}
                                </strong>
                            </div>
                        </div>
                    }
                } else {
                    html! { <p class="muted">{"Profile unavailable."}</p> }
                }}
                <button class="solid" onclick={open_modal}>{"Change Password"}</button>
            </div>
            {if *modal_open {
                html! { <ChangePasswordModal on_close={close_modal} /> }
            } else {
                html! {}
            }}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChangePasswordModalProps {
    on_close: Callback<()>,
}

#[function_component(ChangePasswordModal)]
fn change_password_modal(props: &ChangePasswordModalProps) -> Html {
    let current = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None as Option<String>);
    let busy = use_state(|| false);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    let checklist = password_checklist(&new_password, &confirm);

    let submit = {
        let current = current.clone();
        let new_password = new_password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let busy = busy.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Err(err) = validate_change_password(&current, &new_password, &confirm) {
                error.set(Some(err.message().to_string()));
                return;
            }
            busy.set(true);
            error.set(None);
            let request = ChangePasswordRequest {
                current_password: (*current).clone(),
                new_password: (*new_password).clone(),
            };
            let error = error.clone();
            let busy = busy.clone();
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let on_close = on_close.clone();
            yew::platform::spawn_local(async move {
                match client.change_password(&request).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(
                                &mut store.toasts,
                                ToastKind::Success,
                                "Password changed successfully!",
                            );
                        });
                        on_close.emit(());
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                busy.set(false);
            });
        })
    };

    let password_field = |label: &'static str,
                         value: &UseStateHandle<String>,
                         autocomplete: &'static str| {
        let value = value.clone();
        html! {
            <label class="stack">
                <span>{label}</span>
                <input
                    type="password"
                    autocomplete={autocomplete}
                    value={(*value).clone()}
                    oninput={Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                            value.set(input.value());
                        }
                    })}
                />
            </label>
        }
    };

    let rule = |ok: bool, label: &'static str| {
        html! {
            <li class={if ok { "ok" } else { "muted" }}>{label}</li>
        }
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="card modal">
                <h3>{"Change Password"}</h3>
                <form onsubmit={submit}>
                    {password_field("Current password", &current, "current-password")}
                    {password_field("New password", &new_password, "new-password")}
                    {password_field("Confirm new password", &confirm, "new-password")}
                    <ul class="password-rules">
                        {rule(checklist.length, "At least 8 characters")}
                        {rule(checklist.lowercase, "A lowercase letter")}
                        {rule(checklist.uppercase, "An uppercase letter")}
                        {rule(checklist.digit, "A number")}
                        {rule(checklist.special, "A special character")}
                        {rule(checklist.matches, "Passwords match")}
                    </ul>
                    {if let Some(message) = &*error {
                        html! { <p class="error-text">{message.clone()}</p> }
                    } else {
                        html! {}
                    }}
                    <div class="actions">
                        <button
                            type="button"
                            class="ghost"
                            disabled={*busy}
                            onclick={{
                                let on_close = props.on_close.clone();
                                Callback::from(move |_| on_close.emit(()))
                            }}
                        >
                            {"Cancel"}
                        </button>
                        <button class="solid" type="submit" disabled={*busy}>
                            {if *busy { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
