//! Create/edit campaign modal.
//!
//! # Design
//! - One form serves both modes; fields re-initialize when the passed-in
//!   campaign identity changes.
//! - Validation runs client-side before any network call; server field
//!   errors attach to the same inline slots on failure.
//! - The submit control stays disabled while the request is in flight.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, load_token};
use crate::core::logic::{
    CampaignFormErrors, form_errors_from_fields, suffix_preview, validate_campaign_form,
};
use crate::core::store::{AppStore, push_toast};
use crate::features::campaigns::actions::save_success_message;
use crate::features::campaigns::state::CampaignRow;
use crate::models::{CountryOption, ToastKind};
use linklift_api_models::Campaign;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct CampaignFormModalProps {
    pub open: bool,
    /// Row being edited; `None` means create mode.
    pub campaign: Option<CampaignRow>,
    pub countries: Vec<CountryOption>,
    pub on_close: Callback<()>,
    /// Saved campaign plus whether this was an edit.
    pub on_saved: Callback<(Campaign, bool)>,
}

#[function_component(CampaignFormModal)]
pub(crate) fn campaign_form_modal(props: &CampaignFormModalProps) -> Html {
    let original_url = use_state(String::new);
    let country = use_state(String::new);
    let suffix_keys = use_state(|| vec![String::new()]);
    let errors = use_state(CampaignFormErrors::default);
    let busy = use_state(|| false);
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    let is_edit = props.campaign.is_some();

    {
        let original_url = original_url.clone();
        let country = country.clone();
        let suffix_keys = suffix_keys.clone();
        let errors = errors.clone();
        let campaign = props.campaign.clone();
        use_effect_with_deps(
            move |_| {
                match campaign {
                    Some(campaign) => {
                        original_url.set(campaign.original_url);
                        country.set(campaign.country);
                        suffix_keys.set(if campaign.url_suffix.is_empty() {
                            vec![String::new()]
                        } else {
                            campaign.url_suffix
                        });
                    }
                    None => {
                        original_url.set(String::new());
                        country.set(String::new());
                        suffix_keys.set(vec![String::new()]);
                    }
                }
                errors.set(CampaignFormErrors::default());
                || ()
            },
            (
                props.open,
                props.campaign.as_ref().map(|campaign| campaign.id.clone()),
            ),
        );
    }

    let submit = {
        let original_url = original_url.clone();
        let country = country.clone();
        let suffix_keys = suffix_keys.clone();
        let errors = errors.clone();
        let busy = busy.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let campaign_id = props.campaign.as_ref().map(|campaign| campaign.id.clone());
        let on_saved = props.on_saved.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = match validate_campaign_form(&original_url, &country, &suffix_keys) {
                Ok(payload) => {
                    errors.set(CampaignFormErrors::default());
                    payload
                }
                Err(found) => {
                    errors.set(found);
                    return;
                }
            };
            busy.set(true);
            let original_url = original_url.clone();
            let country = country.clone();
            let suffix_keys = suffix_keys.clone();
            let errors = errors.clone();
            let busy = busy.clone();
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let campaign_id = campaign_id.clone();
            let on_saved = on_saved.clone();
            let on_close = on_close.clone();
            yew::platform::spawn_local(async move {
                let is_edit = campaign_id.is_some();
                let result = match &campaign_id {
                    Some(id) => client.update_campaign(id, &payload).await,
                    None => client.create_campaign(&payload).await,
                };
                match result {
                    Ok(saved) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(
                                &mut store.toasts,
                                ToastKind::Success,
                                save_success_message(is_edit),
                            );
                        });
                        on_saved.emit((saved, is_edit));
                        if !is_edit {
                            original_url.set(String::new());
                            country.set(String::new());
                            suffix_keys.set(vec![String::new()]);
                        }
                        on_close.emit(());
                    }
                    Err(err) if err.is_conflict() && !is_edit => {
                        dispatch.reduce_mut(|store| {
                            push_toast(
                                &mut store.toasts,
                                ToastKind::Error,
                                "A campaign with this URL already exists.",
                            );
                        });
                    }
                    Err(err) if !err.field_errors.is_empty() => {
                        errors.set(form_errors_from_fields(&err.field_errors));
                    }
                    Err(err) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(&mut store.toasts, ToastKind::Error, err.message);
                        });
                    }
                }
                busy.set(false);
            });
        })
    };

    if !props.open {
        return html! {};
    }

    let field_error = |message: &Option<String>| {
        message.as_ref().map_or_else(
            || html! {},
            |message| html! { <p class="error-text">{message.clone()}</p> },
        )
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="card modal">
                <header class="modal-header">
                    <h3>{if is_edit { "Edit Campaign" } else { "Create Campaign" }}</h3>
                    <button
                        class="ghost"
                        aria-label="Close"
                        onclick={{
                            let on_close = props.on_close.clone();
                            Callback::from(move |_| on_close.emit(()))
                        }}
                    >
                        {"✕"}
                    </button>
                </header>
                <form onsubmit={submit}>
                    <label class="stack">
                        <span>{"Original URL"}</span>
                        <input
                            type="url"
                            placeholder="https://example.com"
                            value={(*original_url).clone()}
                            oninput={{
                                let original_url = original_url.clone();
                                Callback::from(move |e: InputEvent| {
                                    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                        original_url.set(input.value());
                                    }
                                })
                            }}
                        />
                        {field_error(&errors.original_url)}
                    </label>
                    <label class="stack">
                        <span>{"Country"}</span>
                        <select
                            onchange={{
                                let country = country.clone();
                                Callback::from(move |e: Event| {
                                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                                        country.set(select.value());
                                    }
                                })
                            }}
                        >
                            <option value="" selected={country.is_empty()} disabled=true>
                                {"Select country"}
                            </option>
                            {for props.countries.iter().map(|option| html! {
                                <option
                                    value={option.code.clone()}
                                    selected={*country == option.code}
                                >
                                    {option.label.clone()}
                                </option>
                            })}
                        </select>
                        {field_error(&errors.country)}
                    </label>
                    <div class="suffix-keys">
                        <div class="suffix-header">
                            <span>{"URL Suffix Keys"}</span>
                            <button
                                type="button"
                                class="ghost"
                                onclick={{
                                    let suffix_keys = suffix_keys.clone();
                                    Callback::from(move |_| {
                                        let mut next = (*suffix_keys).clone();
                                        next.push(String::new());
                                        suffix_keys.set(next);
                                    })
                                }}
                            >
                                {"Add More"}
                            </button>
                        </div>
                        {if suffix_keys.is_empty() {
                            html! { <p class="muted">{"No URL suffix keys"}</p> }
                        } else {
                            suffix_keys.iter().enumerate().map(|(index, key)| html! {
                                <div class="suffix-row" key={index}>
                                    <input
                                        placeholder="Key (e.g., irclickid)"
                                        value={key.clone()}
                                        oninput={{
                                            let suffix_keys = suffix_keys.clone();
                                            Callback::from(move |e: InputEvent| {
                                                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                    let mut next = (*suffix_keys).clone();
                                                    next[index] = input.value();
                                                    suffix_keys.set(next);
                                                }
                                            })
                                        }}
                                    />
                                    <button
                                        type="button"
                                        class="ghost danger"
                                        aria-label="Remove key"
                                        onclick={{
                                            let suffix_keys = suffix_keys.clone();
                                            Callback::from(move |_| {
                                                let mut next = (*suffix_keys).clone();
                                                next.remove(index);
                                                suffix_keys.set(next);
                                            })
                                        }}
                                    >
                                        {"✕"}
                                    </button>
                                </div>
                            }).collect::<Html>()
                        }}
                        {field_error(&errors.url_suffix)}
                        {if suffix_keys.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <div class="preview">
                                    <span class="muted">{"Preview:"}</span>
                                    <code class="break-all">{suffix_preview(&suffix_keys)}</code>
                                </div>
                            }
                        }}
                    </div>
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
                            {match (is_edit, *busy) {
                                (true, true) => "Updating...",
                                (true, false) => "Update Campaign",
                                (false, true) => "Creating...",
                                (false, false) => "Create Campaign",
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
