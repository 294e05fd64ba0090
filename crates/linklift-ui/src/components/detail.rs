//! Campaign detail view: metadata plus the latest generated URL.
//!
//! # Design
//! - The campaign fetch decides the page; the latest-URL fetch rides along
//!   on the public path and its failure is swallowed. An absent generated
//!   URL is a normal, displayable state.
//! - The generate action is blocked outright while the campaign is
//!   inactive.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, load_token};
use crate::core::logic::{format_timestamp, join_generated_url};
use crate::core::store::{AppStore, push_toast};
use crate::features::campaigns::state::CampaignRow;
use crate::models::ToastKind;
use gloo::console;
use gloo::utils::window;
use linklift_api_models::{GenerateUrlRequest, GeneratedUrlLatest};
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct CampaignDetailProps {
    /// URL-encoded original URL from the route.
    pub original_url: String,
}

#[function_component(CampaignDetailPage)]
pub(crate) fn campaign_detail_page(props: &CampaignDetailProps) -> Html {
    let campaign = use_state(|| None as Option<CampaignRow>);
    let latest = use_state(GeneratedUrlLatest::default);
    let loading = use_state(|| true);
    let generating = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    let decoded_url = urlencoding::decode(&props.original_url)
        .map_or_else(|_| props.original_url.clone(), |url| url.into_owned());

    {
        let campaign = campaign.clone();
        let latest = latest.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let decoded_url = decoded_url.clone();
        use_effect_with_deps(
            move |_| {
                loading.set(true);
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_campaign_by_url(&decoded_url).await {
                        Ok(found) => {
                            let row = CampaignRow::from(found);
                            match client.fetch_latest_generated_url(&row.id).await {
                                Ok(fresh) => latest.set(fresh),
                                Err(err) => {
                                    console::warn!("latest generated URL fetch failed", err.message);
                                    latest.set(GeneratedUrlLatest::default());
                                }
                            }
                            campaign.set(Some(row));
                        }
                        Err(err) => {
                            campaign.set(None);
                            dispatch.reduce_mut(|store| {
                                push_toast(&mut store.toasts, ToastKind::Error, err.message);
                            });
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            props.original_url.clone(),
        );
    }

    let on_back = Callback::from(move |_| {
        if let Some(navigator) = navigator.clone() {
            navigator.back();
        }
    });

    if *loading {
        return html! {
            <div class="detail-loading">
                <span class="spinner" aria-hidden="true"></span>
                <p class="muted">{"Loading..."}</p>
            </div>
        };
    }

    let Some(row) = (*campaign).clone() else {
        return html! { <p class="error-text centered">{"Campaign not found."}</p> };
    };

    let full_url = latest
        .generate_suffix
        .as_ref()
        .map(|suffix| join_generated_url(&row.original_url, suffix));

    let on_generate = {
        let row = row.clone();
        let latest = latest.clone();
        let generating = generating.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |_| {
            if !row.is_active {
                dispatch.reduce_mut(|store| {
                    push_toast(
                        &mut store.toasts,
                        ToastKind::Error,
                        "Campaign is inactive. Cannot generate URLs.",
                    );
                });
                return;
            }
            generating.set(true);
            let request = GenerateUrlRequest {
                campaign_id: row.id.clone(),
                base_generate_url: row.original_url.clone(),
                country: row.country.clone(),
            };
            let campaign_id = row.id.clone();
            let latest = latest.clone();
            let generating = generating.clone();
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            yew::platform::spawn_local(async move {
                match client.generate_url(&request).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|store| {
                            push_toast(
                                &mut store.toasts,
                                ToastKind::Success,
                                "URL generated successfully!",
                            );
                        });
                        if let Ok(fresh) = client.fetch_latest_generated_url(&campaign_id).await {
                            latest.set(fresh);
                        }
                    }
                    Err(err) => dispatch.reduce_mut(|store| {
                        push_toast(&mut store.toasts, ToastKind::Error, err.message);
                    }),
                }
                generating.set(false);
            });
        })
    };

    let on_copy = full_url.clone().map(|url| {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            let url = url.clone();
            let dispatch = dispatch.clone();
            yew::platform::spawn_local(async move {
                let promise = window().navigator().clipboard().write_text(&url);
                let (kind, message) = match JsFuture::from(promise).await {
                    Ok(_) => (ToastKind::Success, "URL copied to clipboard!"),
                    Err(_) => (ToastKind::Error, "Failed to copy URL"),
                };
                dispatch.reduce_mut(|store| {
                    push_toast(&mut store.toasts, kind, message);
                });
            });
        })
    });

    html! {
        <div class="campaign-detail">
            <button class="ghost" onclick={on_back}>{"← Back"}</button>
            <div class="card">
                <h3>{"Campaign Details"}</h3>
                <div class="meta-grid">
                    <div>
                        <span class="muted">{"Original URL"}</span>
                        <a
                            class="break-all"
                            href={row.original_url.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {row.original_url.clone()}
                        </a>
                    </div>
                    <div>
                        <span class="muted">{"Country"}</span>
                        <strong>{row.country.clone()}</strong>
                    </div>
                    <div>
                        <span class="muted">{"Status"}</span>
                        <strong class={if row.is_active { "ok" } else { "danger" }}>
                            {if row.is_active { "Active" } else { "Inactive" }}
                        </strong>
                    </div>
                </div>

                <div class="generate-row">
                    <button
                        class="solid"
                        onclick={on_generate}
                        disabled={*generating || !row.is_active}
                    >
                        {if *generating { "Generating..." } else { "Generate URL" }}
                    </button>
                    {if row.is_active {
                        html! {}
                    } else {
                        html! {
                            <p class="error-text">
                                {"Campaign is inactive. Cannot generate URLs."}
                            </p>
                        }
                    }}
                </div>

                {if let Some(full_url) = full_url {
                    html! {
                        <div class="latest-url">
                            <h4>{"Latest Generated URL"}</h4>
                            <code class="break-all">{full_url}</code>
                            <div class="meta-grid">
                                <div>
                                    <span class="muted">{"Proxy IP"}</span>
                                    <strong>{latest.proxy_ip.clone().unwrap_or_else(|| "–".to_string())}</strong>
                                </div>
                                <div>
                                    <span class="muted">{"Generated"}</span>
                                    <strong>
                                        {latest.created_at.as_ref().map_or_else(
                                            || "–".to_string(),
                                            format_timestamp,
                                        )}
                                    </strong>
                                </div>
                                <div>
                                    {on_copy.map_or_else(
                                        || html! {},
                                        |on_copy| html! {
                                            <button class="ghost" onclick={on_copy}>{"Copy URL"}</button>
                                        },
                                    )}
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div class="latest-url">
                            <h4>{"Generated URL"}</h4>
                            <p class="muted">{"No URL generated yet."}</p>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
