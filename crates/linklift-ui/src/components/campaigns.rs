//! Campaign list: debounced search, status filter, pagination, and per-row
//! actions.
//!
//! # Design
//! - List state lives in the store slice; this component owns only dialog
//!   and fetch bookkeeping.
//! - Row mutations go through the reducers in `features::campaigns::state`
//!   so optimistic toggles and their rollbacks stay testable.
//! - Deletion is a two-phase flow; each phase failure surfaces copy naming
//!   what survived.

use crate::app::Route;
use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, load_token};
use crate::components::atoms::{EmptyState, SearchInput};
use crate::components::campaign_modal::CampaignFormModal;
use crate::core::logic::{DeleteStep, StatusFilter, delete_failure_message, delete_plan};
use crate::core::store::{AppStore, push_toast};
use crate::features::campaigns::actions::{RowAction, toggle_success_message};
use crate::features::campaigns::state::{
    CampaignRow, begin_toggle, commit_toggle, merge_row, rollback_toggle, select_visible_rows,
    set_page, set_search, set_status,
};
use crate::models::{CountryOption, ToastKind};
use linklift_api_models::Campaign;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(CampaignsPage)]
pub(crate) fn campaigns_page() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));
    let navigator = use_navigator();

    let rows = use_selector(|store: &AppStore| select_visible_rows(&store.campaigns));
    let filters = use_selector(|store: &AppStore| store.campaigns.filters.clone());
    let pagination = use_selector(|store: &AppStore| store.campaigns.pagination.clone());
    let loading = use_selector(|store: &AppStore| store.campaigns.loading);

    let countries = use_state(Vec::<CountryOption>::new);
    let modal_open = use_state(|| false);
    let edit_target = use_state(|| None as Option<CampaignRow>);
    let delete_target = use_state(|| None as Option<CampaignRow>);
    let cascade = use_state(|| false);
    let delete_busy = use_state(|| false);

    let fetch_page = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |page: u32| {
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let filters = dispatch.get().campaigns.filters.clone();
            dispatch.reduce_mut(|store| store.campaigns.loading = true);
            yew::platform::spawn_local(async move {
                match client
                    .fetch_campaigns(page, &filters.search, filters.status)
                    .await
                {
                    Ok(fetched) => dispatch.reduce_mut(|store| {
                        let rows = fetched
                            .campaigns
                            .into_iter()
                            .map(CampaignRow::from)
                            .collect();
                        set_page(&mut store.campaigns, rows, fetched.pagination);
                        store.campaigns.loading = false;
                    }),
                    Err(err) => dispatch.reduce_mut(|store| {
                        store.campaigns.loading = false;
                        push_toast(&mut store.toasts, ToastKind::Error, err.message);
                    }),
                }
            });
        })
    };

    // Refetch from page 1 whenever the debounced search or the status
    // filter lands on a new value; explicit page moves fetch directly.
    {
        let fetch_page = fetch_page.clone();
        use_effect_with_deps(
            move |_| {
                fetch_page.emit(1);
                || ()
            },
            (*filters).clone(),
        );
    }

    {
        let countries = countries.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    match client.fetch_countries().await {
                        Ok(list) => {
                            countries.set(list.into_iter().map(CountryOption::from).collect());
                        }
                        Err(err) => dispatch.reduce_mut(|store| {
                            push_toast(&mut store.toasts, ToastKind::Error, err.message);
                        }),
                    }
                });
                || ()
            },
            (),
        );
    }

    let on_search = {
        let dispatch = dispatch.clone();
        Callback::from(move |value: String| {
            dispatch.reduce_mut(|store| set_search(&mut store.campaigns, value));
        })
    };

    let on_status = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let status = StatusFilter::from_value(&select.value());
                dispatch.reduce_mut(|store| set_status(&mut store.campaigns, status));
            }
        })
    };

    let on_clear_filters = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| {
                set_search(&mut store.campaigns, String::new());
                set_status(&mut store.campaigns, StatusFilter::All);
            });
        })
    };

    let on_toggle = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        Callback::from(move |id: String| {
            let mut ticket = None;
            dispatch.reduce_mut(|store| {
                ticket = begin_toggle(&mut store.campaigns, &id);
            });
            let Some(ticket) = ticket else {
                return;
            };
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            yew::platform::spawn_local(async move {
                match client
                    .set_campaign_active(&ticket.id, ticket.requested)
                    .await
                {
                    Ok(campaign) => dispatch.reduce_mut(|store| {
                        commit_toggle(&mut store.campaigns, &ticket, campaign.into());
                        push_toast(
                            &mut store.toasts,
                            ToastKind::Success,
                            toggle_success_message(ticket.requested),
                        );
                    }),
                    Err(err) => dispatch.reduce_mut(|store| {
                        rollback_toggle(&mut store.campaigns, &ticket);
                        push_toast(&mut store.toasts, ToastKind::Error, err.message);
                    }),
                }
            });
        })
    };

    let on_row_action = {
        let navigator = navigator.clone();
        let edit_target = edit_target.clone();
        let modal_open = modal_open.clone();
        let delete_target = delete_target.clone();
        let cascade = cascade.clone();
        Callback::from(move |(action, row): (RowAction, CampaignRow)| match action {
            RowAction::View => {
                if let Some(navigator) = navigator.clone() {
                    navigator.push(&Route::CampaignDetail {
                        original_url: urlencoding::encode(&row.original_url).into_owned(),
                    });
                }
            }
            RowAction::Edit => {
                edit_target.set(Some(row));
                modal_open.set(true);
            }
            RowAction::Delete => {
                cascade.set(false);
                delete_target.set(Some(row));
            }
        })
    };

    let on_create = {
        let edit_target = edit_target.clone();
        let modal_open = modal_open.clone();
        Callback::from(move |_| {
            edit_target.set(None);
            modal_open.set(true);
        })
    };

    let on_modal_close = {
        let modal_open = modal_open.clone();
        Callback::from(move |()| modal_open.set(false))
    };

    let on_saved = {
        let dispatch = dispatch.clone();
        let fetch_page = fetch_page.clone();
        Callback::from(move |(campaign, was_edit): (Campaign, bool)| {
            if was_edit {
                dispatch.reduce_mut(|store| {
                    merge_row(&mut store.campaigns, campaign.into());
                });
            } else {
                fetch_page.emit(1);
            }
        })
    };

    let close_delete = {
        let delete_target = delete_target.clone();
        let cascade = cascade.clone();
        Callback::from(move |_| {
            delete_target.set(None);
            cascade.set(false);
        })
    };

    let confirm_delete = {
        let delete_target = delete_target.clone();
        let cascade = cascade.clone();
        let delete_busy = delete_busy.clone();
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let fetch_page = fetch_page.clone();
        Callback::from(move |_| {
            let Some(target) = (*delete_target).clone() else {
                return;
            };
            let with_cascade = *cascade;
            delete_busy.set(true);
            let delete_target = delete_target.clone();
            let cascade = cascade.clone();
            let delete_busy = delete_busy.clone();
            let dispatch = dispatch.clone();
            let client = api_ctx.client.clone();
            let fetch_page = fetch_page.clone();
            yew::platform::spawn_local(async move {
                let mut campaign_id = None;
                for step in delete_plan(with_cascade) {
                    let result = match step {
                        DeleteStep::ResolveId => client
                            .fetch_campaign_by_url(&target.original_url)
                            .await
                            .map(|campaign| campaign_id = Some(campaign.id)),
                        DeleteStep::DeleteGeneratedUrls => match campaign_id.as_deref() {
                            Some(id) => client.delete_generated_urls(id).await,
                            None => Ok(()),
                        },
                        DeleteStep::DeleteCampaign => {
                            client.delete_campaign(&target.original_url).await
                        }
                    };
                    if let Err(err) = result {
                        dispatch.reduce_mut(|store| {
                            push_toast(
                                &mut store.toasts,
                                ToastKind::Error,
                                format!("{} ({})", delete_failure_message(step), err.message),
                            );
                        });
                        delete_busy.set(false);
                        return;
                    }
                }
                dispatch.reduce_mut(|store| {
                    push_toast(&mut store.toasts, ToastKind::Success, "Campaign deleted.");
                });
                delete_busy.set(false);
                delete_target.set(None);
                cascade.set(false);
                let current = dispatch.get().campaigns.pagination.current_page;
                fetch_page.emit(current);
            });
        })
    };

    let filters_active =
        !filters.search.trim().is_empty() || filters.status != StatusFilter::All;

    html! {
        <section class="campaigns-view">
            <header class="toolbar">
                <h2>{"My Campaigns"}</h2>
                <div class="controls">
                    <SearchInput
                        value={filters.search.clone()}
                        placeholder="Search by URL or Country"
                        aria_label="Search campaigns"
                        busy={*loading}
                        on_search={on_search}
                    />
                    <select aria-label="Status filter" onchange={on_status}>
                        {for StatusFilter::all().iter().map(|status| html! {
                            <option
                                value={status.as_query().unwrap_or("all")}
                                selected={filters.status == *status}
                            >
                                {status.label()}
                            </option>
                        })}
                    </select>
                    <button class="solid" onclick={on_create}>{"Create Campaign"}</button>
                </div>
            </header>

            {if filters_active {
                let term = filters.search.trim().to_string();
                html! {
                    <div class="results-summary">
                        <span>
                            <strong>{"Search Results:"}</strong>
                            {if term.is_empty() { String::new() } else { format!(" \"{term}\"") }}
                            {if filters.status == StatusFilter::All {
                                String::new()
                            } else {
                                format!(" · Status: {}", filters.status.label())
                            }}
                            {format!(
                                " · {} result{}",
                                pagination.total_count,
                                if pagination.total_count == 1 { "" } else { "s" }
                            )}
                        </span>
                        <button class="ghost" onclick={on_clear_filters}>{"Clear Search"}</button>
                    </div>
                }
            } else {
                html! {}
            }}

            <table class="campaign-table">
                <thead>
                    <tr>
                        <th>{"Original URL"}</th>
                        <th>{"Country"}</th>
                        <th>{"Status"}</th>
                        <th>{"Created"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if rows.is_empty() {
                        html! {
                            <tr>
                                <td colspan="5">
                                    <EmptyState
                                        title={if *loading { "Loading..." } else { "No campaigns found." }}
                                    />
                                </td>
                            </tr>
                        }
                    } else {
                        rows.iter().map(|row| html! {
                            <CampaignRowItem
                                key={row.id.clone()}
                                row={row.clone()}
                                on_toggle={on_toggle.clone()}
                                on_action={on_row_action.clone()}
                            />
                        }).collect::<Html>()
                    }}
                </tbody>
            </table>

            {if pagination.total_pages > 1 {
                let first = u64::from(pagination.current_page - 1) * u64::from(pagination.limit) + 1;
                let last = (u64::from(pagination.current_page) * u64::from(pagination.limit))
                    .min(pagination.total_count);
                let prev = {
                    let fetch_page = fetch_page.clone();
                    let page = pagination.current_page.saturating_sub(1).max(1);
                    Callback::from(move |_| fetch_page.emit(page))
                };
                let next = {
                    let fetch_page = fetch_page.clone();
                    let page = pagination.current_page + 1;
                    Callback::from(move |_| fetch_page.emit(page))
                };
                html! {
                    <footer class="pagination">
                        <span class="muted">
                            {format!("Showing {first} to {last} of {} results", pagination.total_count)}
                        </span>
                        <div class="pager">
                            <button class="ghost" onclick={prev} disabled={!pagination.has_prev_page}>
                                {"Previous"}
                            </button>
                            <span>{format!("Page {} of {}", pagination.current_page, pagination.total_pages)}</span>
                            <button class="ghost" onclick={next} disabled={!pagination.has_next_page}>
                                {"Next"}
                            </button>
                        </div>
                    </footer>
                }
            } else {
                html! {}
            }}

            <CampaignFormModal
                open={*modal_open}
                campaign={(*edit_target).clone()}
                countries={(*countries).clone()}
                on_close={on_modal_close}
                on_saved={on_saved}
            />

            {if let Some(target) = (*delete_target).clone() {
                html! {
                    <div class="modal-overlay" role="dialog" aria-modal="true">
                        <div class="card modal">
                            <h3 class="danger">{"Delete Campaign"}</h3>
                            <p>{"Are you sure you want to delete this campaign?"}</p>
                            <p class="mono break-all">{target.original_url.clone()}</p>
                            <label class="inline-toggle">
                                <input
                                    type="checkbox"
                                    checked={*cascade}
                                    onchange={{
                                        let cascade = cascade.clone();
                                        Callback::from(move |e: Event| {
                                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                                cascade.set(input.checked());
                                            }
                                        })
                                    }}
                                />
                                <span>
                                    {"Also delete all generated URLs linked to this campaign."}
                                </span>
                            </label>
                            <div class="actions">
                                <button class="ghost" onclick={close_delete.clone()} disabled={*delete_busy}>
                                    {"Cancel"}
                                </button>
                                <button
                                    class="solid danger"
                                    onclick={confirm_delete.clone()}
                                    disabled={!*cascade || *delete_busy}
                                >
                                    {if *delete_busy { "Deleting..." } else { "Delete" }}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            } else {
                html! {}
            }}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CampaignRowItemProps {
    row: CampaignRow,
    on_toggle: Callback<String>,
    on_action: Callback<(RowAction, CampaignRow)>,
}

#[function_component(CampaignRowItem)]
fn campaign_row_item(props: &CampaignRowItemProps) -> Html {
    let row = &props.row;
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = row.id.clone();
        Callback::from(move |_: Event| on_toggle.emit(id.clone()))
    };
    let action = |kind: RowAction| {
        let on_action = props.on_action.clone();
        let row = row.clone();
        Callback::from(move |_| on_action.emit((kind, row.clone())))
    };

    html! {
        <tr>
            <td>
                <a
                    class="break-all"
                    href={row.original_url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {row.original_url.clone()}
                </a>
            </td>
            <td>{row.country.clone()}</td>
            <td>
                <label class="switch">
                    <input type="checkbox" checked={row.is_active} onchange={toggle} />
                    <span class="slider"></span>
                </label>
            </td>
            <td>{row.created_label()}</td>
            <td class="row-actions">
                <button class="ghost" title="View" onclick={action(RowAction::View)}>{"View"}</button>
                <button class="ghost" title="Edit" onclick={action(RowAction::Edit)}>{"Edit"}</button>
                <button class="ghost danger" title="Delete" onclick={action(RowAction::Delete)}>
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}
