//! Dashboard overview: campaign counts at a glance.

use crate::app::api::ApiCtx;
use crate::app::preferences::{api_base_url, load_token};
use linklift_api_models::DashboardStats;
use yew::prelude::*;

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    let stats = use_state(DashboardStats::default);
    let loading = use_state(|| true);
    let api_ctx = use_context::<ApiCtx>()
        .unwrap_or_else(|| ApiCtx::new(api_base_url(), load_token()));

    {
        let stats = stats.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let client = api_ctx.client.clone();
                yew::platform::spawn_local(async move {
                    // Zeroed cards are the fallback; a failed stats fetch is
                    // not worth interrupting the operator for.
                    if let Ok(snapshot) = client.fetch_dashboard_stats().await {
                        stats.set(snapshot);
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let value = |count: u64| {
        if *loading {
            "...".to_string()
        } else {
            count.to_string()
        }
    };

    html! {
        <div class="dashboard">
            <div class="welcome card">
                <h1>{"Welcome back, Admin!"}</h1>
                <p class="muted">
                    {"Manage your tracking URLs and monitor campaigns across countries."}
                </p>
            </div>
            <div class="stats-grid">
                <StatCard title="Total Campaigns" value={value(stats.total_campaigns)} />
                <StatCard title="Active Campaigns" value={value(stats.active_campaigns)} />
                <StatCard title="Inactive Campaigns" value={value(stats.inactive_campaigns)} />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    title: AttrValue,
    value: String,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <span class="muted">{props.title.clone()}</span>
            <strong class="stat-value">{props.value.clone()}</strong>
        </div>
    }
}
