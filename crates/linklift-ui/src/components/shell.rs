//! Application shell: brand header, navigation, and logout.

use crate::app::Route;
use crate::app::preferences::clear_token_storage;
use crate::core::store::{AppStore, clear_session};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::Dispatch;

#[derive(Properties, PartialEq)]
pub(crate) struct AppShellProps {
    pub active: Route,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &AppShellProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let on_logout = Callback::from(move |_| {
        clear_token_storage();
        // The session guard redirects to login on the next render.
        dispatch.reduce_mut(|store| clear_session(&mut store.session));
    });

    let nav_item = |route: Route, label: &str| {
        let class = if props.active == route { "active" } else { "" };
        html! {
            <Link<Route> to={route} classes={classes!("nav-link", class)}>
                {label}
            </Link<Route>>
        }
    };

    html! {
        <div class="app-shell">
            <header class="topbar">
                <span class="brand">{"Linklift"}</span>
                <nav>
                    {nav_item(Route::Dashboard, "Dashboard")}
                    {nav_item(Route::Campaigns, "Campaigns")}
                    {nav_item(Route::Profile, "Profile")}
                </nav>
                <button class="ghost" onclick={on_logout}>{"Log out"}</button>
            </header>
            <main class="content">
                { for props.children.iter() }
            </main>
        </div>
    }
}
