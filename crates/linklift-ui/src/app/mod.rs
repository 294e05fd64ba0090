use crate::app::api::ApiCtx;
use crate::components::campaigns::CampaignsPage;
use crate::components::detail::CampaignDetailPage;
use crate::components::login::LoginPage;
use crate::components::profile::ProfilePage;
use crate::components::session::SessionGuard;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::store::AppStore;
use preferences::{api_base_url, load_token};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

pub(crate) mod api;
pub(crate) mod preferences;
mod routes;

#[function_component(LinkliftApp)]
pub(crate) fn linklift_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url(), load_token()), ());
    let token = use_selector(|store: &AppStore| store.session.token.clone());

    {
        let api_ctx = (*api_ctx).clone();
        use_effect_with_deps(
            move |token| {
                api_ctx.client.set_token(
                    (**token)
                        .as_ref()
                        .map(|token| token.as_str().to_string()),
                );
                || ()
            },
            token,
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
                <ToastHost />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => html! {
            <div class="placeholder">
                <h2>{"Page not found"}</h2>
                <p class="muted">{"Use navigation to return to a supported view."}</p>
            </div>
        },
        // Every other route sits behind the session gate and the shell. The
        // guard and shell stay mounted across guarded-route navigation, so
        // token validation runs once per entry, not once per click.
        guarded => html! {
            <SessionGuard>
                <AppShell active={guarded.clone()}>
                    {match guarded {
                        Route::Dashboard => html! { <crate::components::dashboard::DashboardPage /> },
                        Route::Campaigns => html! { <CampaignsPage /> },
                        Route::CampaignDetail { original_url } => html! {
                            <CampaignDetailPage original_url={original_url} />
                        },
                        Route::Profile => html! { <ProfilePage /> },
                        Route::Login | Route::NotFound => html! {},
                    }}
                </AppShell>
            </SessionGuard>
        },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LinkliftApp>::with_root(root).render();
    } else {
        yew::Renderer::<LinkliftApp>::new().render();
    }
}
