//! Routing definitions for the Linklift UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/login")]
    Login,
    #[at("/")]
    Dashboard,
    #[at("/manage-campaign")]
    Campaigns,
    #[at("/campaign-generator/:original_url")]
    CampaignDetail {
        /// URL-encoded original URL of the campaign.
        original_url: String,
    },
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}
