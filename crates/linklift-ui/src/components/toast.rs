use crate::core::store::{AppStore, dismiss_toast};
use crate::models::{Toast, ToastKind};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &AppStore| store.toasts.items.clone());
    let dispatch = Dispatch::<AppStore>::new();
    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |id: u64| {
            dispatch.reduce_mut(|store| dismiss_toast(&mut store.toasts, id));
        })
    };

    {
        let toasts = (*toasts).clone();
        let on_dismiss = on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                let mut handles = Vec::new();
                for toast in list {
                    let on_dismiss = on_dismiss.clone();
                    let id = toast.id;
                    handles.push(Timeout::new(4000, move || on_dismiss.emit(id)));
                }
                move || drop(handles)
            },
            toasts,
        );
    }

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| render_toast(toast, on_dismiss.clone()))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: Callback<u64>) -> Html {
    let class = match toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", class)} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
