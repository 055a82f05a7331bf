//! Toast stack component.

use blueprint_intake::config::DEFAULT_TOAST_DURATION_MS;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdCircleCheck;
use gloo_timers::future::TimeoutFuture;

use crate::toast::{Toast, ToastId, ToastQueue, Toaster};

/// Props for the [`ToastHost`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ToastHostProps {
    /// Milliseconds each toast stays visible.
    #[props(default = DEFAULT_TOAST_DURATION_MS)]
    duration_ms: u32,
    children: Element,
}

/// Provides a [`Toaster`] to its children and renders the toast stack
/// in the bottom-right corner.
#[component]
pub fn ToastHost(props: ToastHostProps) -> Element {
    let queue = use_signal(ToastQueue::default);
    let toaster = use_context_provider(|| Toaster::new(queue));
    let duration_ms = props.duration_ms;

    rsx! {
        {props.children}

        ol { class: "bp-toasts", aria_live: "polite",
            for toast in toaster.visible() {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    duration_ms,
                    on_dismiss: move |id: ToastId| toaster.dismiss(id),
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    duration_ms: u32,
    on_dismiss: EventHandler<ToastId>,
}

/// One toast. Dismisses itself after `duration_ms`, or on click.
#[component]
fn ToastItem(props: ToastItemProps) -> Element {
    let id = props.toast.id;
    let duration_ms = props.duration_ms;
    let on_dismiss = props.on_dismiss;

    // The timer is owned by this item's scope, so it is cancelled if the
    // toast is evicted before it fires.
    use_future(move || async move {
        TimeoutFuture::new(duration_ms).await;
        on_dismiss.call(id);
    });

    rsx! {
        li {
            class: "bp-toast",
            role: "status",
            onclick: move |_| on_dismiss.call(id),
            Icon { icon: LdCircleCheck, width: 18, height: 18 }
            span { "{props.toast.message}" }
        }
    }
}
