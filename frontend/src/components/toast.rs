use gloo::timers::callback::Timeout;
use shared::NotificationKind;
use yew::prelude::*;

use crate::hooks::Toast;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-host">
            {for props.toasts.iter().map(|toast| html! {
                <ToastItem
                    key={toast.id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss; dropping the timeout on unmount cancels it
    use_effect_with(props.toast.id, {
        let on_dismiss = props.on_dismiss.clone();
        move |id: &u32| {
            let id = *id;
            let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        }
    });

    let kind_class = match props.toast.notification.kind {
        NotificationKind::Success => "toast-success",
        NotificationKind::Error => "toast-error",
    };

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" onclick={on_click}>
            {&props.toast.notification.message}
        </div>
    }
}
