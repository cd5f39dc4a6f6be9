use stylist::yew::styled_component;
use yew::prelude::*;
use yew_hooks::use_timeout;

use crate::notify::{Toast, ToastVariant};

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<(u64, Toast)>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster">
            { for props.toasts.iter().map(|(id, toast)| html! {
                <ToastItem
                    key={*id}
                    id={*id}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastItemProps {
    pub id: u64,
    pub toast: Toast,
    pub on_dismiss: Callback<u64>,
}

#[styled_component]
pub fn ToastItem(props: &ToastItemProps) -> Html {
    let expire = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        move || on_dismiss.emit(id)
    };
    // Cleared on unmount.
    let _timer = use_timeout(expire, props.toast.duration_ms);

    let base = css!(
        r#"
        min-width: 280px;
        max-width: 380px;
        padding: 14px 18px;
        margin-top: 10px;
        border-radius: 10px;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
        background: #ffffff;
        border: 1px solid #e5e7eb;
        color: #111827;
        animation: toast-in 0.2s ease-out;

        &.destructive {
            background: #fef2f2;
            border-color: #fca5a5;
            color: #991b1b;
        }

        .toast-title {
            font-weight: 600;
            margin-bottom: 4px;
        }

        .toast-description {
            font-size: 0.9rem;
            opacity: 0.85;
        }

        .toast-close {
            float: right;
            background: none;
            border: none;
            cursor: pointer;
            color: inherit;
            font-size: 1rem;
        }
        "#
    );

    let variant = match props.toast.variant {
        ToastVariant::Default => None,
        ToastVariant::Destructive => Some("destructive"),
    };

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!(base, variant)} role="status">
            <button class="toast-close" {onclick}>{"×"}</button>
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
        </div>
    }
}
