use leptos::prelude::*;
use crate::config::MessageContent;
use crate::state::{Notice, Notifier};

#[component]
pub fn NotificationHost(notifier: Notifier) -> impl IntoView {
    view! {
        <div class="notification-host">
            <For
                each=move || notifier.notices()
                key=|notice| notice.id
                children=move |notice| view! { <NotificationBanner notice=notice notifier=notifier /> }
            />
        </div>
    }
}

#[component]
fn NotificationBanner(notice: Notice, notifier: Notifier) -> impl IntoView {
    let id = notice.id;
    let kind = notice.kind;
    let top = move || notifier.top_for(id);
    let on_dismiss = move |_: web_sys::MouseEvent| notifier.dismiss(id);

    let message = match notifier.config.content {
        MessageContent::Text => view! { <span>{notice.message}</span> }.into_any(),
        MessageContent::RawMarkup => view! { <span inner_html=notice.message></span> }.into_any(),
    };

    view! {
        <div class=kind.banner_class() style:top=top>
            <div class="flex items-center">
                <i class=kind.icon_class()></i>
                {message}
                <button class=kind.dismiss_class() on:click=on_dismiss>
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>
    }
}
