//! Notification banner for the latest store mutation.

use yew::prelude::*;

use crate::state::{Action, NoticeKind, StoreHandle};

/// Banner showing the most recent success or warning notice, with a
/// dismiss control. Renders nothing when there is no notice.
#[function_component(NoticeBanner)]
pub fn notice_banner() -> Html {
    let store = use_context::<StoreHandle>().expect("store context");

    let Some(notice) = store.notice.clone() else {
        return Html::default();
    };

    let class = match notice.kind {
        NoticeKind::Success => "notice notice-success",
        NoticeKind::Warning => "notice notice-warning",
    };

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::DismissNotice))
    };

    html! {
        <div {class} role="status">
            <span>{ notice.text }</span>
            <button class="notice-dismiss" onclick={on_dismiss}>{"\u{00d7}"}</button>
        </div>
    }
}
