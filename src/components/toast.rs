use std::rc::Rc;

use gloo::timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::model::{Notice, NoticeLevel};

const TOAST_DISMISS_MS: u32 = 4000;

/// Handle for pushing transient notifications from anywhere below the
/// provider.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    notify: Callback<Notice>,
}

impl Toaster {
    pub fn notify(&self, notice: Notice) {
        self.notify.emit(notice);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Notice::error(message));
    }
}

#[derive(Clone, PartialEq)]
struct ToastEntry {
    id: String,
    notice: Notice,
}

#[derive(Default, PartialEq)]
struct ToastList {
    entries: Vec<ToastEntry>,
}

enum ToastAction {
    Push(ToastEntry),
    Dismiss(String),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut entries = self.entries.clone();
        match action {
            ToastAction::Push(entry) => entries.push(entry),
            ToastAction::Dismiss(id) => entries.retain(|entry| entry.id != id),
        }
        Rc::new(ToastList { entries })
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let notify = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |notice: Notice| {
            let id = Uuid::new_v4().to_string();
            dispatcher.dispatch(ToastAction::Push(ToastEntry {
                id: id.clone(),
                notice,
            }));
            let dispatcher = dispatcher.clone();
            Timeout::new(TOAST_DISMISS_MS, move || {
                dispatcher.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let context = Toaster { notify };

    html! {
        <ContextProvider<Toaster> context={context}>
            {props.children.clone()}
            <div class="roster-admin-toasts" aria-live="polite">
                {for toasts.entries.iter().map(|entry| {
                    let level = match entry.notice.level {
                        NoticeLevel::Success => "roster-admin-toasts__item--success",
                        NoticeLevel::Error => "roster-admin-toasts__item--error",
                    };
                    let on_dismiss = {
                        let dispatcher = toasts.dispatcher();
                        let id = entry.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(ToastAction::Dismiss(id.clone()));
                        })
                    };
                    html! {
                        <div
                            key={entry.id.clone()}
                            class={classes!("roster-admin-toasts__item", level)}
                            onclick={on_dismiss}
                        >
                            {&entry.notice.message}
                        </div>
                    }
                })}
            </div>
        </ContextProvider<Toaster>>
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("use_toaster must be used within a ToastProvider")
}
