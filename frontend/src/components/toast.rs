//! Transient toast notifications, surfaced app-wide through context.

use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_DURATION_MS: u32 = 5_000;

/// Visual severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    fn class(self) -> &'static str {
        match self {
            ToastVariant::Default => "toast-default",
            ToastVariant::Destructive => "toast-destructive",
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Clone, PartialEq)]
struct ToastEntry {
    id: u32,
    toast: Toast,
}

#[derive(Default, PartialEq)]
struct ToastList {
    entries: Vec<ToastEntry>,
}

enum ToastAction {
    Push(ToastEntry),
    Dismiss(u32),
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

/// Handle for emitting toasts, available via [`use_toasts`].
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    push: Callback<Toast>,
}

impl ToastHandle {
    /// Emit a toast.
    pub fn show(&self, toast: Toast) {
        self.push.emit(toast);
    }

    /// Emit a default-severity toast.
    pub fn success(&self, title: &str, description: &str) {
        self.show(Toast {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Default,
        });
    }

    /// Emit a destructive-severity toast.
    pub fn error(&self, title: &str, description: &str) {
        self.show(Toast {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Hosts the toast stack and provides a [`ToastHandle`] to its subtree.
///
/// Each toast is dismissed automatically once its display window elapses.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let show = {
        let toasts = toasts.clone();
        use_callback((), move |toast: Toast, _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                let id = *next_id;
                *next_id += 1;
                id
            };
            toasts.dispatch(ToastAction::Push(ToastEntry { id, toast }));

            let toasts = toasts.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let handle = ToastHandle { push: show };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { props.children.clone() }
            <div class="toast-stack">
                {
                    toasts.entries.iter().map(|entry| {
                        html! {
                            <div
                                key={entry.id.to_string()}
                                class={classes!("toast", entry.toast.variant.class())}
                            >
                                <p class="toast-title">{ &entry.toast.title }</p>
                                <p class="toast-description">{ &entry.toast.description }</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

/// Hook returning the app's [`ToastHandle`].
#[hook]
pub fn use_toasts() -> ToastHandle {
    use_context::<ToastHandle>().expect("ToastProvider not mounted")
}
