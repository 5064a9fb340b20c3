// ============================================================================
// TOAST - Notificaciones efímeras apiladas en una esquina
// ============================================================================
// El provider expone un ToastHandle por contexto; cada toast se descarta
// solo tras unos segundos o al hacer click sobre él.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::constants::TOAST_DURATION_MS;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
struct ToastList {
    toasts: Vec<Toast>,
}

enum ToastListAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastListAction;

    fn reduce(self: Rc<Self>, action: ToastListAction) -> Rc<Self> {
        match action {
            ToastListAction::Push(toast) => {
                let mut toasts = self.toasts.clone();
                toasts.push(toast);
                Rc::new(ToastList { toasts })
            }
            ToastListAction::Dismiss(id) => Rc::new(ToastList {
                toasts: self
                    .toasts
                    .iter()
                    .filter(|t| t.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

/// Handle compartido por contexto para lanzar notificaciones
#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    pub push: Callback<(ToastKind, String)>,
}

impl ToastHandle {
    pub fn success(&self, message: &str) {
        self.push.emit((ToastKind::Success, message.to_string()));
    }

    pub fn error(&self, message: &str) {
        self.push.emit((ToastKind::Error, message.to_string()));
    }

    pub fn info(&self, message: &str) {
        self.push.emit((ToastKind::Info, message.to_string()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let list = list.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = {
                let mut counter = next_id.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            list.dispatch(ToastListAction::Push(Toast { id, kind, message }));

            let list = list.clone();
            Timeout::new(TOAST_DURATION_MS, move || {
                list.dispatch(ToastListAction::Dismiss(id));
            })
            .forget();
        })
    };

    let handle = ToastHandle { push };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <div class="toast-stack">
                { for list.toasts.iter().map(|toast| {
                    let dismiss = {
                        let list = list.clone();
                        let id = toast.id;
                        Callback::from(move |_| list.dispatch(ToastListAction::Dismiss(id)))
                    };
                    html! {
                        <div
                            key={toast.id.to_string()}
                            class={classes!("toast", toast.kind.css_class())}
                            onclick={dismiss}
                        >
                            { &toast.message }
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().expect("ToastProvider no está montado")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u32, message: &str) -> Toast {
        Toast {
            id,
            kind: ToastKind::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn push_appends_in_order() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastListAction::Push(toast(1, "uno")))
            .reduce(ToastListAction::Push(toast(2, "dos")));
        let messages: Vec<&str> = list.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["uno", "dos"]);
    }

    #[test]
    fn dismiss_removes_only_matching_id() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastListAction::Push(toast(1, "uno")))
            .reduce(ToastListAction::Push(toast(2, "dos")))
            .reduce(ToastListAction::Dismiss(1));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].id, 2);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastListAction::Push(toast(1, "uno")))
            .reduce(ToastListAction::Dismiss(99));
        assert_eq!(list.toasts.len(), 1);
    }
}
