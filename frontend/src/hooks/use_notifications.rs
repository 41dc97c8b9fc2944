use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::notifications::{Notification, Notifier};

/// Oldest toasts are dropped beyond this
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationQueue {
    pub items: Vec<Notification>,
}

pub enum QueueAction {
    Push(Notification),
    Dismiss(Uuid),
}

impl Reducible for NotificationQueue {
    type Action = QueueAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            QueueAction::Push(notification) => {
                items.push(notification);
                if items.len() > MAX_VISIBLE {
                    let overflow = items.len() - MAX_VISIBLE;
                    items.drain(..overflow);
                }
            }
            QueueAction::Dismiss(id) => items.retain(|n| n.id != id),
        }
        Rc::new(Self { items })
    }
}

pub struct UseNotificationsResult {
    pub notifier: Notifier,
    pub items: Vec<Notification>,
    pub dismiss: Callback<Uuid>,
}

/// Queue of toasts plus the [`Notifier`] that feeds it. Each toast removes
/// itself once its duration has passed.
#[hook]
pub fn use_notifications() -> UseNotificationsResult {
    let queue = use_reducer(NotificationQueue::default);

    let notifier = {
        let dispatcher = queue.dispatcher();
        use_memo((), move |_| {
            Notifier::new(Callback::from(move |notification: Notification| {
                let id = notification.id;
                let duration_ms = notification.duration_ms;
                dispatcher.dispatch(QueueAction::Push(notification));

                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    TimeoutFuture::new(duration_ms).await;
                    dispatcher.dispatch(QueueAction::Dismiss(id));
                });
            }))
        })
    };

    let dismiss = {
        let dispatcher = queue.dispatcher();
        use_callback((), move |id: Uuid, _| dispatcher.dispatch(QueueAction::Dismiss(id)))
    };

    UseNotificationsResult {
        notifier: (*notifier).clone(),
        items: queue.items.clone(),
        dismiss,
    }
}
