//! Transient success/error messages shown over the app.
//!
//! `NotificationService` is provided at the app root; anything can push to it.
//! Every entry dismisses itself after [`AUTO_DISMISS_MS`].

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn intent(self) -> MessageBarIntent {
        match self {
            NotificationKind::Success => MessageBarIntent::Success,
            NotificationKind::Error => MessageBarIntent::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Pure stack behind the service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationStack {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationStack {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    stack: RwSignal<NotificationStack>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(NotificationStack::default()),
        }
    }

    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) {
        let message = message.into();
        match kind {
            NotificationKind::Success => log::info!("notify: {}", message),
            NotificationKind::Error => log::warn!("notify: {}", message),
        }
        let Some(id) = self.stack.try_update(|s| s.push(kind, message)) else {
            return;
        };

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.try_update(|s| s.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active notifications. Mount once at the app root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="notifications">
            <For
                each=move || svc.stack.with(|s| s.items().to_vec())
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <MessageBar intent=n.kind.intent()>
                            <MessageBarBody>{n.message}</MessageBarBody>
                            <MessageBarActions>
                                <Button
                                    appearance=ButtonAppearance::Transparent
                                    size=ButtonSize::Small
                                    on_click=move |_| svc.dismiss(id)
                                >
                                    {crate::shared::icons::icon("close")}
                                </Button>
                            </MessageBarActions>
                        </MessageBar>
                    }
                }
            />
        </div>
    }
}
