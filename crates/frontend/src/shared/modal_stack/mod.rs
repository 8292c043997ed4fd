//! Centralized modal stack.
//!
//! Pages never render dialogs themselves: they push a builder here and the
//! single [`ModalHost`] mounted at the app root renders every open entry on
//! top of the previous one. Escape and overlay clicks target only the topmost
//! entry and respect its close guard and dismiss hook.

mod host;

pub use host::ModalHost;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;
type DismissHook = Arc<dyn Fn() + Send + Sync>;

/// Surface overrides, close guard and dismiss hook for one modal.
#[derive(Clone, Default)]
pub struct ModalOptions {
    pub style: Option<String>,
    pub class: Option<String>,
    /// When it returns false, overlay click and Escape leave the modal open.
    pub can_close: Option<CloseGuard>,
    /// Runs instead of removal on overlay click or Escape, so the content can
    /// wind down and close itself through its [`ModalHandle`].
    pub on_dismiss: Option<DismissHook>,
}

impl ModalOptions {
    pub fn with_style(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            ..Self::default()
        }
    }

    pub fn guarded_by(mut self, can_close: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.can_close = Some(Arc::new(can_close));
        self
    }

    pub fn dismissed_by(mut self, on_dismiss: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(on_dismiss));
        self
    }

    fn allows_close(&self) -> bool {
        self.can_close.as_ref().map_or(true, |guard| guard())
    }
}

/// Outcome of an overlay click or Escape on one entry.
enum Dismissal {
    Blocked,
    Remove,
    Delegate(DismissHook),
}

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    options: ModalOptions,
}

/// Ordered entries, bottom first. Ids are never reused.
#[derive(Clone, Default)]
struct ModalStack {
    entries: Vec<ModalEntry>,
    last_id: u64,
}

impl ModalStack {
    fn push(&mut self, builder: ModalBuilder, options: ModalOptions) -> u64 {
        self.last_id += 1;
        self.entries.push(ModalEntry {
            id: self.last_id,
            builder,
            options,
        });
        self.last_id
    }

    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    fn top_id(&self) -> Option<u64> {
        self.entries.last().map(|entry| entry.id)
    }

    fn dismissal(&self, id: u64) -> Dismissal {
        let Some(entry) = self.entries.iter().find(|entry| entry.id == id) else {
            return Dismissal::Blocked;
        };
        if !entry.options.allows_close() {
            return Dismissal::Blocked;
        }
        match &entry.options.on_dismiss {
            Some(hook) => Dismissal::Delegate(hook.clone()),
            None => Dismissal::Remove,
        }
    }
}

/// Returned by [`ModalStackService::push`]; lets the modal close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    /// Closes regardless of the guard: the dialog decided to finish.
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<ModalStack>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(ModalStack::default()),
        }
    }

    pub fn push<F>(&self, options: ModalOptions, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let id = self
            .stack
            .try_update(|s| s.push(Arc::new(builder), options))
            .unwrap_or_default();
        log::debug!("modal {} opened", id);
        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        if self.stack.try_update(|s| s.remove(id)) == Some(true) {
            log::debug!("modal {} closed", id);
        }
    }

    /// Removal waits a tick: the modal's own DOM event may still be dispatching.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    /// Overlay click on entry `id`; honours its guard and dismiss hook.
    fn request_dismiss(&self, id: u64) {
        match self.stack.with_untracked(|s| s.dismissal(id)) {
            Dismissal::Blocked => log::debug!("modal {} refused to close", id),
            Dismissal::Remove => self.close_deferred(id),
            Dismissal::Delegate(hook) => hook(),
        }
    }

    /// Escape key; only the topmost entry is asked.
    fn request_dismiss_top(&self) {
        if let Some(id) = self.stack.with_untracked(ModalStack::top_id) {
            self.request_dismiss(id);
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}
