//! ViewModel for the product edit dialog
//!
//! Holds the editor in a single signal; widgets read derived signals and write
//! back through `dispatch`. Gateway commands run on `spawn_local` and feed
//! their outcome back as events.

use super::commands::perform;
use super::editor::{DialogResult, EditorCommand, EditorEvent, EditorState, ProductEditor};
use super::form::{ColorChange, ColorKey, ColorVariant, ProductField};
use crate::domain::a004_product::api::HttpProductGateway;
use crate::shared::notifications::NotificationService;
use contracts::domain::a004_product::ProductGroupId;
use contracts::shared::options::SelectOption;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ProductEditVm {
    pub editor: RwSignal<ProductEditor>,
    notifications: NotificationService,
    on_close: Callback<DialogResult>,
}

fn pairs(options: &[SelectOption]) -> Vec<(String, String)> {
    options.iter().cloned().map(SelectOption::into_pair).collect()
}

impl ProductEditVm {
    pub fn new(
        product: Option<ProductGroupId>,
        notifications: NotificationService,
        on_close: Callback<DialogResult>,
    ) -> Self {
        Self {
            editor: RwSignal::new(ProductEditor::new(product)),
            notifications,
            on_close,
        }
    }

    // === Commands ===

    /// Applies an event; a disposed dialog drops it.
    pub fn dispatch(&self, event: EditorEvent) {
        let Some(commands) = self.editor.try_update(|editor| editor.update(event)) else {
            log::debug!("product dialog disposed, event dropped");
            return;
        };
        for command in commands {
            self.run(command);
        }
    }

    fn run(&self, command: EditorCommand) {
        match command {
            EditorCommand::Notify(kind, message) => self.notifications.push(kind, message),
            EditorCommand::Close(result) => self.on_close.run(result),
            command => {
                let vm = *self;
                spawn_local(async move {
                    let gateway = HttpProductGateway;
                    if let Some(event) = perform(&gateway, command).await {
                        vm.dispatch(event);
                    }
                });
            }
        }
    }

    pub fn set_field(&self, field: ProductField) -> Callback<String> {
        let vm = *self;
        Callback::new(move |value: String| vm.dispatch(EditorEvent::FieldChanged(field, value)))
    }

    pub fn change_color(&self, key: ColorKey, change: ColorChange) {
        self.dispatch(EditorEvent::ColorChanged(key, change));
    }

    // === Derived signals ===

    pub fn field(&self, field: ProductField) -> Signal<String> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.form().get(field).to_string()))
    }

    pub fn error(&self, field: ProductField) -> Signal<Option<String>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.field_error(field)))
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editor.with_untracked(|e| e.is_edit_mode())
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.is_busy()))
    }

    /// Inputs are locked while a submission is in flight.
    pub fn is_locked(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.state() == EditorState::Submitting))
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| !e.can_submit()))
    }

    pub fn category_options(&self) -> Signal<Vec<(String, String)>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| pairs(e.category_options())))
    }

    pub fn product_type_options(&self) -> Signal<Vec<(String, String)>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| pairs(e.product_type_options())))
    }

    pub fn color_options(&self) -> Signal<Vec<(String, String)>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| pairs(e.color_options())))
    }

    pub fn color_keys(&self) -> Signal<Vec<ColorKey>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.form().colors.keys()))
    }

    /// `None` once the entry has been removed.
    pub fn color(&self, key: ColorKey) -> Signal<Option<ColorVariant>> {
        let editor = self.editor;
        Signal::derive(move || editor.with(|e| e.form().colors.get(key).cloned()))
    }
}
