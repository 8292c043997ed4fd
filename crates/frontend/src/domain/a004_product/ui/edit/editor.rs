//! Product editor state machine
//!
//! `ProductEditor::update` is pure: it folds one event into the state and
//! returns the commands the view model must run. Gateway results come back as
//! events carrying already-resolved display messages.
//!
//! ```text
//! Idle --Open--> Loading --(all loads settled)--> Ready
//! Ready --Submit--> Submitting --ok--> Closed
//!                              \--err--> Ready
//! any --Cancel--> Closed
//! ```

use super::form::{ColorChange, ColorKey, ProductField, ProductForm, Validation};
use crate::shared::notifications::NotificationKind;
use contracts::domain::a001_category::Category;
use contracts::domain::a002_product_type::ProductType;
use contracts::domain::a003_color::Color;
use contracts::domain::a004_product::{ProductDetails, ProductDto, ProductGroupId};
use contracts::shared::options::{to_select_options, SelectOption};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Loading,
    Ready,
    Submitting,
    Closed,
}

/// How the dialog ended, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Saved,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Open,
    CategoriesLoaded(Result<Vec<Category>, String>),
    ColorsLoaded(Result<Vec<Color>, String>),
    DetailsLoaded(Result<ProductDetails, String>),
    ProductTypesLoaded {
        request: u64,
        result: Result<Vec<ProductType>, String>,
    },
    FieldChanged(ProductField, String),
    ColorAdded,
    ColorRemoved(ColorKey),
    ColorChanged(ColorKey, ColorChange),
    Submit,
    SubmitFinished(Result<(), String>),
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    LoadCategories,
    LoadColors,
    LoadDetails(ProductGroupId),
    LoadProductTypes { category_id: i64, request: u64 },
    Create(ProductDto),
    Update(ProductGroupId, ProductDto),
    Notify(NotificationKind, String),
    Close(DialogResult),
}

/// Initial loads still outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct PendingLoads {
    categories: bool,
    colors: bool,
    details: bool,
}

impl PendingLoads {
    fn settled(&self) -> bool {
        !(self.categories || self.colors || self.details)
    }
}

#[derive(Debug, Clone)]
pub struct ProductEditor {
    product: Option<ProductGroupId>,
    state: EditorState,
    form: ProductForm,
    baseline: ProductForm,
    validation: Validation,
    touched: BTreeSet<ProductField>,
    show_all_errors: bool,
    pending: PendingLoads,
    categories: Vec<SelectOption>,
    product_types: Vec<SelectOption>,
    colors: Vec<SelectOption>,
    /// Sequence of the latest product-type request; older responses are stale.
    product_type_request: u64,
}

impl ProductEditor {
    pub fn new(product: Option<ProductGroupId>) -> Self {
        let form = ProductForm::default();
        Self {
            product,
            state: EditorState::Idle,
            validation: form.validate(),
            baseline: form.clone(),
            form,
            touched: BTreeSet::new(),
            show_all_errors: false,
            pending: PendingLoads::default(),
            categories: Vec::new(),
            product_types: Vec::new(),
            colors: Vec::new(),
            product_type_request: 0,
        }
    }

    // === Accessors ===

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_edit_mode(&self) -> bool {
        self.product.is_some()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn is_dirty(&self) -> bool {
        self.form != self.baseline
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, EditorState::Loading | EditorState::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        self.state == EditorState::Ready && self.is_valid() && self.is_dirty()
    }

    /// Error shown next to a field: once it was edited, or after a rejected submit.
    pub fn field_error(&self, field: ProductField) -> Option<String> {
        if self.show_all_errors || self.touched.contains(&field) {
            self.validation.error(field).map(str::to_string)
        } else {
            None
        }
    }

    pub fn category_options(&self) -> &[SelectOption] {
        &self.categories
    }

    pub fn product_type_options(&self) -> &[SelectOption] {
        &self.product_types
    }

    pub fn color_options(&self) -> &[SelectOption] {
        &self.colors
    }

    // === Transitions ===

    pub fn update(&mut self, event: EditorEvent) -> Vec<EditorCommand> {
        if self.state == EditorState::Closed {
            log::debug!("product editor closed, dropping {:?}", event_name(&event));
            return Vec::new();
        }

        match event {
            EditorEvent::Open => self.open(),
            EditorEvent::CategoriesLoaded(result) => {
                if !std::mem::take(&mut self.pending.categories) {
                    return Vec::new();
                }
                let commands = match result {
                    Ok(records) => {
                        self.categories = to_select_options(
                            &records,
                            |c| c.category_name.clone(),
                            |c| c.category_id,
                        );
                        Vec::new()
                    }
                    Err(message) => vec![load_failed("categories", message)],
                };
                self.settle(commands)
            }
            EditorEvent::ColorsLoaded(result) => {
                if !std::mem::take(&mut self.pending.colors) {
                    return Vec::new();
                }
                let commands = match result {
                    Ok(records) => {
                        self.colors =
                            to_select_options(&records, |c| c.color_name.clone(), |c| c.color_id);
                        Vec::new()
                    }
                    Err(message) => vec![load_failed("colors", message)],
                };
                self.settle(commands)
            }
            EditorEvent::DetailsLoaded(result) => {
                if !std::mem::take(&mut self.pending.details) {
                    return Vec::new();
                }
                let commands = match result {
                    Ok(details) => self.hydrate(&details),
                    Err(message) => vec![load_failed("product", message)],
                };
                self.settle(commands)
            }
            EditorEvent::ProductTypesLoaded { request, result } => {
                self.product_types_loaded(request, result)
            }
            EditorEvent::FieldChanged(field, value) => {
                if !self.accepts_edits() {
                    return Vec::new();
                }
                let commands = if field == ProductField::CategoryId {
                    self.change_category(value)
                } else {
                    self.form.set(field, value);
                    Vec::new()
                };
                self.touched.insert(field);
                self.revalidate();
                commands
            }
            EditorEvent::ColorAdded => {
                if self.accepts_edits() {
                    self.form.append_color_variant();
                    self.revalidate();
                }
                Vec::new()
            }
            EditorEvent::ColorRemoved(key) => {
                if self.accepts_edits() {
                    if let Err(e) = self.form.remove_color_variant_by_key(key) {
                        log::warn!("remove color {:?}: {}", key, e);
                    }
                    self.revalidate();
                }
                Vec::new()
            }
            EditorEvent::ColorChanged(key, change) => {
                if self.accepts_edits() {
                    if let Err(e) = self.form.change_color(key, change) {
                        log::warn!("change color {:?}: {}", key, e);
                    }
                    self.revalidate();
                }
                Vec::new()
            }
            EditorEvent::Submit => self.submit(),
            EditorEvent::SubmitFinished(result) => self.submit_finished(result),
            EditorEvent::Cancel => {
                log::debug!("product editor cancelled");
                self.state = EditorState::Closed;
                vec![EditorCommand::Close(DialogResult::Cancelled)]
            }
        }
    }

    fn open(&mut self) -> Vec<EditorCommand> {
        if self.state != EditorState::Idle {
            log::warn!("product editor already open");
            return Vec::new();
        }
        self.state = EditorState::Loading;
        self.pending = PendingLoads {
            categories: true,
            colors: true,
            details: self.product.is_some(),
        };

        let mut commands = vec![EditorCommand::LoadCategories, EditorCommand::LoadColors];
        if let Some(id) = self.product {
            commands.push(EditorCommand::LoadDetails(id));
        }
        commands
    }

    /// Moves to `Ready` once the last initial load has come back.
    fn settle(&mut self, commands: Vec<EditorCommand>) -> Vec<EditorCommand> {
        if self.state == EditorState::Loading && self.pending.settled() {
            log::debug!("product editor ready");
            self.state = EditorState::Ready;
        }
        commands
    }

    fn hydrate(&mut self, details: &ProductDetails) -> Vec<EditorCommand> {
        let hydrated = ProductForm::from_details(details);
        let category = hydrated.category_id.clone();

        self.form = hydrated;
        // Options or fetches tied to a category picked while loading are void
        // even when the record has no category of its own.
        self.form.category_id.clear();
        self.product_types.clear();
        self.product_type_request += 1;
        let commands = self.change_category(category);

        self.baseline = self.form.clone();
        self.touched.clear();
        self.revalidate();
        commands
    }

    fn change_category(&mut self, value: String) -> Vec<EditorCommand> {
        if self.form.category_id == value {
            return Vec::new();
        }
        self.form.category_id = value;
        self.product_types.clear();
        self.product_type_request += 1;

        let raw = self.form.category_id.trim();
        if raw.is_empty() {
            return Vec::new();
        }
        match raw.parse::<i64>() {
            Ok(category_id) => vec![EditorCommand::LoadProductTypes {
                category_id,
                request: self.product_type_request,
            }],
            Err(_) => {
                log::warn!("category value {:?} is not an id", raw);
                Vec::new()
            }
        }
    }

    fn product_types_loaded(
        &mut self,
        request: u64,
        result: Result<Vec<ProductType>, String>,
    ) -> Vec<EditorCommand> {
        if request != self.product_type_request {
            log::debug!(
                "discarding stale product types #{} (latest #{})",
                request,
                self.product_type_request
            );
            return Vec::new();
        }
        match result {
            Ok(records) => {
                self.product_types = to_select_options(
                    &records,
                    |t| t.product_type_name.clone(),
                    |t| t.product_type_id,
                );
                Vec::new()
            }
            Err(message) => vec![load_failed("product types", message)],
        }
    }

    fn submit(&mut self) -> Vec<EditorCommand> {
        if self.state != EditorState::Ready {
            log::debug!("submit ignored in {:?}", self.state);
            return Vec::new();
        }

        let payload = match self.form.to_payload() {
            Ok(payload) => payload,
            Err(validation) => {
                log::debug!("submit blocked by {} invalid field(s)", validation.errors().len());
                self.validation = validation;
                self.show_all_errors = true;
                return Vec::new();
            }
        };

        self.state = EditorState::Submitting;
        match self.product {
            Some(id) => vec![EditorCommand::Update(id, payload)],
            None => vec![EditorCommand::Create(payload)],
        }
    }

    fn submit_finished(&mut self, result: Result<(), String>) -> Vec<EditorCommand> {
        if self.state != EditorState::Submitting {
            return Vec::new();
        }
        match result {
            Ok(()) => {
                self.state = EditorState::Closed;
                let message = if self.is_edit_mode() {
                    "Product updated"
                } else {
                    "Product created"
                };
                vec![
                    EditorCommand::Notify(NotificationKind::Success, message.to_string()),
                    EditorCommand::Close(DialogResult::Saved),
                ]
            }
            Err(message) => {
                self.state = EditorState::Ready;
                vec![EditorCommand::Notify(NotificationKind::Error, message)]
            }
        }
    }

    fn accepts_edits(&self) -> bool {
        matches!(self.state, EditorState::Loading | EditorState::Ready)
    }

    fn revalidate(&mut self) {
        self.validation = self.form.validate();
    }
}

fn load_failed(what: &str, message: String) -> EditorCommand {
    log::warn!("loading {} failed: {}", what, message);
    EditorCommand::Notify(
        NotificationKind::Error,
        format!("Could not load {}: {}", what, message),
    )
}

fn event_name(event: &EditorEvent) -> &'static str {
    match event {
        EditorEvent::Open => "Open",
        EditorEvent::CategoriesLoaded(_) => "CategoriesLoaded",
        EditorEvent::ColorsLoaded(_) => "ColorsLoaded",
        EditorEvent::DetailsLoaded(_) => "DetailsLoaded",
        EditorEvent::ProductTypesLoaded { .. } => "ProductTypesLoaded",
        EditorEvent::FieldChanged(..) => "FieldChanged",
        EditorEvent::ColorAdded => "ColorAdded",
        EditorEvent::ColorRemoved(_) => "ColorRemoved",
        EditorEvent::ColorChanged(..) => "ColorChanged",
        EditorEvent::Submit => "Submit",
        EditorEvent::SubmitFinished(_) => "SubmitFinished",
        EditorEvent::Cancel => "Cancel",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: i64, name: &str) -> Category {
        Category {
            category_id: id,
            category_name: name.to_string(),
        }
    }

    fn product_type(id: i64, name: &str) -> ProductType {
        ProductType {
            product_type_id: id,
            product_type_name: name.to_string(),
        }
    }

    fn details(id: i64) -> ProductDetails {
        serde_json::from_value(serde_json::json!({
            "productGroupId": id,
            "productNameEn": "Bulk",
            "productNameRu": "Булк",
            "categoryId": 3,
            "productTypeId": 7,
            "materialTypeId": 1,
            "hairStyleId": 2,
            "measureUnitLengthId": 1,
            "fromLength": 10,
            "toLength": 20,
            "measureUnitWeightId": 1,
            "weight": 100,
            "origin": "VN",
            "videoUrl": "http://v",
            "colors": []
        }))
        .unwrap()
    }

    fn ready_editor(product: Option<ProductGroupId>) -> ProductEditor {
        let mut editor = ProductEditor::new(product);
        editor.update(EditorEvent::Open);
        editor.update(EditorEvent::CategoriesLoaded(Ok(vec![category(3, "Bulk")])));
        editor.update(EditorEvent::ColorsLoaded(Ok(vec![])));
        if let Some(id) = product {
            editor.update(EditorEvent::DetailsLoaded(Ok(details(id.value()))));
        }
        assert_eq!(editor.state(), EditorState::Ready);
        editor
    }

    fn fill(editor: &mut ProductEditor) {
        let values = [
            (ProductField::NameEn, "A"),
            (ProductField::NameRu, "Б"),
            (ProductField::ProductTypeId, "1"),
            (ProductField::MaterialTypeId, "2"),
            (ProductField::HairStyleId, "1"),
            (ProductField::MeasureUnitLengthId, "1"),
            (ProductField::FromLength, "10"),
            (ProductField::ToLength, "20"),
            (ProductField::MeasureUnitWeightId, "1"),
            (ProductField::Weight, "5"),
            (ProductField::Origin, "VN"),
            (ProductField::VideoUrl, "http://x"),
        ];
        for (field, value) in values {
            editor.update(EditorEvent::FieldChanged(field, value.to_string()));
        }
    }

    fn product_type_fetches(commands: &[EditorCommand]) -> Vec<(i64, u64)> {
        commands
            .iter()
            .filter_map(|c| match c {
                EditorCommand::LoadProductTypes {
                    category_id,
                    request,
                } => Some((*category_id, *request)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_open_for_create_loads_reference_lists() {
        let mut editor = ProductEditor::new(None);
        let commands = editor.update(EditorEvent::Open);
        assert_eq!(
            commands,
            vec![EditorCommand::LoadCategories, EditorCommand::LoadColors]
        );
        assert_eq!(editor.state(), EditorState::Loading);
        assert!(editor.is_busy());
    }

    #[test]
    fn test_open_for_edit_also_loads_details() {
        let mut editor = ProductEditor::new(Some(ProductGroupId(15)));
        let commands = editor.update(EditorEvent::Open);
        assert!(commands.contains(&EditorCommand::LoadDetails(ProductGroupId(15))));
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn test_ready_only_after_all_loads_in_any_order() {
        let mut editor = ProductEditor::new(Some(ProductGroupId(15)));
        editor.update(EditorEvent::Open);

        editor.update(EditorEvent::DetailsLoaded(Ok(details(15))));
        assert_eq!(editor.state(), EditorState::Loading);
        editor.update(EditorEvent::ColorsLoaded(Ok(vec![])));
        assert_eq!(editor.state(), EditorState::Loading);
        editor.update(EditorEvent::CategoriesLoaded(Err("boom".into())));
        assert_eq!(editor.state(), EditorState::Ready);
    }

    #[test]
    fn test_load_failure_notifies_and_leaves_list_empty() {
        let mut editor = ProductEditor::new(None);
        editor.update(EditorEvent::Open);
        let commands = editor.update(EditorEvent::CategoriesLoaded(Err(
            "Server error. Please try again later.".into(),
        )));

        assert!(matches!(
            commands.as_slice(),
            [EditorCommand::Notify(NotificationKind::Error, msg)] if msg.contains("Server error")
        ));
        assert!(editor.category_options().is_empty());
    }

    #[test]
    fn test_hydration_sets_baseline_and_fetches_product_types() {
        let mut editor = ProductEditor::new(Some(ProductGroupId(15)));
        editor.update(EditorEvent::Open);
        let commands = editor.update(EditorEvent::DetailsLoaded(Ok(details(15))));

        assert_eq!(product_type_fetches(&commands), vec![(3, 1)]);
        assert_eq!(editor.form().product_group_name_en, "Bulk");
        assert_eq!(editor.form().category_id, "3");
        assert_eq!(editor.form().product_type_id, "7");
        assert!(!editor.is_dirty());
        assert!(editor.is_valid());
    }

    #[test]
    fn test_details_failure_keeps_defaults() {
        let mut editor = ProductEditor::new(Some(ProductGroupId(15)));
        editor.update(EditorEvent::Open);
        let commands = editor.update(EditorEvent::DetailsLoaded(Err("The record was not found.".into())));

        assert_eq!(commands.len(), 1);
        assert_eq!(editor.form(), &ProductForm::default());
    }

    #[test]
    fn test_category_change_fetches_exactly_once() {
        let mut editor = ready_editor(None);

        let commands = editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "3".into()));
        assert_eq!(product_type_fetches(&commands), vec![(3, 1)]);

        let again = editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "3".into()));
        assert!(again.is_empty());
    }

    #[test]
    fn test_clearing_category_fetches_nothing_and_clears_options() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "3".into()));
        editor.update(EditorEvent::ProductTypesLoaded {
            request: 1,
            result: Ok(vec![product_type(7, "Bundle")]),
        });
        assert_eq!(editor.product_type_options().len(), 1);

        let commands = editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, String::new()));
        assert!(commands.is_empty());
        assert!(editor.product_type_options().is_empty());
    }

    #[test]
    fn test_category_change_keeps_selected_product_type() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::FieldChanged(ProductField::ProductTypeId, "7".into()));
        editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "4".into()));
        assert_eq!(editor.form().product_type_id, "7");
    }

    #[test]
    fn test_stale_product_types_are_discarded() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "3".into()));
        editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "4".into()));

        editor.update(EditorEvent::ProductTypesLoaded {
            request: 2,
            result: Ok(vec![product_type(9, "Closure")]),
        });
        editor.update(EditorEvent::ProductTypesLoaded {
            request: 1,
            result: Ok(vec![product_type(7, "Bundle")]),
        });

        assert_eq!(
            editor.product_type_options(),
            &[SelectOption::new("Closure", "9")]
        );
    }

    #[test]
    fn test_hydration_without_category_voids_options_picked_while_loading() {
        let mut editor = ProductEditor::new(Some(ProductGroupId(1)));
        editor.update(EditorEvent::Open);
        let commands =
            editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "4".into()));
        assert_eq!(product_type_fetches(&commands), vec![(4, 1)]);
        editor.update(EditorEvent::ProductTypesLoaded {
            request: 1,
            result: Ok(vec![product_type(9, "X")]),
        });

        let record = serde_json::from_value(serde_json::json!({ "productGroupId": 1 })).unwrap();
        let commands = editor.update(EditorEvent::DetailsLoaded(Ok(record)));

        assert!(product_type_fetches(&commands).is_empty());
        assert_eq!(editor.form().category_id, "");
        assert!(editor.product_type_options().is_empty());

        // A late answer to the pre-hydration fetch is stale too.
        editor.update(EditorEvent::ProductTypesLoaded {
            request: 1,
            result: Ok(vec![product_type(9, "X")]),
        });
        assert!(editor.product_type_options().is_empty());
    }

    #[test]
    fn test_submittable_form_always_emits_a_command() {
        let mut editor = ready_editor(None);
        fill(&mut editor);
        editor.update(EditorEvent::FieldChanged(
            ProductField::MaterialTypeId,
            "3000000000".into(),
        ));
        assert!(editor.can_submit());

        let commands = editor.update(EditorEvent::Submit);
        match commands.as_slice() {
            [EditorCommand::Create(payload)] => assert_eq!(payload.material_type_id, 3_000_000_000),
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_product_type_failure_leaves_list_unchanged() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::FieldChanged(ProductField::CategoryId, "3".into()));
        let commands = editor.update(EditorEvent::ProductTypesLoaded {
            request: 1,
            result: Err("Cannot reach the server. Check your connection.".into()),
        });
        assert_eq!(commands.len(), 1);
        assert!(editor.product_type_options().is_empty());
    }

    #[test]
    fn test_submit_create_scenario() {
        let mut editor = ready_editor(None);
        fill(&mut editor);
        assert!(editor.is_valid());
        assert!(editor.can_submit());

        let commands = editor.update(EditorEvent::Submit);
        let payload = match commands.as_slice() {
            [EditorCommand::Create(payload)] => payload.clone(),
            other => panic!("unexpected commands {:?}", other),
        };
        assert_eq!(payload.product_group_name_en, "A");
        assert_eq!(payload.weight, 5.0);
        assert!(payload.colors.is_empty());
        assert_eq!(editor.state(), EditorState::Submitting);
        assert!(editor.is_busy());
        assert!(!editor.can_submit());
    }

    #[test]
    fn test_submit_edit_sends_update_with_id() {
        let mut editor = ready_editor(Some(ProductGroupId(15)));
        editor.update(EditorEvent::FieldChanged(ProductField::Origin, "CN".into()));

        let commands = editor.update(EditorEvent::Submit);
        match commands.as_slice() {
            [EditorCommand::Update(id, payload)] => {
                assert_eq!(*id, ProductGroupId(15));
                assert_eq!(payload.origin, "CN");
                assert_eq!(payload.product_type_id, 7);
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_invalid_submit_shows_all_errors_without_command() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::FieldChanged(ProductField::NameEn, "A".into()));
        assert_eq!(editor.field_error(ProductField::Weight), None);

        let commands = editor.update(EditorEvent::Submit);
        assert!(commands.is_empty());
        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(
            editor.field_error(ProductField::Weight).as_deref(),
            Some("Weight is required")
        );
    }

    #[test]
    fn test_touched_field_shows_its_error() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::FieldChanged(ProductField::Weight, "heavy".into()));
        assert_eq!(
            editor.field_error(ProductField::Weight).as_deref(),
            Some("Weight must be a number")
        );
        assert_eq!(editor.field_error(ProductField::Origin), None);
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut editor = ready_editor(None);
        fill(&mut editor);
        assert_eq!(editor.update(EditorEvent::Submit).len(), 1);
        assert!(editor.update(EditorEvent::Submit).is_empty());
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let mut editor = ready_editor(None);
        fill(&mut editor);
        editor.update(EditorEvent::Submit);
        editor.update(EditorEvent::FieldChanged(ProductField::Origin, "CN".into()));
        editor.update(EditorEvent::ColorAdded);
        assert_eq!(editor.form().origin, "VN");
        assert!(editor.form().colors.is_empty());
    }

    #[test]
    fn test_successful_submit_closes_with_saved() {
        let mut editor = ready_editor(None);
        fill(&mut editor);
        editor.update(EditorEvent::Submit);

        let commands = editor.update(EditorEvent::SubmitFinished(Ok(())));
        assert_eq!(
            commands,
            vec![
                EditorCommand::Notify(NotificationKind::Success, "Product created".into()),
                EditorCommand::Close(DialogResult::Saved),
            ]
        );
        assert_eq!(editor.state(), EditorState::Closed);
    }

    #[test]
    fn test_failed_submit_keeps_dialog_and_draft() {
        let mut editor = ready_editor(None);
        fill(&mut editor);
        let before = editor.form().clone();
        editor.update(EditorEvent::Submit);

        let commands = editor.update(EditorEvent::SubmitFinished(Err("Product name already exists".into())));
        assert_eq!(
            commands,
            vec![EditorCommand::Notify(
                NotificationKind::Error,
                "Product name already exists".into()
            )]
        );
        assert_eq!(editor.state(), EditorState::Ready);
        assert_eq!(editor.form(), &before);
        assert!(editor.can_submit());
    }

    #[test]
    fn test_cancel_closes_and_drops_late_results() {
        let mut editor = ProductEditor::new(Some(ProductGroupId(15)));
        editor.update(EditorEvent::Open);

        let commands = editor.update(EditorEvent::Cancel);
        assert_eq!(commands, vec![EditorCommand::Close(DialogResult::Cancelled)]);

        assert!(editor.update(EditorEvent::DetailsLoaded(Ok(details(15)))).is_empty());
        assert!(editor.update(EditorEvent::SubmitFinished(Ok(()))).is_empty());
        assert_eq!(editor.form(), &ProductForm::default());
        assert_eq!(editor.state(), EditorState::Closed);
    }

    #[test]
    fn test_dirty_tracks_difference_from_baseline() {
        let mut editor = ready_editor(Some(ProductGroupId(15)));
        assert!(!editor.is_dirty());
        assert!(!editor.can_submit());

        editor.update(EditorEvent::FieldChanged(ProductField::Origin, "CN".into()));
        assert!(editor.is_dirty());
        editor.update(EditorEvent::FieldChanged(ProductField::Origin, "VN".into()));
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_color_events_edit_the_draft() {
        let mut editor = ready_editor(None);
        editor.update(EditorEvent::ColorAdded);
        editor.update(EditorEvent::ColorAdded);
        let keys = editor.form().colors.keys();

        editor.update(EditorEvent::ColorChanged(keys[1], ColorChange::Color("5".into())));
        editor.update(EditorEvent::ColorRemoved(keys[0]));

        assert_eq!(editor.form().colors.len(), 1);
        assert_eq!(editor.form().colors.get(keys[1]).unwrap().color_id, "5");
        assert!(editor.is_dirty());
    }
}
