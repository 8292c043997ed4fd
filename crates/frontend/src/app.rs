use crate::domain::a004_product::ui::list::ProductList;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shared by the list page and every dialog it opens.
    provide_context(ModalStackService::new());
    provide_context(NotificationService::new());

    view! {
        <ProductList />
        <ModalHost />
        <NotificationHost />
    }
}
