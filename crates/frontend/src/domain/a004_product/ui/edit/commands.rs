//! Runs editor commands against a gateway and turns the outcome into the
//! event the editor expects back. Errors are resolved to display messages here.

use super::editor::{EditorCommand, EditorEvent};
use crate::domain::a004_product::api::ProductGateway;
use crate::shared::api_error::{error_message, ApiError};

fn resolve<T>(what: &str, result: Result<T, ApiError>) -> Result<T, String> {
    result.map_err(|e| {
        log::warn!("{} failed: {}", what, e);
        error_message(&e)
    })
}

/// `None` for commands the view model handles itself (notify, close).
pub async fn perform(gateway: &dyn ProductGateway, command: EditorCommand) -> Option<EditorEvent> {
    let event = match command {
        EditorCommand::LoadCategories => EditorEvent::CategoriesLoaded(resolve(
            "list categories",
            gateway.list_enabled_categories().await,
        )),
        EditorCommand::LoadColors => EditorEvent::ColorsLoaded(resolve(
            "list colors",
            gateway.list_enabled_colors().await,
        )),
        EditorCommand::LoadDetails(id) => EditorEvent::DetailsLoaded(resolve(
            "get product",
            gateway.get_product_details(id).await,
        )),
        EditorCommand::LoadProductTypes {
            category_id,
            request,
        } => EditorEvent::ProductTypesLoaded {
            request,
            result: resolve(
                "list product types",
                gateway.list_enabled_product_types(category_id).await,
            ),
        },
        EditorCommand::Create(payload) => {
            let created = resolve("create product", gateway.create_product(&payload).await);
            match &created {
                Ok(Some(id)) => log::info!("product {} created", id.value()),
                Ok(None) => log::info!("product created"),
                Err(_) => {}
            }
            EditorEvent::SubmitFinished(created.map(|_| ()))
        }
        EditorCommand::Update(id, payload) => EditorEvent::SubmitFinished(resolve(
            "update product",
            gateway.update_product(id, &payload).await,
        )),
        EditorCommand::Notify(..) | EditorCommand::Close(_) => return None,
    };
    Some(event)
}
