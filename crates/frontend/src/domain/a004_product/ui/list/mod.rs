use crate::domain::a004_product::api::{HttpProductGateway, ProductGateway};
use crate::domain::a004_product::ui::edit::{DialogResult, ProductEditDialog};
use crate::shared::api_error::error_message;
use crate::shared::date_utils::{format_timestamp, format_weight};
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalOptions, ModalStackService};
use contracts::domain::a004_product::ProductListItem;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");

    let items = RwSignal::new(Vec::<ProductListItem>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);

    let fetch = move || {
        loading.set(true);
        spawn_local(async move {
            match HttpProductGateway.list_products().await {
                Ok(products) => {
                    log::debug!("fetched {} products", products.len());
                    items.try_set(products);
                    error.try_set(None);
                }
                Err(e) => {
                    log::warn!("failed to fetch products: {}", e);
                    error.try_set(Some(error_message(&e)));
                }
            }
            loading.try_set(false);
        });
    };

    Effect::new(move |_| {
        fetch();
    });

    let open_dialog = move |product: Option<ProductListItem>| {
        let submitting = RwSignal::new(false);
        let dismiss_requests = RwSignal::new(0u64);
        let options = ModalOptions::with_style("width: min(960px, 95vw);")
            .guarded_by(move || !submitting.try_get_untracked().unwrap_or(false))
            .dismissed_by(move || {
                dismiss_requests.try_update(|n| *n += 1);
            });

        modal_stack.push(options, move |handle| {
            let on_close = Callback::new(move |result: DialogResult| {
                handle.close();
                if result == DialogResult::Saved {
                    fetch();
                }
            });
            view! {
                <ProductEditDialog
                    product=product.clone()
                    on_close=on_close
                    submitting=submitting
                    dismiss_requests=dismiss_requests
                />
            }
            .into_any()
        });
    };

    view! {
        <div id="a004_product--list" class="page">
            <div style="display: flex; justify-content: space-between; align-items: center;">
                <h1 style="font-size: 24px; font-weight: bold;">"Products"</h1>
                <div style="display: flex; gap: 8px;">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_dialog(None)>
                        {icon("plus")}
                        " New product"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| fetch()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div style="margin-top: 16px;">
                {move || error.get().map(|e| view! {
                    <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; display: flex; align-items: center; gap: 8px;">
                        <span style="color: var(--color-error); font-size: 18px;">"⚠"</span>
                        <span style="color: var(--color-error);">{e}</span>
                    </div>
                })}
            </div>

            <Table attr:style="margin-top: 20px;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=true min_width=220.0>"Name (EN)"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Name (RU)"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=140.0>"Category"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=140.0>"Product type"</TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Weight"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Origin"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Updated"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        items.get().into_iter().map(|item| {
                            let for_dialog = item.clone();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a
                                                href="#"
                                                style="color: var(--colorBrandForeground1); text-decoration: none; cursor: pointer;"
                                                on:click=move |e: leptos::ev::MouseEvent| {
                                                    e.prevent_default();
                                                    open_dialog(Some(for_dialog.clone()));
                                                }
                                            >
                                                {item.product_name_en.clone()}
                                            </a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{item.product_name_ru.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{item.category_name.clone().unwrap_or_default()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{item.product_type_name.clone().unwrap_or_default()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_weight(item.weight)}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{item.origin.clone().unwrap_or_default()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{format_timestamp(item.updated_at.as_ref())}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
