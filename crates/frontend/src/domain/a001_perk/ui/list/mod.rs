use crate::domain::a001_perk::ui::details::model::{HttpPerkApi, PerkApi};
use crate::domain::a001_perk::ui::details::view_state::format_percent;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_perk::aggregate::Perk;
use contracts::shared::routes::perk_detail_path;
use leptos::prelude::*;
use thaw::*;

const LIST_FALLBACK_MESSAGE: &str = "Failed to load perks";

#[component]
#[allow(non_snake_case)]
pub fn PerkList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Perk>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match HttpPerkApi::new().list().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => {
                    log::warn!("perk list: {}", e);
                    set_error.set(Some(
                        e.user_message()
                            .unwrap_or_else(|| LIST_FALLBACK_MESSAGE.to_string()),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    view! {
        <PageFrame page_id="a001_perk--list" category=PAGE_CAT_LIST>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1 class="text-2xl font-bold">"Perks"</h1>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| fetch()
                    disabled=Signal::derive(move || loading.get())
                >
                    "Refresh"
                </Button>
            </Flex>

            {move || error.get().map(|e| view! {
                <p class="text-red-600 my-4" role="alert">{e}</p>
            })}

            <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=true min_width=200.0>"Title"</TableHeaderCell>
                            <TableHeaderCell min_width=120.0>"Category"</TableHeaderCell>
                            <TableHeaderCell min_width=80.0>"Discount"</TableHeaderCell>
                            <TableHeaderCell resizable=true min_width=150.0>"Merchant"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || items.get().into_iter().map(|perk| {
                            let href = perk_detail_path(perk.id.as_str());
                            let discount = perk.visible_discount().map(format_percent).unwrap_or_default();
                            let merchant = perk.merchant().unwrap_or_default().to_string();
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a href=href class="text-zinc-900 hover:underline">{perk.title}</a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{perk.category}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{discount}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{merchant}</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>
        </PageFrame>
    }
}
