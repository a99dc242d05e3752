use super::model::{BrowserConfirm, HttpPerkApi, RouterNavigator};
use super::theme::PerkTheme;
use super::view_model::{PerkDetailsState, PerkDetailsVm};
use super::view_state::{render_model, LoadedView, PerkDetailsView};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_perk::aggregate::PerkId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use std::rc::Rc;

/// Card blocks (merchant / description / created) share this frame.
const BLOCK_CLASS: &str = "bg-white rounded-xl p-4 shadow-sm border border-zinc-200";
const BLOCK_LABEL_CLASS: &str = "text-xs font-semibold text-zinc-500 uppercase tracking-wide";

#[component]
#[allow(non_snake_case)]
pub fn PerkDetails() -> impl IntoView {
    let state = RwSignal::new(PerkDetailsState::default());
    let vm = StoredValue::new_local(PerkDetailsVm::new(
        state,
        Rc::new(HttpPerkApi::new()),
        Rc::new(RouterNavigator::from_context()),
        Rc::new(BrowserConfirm),
    ));

    let params = use_params_map();
    let perk_id = Memo::new(move |_| params.with(|p| p.get("id")).map(PerkId::from));

    // Runs on mount and whenever the route id changes.
    Effect::new(move |_| {
        let id = perk_id.get();
        let vm = vm.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            vm.load(id).await;
        });
    });

    let on_delete = move || {
        let vm = vm.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            vm.delete().await;
        });
    };

    view! {
        <PageFrame page_id="a001_perk--detail" category=PAGE_CAT_DETAIL>
            {move || match state.with(render_model) {
                PerkDetailsView::Loading => loading_view(),
                PerkDetailsView::Missing { message, back_href } => missing_view(message, back_href),
                PerkDetailsView::Loaded(perk) => loaded_view(perk, on_delete),
            }}
        </PageFrame>
    }
}

fn loading_view() -> AnyView {
    view! { <div class="text-center py-12 text-zinc-600">"Loading..."</div> }.into_any()
}

fn missing_view(message: String, back_href: &'static str) -> AnyView {
    view! {
        <div class="text-center py-12">
            <p class="text-red-600 mb-4">{message}</p>
            <a href=back_href class="btn">"Back to Perks"</a>
        </div>
    }
    .into_any()
}

fn loaded_view(perk: LoadedView, on_delete: impl Fn() + Copy + Send + Sync + 'static) -> AnyView {
    let theme: &'static PerkTheme = perk.theme;

    view! {
        <div class="mb-4">
            <a href=perk.back_href class="text-sm text-zinc-600 hover:text-zinc-900">
                "← Back to all perks"
            </a>
        </div>

        <div class=format!("card bg-gradient-to-br {} {} border-2", theme.gradient, theme.border)>
            <div class="flex justify-center mb-4">
                <span
                    class=format!("material-symbols-outlined {}", theme.icon_color)
                    style="font-size: 80px; font-weight: 300;"
                >
                    {theme.icon}
                </span>
            </div>

            <h1 class="text-4xl md:text-5xl font-bold text-center text-zinc-900 mb-6">
                {perk.title}
            </h1>

            <div class="flex justify-center mb-6">
                <span class=format!(
                    "{} px-4 py-2 rounded-full text-sm font-semibold uppercase tracking-wide",
                    theme.badge,
                )>{perk.category_label}</span>
            </div>

            {perk.discount_badge.map(|badge| view! {
                <div class="flex justify-center mb-8">
                    <div class=format!(
                        "{} bg-white border-2 {} rounded-2xl px-8 py-4 shadow-lg",
                        theme.accent_text,
                        theme.border,
                    )>
                        <div class="text-5xl font-bold text-center">{badge}</div>
                        <div class="text-sm font-semibold text-center uppercase tracking-wide mt-1">
                            "Discount"
                        </div>
                    </div>
                </div>
            })}

            {perk.error.map(|e| view! {
                <p class="text-red-600 text-center mb-4" role="alert">{e}</p>
            })}

            <div class="space-y-4 mb-8">
                {perk.merchant.map(|merchant| view! {
                    <div class=BLOCK_CLASS>
                        <div class=format!("{BLOCK_LABEL_CLASS} mb-1")>"Merchant"</div>
                        <div class=format!("text-xl font-semibold {}", theme.accent_text)>
                            {merchant}
                        </div>
                    </div>
                })}

                {perk.description.map(|description| view! {
                    <div class=BLOCK_CLASS>
                        <div class=format!("{BLOCK_LABEL_CLASS} mb-2")>"Description"</div>
                        <div class="text-zinc-700 leading-relaxed">{description}</div>
                    </div>
                })}

                {perk.created.map(|created| view! {
                    <div class=BLOCK_CLASS>
                        <div class=format!("{BLOCK_LABEL_CLASS} mb-1")>"Created"</div>
                        <div class="text-sm text-zinc-700">{created}</div>
                    </div>
                })}
            </div>

            <div class="flex gap-3 justify-center flex-wrap">
                <a
                    href=perk.edit_href
                    class=format!(
                        "btn bg-white {} border-2 {} hover:bg-opacity-90 font-semibold px-6 py-3 flex items-center gap-2",
                        theme.border,
                        theme.accent_text,
                    )
                >
                    <span class="material-symbols-outlined" style="font-size: 20px;">"edit"</span>
                    "Edit Perk"
                </a>
                <button
                    class="btn bg-white border-2 border-red-200 text-red-600 hover:bg-red-50 font-semibold px-6 py-3 flex items-center gap-2"
                    disabled=perk.delete_disabled
                    on:click=move |_| on_delete()
                >
                    <span class="material-symbols-outlined" style="font-size: 20px;">"delete"</span>
                    {perk.delete_label}
                </button>
            </div>
        </div>
    }
    .into_any()
}
