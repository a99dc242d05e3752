use crate::domain::a001_perk::ui::details::PerkDetails;
use crate::domain::a001_perk::ui::list::PerkList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client-side routes.
///
/// The edit form (`/perks/:id/edit`) is mounted by the host application and
/// is not part of this router.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="p-6">
                <Routes fallback=|| view! { <p class="text-center py-12 text-zinc-600">"Page not found."</p> }>
                    <Route path=path!("/") view=PerkList />
                    <Route path=path!("/perks") view=PerkList />
                    <Route path=path!("/perks/:id") view=PerkDetails />
                </Routes>
            </main>
        </Router>
    }
}
