use leptos::prelude::*;

use crate::{content::ContentItem, overlay::ModalKind};

use super::links::{ItemIcon, ItemLink};

/// Floating bar pinned to the bottom of the viewport.
#[component]
pub fn ContactDock(social: &'static [ContentItem], on_open: Callback<ModalKind>) -> impl IntoView {
    view! {
        <div class="fixed bottom-6 left-1/2 -translate-x-1/2 z-50">
            <div class="nav-pill flex items-center gap-3">
                <button
                    type="button"
                    class="flex items-center gap-2 px-5 py-2 rounded-full bg-slate-900 text-white text-sm font-semibold hover:bg-slate-700 transition-colors"
                    on:click=move |_| on_open.run(ModalKind::Contact)
                >
                    <i class="extra-email" aria-hidden="true" />
                    "Email"
                </button>
                <div class="w-px h-6 bg-slate-200" />
                {social
                    .iter()
                    .map(|item| {
                        view! {
                            <ItemLink
                                item
                                class="w-9 h-9 flex items-center justify-center rounded-full text-slate-500 hover:text-slate-900 hover:bg-slate-100 transition-colors"
                            >
                                <ItemIcon item />
                            </ItemLink>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
