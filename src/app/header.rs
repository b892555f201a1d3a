use leptos::prelude::*;

use crate::{config::site_config, content::ContentItem, overlay::ModalKind};

use super::links::{ItemIcon, ItemLink};

#[component]
pub fn Header(items: &'static [ContentItem], on_open: Callback<ModalKind>) -> impl IntoView {
    let brand = format!("{}.", site_config().owner.name);
    view! {
        <header class="fixed top-6 left-1/2 -translate-x-1/2 z-50">
            <nav class="nav-pill flex items-center gap-4 sm:gap-6">
                <a href="#home" class="text-lg font-semibold tracking-tight text-slate-900">
                    {brand}
                </a>
                <div class="w-px h-6 bg-slate-200" />
                <div class="flex items-center gap-3 sm:gap-4">
                    {items
                        .iter()
                        .map(|item| {
                            view! {
                                <ItemLink
                                    item
                                    on_open
                                    class="group flex items-center gap-2 text-sm font-medium text-slate-500 hover:text-slate-900 transition-colors"
                                >
                                    <ItemIcon item class="text-base" />
                                    <span class="hidden md:inline">{item.title.clone()}</span>
                                </ItemLink>
                            }
                        })
                        .collect_view()}
                </div>
            </nav>
        </header>
    }
}
