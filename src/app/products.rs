use leptos::{either::Either, prelude::*};

use crate::content::{ContentItem, ItemId};

use super::{
    ecosystem::SectionHeading,
    links::{ItemIcon, ItemLink},
};

#[component]
pub fn Products(items: &'static [ContentItem], on_open_folder: Callback<ItemId>) -> impl IntoView {
    view! {
        <section id="products" class="max-w-6xl mx-auto px-6 py-24">
            <SectionHeading kicker="Products" title="Things I've shipped" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                {items
                    .iter()
                    .map(|item| view! { <ProductCard item on_open_folder /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(item: &'static ContentItem, on_open_folder: Callback<ItemId>) -> impl IntoView {
    let class = "glass-card group overflow-hidden flex flex-col text-left hover:-translate-y-1 transition-transform";
    if item.nested().is_some() {
        let id = item.id.clone();
        Either::Left(view! {
            <button
                type="button"
                class=class
                on:click=move |_| on_open_folder.run(id.clone())
            >
                <ProductBody item folder=true />
            </button>
        })
    } else {
        Either::Right(view! {
            <ItemLink item class=class>
                <ProductBody item folder=false />
            </ItemLink>
        })
    }
}

#[component]
fn ProductBody(item: &'static ContentItem, folder: bool) -> impl IntoView {
    view! {
        <div class="relative h-56 overflow-hidden bg-slate-100">
            {item
                .image
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=item.title.clone()
                            class="w-full h-full object-cover group-hover:scale-105 transition-transform duration-700"
                        />
                    }
                })}
            {folder
                .then(|| {
                    view! {
                        <div class="absolute inset-0 flex items-center justify-center bg-slate-900/0 group-hover:bg-slate-900/40 transition-colors">
                            <span class="opacity-0 group-hover:opacity-100 transition-opacity text-white font-semibold">
                                "Click to View Folder"
                            </span>
                        </div>
                    }
                })}
        </div>
        <div class="p-8 flex flex-col flex-1">
            <h3 class="text-2xl font-semibold text-slate-900">{item.title.clone()}</h3>
            {item
                .subtitle
                .clone()
                .map(|s| view! { <p class="mt-1 text-sm font-medium text-slate-400">{s}</p> })}
            {item
                .description
                .clone()
                .map(|d| view! { <p class="mt-4 text-slate-500 leading-relaxed">{d}</p> })}
            <Tags tags=item.tags.as_slice() />
            <span class="mt-auto pt-6 text-sm font-semibold text-blue-600 flex items-center gap-2">
                {item.cta.clone()}
                <ItemIcon item />
            </span>
        </div>
    }
}

#[component]
pub fn Tags(tags: &'static [String]) -> impl IntoView {
    view! {
        <div class="mt-4 flex flex-wrap gap-2">
            {tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="px-3 py-1 rounded-full bg-slate-100 text-xs font-medium text-slate-600">
                            {tag.clone()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
