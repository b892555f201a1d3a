use leptos::prelude::*;

use crate::content::ContentItem;

use super::links::{ItemIcon, ItemLink};

#[component]
pub fn Ecosystem(items: &'static [ContentItem]) -> impl IntoView {
    view! {
        <section id="ecosystem" class="max-w-6xl mx-auto px-6 py-24">
            <SectionHeading kicker="The Ecosystem" title="Where the work lives" />
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {items.iter().map(|item| view! { <EcosystemCard item /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn EcosystemCard(item: &'static ContentItem) -> impl IntoView {
    let style = item.theme.style();
    view! {
        <ItemLink
            item
            class=format!(
                "{} group relative overflow-hidden p-8 flex flex-col justify-between min-h-[280px] hover:-translate-y-1 transition-transform",
                style.surface,
            )
        >
            {item
                .image
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=""
                            class="absolute inset-0 w-full h-full object-cover group-hover:scale-105 transition-transform duration-700"
                        />
                    }
                })}
            <div class=format!("absolute inset-0 {}", style.overlay) />
            <div class="relative z-10 flex items-center justify-between">
                <span class=format!("px-3 py-1 rounded-full text-xs font-semibold {}", style.badge)>
                    <ItemIcon item class="mr-2" />
                    <span class=style.kicker>{item.kicker.clone()}</span>
                </span>
            </div>
            <div class="relative z-10 mt-12">
                <h3 class=format!("text-3xl font-semibold mb-2 {}", style.title)>
                    {item.title.clone()}
                </h3>
                {item
                    .description
                    .clone()
                    .map(|d| view! { <p class=format!("text-base mb-6 {}", style.body)>{d}</p> })}
                {item
                    .cta
                    .clone()
                    .map(|cta| {
                        view! {
                            <span class=format!(
                                "text-sm font-semibold group-hover:underline {}",
                                style.cta,
                            )>{cta} " →"</span>
                        }
                    })}
            </div>
        </ItemLink>
    }
}

#[component]
pub fn SectionHeading(kicker: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="mb-12 text-center">
            <p class="text-sm font-semibold uppercase tracking-widest text-slate-400">{kicker}</p>
            <h2 class="mt-2 text-4xl font-semibold tracking-tight text-slate-900">{title}</h2>
        </div>
    }
}
