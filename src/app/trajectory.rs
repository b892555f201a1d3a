use leptos::prelude::*;

use crate::content::ContentItem;

use super::{ecosystem::SectionHeading, links::ItemIcon};

#[component]
pub fn Trajectory(items: &'static [ContentItem]) -> impl IntoView {
    view! {
        <section id="trajectory" class="max-w-5xl mx-auto px-6 py-24">
            <SectionHeading kicker="The Journey" title="Trajectory" />
            <div class="relative">
                <div class="absolute left-4 md:left-1/2 top-0 bottom-0 w-px bg-slate-200 md:-translate-x-1/2" />
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| view! { <Milestone item left=i % 2 == 0 /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Milestone(item: &'static ContentItem, left: bool) -> impl IntoView {
    let row = if left { "md:flex-row" } else { "md:flex-row-reverse" };
    let align = if left { "md:text-right md:pr-12" } else { "md:text-left md:pl-12" };
    let node = if item.highlight {
        "timeline-node timeline-node-active"
    } else {
        "timeline-node"
    };
    view! {
        <div class=format!("relative flex flex-col {row} items-start md:items-center mb-16")>
            <div class=format!("w-full md:w-1/2 pl-12 md:pl-0 {align}")>
                <span class="gold-badge">{item.kicker.clone()}</span>
                <h3 class="mt-3 text-2xl font-semibold text-slate-900">{item.title.clone()}</h3>
                {item
                    .subtitle
                    .clone()
                    .map(|s| view! { <p class="text-sm font-medium text-slate-400">{s}</p> })}
                {item
                    .description
                    .clone()
                    .map(|d| view! { <p class="mt-3 text-slate-500 leading-relaxed">{d}</p> })}
            </div>
            <div class=format!("absolute left-4 md:left-1/2 -translate-x-1/2 {node}")>
                <ItemIcon item class="text-xs" />
            </div>
            <div class="hidden md:block md:w-1/2" />
        </div>
    }
}
