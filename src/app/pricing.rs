use leptos::prelude::*;

use crate::{
    content::{ContentItem, ItemId},
    overlay::ModalKind,
    state::ModalStack,
};

use super::{links::ItemIcon, overlay::ModalFrame};

#[component]
pub fn PricingModal(
    stack: RwSignal<ModalStack>,
    tiers: &'static [ContentItem],
    on_close: Callback<()>,
    on_inquire: Callback<(ItemId, String)>,
    on_start_brief: Callback<()>,
) -> impl IntoView {
    let presence = Memo::new(move |_| stack.with(|s| s.presence(ModalKind::Pricing)));
    let selected = Memo::new(move |_| stack.with(|s| s.pricing.state().tier.active().cloned()));
    let on_select = Callback::new(move |id: ItemId| {
        stack.update(|s| {
            s.pricing.state_mut().tier.select(id);
        })
    });

    view! {
        <ModalFrame kind=ModalKind::Pricing presence on_close width="max-w-6xl">
            <div class="p-8 md:p-12">
                <p class="text-sm font-semibold uppercase tracking-widest text-slate-400">
                    "Studio Pricing"
                </p>
                <h2 class="mt-2 text-3xl font-semibold text-slate-900">
                    "Pick the engagement that fits"
                </h2>
                <div class="mt-10 grid grid-cols-1 lg:grid-cols-3 gap-6">
                    {tiers
                        .iter()
                        .map(|tier| view! { <TierCard tier selected on_select on_inquire /> })
                        .collect_view()}
                </div>
                <div class="mt-10 p-6 rounded-2xl bg-slate-50 flex flex-col md:flex-row items-center justify-between gap-4">
                    <div>
                        <h3 class="font-semibold text-slate-900">"Enterprise & custom scopes"</h3>
                        <p class="text-sm text-slate-500">
                            "Not sure where you fit? Send a structured brief instead."
                        </p>
                    </div>
                    <button
                        type="button"
                        class="px-6 py-3 rounded-full bg-slate-900 text-white font-semibold hover:bg-slate-700 transition-colors"
                        on:click=move |_| on_start_brief.run(())
                    >
                        "Custom Architecture Brief"
                    </button>
                </div>
            </div>
        </ModalFrame>
    }
}

#[component]
fn TierCard(
    tier: &'static ContentItem,
    selected: Memo<Option<ItemId>>,
    on_select: Callback<ItemId>,
    on_inquire: Callback<(ItemId, String)>,
) -> impl IntoView {
    let style = tier.theme.style();
    let id = tier.id.clone();
    let is_selected = {
        let id = id.clone();
        move || selected.with(|s| s.as_ref() == Some(&id))
    };
    let select_id = id.clone();
    view! {
        <div
            class=move || {
                format!(
                    "relative p-8 rounded-3xl border cursor-pointer transition-all flex flex-col {} {}",
                    if tier.highlight { "bg-slate-900 text-white border-slate-900" } else { "bg-white border-slate-200" },
                    if is_selected() { "ring-4 ring-blue-400 -translate-y-1" } else { "" },
                )
            }
            on:click=move |_| on_select.run(select_id.clone())
        >
            {tier
                .highlight
                .then(|| {
                    view! {
                        <span class="absolute -top-3 left-8 gold-badge">"Most Popular"</span>
                    }
                })}
            <div class=format!(
                "w-12 h-12 rounded-2xl flex items-center justify-center text-xl {}",
                style.badge,
            )>
                <ItemIcon item=tier />
            </div>
            <h3 class="mt-6 text-2xl font-semibold">{tier.title.clone()}</h3>
            <p class="text-sm opacity-70">{tier.subtitle.clone()}</p>
            <p class="mt-4 text-4xl font-semibold tracking-tight">{tier.kicker.clone()}</p>
            {tier
                .description
                .clone()
                .map(|d| view! { <p class="mt-4 text-sm opacity-80 leading-relaxed">{d}</p> })}
            <ul class="mt-6 space-y-2 text-sm flex-1">
                {tier
                    .tags
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="flex gap-2">
                                <span class="text-emerald-500">"✓"</span>
                                {feature.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class=if tier.highlight {
                    "mt-8 w-full py-3 rounded-full bg-white text-slate-900 font-semibold hover:bg-slate-100 transition-colors"
                } else {
                    "mt-8 w-full py-3 rounded-full bg-slate-900 text-white font-semibold hover:bg-slate-700 transition-colors"
                }
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_inquire.run((id.clone(), tier.title.clone()));
                }
            >
                {format!("Inquire for {}", tier.title)}
            </button>
        </div>
    }
}
