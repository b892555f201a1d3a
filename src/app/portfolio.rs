use leptos::{either::EitherOf3, prelude::*};

use crate::{
    content::{ContentItem, ItemId},
    overlay::ModalKind,
    state::ModalStack,
};

use super::{links::ItemIcon, overlay::ModalFrame, products::Tags};

#[component]
pub fn PortfolioFolder(
    stack: RwSignal<ModalStack>,
    products: &'static [ContentItem],
    on_close: Callback<()>,
) -> impl IntoView {
    let presence = Memo::new(move |_| stack.with(|s| s.presence(ModalKind::Portfolio)));
    let folder = Memo::new(move |_| stack.with(|s| s.portfolio.state().folder.active().cloned()));
    let project =
        Memo::new(move |_| stack.with(|s| s.portfolio.state().project.active().cloned()));

    let on_select = Callback::new(move |id: ItemId| {
        stack.update(|s| {
            s.portfolio.state_mut().open_project(id);
        })
    });
    let on_back = Callback::new(move |_: ()| {
        stack.update(|s| {
            s.portfolio.state_mut().back();
        })
    });

    view! {
        <ModalFrame kind=ModalKind::Portfolio presence on_close width="max-w-5xl">
            {move || {
                let Some(product) = folder
                    .get()
                    .and_then(|id| products.iter().find(|p| p.id == id)) else {
                    return EitherOf3::C(
                        view! { <p class="p-12 text-center text-slate-400">"Nothing here yet."</p> },
                    );
                };
                let projects = product.nested().unwrap_or_default();
                match project.get().and_then(|id| projects.iter().find(|p| p.id == id)) {
                    Some(detail) => EitherOf3::A(view! { <ProjectDetail project=detail on_back /> }),
                    None => EitherOf3::B(view! { <ProjectGrid product projects on_select /> }),
                }
            }}
        </ModalFrame>
    }
}

#[component]
fn ProjectGrid(
    product: &'static ContentItem,
    projects: &'static [ContentItem],
    on_select: Callback<ItemId>,
) -> impl IntoView {
    view! {
        <div class="p-8 md:p-12">
            <p class="text-sm font-semibold uppercase tracking-widest text-slate-400">
                {product.subtitle.clone()}
            </p>
            <h2 class="mt-2 text-3xl font-semibold text-slate-900">{product.title.clone()}</h2>
            {product
                .description
                .clone()
                .map(|d| view! { <p class="mt-3 text-slate-500">{d}</p> })}
            <div class="mt-10 grid grid-cols-1 md:grid-cols-2 gap-6">
                {projects
                    .iter()
                    .map(|project| {
                        let id = project.id.clone();
                        view! {
                            <button
                                type="button"
                                class="glass-card group overflow-hidden text-left hover:-translate-y-1 transition-transform"
                                on:click=move |_| on_select.run(id.clone())
                            >
                                {project
                                    .image
                                    .clone()
                                    .map(|src| {
                                        view! {
                                            <img
                                                src=src
                                                alt=project.title.clone()
                                                class="w-full h-48 object-cover group-hover:scale-105 transition-transform duration-700"
                                            />
                                        }
                                    })}
                                <div class="p-6">
                                    <h3 class="text-xl font-semibold text-slate-900">
                                        {project.title.clone()}
                                    </h3>
                                    <p class="text-sm text-slate-400">{project.subtitle.clone()}</p>
                                </div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(project: &'static ContentItem, on_back: Callback<()>) -> impl IntoView {
    view! {
        <div class="p-8 md:p-12">
            <button
                type="button"
                class="text-sm font-semibold text-slate-500 hover:text-slate-900 transition-colors"
                on:click=move |_| on_back.run(())
            >
                "← Back to folder"
            </button>
            {project
                .image
                .clone()
                .map(|src| {
                    view! {
                        <img
                            src=src
                            alt=project.title.clone()
                            class="mt-6 w-full h-72 object-cover rounded-2xl"
                        />
                    }
                })}
            <h2 class="mt-8 text-3xl font-semibold text-slate-900">{project.title.clone()}</h2>
            <p class="text-sm font-medium text-slate-400">{project.subtitle.clone()}</p>
            {project
                .description
                .clone()
                .map(|d| view! { <p class="mt-4 text-slate-500 leading-relaxed">{d}</p> })}
            {project
                .quote
                .clone()
                .map(|q| {
                    view! {
                        <blockquote class="mt-6 pl-4 border-l-4 border-amber-400 italic text-slate-600">
                            {q}
                        </blockquote>
                    }
                })}
            <Tags tags=project.tags.as_slice() />
            {project
                .link()
                .map(|href| {
                    view! {
                        <a
                            href=href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="mt-8 inline-flex items-center gap-2 px-6 py-3 rounded-full bg-slate-900 text-white font-semibold hover:bg-slate-700 transition-colors"
                        >
                            "Visit Site"
                            <ItemIcon item=project />
                        </a>
                    }
                })}
        </div>
    }
}
