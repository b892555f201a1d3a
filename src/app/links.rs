use leptos::{either::EitherOf3, prelude::*};

use crate::{content::ContentItem, overlay::ModalKind};

/// Renders an item as an anchor, an overlay trigger or inert text depending on
/// its action.
#[component]
pub fn ItemLink(
    item: &'static ContentItem,
    #[prop(into)] class: String,
    #[prop(optional)] on_open: Option<Callback<ModalKind>>,
    children: Children,
) -> impl IntoView {
    let label = item.title.clone();
    match (item.link(), item.overlay()) {
        (Some(href), _) => {
            let external = item.opens_new_context();
            EitherOf3::A(view! {
                <a
                    href=href
                    class=class
                    title=label.clone()
                    aria-label=label
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {children()}
                </a>
            })
        }
        (None, Some(kind)) => EitherOf3::B(view! {
            <button
                type="button"
                class=class
                title=label.clone()
                aria-label=label
                on:click=move |_| {
                    if let Some(on_open) = on_open {
                        on_open.run(kind);
                    }
                }
            >
                {children()}
            </button>
        }),
        _ => EitherOf3::C(view! { <span class=class>{children()}</span> }),
    }
}

#[component]
pub fn ItemIcon(item: &'static ContentItem, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", item.icon.class()) aria-hidden="true" /> }
}
