use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::{config::site_config, content::ContentItem, overlay::ModalKind};

use super::links::{ItemIcon, ItemLink};

const BUILD_TIME: &str = env!("BUILD_TIME");

fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
pub fn Footer(
    navigation: &'static [ContentItem],
    social: &'static [ContentItem],
    on_open: Callback<ModalKind>,
) -> impl IntoView {
    let owner = &site_config().owner;
    let email = &site_config().contact.recipient;
    view! {
        <footer class="max-w-6xl mx-auto px-6 pt-24 pb-12 border-t border-slate-200">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                <div>
                    <h3 class="text-xl font-semibold text-slate-900">{owner.name.clone()}</h3>
                    <p class="mt-3 text-sm text-slate-500 leading-relaxed">{owner.tagline.clone()}</p>
                    <button
                        type="button"
                        class="mt-6 px-5 py-2 rounded-full bg-slate-900 text-white text-sm font-semibold hover:bg-slate-700 transition-colors"
                        on:click=move |_| on_open.run(ModalKind::Contact)
                    >
                        "Get in touch"
                    </button>
                </div>
                <div>
                    <h4 class="text-sm font-semibold uppercase tracking-widest text-slate-400">
                        "Explore"
                    </h4>
                    <ul class="mt-4 space-y-2">
                        {navigation
                            .iter()
                            .map(|item| {
                                view! {
                                    <li>
                                        <ItemLink
                                            item
                                            on_open
                                            class="text-sm text-slate-600 hover:text-slate-900 transition-colors"
                                        >
                                            {item.title.clone()}
                                        </ItemLink>
                                    </li>
                                }
                            })
                            .collect_view()}
                        <li>
                            <a
                                href=owner.cv_path.clone()
                                download=""
                                class="text-sm text-slate-600 hover:text-slate-900 transition-colors"
                            >
                                "Download CV"
                            </a>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4 class="text-sm font-semibold uppercase tracking-widest text-slate-400">
                        "Connect"
                    </h4>
                    <a
                        href=format!("mailto:{email}")
                        class="mt-4 block text-sm text-slate-600 hover:text-slate-900"
                    >
                        {email.clone()}
                    </a>
                    <div class="mt-4 flex gap-3">
                        {social
                            .iter()
                            .map(|item| {
                                view! {
                                    <ItemLink
                                        item
                                        class="w-9 h-9 flex items-center justify-center rounded-full bg-slate-100 text-slate-500 hover:text-slate-900 transition-colors"
                                    >
                                        <ItemIcon item />
                                    </ItemLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <p class="mt-16 text-xs text-slate-400">
                {format!("© {} {}. All rights reserved.", copyright_year(), owner.name)}
            </p>
        </footer>
    }
}
