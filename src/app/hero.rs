use leptos::prelude::*;

use crate::config::site_config;

#[component]
pub fn Hero() -> impl IntoView {
    let owner = &site_config().owner;
    view! {
        <section id="home" class="max-w-6xl mx-auto px-6 pt-40 pb-24">
            <div class="flex flex-col-reverse lg:flex-row items-center gap-12">
                <div class="flex-1 text-center lg:text-left">
                    <span class="gold-badge">"Available for projects"</span>
                    <h1 class="mt-6 text-5xl md:text-6xl font-semibold tracking-tight text-slate-900">
                        "Hi, I'm " {owner.name.clone()}
                    </h1>
                    <p class="mt-6 text-xl text-slate-500 leading-relaxed max-w-xl">
                        {owner.tagline.clone()}
                    </p>
                    <p class="mt-4 text-sm text-slate-400">
                        <i class="extra-location mr-2" aria-hidden="true" />
                        {owner.location.clone()}
                    </p>
                </div>
                <div class="flex-shrink-0">
                    <img
                        src=owner.portrait.clone()
                        alt=owner.name.clone()
                        class="w-64 h-64 md:w-80 md:h-80 rounded-full object-cover shadow-2xl ring-8 ring-white"
                    />
                </div>
            </div>
        </section>
    }
}
