use leptos::prelude::*;

use crate::overlay::{ModalKind, Presence};

/// Backdrop plus window for one overlay. Stays mounted through the exit
/// animation; the backdrop and close control both dismiss it.
#[component]
pub fn ModalFrame(
    kind: ModalKind,
    #[prop(into)] presence: Signal<Presence>,
    on_close: Callback<()>,
    #[prop(optional)] width: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let width = if width.is_empty() { "max-w-2xl" } else { width };
    view! {
        <Show when=move || presence.get().is_mounted()>
            <div
                class=format!("fixed inset-0 {} flex items-center justify-center p-4", kind.z_class())
                role="dialog"
                aria-modal="true"
                aria-label=kind.label()
            >
                <div
                    class=move || {
                        format!(
                            "absolute inset-0 bg-slate-900/40 backdrop-blur-sm transition-opacity duration-300 {}",
                            presence.get().fade_class(),
                        )
                    }
                    on:click=move |_| on_close.run(())
                />
                <div class=move || {
                    format!(
                        "relative w-full {width} max-h-[90vh] overflow-y-auto bg-white rounded-3xl shadow-2xl transition-all duration-300 {}",
                        presence.get().pop_class(),
                    )
                }>
                    <button
                        type="button"
                        class="absolute top-5 right-5 z-10 w-10 h-10 rounded-full bg-slate-100 hover:bg-slate-200 text-slate-500 transition-colors"
                        aria-label="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
