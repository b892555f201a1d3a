use leptos::{either::Either, prelude::*};

use crate::{
    config::site_config,
    contact::{CollaboratorError, Field, Mode, MessageComposer, OutgoingMessage},
    overlay::ModalKind,
    state::ModalStack,
};

use super::overlay::ModalFrame;

/// Hands the message to the visitor's mail client via a `mailto:` URI.
struct MailtoComposer;

impl MessageComposer for MailtoComposer {
    fn compose(&self, message: &OutgoingMessage) -> Result<(), CollaboratorError> {
        window()
            .open_with_url_and_target(&message.mailto_uri(), "_blank")
            .map(|_| ())
            .map_err(|_| CollaboratorError::MailClientUnavailable)
    }
}

#[component]
pub fn ContactModal(stack: RwSignal<ModalStack>, on_close: Callback<()>) -> impl IntoView {
    let presence = Memo::new(move |_| stack.with(|s| s.presence(ModalKind::Contact)));
    let mode = Memo::new(move |_| stack.with(|s| s.contact.state().form.mode()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let advanced = stack
            .try_update(|s| {
                let form = &mut s.contact.state_mut().form;
                !form.is_last_step() && form.next()
            })
            .unwrap_or(false);
        if advanced {
            return;
        }
        let sent = stack
            .try_update(|s| {
                s.contact
                    .state_mut()
                    .submit(&MailtoComposer, &site_config().contact)
            })
            .is_some_and(|res| res.is_ok());
        if sent {
            on_close.run(());
        }
    };

    view! {
        <ModalFrame kind=ModalKind::Contact presence on_close>
            <div class="p-8 md:p-10">
                <p class="text-sm font-semibold uppercase tracking-widest text-slate-400">
                    {move || mode.get().title()}
                </p>
                <h2 class="mt-2 text-3xl font-semibold text-slate-900">"Let's build something"</h2>
                <ModeToggle stack mode />
                <form class="mt-8 space-y-5" on:submit=on_submit novalidate=true>
                    {move || match mode.get() {
                        Mode::Standard => Either::Left(view! { <StandardFields stack /> }),
                        Mode::Strategist => Either::Right(view! { <StrategistWizard stack /> }),
                    }}
                </form>
                <Notice stack />
                <CopyEmail stack />
            </div>
        </ModalFrame>
    }
}

#[component]
fn ModeToggle(stack: RwSignal<ModalStack>, mode: Memo<Mode>) -> impl IntoView {
    let button = move |target: Mode| {
        view! {
            <button
                type="button"
                class=move || {
                    if mode.get() == target {
                        "flex-1 py-2 rounded-full bg-white shadow text-sm font-semibold text-slate-900"
                    } else {
                        "flex-1 py-2 rounded-full text-sm font-medium text-slate-500 hover:text-slate-900"
                    }
                }
                on:click=move |_| stack.update(|s| s.contact.state_mut().form.set_mode(target))
            >
                {target.title()}
            </button>
        }
    };
    view! {
        <div class="mt-6 flex gap-1 p-1 rounded-full bg-slate-100">
            {button(Mode::Standard)}
            {button(Mode::Strategist)}
        </div>
    }
}

#[component]
fn StandardFields(stack: RwSignal<ModalStack>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
            <FieldInput stack field=Field::Name />
            <FieldInput stack field=Field::Subject />
        </div>
        <FieldInput stack field=Field::Message multiline=true />
        <button
            type="submit"
            class="w-full py-4 rounded-full bg-slate-900 text-white font-semibold hover:bg-slate-700 transition-colors"
        >
            "Send Message"
        </button>
    }
}

#[component]
fn StrategistWizard(stack: RwSignal<ModalStack>) -> impl IntoView {
    let last = Memo::new(move |_| stack.with(|s| s.contact.state().form.is_last_step()));
    let step = Memo::new(move |_| stack.with(|s| s.contact.state().form.step()));
    let field = Memo::new(move |_| stack.with(|s| s.contact.state().form.current_field()));

    view! {
        <div class="flex items-center gap-2" aria-label="Progress">
            {Mode::Strategist
                .fields()
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let f = *f;
                    view! {
                        <span class=move || {
                            let color = if stack.with(|s| s.contact.state().form.is_invalid(f)) {
                                "bg-red-500"
                            } else if i <= step.get() {
                                "bg-slate-900"
                            } else {
                                "bg-slate-200"
                            };
                            format!("h-2 flex-1 rounded-full transition-colors {color}")
                        } />
                    }
                })
                .collect_view()}
        </div>
        <p class="text-xs font-medium text-slate-400">
            {move || format!("Step {} of {}", step.get() + 1, Mode::Strategist.fields().len())}
        </p>
        {move || field.get().map(|field| view! { <FieldInput stack field multiline=true /> })}
        <div class="flex gap-3">
            <Show when=move || { step.get() > 0 }>
                <button
                    type="button"
                    class="px-6 py-4 rounded-full bg-slate-100 text-slate-700 font-semibold hover:bg-slate-200 transition-colors"
                    on:click=move |_| {
                        stack
                            .update(|s| {
                                s.contact.state_mut().form.prev();
                            })
                    }
                >
                    "Back"
                </button>
            </Show>
            <button
                type="submit"
                class="flex-1 py-4 rounded-full bg-slate-900 text-white font-semibold hover:bg-slate-700 transition-colors"
            >
                {move || if last.get() { "Send Brief" } else { "Next" }}
            </button>
        </div>
    }
}

#[component]
fn FieldInput(
    stack: RwSignal<ModalStack>,
    field: Field,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || stack.with(|s| s.contact.state().form.value(field).to_string());
    let invalid = move || stack.with(|s| s.contact.state().form.is_invalid(field));
    let class = move || {
        format!(
            "w-full px-5 py-4 rounded-2xl bg-slate-50 border focus:outline-none focus:ring-2 focus:ring-slate-900 transition-colors {}",
            if invalid() { "border-red-400" } else { "border-slate-200" },
        )
    };
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        stack.update(|s| s.contact.state_mut().form.set_value(field, text));
    };

    view! {
        <label class="block">
            <span class="block mb-2 text-sm font-medium text-slate-700">{field.label()}</span>
            {if multiline {
                Either::Left(view! {
                    <textarea
                        rows="5"
                        class=class
                        placeholder=field.placeholder()
                        prop:value=value
                        on:input=on_input
                    />
                })
            } else {
                Either::Right(view! {
                    <input
                        type="text"
                        class=class
                        placeholder=field.placeholder()
                        prop:value=value
                        on:input=on_input
                    />
                })
            }}
            <Show when=invalid>
                <span class="mt-1 block text-xs text-red-500">{format!("{field} is required")}</span>
            </Show>
        </label>
    }
}

#[component]
fn Notice(stack: RwSignal<ModalStack>) -> impl IntoView {
    let notice = Memo::new(move |_| stack.with(|s| s.contact.state().notice().map(str::to_string)));
    move || {
        notice.get().map(|text| {
            view! {
                <div class="mt-6 flex items-start justify-between gap-4 p-4 rounded-2xl bg-amber-50 border border-amber-200 text-sm text-amber-800">
                    <span>{text}</span>
                    <button
                        type="button"
                        class="font-semibold hover:underline"
                        on:click=move |_| stack.update(|s| s.contact.state_mut().dismiss_notice())
                    >
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}

#[cfg(feature = "hydrate")]
async fn write_clipboard(text: String) -> Result<(), CollaboratorError> {
    use wasm_bindgen::JsCast;

    let clipboard = js_sys::Reflect::get(&window().navigator(), &"clipboard".into())
        .ok()
        .and_then(|c| c.dyn_into::<web_sys::Clipboard>().ok())
        .ok_or(CollaboratorError::ClipboardUnavailable)?;
    wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
        .await
        .map(|_| ())
        .map_err(|_| CollaboratorError::ClipboardUnavailable)
}

#[cfg(not(feature = "hydrate"))]
async fn write_clipboard(_text: String) -> Result<(), CollaboratorError> {
    Err(CollaboratorError::ClipboardUnavailable)
}

#[component]
fn CopyEmail(stack: RwSignal<ModalStack>) -> impl IntoView {
    let copied = Memo::new(move |_| stack.with(|s| s.contact.state().is_copied()));
    let recipient = &site_config().contact.recipient;

    let on_copy = move |_| {
        leptos::task::spawn_local(async move {
            let result = write_clipboard(recipient.clone()).await;
            let ticket = stack
                .try_update(|s| s.contact.state_mut().copy_finished(result))
                .flatten();
            if let Some(ticket) = ticket {
                set_timeout(
                    move || {
                        stack.update(|s| {
                            s.contact.state_mut().expire_copied(ticket);
                        })
                    },
                    site_config().timing.copied_ack(),
                );
            }
        });
    };

    view! {
        <div class="mt-8 pt-6 border-t border-slate-100 flex items-center justify-between gap-4">
            <div class="text-sm">
                <p class="text-slate-400">"Or email directly"</p>
                <p class="font-medium text-slate-900">{recipient.clone()}</p>
            </div>
            <button
                type="button"
                class="px-4 py-2 rounded-full bg-slate-100 text-sm font-semibold text-slate-700 hover:bg-slate-200 transition-colors"
                on:click=on_copy
            >
                {move || if copied.get() { "Copied!" } else { "Copy Email" }}
            </button>
        </div>
    }
}
