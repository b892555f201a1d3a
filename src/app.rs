mod contact;
mod dock;
mod ecosystem;
mod footer;
mod header;
mod hero;
mod links;
mod overlay;
mod portfolio;
mod pricing;
mod products;
mod trajectory;

use leptos::{either::Either, ev::KeyboardEvent, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_event_listener, use_window};

use crate::{
    config::site_config,
    content::{registry, ContentError, Group, ItemId},
    overlay::{ModalKind, ResetTicket, SettleTicket},
    state::ModalStack,
};

use contact::ContactModal;
use dock::ContactDock;
use ecosystem::Ecosystem;
use footer::Footer;
use header::Header;
use hero::Hero;
use portfolio::PortfolioFolder;
use pricing::PricingModal;
use products::Products;
use trajectory::Trajectory;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-slate-50 text-slate-900 antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", site_config().owner.name) />
        <Meta name="description" content=site_config().owner.tagline.clone() />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Open/close handles for the root-owned overlays. Timers only call back into
/// `ModalStack` transitions.
#[derive(Clone, Copy)]
struct OverlayControls {
    stack: RwSignal<ModalStack>,
}

impl OverlayControls {
    fn open(self, kind: ModalKind) {
        let enter = self
            .stack
            .try_update(|s| s.open(kind).then(|| s.settle_ticket(kind)))
            .flatten();
        self.enter(enter);
    }

    fn close(self, kind: ModalKind) {
        let exit = self
            .stack
            .try_update(|s| s.close(kind).map(|reset| (reset, s.settle_ticket(kind))))
            .flatten();
        self.exit(exit);
    }

    fn open_folder(self, product: ItemId) {
        let enter = self
            .stack
            .try_update(|s| {
                s.open_folder(product)
                    .then(|| s.settle_ticket(ModalKind::Portfolio))
            })
            .flatten();
        self.enter(enter);
    }

    fn inquire(self, tier: ItemId, title: String) {
        self.hand_over(move |s| s.inquire(tier, &title));
    }

    fn start_brief(self) {
        self.hand_over(|s| s.start_brief());
    }

    /// Pricing closes and contact opens in one update.
    fn hand_over(self, transition: impl FnOnce(&mut ModalStack) -> Option<ResetTicket>) {
        let tickets = self.stack.try_update(|s| {
            let exit = transition(s).map(|reset| (reset, s.settle_ticket(ModalKind::Pricing)));
            (exit, s.settle_ticket(ModalKind::Contact))
        });
        if let Some((exit, enter)) = tickets {
            self.exit(exit);
            self.enter(Some(enter));
        }
    }

    fn close_topmost(self) {
        if let Some(kind) = self.stack.with_untracked(|s| s.topmost_open()) {
            self.close(kind);
        }
    }

    // two frames so the hidden styles get painted before the transition starts
    fn enter(self, ticket: Option<SettleTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let stack = self.stack;
        request_animation_frame(move || {
            request_animation_frame(move || {
                stack.update(|s| {
                    s.settle(ticket);
                })
            });
        });
    }

    fn exit(self, tickets: Option<(ResetTicket, SettleTicket)>) {
        let Some((reset, settle)) = tickets else {
            return;
        };
        let stack = self.stack;
        let kind = reset.kind();
        let timing = site_config().timing;
        set_timeout(
            move || {
                stack.update(|s| {
                    s.settle(settle);
                })
            },
            timing.exit(),
        );
        set_timeout(
            move || {
                if stack.try_update(|s| s.finish_reset(reset)) == Some(true) {
                    log::debug!("reset {kind:?} session");
                }
            },
            timing.reset_delay(),
        );
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let content = match registry() {
        Ok(content) => content,
        Err(error) => return Either::Right(view! { <ContentErrorPanel error /> }),
    };

    let stack = RwSignal::new(ModalStack::default());
    let controls = OverlayControls { stack };

    let on_open = Callback::new(move |kind: ModalKind| controls.open(kind));
    let on_open_folder = Callback::new(move |product: ItemId| controls.open_folder(product));
    let on_inquire =
        Callback::new(move |(tier, title): (ItemId, String)| controls.inquire(tier, title));
    let on_start_brief = Callback::new(move |_: ()| controls.start_brief());
    let close_contact = Callback::new(move |_: ()| controls.close(ModalKind::Contact));
    let close_pricing = Callback::new(move |_: ()| controls.close(ModalKind::Pricing));
    let close_portfolio = Callback::new(move |_: ()| controls.close(ModalKind::Portfolio));

    let _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            controls.close_topmost();
        }
    });

    Either::Left(view! {
        <Title text="Practical AI Solutions" />
        <Header items=content.group(Group::Navigation) on_open />
        <main>
            <Hero />
            <Ecosystem items=content.group(Group::Ecosystem) />
            <Trajectory items=content.group(Group::Trajectory) />
            <Products items=content.group(Group::Products) on_open_folder />
        </main>
        <Footer
            navigation=content.group(Group::Navigation)
            social=content.group(Group::Social)
            on_open
        />
        <ContactDock social=content.group(Group::Social) on_open />

        <PortfolioFolder stack products=content.group(Group::Products) on_close=close_portfolio />
        <PricingModal
            stack
            tiers=content.group(Group::Pricing)
            on_close=close_pricing
            on_inquire
            on_start_brief
        />
        <ContactModal stack on_close=close_contact />
        // spacer so the dock never covers the footer
        <div class="h-32" />
    })
}

#[component]
fn ContentErrorPanel(error: ContentError) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <div class="max-w-xl mx-auto mt-32 p-6 rounded-xl border border-red-200 bg-red-50 text-red-700">
            <h1 class="text-lg font-semibold mb-2">"This page couldn't be rendered"</h1>
            <pre class="whitespace-pre-wrap text-sm">{error.to_string()}</pre>
        </div>
    }
}
