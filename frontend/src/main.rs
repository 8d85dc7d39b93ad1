use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod lead;
mod navigation;
mod components {
    pub mod layout;
    pub mod reveal;
    pub mod visuals;
    pub mod lead_form;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod use_case;
    pub mod contact;
    pub mod termsprivacy;
}

use components::footer::Footer;
use components::layout::ButtonPrimary;
use navigation::{use_nav, NavigationProvider, Page};
use pages::{
    home::Home,
    contact::Contact,
    use_case::{Solution, UseCasePage},
    termsprivacy::{PrivacyPolicy, TermsOfService},
};


fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Page::Finance => {
            info!("Rendering Finance page");
            html! { <UseCasePage solution={Solution::Finance} /> }
        },
        Page::Logistics => {
            info!("Rendering Logistics page");
            html! { <UseCasePage solution={Solution::Logistics} /> }
        },
        Page::Operations => {
            info!("Rendering Operations page");
            html! { <UseCasePage solution={Solution::Operations} /> }
        },
        Page::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Page::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Page::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
    }
}

static NAV_LINKS: [(Page, &str); 4] = [
    (Page::Home, "Home"),
    (Page::Finance, "Finance"),
    (Page::Logistics, "Supply Chain"),
    (Page::Operations, "Operations"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let nav = use_nav();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                Some(window) => {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            let offset = window.page_y_offset().unwrap_or(0.0);
                            is_scrolled.set(offset > 8.0);
                        }
                    });
                    let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    })
                }
                None => Box::new(|| ()),
            };
            destructor
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Navigates and closes the mobile menu.
    let go = |page: Page| {
        let navigate = nav.navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            navigate.emit(page);
        })
    };

    let links = |extra_class: &'static str| -> Html {
        html! {
            <>
                {
                    for NAV_LINKS.iter().map(|(page, label)| html! {
                        <button
                            key={page.id()}
                            class={classes!("nav-link", extra_class, (nav.current == *page).then(|| "active"))}
                            onclick={go(*page)}
                        >
                            { *label }
                        </button>
                    })
                }
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <button class="nav-logo" onclick={go(Page::Home)}>
                    <span class="brand-mark">{"◆"}</span>
                    {"AventeqAI"}
                </button>

                <div class="nav-right">
                    { links("") }
                    <ButtonPrimary onclick={go(Page::Contact)} text="[ Contact Us ]" />
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { links("mobile") }
                    <ButtonPrimary onclick={go(Page::Contact)} text="[ Contact Us ]" full_width={true} />
                </div>
            }
        </nav>
    }
}

#[function_component(CurrentPage)]
fn current_page() -> Html {
    let nav = use_nav();
    html! {
        <main>{ switch(nav.current) }</main>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NavigationProvider>
            <style>{ SITE_CSS }</style>
            <div class="site">
                <Nav />
                <CurrentPage />
                <Footer />
            </div>
        </NavigationProvider>
    }
}

const SITE_CSS: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }
body {
    font-family: Inter, -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    color: #18181b;
    background: #fff;
}
button { font: inherit; background: none; border: none; cursor: pointer; color: inherit; }
.mono { font-family: "JetBrains Mono", ui-monospace, SFMono-Regular, Menlo, monospace; }
.caption { font-size: 11px; color: #a1a1aa; }
.upper { text-transform: uppercase; letter-spacing: 0.15em; }
.accent { color: #4f46e5; }
.check { color: #6366f1; margin-right: 0.5rem; }

.top-nav {
    position: sticky; top: 0; z-index: 50;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #e4e4e7;
    transition: box-shadow 0.3s;
}
.top-nav.scrolled { box-shadow: 0 4px 24px rgba(0, 0, 0, 0.06); }
.nav-content {
    max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; height: 5rem;
    display: flex; align-items: center; justify-content: space-between;
}
.nav-logo { font-size: 1.25rem; font-weight: 700; display: flex; align-items: center; gap: 0.5rem; }
.brand-mark { color: #4f46e5; }
.nav-right { display: flex; align-items: center; gap: 2rem; }
.nav-link { font-size: 0.875rem; font-weight: 500; color: #52525b; }
.nav-link:hover { color: #18181b; }
.nav-link.active { color: #4f46e5; font-weight: 600; }
.burger-menu { display: none; font-size: 1.5rem; }
.mobile-menu {
    position: absolute; left: 0; width: 100%;
    background: #fff; border-bottom: 1px solid #e4e4e7;
    padding: 1.5rem; display: flex; flex-direction: column; gap: 1.5rem;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
}
@media (max-width: 768px) {
    .nav-right { display: none; }
    .burger-menu { display: block; }
}

.section-shell { width: 100%; padding: 4rem 1rem; }
.section-shell.muted { background: #fafafa; }
.section-shell.bordered { border-top: 1px solid #e4e4e7; border-bottom: 1px solid #e4e4e7; }
.section-shell.bordered-top { border-top: 1px solid #f4f4f5; }
.section-shell.narrow .section-inner { max-width: 56rem; }
.section-inner { max-width: 80rem; margin: 0 auto; }
@media (min-width: 768px) { .section-shell { padding: 6rem 2rem; } }

.badge {
    display: inline-block; padding: 0.25rem 0.75rem; margin-bottom: 1.5rem;
    background: #eef2ff; color: #4338ca; border: 1px solid #c7d2fe; border-radius: 9999px;
    font-size: 0.75rem; font-family: ui-monospace, Menlo, monospace;
}
.section-heading { font-size: 2.25rem; font-weight: 700; letter-spacing: -0.02em; margin-bottom: 1.5rem; }
.section-heading.centered { text-align: center; margin-left: auto; margin-right: auto; }
.heading-row { display: flex; flex-wrap: wrap; justify-content: space-between; align-items: flex-end; gap: 1.5rem; margin-bottom: 3rem; }
.heading-aside { max-width: 28rem; color: #71717a; font-size: 0.875rem; line-height: 1.6; padding-bottom: 1.5rem; }

.grid { display: grid; gap: 1.5rem; grid-template-columns: 1fr; }
@media (min-width: 768px) {
    .grid.two { grid-template-columns: repeat(2, 1fr); gap: 3rem; }
    .grid.three { grid-template-columns: repeat(3, 1fr); }
    .grid.four { grid-template-columns: repeat(4, 1fr); }
}

.card {
    background: #fff; border: 1px solid #e4e4e7; border-radius: 0.75rem; padding: 2rem;
    height: 100%; display: flex; flex-direction: column;
    transition: transform 0.2s, box-shadow 0.2s, border-color 0.2s;
}
.card:hover { transform: translateY(-5px); box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); border-color: #c7d2fe; }
.card.clickable { cursor: pointer; }
.card h3, .card h4 { font-size: 1.125rem; font-weight: 700; margin-bottom: 0.5rem; }
.card p { color: #52525b; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1rem; }
.card-badge-row { margin-bottom: 1rem; }
.card-badge {
    font-family: ui-monospace, Menlo, monospace; font-size: 10px; text-transform: uppercase;
    color: #4f46e5; background: #eef2ff; padding: 0.25rem 0.5rem; border-radius: 0.25rem; letter-spacing: 0.1em;
}
.card-footer {
    margin-top: auto; padding-top: 1.5rem; border-top: 1px solid #f4f4f5;
    font-size: 0.75rem; font-weight: 600; color: #71717a;
}

.btn-primary {
    display: inline-flex; align-items: center; justify-content: center; gap: 0.5rem;
    background: #4f46e5; color: #fff; padding: 0.75rem 1.5rem; border-radius: 9999px;
    font-size: 0.875rem; font-weight: 500; transition: background 0.2s, transform 0.1s;
}
.btn-primary:hover { background: #4338ca; transform: scale(1.02); }
.btn-primary.full-width { width: 100%; }
.btn-primary.disabled { opacity: 0.7; cursor: not-allowed; transform: none; }
.btn-secondary { display: inline-flex; align-items: center; gap: 0.5rem; color: #52525b; font-size: 0.875rem; font-weight: 500; padding: 0.5rem 1rem; }
.btn-secondary:hover { color: #18181b; }
.button-row { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; }

@keyframes fadeInUp { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); } }
.stagger > * { animation: fadeInUp 0.6s ease-out both; }
.stagger > *:nth-child(2) { animation-delay: 0.15s; }
.stagger > *:nth-child(3) { animation-delay: 0.3s; }

.hero { padding-top: 8rem; }
.hero-content { max-width: 56rem; margin: 0 auto; text-align: center; display: flex; flex-direction: column; align-items: center; }
.hero-title { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; letter-spacing: -0.02em; line-height: 1.1; margin-bottom: 1.5rem; }
.hero-lead { font-size: 1.25rem; color: #71717a; max-width: 42rem; line-height: 1.6; margin-bottom: 2.5rem; }
.hero-actions { display: flex; flex-direction: column; align-items: center; gap: 1.5rem; margin-bottom: 4rem; }

.logo-strip { border-bottom: 1px solid #f4f4f5; padding: 3rem 1.5rem; text-align: center; }
.logo-row { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 3rem 6rem; margin-top: 2.5rem; }
.logo-mark img { height: 2rem; filter: grayscale(1); opacity: 0.4; transition: all 0.5s; }
.logo-mark:hover img { filter: none; opacity: 1; }
.logo-fallback { font-size: 1.125rem; font-weight: 700; color: #a1a1aa; }

.vertical-links { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; margin-top: 3rem; font-size: 0.875rem; font-weight: 500; color: #52525b; }
.vertical-links button:hover, .link-button:hover { color: #4f46e5; }
.tile-icon, .metric-icon { width: 2.5rem; height: 2.5rem; border-radius: 0.5rem; background: #eef2ff; color: #4f46e5; display: flex; align-items: center; justify-content: center; margin-bottom: 1rem; }
.tile-link { margin-top: auto; font-size: 0.75rem; font-weight: 700; color: #4f46e5; letter-spacing: 0.05em; }
.framework { margin-top: 4rem; }
.step-number { font-size: 2.25rem; font-weight: 700; color: #e0e7ff; margin-bottom: 1.5rem; }
.framework-step h3 { font-size: 1.125rem; margin-bottom: 0.5rem; }
.framework-step p { color: #71717a; font-size: 0.875rem; line-height: 1.6; }

.cta-grid { align-items: start; }
.cta-title { font-size: 2.25rem; font-weight: 700; margin-bottom: 1.5rem; }
.cta-lead { color: #71717a; font-size: 1.125rem; line-height: 1.6; margin-bottom: 3rem; }
.assessment-card { background: #fff; padding: 2rem; border-radius: 0.75rem; border: 1px solid #e4e4e7; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08); }
.assessment-card h3 { font-size: 1.25rem; margin: 1.5rem 0 1rem; }
.assessment-card p { color: #52525b; font-size: 0.875rem; line-height: 1.6; margin-bottom: 1.5rem; }
.assessment-icon { width: 3rem; height: 3rem; border-radius: 0.5rem; background: #eef2ff; color: #4f46e5; display: flex; align-items: center; justify-content: center; font-weight: 700; }
.deliverables { border-top: 1px solid #f4f4f5; padding-top: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
.deliverable { font-size: 0.875rem; font-weight: 500; color: #3f3f46; }

.page { background: #fff; }
.use-case-page, .contact-page, .legal-page { padding-top: 5rem; min-height: 100vh; }
.page-title { font-size: 2.5rem; font-weight: 700; letter-spacing: -0.02em; margin-bottom: 1.5rem; }
.page-lead { font-size: 1.125rem; color: #71717a; line-height: 1.6; margin-bottom: 2rem; }
.hero-split { align-items: center; }
.split { display: flex; flex-wrap: wrap; gap: 3rem; }
.split-aside { flex: 1 1 16rem; }
.split-aside h2 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1rem; }
.split-aside p { color: #71717a; font-size: 0.875rem; }
.split-main { flex: 2 1 24rem; display: grid; gap: 1rem; }
.challenge { display: flex; align-items: center; gap: 1rem; padding: 1rem; border: 1px solid #e4e4e7; border-radius: 0.25rem; background: #fff; font-size: 0.875rem; font-weight: 500; }
.challenge:hover { border-color: #fecaca; }
.alert-icon { color: #ef4444; font-weight: 700; }
.modules-heading { max-width: 36rem; margin-bottom: 3rem; }
.modules-heading p { color: #71717a; font-size: 0.875rem; }
.case-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
.case-tag { font-size: 10px; background: #fafafa; color: #71717a; border: 1px solid #e4e4e7; padding: 0.25rem 0.5rem; border-radius: 0.25rem; }
.metric { background: #fff; padding: 1.5rem; border-radius: 0.75rem; border: 1px solid #e4e4e7; }
.metric h4 { font-size: 0.875rem; margin-bottom: 0.5rem; }
.metric p { color: #71717a; font-size: 0.75rem; line-height: 1.6; }
.phase { border-top: 2px solid #e0e7ff; padding-top: 1rem; }
.phase-label { font-size: 0.75rem; color: #6366f1; display: block; margin-bottom: 0.5rem; }
.closing-cta { text-align: center; max-width: 48rem; margin: 0 auto; display: flex; flex-direction: column; align-items: center; gap: 1rem; }
.closing-cta h2 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
.link-button { color: #71717a; font-size: 0.875rem; font-weight: 500; }

.visual { border-radius: 0.75rem; padding: 1.5rem; box-shadow: 0 25px 50px rgba(0, 0, 0, 0.2); font-size: 0.75rem; }
@media (max-width: 768px) { .visual { display: none; } }
.terminal-visual { background: #18181b; color: #d4d4d8; border: 1px solid #27272a; font-family: ui-monospace, Menlo, monospace; }
.terminal-dots { display: flex; gap: 0.5rem; margin-bottom: 1rem; padding-bottom: 1rem; border-bottom: 1px solid #27272a; }
.dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; }
.dot.red { background: #ef4444; } .dot.yellow { background: #eab308; } .dot.green { background: #22c55e; }
.terminal-body { display: flex; flex-direction: column; gap: 0.5rem; }
.t-accent { color: #818cf8; } .t-green { color: #4ade80; } .t-yellow { color: #facc15; } .t-muted { color: #71717a; }
@keyframes blink { 50% { opacity: 0; } }
.cursor { animation: blink 1s step-end infinite; }
.finance-visual { background: #fff; border: 1px solid #f4f4f5; }
.logistics-visual { background: #09090b; color: #fff; border: 1px solid #27272a; }
.visual-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; padding-bottom: 1rem; border-bottom: 1px solid rgba(128, 128, 128, 0.2); }
.visual-header h4 { font-size: 0.875rem; font-weight: 700; }
.visual-footer { margin-top: 1.5rem; padding-top: 1rem; border-top: 1px solid rgba(128, 128, 128, 0.2); display: flex; justify-content: space-between; font-size: 10px; }
.live-indicator { display: flex; align-items: center; gap: 0.5rem; color: #059669; font-size: 10px; }
@keyframes ping { 75%, 100% { transform: scale(2); opacity: 0; } }
.ping { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #10b981; animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite; }
.audit-rows { display: flex; flex-direction: column; gap: 0.75rem; }
.audit-row { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem; border-radius: 0.5rem; border: 1px solid #fafafa; }
.audit-row:hover { background: #fafafa; }
.audit-left { display: flex; align-items: center; gap: 0.75rem; }
.audit-kind { font-weight: 500; }
.audit-right { text-align: right; }
.status-dot { width: 0.375rem; height: 0.375rem; border-radius: 9999px; background: #10b981; }
.status-dot.anomaly { background: #ef4444; } .status-dot.processing { background: #d4d4d8; }
.status-pill { font-size: 9px; padding: 0.125rem 0.375rem; border-radius: 0.25rem; font-weight: 500; }
.status-pill.verified { color: #059669; background: #ecfdf5; }
.status-pill.anomaly { color: #dc2626; background: #fef2f2; }
.status-pill.processing { color: #71717a; background: #fafafa; }
.guardrails { color: #4f46e5; font-weight: 500; }
.tag { background: rgba(99, 102, 241, 0.1); color: #818cf8; padding: 0.25rem 0.5rem; border-radius: 0.25rem; font-size: 10px; }
.timeline { position: relative; display: flex; flex-direction: column; gap: 1.5rem; padding-left: 0.5rem; }
.timeline-rail { position: absolute; left: 13px; top: 0.5rem; bottom: 0.5rem; width: 2px; background: #27272a; }
.timeline-leg { display: flex; align-items: center; gap: 1rem; position: relative; z-index: 1; }
.timeline-node { width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: #3f3f46; border: 2px solid #09090b; }
.timeline-leg.active .timeline-node { background: #6366f1; box-shadow: 0 0 0 4px rgba(99, 102, 241, 0.2); }
.timeline-card { flex: 1; display: flex; justify-content: space-between; align-items: center; padding: 0.75rem; border-radius: 0.25rem; border: 1px solid transparent; }
.timeline-leg.active .timeline-card { background: #18181b; border-color: #3f3f46; }
.leg-city { font-weight: 700; color: #71717a; }
.timeline-leg.active .leg-city { color: #fff; }
.leg-time { font-size: 10px; color: #52525b; }
.timeline-leg.active .leg-time { color: #818cf8; }
.on-time { color: #10b981; }

.lead-card { background: #fff; border: 1px solid #e4e4e7; border-radius: 0.75rem; padding: 2rem; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); }
.lead-header { margin-bottom: 1.5rem; }
.lead-header h3 { font-size: 1.125rem; font-weight: 700; margin-bottom: 0.5rem; display: flex; align-items: center; gap: 0.5rem; }
.lead-header p { font-size: 0.875rem; color: #71717a; }
.lead-icon { color: #4f46e5; font-family: ui-monospace, Menlo, monospace; }
.lead-form { display: flex; flex-direction: column; gap: 0.25rem; }
.field-row { display: grid; grid-template-columns: 1fr; gap: 1rem; }
@media (min-width: 768px) { .field-row { grid-template-columns: 1fr 1fr; } }
.field { margin-bottom: 1rem; }
.field-wide { margin-bottom: 1.5rem; }
.field-label { display: block; font-size: 0.75rem; font-weight: 600; color: #71717a; margin-bottom: 0.25rem; font-family: ui-monospace, Menlo, monospace; text-transform: uppercase; letter-spacing: 0.05em; }
.field input, .field select, .field textarea {
    width: 100%; background: #fff; border: 1px solid #d4d4d8; border-radius: 0.375rem; padding: 0.75rem;
    font: inherit; color: #18181b; outline: none; transition: box-shadow 0.2s;
}
.field input:focus, .field select:focus, .field textarea:focus { box-shadow: 0 0 0 2px #6366f1; border-color: #6366f1; }
.field textarea { resize: vertical; }
.select-wrap { position: relative; }
.select-wrap select { appearance: none; padding-right: 2.5rem; cursor: pointer; }
.select-chevron { position: absolute; right: 0.75rem; top: 50%; transform: translateY(-50%) rotate(90deg); pointer-events: none; color: #71717a; }
.lead-error { color: #dc2626; font-size: 0.75rem; text-align: center; margin-top: 0.75rem; }
.lead-footnote { font-size: 10px; text-align: center; color: #a1a1aa; margin-top: 1rem; }
.lead-confirmation { text-align: center; padding: 3rem 2rem; animation: fadeInUp 0.4s ease-out both; }
.lead-confirmation h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
.lead-confirmation p { color: #71717a; font-size: 0.875rem; margin-bottom: 1.5rem; }
.confirmation-icon { width: 4rem; height: 4rem; border-radius: 9999px; background: #eef2ff; color: #4f46e5; font-size: 2rem; display: flex; align-items: center; justify-content: center; margin: 0 auto 1.5rem; }

.office-blocks { display: flex; flex-direction: column; gap: 2rem; }
.office-heading { display: flex; align-items: center; font-weight: 700; margin-bottom: 0.75rem; }
.office-body { padding-left: 1.75rem; font-size: 0.875rem; color: #52525b; display: flex; flex-direction: column; gap: 1rem; }
.office-body.email a { color: #4f46e5; font-weight: 500; text-decoration: none; }
.office-city { display: flex; align-items: center; gap: 0.5rem; font-weight: 500; color: #71717a; font-size: 0.875rem; }
.office-detail { color: #a1a1aa; font-size: 0.75rem; line-height: 1.6; padding-left: 1.75rem; }
.flag { width: 1.25rem; border-radius: 2px; opacity: 0.9; }

.legal-content { color: #52525b; font-size: 0.875rem; line-height: 1.7; }
.legal-content p { margin-bottom: 1rem; }
.legal-content h3 { color: #18181b; font-weight: 700; margin: 2rem 0 1rem; }
.legal-content ul { list-style: disc; padding-left: 1.25rem; margin-bottom: 1rem; }
.legal-content li { margin-bottom: 0.5rem; }

.site-footer { border-top: 1px solid #e4e4e7; padding: 5rem 0; }
.footer-grid { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; display: grid; grid-template-columns: 1fr; gap: 3rem; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: repeat(4, 1fr); } }
.footer-grid h4 { font-weight: 700; font-size: 0.875rem; margin-bottom: 1.5rem; }
.brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1.5rem; }
.brand-name { font-size: 1.25rem; font-weight: 700; }
.footer-tagline { color: #71717a; font-size: 0.875rem; margin-bottom: 1.5rem; }
.footer-links { list-style: none; display: flex; flex-direction: column; gap: 0.75rem; }
.footer-links button, .footer-legal button { color: #71717a; font-size: 0.875rem; text-align: left; }
.footer-links button:hover, .footer-legal button:hover { color: #4f46e5; }
.office-list { list-style: none; display: flex; flex-direction: column; gap: 1rem; }
.footer-bottom {
    grid-column: 1 / -1; border-top: 1px solid #f4f4f5; padding-top: 2rem;
    display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 1.5rem;
    font-size: 0.75rem; color: #a1a1aa;
}
.footer-legal { display: flex; gap: 1.5rem; }
.footer-legal button { font-size: 0.75rem; }
.status-ok { color: #10b981; font-weight: 500; }
"#;


fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
