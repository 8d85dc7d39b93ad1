use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::components::layout::{Badge, ButtonPrimary, ButtonSecondary, Card, SectionHeading, SectionShell};
use crate::components::lead_form::ReadinessAssessmentForm;
use crate::components::reveal::FadeIn;
use crate::navigation::{use_nav, Page};

/// Where "View the Framework" scrolls to.
const FRAMEWORK_OFFSET: f64 = 800.0;

static CLIENT_LOGOS: [(&str, &str); 6] = [
    ("UPS", "https://logo.clearbit.com/ups.com"),
    ("XPO Logistics", "https://logo.clearbit.com/xpo.com"),
    ("FedEx", "https://logo.clearbit.com/fedex.com"),
    ("DHL", "https://logo.clearbit.com/dhl.com"),
    ("DAMCO", "https://logo.clearbit.com/maersk.com"),
    ("NIPPON Express", "https://logo.clearbit.com/nipponexpress.com"),
];

struct OutcomeTile {
    title: &'static str,
    icon: &'static str,
    desc: &'static str,
    link: Page,
    link_text: &'static str,
}

static OUTCOME_TILES: [OutcomeTile; 4] = [
    OutcomeTile {
        title: "Operational Efficiency",
        icon: "⚡",
        desc: "Reduce manual effort and cycle times by automating repetitive and error-prone processes.",
        link: Page::Operations,
        link_text: "View Programmable Ops",
    },
    OutcomeTile {
        title: "Better Decision-Making",
        icon: "↗",
        desc: "Use AI-driven insights and predictive intelligence to support faster decisions.",
        link: Page::Finance,
        link_text: "View Financial Layer",
    },
    OutcomeTile {
        title: "Cost Reduction",
        icon: "▥",
        desc: "Lower operational costs through optimisation, automation and improved resource allocation.",
        link: Page::Logistics,
        link_text: "View Logistics Engine",
    },
    OutcomeTile {
        title: "Scalable AI Systems",
        icon: "≡",
        desc: "Build AI solutions that grow with your organisation and adapt as needs change.",
        link: Page::Contact,
        link_text: "Start Building",
    },
];

static FRAMEWORK_STEPS: [(&str, &str); 3] = [
    ("Discover & Align", "We start by understanding your business goals, constraints, and data."),
    ("Build & Validate", "We design and build tailored AI solutions using rapid prototyping."),
    ("Deploy & Scale", "We deploy AI solutions into live environments with monitoring."),
];

static ASSESSMENT_DELIVERABLES: [&str; 3] = [
    "Data Maturity Audit",
    "High-Impact Use Case Mapping",
    "Implementation Roadmap & ROI",
];

#[derive(Properties, PartialEq)]
struct LogoMarkProps {
    name: &'static str,
    url: &'static str,
}

/// Client logo that falls back to the company name when the image fails to load.
#[function_component(LogoMark)]
fn logo_mark(props: &LogoMarkProps) -> Html {
    let failed = use_state_eq(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    html! {
        <div class="logo-mark">
            if *failed {
                <span class="logo-fallback">{ props.name }</span>
            } else {
                <img src={props.url} alt={props.name} {onerror} />
            }
        </div>
    }
}

fn scroll_to_framework() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(FRAMEWORK_OFFSET);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let nav = use_nav();
    let go = |page: Page| nav.navigate.reform(move |_: MouseEvent| page);

    html! {
        <div class="page home-page">
            <SectionShell class="hero">
                <div class="hero-content stagger">
                    <h1 class="hero-title">
                        {"Custom AI Infrastructure Built for "}
                        <span class="accent">{"Measurable Business Growth"}</span>
                    </h1>
                    <p class="hero-lead">
                        {"Stop experimenting and start scaling. We build custom, production-ready AI systems designed to automate complexity and unlock new revenue streams."}
                    </p>
                    <div class="hero-actions">
                        <div class="button-row">
                            <ButtonPrimary onclick={go(Page::Contact)} />
                            <ButtonSecondary
                                onclick={Callback::from(|_: MouseEvent| scroll_to_framework())}
                                text="View the Framework"
                            />
                        </div>
                        <p class="mono caption">{"Powering outcomes for the next generation of industry leaders."}</p>
                    </div>
                </div>
            </SectionShell>

            <div class="logo-strip">
                <p class="mono caption upper">{"Trusted by infrastructure leaders globally"}</p>
                <div class="logo-row">
                    { for CLIENT_LOGOS.iter().map(|(name, url)| html! { <LogoMark key={*name} name={*name} url={*url} /> }) }
                </div>
            </div>

            <SectionShell class="bordered-top">
                <FadeIn>
                    <Badge text="Capabilities" />
                    <div class="heading-row">
                        <SectionHeading text="Three AI verticals. One delivery partner." />
                        <p class="heading-aside">
                            {"AventeqAI focuses on the AI capabilities that create real operational and commercial impact."}
                        </p>
                    </div>

                    <div class="grid three">
                        <Card on_click={go(Page::Contact)} badge_text="STRATEGY">
                            <h3>{"AI Strategy & Discovery"}</h3>
                            <p>{"Identify where AI delivers the greatest value. We assess data, workflows, and objectives to define a clear roadmap."}</p>
                        </Card>
                        <Card on_click={go(Page::Operations)} badge_text="DEVELOPMENT">
                            <h3>{"Custom AI Development"}</h3>
                            <p>{"We design and build bespoke AI solutions tailored to your business — from early prototypes to production-ready systems."}</p>
                        </Card>
                        <Card on_click={go(Page::Logistics)} badge_text="AUTOMATION">
                            <h3>{"AI Optimisation"}</h3>
                            <p>{"We apply AI to automate workflows, optimise operations and improve decision-making — reducing manual effort."}</p>
                        </Card>
                    </div>

                    <div class="vertical-links">
                        <button onclick={go(Page::Finance)}>{"Explore the Financial Layer →"}</button>
                        <button onclick={go(Page::Logistics)}>{"View Logistics Infrastructure →"}</button>
                        <button onclick={go(Page::Operations)}>{"See Programmable Ops →"}</button>
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell class="muted bordered">
                <FadeIn>
                    <div class="heading-row">
                        <SectionHeading text="Engineered for measurable impact" />
                        <p class="heading-aside">
                            {"We prioritise AI initiatives that deliver measurable improvements to performance, efficiency and decision-making."}
                        </p>
                    </div>
                    <div class="grid four">
                        {
                            for OUTCOME_TILES.iter().map(|tile| html! {
                                <Card key={tile.title} on_click={go(tile.link)} class="outcome-tile">
                                    <div class="tile-icon">{ tile.icon }</div>
                                    <h4>{ tile.title }</h4>
                                    <p>{ tile.desc }</p>
                                    <div class="tile-link">{ tile.link_text }{" ›"}</div>
                                </Card>
                            })
                        }
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell>
                <FadeIn>
                    <Badge text="Delivery_Framework" />
                    <SectionHeading text="A simple AI delivery framework that scales" />
                    <div class="grid three framework">
                        {
                            for FRAMEWORK_STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                                <div class="framework-step" key={*title}>
                                    <div class="step-number mono">{ format!("0{}", i + 1) }</div>
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                </div>
                            })
                        }
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell class="muted bordered-top">
                <FadeIn>
                    <div class="grid two cta-grid">
                        <div>
                            <Badge text="Start_Building" />
                            <h2 class="cta-title">{"Ready to build with AI?"}</h2>
                            <p class="cta-lead">
                                {"Book a free strategy call and we’ll help you identify where AI can deliver the greatest impact across your business."}
                            </p>
                            <div class="assessment-card">
                                <div class="assessment-icon">{"</>"}</div>
                                <h3>{"AI Readiness Assessment"}</h3>
                                <p>
                                    {"Most organisations want to use AI — but few know where to start. We identify the most practical, high-impact AI opportunities based on your data."}
                                </p>
                                <div class="deliverables">
                                    <p class="mono caption upper">{"What you get:"}</p>
                                    {
                                        for ASSESSMENT_DELIVERABLES.iter().map(|item| html! {
                                            <div class="deliverable" key={*item}>
                                                <span class="check">{"✓"}</span>{ *item }
                                            </div>
                                        })
                                    }
                                </div>
                            </div>
                        </div>
                        <ReadinessAssessmentForm />
                    </div>
                </FadeIn>
            </SectionShell>
        </div>
    }
}
