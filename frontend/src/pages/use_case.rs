//! Shared template for the three solution pages and the content tables behind it.

use yew::prelude::*;

use crate::components::layout::{Badge, ButtonPrimary, Card, SectionHeading, SectionShell};
use crate::components::reveal::FadeIn;
use crate::components::visuals::{FinanceVisual, LogisticsVisual, TerminalVisual};
use crate::navigation::{use_nav, Page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solution {
    Finance,
    Logistics,
    Operations,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual {
    Terminal,
    Finance,
    Logistics,
}

pub struct SolutionModule {
    pub title: &'static str,
    pub desc: &'static str,
    pub cases: &'static [&'static str],
}

pub struct Outcome {
    pub label: &'static str,
    pub desc: &'static str,
}

pub struct UseCase {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub cta_text: &'static str,
    pub secondary_text: &'static str,
    pub secondary_page: Page,
    pub visual: Visual,
    pub challenges: &'static [&'static str],
    pub modules: &'static [SolutionModule],
    pub outcomes: &'static [Outcome],
}

const DELIVERY_PHASES: [&str; 4] = ["Audit & Map", "Architect", "Build & Integrate", "Deploy & Scale"];

static FINANCE: UseCase = UseCase {
    title: "The Outcome-First AI Layer for Modern Financial Operations",
    subtitle: "Eliminate manual workflows and uncover hidden insights. We build custom, high-fidelity AI systems that integrate directly into your financial stack.",
    intro: "Finance teams are under increasing pressure to deliver accurate insights. AventeqAI helps finance leaders use AI to automate workflows.",
    cta_text: "[ View Financial Solutions ]",
    secondary_text: "Programmable Ops",
    secondary_page: Page::Operations,
    visual: Visual::Finance,
    challenges: &[
        "Manual reporting and reconciliation",
        "Poor forecasting accuracy",
        "Limited real-time visibility",
        "Slow identification of risk",
        "Disconnected spreadsheets",
    ],
    modules: &[
        SolutionModule {
            title: "AI-Powered Forecasting",
            desc: "Improve the accuracy of cash flow, revenue and cost forecasting using ML models.",
            cases: &["Cash flow forecasting", "Scenario modelling"],
        },
        SolutionModule {
            title: "Automated Reporting",
            desc: "Reduce manual workload by automating recurring reports and variance analysis.",
            cases: &["Month-end reporting", "Variance analysis"],
        },
        SolutionModule {
            title: "Risk & Anomaly Detection",
            desc: "Identify unusual transactions, trends and risks earlier using AI-driven monitoring.",
            cases: &["Fraud detection", "Compliance monitoring"],
        },
        SolutionModule {
            title: "Decision Intelligence",
            desc: "Turn financial data into actionable insight with AI-driven recommendations.",
            cases: &["Budget optimisation", "Performance dashboards"],
        },
    ],
    outcomes: &[
        Outcome { label: "Faster Close Cycles", desc: "Reduce time spent on manual reporting." },
        Outcome { label: "Improved Accuracy", desc: "More reliable projections and scenarios." },
        Outcome { label: "Reduced Risk", desc: "Identify anomalies before they become issues." },
        Outcome { label: "Real-Time Visibility", desc: "Up-to-date insights across performance." },
    ],
};

static LOGISTICS: UseCase = UseCase {
    title: "Accelerate Operational Velocity with Outcome-Driven Logistics AI",
    subtitle: "Stop reacting to disruptions. We build custom, production-ready AI layers that predict bottlenecks and automate your global trade.",
    intro: "Logistics teams operate in complex environments. AventeqAI helps organisations apply AI to planning and execution for better control.",
    cta_text: "[ Build Your Logistics Engine ]",
    secondary_text: "Programmable Ops",
    secondary_page: Page::Operations,
    visual: Visual::Logistics,
    challenges: &[
        "Demand volatility and inaccurate forecasting",
        "Overstocking and excess inventory",
        "Limited end-to-end visibility",
        "Reactive decision-making",
        "Rising transport costs",
    ],
    modules: &[
        SolutionModule {
            title: "AI Demand Forecasting",
            desc: "Use machine learning to predict demand patterns more accurately enabling better planning.",
            cases: &["S&OP planning", "Seasonal forecasting"],
        },
        SolutionModule {
            title: "Inventory Optimisation",
            desc: "Optimise inventory levels across locations to reduce waste and prevent stockouts.",
            cases: &["Stock optimisation", "Multi-location balancing"],
        },
        SolutionModule {
            title: "Predictive Routing",
            desc: "Improve transport efficiency by using AI to optimise routing, scheduling and capacity.",
            cases: &["Route optimisation", "Capacity planning"],
        },
        SolutionModule {
            title: "Visibility & Alerts",
            desc: "Gain real-time visibility with AI-powered alerts that highlight delays and risks.",
            cases: &["Disruption alerts", "Risk management"],
        },
    ],
    outcomes: &[
        Outcome { label: "Lower Logistics Costs", desc: "Reduce transport and storage costs." },
        Outcome { label: "Improved Delivery", desc: "Increase on-time, in-full delivery rates." },
        Outcome { label: "Reduced Waste", desc: "Balance inventory to avoid shortages." },
        Outcome { label: "Greater Resilience", desc: "Anticipate disruption earlier." },
    ],
};

static OPERATIONS: UseCase = UseCase {
    title: "Programmable AI Systems Engineered to Automate Operational Complexity",
    subtitle: "Stop managing workflows and start orchestrating them. We build custom AI systems that integrate across your entire stack.",
    intro: "Operational inefficiency slows growth. AventeqAI helps organisations apply AI to everyday operations — reducing manual effort.",
    cta_text: "[ Start Automating ]",
    secondary_text: "Financial Layer",
    secondary_page: Page::Finance,
    visual: Visual::Terminal,
    challenges: &[
        "Manual, repetitive processes",
        "Siloed systems and disconnected data",
        "Limited visibility into bottlenecks",
        "Slow decision-making",
        "Rising operational costs",
    ],
    modules: &[
        SolutionModule {
            title: "Intelligent Process Automation",
            desc: "Automate repetitive and rule-based workflows using AI — reducing manual effort.",
            cases: &["Workflow automation", "Exception handling"],
        },
        SolutionModule {
            title: "Performance Analytics",
            desc: "Gain real-time visibility into operational bottlenecks and capacity using AI analytics.",
            cases: &["Productivity tracking", "Bottleneck ID"],
        },
        SolutionModule {
            title: "Predictive Maintenance",
            desc: "Use AI to anticipate issues before they impact delivery — enabling proactive planning.",
            cases: &["Risk forecasting", "Resource planning"],
        },
        SolutionModule {
            title: "AI Decision Support",
            desc: "Support leaders with AI-powered recommendations that help prioritise actions.",
            cases: &["Resource optimisation", "Scenario analysis"],
        },
    ],
    outcomes: &[
        Outcome { label: "Reduced Workload", desc: "Automate repetitive processes." },
        Outcome { label: "Lower Costs", desc: "Optimise resources and reduce inefficiencies." },
        Outcome { label: "Faster Execution", desc: "Improve throughput and reliability." },
        Outcome { label: "Scalable Operations", desc: "Support growth without linear cost increases." },
    ],
};

impl Solution {
    pub fn page(self) -> Page {
        match self {
            Solution::Finance => Page::Finance,
            Solution::Logistics => Page::Logistics,
            Solution::Operations => Page::Operations,
        }
    }

    pub fn content(self) -> &'static UseCase {
        match self {
            Solution::Finance => &FINANCE,
            Solution::Logistics => &LOGISTICS,
            Solution::Operations => &OPERATIONS,
        }
    }
}

fn render_visual(visual: Visual) -> Html {
    match visual {
        Visual::Terminal => html! { <TerminalVisual /> },
        Visual::Finance => html! { <FinanceVisual /> },
        Visual::Logistics => html! { <LogisticsVisual /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct UseCasePageProps {
    pub solution: Solution,
}

#[function_component(UseCasePage)]
pub fn use_case_page(props: &UseCasePageProps) -> Html {
    let nav = use_nav();
    let content = props.solution.content();
    let to_contact = nav.navigate.reform(|_: MouseEvent| Page::Contact);
    let secondary = content.secondary_page;
    let to_secondary = nav.navigate.reform(move |_: MouseEvent| secondary);

    html! {
        <div class="page use-case-page">
            <SectionShell>
                <div class="grid two hero-split stagger">
                    <div>
                        <h1 class="page-title">{ content.title }</h1>
                        <p class="page-lead">{ content.subtitle }</p>
                        <div class="button-row">
                            <ButtonPrimary onclick={to_contact.clone()} text={content.cta_text} />
                        </div>
                    </div>
                    { render_visual(content.visual) }
                </div>
            </SectionShell>

            <SectionShell class="muted bordered">
                <FadeIn>
                    <div class="split">
                        <div class="split-aside">
                            <Badge text="System_Diagnostics" />
                            <h2>{"Identified Constraints"}</h2>
                            <p>{"Common structural challenges we detect in legacy systems."}</p>
                        </div>
                        <div class="split-main challenge-list">
                            {
                                for content.challenges.iter().map(|item| html! {
                                    <div class="challenge" key={*item}>
                                        <span class="alert-icon">{"!"}</span>
                                        <span>{ *item }</span>
                                    </div>
                                })
                            }
                        </div>
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell>
                <FadeIn>
                    <div class="modules-heading">
                        <Badge text="System_Modules" />
                        <SectionHeading text="Engineered for Performance" />
                        <p>{ content.intro }</p>
                    </div>
                    <div class="grid two">
                        {
                            for content.modules.iter().enumerate().map(|(i, module)| html! {
                                <Card key={module.title} badge_text={format!("MODULE_0{}", i + 1)}>
                                    <h3>{ module.title }</h3>
                                    <p>{ module.desc }</p>
                                    <div class="case-tags">
                                        { for module.cases.iter().map(|c| html! { <span class="case-tag mono" key={*c}>{ *c }</span> }) }
                                    </div>
                                </Card>
                            })
                        }
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell class="muted bordered">
                <FadeIn>
                    <SectionHeading text="Performance Metrics" />
                    <div class="grid four">
                        {
                            for content.outcomes.iter().map(|o| html! {
                                <div class="metric" key={o.label}>
                                    <div class="metric-icon">{"▥"}</div>
                                    <h4>{ o.label }</h4>
                                    <p>{ o.desc }</p>
                                </div>
                            })
                        }
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell>
                <FadeIn>
                    <Badge text="Deployment_Protocol" />
                    <SectionHeading text="Implementation Lifecycle" />
                    <div class="grid four">
                        {
                            for DELIVERY_PHASES.iter().enumerate().map(|(i, step)| html! {
                                <div class="phase" key={*step}>
                                    <span class="mono phase-label">{ format!("PHASE_0{}", i + 1) }</span>
                                    <h4>{ *step }</h4>
                                </div>
                            })
                        }
                    </div>
                </FadeIn>
            </SectionShell>

            <SectionShell>
                <FadeIn>
                    <div class="closing-cta">
                        <h2>{"Ready to upgrade your infrastructure?"}</h2>
                        <ButtonPrimary onclick={to_contact} text={content.cta_text} />
                        <button class="link-button" onclick={to_secondary}>
                            { format!("Or view {} →", content.secondary_text) }
                        </button>
                    </div>
                </FadeIn>
            </SectionShell>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Solution; 3] = [Solution::Finance, Solution::Logistics, Solution::Operations];

    #[test]
    fn each_solution_has_its_own_visual() {
        assert_eq!(Solution::Finance.content().visual, Visual::Finance);
        assert_eq!(Solution::Logistics.content().visual, Visual::Logistics);
        assert_eq!(Solution::Operations.content().visual, Visual::Terminal);
    }

    #[test]
    fn secondary_links_point_at_another_solution() {
        for solution in ALL {
            let target = solution.content().secondary_page;
            assert_ne!(target, solution.page());
            assert!(target.path().starts_with("/solutions/"));
        }
    }

    #[test]
    fn content_tables_are_complete() {
        for solution in ALL {
            let content = solution.content();
            assert_eq!(content.challenges.len(), 5);
            assert_eq!(content.modules.len(), 4);
            assert_eq!(content.outcomes.len(), 4);
            assert!(content.modules.iter().all(|m| m.cases.len() == 2));
            assert!(content.cta_text.starts_with("[ "));
        }
    }
}
