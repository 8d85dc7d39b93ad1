use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

const TERMINAL_STEP_MS: u32 = 600;

enum TerminalLine {
    Prompt(&'static str),
    Muted(&'static str),
    Check(&'static str, Option<&'static str>),
}

static TERMINAL_LINES: [TerminalLine; 6] = [
    TerminalLine::Prompt("initialize_ops_agent --mode=autonomous"),
    TerminalLine::Muted("Loading modules..."),
    TerminalLine::Muted("Connecting to data warehouse..."),
    TerminalLine::Check("Data ingestion complete (1.2TB)", None),
    TerminalLine::Check("Pattern recognition: ", Some("OPTIMIZED")),
    TerminalLine::Check("Workflow automation: ", Some("ACTIVE")),
];

fn render_terminal_line(line: &TerminalLine) -> Html {
    match line {
        TerminalLine::Prompt(cmd) => html! {
            <p><span class="t-accent">{"➜"}</span>{" "}<span class="t-green">{"~"}</span>{" "}{ *cmd }</p>
        },
        TerminalLine::Muted(text) => html! { <p class="t-muted">{ *text }</p> },
        TerminalLine::Check(text, status) => html! {
            <p>
                <span class="t-green">{"✔"}</span>{" "}{ *text }
                { for status.map(|s| html! { <span class="t-yellow">{ s }</span> }) }
            </p>
        },
    }
}

/// Console that prints the agent boot sequence one line at a time.
#[function_component(TerminalVisual)]
pub fn terminal_visual() -> Html {
    let shown = use_state(|| 0usize);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let counter = Rc::new(Cell::new(0usize));
                let interval = Interval::new(TERMINAL_STEP_MS, move || {
                    let next = (counter.get() + 1).min(TERMINAL_LINES.len());
                    if next != counter.get() {
                        counter.set(next);
                        shown.set(next);
                    }
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="visual terminal-visual">
            <div class="terminal-dots">
                <span class="dot red"></span>
                <span class="dot yellow"></span>
                <span class="dot green"></span>
            </div>
            <div class="terminal-body">
                { for TERMINAL_LINES.iter().take(*shown).map(render_terminal_line) }
                <p class="cursor">{"_"}</p>
            </div>
        </div>
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AuditStatus {
    Verified,
    Anomaly,
    Processing,
}

impl AuditStatus {
    fn label(self) -> &'static str {
        match self {
            AuditStatus::Verified => "Verified",
            AuditStatus::Anomaly => "Anomaly Detected",
            AuditStatus::Processing => "Processing...",
        }
    }

    fn class(self) -> &'static str {
        match self {
            AuditStatus::Verified => "verified",
            AuditStatus::Anomaly => "anomaly",
            AuditStatus::Processing => "processing",
        }
    }
}

static AUDIT_ROWS: [(&str, &str, &str, AuditStatus); 4] = [
    ("INV-8821", "Vendor Payment", "$12,450.00", AuditStatus::Verified),
    ("EXP-9932", "Travel Expense", "$432.20", AuditStatus::Verified),
    ("TXN-4421", "Wire Transfer", "$8,200.00", AuditStatus::Anomaly),
    ("INV-8822", "SaaS Subscription", "$299.00", AuditStatus::Processing),
];

#[function_component(FinanceVisual)]
pub fn finance_visual() -> Html {
    html! {
        <div class="visual finance-visual">
            <div class="visual-header">
                <div>
                    <h4>{"Live Transaction Audit"}</h4>
                    <p class="mono caption">{"Real-time Anomaly Detection"}</p>
                </div>
                <span class="live-indicator">
                    <span class="ping"></span>
                    <span class="mono">{"ACTIVE"}</span>
                </span>
            </div>
            <div class="audit-rows">
                {
                    for AUDIT_ROWS.iter().map(|(id, kind, amount, status)| html! {
                        <div class="audit-row" key={*id}>
                            <div class="audit-left">
                                <span class={classes!("status-dot", status.class())}></span>
                                <div>
                                    <p class="audit-kind">{ *kind }</p>
                                    <p class="mono caption">{ *id }</p>
                                </div>
                            </div>
                            <div class="audit-right">
                                <p class="mono">{ *amount }</p>
                                <span class={classes!("status-pill", status.class())}>{ status.label() }</span>
                            </div>
                        </div>
                    })
                }
            </div>
            <div class="visual-footer">
                <span class="mono caption">{"SCAN_RATE: 1400/SEC"}</span>
                <span class="guardrails">{"Financial Guardrails Active"}</span>
            </div>
        </div>
    }
}

static SHIPMENT_LEGS: [(&str, &str, &str, bool); 3] = [
    ("Singapore Hub", "Departed", "04:00Z", false),
    ("Ocean Transit", "In Progress", "Active", true),
    ("Los Angeles Port", "Scheduled", "+14h", false),
];

#[function_component(LogisticsVisual)]
pub fn logistics_visual() -> Html {
    html! {
        <div class="visual logistics-visual">
            <div class="visual-header">
                <h4>{"Global Logistics"}</h4>
                <span class="mono tag">{"LIVE_TRACKING"}</span>
            </div>
            <div class="timeline">
                <div class="timeline-rail"></div>
                {
                    for SHIPMENT_LEGS.iter().map(|(city, status, time, active)| html! {
                        <div class={classes!("timeline-leg", active.then(|| "active"))} key={*city}>
                            <span class="timeline-node"></span>
                            <div class="timeline-card">
                                <div>
                                    <p class="leg-city">{ *city }</p>
                                    <p class="caption">{ *status }</p>
                                </div>
                                <span class="mono leg-time">{ *time }</span>
                            </div>
                        </div>
                    })
                }
            </div>
            <div class="visual-footer mono">
                <span>{"ID: #SHP-8829"}</span>
                <span class="on-time">{"ON TIME"}</span>
            </div>
        </div>
    }
}
