use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::layout::ButtonPrimary;
use crate::config;
use crate::lead::{settle, transmit, FailureNotifier, LeadAction, LeadState, SubmissionRecord};

/// `window.alert`, the blocking notice for a failed transmission.
struct AlertNotifier;

impl FailureNotifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            debug!("Skipping failure alert: window is not available");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            debug!("Skipping failure alert: {:?}", e);
        }
    }
}

const ARCHITECTURE_OPTIONS: &[&str] = &[
    "Finance",
    "Logistics & Supply Chain",
    "Operations",
    "Full Stack / Multiple",
    "Not sure",
];
const OBJECTIVE_OPTIONS: &[&str] = &[
    "Improve efficiency / automation",
    "Better forecasting",
    "Cost reduction",
    "Decision support",
    "Visibility & Control",
];
const DATA_MATURITY_OPTIONS: &[&str] = &[
    "Fragmented / Siloed",
    "Partially Structured",
    "Centralized / Warehouse",
    "Unsure",
];
const EXPERIENCE_OPTIONS: &[&str] = &[
    "No prior experience",
    "Limited experimentation",
    "Active production use",
];
const TIMELINE_OPTIONS: &[&str] = &["Immediately", "3–6 Months", "Exploratory"];

/// Every named control of the form, in document order.
fn collect_record(form: &HtmlFormElement) -> SubmissionRecord {
    let elements = form.elements();
    let mut record = SubmissionRecord::new();
    for index in 0..elements.length() {
        let Some(element) = elements.item(index) else {
            continue;
        };
        let field = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Some((input.name(), input.value()))
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Some((select.name(), select.value()))
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Some((area.name(), area.value()))
        } else {
            None
        };
        if let Some((name, value)) = field {
            if !name.is_empty() {
                record.insert(name, value);
            }
        }
    }
    record
}

#[derive(Properties, PartialEq)]
struct InputFieldProps {
    label: AttrValue,
    name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    input_type: AttrValue,
    placeholder: AttrValue,
    #[prop_or_default]
    required: bool,
}

#[function_component(InputField)]
fn input_field(props: &InputFieldProps) -> Html {
    html! {
        <div class="field">
            <label class="field-label">{ &props.label }</label>
            <input
                name={props.name.clone()}
                type={props.input_type.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SelectFieldProps {
    label: AttrValue,
    name: AttrValue,
    options: &'static [&'static str],
}

#[function_component(SelectField)]
fn select_field(props: &SelectFieldProps) -> Html {
    html! {
        <div class="field">
            <label class="field-label">{ &props.label }</label>
            <div class="select-wrap">
                <select name={props.name.clone()}>
                    { for props.options.iter().map(|opt| html! { <option key={*opt} value={*opt}>{ *opt }</option> }) }
                </select>
                <span class="select-chevron">{"›"}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TextAreaFieldProps {
    label: AttrValue,
    name: AttrValue,
    placeholder: AttrValue,
    #[prop_or(3)]
    rows: u32,
}

#[function_component(TextAreaField)]
fn text_area_field(props: &TextAreaFieldProps) -> Html {
    html! {
        <div class="field field-wide">
            <label class="field-label">{ &props.label }</label>
            <textarea
                name={props.name.clone()}
                rows={props.rows.to_string()}
                placeholder={props.placeholder.clone()}
            />
        </div>
    }
}

/// Readiness assessment lead form. Posts once per submit; the confirmation replaces the
/// form after a successful transmission.
#[function_component(ReadinessAssessmentForm)]
pub fn readiness_assessment_form() -> Html {
    let state = use_reducer_eq(LeadState::default);

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !state.accepts_submit() {
                return;
            }

            let form: HtmlFormElement = e.target_unchecked_into();
            let record = collect_record(&form);

            state.dispatch(LeadAction::Begin);
            let dispatcher = state.dispatcher();
            let transport = config::lead_transport();
            spawn_local(async move {
                let result = transmit(&transport, &record).await;
                dispatcher.dispatch(settle(result, record.len(), &AlertNotifier));
            });
        })
    };

    if state.shows_confirmation() {
        return html! {
            <div class="lead-card lead-confirmation">
                <div class="confirmation-icon">{"✓"}</div>
                <h3>{"Request Queued"}</h3>
                <p>
                    {"Your infrastructure assessment request has been logged. We will deploy resources to review your inputs and schedule a strategy session."}
                </p>
            </div>
        };
    }

    html! {
        <div class="lead-card">
            <div class="lead-header">
                <h3><span class="lead-icon">{">_"}</span>{"Request Assessment"}</h3>
                <p>{"A practical assessment to identify where AI can deliver real business impact."}</p>
            </div>

            <form class="lead-form" {onsubmit}>
                <div class="field-row">
                    <InputField label="Name" name="Name" placeholder="e.g. Alex Morgan" required={true} />
                    <InputField label="Work Email" name="Email" input_type="email" placeholder="alex@company.com" required={true} />
                </div>
                <InputField label="Company" name="Company" placeholder="Company Name Ltd." required={true} />

                <SelectField label="Target Architecture" name="Target_Architecture" options={ARCHITECTURE_OPTIONS} />
                <SelectField label="Primary Objective" name="Primary_Objective" options={OBJECTIVE_OPTIONS} />
                <SelectField label="Current Data Maturity" name="Data_Maturity" options={DATA_MATURITY_OPTIONS} />
                <SelectField label="AI Experience Level" name="AI_Experience" options={EXPERIENCE_OPTIONS} />
                <SelectField label="Deployment Timeline" name="Timeline" options={TIMELINE_OPTIONS} />

                <TextAreaField
                    label="Success Criteria"
                    name="Success_Criteria"
                    placeholder="Describe your ideal outcome..."
                />

                <ButtonPrimary
                    submit={true}
                    text={state.button_label()}
                    full_width={true}
                    disabled={state.is_submitting()}
                />
                {
                    if let Some(message) = &state.last_error {
                        html! { <p class="lead-error" title={message.clone()}>{"Transmission failed. Your answers are still here, please try again."}</p> }
                    } else {
                        html! {}
                    }
                }
                <p class="lead-footnote mono">{"NO OBLIGATION. SECURE TRANSMISSION."}</p>
            </form>
        </div>
    }
}
