use yew::prelude::*;

use crate::components::footer::{office_label, GLOBAL_OFFICES, HEADQUARTERS, HEADQUARTERS_CITY_LINE};
use crate::components::layout::{Badge, SectionShell};
use crate::components::lead_form::ReadinessAssessmentForm;

const CONTACT_EMAIL: &str = "hello@aventeqai.com";

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <SectionShell class="narrow">
                <div class="grid two">
                    <div>
                        <Badge text="Start_Building" />
                        <h1 class="page-title">{"Contact Us"}</h1>
                        <p class="page-lead">
                            {"Ready to start your AI transformation? Reach out to our global team."}
                        </p>

                        <div class="office-blocks">
                            <div>
                                <h4 class="office-heading"><span class="check">{"✓"}</span>{"Headquarters"}</h4>
                                <div class="office-body">
                                    { office_label(&HEADQUARTERS) }
                                    <p class="office-detail">{ HEADQUARTERS.detail }<br />{ HEADQUARTERS_CITY_LINE }</p>
                                </div>
                            </div>

                            <div>
                                <h4 class="office-heading"><span class="check">{"✓"}</span>{"Global Offices"}</h4>
                                <div class="office-body">
                                    {
                                        for GLOBAL_OFFICES.iter().map(|office| html! {
                                            <div key={office.city}>
                                                { office_label(office) }
                                                <p class="office-detail">{ office.detail }</p>
                                            </div>
                                        })
                                    }
                                </div>
                            </div>

                            <div>
                                <h4 class="office-heading"><span class="check">{"→"}</span>{"Email"}</h4>
                                <p class="office-body email">
                                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                                </p>
                            </div>
                        </div>
                    </div>

                    <ReadinessAssessmentForm />
                </div>
            </SectionShell>
        </div>
    }
}
