use yew::prelude::*;

use crate::components::layout::{Badge, SectionShell};

fn last_updated() -> String {
    chrono::Local::now().format("%B %-d, %Y").to_string()
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="page legal-page">
            <SectionShell class="narrow">
                <Badge text="Legal // Privacy" />
                <h1 class="page-title">{"Privacy Policy"}</h1>
                <div class="legal-content">
                    <p class="lead">{ format!("Last Updated: {}", last_updated()) }</p>
                    <p>
                        {"At AventeqAI, we treat data privacy as a fundamental component of our infrastructure. This policy outlines how we handle data during AI model training, development, and deployment."}
                    </p>

                    <h3>{"1. Data Collection & Usage"}</h3>
                    <p>{"We collect information necessary to provide our AI consultancy services, including:"}</p>
                    <ul>
                        <li><strong>{"Client Data: "}</strong>{"Operational datasets provided for model training and validation."}</li>
                        <li><strong>{"System Telemetry: "}</strong>{"Performance metrics from deployed AI agents."}</li>
                        <li><strong>{"Contact Information: "}</strong>{"Business details collected via our readiness assessment forms."}</li>
                    </ul>

                    <h3>{"2. AI Model Security"}</h3>
                    <p>
                        {"We adhere to strict data isolation protocols. Data provided for custom model development is never used to train our foundation models or shared with other clients. All training data is processed in SOC2-compliant environments."}
                    </p>

                    <h3>{"3. Data Retention"}</h3>
                    <p>
                        {"We retain client data only for the duration of the active engagement or as required by service level agreements (SLAs). Upon project termination, all proprietary datasets are securely purged from our training infrastructure."}
                    </p>
                </div>
            </SectionShell>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="page legal-page">
            <SectionShell class="narrow">
                <Badge text="Legal // Terms" />
                <h1 class="page-title">{"Terms of Service"}</h1>
                <div class="legal-content">
                    <p class="lead">{ format!("Last Updated: {}", last_updated()) }</p>
                    <p>
                        {"These Terms of Service govern your use of AventeqAI's consultancy services and AI infrastructure solutions. By engaging with our services, you agree to these terms."}
                    </p>

                    <h3>{"1. Intellectual Property"}</h3>
                    <p>
                        <strong>{"Custom Models: "}</strong>
                        {"Any bespoke AI models trained exclusively on your proprietary data are owned by you."}
                        <br />
                        <strong>{"Platform IP: "}</strong>
                        {"AventeqAI retains ownership of our underlying frameworks, pre-trained base models, and deployment infrastructure code."}
                    </p>

                    <h3>{"2. Liability & Performance"}</h3>
                    <p>
                        {"While we strive for high-accuracy outcomes, AI models are probabilistic by nature. AventeqAI provides infrastructure on an \"as-is\" basis and makes no absolute guarantees regarding specific predictive accuracy for novel data inputs."}
                    </p>

                    <h3>{"3. Governing Law"}</h3>
                    <p>
                        {"These terms shall be governed by and construed in accordance with the laws of the jurisdiction in which the contracting AventeqAI entity resides (United Kingdom, India, Singapore, or Canada)."}
                    </p>
                </div>
            </SectionShell>
        </div>
    }
}
