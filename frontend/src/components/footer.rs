use chrono::Datelike;
use yew::prelude::*;

use crate::navigation::{use_nav, Page};

pub struct Office {
    pub city: &'static str,
    pub flag: &'static str,
    pub country: &'static str,
    pub detail: &'static str,
}

pub const HEADQUARTERS: Office = Office {
    city: "Vadodara, India",
    flag: "https://flagcdn.com/w40/in.png",
    country: "India",
    detail: "Tech Park One, Suite 404",
};

pub const HEADQUARTERS_CITY_LINE: &str = "Vadodara, Gujarat 390007";

pub static GLOBAL_OFFICES: [Office; 3] = [
    Office {
        city: "London",
        flag: "https://flagcdn.com/w40/gb.png",
        country: "UK",
        detail: "Canary Wharf, Level 39",
    },
    Office {
        city: "Singapore",
        flag: "https://flagcdn.com/w40/sg.png",
        country: "Singapore",
        detail: "Marina Bay Financial Centre",
    },
    Office {
        city: "Canada",
        flag: "https://flagcdn.com/w40/ca.png",
        country: "Canada",
        detail: "Toronto, Ontario",
    },
];

pub fn office_label(office: &Office) -> Html {
    html! {
        <p class="office-city">
            <img src={office.flag} alt={office.country} class="flag" />
            { office.city }
        </p>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let nav = use_nav();
    let go = |page: Page| nav.navigate.reform(move |_: MouseEvent| page);
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div>
                    <div class="brand">
                        <span class="brand-mark">{"◆"}</span>
                        <span class="brand-name">{"AventeqAI"}</span>
                    </div>
                    <p class="footer-tagline">{"Custom AI Infrastructure Built for Measurable Business Growth."}</p>
                    <div class="mono caption">{ format!("© {} AventeqAI.", year) }</div>
                </div>

                <div>
                    <h4>{"Solutions"}</h4>
                    <ul class="footer-links">
                        <li><button onclick={go(Page::Finance)}>{"AI for Finance"}</button></li>
                        <li><button onclick={go(Page::Logistics)}>{"AI for Logistics & Supply Chain"}</button></li>
                        <li><button onclick={go(Page::Operations)}>{"AI for Operations"}</button></li>
                    </ul>
                </div>

                <div>
                    <h4>{"Headquarters"}</h4>
                    { office_label(&HEADQUARTERS) }
                    <p class="office-detail">
                        { HEADQUARTERS.detail }<br />{ HEADQUARTERS_CITY_LINE }
                    </p>
                </div>

                <div>
                    <h4>{"Global Offices"}</h4>
                    <ul class="office-list">
                        {
                            for GLOBAL_OFFICES.iter().map(|office| html! {
                                <li key={office.city}>
                                    { office_label(office) }
                                    <p class="office-detail">{ office.detail }</p>
                                </li>
                            })
                        }
                    </ul>
                </div>

                <div class="footer-bottom">
                    <div class="footer-legal">
                        <button onclick={go(Page::Home)}>{"About"}</button>
                        <button onclick={go(Page::Privacy)}>{"Privacy Policy"}</button>
                        <button onclick={go(Page::Terms)}>{"Terms of Service"}</button>
                    </div>
                    <p>{"System Status: "}<span class="status-ok">{"Operational"}</span></p>
                </div>
            </div>
        </footer>
    }
}
