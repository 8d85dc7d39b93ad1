use crate::lead::LeadTransport;

/// Google Apps Script web app that collects readiness assessment requests.
pub const FORM_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbzJ4cAleKG2UWmDo0n-llqKMvtdL4byiyQUUOVhGKHhk9Ck85GMW-CeRIsyb-tj-cNJ/exec";

#[cfg(all(feature = "relay", debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Relay when running locally
}

#[cfg(all(feature = "relay", not(debug_assertions)))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

#[cfg(feature = "relay")]
pub fn lead_transport() -> LeadTransport {
    LeadTransport::Relay {
        url: format!("{}/api/leads", get_backend_url()),
    }
}

#[cfg(not(feature = "relay"))]
pub fn lead_transport() -> LeadTransport {
    LeadTransport::Opaque {
        endpoint: FORM_ENDPOINT.to_string(),
    }
}
