//! Client for the third-party forms endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Fire-and-forget JSON POSTs; the only part of the response consumed is its
//! ok status. Failures are logged and surfaced as `Err(String)` so pages
//! leave the form populated and skip the success modal. No retry, no
//! timeout, no cancellation.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

/// Contact-page inquiry endpoint.
pub const CONTACT_ENDPOINT: &str = "https://submit-form.com/hearthside-contact";

/// New-client onboarding application endpoint.
pub const ONBOARDING_ENDPOINT: &str = "https://submit-form.com/hearthside-onboarding";

/// Body of a contact-page inquiry.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Every field the form marks `required` is populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Body of a new-client onboarding application.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct OnboardingApplication {
    pub full_name: String,
    pub brokerage: String,
    pub email: String,
    pub phone: String,
    pub market: String,
    /// Service titles the applicant is interested in.
    pub services: Vec<String>,
    pub monthly_budget: String,
    pub notes: String,
}

impl OnboardingApplication {
    /// Every field the form marks `required` is populated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.services.is_empty()
    }
}

#[cfg(any(test, feature = "csr"))]
fn endpoint_failed_message(status: u16) -> String {
    format!("form endpoint returned {status}")
}

/// POST a contact inquiry to the forms provider.
///
/// # Errors
///
/// Returns an error string when the request fails to send or the provider
/// responds with a non-OK status.
pub async fn submit_contact(submission: &ContactSubmission) -> Result<(), String> {
    post_json(CONTACT_ENDPOINT, submission).await
}

/// POST an onboarding application to the forms provider.
///
/// # Errors
///
/// Returns an error string when the request fails to send or the provider
/// responds with a non-OK status.
pub async fn submit_onboarding(application: &OnboardingApplication) -> Result<(), String> {
    post_json(ONBOARDING_ENDPOINT, application).await
}

#[allow(clippy::unused_async)]
async fn post_json<T: Serialize>(endpoint: &str, body: &T) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let result = async {
            let resp = gloo_net::http::Request::post(endpoint)
                .json(body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            if resp.ok() {
                Ok(())
            } else {
                Err(endpoint_failed_message(resp.status()))
            }
        }
        .await;
        if let Err(message) = &result {
            log::error!("form submission to {endpoint} failed: {message}");
        }
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (endpoint, body);
        Err("not available outside the browser".to_owned())
    }
}
