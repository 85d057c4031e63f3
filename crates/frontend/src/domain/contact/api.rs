use contracts::shared::validation::ContactMessage;
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode form: {0}")]
    Encode(#[from] serde_qs::Error),
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("HTTP error: {0}")]
    Status(u16),
}

/// Posts the message form-encoded to `endpoint`. Any non-2xx status is an
/// error; there is no retry.
pub async fn submit_contact(endpoint: &str, message: &ContactMessage) -> Result<(), SubmitError> {
    let body = message.to_form_body()?;

    let response = Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)?
        .send()
        .await?;

    if !response.ok() {
        return Err(SubmitError::Status(response.status()));
    }
    Ok(())
}
