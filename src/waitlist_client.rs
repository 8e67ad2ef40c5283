use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::configuration::SupabaseCredentials;
use crate::domain::WaitlistErrorCode;

/// Shown when a submit is attempted without the Supabase values configured.
pub const MISSING_CONFIG_MESSAGE: &str =
    "Missing Supabase env vars (NEXT_PUBLIC_SUPABASE_URL, NEXT_PUBLIC_SUPABASE_PUBLISHABLE_KEY).";

/// A client for the remote waitlist-submit function.
///
/// `credentials` may be absent; submissions then fail locally with
/// [`SubmitError::MissingConfiguration`] before any request is issued.
pub struct WaitlistClient {
    http_client: Client,
    credentials: Option<SupabaseCredentials>,
}

/// Everything that can end one submission attempt unsuccessfully.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("supabase base url and publishable key are not configured")]
    MissingConfiguration,
    /// The endpoint answered with a non-2xx status and (optionally) a
    /// machine-readable code in the body.
    #[error("the waitlist endpoint rejected the submission: {0:?}")]
    Rejected(WaitlistErrorCode),
    /// The request never produced a usable response.
    #[error("failed to reach the waitlist endpoint")]
    Transport(#[source] reqwest::Error),
}

impl SubmitError {
    /// The message shown to the visitor for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::MissingConfiguration => MISSING_CONFIG_MESSAGE,
            SubmitError::Rejected(code) => code.user_message(),
            SubmitError::Transport(_) => WaitlistErrorCode::Unknown.user_message(),
        }
    }
}

impl WaitlistClient {
    pub fn new(credentials: Option<SupabaseCredentials>) -> Self {
        Self {
            http_client: Client::new(),
            credentials,
        }
    }

    /// Submits `email` to the waitlist function.
    ///
    /// Issues exactly one POST. There is no retry, no timeout, and no way to
    /// cancel a request once it is on the wire; the call settles when the
    /// response (or the transport failure) arrives.
    ///
    /// `honeypot` is the hidden form field's value; it stays empty for
    /// anything that is not a bot.
    pub async fn submit(&self, email: &str, honeypot: &str) -> Result<(), SubmitError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(SubmitError::MissingConfiguration)?;
        let url = credentials
            .base_url
            .join("functions/v1/waitlist-submit")
            .unwrap();
        let body = WaitlistRequest {
            email,
            hp: honeypot,
        };

        let response = self
            .http_client
            .post(url)
            .header("apikey", credentials.publishable_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(SubmitError::Transport)?;

        if response.status().is_success() {
            return Ok(());
        }

        // Non-2xx: read the machine-readable code out of the body. A body
        // that is missing, not JSON, or shaped differently counts as unknown.
        let code = match response.json::<WaitlistResponse>().await {
            Ok(body) => body
                .error
                .as_deref()
                .map(WaitlistErrorCode::parse)
                .unwrap_or(WaitlistErrorCode::Unknown),
            Err(_) => WaitlistErrorCode::Unknown,
        };

        Err(SubmitError::Rejected(code))
    }
}

/// The body of a waitlist-submit request. `hp` is the honeypot field.
#[derive(Serialize)]
struct WaitlistRequest<'a> {
    email: &'a str,
    hp: &'a str,
}

/// The body of a rejection, when the function managed to produce one.
#[derive(Deserialize)]
struct WaitlistResponse {
    error: Option<String>,
}
