use crate::domain::SubmissionStatus;
use crate::waitlist_client::{SubmitError, WaitlistClient};

/// The state behind the email capture form: the typed-in address, the hidden
/// honeypot value, the in-flight flag, and where the current submission
/// attempt stands.
///
/// One instance covers one visitor's form. Nothing here is shared; the
/// rendering surface drives it and reads the status back out.
#[derive(Debug)]
pub struct WaitlistForm {
    email: String,
    honeypot: String,
    status: SubmissionStatus,
    in_flight: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            honeypot: String::new(),
            status: SubmissionStatus::Idle,
            in_flight: false,
        }
    }

    /// A form pre-filled with what the visitor typed.
    pub fn with_input(email: String, honeypot: String) -> Self {
        Self {
            email,
            honeypot,
            ..Self::new()
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submits the current email to the waitlist.
    ///
    /// While a previous call is still settling this is a no-op: the attempt
    /// is dropped, not queued. Every outcome lands in [`Self::status`];
    /// nothing escapes as an error. The await on the client call is the only
    /// suspension point.
    pub async fn submit(&mut self, client: &WaitlistClient) {
        if !self.begin_submit() {
            return;
        }
        let outcome = client.submit(&self.email, &self.honeypot).await;
        self.complete(outcome);
    }

    /// Marks a submission as started: raises the in-flight flag and clears
    /// whatever message the previous attempt left behind. Returns `false`,
    /// changing nothing, when a submission is already in flight.
    pub(crate) fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.status = SubmissionStatus::InProgress;
        true
    }

    /// Records the settled outcome and lowers the in-flight flag. The email
    /// field survives a failure so the visitor can correct it; it resets
    /// only on success.
    pub(crate) fn complete(&mut self, outcome: Result<(), SubmitError>) {
        self.status = match outcome {
            Ok(()) => {
                self.email.clear();
                SubmissionStatus::Success
            }
            Err(error) => SubmissionStatus::Error(error.user_message().into()),
        };
        self.in_flight = false;
    }
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self::new()
    }
}
