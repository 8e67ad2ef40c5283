/// Machine-readable rejection codes reported by the waitlist function.
///
/// The endpoint sends these in a JSON body field named `error`. Anything it
/// sends that we do not recognize collapses into `Unknown`, which shares the
/// generic fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitlistErrorCode {
    InvalidEmail,
    RateLimited,
    Unauthorized,
    ServerMisconfigured,
    DbError,
    Unknown,
}

impl WaitlistErrorCode {
    pub fn parse(code: &str) -> Self {
        match code {
            "invalid_email" => Self::InvalidEmail,
            "rate_limited" => Self::RateLimited,
            "unauthorized" => Self::Unauthorized,
            "server_misconfigured" => Self::ServerMisconfigured,
            "db_error" => Self::DbError,
            _ => Self::Unknown,
        }
    }

    /// The message shown to the visitor for this code.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::RateLimited => "Too many attempts. Please try again in a bit.",
            Self::DbError => "Error: User is too excited. (You're already signed up).",
            Self::Unauthorized | Self::ServerMisconfigured | Self::Unknown => {
                "Something went wrong. Please try again."
            }
        }
    }
}
