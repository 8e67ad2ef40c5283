use actix_web::http::header::ContentType;
use actix_web::{get, HttpResponse};

use crate::domain::SubmissionStatus;
use crate::waitlist_form::WaitlistForm;

/// The landing page, with an empty form and a blank status region.
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(waitlist_page(&WaitlistForm::new()))
}

/// Renders the landing page around the form's current state.
///
/// The status region holds a non-breaking space when there is nothing to
/// say. The echoed email is the only untrusted value on the page and is
/// escaped.
pub fn waitlist_page(form: &WaitlistForm) -> String {
    let status_class = match form.status() {
        SubmissionStatus::Error(_) => "status status--error",
        SubmissionStatus::Success => "status status--success",
        _ => "status",
    };
    let status_message = form.status().message().unwrap_or("&nbsp;");

    include_str!("waitlist.html")
        .replace("{status_class}", status_class)
        .replace("{status_message}", status_message)
        .replace("{email}", &htmlescape::encode_minimal(form.email()))
}
