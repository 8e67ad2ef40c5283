use actix_web::http::header::ContentType;
use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::routes::waitlist_page;
use crate::waitlist_client::WaitlistClient;
use crate::waitlist_form::WaitlistForm;

/// The data being submitted from the waitlist form
#[derive(Deserialize)]
pub struct FormData {
    email: String,
    /// Hidden honeypot field. Browsers leave it empty; bots tend not to.
    #[serde(default)]
    hp: String,
}

/// Runs one waitlist submission and re-renders the page with the outcome.
///
/// Always answers 200: every failure becomes a message in the page's status
/// region, never an error response.
#[tracing::instrument(
    name = "Submitting a waitlist signup",
    skip(form, client),
    fields(signup_email = %form.email)
)]
#[post("/waitlist")]
pub async fn join_waitlist(
    form: web::Form<FormData>,
    client: web::Data<WaitlistClient>,
) -> HttpResponse {
    let form = form.into_inner();
    let mut waitlist_form = WaitlistForm::with_input(form.email, form.hp);
    waitlist_form.submit(&client).await;

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(waitlist_page(&waitlist_form))
}
