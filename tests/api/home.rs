use crate::app;

#[actix_web::test]
async fn the_landing_page_serves_the_waitlist_form() {
    let app = app::spawn_app().await;

    let response = app.get_home().await.expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.expect("Failed to read response body");
    assert!(html.contains("Turn Clutter Into Clarity"));
    assert!(html.contains(r#"action="/waitlist" method="post""#));
    assert!(html.contains(r#"placeholder="Enter your email""#));
}

#[actix_web::test]
async fn the_landing_page_status_region_starts_blank() {
    let app = app::spawn_app().await;

    let response = app.get_home().await.expect("Failed to execute request");

    let html = response.text().await.expect("Failed to read response body");
    assert!(html.contains(r#"<p class="status" role="status" aria-live="polite">&nbsp;</p>"#));
}
