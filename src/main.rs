use clariparse_waitlist::configuration::get_configuration;
use clariparse_waitlist::startup::Application;
use clariparse_waitlist::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("clariparse-waitlist".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration");
    let app = Application::build(configuration)?;

    app.run_until_stopped().await
}
