use std::net::TcpListener;

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{health_check, home, join_waitlist},
    waitlist_client::WaitlistClient,
};

/// A running application
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    /// Build an HTTP server running our app. The behavior of the app is
    /// configured through the `settings` argument.
    pub fn build(settings: Settings) -> std::io::Result<Self> {
        let credentials = settings
            .supabase
            .credentials()
            .expect("Invalid Supabase base URL");
        let waitlist_client = WaitlistClient::new(credentials);

        let app_config = settings.application;
        let app_address = format!("{}:{}", &app_config.host, app_config.port);
        let listener = TcpListener::bind(app_address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, waitlist_client)?;
        Ok(Self { port, server })
    }

    /// The port that the app is listening on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listen and handle requests until we receive a stop signal
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Starts a server, listening on `listener`, running in the background and returns it
fn run(listener: TcpListener, waitlist_client: WaitlistClient) -> std::io::Result<Server> {
    let waitlist_client = web::Data::new(waitlist_client);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(home)
            .service(join_waitlist)
            .service(health_check)
            .app_data(waitlist_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
