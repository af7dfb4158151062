use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;

use crate::configuration::{DatabaseSettings, Settings};
use crate::domain::EmailAddress;
use crate::email_client::EmailClient;
use crate::routes::{
    download_portfolio_pdf, generate_pdf, health_check, list_contacts, list_subscriptions,
    mark_contact_read, submit_contact, subscribe_newsletter,
};

/// Recipient of contact-form notifications, shared with the submission
/// pipeline through application data.
pub struct AdminEmail(pub EmailAddress);

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let connection_pool = get_connection_pool(&configuration.database);
        let email_client = EmailClient::from_settings(&configuration.email);
        let admin_email = EmailAddress::parse(configuration.email.admin.clone())
            .map_err(|e| anyhow::anyhow!("Invalid admin email address: {}", e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, connection_pool, email_client, admin_email)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn get_connection_pool(configuration: &DatabaseSettings) -> PgPool {
    // connect_lazy defers connection establishment until first use. The
    // submission pipeline treats the store as best-effort infrastructure, so
    // the process must come up even when Postgres is unreachable.
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy(configuration.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool.")
}

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    email_client: EmailClient,
    admin_email: EmailAddress,
) -> Result<Server, std::io::Error> {
    // First create the shareable state, and then move inside the closure
    // otherwise you would create it multiple times, every time the closure
    // runs.
    // web::Data is an ARC, so we can clone it inside the closure
    let db_pool = web::Data::new(db_pool);
    let email_client = web::Data::new(email_client);
    let admin_email = web::Data::new(AdminEmail(admin_email));

    // HttpServer receives a closure returning an App
    // It will call this closure in multiple threads (to create a multi-threaded
    // web server).
    let server = HttpServer::new(move || {
        App::new()
            // Middleware
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .route("/contact", web::post().to(submit_contact))
            .route("/newsletter", web::post().to(subscribe_newsletter))
            .route("/generate-pdf", web::get().to(generate_pdf))
            .route("/download-portfolio-pdf", web::get().to(download_portfolio_pdf))
            .route("/admin/contacts", web::get().to(list_contacts))
            .route(
                "/admin/contacts/{contact_id}/read",
                web::post().to(mark_contact_read),
            )
            .route("/admin/newsletters", web::get().to(list_subscriptions))
            .app_data(db_pool.clone()) // Here we pass a clone
            .app_data(email_client.clone())
            .app_data(admin_email.clone())
    })
    .listen(listener)?
    .run(); // It does not run yet because we have not awaited it

    Ok(server)
}
