pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod errors;
pub mod notifications;
pub mod persistence;
pub mod portfolio_pdf;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
