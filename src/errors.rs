use crate::email_client::SendEmailError;

/// Failures of best-effort infrastructure. The submission pipeline logs these
/// and keeps going; they never change the caller-visible outcome of a
/// submission.
#[derive(thiserror::Error, Debug)]
pub enum InfrastructureError {
    #[error("database operation failed")]
    Database(#[from] sqlx::Error),
    #[error("email delivery failed")]
    EmailDelivery(#[from] SendEmailError),
}
