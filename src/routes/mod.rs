pub use admin::*;
pub use contact::*;
pub use health_check::*;
pub use newsletter::*;
pub use portfolio::*;

mod admin;
mod contact;
mod health_check;
mod newsletter;
mod portfolio;
