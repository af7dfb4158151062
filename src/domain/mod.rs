pub use contact_email::*;
pub use contact_message::*;
pub use contact_name::*;
pub use field_errors::*;
pub use new_contact::*;
pub use portfolio::*;

mod contact_email;
mod contact_message;
mod contact_name;
mod field_errors;
mod new_contact;
mod portfolio;
