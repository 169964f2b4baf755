mod course;
mod external_account;
mod otp;
mod payment;
mod problem;
mod resource;
mod secret;
mod token;
mod user;

pub use course::*;
pub use external_account::*;
pub use otp::*;
pub use payment::*;
pub use problem::*;
pub use resource::*;
pub use secret::*;
pub use token::*;
pub use user::*;
