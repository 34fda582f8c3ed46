//! Application pages module
//!
//! - Home page
//! - Review page (landing after login)
//! - Not found page

mod home;
mod not_found;
mod review;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use review::ReviewPage;
