//! Page Components

mod home;
mod pricing;
mod templates;

pub use home::HomePage;
pub use pricing::PricingPage;
pub use templates::TemplatesPage;
