//! Page sections

mod landing;

pub use landing::LandingPage;
