// Library exports for testing
pub mod constants;
pub mod icon;
