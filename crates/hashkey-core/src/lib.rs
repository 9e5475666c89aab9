pub mod clock;
pub mod crypto;
pub mod generator;
pub mod otp;
pub mod report;

pub use generator::{generate, GeneratedKey};
