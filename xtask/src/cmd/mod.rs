pub mod preflight;
pub mod smoke;
