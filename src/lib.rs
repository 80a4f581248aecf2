pub mod calories;
pub mod input;
pub mod rps;

pub type Result<T> = std::result::Result<T, anyhow::Error>;
