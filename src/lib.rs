pub mod cmd;
pub mod frontend;
pub mod source;

pub const HUSK_VERSION: &str = env!("CARGO_PKG_VERSION");
