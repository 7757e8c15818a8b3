pub mod apis;
pub mod extensions;
pub mod generate;
