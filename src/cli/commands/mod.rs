pub mod clear;
mod command_result;
pub mod export;
pub mod init;
pub mod patterns;

pub use command_result::*;
