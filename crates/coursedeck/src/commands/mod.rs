pub mod certificate;
pub mod completion;
pub mod config;
