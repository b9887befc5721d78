pub mod environment;
pub mod intake;
pub mod profile;
