pub mod commands;
pub mod footprint;
pub mod locate;
pub mod runtime;
pub mod version;
