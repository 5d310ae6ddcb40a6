pub mod clean;
pub mod uninstall;
