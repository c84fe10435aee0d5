pub mod assets;
pub mod catalog;
pub mod format;
pub mod logger;
pub mod version;
