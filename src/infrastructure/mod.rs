//! Infrastructure layer - file system access

pub mod catalog_file;

pub use catalog_file::load_catalog;
