//! Core library for the company directory service.
//!
//! Provides the `CompanyRecord` row type, TOML configuration loading,
//! per-invocation MySQL access, and the HTML renderer for the
//! "Company Data" page.

pub mod config;
pub mod db;
pub mod error;
pub mod record;
pub mod render;

pub use error::DirectoryError;
pub use record::CompanyRecord;
