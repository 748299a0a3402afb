// Library for tests to access modules

pub mod config;
pub mod docker_repo;
pub mod error;
pub mod format;
pub mod models;
pub mod report;
pub mod sysinfo_repo;
pub mod version;
