pub mod config;
pub mod db;
pub mod employee;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod plan;
pub mod report;
pub mod stats;
pub mod work;
