pub mod auth;
pub mod filter;
pub mod import;
pub mod plan;
pub mod roster;
pub mod session;
pub mod work;
