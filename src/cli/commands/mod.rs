pub mod cnr;
pub mod config;
pub mod route;
pub mod whois;
