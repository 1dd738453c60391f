pub mod cli;
pub mod config;
pub mod dashboard;
pub mod ecourts;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod server;
pub mod session;
pub mod team;

#[cfg(test)]
pub mod testing;
