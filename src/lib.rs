//! Terminal login/register UI backed by a mock authentication service.

pub mod auth;
pub mod config;
pub mod logging;
pub mod routes;
pub mod ui;
