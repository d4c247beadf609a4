pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http_client;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod provider_factory;
pub mod providers;
pub mod race;
pub mod telemetry;
