//! Configuration modules for the Acadex API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables at startup:
//!
//! - [`cors`]: CORS allowed-origins configuration
//! - [`database`]: PostgreSQL connection pool initialization

pub mod cors;
pub mod database;
