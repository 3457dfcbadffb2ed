//! Observability for mapcycle.
//! `tracing` crate with `EnvFilter`, filter read from `MAPCYCLE_LOG`.

pub mod setup;

pub use setup::init_tracing;
