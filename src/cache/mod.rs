//! Cache
//!
//! Este módulo contiene los sistemas de cache locales del proceso.

pub mod ttl_cache;

pub use ttl_cache::TtlCache;
