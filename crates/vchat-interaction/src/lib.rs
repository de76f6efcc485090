//! Transport implementations of the vchat session source.

pub mod http_session_source;

pub use http_session_source::HttpSessionSource;
