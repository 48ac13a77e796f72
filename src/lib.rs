//! Collects VLESS links that use the xhttp transport from plaintext or Base64
//! subscription feeds and writes them to a single file.
//!
//! The flow is [`source::read_source`] → [`encoding::is_base64`] /
//! [`encoding::decode_base64`] → [`filter::filter_lines`], driven per source by
//! [`pipeline::run`] and finished with [`output::write_output`].

pub mod config;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod source;

pub use config::{Config, DEFAULT_OUTPUT, DEFAULT_SOURCES};
pub use encoding::{decode_base64, is_base64};
pub use error::{ConfigError, DecodeError, OutputError, SourceError};
pub use filter::{filter_lines, is_xhttp_vless};
pub use output::write_output;
pub use pipeline::{run, RunReport, SourceOutcome, SourceReport};
pub use source::read_source;
