//! Document parsing pipeline: source resolution, MinerU upload, and response interpretation.

pub mod client;
pub mod options;
mod service;
pub mod source;
pub mod types;

pub use client::MineruClient;
pub use options::{ParseMethod, ParseOptions};
pub use service::ParsingService;
pub use source::{ResolvedSource, SourceResolver};
pub use types::{ParseError, ParseErrorKind};
