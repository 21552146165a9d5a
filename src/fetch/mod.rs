//! Fetch Module
//!
//! Retrieves the raw document from a remote source. The pipeline entry
//! point: everything downstream waits on the fetched payload, and a fetch
//! failure aborts the run before tokenization ever starts.
//!
//! ## Responsibilities
//! - **Retrieval**: one outbound HTTP GET per run, with a request timeout
//!   and bounded retries for transient transport errors.
//! - **Abstraction**: the `TextSource` trait decouples the engine from the
//!   transport so tests can substitute canned or failing sources.

pub mod source;

pub use source::{FetchError, HttpSource, RawText, TextSource};
