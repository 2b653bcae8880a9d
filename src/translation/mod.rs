//! Impression translation pipeline.
//!
//! Data flow: impression text -> prompt -> messages endpoint -> shaped outcome.
//! - `prompt`: instruction text sent to the model
//! - `protocol`: request and response wire types
//! - `transport`: the HTTPS round trip
//! - `shaper`: character ceiling, disclaimer, outcome types
//! - `engine`: input validation and the single failure boundary

pub mod engine;
pub mod error;
pub mod prompt;
pub mod protocol;
pub mod shaper;
pub mod transport;

pub use engine::TranslationEngine;
pub use error::{ErrorKind, TranslationError, TranslationResult};
pub use shaper::{DISCLAIMER, MAX_CHARACTERS, Translation, TranslationFailure, TranslationOutcome};
pub use transport::{HttpTransport, MessagesTransport};
