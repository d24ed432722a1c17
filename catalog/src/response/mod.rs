//! Response handling.
//!
//! - [`ResponseFormat`] - How a response body is decoded for an operation
//! - [`DetailedResponse`] - The decoded result together with status and headers

mod detailed;
mod format;

pub use detailed::DetailedResponse;
pub use format::{BinaryFormat, EmptyFormat, JsonArrayFormat, JsonFormat, ResponseFormat, TextFormat};
