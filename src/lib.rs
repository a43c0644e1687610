//! # Comma Stream
//!
//! Streaming parser that turns incremental LLM output into a list, one
//! comma-separated item at a time.
//!
//! Models asked for "a comma separated list of five animals" answer token
//! by token. This crate re-chunks those fragments so each item is
//! available as soon as its closing comma arrives, instead of after the
//! whole response.
//!
//! ## Features
//!
//! - **Eager emission** — every comma in the buffer is drained as soon as
//!   the fragment containing it arrives
//! - **Two modes, one algorithm** — a blocking [`Iterator`] adapter and an
//!   async [`futures::Stream`] adapter share [`CommaSplitter`]
//! - **Transparent errors** — fragment-source failures are yielded
//!   unchanged and end the run without a partial flush
//! - **Cancellation** — stop a run between fragments via `AtomicBool`
//! - **Empty-item filtering** — opt-in via [`SplitConfig::skip_empty`]
//!
//! ## Quick Start
//!
//! ```
//! use comma_stream::split_into_list_stream;
//! use futures::StreamExt;
//!
//! # futures::executor::block_on(async {
//! let tokens = futures::stream::iter(["lion, ti", "ger, bear"]);
//! let mut animals = Box::pin(split_into_list_stream(tokens));
//!
//! while let Some(chunk) = animals.next().await {
//!     println!("{:?}", chunk); // ["lion"], ["tiger"], ["bear"]
//! }
//! # });
//! ```

pub mod collect;
pub mod config;
pub mod error;
pub mod iter;
pub mod splitter;
pub mod stream;

pub use collect::{collect_items, collect_items_stream, split_text};
pub use config::{SplitConfig, SplitConfigBuilder};
pub use error::{Result, SplitError};
pub use iter::{split_into_list, SplitIntoList};
pub use splitter::CommaSplitter;
pub use stream::{
    split_into_list_stream, try_split_into_list_stream, try_split_into_list_stream_with_config,
};
