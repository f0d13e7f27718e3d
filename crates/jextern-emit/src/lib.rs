//! jextern emitter: renders declaration trees as Haxe extern bindings.
//!
//! This crate provides the rendering pipeline:
//! - `staging` - speculative output buffer (stage, substitute, commit, discard)
//! - `types` - type reference rendering
//! - `names` - synthesized generic parameter names
//! - `docs` - documentation comment rendering
//! - `emitter` - declaration rendering and nested-type flattening
//! - `sink` - destinations for committed output

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
pub mod docs;
mod emitter;
mod error;
pub mod escape;
pub mod names;
pub mod sentinel;
pub mod sink;
pub mod staging;
pub mod types;

#[cfg(test)]
mod docs_tests;
#[cfg(test)]
mod sink_tests;

pub use config::{Config, DEFAULT_RESERVED_WORDS};
pub use emitter::{Disposition, Emitter, Outcome, Report};
pub use error::{Error, Result};
pub use sink::{DirectorySinks, MemorySinks, SinkProvider, StdoutSinks};
pub use staging::{Fragment, FragmentRole, StagingBuffer};
pub use types::{HaxeTypes, RenderType};
