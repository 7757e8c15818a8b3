//! Facade crate for the glzig pipeline.
//! Re-exports the stage crates and composes them behind [`Generator::builder`].
//! Keep this crate thin: it wires stages together, it does not resolve or render anything itself.
//!
//! ## Usage
//! - Load a [`registry::Registry`] once; it is immutable and can be shared between threads.
//! - Build a [`domain::selection::Selection`] and call [`GeneratorBuilder::generate`].

mod builder;
mod error;

pub use crate::builder::{Generated, GeneratorBuilder, NoRegistry, WithRegistry};
pub use crate::error::{GenerateError, GenerateErrorExt};
pub use glzig_domain as domain;
pub use glzig_emitter as emitter;
pub use glzig_kernel as kernel;
pub use glzig_registry as registry;
pub use glzig_resolver as resolver;

/// Entry point of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Generator;

impl Generator {
    #[must_use]
    pub fn builder() -> GeneratorBuilder<NoRegistry> {
        GeneratorBuilder::new()
    }
}
