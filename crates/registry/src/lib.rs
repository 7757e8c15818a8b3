//! # Registry
//!
//! Loads the Khronos `gl.xml` API registry into an owned [`Registry`] and summarizes it per api
//! with [`ApiIndex`].
//!
//! Only the sections feature resolution needs are modelled: `feature`, `extensions`, `types`,
//! `enums` and `commands`. The document is trusted; no schema validation happens here.
//!
//! ```rust
//! use glzig_registry::{ApiIndex, Registry};
//!
//! let registry: Registry = r#"<registry>
//!     <feature api="gl" name="GL_VERSION_1_0" number="1.0"/>
//! </registry>"#.parse().unwrap();
//! let index = ApiIndex::build(&registry);
//! assert_eq!(index.get("gl").unwrap().versions, ["1.0"]);
//! ```

mod error;
mod index;
mod model;
mod parse;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::index::{ApiIndex, ApiInfo, describe_selection, display_name};
pub use crate::model::{
    Block, Command, Declaration, EnumGroup, Enumerant, Extension, Feature, Item, ItemKind,
    Registry, TypeDecl,
};
