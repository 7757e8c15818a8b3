use chrono::{DateTime, Utc};
use glzig_domain::selection::NamingMode;
use strum_macros::{Display, IntoStaticStr};
use typed_builder::TypedBuilder;

/// Value of `about.generator_name` unless overridden.
pub const GENERATOR_NAME: &str = concat!("glzig v", env!("CARGO_PKG_VERSION"));

/// `about.generated_at` layout: UTC, second precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Display metadata for one emitted binding.
///
/// ```rust
/// use glzig_emitter::EmitOptions;
///
/// let options = EmitOptions::builder().api_name("OpenGL").version_major(4).version_minor(6).build();
/// assert_eq!(options.version_major, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct EmitOptions {
    /// Human readable api name, e.g. `OpenGL 4.6 (Core Profile)`.
    #[builder(setter(into))]
    pub api_name: String,
    pub version_major: u32,
    #[builder(default)]
    pub version_minor: u32,
    #[builder(default)]
    pub naming: NamingMode,
    #[builder(default = Utc::now())]
    pub generated_at: DateTime<Utc>,
    #[builder(default = GENERATOR_NAME.to_owned(), setter(into))]
    pub generator_name: String,
}

impl EmitOptions {
    #[must_use]
    pub fn probe(&self) -> ExtensionProbe {
        ExtensionProbe::for_major(self.version_major)
    }

    #[must_use]
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// How the generated `initExtension` asks the driver for its extension list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ExtensionProbe {
    /// `glGetIntegerv(NUM_EXTENSIONS)`, then `glGetStringi(EXTENSIONS, i)` per index.
    IndexedCount,
    /// `glGetString(EXTENSIONS)` split on single spaces.
    SpaceDelimited,
}

impl ExtensionProbe {
    /// Indexed queries exist from version 3 on.
    #[must_use]
    pub const fn for_major(major: u32) -> Self {
        if major >= 3 { Self::IndexedCount } else { Self::SpaceDelimited }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_follows_major_version() {
        assert_eq!(ExtensionProbe::for_major(2), ExtensionProbe::SpaceDelimited);
        assert_eq!(ExtensionProbe::for_major(3), ExtensionProbe::IndexedCount);
        assert_eq!(ExtensionProbe::for_major(4), ExtensionProbe::IndexedCount);
        assert_eq!(ExtensionProbe::IndexedCount.to_string(), "indexed-count");
    }

    #[test]
    fn timestamp_has_second_precision() {
        let generated_at = DateTime::from_timestamp(1_700_000_000, 999_000_000).expect("valid");
        let options =
            EmitOptions::builder().api_name("OpenGL").version_major(2).generated_at(generated_at).build();

        assert_eq!(options.timestamp(), "2023-11-14T22:13:20Z");
        assert_eq!(options.probe(), ExtensionProbe::SpaceDelimited);
        assert!(options.generator_name.starts_with("glzig v"));
        assert_eq!(options.naming, NamingMode::Rename);
    }
}
