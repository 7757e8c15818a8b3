use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// How registry identifiers are turned into output identifiers.
///
/// * `Preserve`: `glClear`, `GL_TRIANGLES`, `GLenum`.
/// * `Rename`: `clear`, `TRIANGLES`, `Enum`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NamingMode {
    Preserve,
    #[default]
    Rename,
}

impl NamingMode {
    #[must_use]
    pub const fn from_preserve_flag(preserve: bool) -> Self {
        if preserve { Self::Preserve } else { Self::Rename }
    }

    #[must_use]
    pub const fn is_preserve(self) -> bool {
        matches!(self, Self::Preserve)
    }
}

/// A target configuration: the input of feature resolution.
///
/// `version` is kept as written (`"4.6"`); it is compared numerically per dotted segment.
/// The order of `extensions` is irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub api: String,
    pub version: String,
    pub profile: Option<String>,
    pub extensions: Vec<String>,
    pub naming: NamingMode,
}

impl Selection {
    /// A selection without profile, extensions, in [`NamingMode::Rename`].
    #[must_use]
    pub fn new(api: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            api: api.into(),
            version: version.into(),
            profile: None,
            extensions: Vec::new(),
            naming: NamingMode::default(),
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn with_naming(mut self, naming: NamingMode) -> Self {
        self.naming = naming;
        self
    }

    /// Whether `name` was requested.
    #[must_use]
    pub fn requests_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }
}
