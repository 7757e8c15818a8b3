use crate::error::{GenerateError, GenerateErrorExt};
use chrono::{DateTime, Utc};
use glzig_domain::features::ResolvedFeatureSet;
use glzig_domain::selection::Selection;
use glzig_emitter::{EmitOptions, GENERATOR_NAME, emit};
use glzig_kernel::version::ApiVersion;
use glzig_registry::{Registry, describe_selection};
use glzig_resolver::resolve;
use private::Sealed;
use tracing::info;

#[derive(Debug, Default)]
pub struct NoRegistry;
#[derive(Debug)]
pub struct WithRegistry<'r>(&'r Registry);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRegistry {}
impl Sealed for WithRegistry<'_> {}

#[derive(Debug, Clone)]
struct GeneratorConfig {
    selection: Selection,
    generated_at: Option<DateTime<Utc>>,
    generator_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            selection: Selection::new("gl", "4.6").with_profile("core"),
            generated_at: None,
            generator_name: GENERATOR_NAME.to_owned(),
        }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Display name written to `about.api_name`.
    pub api_name: String,
    pub features: ResolvedFeatureSet,
    /// The Zig module.
    pub source: String,
}

/// Configures and runs registry -> resolver -> emitter.
///
/// ```rust,ignore
/// let generated = Generator::builder()
///     .selection(Selection::new("gl", "4.1").with_profile("core"))
///     .registry(&registry)
///     .generate()?;
/// std::fs::write("gl.zig", generated.source)?;
/// ```
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct GeneratorBuilder<S: Sealed = NoRegistry> {
    state: S,
    config: GeneratorConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> GeneratorBuilder<S> {
    #[must_use = "Sets the api, version, profile, extensions and naming mode to generate"]
    pub fn selection(mut self, selection: Selection) -> Self {
        self.config.selection = selection;
        self
    }

    /// Freezes `about.generated_at`; the current time is used otherwise.
    #[must_use = "Sets the generation timestamp"]
    pub const fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.config.generated_at = Some(at);
        self
    }

    #[must_use = "Sets the generator name written to the about block"]
    pub fn generator_name(mut self, name: impl Into<String>) -> Self {
        self.config.generator_name = name.into();
        self
    }

    fn transition<N: Sealed>(self, state: N) -> GeneratorBuilder<N> {
        GeneratorBuilder { state, config: self.config }
    }
}

impl GeneratorBuilder<NoRegistry> {
    #[must_use = "Creates a generator builder for gl 4.6 core"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the registry to resolve against"]
    pub fn registry(self, registry: &Registry) -> GeneratorBuilder<WithRegistry<'_>> {
        self.transition(WithRegistry(registry))
    }
}

impl GeneratorBuilder<WithRegistry<'_>> {
    /// Resolves the selection and renders the binding.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Version`] when the selection's version is not numeric, and the
    /// resolver's or emitter's error otherwise.
    pub fn generate(self) -> Result<Generated, GenerateError> {
        let registry = self.state.0;
        let GeneratorConfig { selection, generated_at, generator_name } = self.config;

        // 1. Display metadata
        let version = selection
            .version
            .parse::<ApiVersion>()
            .context(format!("Selection {} {}", selection.api, selection.version))?;
        let api_name =
            describe_selection(&selection.api, &selection.version, selection.profile.as_deref());

        // 2. Resolution
        let features = resolve(registry, &selection)
            .context(format!("Resolving {api_name}"))?;

        // 3. Emission
        let options = EmitOptions::builder()
            .api_name(api_name.clone())
            .version_major(version.major)
            .version_minor(version.minor)
            .naming(selection.naming)
            .generated_at(generated_at.unwrap_or_else(Utc::now))
            .generator_name(generator_name)
            .build();
        let source = emit(&features, &options).context(format!("Emitting {api_name}"))?;

        info!(
            api = %api_name,
            required = features.required_commands().count(),
            optional = features.optional_commands().count(),
            extensions = features.extensions.len(),
            bytes = source.len(),
            "Generated binding"
        );
        Ok(Generated { api_name, features, source })
    }
}
