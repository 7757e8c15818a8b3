//! Per-api summary of what a registry advertises: the choices a selection can be made from.

use crate::model::Registry;
use glzig_kernel::version::compare_versions;
use indexmap::IndexMap;
use serde::Serialize;

/// Advertised versions, profiles and extensions of one api.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiInfo {
    pub key: String,
    pub display_name: String,
    /// Distinct feature numbers, numeric order.
    pub versions: Vec<String>,
    /// Distinct profiles named by the api's feature `require`/`remove` blocks.
    pub profiles: Vec<String>,
    /// Distinct extensions whose `supported` list names this api.
    pub extensions: Vec<String>,
}

impl ApiInfo {
    #[must_use]
    pub fn advertises_version(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    #[must_use]
    pub fn advertises_profile(&self, profile: &str) -> bool {
        self.profiles.iter().any(|p| p == profile)
    }

    /// Highest advertised version.
    #[must_use]
    pub fn latest_version(&self) -> Option<&str> {
        self.versions.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiIndex {
    apis: IndexMap<String, ApiInfo>,
}

impl ApiIndex {
    /// Indexes every api that has at least one feature node, in order of first appearance.
    #[must_use]
    pub fn build(registry: &Registry) -> Self {
        let apis = registry
            .apis()
            .into_iter()
            .map(|api| (api.to_owned(), index_api(registry, api)))
            .collect();
        Self { apis }
    }

    #[must_use]
    pub fn get(&self, api: &str) -> Option<&ApiInfo> {
        self.apis.get(api)
    }

    pub fn apis(&self) -> impl Iterator<Item = &ApiInfo> {
        self.apis.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.apis.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.apis.is_empty()
    }
}

fn index_api(registry: &Registry, api: &str) -> ApiInfo {
    let mut versions: Vec<String> = registry.features_for(api).map(|f| f.number.clone()).collect();
    versions.sort_by(|a, b| compare_versions(a, b));
    versions.dedup();

    let mut profiles: Vec<String> = registry
        .features_for(api)
        .flat_map(|f| f.requires.iter().chain(&f.removes))
        .filter_map(|block| block.profile.clone())
        .collect();
    profiles.sort();
    profiles.dedup();

    let mut extensions: Vec<String> = registry
        .extensions()
        .iter()
        .filter(|e| e.supports(api))
        .map(|e| e.name.clone())
        .collect();
    extensions.sort();
    extensions.dedup();

    ApiInfo { key: api.to_owned(), display_name: display_name(api).to_owned(), versions, profiles, extensions }
}

/// Human readable family name of an api key. Unknown keys are returned unchanged.
#[must_use]
pub fn display_name(api: &str) -> &str {
    match api {
        "gl" => "OpenGL",
        "gles1" | "gles2" => "OpenGL ES",
        "glsc2" => "OpenGL SC",
        other => other,
    }
}

/// `OpenGL 4.1 (Core Profile)` or, without a profile, `OpenGL ES 3.2`.
#[must_use]
pub fn describe_selection(api: &str, version: &str, profile: Option<&str>) -> String {
    let name = display_name(api);
    match profile {
        Some(profile) => format!("{name} {version} ({} Profile)", capitalize(profile)),
        None => format!("{name} {version}"),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
