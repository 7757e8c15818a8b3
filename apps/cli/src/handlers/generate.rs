use anyhow::{Context, Result};
use glzig::Generator;
use glzig::domain::selection::Selection;
use glzig::registry::{ApiIndex, Registry};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Where the rendered binding goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Preview on stdout.
    Stdout,
    /// Write (or overwrite) a file.
    File(PathBuf),
}

/// Resolves `selection` against `registry` and writes the Zig binding to `target`.
///
/// Selections the registry does not advertise are generated anyway; they only produce warnings.
///
/// # Errors
/// Returns an error when resolution or emission fails, or the output cannot be written.
pub fn generate(
    registry: &Registry,
    index: &ApiIndex,
    selection: Selection,
    target: &Target,
) -> Result<()> {
    check_selection(index, &selection);

    let generated = Generator::builder()
        .selection(selection)
        .registry(registry)
        .generate()
        .context("Failed to generate the binding")?;

    match target {
        Target::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(generated.source.as_bytes()).context("Writing to stdout")?;
            stdout.flush().context("Writing to stdout")?;
        },
        Target::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Creating directory {}", parent.display()))?;
            }
            fs::write(path, &generated.source)
                .with_context(|| format!("Writing {}", path.display()))?;
            info!(
                path = %path.display(),
                api = %generated.api_name,
                bytes = generated.source.len(),
                "Binding written"
            );
        },
    }

    Ok(())
}

/// Warns about parts of the selection the registry does not advertise.
fn check_selection(index: &ApiIndex, selection: &Selection) {
    let Some(info) = index.get(&selection.api) else {
        warn!(api = %selection.api, "The registry does not describe this api");
        return;
    };

    if !info.advertises_version(&selection.version) {
        warn!(
            api = %selection.api,
            version = %selection.version,
            latest = info.latest_version().unwrap_or("-"),
            "Version is not advertised by the registry"
        );
    }
    if let Some(profile) = selection.profile.as_deref()
        && !info.advertises_profile(profile)
    {
        warn!(api = %selection.api, profile, "Profile is not advertised by the registry");
    }
    for extension in &selection.extensions {
        if !info.extensions.contains(extension) {
            warn!(api = %selection.api, extension = %extension, "Extension is not supported and will be skipped");
        }
    }
}
