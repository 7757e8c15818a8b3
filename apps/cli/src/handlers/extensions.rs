use anyhow::{Result, bail};
use glzig::registry::ApiIndex;

/// Prints the extensions `api` supports, one per line, sorted.
///
/// # Errors
/// Returns an error naming the known apis when `api` is not in the registry.
pub fn list_extensions(index: &ApiIndex, api: &str) -> Result<()> {
    let Some(info) = index.get(api) else {
        let known: Vec<&str> = index.apis().map(|info| info.key.as_str()).collect();
        bail!("Unknown api '{api}'; the registry describes: {}", known.join(", "));
    };

    if info.extensions.is_empty() {
        println!("ℹ️ {} has no extensions.", info.display_name);
        return Ok(());
    }

    for extension in &info.extensions {
        println!("{extension}");
    }

    Ok(())
}
