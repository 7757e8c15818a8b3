use anyhow::{Context, Result};
use glzig::registry::{ApiIndex, ApiInfo};

/// Prints one line per api: display name, versions, profiles and the number of extensions.
///
/// # Errors
/// Returns an error if the index cannot be serialized as JSON.
pub fn list_apis(index: &ApiIndex, json: bool) -> Result<()> {
    if json {
        let apis: Vec<&ApiInfo> = index.apis().collect();
        let rendered = serde_json::to_string_pretty(&apis).context("Serializing the API index")?;
        println!("{rendered}");
        return Ok(());
    }

    if index.is_empty() {
        println!("ℹ️ The registry does not describe any API.");
        return Ok(());
    }

    for info in index.apis() {
        println!("{}", summary_line(info));
    }

    Ok(())
}

fn summary_line(info: &ApiInfo) -> String {
    let profiles =
        if info.profiles.is_empty() { "-".to_owned() } else { info.profiles.join(", ") };
    format!(
        "{:<8} {:<12} versions: {}  profiles: {}  extensions: {}",
        info.key,
        info.display_name,
        info.versions.join(", "),
        profiles,
        info.extensions.len()
    )
}
