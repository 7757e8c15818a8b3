//! Output identifiers for registry keys, and parameter de-duplication.

use fxhash::FxHashSet;
use glzig_domain::features::ResolvedCommand;
use glzig_domain::selection::NamingMode;

/// Module-level declarations of the emitted binding that parameters must not shadow.
pub const RESERVED_NAMES: &[&str] = &[
    "std",
    "root",
    "about",
    "makeDispatchTableCurrent",
    "getCurrentDispatchTable",
    "extensionSupported",
    "Extension",
    "DispatchTable",
    "Proc",
    "issueCommand",
    "defaultIssueCommand",
    "ReturnTypeOfCommand",
];

const CONSTANT_PREFIX: &str = "GL_";
const COMMAND_PREFIX: &str = "gl";

/// `glClear` -> `clear`, `glVDPAUInitNV` -> `vdpauInitNV`.
///
/// After the `gl` prefix, the leading run of capitals is lowercased, except for the last capital
/// of a run that starts the next word.
#[must_use]
pub fn command_name(key: &str, naming: NamingMode) -> String {
    if naming.is_preserve() {
        return key.to_owned();
    }
    let Some(rest) = key.strip_prefix(COMMAND_PREFIX) else { return key.to_owned() };
    let bytes = rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_uppercase) {
        return key.to_owned();
    }

    let mut end = 1;
    while end < bytes.len()
        && bytes[end].is_ascii_uppercase()
        && bytes.get(end + 1).is_none_or(u8::is_ascii_uppercase)
    {
        end += 1;
    }
    let (head, tail) = rest.split_at(end);
    format!("{}{tail}", head.to_ascii_lowercase())
}

/// `GL_TRIANGLES` -> `TRIANGLES`.
#[must_use]
pub fn constant_name(key: &str, naming: NamingMode) -> String {
    strip_constant_prefix(key, naming)
}

/// `GL_KHR_debug` -> `KHR_debug`.
#[must_use]
pub fn extension_name(key: &str, naming: NamingMode) -> String {
    strip_constant_prefix(key, naming)
}

fn strip_constant_prefix(key: &str, naming: NamingMode) -> String {
    match naming {
        NamingMode::Preserve => key.to_owned(),
        NamingMode::Rename => key.strip_prefix(CONSTANT_PREFIX).unwrap_or(key).to_owned(),
    }
}

/// Appends `_` to every parameter whose name collides with a reserved name or with the output
/// name of any command. Running it again changes nothing.
pub fn resolve_param_collisions(commands: &mut [ResolvedCommand]) {
    let mut taken: FxHashSet<String> = RESERVED_NAMES.iter().map(|&n| n.to_owned()).collect();
    taken.extend(commands.iter().map(|c| c.name.clone()));

    for param in commands.iter_mut().flat_map(|c| c.params.iter_mut()) {
        while taken.contains(&param.name) {
            param.name.push('_');
        }
    }
}
