//! C declaration text (`const GLchar *const*string`) to Zig type text (`[*c]const [*c]const Char`).
//!
//! Tokens are `struct <tag>`, `*`, or any other run of non-space, non-`*` characters. The last
//! token is the declared name and does not take part in the type.

use crate::error::ResolveError;
use crate::tables::type_entry;
use glzig_domain::selection::NamingMode;
use regex::Regex;
use std::sync::LazyLock;

const C_POINTER: &str = "[*c]";
const NULLABLE_POINTER: &str = "?*";
const CL_STRUCT_PREFIX: &str = "struct _cl_";

static TOKEN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?:struct\s+)?[^\s*]+|\*"));

fn tokenize(text: &str) -> Result<Vec<String>, ResolveError> {
    let token = TOKEN.as_ref().map_err(|err| ResolveError::Internal {
        message: err.to_string().into(),
        context: Some("Compiling the declaration token pattern".into()),
    })?;

    // `struct  _cl_event` keeps a single space between keyword and tag.
    Ok(token
        .find_iter(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .collect())
}

/// Renders the type part of a `<proto>` or `<param>` text.
pub(crate) fn parse_type_expr(text: &str, naming: NamingMode) -> Result<String, ResolveError> {
    let mut tokens = tokenize(text)?;
    if tokens.pop().is_none() {
        return Err(ResolveError::Internal {
            message: "empty declaration".into(),
            context: Some(format!("Parsing '{text}'").into()),
        });
    }
    if tokens.len() >= 2 && tokens[0] == "const" {
        tokens.swap(0, 1);
    }
    let Some((base, modifiers)) = tokens.split_first() else {
        return Err(ResolveError::Internal {
            message: format!("declaration '{text}' has no type").into(),
            context: None,
        });
    };

    let has_pointer = modifiers.iter().any(|t| t == "*");
    if base == "void" && !has_pointer {
        return Ok("void".to_owned());
    }

    let base_name = || -> Result<String, ResolveError> {
        type_entry(base).map(|(_, entry)| entry.name(naming).into_owned()).ok_or_else(|| {
            ResolveError::UnknownType {
                message: base.clone().into(),
                context: Some(format!("Parsing '{text}'").into()),
            }
        })
    };

    if !has_pointer {
        return base_name();
    }

    let (mut ty, mut pointer) = if base == "void" {
        ("anyopaque".to_owned(), NULLABLE_POINTER)
    } else if base.starts_with(CL_STRUCT_PREFIX) {
        (base_name()?, NULLABLE_POINTER)
    } else {
        (base_name()?, C_POINTER)
    };

    for token in modifiers {
        match token.as_str() {
            "const" => ty.insert_str(0, "const "),
            "*" => {
                ty.insert_str(0, pointer);
                pointer = C_POINTER;
            },
            _ => {},
        }
    }
    Ok(ty)
}
