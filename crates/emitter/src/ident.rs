//! Zig identifier quoting.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Keywords and primitive type names that cannot be used as bare identifiers.
const RESERVED: &[&str] = &[
    "_",
    "addrspace",
    "align",
    "allowzero",
    "and",
    "anyframe",
    "anytype",
    "asm",
    "async",
    "await",
    "break",
    "callconv",
    "catch",
    "comptime",
    "const",
    "continue",
    "defer",
    "else",
    "enum",
    "errdefer",
    "error",
    "export",
    "extern",
    "fn",
    "for",
    "if",
    "inline",
    "linksection",
    "noalias",
    "noinline",
    "nosuspend",
    "opaque",
    "or",
    "orelse",
    "packed",
    "pub",
    "resume",
    "return",
    "struct",
    "suspend",
    "switch",
    "test",
    "threadlocal",
    "try",
    "union",
    "unreachable",
    "usingnamespace",
    "var",
    "volatile",
    "while",
    "anyerror",
    "anyopaque",
    "bool",
    "c_char",
    "c_int",
    "c_long",
    "c_longdouble",
    "c_longlong",
    "c_short",
    "c_uint",
    "c_ulong",
    "c_ulonglong",
    "c_ushort",
    "comptime_float",
    "comptime_int",
    "f128",
    "f16",
    "f32",
    "f64",
    "f80",
    "false",
    "isize",
    "noreturn",
    "null",
    "true",
    "type",
    "undefined",
    "usize",
    "void",
];

static PLAIN_IDENTIFIER: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$"));

/// `i32`, `u8`, `u0`: arbitrary width integer types.
static INTEGER_TYPE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[iu][0-9]+$"));

fn pattern_matches(pattern: &LazyLock<Result<Regex, regex::Error>>, name: &str) -> Option<bool> {
    pattern.as_ref().ok().map(|re| re.is_match(name))
}

/// Returns `name` bare when Zig accepts it as an identifier, `@"name"` otherwise.
#[must_use]
pub fn zig_ident(name: &str) -> Cow<'_, str> {
    // A pattern that failed to compile quotes everything, which Zig still accepts.
    let bare = pattern_matches(&PLAIN_IDENTIFIER, name) == Some(true)
        && pattern_matches(&INTEGER_TYPE, name) == Some(false)
        && !RESERVED.contains(&name);
    if bare {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("@\"{}\"", zig_string(name)))
    }
}

/// Escapes `text` for use between the quotes of a Zig string literal.
#[must_use]
pub fn zig_string(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c == '"' || c == '\\' || c.is_control()) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
