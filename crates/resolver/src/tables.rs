//! Hand-curated static tables.
//!
//! Position in each slice is the ordinal used for sorting. Never iterate a hash container to
//! recover these orders.

use glzig_domain::selection::NamingMode;
use std::borrow::Cow;

const DEBUG_PROC_PRESERVED: &str = "?*const fn (source: GLenum, @\"type\": GLenum, id: GLuint, severity: GLenum, length: GLsizei, message: [*:0]const GLchar, userParam: ?*const anyopaque) callconv(.C) void";
const DEBUG_PROC_RENAMED: &str = "?*const fn (source: Enum, @\"type\": Enum, id: Uint, severity: Enum, length: Sizei, message: [*:0]const Char, userParam: ?*const anyopaque) callconv(.C) void";
const DEBUG_PROC_AMD_PRESERVED: &str = "?*const fn (id: GLuint, category: GLenum, severity: GLenum, length: GLsizei, message: [*:0]const GLchar, userParam: ?*anyopaque) callconv(.C) void";
const DEBUG_PROC_AMD_RENAMED: &str = "?*const fn (id: Uint, category: Enum, severity: Enum, length: Sizei, message: [*:0]const Char, userParam: ?*anyopaque) callconv(.C) void";

/// How one registry type is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
    /// Registry key (`GLenum`, `struct _cl_context`).
    pub key: &'static str,
    /// Zig-style name used in [`NamingMode::Rename`].
    pub renamed: &'static str,
    pub preserved_repr: &'static str,
    pub renamed_repr: &'static str,
    /// Another table key this type's representation refers to.
    pub dependency: Option<&'static str>,
}

impl TypeEntry {
    const fn plain(key: &'static str, renamed: &'static str, repr: &'static str) -> Self {
        Self { key, renamed, preserved_repr: repr, renamed_repr: repr, dependency: None }
    }

    const fn split(
        key: &'static str,
        renamed: &'static str,
        preserved_repr: &'static str,
        renamed_repr: &'static str,
    ) -> Self {
        Self { key, renamed, preserved_repr, renamed_repr, dependency: None }
    }

    const fn depends_on(mut self, dependency: &'static str) -> Self {
        self.dependency = Some(dependency);
        self
    }

    /// Output identifier. Preserved names replace the space of `struct _cl_*` keys with `_`.
    #[must_use]
    pub fn name(&self, naming: NamingMode) -> Cow<'static, str> {
        match naming {
            NamingMode::Rename => Cow::Borrowed(self.renamed),
            NamingMode::Preserve if self.key.contains(' ') => Cow::Owned(self.key.replace(' ', "_")),
            NamingMode::Preserve => Cow::Borrowed(self.key),
        }
    }

    #[must_use]
    pub const fn repr(&self, naming: NamingMode) -> &'static str {
        match naming {
            NamingMode::Preserve => self.preserved_repr,
            NamingMode::Rename => self.renamed_repr,
        }
    }
}

pub static TYPE_TABLE: &[TypeEntry] = &[
    TypeEntry::plain("GLbyte", "Byte", "i8"),
    TypeEntry::plain("GLubyte", "Ubyte", "u8"),
    TypeEntry::plain("GLshort", "Short", "c_short"),
    TypeEntry::plain("GLushort", "Ushort", "c_ushort"),
    TypeEntry::plain("GLint", "Int", "c_int"),
    TypeEntry::plain("GLuint", "Uint", "c_uint"),
    TypeEntry::plain("GLint64", "Int64", "i64"),
    TypeEntry::plain("GLint64EXT", "Int64EXT", "i64"),
    TypeEntry::plain("GLuint64", "Uint64", "u64"),
    TypeEntry::plain("GLuint64EXT", "Uint64EXT", "u64"),
    TypeEntry::plain("GLintptr", "Intptr", "isize"),
    TypeEntry::plain("GLintptrARB", "IntptrARB", "isize"),
    TypeEntry::plain("GLhalf", "Half", "c_ushort"),
    TypeEntry::plain("GLhalfARB", "HalfARB", "c_ushort"),
    TypeEntry::plain("GLhalfNV", "HalfNV", "c_ushort"),
    TypeEntry::plain("GLfloat", "Float", "f32"),
    TypeEntry::plain("GLdouble", "Double", "f64"),
    TypeEntry::plain("GLfixed", "Fixed", "i32"),
    TypeEntry::plain("GLboolean", "Boolean", "u8"),
    TypeEntry::plain("GLchar", "Char", "u8"),
    TypeEntry::plain("GLcharARB", "CharARB", "u8"),
    TypeEntry::plain("GLbitfield", "Bitfield", "c_uint"),
    TypeEntry::plain("GLenum", "Enum", "c_uint"),
    TypeEntry::plain("GLsizei", "Sizei", "c_int"),
    TypeEntry::plain("GLsizeiptr", "Sizeiptr", "isize"),
    TypeEntry::plain("GLsizeiptrARB", "SizeiptrARB", "isize"),
    TypeEntry::plain("GLclampf", "Clampf", "f32"),
    TypeEntry::plain("GLclampd", "Clampd", "f64"),
    TypeEntry::plain("GLclampx", "Clampx", "i32"),
    TypeEntry::plain("GLsync", "Sync", "?*opaque {}"),
    TypeEntry::split("GLDEBUGPROC", "DebugProc", DEBUG_PROC_PRESERVED, DEBUG_PROC_RENAMED),
    TypeEntry::split("GLDEBUGPROCARB", "DebugProcARB", DEBUG_PROC_PRESERVED, DEBUG_PROC_RENAMED),
    TypeEntry::split("GLDEBUGPROCKHR", "DebugProcKHR", DEBUG_PROC_PRESERVED, DEBUG_PROC_RENAMED),
    TypeEntry::split("GLDEBUGPROCAMD", "DebugProcAMD", DEBUG_PROC_AMD_PRESERVED, DEBUG_PROC_AMD_RENAMED),
    TypeEntry::plain("struct _cl_context", "ClContextARB", "opaque {}"),
    TypeEntry::plain("struct _cl_event", "ClEventARB", "opaque {}"),
    TypeEntry::plain("GLeglClientBufferEXT", "EglClientBufferEXT", "?*anyopaque"),
    TypeEntry::plain("GLeglImageOES", "EglImageOES", "?*anyopaque"),
    TypeEntry::plain(
        "GLhandleARB",
        "HandleARB",
        "if (@import(\"builtin\").os.tag == .macos) ?*anyopaque else c_uint",
    ),
    TypeEntry::split("GLvdpauSurfaceNV", "VdpauSurfaceNV", "GLintptr", "Intptr")
        .depends_on("GLintptr"),
    TypeEntry::plain("GLVULKANPROCNV", "VulkanProcNV", "?*const fn () callconv(.C) void"),
];

/// `SpecialNumbers` enumerants that are real constants, in emission order.
///
/// Other members of the group (`GL_VERSION_ES_CL_1_0` and friends) are header macros.
pub static SPECIAL_NUMBERS: &[&str] = &[
    "GL_ZERO",
    "GL_ONE",
    "GL_FALSE",
    "GL_TRUE",
    "GL_NONE",
    "GL_NONE_OES",
    "GL_NO_ERROR",
    "GL_INVALID_INDEX",
    "GL_ALL_PIXELS_AMD",
    "GL_TIMEOUT_IGNORED",
    "GL_TIMEOUT_IGNORED_APPLE",
    "GL_UUID_SIZE_EXT",
    "GL_LUID_SIZE_EXT",
];

/// Looks a type key up, tolerating irregular whitespace in `struct` keys.
#[must_use]
pub fn type_entry(key: &str) -> Option<(usize, &'static TypeEntry)> {
    let normalized: Cow<'_, str> = if key.contains(char::is_whitespace) {
        Cow::Owned(key.split_whitespace().collect::<Vec<_>>().join(" "))
    } else {
        Cow::Borrowed(key)
    };
    TYPE_TABLE.iter().enumerate().find(|(_, entry)| entry.key == normalized)
}

#[must_use]
pub fn special_number_ordinal(key: &str) -> Option<usize> {
    SPECIAL_NUMBERS.iter().position(|&k| k == key)
}
