//! The Zig source template, section by section.

use crate::error::{EmitError, EmitErrorExt};
use crate::ident::{zig_ident, zig_string};
use crate::options::{EmitOptions, ExtensionProbe};
use glzig_domain::features::ResolvedFeatureSet;
use std::fmt::Write as FmtWrite;

// --- Static text ---

const NOTICE: &str = "\
// NOTICE
//
// This work uses definitions from the OpenGL XML API Registry
// <https://github.com/KhronosGroup/OpenGL-Registry>.
// Copyright 2013-2020 The Khronos Group Inc.
// Licensed under Apache-2.0.
//
// END OF NOTICE
";

const IMPORTS: &str = "
//! OpenGL binding.

const std = @import(\"std\");
const root = @import(\"root\");

";

const CURRENT_TABLE: &str = "\
/// Makes the specified dispatch table current on the calling thread.
///
/// This function must be called with a valid dispatch table before calling `extensionSupported` or
/// issuing any OpenGL commands from that same thread.
pub fn makeDispatchTableCurrent(dispatch_table: ?*const DispatchTable) void {
    DispatchTable.current = dispatch_table;
}

/// Returns the dispatch table that is current on the calling thread, or `null` if no dispatch table
/// is current.
pub fn getCurrentDispatchTable() ?*const DispatchTable {
    return DispatchTable.current;
}

";

const TABLE_HEADER: &str = "\
/// Holds dynamically loaded OpenGL features.
///
/// This struct is very large; avoid storing instances of it on the stack.
pub const DispatchTable = struct {
    threadlocal var current: ?*const DispatchTable = null;

    /// An opaque pointer to an external function.
    pub const Proc = *align(@alignOf(fn () callconv(.C) void)) const anyopaque;

    //#region Fields
";

const INIT_HEAD: &str = "    //#endregion Fields

    /// Initializes the specified dispatch table. Returns `true` if successful, `false` otherwise.
    ///
    /// This function must be called successfully before passing the dispatch table to
    /// `makeDispatchTableCurrent` or accessing any of fields.
    ///
    /// `loader` is a duck-typed \"callable\" that takes the prefixed name of an OpenGL command (e.g.
    /// *glClear*) and returns a pointer to the corresponding function. It should be able to be
    /// called in one of the following two ways:
    ///
    /// - `@as(?DispatchTable.Proc, loader(@as([*:0]const u8, prefixed_name)))`
    /// - `@as(?DispatchTable.Proc, loader.getProcAddress(@as([*:0]const u8, prefixed_name)))`
    ///
    /// No references to `loader` are retained after this function returns.
    ///
    /// There is no corresponding `deinit` function.
    pub fn init(self: *DispatchTable, loader: anytype) bool {
        @setEvalBranchQuota(1_000_000);
        var success: u1 = 1;
        inline for (@typeInfo(DispatchTable).Struct.fields) |field_info| {
            switch (@typeInfo(field_info.type)) {
                .Pointer => |ptr_info| switch (@typeInfo(ptr_info.child)) {
                    .Fn => {
                        success &= @intFromBool(self.initCommand(field_info.name ++ \"\", loader));
                    },
                    else => comptime unreachable,
                },
";

const INIT_OPTIONAL_ARMS: &str = "                .Bool => {
                    @field(self, field_info.name) = false;
                },
                .Optional => |opt_info| switch (@typeInfo(opt_info.child)) {
                    .Pointer => |ptr_info| switch (@typeInfo(ptr_info.child)) {
                        .Fn => {
                            @field(self, field_info.name) = null;
                        },
                        else => comptime unreachable,
                    },
                    else => comptime unreachable,
                },
";

const INIT_LOOP_TAIL: &str = "                else => comptime unreachable,
            }
        }
";

const INIT_COMMAND: &str = "    }

    fn initCommand(
        self: *DispatchTable,
        comptime prefixed_name: [:0]const u8,
        loader: anytype,
    ) bool {
        const loader_info = @typeInfo(@TypeOf(loader));
        const loader_is_fn =
            loader_info == .Fn or
            loader_info == .Pointer and @typeInfo(loader_info.Pointer.child) == .Fn;
        const proc_opt: ?DispatchTable.Proc = if (loader_is_fn)
            loader(prefixed_name)
        else
            loader.getProcAddress(prefixed_name);
        if (proc_opt) |proc| {
            @field(self, prefixed_name) = @ptrCast(proc);
            return true;
        } else {
            return @typeInfo(@TypeOf(@field(self, prefixed_name))) == .Optional;
        }
    }
";

const INIT_EXTENSION_HEAD: &str = "
    fn initExtension(
        self: *DispatchTable,
        comptime prefixed_name: [:0]const u8,
    ) bool {
";

const ISSUE_COMMAND: &str = "};

/// Issues the specified OpenGL command.
///
/// This function is called internally by the OpenGL binding. Its implementation can be overridden
/// by publicly declaring a function named `gl_issueCommand` with a compatible signature in the root
/// source file.
pub fn issueCommand(
    comptime prefixed_name: [:0]const u8,
    args: anytype,
) ReturnTypeOfCommand(prefixed_name) {
    return if (@hasDecl(root, \"gl_issueCommand\"))
        root.gl_issueCommand(prefixed_name, args)
    else
        defaultIssueCommand(prefixed_name, args);
}

/// The default implementation of `issueCommand`.
///
/// Overriding implementations can call this function to fall back to the default behavior.
pub fn defaultIssueCommand(
    comptime prefixed_name: [:0]const u8,
    args: anytype,
) ReturnTypeOfCommand(prefixed_name) {
    return if (@typeInfo(@TypeOf(@field(@as(DispatchTable, undefined), prefixed_name))) == .Optional)
        @call(.auto, @field(DispatchTable.current.?, prefixed_name).?, args)
    else
        @call(.auto, @field(DispatchTable.current.?, prefixed_name), args);
}

/// The return type of the specified OpenGL command.
pub fn ReturnTypeOfCommand(comptime prefixed_name: [:0]const u8) type {
    if (@hasField(DispatchTable, prefixed_name)) {
        return switch (@typeInfo(@TypeOf(@field(@as(DispatchTable, undefined), prefixed_name)))) {
            .Pointer => |ptr_info| switch (@typeInfo(ptr_info.child)) {
                .Fn => |fn_info| fn_info.return_type.?,
                else => comptime unreachable,
            },
            .Bool => {},
            .Optional => |opt_info| switch (@typeInfo(opt_info.child)) {
                .Pointer => |ptr_info| switch (@typeInfo(ptr_info.child)) {
                    .Fn => |fn_info| fn_info.return_type.?,
                    else => comptime unreachable,
                },
                else => comptime unreachable,
            },
            else => comptime unreachable,
        };
    }
    @compileError(\"unknown OpenGL command: '\" ++ prefixed_name ++ \"'\");
}
";

// --- Writer ---

pub(crate) struct Template<'a> {
    features: &'a ResolvedFeatureSet,
    options: &'a EmitOptions,
    out: String,
}

impl<'a> Template<'a> {
    pub(crate) fn new(features: &'a ResolvedFeatureSet, options: &'a EmitOptions) -> Self {
        Self { features, options, out: String::with_capacity(64 * 1024) }
    }

    pub(crate) fn render(mut self) -> Result<String, EmitError> {
        // 1. Preamble
        self.out.push_str(NOTICE);
        self.out.push_str(IMPORTS);
        self.about().context("Rendering about block")?;
        self.out.push_str(CURRENT_TABLE);

        // 2. Public declarations
        if self.features.has_extensions() {
            self.extension_api().context("Rendering extension enum")?;
        }
        self.types().context("Rendering types")?;
        self.constants().context("Rendering constants")?;
        self.commands().context("Rendering commands")?;

        // 3. Dispatch table
        self.dispatch_table().context("Rendering dispatch table")?;
        self.out.push_str(ISSUE_COMMAND);

        Ok(self.out)
    }

    /// `GL_` in [`NamingMode::Preserve`](glzig_domain::selection::NamingMode), nothing otherwise.
    fn constant_prefix(&self) -> &'static str {
        if self.options.naming.is_preserve() { "GL_" } else { "" }
    }

    fn about(&mut self) -> Result<(), EmitError> {
        let w = &mut self.out;
        let o = self.options;
        writeln!(w, "/// Static information about the OpenGL binding and when/how it was generated.")?;
        writeln!(w, "pub const about = struct {{")?;
        writeln!(w, "    pub const api_name = \"{}\";", zig_string(&o.api_name))?;
        writeln!(w, "    pub const api_version_major = {};", o.version_major)?;
        writeln!(w, "    pub const api_version_minor = {};", o.version_minor)?;
        writeln!(w)?;
        writeln!(w, "    pub const generated_at = \"{}\";", o.timestamp())?;
        writeln!(w)?;
        writeln!(w, "    pub const generator_name = \"{}\";", zig_string(&o.generator_name))?;
        writeln!(w, "}};")?;
        writeln!(w)?;
        Ok(())
    }

    fn extension_api(&mut self) -> Result<(), EmitError> {
        let reprefix = if self.options.naming.is_preserve() { "" } else { "\"GL_\" ++ " };
        let w = &mut self.out;
        writeln!(w, "/// Returns `true` if the specified OpenGL extension is supported, `false` otherwise.")?;
        writeln!(w, "pub fn extensionSupported(comptime extension: Extension) bool {{")?;
        writeln!(w, "    return @field(DispatchTable.current.?, {reprefix}@tagName(extension));")?;
        writeln!(w, "}}")?;
        writeln!(w)?;
        writeln!(w, "/// OpenGL extension.")?;
        writeln!(w, "pub const Extension = enum {{")?;
        for extension in self.features.extensions.values() {
            writeln!(w, "    {},", zig_ident(&extension.name))?;
        }
        writeln!(w, "}};")?;
        writeln!(w)?;
        Ok(())
    }

    fn types(&mut self) -> Result<(), EmitError> {
        let w = &mut self.out;
        writeln!(w, "//#region Types")?;
        for ty in self.features.types.values() {
            writeln!(w, "pub const {} = {};", zig_ident(&ty.name), ty.repr)?;
        }
        writeln!(w, "//#endregion Types")?;
        writeln!(w)?;
        Ok(())
    }

    fn constants(&mut self) -> Result<(), EmitError> {
        let w = &mut self.out;
        writeln!(w, "//#region Constants")?;
        for constant in self.features.constants.values() {
            writeln!(w, "pub const {} = {};", zig_ident(&constant.name), constant.value)?;
        }
        writeln!(w, "//#endregion Constants")?;
        writeln!(w)?;
        Ok(())
    }

    fn commands(&mut self) -> Result<(), EmitError> {
        let w = &mut self.out;
        writeln!(w, "//#region Commands")?;
        for command in self.features.commands.values() {
            let params = command
                .params
                .iter()
                .map(|p| format!("{}: {}", zig_ident(&p.name), p.ty))
                .collect::<Vec<_>>()
                .join(", ");
            let args = command.params.iter().map(|p| zig_ident(&p.name)).collect::<Vec<_>>().join(", ");
            let pad = if command.params.len() > 1 { " " } else { "" };

            writeln!(
                w,
                "pub fn {}({params}) callconv(.C) {} {{",
                zig_ident(&command.name),
                command.return_type
            )?;
            writeln!(w, "    return issueCommand(\"{}\", .{{{pad}{args}{pad}}});", command.key)?;
            writeln!(w, "}}")?;
        }
        writeln!(w, "//#endregion Commands")?;
        writeln!(w)?;
        Ok(())
    }

    fn dispatch_table(&mut self) -> Result<(), EmitError> {
        let has_extensions = self.features.has_extensions();

        self.out.push_str(TABLE_HEADER);
        for extension in self.features.extensions.values() {
            writeln!(self.out, "    {}: bool,", zig_ident(&extension.key))?;
        }
        for command in self.features.commands.values() {
            writeln!(
                self.out,
                "    {}: {}*const @TypeOf({}),",
                zig_ident(&command.key),
                if command.optional { "?" } else { "" },
                zig_ident(&command.name)
            )?;
        }

        self.out.push_str(INIT_HEAD);
        if has_extensions {
            self.out.push_str(INIT_OPTIONAL_ARMS);
        }
        self.out.push_str(INIT_LOOP_TAIL);
        if has_extensions {
            self.init_extensions()?;
        } else {
            writeln!(self.out, "        return success != 0;")?;
        }
        self.out.push_str(INIT_COMMAND);
        if has_extensions {
            self.init_extension()?;
        }
        Ok(())
    }

    /// Extension probing never fails `init`: a missing required command still leaves the
    /// optional features usable.
    fn init_extensions(&mut self) -> Result<(), EmitError> {
        let w = &mut self.out;
        for extension in self.features.extensions.values() {
            if extension.commands.is_empty() {
                writeln!(w, "        _ = self.initExtension(\"{}\");", extension.key)?;
                continue;
            }
            writeln!(w, "        if (self.initExtension(\"{}\")) {{", extension.key)?;
            for key in &extension.commands {
                if !self.features.commands.contains_key(key) {
                    return Err(EmitError::Internal {
                        message: format!("extension command {key} is not in the feature set").into(),
                        context: Some(format!("Extension {}", extension.key).into()),
                    });
                }
                writeln!(w, "            _ = self.initCommand(\"{key}\", loader);")?;
            }
            writeln!(w, "        }}")?;
        }
        writeln!(w, "        return true;")?;
        Ok(())
    }

    fn init_extension(&mut self) -> Result<(), EmitError> {
        let prefix = self.constant_prefix();
        let int_type = if self.options.naming.is_preserve() { "GLint" } else { "Int" };
        let probe = self.options.probe();
        let w = &mut self.out;

        w.push_str(INIT_EXTENSION_HEAD);
        match probe {
            ExtensionProbe::IndexedCount => {
                writeln!(w, "        var count: {int_type} = 0;")?;
                writeln!(w, "        self.glGetIntegerv({prefix}NUM_EXTENSIONS, &count);")?;
                writeln!(w, "        for (0..@intCast(count)) |i| {{")?;
                writeln!(w, "            if (self.glGetStringi({prefix}EXTENSIONS, @intCast(i))) |name| {{")?;
                writeln!(w, "                if (std.mem.orderZ(u8, prefixed_name, name) == .eq) {{")?;
                writeln!(w, "                    @field(self, prefixed_name) = true;")?;
                writeln!(w, "                    return true;")?;
                writeln!(w, "                }}")?;
                writeln!(w, "            }}")?;
                writeln!(w, "        }}")?;
            },
            ExtensionProbe::SpaceDelimited => {
                writeln!(
                    w,
                    "        var names = std.mem.tokenizeScalar(u8, std.mem.span(self.glGetString({prefix}EXTENSIONS)), ' ');"
                )?;
                writeln!(w, "        while (names.next()) |name| {{")?;
                writeln!(w, "            if (std.mem.eql(u8, prefixed_name, name)) {{")?;
                writeln!(w, "                @field(self, prefixed_name) = true;")?;
                writeln!(w, "                return true;")?;
                writeln!(w, "            }}")?;
                writeln!(w, "        }}")?;
            },
        }
        writeln!(w, "        return false;")?;
        writeln!(w, "    }}")?;
        Ok(())
    }
}
