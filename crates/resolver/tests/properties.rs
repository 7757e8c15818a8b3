mod fixtures;

use fixtures::registry;
use glzig_domain::selection::{NamingMode, Selection};
use glzig_resolver::naming::{RESERVED_NAMES, resolve_param_collisions};
use glzig_resolver::resolve;
use glzig_resolver::tables::type_entry;
use proptest::prelude::*;
use proptest::sample::subsequence;

const VERSIONS: &[&str] = &["1.0", "1.5", "2.0", "3.0", "3.1", "3.2", "4.1", "4.6"];
const PROFILES: &[&str] = &["core", "compatibility"];
const EXTENSIONS: &[&str] = &[
    "GL_ARB_cl_event",
    "GL_ARB_sync",
    "GL_KHR_debug",
    "GL_MESA_collisions",
    "GL_NV_vdpau_interop",
    "GL_OES_EGL_image",
    "GL_EXT_unknown",
];

fn selection_strategy() -> impl Strategy<Value = Selection> {
    (
        prop::sample::select(VERSIONS),
        prop::option::of(prop::sample::select(PROFILES)),
        subsequence(EXTENSIONS, 0..=EXTENSIONS.len()).prop_shuffle(),
        any::<bool>(),
    )
        .prop_map(|(version, profile, extensions, preserve)| {
            let mut selection = Selection::new("gl", version)
                .with_extensions(extensions)
                .with_naming(NamingMode::from_preserve_flag(preserve));
            selection.profile = profile.map(str::to_owned);
            selection
        })
}

proptest! {
    #[test]
    fn resolution_is_deterministic(selection in selection_strategy()) {
        let first = resolve(registry(), &selection).expect("resolves");
        let second = resolve(registry(), &selection).expect("resolves");

        prop_assert_eq!(&first, &second);
        let first_order: Vec<_> = first.commands.keys().collect();
        let second_order: Vec<_> = second.commands.keys().collect();
        prop_assert_eq!(first_order, second_order);
    }

    #[test]
    fn optional_iff_absent_from_base(selection in selection_strategy()) {
        let mut base_selection = selection.clone();
        base_selection.extensions.clear();
        let base = resolve(registry(), &base_selection).expect("resolves");
        let full = resolve(registry(), &selection).expect("resolves");

        for command in full.commands.values() {
            prop_assert_eq!(command.optional, !base.commands.contains_key(&command.key), "{}", command.key);
        }
        for key in base.commands.keys() {
            prop_assert!(full.commands.contains_key(key));
        }
    }

    #[test]
    fn constants_and_names_are_ordered(selection in selection_strategy()) {
        let set = resolve(registry(), &selection).expect("resolves");

        let classes: Vec<_> = set.constants.values().map(|c| c.class).collect();
        prop_assert!(classes.is_sorted());
        let names: Vec<_> = set.commands.values().map(|c| c.name.as_str()).collect();
        prop_assert!(names.is_sorted());
        let extensions: Vec<_> = set.extensions.values().map(|e| e.name.as_str()).collect();
        prop_assert!(extensions.is_sorted());
    }

    #[test]
    fn type_closure_is_complete(selection in selection_strategy()) {
        let set = resolve(registry(), &selection).expect("resolves");

        for ty in set.types.values() {
            let (_, entry) = type_entry(&ty.key).expect("emitted types come from the table");
            if let Some(dependency) = entry.dependency {
                prop_assert!(set.types.contains_key(dependency), "{} needs {}", ty.key, dependency);
            }
        }
        let ordinals: Vec<_> = set.types.keys().filter_map(|k| type_entry(k)).map(|(i, _)| i).collect();
        prop_assert!(ordinals.is_sorted());

        for command in set.commands.values() {
            let declared = registry().command(&command.key).expect("resolved commands are declared");
            let referenced = std::iter::once(&declared.proto)
                .chain(&declared.params)
                .filter_map(|decl| decl.ptype.as_deref());
            for ptype in referenced {
                if let Some((_, entry)) = type_entry(ptype) {
                    prop_assert!(set.types.contains_key(entry.key), "{} uses {}", command.key, entry.key);
                }
            }
        }
    }

    #[test]
    fn parameter_names_are_unique_and_stable(selection in selection_strategy()) {
        let set = resolve(registry(), &selection).expect("resolves");
        let mut commands: Vec<_> = set.commands.values().cloned().collect();

        for command in &commands {
            for param in &command.params {
                prop_assert!(!RESERVED_NAMES.contains(&param.name.as_str()));
                prop_assert!(!set.commands.values().any(|c| c.name == param.name));
            }
        }

        let before = commands.clone();
        resolve_param_collisions(&mut commands);
        prop_assert_eq!(before, commands);
    }
}
