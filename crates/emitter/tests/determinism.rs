mod fixtures;

use fixtures::{features, options};
use glzig_domain::selection::{NamingMode, Selection};
use glzig_emitter::{EmitOptions, emit};
use proptest::prelude::*;
use proptest::sample::subsequence;

const VERSIONS: &[&str] = &["2.0", "3.0", "4.1"];
const EXTENSIONS: &[&str] = &["GL_ARB_cl_event", "GL_ARB_sync", "GL_KHR_debug", "GL_NV_vdpau_interop"];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn same_input_same_bytes(
        version in prop::sample::select(VERSIONS),
        extensions in subsequence(EXTENSIONS, 0..=EXTENSIONS.len()),
        preserve in any::<bool>(),
    ) {
        let naming = NamingMode::from_preserve_flag(preserve);
        let selection = Selection::new("gl", version)
            .with_profile("core")
            .with_extensions(extensions.iter().copied())
            .with_naming(naming);
        let set = features(&selection);
        let major = if version.starts_with('2') { 2 } else { 4 };
        let options = options(major, 0, naming);

        let first = emit(&set, &options).expect("renders");
        let second = emit(&features(&selection), &options).expect("renders");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.contains("fn initExtension("), !extensions.is_empty());
    }
}

#[test]
fn timestamp_is_the_only_varying_line() {
    let set = features(&Selection::new("gl", "4.1").with_profile("core"));
    let at = |seconds| {
        let options = EmitOptions::builder()
            .api_name("OpenGL")
            .version_major(4)
            .version_minor(1)
            .generated_at(chrono::DateTime::from_timestamp(seconds, 0).expect("valid"))
            .build();
        emit(&set, &options).expect("renders")
    };

    let (a, b) = (at(0), at(86_400));
    let differing: Vec<_> = a.lines().zip(b.lines()).filter(|(x, y)| x != y).collect();
    assert_eq!(differing.len(), 1);
    assert!(differing[0].0.contains("1970-01-01T00:00:00Z"));
    assert!(differing[0].1.contains("1970-01-02T00:00:00Z"));
}
