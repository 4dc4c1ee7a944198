//! Integration tests for the compatibility oracle against the release
//! history it encodes.

use distro_compat::{
    HostEnvironment, JavaVersion, JvmDescriptor, OsDescriptor, OsFamily,
    VersionCompatibilityOracle, VersionIdentifier,
};

/// Releases in publication order
const RELEASES: &[&str] = &[
    "0.8",
    "0.9-rc-1",
    "0.9-rc-2",
    "0.9",
    "0.9.1",
    "0.9.2",
    "1.0-milestone-1",
    "1.0-milestone-2",
    "1.0-milestone-3",
    "1.0-milestone-4",
    "1.0-milestone-5",
    "1.0-milestone-6",
    "1.0-milestone-7",
    "1.0-milestone-8",
    "1.0-milestone-8a",
    "1.0-milestone-9",
    "1.0-rc-1",
    "1.0",
    "1.3",
    "1.7-rc-1",
    "1.11",
    "1.12-rc-1",
    "1.12",
    "2.0-rc-1",
    "2.0",
];

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn oracle(version: &str) -> VersionCompatibilityOracle {
    VersionCompatibilityOracle::parse(version).unwrap()
}

fn v(version: &str) -> VersionIdentifier {
    VersionIdentifier::parse(version).unwrap()
}

fn host(java: JavaVersion, family: OsFamily) -> HostEnvironment {
    HostEnvironment::new(JvmDescriptor::new(java), OsDescriptor::new(family))
}

// =============================================================================
// Comparison Primitives
// =============================================================================

#[test]
fn test_same_or_older_is_consistent_with_ordering() {
    init_tracing();
    for (i, older) in RELEASES.iter().enumerate() {
        for newer in &RELEASES[i + 1..] {
            assert!(
                !oracle(newer).is_same_or_older(&v(older)),
                "{} should not be same-or-older than {}",
                newer,
                older
            );
            assert!(oracle(older).is_same_or_older(&v(newer)));
            assert!(oracle(newer).is_same_or_newer(&v(older)));
            assert!(!oracle(older).is_same_or_newer(&v(newer)));
        }
    }
}

#[test]
fn test_is_version_is_reflexive() {
    for release in RELEASES {
        assert!(oracle(release).is_version(&v(release)), "{}", release);
        assert!(oracle(release).is_same_or_newer(&v(release)));
        assert!(oracle(release).is_same_or_older(&v(release)));
    }
}

#[test]
fn test_snapshot_is_same_version_but_not_equal() {
    let snapshot = oracle("1.0-milestone-7-20110915121522+0200");
    assert!(snapshot.is_version(&v("1.0")));
    assert_ne!(*snapshot.version(), v("1.0"));
}

#[test]
fn test_malformed_version_fails_fast() {
    let err = VersionCompatibilityOracle::parse("1.0-milestone").unwrap_err();
    assert!(err.to_string().starts_with("VERSION/INVALID"));
}

// =============================================================================
// Host Compatibility
// =============================================================================

#[test]
fn test_rc1_requires_java6() {
    let rc1 = oracle("0.9-rc-1");
    assert!(!rc1.works_with_jvm(&JvmDescriptor::new(JavaVersion::JAVA_5)));
    assert!(rc1.works_with_jvm(&JvmDescriptor::new(JavaVersion::JAVA_6)));
}

#[test]
fn test_milestone4_never_runs_on_ibm() {
    let m4 = oracle("1.0-milestone-4");
    for java in [JavaVersion::JAVA_5, JavaVersion::JAVA_6, JavaVersion::JAVA_8] {
        assert!(!m4.works_with_jvm(&JvmDescriptor::new(java).ibm()));
    }
}

#[test]
fn test_java5_dropped_after_1_12() {
    let java5 = host(JavaVersion::JAVA_5, OsFamily::Linux);
    assert!(oracle("1.12").works_with(&java5));
    assert!(!oracle("2.0-rc-1").works_with(&java5));
    assert!(!oracle("2.0").works_with(&java5));
}

#[test]
fn test_everything_but_m5_runs_anywhere() {
    let solaris = OsDescriptor::new(OsFamily::Solaris);
    for release in RELEASES {
        let expected = *release != "1.0-milestone-5";
        assert_eq!(oracle(release).works_with_os(&solaris), expected, "{}", release);
    }
}

#[test]
fn test_daemon_threshold_depends_on_os() {
    let jvm = JvmDescriptor::new(JavaVersion::JAVA_6);
    let windows = OsDescriptor::new(OsFamily::Windows);
    let mac = OsDescriptor::new(OsFamily::MacOsX);

    let windows_support: Vec<_> = RELEASES
        .iter()
        .filter(|r| oracle(r).is_daemon_supported(&jvm, &windows))
        .collect();
    assert_eq!(*windows_support[0], "1.0-milestone-4");

    let mac_support: Vec<_> = RELEASES
        .iter()
        .filter(|r| oracle(r).is_daemon_supported(&jvm, &mac))
        .collect();
    assert_eq!(*mac_support[0], "0.9");
}

// =============================================================================
// Features and Formats
// =============================================================================

#[test]
fn test_single_threshold_features_are_inclusive() {
    assert!(oracle("1.0-milestone-7").is_daemon_idle_timeout_configurable());
    assert!(!oracle("1.0-milestone-6").is_daemon_idle_timeout_configurable());
    assert!(oracle("1.0-milestone-3").is_tooling_api_supported());
    assert!(!oracle("1.0-milestone-2").is_tooling_api_supported());
    assert!(oracle("1.0-milestone-5").is_supports_spaces_in_gradle_and_java_opts());
    assert!(!oracle("1.0-milestone-4").is_supports_spaces_in_gradle_and_java_opts());
    assert!(oracle("1.0-milestone-7").is_fully_supports_ivy_repository());
    assert!(!oracle("1.0-milestone-6").is_fully_supports_ivy_repository());
}

#[test]
fn test_open_api_window() {
    assert!(oracle("1.0").is_open_api_supported());
    assert!(!oracle("2.0-rc-1").is_open_api_supported());
    assert!(!oracle("0.8").is_open_api_supported());
}

#[test]
fn test_cache_layout_examples() {
    init_tracing();
    let layout = |version: &str| oracle(version).artifact_cache_layout_version().to_string();
    assert_eq!(layout("2.0-rc-1"), "2.12");
    assert_eq!(layout("1.12-rc-1"), "2.6");
    assert_eq!(layout("1.2"), "0.1");
    assert_eq!(layout("0.9"), "0.1");
}

#[test]
fn test_cache_layout_never_decreases() {
    let layouts: Vec<_> = RELEASES
        .iter()
        .map(|r| oracle(r).artifact_cache_layout_version())
        .collect();
    for pair in layouts.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_non_ascii_output_on_windows_only() {
    let windows = OsDescriptor::new(OsFamily::Windows);
    let linux = OsDescriptor::new(OsFamily::Linux);
    let broken: Vec<_> = RELEASES
        .iter()
        .filter(|r| !oracle(r).is_tooling_api_non_ascii_output_supported(&windows))
        .collect();
    assert_eq!(broken, [&"1.0-milestone-7", &"1.0-milestone-8", &"1.0-milestone-8a"]);
    assert!(RELEASES
        .iter()
        .all(|r| oracle(r).is_tooling_api_non_ascii_output_supported(&linux)));
}

// =============================================================================
// Wrapper
// =============================================================================

#[test]
fn test_0_8_wrapper_runs_nothing() {
    let wrapper = oracle("0.8");
    for release in RELEASES {
        assert!(!wrapper.wrapper_can_execute(&v(release)), "{}", release);
    }
}

#[test]
fn test_nothing_runs_0_8() {
    for release in RELEASES {
        assert!(!oracle(release).wrapper_can_execute(&v("0.8")), "{}", release);
    }
}

#[test]
fn test_0_9_1_wrapper_runs_nothing() {
    let wrapper = oracle("0.9.1");
    assert!(!wrapper.wrapper_can_execute(&v("0.9.2-20101220110000+1100")));
    assert!(!wrapper.wrapper_can_execute(&v("1.0-milestone-1-20110209002458+0100")));
    assert!(!wrapper.wrapper_can_execute(&v("1.0-milestone-1-20110209002458-0800")));
    for release in RELEASES {
        assert!(!wrapper.wrapper_can_execute(&v(release)), "{}", release);
    }
}

#[test]
fn test_patched_milestone_window() {
    let patched = v("1.0-milestone-8a-20120223182035+0100");
    let blocked: Vec<_> = RELEASES
        .iter()
        .filter(|r| !oracle(r).wrapper_can_execute(&patched))
        .collect();
    assert_eq!(
        blocked,
        [&"0.8", &"0.9.1", &"0.9.2", &"1.0-milestone-1", &"1.0-milestone-2"]
    );
}

#[test]
fn test_modern_wrappers_run_everything_after_0_8() {
    let wrapper = oracle("1.12");
    for release in &RELEASES[1..] {
        assert!(wrapper.wrapper_can_execute(&v(release)), "{}", release);
    }
}
