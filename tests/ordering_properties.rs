//! Ordering Properties
//!
//! Checks the comparator over a fixed corpus of parsed versions.

use tagged_semver::{parse, Comparison, PrereleaseTag, Version};

const CORPUS: &[&str] = &[
    "0.0.0",
    "0.0.1-prealpha",
    "0.0.1",
    "0.1.0-alpha.3",
    "1.0.0-prealpha.9",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.2",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.11",
    "1.0.0-rc",
    "1.0.0-rc.1",
    "1.0.0",
    "1.0.1",
    "1.2.3-rc",
    "1.2.3",
    "1.10.0",
    "2.0.0-alpha",
    "10.0.0",
];

fn corpus() -> Vec<Version> {
    CORPUS.iter().map(|s| parse(s).unwrap()).collect()
}

fn v(s: &str) -> Version {
    parse(s).unwrap()
}

// =============================================================================
// Algebraic Properties
// =============================================================================

#[test]
fn test_exactly_one_outcome_holds() {
    let versions = corpus();
    for a in &versions {
        for b in &versions {
            let outcomes = [a.is_greater(b), a.is_lower(b), a.is_equal(b)];
            assert_eq!(outcomes.iter().filter(|o| **o).count(), 1, "{a} vs {b}");
        }
    }
}

#[test]
fn test_antisymmetry() {
    let versions = corpus();
    for a in &versions {
        for b in &versions {
            assert_eq!(a.is_greater(b), b.is_lower(a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_transitivity() {
    let versions = corpus();
    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a.is_greater(b) && b.is_greater(c) {
                    assert!(a.is_greater(c), "{a} > {b} > {c}");
                }
            }
        }
    }
}

#[test]
fn test_corpus_is_listed_in_ascending_order() {
    let versions = corpus();
    for pair in versions.windows(2) {
        let (lower, higher) = (&pair[0], &pair[1]);
        // alpha.beta and alpha.2 are the same version
        if lower.is_equal(higher) {
            continue;
        }
        assert_eq!(lower.compare(higher), Comparison::Lower, "{lower} < {higher}");
    }
}

#[test]
fn test_display_reparses_to_equal_version() {
    for version in corpus() {
        let reparsed = parse(&version.to_string()).unwrap();
        assert!(reparsed.is_equal(&version), "{version}");
        assert_eq!(reparsed, version);
    }
}

// =============================================================================
// Named Cases
// =============================================================================

#[test]
fn test_release_beats_prerelease() {
    assert!(v("1.2.3").is_greater(&v("1.2.3-rc")));
}

#[test]
fn test_tag_ranking() {
    assert!(v("1.0.0-alpha").is_lower(&v("1.0.0-beta")));
    assert!(v("1.0.0-beta").is_lower(&v("1.0.0-rc")));
}

#[test]
fn test_build_tie_break() {
    assert!(v("1.0.0-alpha.2").is_greater(&v("1.0.0-alpha.1")));
}

#[test]
fn test_tag_as_build_collapse() {
    let collapsed = v("1.0.0-alpha.beta");
    assert_eq!(collapsed.prerelease_tag(), PrereleaseTag::Alpha);
    assert_eq!(collapsed.prerelease_build(), 2);
    assert!(collapsed.is_equal(&v("1.0.0-alpha.2")));
}

#[test]
fn test_rejection_cases() {
    let too_long = "1".repeat(257);
    let rejected = [
        "",
        too_long.as_str(),
        "1.2",
        "1.2.3.4",
        "1.2.3-unknown",
        "1.2.3-alpha.beta.gamma",
    ];
    for input in rejected {
        assert!(parse(input).is_err(), "{input:?}");
    }
}

#[test]
fn test_default_build() {
    assert_eq!(v("1.0.0-rc").prerelease_build(), 0);
}

#[test]
fn test_zero_equals_parsed_zero() {
    assert!(Version::zero().is_equal(&v("0.0.0")));
}

#[test]
fn test_sorting_and_max() {
    let mut versions: Vec<Version> = ["1.0.0", "1.0.0-rc.2", "0.9.9", "1.0.0-beta"]
        .iter()
        .map(|s| v(s))
        .collect();
    versions.sort();
    assert_eq!(versions.first(), Some(&v("0.9.9")));
    assert_eq!(versions.iter().max(), Some(&v("1.0.0")));
}

#[test]
fn test_parsing_from_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || parse(&format!("{i}.0.0-beta.{i}")).unwrap()))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let version = handle.join().unwrap();
        assert_eq!(version.major(), i as u64);
        assert_eq!(version.prerelease_build(), i as i64);
    }
}
