//! Property tests for routing decisions and moves.

use std::fs::Metadata;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, TimeZone};
use proptest::prelude::*;

use segregator::{classify, extension_of, CreationClock, Destination, Directories, Outcome, Router};

struct HourClock(u32);

impl CreationClock for HourClock {
    fn creation_time(&self, _path: &Path, _metadata: &Metadata) -> io::Result<DateTime<Local>> {
        Local
            .with_ymd_and_hms(2024, 1, 15, self.0, 0, 0)
            .earliest()
            .ok_or_else(|| io::Error::other("no such local time"))
    }
}

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

fn other_extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9]{0,5}")
        .unwrap()
        .prop_filter("not a routed extension", |ext| ext != "jar" && ext != "xml")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: jar routing is decided by hour parity alone.
    #[test]
    fn property_jar_follows_hour_parity(hour in 0u32..24) {
        let expected = if hour % 2 == 0 { Destination::Dev } else { Destination::Test };
        prop_assert_eq!(classify(Some("jar"), hour), Some(expected));
    }

    /// PROPERTY: xml always lands in dev.
    #[test]
    fn property_xml_always_dev(hour in 0u32..24) {
        prop_assert_eq!(classify(Some("xml"), hour), Some(Destination::Dev));
    }

    /// PROPERTY: any other extension is unmatched at every hour.
    #[test]
    fn property_other_extensions_unmatched(ext in other_extension(), hour in 0u32..24) {
        prop_assert_eq!(classify(Some(ext.as_str()), hour), None);
    }

    /// PROPERTY: the extension is whatever follows the last dot, verbatim.
    #[test]
    fn property_extension_after_last_dot(name in stem(), ext in other_extension()) {
        let file = format!("{name}.{ext}");
        prop_assert_eq!(extension_of(Path::new(&file)), Some(ext));
        prop_assert_eq!(extension_of(Path::new(&name)), None);
    }

    /// PROPERTY: processing a jar moves it to the parity directory and
    /// removes it from the watched directory.
    #[test]
    fn property_processed_jar_leaves_source(name in stem(), hour in 0u32..24) {
        let temp = tempfile::tempdir().unwrap();
        let dirs = Directories::new(
            temp.path().join("HOME"),
            temp.path().join("DEV"),
            temp.path().join("TEST"),
        );
        for dir in dirs.all() {
            std::fs::create_dir_all(dir).unwrap();
        }
        let source = dirs.home().join(format!("{name}.jar"));
        std::fs::write(&source, b"jar").unwrap();

        let router = Router::with_clock(dirs.clone(), HourClock(hour));
        let outcome = router.process(&source).unwrap();

        let expected_dir = if hour % 2 == 0 { dirs.dev() } else { dirs.test() };
        let moved = matches!(outcome, Outcome::Moved { .. });
        prop_assert!(moved);
        prop_assert!(!source.exists());
        let routed = expected_dir.join(format!("{name}.jar")).exists();
        prop_assert!(routed);
    }
}
