use super::*;
use chrono::TimeZone;

fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .single()
        .expect("unambiguous local time")
}

#[test]
fn cutoff_subtracts_whole_days() {
    let cases: &[(u32, i64)] = &[(0, 0), (1, 24), (3, 72), (30, 720)];

    for (days, hours) in cases {
        let config = JobConfig {
            threshold_days: *days,
            ..JobConfig::with_defaults(fixed_now())
        };

        let cutoff = config.cutoff().expect("cutoff in range");
        assert_eq!(
            fixed_now() - cutoff,
            TimeDelta::hours(*hours),
            "threshold {days} days"
        );
    }
}

#[test]
fn cutoff_out_of_range_is_an_error() {
    let config = JobConfig {
        threshold_days: u32::MAX,
        ..JobConfig::with_defaults(fixed_now())
    };

    let err = config.cutoff().expect_err("should overflow");
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn with_defaults_uses_default_threshold_and_listing_order() {
    let config = JobConfig::with_defaults(fixed_now());

    assert_eq!(config.threshold_days, DEFAULT_THRESHOLD_DAYS);
    assert_eq!(config.now, fixed_now());
    assert!(!config.sorted_logs);
    assert!(config.source.ends_with("backupsFrom"));
    assert!(config.destination.ends_with("backupsTo"));
    assert!(config.from_log.ends_with("backupsFrom.log"));
    assert!(config.to_log.ends_with("backupsTo.log"));
}

#[test]
fn under_base_lays_out_standard_paths() {
    let config = JobConfig::under_base(Path::new("/srv/data"), fixed_now());

    assert_eq!(config.source, Path::new("/srv/data/backupsFrom"));
    assert_eq!(config.destination, Path::new("/srv/data/backupsTo"));
    assert_eq!(config.from_log, Path::new("/srv/data/backupsFrom.log"));
    assert_eq!(config.to_log, Path::new("/srv/data/backupsTo.log"));
}
