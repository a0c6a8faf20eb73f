use super::*;
use chrono::{TimeDelta, TimeZone};

fn cutoff() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 6, 12, 12, 0, 0)
        .single()
        .expect("unambiguous local time")
}

fn record(name: &str, size: u64, created: DateTime<Local>) -> FileRecord {
    FileRecord {
        name: name.to_string(),
        size,
        creation_time: created,
        modification_time: created,
    }
}

#[test]
fn classify_compares_creation_time_against_cutoff() {
    let cases: &[(TimeDelta, Disposition)] = &[
        (TimeDelta::days(-2), Disposition::Retire),
        (TimeDelta::nanoseconds(-1), Disposition::Retire),
        (TimeDelta::zero(), Disposition::Copy),
        (TimeDelta::seconds(1), Disposition::Copy),
        (TimeDelta::days(2), Disposition::Copy),
    ];

    for (offset, expected) in cases {
        let rec = record("f", 1, cutoff() + *offset);
        assert_eq!(
            classify(&rec, &cutoff()),
            *expected,
            "offset {offset:?} from cutoff"
        );
    }
}

#[test]
fn classify_ignores_modification_time() {
    let mut rec = record("f", 1, cutoff() - TimeDelta::days(5));
    rec.modification_time = cutoff() + TimeDelta::days(1);

    assert_eq!(classify(&rec, &cutoff()), Disposition::Retire);
}

#[test]
fn copied_is_a_subset_of_source_and_totals_add_up() {
    let mut inv = Inventory::default();

    inv.record_copied(record("b.txt", 3, cutoff()), 3);
    inv.record_retired(record("a.txt", 10, cutoff()));
    inv.record_copied(record("c.txt", 4, cutoff()), 4);

    let source: Vec<&str> = inv.source().iter().map(|r| r.name.as_str()).collect();
    let copied: Vec<&str> = inv.copied().iter().map(|r| r.name.as_str()).collect();

    // Insertion order is preserved until asked otherwise.
    assert_eq!(source, vec!["b.txt", "a.txt", "c.txt"]);
    assert_eq!(copied, vec!["b.txt", "c.txt"]);

    for rec in inv.copied() {
        assert!(inv.source().contains(rec), "{} missing from source", rec.name);
    }

    let totals = inv.totals();
    assert_eq!(totals.scanned, 3);
    assert_eq!(totals.retired, 1);
    assert_eq!(totals.copied, 2);
    assert_eq!(totals.bytes_copied, 7);
    assert_eq!(totals.scanned, totals.retired + totals.copied);
}

#[test]
fn sort_by_name_orders_both_inventories() {
    let mut inv = Inventory::default();
    for name in ["zeta", "alpha", "mid"] {
        inv.record_copied(record(name, 1, cutoff()), 1);
    }
    inv.record_retired(record("beta", 1, cutoff()));

    inv.sort_by_name();

    let source: Vec<&str> = inv.source().iter().map(|r| r.name.as_str()).collect();
    let copied: Vec<&str> = inv.copied().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(source, vec!["alpha", "beta", "mid", "zeta"]);
    assert_eq!(copied, vec!["alpha", "mid", "zeta"]);
}
