use super::*;

#[test]
fn display_date_handles_rfc3339() {
    assert_eq!(display_date("2024-03-09T10:15:00.000Z"), "09/03/2024");
    assert_eq!(display_date("2024-03-09T23:59:00+05:30"), "09/03/2024");
}

#[test]
fn display_date_handles_plain_dates_and_garbage() {
    assert_eq!(display_date("2024-12-01"), "01/12/2024");
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date("  "), "-");
}

#[test]
fn chip_classes_differ_per_status() {
    let classes: Vec<_> = ComplaintStatus::ALL.iter().map(|s| status_class(*s)).collect();
    let mut unique = classes.clone();
    unique.dedup();
    assert_eq!(classes.len(), unique.len());
    assert_eq!(priority_class(Priority::High), "chip chip--high");
}

#[test]
fn file_size_picks_unit() {
    assert_eq!(file_size(512), "512 B");
    assert_eq!(file_size(2048), "2.0 KB");
    assert_eq!(file_size(5 * 1024 * 1024), "5.0 MB");
}
