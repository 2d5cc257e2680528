use super::*;

fn stats() -> DashboardStats {
    DashboardStats { total_users: 12, total_complaints: 40, pending_complaints: 9, resolved_complaints: 25, recent_complaints: 3 }
}

#[test]
fn both_reads_succeeding_renders_dashboard() {
    let page = ComplaintPage { complaints: Vec::new(), total: 0 };
    assert_eq!(join_dashboard(Ok(stats()), Ok(page)), DashboardLoad::Ready { stats: stats(), recent: Vec::new() });
}

#[test]
fn rejection_from_either_read_fails_the_whole_page() {
    let load = join_dashboard(Ok(stats()), Err(ApiError::Rejected("Access denied".to_owned())));
    assert_eq!(load, DashboardLoad::Failed("Access denied".to_owned()));
}

#[test]
fn network_failure_uses_generic_message() {
    let load = join_dashboard(Err(ApiError::Network("timeout".to_owned())), Ok(ComplaintPage::default()));
    assert_eq!(load, DashboardLoad::Failed("Failed to load dashboard data".to_owned()));
}
