use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_default_sidebar_closed() {
    let state = UiState::default();
    assert!(!state.sidebar_open);
}

#[test]
fn toggle_sidebar_flips_and_close_resets() {
    let mut state = UiState::default();
    state.toggle_sidebar();
    assert!(state.sidebar_open);
    state.toggle_sidebar();
    assert!(!state.sidebar_open);
    state.toggle_sidebar();
    state.close_sidebar();
    assert!(!state.sidebar_open);
}

// =============================================================
// Tabs
// =============================================================

#[test]
fn profile_tab_default_is_overview() {
    assert_eq!(ProfileTab::default(), ProfileTab::Overview);
    assert_eq!(ProfileTab::ALL.len(), 4);
}

#[test]
fn admin_tab_labels_in_display_order() {
    let labels: Vec<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Overview", "Users", "Problems", "Solutions", "Settings"]);
    assert_eq!(AdminTab::default(), AdminTab::Overview);
}
