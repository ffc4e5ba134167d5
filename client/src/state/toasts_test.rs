use super::*;

fn notice(n: usize) -> Notice {
    Notice::titled(format!("t{n}"), "d")
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(notice(1));
    let b = state.push(notice(2));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(notice(1));
    let b = state.push(notice(2));
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), [b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_past_limit_drops_oldest() {
    let mut state = ToastState::default();
    for n in 0..=TOAST_LIMIT {
        state.push(notice(n));
    }
    assert_eq!(state.items.len(), TOAST_LIMIT);
    assert_eq!(state.items[0].notice.title, "t1");
}

#[test]
fn dismissed_id_is_not_reused() {
    let mut state = ToastState::default();
    let a = state.push(notice(1));
    state.dismiss(a);
    let b = state.push(notice(2));
    assert_ne!(a, b);
}
