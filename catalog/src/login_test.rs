use super::*;
use crate::notice::NoticeVariant;
use crate::store::{MemoryStore, USER_KEY, load_session};

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn empty_fields_write_nothing() {
    let mut store = MemoryStore::new();
    for bad in [form("", "secret"), form("a@b.com", ""), form("  ", "secret"), form("", "")] {
        let err = sign_in(&mut store, &bad).unwrap_err();
        assert!(matches!(err, LoginError::MissingFields));
    }
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}

#[test]
fn missing_fields_notice_is_destructive() {
    let notice = LoginError::MissingFields.notice();
    assert_eq!(notice.description, "Please fill in all fields");
    assert_eq!(notice.variant, NoticeVariant::Destructive);
}

#[test]
fn valid_login_persists_demo_user() {
    let mut store = MemoryStore::new();
    let user = sign_in(&mut store, &form("ada@example.com", "pw")).unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.role, "user");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(load_session(&store).unwrap(), Some(user));
}

#[test]
fn welcome_notice_text() {
    assert_eq!(welcome_notice().description, "Welcome back to ProbY!");
}
