use chrono::{Duration, Utc};

use registrar_core::config::SessionConfig;
use registrar_core::models::{Semester, StudentId};
use registrar_session::{cleanup_expired_sessions, SessionLifetime, SessionManager};

fn login(manager: &SessionManager, name: &str) -> String {
    manager
        .create_session(StudentId::generate(), name.to_string(), Semester::new(3).unwrap())
        .token
}

#[test]
fn created_session_is_retrievable_by_token() {
    let manager = SessionManager::new();
    let token = login(&manager, "Ada");

    let session = manager.get_session(&token).unwrap();
    assert_eq!(session.name, "Ada");
    assert_eq!(session.semester.value(), 3);
    assert!(manager.get_session("no-such-token").is_none());
}

#[test]
fn tokens_are_unique_per_login() {
    let manager = SessionManager::new();
    let a = login(&manager, "Ada");
    let b = login(&manager, "Ada");
    assert_ne!(a, b);
    assert_eq!(manager.session_count(), 2);
}

#[test]
fn removed_session_is_gone() {
    let manager = SessionManager::new();
    let token = login(&manager, "Ada");
    assert!(manager.remove_session(&token).is_some());
    assert!(manager.get_session(&token).is_none());
    assert!(manager.remove_session(&token).is_none());
}

#[test]
fn semester_is_kept_in_step() {
    let manager = SessionManager::new();
    let token = login(&manager, "Ada");
    assert!(manager.set_semester(&token, Semester::new(6).unwrap()));
    assert_eq!(manager.get_session(&token).unwrap().semester.value(), 6);
    assert!(!manager.set_semester("missing", Semester::FIRST));
}

#[test]
fn expired_session_is_evicted_on_lookup() {
    let manager = SessionManager::new();
    let token = login(&manager, "Ada");

    let mut session = manager.get_session(&token).unwrap();
    session.created_at = Utc::now() - Duration::hours(25);
    manager.update_session(session);

    assert!(manager.get_session(&token).is_none());
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn cleanup_removes_only_stale_sessions() {
    let manager = SessionManager::with_lifetime(SessionLifetime {
        max_age: Duration::hours(24),
        inactivity_timeout: Duration::hours(1),
    });
    let active = login(&manager, "Active");
    let idle = login(&manager, "Idle");

    let mut session = manager.get_session(&idle).unwrap();
    session.last_activity = Utc::now() - Duration::hours(2);
    manager.update_session(session);

    assert_eq!(cleanup_expired_sessions(&manager), 1);
    assert!(manager.get_session(&active).is_some());
    assert!(manager.get_session(&idle).is_none());
}

#[test]
fn lifetime_follows_config() {
    let config = SessionConfig {
        max_age_secs: 60,
        inactivity_timeout_secs: 30,
        ..SessionConfig::default()
    };
    let lifetime = SessionLifetime::from(&config);
    assert_eq!(lifetime.max_age, Duration::seconds(60));
    assert_eq!(lifetime.inactivity_timeout, Duration::seconds(30));
}
