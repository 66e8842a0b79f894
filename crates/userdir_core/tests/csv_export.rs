use std::fs;
use userdir_core::{
    export_users, ExportError, ExportOutcome, InMemoryUserRepository, User, UserService,
    CSV_HEADER,
};

#[test]
fn exporting_an_empty_store_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");

    let outcome = export_users(&[], &path).unwrap();

    assert_eq!(outcome, ExportOutcome::NothingToExport);
    assert!(!path.exists());
}

#[test]
fn export_writes_header_then_one_line_per_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");
    let users = vec![
        User::new(1, "Bob", "b@x.com"),
        User::new(2, "alice", "a@x.com"),
    ];

    let outcome = export_users(&users, &path).unwrap();

    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: path.clone(),
            records: 2,
        }
    );
    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines, vec![CSV_HEADER, "1,Bob,b@x.com", "2,alice,a@x.com"]);
}

#[test]
fn export_overwrites_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");
    fs::write(&path, "stale contents\n").unwrap();

    export_users(&[User::new(1, "Bob", "b@x.com")], &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines, vec![CSV_HEADER, "1,Bob,b@x.com"]);
}

#[test]
fn fields_are_written_verbatim_without_escaping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");
    let users = vec![User::new(1, "Doe, Jane", "jane@x.com")];

    export_users(&users, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let row = contents.lines().nth(1).unwrap();
    assert_eq!(row, "1,Doe, Jane,jane@x.com");
    assert_eq!(row.split(',').count(), 4);
}

#[test]
fn export_failure_surfaces_as_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("users.csv");
    let users = vec![User::new(1, "Bob", "b@x.com")];

    let err = export_users(&users, &path).unwrap_err();

    assert!(matches!(err, ExportError::Io { path: failed, .. } if failed == path));
}

#[test]
fn sort_then_export_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.csv");

    let mut service = UserService::new(InMemoryUserRepository::new());
    service.add_user(1, "Bob", "b@x.com").unwrap();
    service.add_user(2, "alice", "a@x.com").unwrap();

    service.sort_users_by_name();
    let names: Vec<_> = service
        .users()
        .iter()
        .map(|user| user.name.as_str())
        .collect();
    assert_eq!(names, vec!["alice", "Bob"]);

    service.sort_users_by_id();
    let ids: Vec<_> = service.users().iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![1, 2]);

    let outcome = service.export_csv(&path).unwrap();
    assert_eq!(
        outcome,
        ExportOutcome::Written {
            path: path.clone(),
            records: 2,
        }
    );

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines, vec!["ID,Name,Email", "1,Bob,b@x.com", "2,alice,a@x.com"]);
}
