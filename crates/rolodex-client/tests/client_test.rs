//! Client tests against real whitelist files.

use std::{fs, io, path::Path};

use rolodex_client::{
    ClassifiedError, Client, ClientConfig, Directory, ErrorKind, chain, kind_of, root_cause,
};

// Helper to write a whitelist file with one address per line
fn write_whitelist(path: &Path, addresses: &[&str]) {
    let mut content = addresses.join("\n");
    content.push('\n');
    fs::write(path, content).expect("write whitelist");
}

fn client_for<'d>(directory: &'d Directory, path: &Path) -> Client<'d> {
    let config = ClientConfig::default().with_whitelist_path(path);
    Client::with_config("user", directory, &config)
}

#[test]
fn lookup_after_single_append() {
    let mut directory = Directory::new();
    directory.append("Alice", "a@x.com");

    let client = Client::new("user", &directory);
    assert_eq!(client.get_name(0).unwrap(), "Alice");

    let err = client.get_name(1).unwrap_err();
    assert!(matches!(err, ClassifiedError::NotFound { .. }));
}

#[test]
fn whitelisted_address_is_permitted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");
    write_whitelist(&path, &["bob@example.com"]);

    let directory = Directory::new();
    let client = client_for(&directory, &path);

    assert!(client.check_permitted("bob@example.com").is_ok());
}

#[test]
fn unlisted_address_is_forbidden() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");
    write_whitelist(&path, &["bob@example.com"]);

    let directory = Directory::new();
    let client = client_for(&directory, &path);

    let err = client.check_permitted("mallory@example.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(err.cause().is_none(), "a plain miss has no cause");
}

#[test]
fn missing_whitelist_is_forbidden_with_io_cause() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");

    let directory = Directory::new();
    let client = client_for(&directory, &path);

    let err = client.check_permitted("bob@example.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let message = err.message().unwrap();
    assert!(message.starts_with("failed to open "), "unexpected message: {message}");
    assert!(message.ends_with("whitelist.txt"), "unexpected message: {message}");

    let io_err = chain(&err).find_map(|e| e.downcast_ref::<io::Error>());
    assert_eq!(io_err.map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

#[test]
fn deleting_whitelist_between_checks_changes_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");
    write_whitelist(&path, &["bob@example.com"]);

    let directory = Directory::new();
    let client = client_for(&directory, &path);
    assert!(client.check_permitted("bob@example.com").is_ok());

    fs::remove_file(&path).unwrap();

    let err = client.check_permitted("bob@example.com").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(root_cause(&err).is::<io::Error>());
}

#[test]
fn editing_whitelist_applies_without_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");
    write_whitelist(&path, &["bob@example.com"]);

    let directory = Directory::new();
    let client = client_for(&directory, &path);
    assert!(client.check_permitted("carol@example.com").is_err());

    write_whitelist(&path, &["bob@example.com", "carol@example.com"]);
    assert!(client.check_permitted("carol@example.com").is_ok());

    write_whitelist(&path, &["carol@example.com"]);
    assert!(client.check_permitted("bob@example.com").is_err());
}

#[test]
fn crlf_whitelist_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");
    fs::write(&path, "alice@example.com\r\nbob@example.com\r\n").unwrap();

    let directory = Directory::new();
    let client = client_for(&directory, &path);
    assert!(client.check_permitted("bob@example.com").is_ok());
}

#[test]
fn stacked_translation_keeps_outer_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");

    let directory = Directory::new();
    let client = client_for(&directory, &path);

    // A caller that re-classifies a failed permission check as a lookup miss
    let inner = client.check_permitted("bob@example.com").unwrap_err();
    let outer = ClassifiedError::translate(inner, ErrorKind::NotFound)
        .with_message("profile unavailable");

    assert_eq!(kind_of(&outer), Some(ErrorKind::NotFound));

    let kinds: Vec<ErrorKind> = chain(&outer)
        .filter_map(|e| e.downcast_ref::<ClassifiedError>())
        .map(ClassifiedError::kind)
        .collect();
    assert_eq!(kinds, [ErrorKind::NotFound, ErrorKind::Forbidden]);

    assert!(root_cause(&outer).is::<io::Error>());

    let report = outer.report().to_string();
    assert!(report.starts_with("NotFound: profile unavailable"));
    assert!(report.contains("caused by: Forbidden: failed to open"));
    assert!(report.contains("package=std::io"));
}

#[test]
fn branch_on_kind_without_string_matching() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.txt");
    write_whitelist(&path, &["bob@example.com"]);

    let mut directory = Directory::new();
    directory.append("Bob", "bob@example.com");
    let client = client_for(&directory, &path);

    let outcome = |result: Result<(), ClassifiedError>| match result {
        Ok(()) => "ok",
        Err(ClassifiedError::NotFound { .. }) => "missing",
        Err(ClassifiedError::Forbidden { cause: Some(_), .. }) => "unverifiable",
        Err(ClassifiedError::Forbidden { cause: None, .. }) => "denied",
    };

    assert_eq!(outcome(client.get_name(0).map(|_| ())), "ok");
    assert_eq!(outcome(client.get_name(7).map(|_| ())), "missing");
    assert_eq!(outcome(client.check_permitted("mallory@example.com")), "denied");

    fs::remove_file(&path).unwrap();
    assert_eq!(outcome(client.check_permitted("bob@example.com")), "unverifiable");
}
