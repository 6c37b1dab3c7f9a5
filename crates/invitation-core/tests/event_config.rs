//! Event file loading tests

use std::io::Write;

use invitation_core::{EventDetails, InvitationError};
use tempfile::NamedTempFile;

#[test]
fn test_load_event_from_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "image": "https://example.com/convite.png",
            "title": "Aniversário",
            "description": "Venha comemorar",
            "date": "12 de Abril de 2025",
            "time": "18h",
            "location": "Rua das Flores, 10"
        }}"#
    )
    .unwrap();

    let event = EventDetails::from_json_file(file.path()).unwrap();
    assert_eq!(event.title, "Aniversário");
    assert_eq!(event.image, "https://example.com/convite.png");
    assert_eq!(event.location, "Rua das Flores, 10");
}

#[test]
fn test_missing_field_is_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "title": "Só o título" }}"#).unwrap();

    let result = EventDetails::from_json_file(file.path());
    assert!(matches!(result, Err(InvitationError::Serialization(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = EventDetails::from_json_file(dir.path().join("event.json"));
    assert!(matches!(result, Err(InvitationError::Io(_))));
}
