//! Tests for agent construction and validation.

use vordr::{Vordr, VordrError};

#[test]
fn builds_with_generation_and_origin() {
    let agent = Vordr::builder()
        .generation("shell-v1")
        .origin("https://app.example")
        .build()
        .unwrap();

    assert_eq!(agent.generation(), "shell-v1");
    assert!(agent.manifest().is_empty());
}

#[test]
fn manifest_order_is_preserved() {
    let agent = Vordr::builder()
        .generation("v1")
        .origin("https://app.example")
        .manifest(["/", "/index.html"])
        .shell_resource("/logo.svg")
        .build()
        .unwrap();

    let paths: Vec<&str> = agent.manifest().iter().collect();
    assert_eq!(paths, vec!["/", "/index.html", "/logo.svg"]);
}

#[test]
fn missing_generation_is_a_configuration_error() {
    let err = Vordr::builder()
        .origin("https://app.example")
        .build()
        .unwrap_err();
    assert!(matches!(err, VordrError::Configuration(_)));
}

#[test]
fn empty_generation_is_a_configuration_error() {
    let err = Vordr::builder()
        .generation("")
        .origin("https://app.example")
        .build()
        .unwrap_err();
    assert!(matches!(err, VordrError::Configuration(_)));
}

#[test]
fn missing_origin_is_a_configuration_error() {
    let err = Vordr::builder().generation("v1").build().unwrap_err();
    assert!(matches!(err, VordrError::Configuration(_)));
}

#[test]
fn relative_origin_is_rejected() {
    let err = Vordr::builder()
        .generation("v1")
        .origin("not a url")
        .build()
        .unwrap_err();
    assert!(matches!(err, VordrError::InvalidUrl(_)));
}

#[test]
fn non_hierarchical_origin_is_rejected() {
    let err = Vordr::builder()
        .generation("v1")
        .origin("mailto:ops@app.example")
        .build()
        .unwrap_err();
    assert!(matches!(err, VordrError::Configuration(_)));
}
