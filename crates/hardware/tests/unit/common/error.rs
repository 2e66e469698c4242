//! # Error Tests
//!
//! Display text and source chaining for `SimError`.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use riscy_core::common::SimError;

#[test]
fn io_error_names_path_and_keeps_source() {
    let err = SimError::Io {
        path: PathBuf::from("missing.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    let text = err.to_string();
    assert!(text.contains("missing.bin"), "{text}");
    assert!(text.contains("no such file"), "{text}");
    assert!(err.source().is_some());
}

#[test]
fn unaligned_image_reports_length() {
    let err = SimError::UnalignedImage { len: 7 };
    assert_eq!(err.to_string(), "image length 7 is not a multiple of 4 bytes");
}

#[test]
fn image_too_large_reports_both_sizes() {
    let err = SimError::ImageTooLarge {
        words: 9,
        capacity: 8,
    };
    assert_eq!(
        err.to_string(),
        "image of 9 words does not fit a memory of 8 words"
    );
}

#[test]
fn config_parse_converts_from_serde_json() {
    let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
    let err: SimError = json_err.into();
    assert!(matches!(err, SimError::ConfigParse(_)));
    assert!(err.to_string().starts_with("invalid configuration:"));
}
