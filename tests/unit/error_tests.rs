//! Display format and distinctness of `AppError` variants.

use git_path::AppError;

#[test]
fn uninitialized_display_has_prefix() {
    let err = AppError::Uninitialized("relative_path called before initialize".into());
    assert_eq!(
        err.to_string(),
        "uninitialized: relative_path called before initialize"
    );
}

#[test]
fn decode_display_has_prefix() {
    let err = AppError::Decode("bad byte".into());
    assert!(err.to_string().starts_with("decode:"));
}

#[test]
fn every_variant_has_a_distinct_prefix() {
    let errors = [
        AppError::Config("x".into()),
        AppError::Io("x".into()),
        AppError::Uninitialized("x".into()),
        AppError::Decode("x".into()),
        AppError::InvalidPath("x".into()),
        AppError::RootUnknown("x".into()),
    ];
    let rendered: Vec<String> = errors.iter().map(ToString::to_string).collect();
    for (i, a) in rendered.iter().enumerate() {
        for b in &rendered[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn messages_have_no_trailing_period() {
    let err = AppError::InvalidPath("no path specified".into());
    assert!(!err.to_string().ends_with('.'));
}

#[test]
fn utf8_error_converts_to_decode() {
    let bytes = [0x2f, 0xff];
    let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
    let err = AppError::from(utf8_err);
    assert!(matches!(err, AppError::Decode(_)), "got {err:?}");
}

#[test]
fn toml_error_converts_to_config() {
    let toml_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
    let err = AppError::from(toml_err);
    assert!(err.to_string().starts_with("config: invalid config"));
}

#[test]
fn error_implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&AppError::RootUnknown("no repository".into()));
}
