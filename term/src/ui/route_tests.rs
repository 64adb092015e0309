use super::*;

#[test]
fn root_redirects_to_devices() {
    assert_eq!(Route::parse("/"), Some(Route::Devices));
    assert_eq!(Route::parse(""), Some(Route::Devices));
}

#[test]
fn parses_known_paths() {
    assert_eq!(Route::parse("/devices"), Some(Route::Devices));
    assert_eq!(Route::parse("/devices/"), Some(Route::Devices));
    assert_eq!(Route::parse("/devices/create"), Some(Route::CreateDevice));
    assert_eq!(
        Route::parse("/devices/edit/abc123"),
        Some(Route::EditDevice("abc123".to_string()))
    );
}

#[test]
fn rejects_unknown_paths() {
    assert_eq!(Route::parse("/devices/edit"), None);
    assert_eq!(Route::parse("/devices/edit/a/b"), None);
    assert_eq!(Route::parse("/gadgets"), None);
}

#[test]
fn displays_canonical_paths() {
    assert_eq!(Route::Devices.to_string(), "/devices");
    assert_eq!(Route::CreateDevice.to_string(), "/devices/create");
    assert_eq!(
        Route::EditDevice("abc123".to_string()).to_string(),
        "/devices/edit/abc123"
    );
    assert!(Route::CreateDevice.is_form());
    assert!(!Route::Devices.is_form());
}
