use super::*;

#[test]
fn avatar_url_defaults_when_missing() {
    assert_eq!(avatar_url(None), DEFAULT_AVATAR);
    assert_eq!(avatar_url(Some("")), DEFAULT_AVATAR);
}

#[test]
fn avatar_url_normalizes_present_values() {
    assert_eq!(
        avatar_url(Some("https://cdn.example.com/a.png")),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn normalize_repairs_broken_https_scheme() {
    assert_eq!(
        normalize_image_url("https//cdn.example.com/a.png"),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn normalize_passes_absolute_urls_through() {
    assert_eq!(normalize_image_url("http://h/a.png"), "http://h/a.png");
    assert_eq!(normalize_image_url("https://h/a.png"), "https://h/a.png");
}

#[test]
fn normalize_resolves_relative_paths_against_api_origin() {
    assert_eq!(
        normalize_image_url("/uploads/cover.jpg"),
        format!("{API_BASE_URL}/uploads/cover.jpg")
    );
}
