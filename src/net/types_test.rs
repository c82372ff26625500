use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_author() -> Author {
    Author {
        id: 7,
        name: "Ada Lovelace".to_owned(),
        username: Some("adalovelace".to_owned()),
        email: Some("ada@example.com".to_owned()),
        headline: None,
        avatar_url: Some("https://cdn.example.com/ada.png".to_owned()),
    }
}

fn make_article() -> Article {
    Article {
        id: 42,
        title: "Borrow Checker Field Notes".to_owned(),
        content: "# Notes\n\nBody text.".to_owned(),
        tags: vec!["rust".to_owned(), "writing".to_owned()],
        image_url: Some("/uploads/cover.jpg".to_owned()),
        created_at: "2025-08-05T09:30:00.000Z".to_owned(),
        likes: 12,
        comments: 3,
        author: make_author(),
    }
}

// =============================================================
// camelCase field mapping
// =============================================================

#[test]
fn user_maps_camel_case_keys() {
    let json = r#"{
        "id": 1,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "username": "adalovelace",
        "headline": "Compiler whisperer",
        "avatarUrl": "https://cdn.example.com/ada.png"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example.com/ada.png"));
    assert_eq!(user.headline.as_deref(), Some("Compiler whisperer"));
}

#[test]
fn user_serializes_camel_case_keys() {
    let user = User {
        id: 1,
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        headline: None,
        avatar_url: Some("/a.png".to_owned()),
    };
    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("\"avatarUrl\""));
    assert!(!json.contains("avatar_url"));
}

#[test]
fn article_maps_camel_case_keys() {
    let json = r#"{
        "id": 42,
        "title": "T",
        "content": "C",
        "tags": ["rust"],
        "imageUrl": "/uploads/c.jpg",
        "createdAt": "2025-08-05T09:30:00.000Z",
        "likes": 1,
        "comments": 2,
        "author": {"id": 7, "name": "Ada"}
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article.image_url.as_deref(), Some("/uploads/c.jpg"));
    assert_eq!(article.created_at, "2025-08-05T09:30:00.000Z");
}

// =============================================================
// Optional fields default when omitted
// =============================================================

#[test]
fn user_tolerates_missing_optional_fields() {
    let json = r#"{
        "id": 2,
        "name": "Grace",
        "email": "grace@example.com",
        "username": "grace"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.headline, None);
    assert_eq!(user.avatar_url, None);
}

#[test]
fn author_requires_only_id_and_name() {
    let author: Author = serde_json::from_str(r#"{"id": 9, "name": "Lin"}"#).unwrap();
    assert_eq!(author.username, None);
    assert_eq!(author.email, None);
    assert_eq!(author.avatar_url, None);
}

#[test]
fn article_defaults_counts_and_tags() {
    let json = r#"{
        "id": 1,
        "title": "T",
        "content": "C",
        "createdAt": "2025-01-01",
        "author": {"id": 7, "name": "Ada"}
    }"#;
    let article: Article = serde_json::from_str(json).unwrap();
    assert_eq!(article.likes, 0);
    assert_eq!(article.comments, 0);
    assert!(article.tags.is_empty());
    assert_eq!(article.image_url, None);
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn paginated_articles_decode() {
    let article_json = serde_json::to_string(&make_article()).unwrap();
    let json = format!(r#"{{"data": [{article_json}], "total": 25, "page": 2, "lastPage": 3}}"#);
    let page: Paginated<Article> = serde_json::from_str(&json).unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total, 25);
    assert_eq!(page.page, 2);
    assert_eq!(page.last_page, 3);
}

#[test]
fn public_profile_carries_posts_envelope() {
    let json = r#"{
        "id": 7,
        "name": "Ada",
        "headline": null,
        "avatarUrl": null,
        "posts": {"data": [], "total": 0, "page": 1, "lastPage": 1}
    }"#;
    let profile: PublicProfile = serde_json::from_str(json).unwrap();
    assert!(profile.posts.data.is_empty());
    assert_eq!(profile.posts.last_page, 1);
}

#[test]
fn login_response_decodes_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token": "abc.def.ghi"}"#).unwrap();
    assert_eq!(resp.token, "abc.def.ghi");
}
