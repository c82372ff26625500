use super::*;

#[test]
fn user_paths_embed_the_id() {
    assert_eq!(user_path(7), "/users/7");
    assert_eq!(profile_by_username_path("adalovelace"), "/users/by-username/adalovelace");
}

#[test]
fn post_paths_embed_the_id() {
    assert_eq!(post_path(42), "/posts/42");
}

#[test]
fn comment_paths_are_keyed_by_post_or_comment_id() {
    // The backend uses one prefix for both: POST/GET take a post id,
    // DELETE takes a comment id.
    assert_eq!(comments_path(9), "/comments/9");
}
