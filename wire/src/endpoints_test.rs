use super::*;

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://api/", "/requests/"), "http://api/requests/");
    assert_eq!(join_url("http://api", "requests/"), "http://api/requests/");
}

#[test]
fn oauth_start_formats_provider() {
    assert_eq!(oauth_start("github"), "/auth/github");
}

#[test]
fn conversation_paths() {
    assert_eq!(conversation(5), "/conversations/5");
    assert_eq!(conversation_read(5), "/conversations/5/read");
    assert_eq!(conversation_messages(5), "/conversations/5/messages");
}

#[test]
fn collaboration_paths_carry_access_token() {
    assert_eq!(collaboration_session(3, "tok"), "/collaboration/sessions/3?access_token=tok");
    assert_eq!(
        collaboration_participants(3, "tok"),
        "/collaboration/sessions/3/participants?access_token=tok"
    );
    assert_eq!(
        collaboration_status(3, "tok"),
        "/collaboration/sessions/3/status?access_token=tok"
    );
}

#[test]
fn collaboration_messages_after_includes_cursor() {
    assert_eq!(
        collaboration_messages_after(3, "tok", 42),
        "/collaboration/sessions/3/messages?access_token=tok&after_id=42"
    );
}

#[test]
fn access_token_is_percent_encoded() {
    assert_eq!(
        collaboration_session(1, "a+b/c="),
        "/collaboration/sessions/1?access_token=a%2Bb%2Fc%3D"
    );
}

#[test]
fn products_search_is_optional_and_encoded() {
    assert_eq!(products(None), "/marketplace/products");
    assert_eq!(products(Some("   ")), "/marketplace/products");
    assert_eq!(products(Some("ui kit")), "/marketplace/products?search=ui%20kit");
}

#[test]
fn product_action_paths() {
    assert_eq!(product(8), "/marketplace/products/8");
    assert_eq!(product_download(8), "/marketplace/products/8/download");
    assert_eq!(product_purchase(8), "/marketplace/products/8/purchase");
}

#[test]
fn profile_and_request_paths() {
    assert_eq!(developer(2), "/profile/developers/2");
    assert_eq!(showcase(4), "/profile/showcase/4");
    assert_eq!(request(6), "/requests/6");
    assert_eq!(request_share(6), "/requests/6/share");
    assert_eq!(project(1), "/projects/1");
}
