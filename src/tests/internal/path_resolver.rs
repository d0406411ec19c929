use crate::config::NextcloudConfig;
use crate::path::{dav_url, normalize_href, ocs_shares_url, resolve_remote_path, self_href};

fn config() -> NextcloudConfig {
    NextcloudConfig::new("https://cloud.example.com/", "alice", "secret").unwrap()
}

#[test]
fn resolve_without_usage_folder_strips_one_leading_slash() {
    assert_eq!(resolve_remote_path("docs/a.txt", None), "docs/a.txt");
    assert_eq!(resolve_remote_path("/docs/a.txt", None), "docs/a.txt");
    // 只去掉一个
    assert_eq!(resolve_remote_path("//docs", None), "/docs");
    assert_eq!(resolve_remote_path("", None), "");
}

#[test]
fn resolve_with_usage_folder_prefixes_folder() {
    for (input, expected) in [
        ("docs/a.txt", "mcp/docs/a.txt"),
        ("/docs/a.txt", "mcp/docs/a.txt"),
        ("", "mcp/"),
        ("/", "mcp/"),
    ] {
        assert_eq!(resolve_remote_path(input, Some("mcp")), expected, "input: {input:?}");
    }
}

#[test]
fn resolve_keeps_dot_segments() {
    assert_eq!(resolve_remote_path("../x/./y", Some("base")), "base/../x/./y");
}

#[test]
fn dav_url_joins_instance_user_and_path() {
    let config = config();
    assert_eq!(
        dav_url(&config, "docs/a.txt"),
        "https://cloud.example.com/remote.php/dav/files/alice/docs/a.txt"
    );
    assert_eq!(
        ocs_shares_url(&config),
        "https://cloud.example.com/ocs/v2.php/apps/files_sharing/api/v1/shares"
    );
}

#[test]
fn dav_url_percent_encodes_each_segment() {
    let config = config();
    assert_eq!(
        dav_url(&config, "my docs/ü?#.txt"),
        "https://cloud.example.com/remote.php/dav/files/alice/my%20docs/%C3%BC%3F%23.txt"
    );
}

#[test]
fn dav_url_escapes_backslash_and_brackets() {
    let config = config();
    assert_eq!(
        dav_url(&config, "a\\b.txt"),
        "https://cloud.example.com/remote.php/dav/files/alice/a%5Cb.txt"
    );
    assert_eq!(
        dav_url(&config, "[v1]^|x"),
        "https://cloud.example.com/remote.php/dav/files/alice/%5Bv1%5D%5E%7Cx"
    );
}

#[test]
fn normalize_href_accepts_paths_and_absolute_urls() {
    assert_eq!(
        normalize_href("/remote.php/dav/files/alice/my%20docs/"),
        "/remote.php/dav/files/alice/my docs"
    );
    assert_eq!(
        normalize_href("https://cloud.example.com/remote.php/dav/files/alice/docs/"),
        "/remote.php/dav/files/alice/docs"
    );
}

#[test]
fn self_href_matches_server_href_of_the_directory() {
    let config = config();
    assert_eq!(self_href(&config, "my docs"), normalize_href("/remote.php/dav/files/alice/my%20docs/"));
    // 列根目录时 remote_path 为空
    assert_eq!(self_href(&config, ""), "/remote.php/dav/files/alice");
}

#[test]
fn self_href_includes_instance_sub_path() {
    let config =
        NextcloudConfig::new("https://example.com/nextcloud", "alice", "secret").unwrap();
    assert_eq!(self_href(&config, "docs"), "/nextcloud/remote.php/dav/files/alice/docs");
}
