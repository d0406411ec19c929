use crate::error::FailureReason;
use crate::remote_file::{DirectoryEntry, EntryKind};
use crate::tests::DOCS_LISTING;
use crate::webdav::traits::parse_directory_listing;

const DOCS_HREF: &str = "/remote.php/dav/files/alice/docs";

fn parse(xml: &str, self_href: &str) -> Vec<DirectoryEntry> {
    parse_directory_listing(xml, self_href).unwrap()
}

/// 用单个 response 片段拼出完整 multistatus
fn multistatus(responses: &str) -> String {
    format!(r#"<?xml version="1.0"?><d:multistatus xmlns:d="DAV:">{responses}</d:multistatus>"#)
}

#[test]
fn skips_queried_directory_and_keeps_document_order() {
    let entries = parse(DOCS_LISTING, DOCS_HREF);

    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["photos", "report.pdf"]);
}

#[test]
fn folder_entries_have_no_size_or_mime() {
    let entries = parse(DOCS_LISTING, DOCS_HREF);
    let photos = &entries[0];

    assert_eq!(photos.kind, EntryKind::Folder);
    assert!(photos.is_dir());
    assert_eq!(photos.size, None);
    assert_eq!(photos.mime_type, None);
    assert_eq!(photos.last_modified.as_deref(), Some("Mon, 13 Oct 2025 10:30:00 GMT"));
}

#[test]
fn file_entries_carry_size_mime_and_raw_last_modified() {
    let entries = parse(DOCS_LISTING, DOCS_HREF);
    let report = &entries[1];

    assert_eq!(
        report,
        &DirectoryEntry {
            name: "report.pdf".to_string(),
            kind: EntryKind::File,
            size: Some(123),
            last_modified: Some("Sun, 12 Oct 2025 09:15:00 GMT".to_string()),
            mime_type: Some("application/pdf".to_string()),
        }
    );

    let parsed = report.last_modified_at().unwrap();
    assert_eq!(parsed.to_rfc3339(), "2025-10-12T09:15:00+00:00");
}

#[test]
fn without_self_entry_nothing_is_skipped() {
    let entries = parse(DOCS_LISTING, "/remote.php/dav/files/alice/elsewhere");
    assert_eq!(entries.len(), 3);
}

#[test]
fn child_with_same_name_as_parent_is_kept() {
    let xml = multistatus(
        r#"
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/</d:href>
          <d:propstat><d:prop><d:resourcetype><d:collection/></d:resourcetype></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/docs/</d:href>
          <d:propstat><d:prop><d:resourcetype><d:collection/></d:resourcetype></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>"#,
    );

    let entries = parse(&xml, DOCS_HREF);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "docs");
    assert_eq!(entries[0].kind, EntryKind::Folder);
}

#[test]
fn missing_display_name_falls_back_to_decoded_href_segment() {
    let xml = multistatus(
        r#"
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/Quarterly%20Plan.md</d:href>
          <d:propstat><d:prop><d:getcontentlength>42</d:getcontentlength><d:resourcetype/></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/archive/</d:href>
          <d:propstat><d:prop><d:resourcetype><d:collection/></d:resourcetype></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>"#,
    );

    let entries = parse(&xml, DOCS_HREF);
    assert_eq!(entries[0].name, "Quarterly Plan.md");
    assert_eq!(entries[0].size, Some(42));
    assert_eq!(entries[1].name, "archive");
}

#[test]
fn unparsable_content_length_leaves_size_unset() {
    let xml = multistatus(
        r#"
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/odd.bin</d:href>
          <d:propstat><d:prop><d:displayname>odd.bin</d:displayname><d:getcontentlength>lots</d:getcontentlength><d:getcontenttype>application/octet-stream</d:getcontenttype><d:resourcetype/></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/empty.txt</d:href>
          <d:propstat><d:prop><d:displayname>empty.txt</d:displayname><d:resourcetype/></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>"#,
    );

    let entries = parse(&xml, DOCS_HREF);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, EntryKind::File);
    assert_eq!(entries[0].size, None);
    assert_eq!(entries[0].mime_type.as_deref(), Some("application/octet-stream"));
    assert_eq!(entries[1].size, None);
    assert_eq!(entries[1].last_modified, None);
}

#[test]
fn properties_come_from_the_successful_propstat() {
    let xml = multistatus(
        r#"
        <d:response>
          <d:href>/remote.php/dav/files/alice/docs/notes.txt</d:href>
          <d:propstat><d:prop><d:getcontenttype/></d:prop><d:status>HTTP/1.1 404 Not Found</d:status></d:propstat>
          <d:propstat><d:prop><d:displayname>notes.txt</d:displayname><d:getcontenttype>text/plain</d:getcontenttype><d:getcontentlength>7</d:getcontentlength><d:resourcetype/></d:prop><d:status>HTTP/1.1 200 OK</d:status></d:propstat>
        </d:response>"#,
    );

    let entries = parse(&xml, DOCS_HREF);
    assert_eq!(entries[0].mime_type.as_deref(), Some("text/plain"));
    assert_eq!(entries[0].size, Some(7));
}

#[test]
fn uppercase_namespace_prefix_is_accepted() {
    let xml = r#"<?xml version="1.0"?>
<D:multistatus xmlns:D="DAV:">
  <D:response>
    <D:href>/remote.php/dav/files/alice/docs/a.txt</D:href>
    <D:propstat><D:prop><D:getcontentlength>5</D:getcontentlength><D:resourcetype/></D:prop><D:status>HTTP/1.1 200 OK</D:status></D:propstat>
  </D:response>
</D:multistatus>"#;

    let entries = parse(xml, DOCS_HREF);
    assert_eq!(entries[0].name, "a.txt");
    assert_eq!(entries[0].size, Some(5));
}

#[test]
fn empty_multistatus_yields_no_entries() {
    assert!(parse(&multistatus(""), DOCS_HREF).is_empty());
}

#[test]
fn malformed_xml_is_a_parse_failure() {
    let truncated = r#"<?xml version="1.0"?><d:multistatus xmlns:d="DAV:"><d:response><d:href>/x"#;

    let err = parse_directory_listing(truncated, DOCS_HREF).unwrap_err();
    assert!(matches!(err, FailureReason::Xml(_)), "got {err:?}");
}
