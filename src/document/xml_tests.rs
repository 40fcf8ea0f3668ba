use super::*;

#[test]
fn parse_scalar_children() {
    let doc = parse_document(
        "<icecast><hostname>stream.example.org</hostname><fileserve>1</fileserve></icecast>",
    )
    .unwrap();

    assert_eq!(
        doc.get("hostname").and_then(XmlValue::as_text),
        Some("stream.example.org")
    );
    assert_eq!(doc.get("fileserve").and_then(XmlValue::as_int), Some(1));
}

#[test]
fn parse_nested_block() {
    let doc = parse_document(
        "<icecast><limits><clients>100</clients><sources>2</sources></limits></icecast>",
    )
    .unwrap();

    let limits = doc.get("limits").unwrap();
    assert_eq!(limits.get("clients").and_then(XmlValue::as_int), Some(100));
    assert_eq!(limits.get("sources").and_then(XmlValue::as_int), Some(2));
}

#[test]
fn single_element_stays_bare_map() {
    let doc = parse_document(
        "<icecast><mount><mount-name>/live</mount-name></mount></icecast>",
    )
    .unwrap();

    let mount = doc.get("mount").unwrap();
    assert!(mount.as_map().is_some());
    assert_eq!(
        mount.get("mount-name").and_then(XmlValue::as_text),
        Some("/live")
    );
}

#[test]
fn repeated_elements_become_list() {
    let doc = parse_document(
        "<icecast>\
         <mount><mount-name>/live</mount-name></mount>\
         <mount><mount-name>/backup</mount-name></mount>\
         </icecast>",
    )
    .unwrap();

    let mounts = doc.get("mount").unwrap().items();
    assert_eq!(mounts.len(), 2);
    assert_eq!(
        mounts[0].get("mount-name").and_then(XmlValue::as_text),
        Some("/live")
    );
    assert_eq!(
        mounts[1].get("mount-name").and_then(XmlValue::as_text),
        Some("/backup")
    );
}

#[test]
fn attributes_are_coerced_like_text() {
    let doc = parse_document(r#"<icecast><listen-socket port="8000"/></icecast>"#).unwrap();

    let socket = doc.get("listen-socket").unwrap();
    assert_eq!(socket.get("port").and_then(XmlValue::as_int), Some(8000));
}

#[test]
fn empty_element_is_empty_text() {
    let doc = parse_document("<icecast><hostname/></icecast>").unwrap();
    assert_eq!(
        doc.get("hostname").and_then(XmlValue::as_text),
        Some("")
    );
}

#[test]
fn whitespace_around_text_is_trimmed() {
    let doc = parse_document("<icecast><hostname>  localhost  </hostname></icecast>").unwrap();
    assert_eq!(
        doc.get("hostname").and_then(XmlValue::as_text),
        Some("localhost")
    );
}

#[test]
fn comments_and_declaration_are_skipped() {
    let doc = parse_document(
        "<?xml version=\"1.0\"?><!-- server config --><icecast><hostname>x</hostname></icecast>",
    )
    .unwrap();
    assert_eq!(doc.get("hostname").and_then(XmlValue::as_text), Some("x"));
}

#[test]
fn mismatched_end_tag_is_an_error() {
    let err = parse_document("<icecast><limits></icecast></limits>").unwrap_err();
    assert!(matches!(err, crate::error::IcecastGuardError::XmlParse(_)));
}

#[test]
fn unclosed_root_is_an_error() {
    let err = parse_document("<icecast><hostname>x</hostname>").unwrap_err();
    assert!(matches!(err, crate::error::IcecastGuardError::XmlParse(_)));
}

#[test]
fn empty_input_is_an_error() {
    let err = parse_document("").unwrap_err();
    assert!(err.to_string().contains("no root element"));
}
