use maxdefense_catalog::{load_catalog, parse_catalog, CatalogError};
use std::io::{Cursor, Write};

const HEADER: &str = "description^gold^defense\n";

#[test]
fn test_parse_catalog() {
    let source = format!(
        "{}new enchanted helmet^35^12.5\nold leather boots^4^1\nsteel gauntlets^18^7.25\n",
        HEADER
    );
    let catalog = parse_catalog(Cursor::new(source)).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog[0].description(), "new enchanted helmet");
    assert_eq!(catalog[0].cost(), 35);
    assert_eq!(catalog[0].defense(), 12.5);
    assert_eq!(catalog[1].description(), "old leather boots");
    assert_eq!(catalog[2].defense(), 7.25);
}

#[test]
fn test_header_only() {
    assert!(parse_catalog(Cursor::new(HEADER)).unwrap().is_empty());
    assert!(parse_catalog(Cursor::new("")).unwrap().is_empty());
}

#[test]
fn test_header_is_never_parsed() {
    // A header with the wrong field count is still ignored
    let catalog = parse_catalog(Cursor::new("a^b\nshield^10^3\n")).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_skips_unparseable_rows() {
    let source = format!(
        "{}cloak^cheap^1\nbuckler^3^lots\n^4^2\nrags^0^0\nmail^12^-1\nhelm^9^4\n",
        HEADER
    );
    let catalog = parse_catalog(Cursor::new(source)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].description(), "helm");
}

#[test]
fn test_cost_is_truncated() {
    let source = format!("{}greaves^12.9^3\ncap^0.5^1\n", HEADER);
    let catalog = parse_catalog(Cursor::new(source)).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].cost(), 12);
}

#[test]
fn test_crlf_line_endings() {
    let source = "description^gold^defense\r\nhelm^9^4.5\r\nboots^2^1\r\n";
    let catalog = parse_catalog(Cursor::new(source)).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].defense(), 4.5);
    assert_eq!(catalog[1].defense(), 1.0);
}

#[test]
fn test_wrong_field_count_fails() {
    let source = format!("{}helm^9^4\nboots^2\nshield^5^5\n", HEADER);
    match parse_catalog(Cursor::new(source)) {
        Err(CatalogError::FieldCount { line, found, text }) => {
            assert_eq!(line, 3);
            assert_eq!(found, 2);
            assert_eq!(text, "boots^2");
        }
        other => panic!("Expected field count error, got {:?}", other),
    }

    let source = format!("{}helm^9^4^extra\n", HEADER);
    assert!(matches!(
        parse_catalog(Cursor::new(source)),
        Err(CatalogError::FieldCount { found: 4, .. })
    ));
}

#[test]
fn test_load_catalog_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}helm^9^4\nboots^2^1\n", HEADER).unwrap();
    file.flush().unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    match load_catalog(&path) {
        Err(CatalogError::Io { path: error_path, .. }) => assert_eq!(error_path, path),
        other => panic!("Expected io error, got {:?}", other),
    }
}

#[test]
fn test_write_generated_catalog() {
    let catalog = maxdefense_catalog::generate_catalog(&[4; 32], 25).unwrap();
    let mut buffer = Vec::new();
    maxdefense_catalog::write_catalog(&mut buffer, &catalog).unwrap();

    let text = String::from_utf8(buffer.clone()).unwrap();
    assert!(text.starts_with("description^gold^defense\n"));
    assert_eq!(parse_catalog(Cursor::new(buffer)).unwrap(), catalog);
}
