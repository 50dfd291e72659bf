use dxf_reader::*;

use crate::test_helpers::helpers::*;

#[test]
fn minimal_header_only_drawing() {
    let drawing = parse(&vec!["0", "SECTION", "2", "HEADER", "0", "ENDSEC", "0", "EOF"].join("\r\n"));
    assert_eq!(1, drawing.sections.len());
    assert_eq!("HEADER", drawing.sections[0].name);
    assert_eq!(0, drawing.entities().count());
    assert!(drawing.warnings.is_empty());
}

#[test]
fn empty_input_has_no_sections() {
    let drawing = parse("");
    assert!(drawing.sections.is_empty());
}

#[test]
fn header_variables_and_version() {
    let drawing = from_section(
        "HEADER",
        vec![
            "9", "$ACADVER", "1", "AC1027", //
            "9", "$INSBASE", "10", "1.0", "20", "2.0", "30", "3.0",
        ]
        .join("\r\n")
        .as_str(),
    );
    assert_eq!(Some(AcadVersion::R2013), drawing.version());
    let insbase = drawing.header_variable("$INSBASE").unwrap();
    assert_eq!(3, insbase.values.len());
    assert_eq!(Some(&CodePairValue::Double(1.0)), insbase.value());
    assert!(drawing.header_variable("$MISSING").is_none());
}

#[test]
fn unknown_version_is_none() {
    let drawing = from_section("HEADER", "9\r\n$ACADVER\r\n1\r\nAC9999");
    assert_eq!(None, drawing.version());
}

#[test]
fn tables_section() {
    let drawing = from_section(
        "TABLES",
        vec![
            "0", "TABLE", "2", "LAYER", "5", "2", "70", "2", //
            "0", "LAYER", "5", "10", "2", "0", "62", "7", //
            "0", "LAYER", "5", "11", "2", "walls", "62", "1", //
            "0", "ENDTAB",
        ]
        .join("\r\n")
        .as_str(),
    );
    let layers = drawing.table("LAYER").unwrap();
    assert_eq!(vec!["0", "walls"], layers.entry_names().collect::<Vec<_>>());
    assert!(drawing.table("LTYPE").is_none());
    match drawing.item_by_handle("11") {
        Some(DrawingItemRef::Raw(record)) => assert_eq!(Some("walls"), record.string_value(2)),
        other => panic!("expected the walls layer, found {:?}", other),
    }
    match drawing.item_by_handle("2") {
        Some(DrawingItemRef::Table(table)) => assert_eq!("LAYER", table.name),
        other => panic!("expected the layer table, found {:?}", other),
    }
}

#[test]
fn unknown_sections_are_preserved() {
    let drawing = from_section("THUMBNAILIMAGE", "90\r\n3\r\n310\r\nABCDEF");
    let section = drawing.section("THUMBNAILIMAGE").unwrap();
    assert_eq!(1, section.items.len());
    let record = section.items[0].as_raw().unwrap();
    assert_eq!(
        vec![CodePair::new_i32(90, 3), CodePair::new_str(310, "ABCDEF")],
        record.pairs
    );
}

#[test]
fn sections_keep_file_order() {
    let text = vec![
        "0", "SECTION", "2", "ENTITIES", "0", "ENDSEC", //
        "0", "SECTION", "2", "HEADER", "0", "ENDSEC", //
        "0", "SECTION", "2", "OBJECTS", "0", "ENDSEC", //
        "0", "EOF",
    ]
    .join("\r\n");
    let drawing = parse(&text);
    let names: Vec<_> = drawing.sections().map(|s| s.name.as_str()).collect();
    assert_eq!(vec!["ENTITIES", "HEADER", "OBJECTS"], names);
}

#[test]
fn comments_are_ignored() {
    let text = vec![
        "999", "written by a test", //
        "0", "SECTION", "999", "another comment", "2", "HEADER", "0", "ENDSEC", "0", "EOF",
    ]
    .join("\r\n");
    let drawing = parse(&text);
    assert_eq!(1, drawing.sections.len());
    assert_eq!("HEADER", drawing.sections[0].name);
}

#[test]
fn byte_order_mark_is_ignored() {
    let drawing = parse("\u{feff}0\nSECTION\n2\nHEADER\n0\nENDSEC\n0\nEOF\n");
    assert_eq!(1, drawing.sections.len());
}

#[test]
fn mixed_line_endings() {
    let drawing = parse("0\r\nSECTION\n2\r\nHEADER\n0\nENDSEC\r\n0\nEOF");
    assert_eq!(1, drawing.sections.len());
}

#[test]
fn trailing_code_without_value_is_truncated() {
    match Drawing::parse("0\nSECTION\n2\nHEADER\n0\nENDSEC\n0") {
        Err(DxfError::TruncatedInput { code, line }) => {
            assert_eq!(0, code);
            assert_eq!(7, line);
        }
        other => panic!("expected truncated input, found {:?}", other),
    }
}

#[test]
fn malformed_group_code_reports_its_line() {
    match Drawing::parse("0\nSECTION\n2\nENTITIES\nabc\nLINE\n") {
        Err(e @ DxfError::MalformedGroupCode { .. }) => assert_eq!(Some(5), e.line()),
        other => panic!("expected a malformed group code, found {:?}", other),
    }
}

#[test]
fn group_code_out_of_range() {
    assert!(matches!(
        Drawing::parse("1072\nvalue\n"),
        Err(DxfError::MalformedGroupCode { line: 1, .. })
    ));
}

#[test]
fn invalid_numeric_value_reports_the_value_line() {
    let text = wrap_section("ENTITIES", "0\r\nLINE\r\n10\r\nnot-a-number");
    match Drawing::parse(&text) {
        Err(DxfError::InvalidNumericValue { code, raw, line }) => {
            assert_eq!(10, code);
            assert_eq!("not-a-number", raw);
            assert_eq!(8, line);
        }
        other => panic!("expected an invalid number, found {:?}", other),
    }
}

#[test]
fn invalid_boolean_value() {
    let text = wrap_section("OBJECTS", "0\r\nTHING\r\n290\r\n2");
    assert!(matches!(
        Drawing::parse(&text),
        Err(DxfError::InvalidBooleanValue { code: 290, .. })
    ));
}

#[test]
fn unterminated_section_is_fatal() {
    let text = vec!["0", "SECTION", "2", "ENTITIES", "0", "LINE"].join("\r\n");
    assert!(matches!(
        Drawing::parse(&text),
        Err(DxfError::UnterminatedSection { line: 1, .. })
    ));
}

#[test]
fn missing_section_name_is_fatal() {
    let text = vec!["0", "SECTION", "0", "ENDSEC", "0", "EOF"].join("\r\n");
    assert!(matches!(
        Drawing::parse(&text),
        Err(DxfError::MissingSectionName { line: 3 })
    ));
}

#[test]
fn content_after_eof_is_ignored() {
    let text = vec![
        "0", "SECTION", "2", "HEADER", "0", "ENDSEC", "0", "EOF", //
        "0", "SECTION", "2", "ENTITIES",
    ]
    .join("\r\n");
    let drawing = parse(&text);
    assert_eq!(1, drawing.sections.len());
}

#[test]
fn pairs_outside_of_sections_become_a_preamble() {
    let text = vec![
        "0", "JUNK", "1", "value", //
        "0", "SECTION", "2", "HEADER", "0", "ENDSEC", "0", "EOF",
    ]
    .join("\r\n");
    let drawing = parse(&text);
    assert_eq!(2, drawing.sections.len());
    assert_eq!(PREAMBLE_SECTION_NAME, drawing.sections[0].name);
    assert_eq!(
        Some("JUNK"),
        drawing.sections[0].items[0].as_raw().and_then(RawRecord::kind)
    );
}

#[test]
fn load_windows_1252_bytes() {
    let mut bytes: Vec<u8> = b"0\r\nSECTION\r\n2\r\nENTITIES\r\n0\r\nTEXT\r\n1\r\n".to_vec();
    bytes.push(0xE9); // e with acute accent
    bytes.extend_from_slice(b"\r\n0\r\nENDSEC\r\n0\r\nEOF\r\n");
    let drawing = Drawing::load(&mut bytes.as_slice()).unwrap();
    let text = drawing.entities().next().unwrap();
    match text.specific {
        entities::EntityType::Text(ref t) => assert_eq!("\u{e9}", t.value),
        _ => panic!("expected text"),
    }
}

#[test]
fn load_file_that_does_not_exist() {
    assert!(matches!(
        Drawing::load_file("this/path/does/not/exist.dxf"),
        Err(DxfError::Io(_))
    ));
}
