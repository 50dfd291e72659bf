use dxf_reader::*;

use crate::test_helpers::helpers::*;

#[test]
fn header_only_json() {
    let json = convert(&vec!["0", "SECTION", "2", "HEADER", "0", "ENDSEC", "0", "EOF"].join("\r\n")).unwrap();
    assert_eq!(
        r#"{"sections":[{"name":"HEADER","items":[]}],"warnings":[]}"#,
        json
    );
}

#[test]
fn line_json() {
    let text = wrap_section(
        "ENTITIES",
        &vec![
            "0", "LINE", "5", "2A", "8", "0", //
            "10", "0", "20", "0", "30", "0", //
            "11", "5", "21", "5", "31", "0",
        ]
        .join("\r\n"),
    );
    let json = convert(&text).unwrap();
    assert_eq!(
        concat!(
            r#"{"sections":[{"name":"ENTITIES","items":[{"item":"entity","kind":"LINE","#,
            r#""start_point":{"x":0.0,"y":0.0,"z":0.0},"end_point":{"x":5.0,"y":5.0,"z":0.0},"#,
            r#""thickness":0.0,"extrusion_direction":{"x":0.0,"y":0.0,"z":1.0},"#,
            r#""handle":"2A","layer":"0"}]}],"warnings":[]}"#
        ),
        json
    );
}

#[test]
fn reordered_fields_give_identical_json() {
    let first = wrap_section(
        "ENTITIES",
        &vec![
            "0", "LINE", "8", "walls", "62", "1", "370", "13", //
            "10", "1.5", "20", "2.5", "30", "0", "11", "3", "21", "4", "31", "0",
        ]
        .join("\r\n"),
    );
    let second = wrap_section(
        "ENTITIES",
        &vec![
            "0", "LINE", "31", "0", "11", "3", "370", "13", "20", "2.5", //
            "62", "1", "30", "0", "10", "1.5", "21", "4", "8", "walls",
        ]
        .join("\r\n"),
    );
    assert_eq!(convert(&first).unwrap(), convert(&second).unwrap());
}

#[test]
fn common_properties_are_ordered_by_code() {
    let drawing = from_section(
        "ENTITIES",
        "0\r\nPOINT\r\n420\r\n255\r\n62\r\n3\r\n370\r\n-1",
    );
    assert_json_contains(
        &drawing,
        r#""common_properties":{"62":3,"370":-1,"420":255}"#,
    );
}

#[test]
fn raw_records_keep_every_pair() {
    let text = wrap_section(
        "ENTITIES",
        &vec![
            "0", "LEADER", "5", "3A", "100", "AcDbEntity", "8", "0", //
            "10", "1.25", "20", "2.0", "30", "0.0", "71", "1", "290", "1",
        ]
        .join("\r\n"),
    );
    let json = convert(&text).unwrap();
    assert!(json.contains(concat!(
        r#"{"item":"raw","pairs":[[0,"LEADER"],[5,"3A"],[100,"AcDbEntity"],[8,"0"],"#,
        r#"[10,1.25],[20,2.0],[30,0.0],[71,1],[290,true]]}"#
    )));
    assert!(json.contains(r#"{"warning":"UnsupportedConstruct","kind":"LEADER","line":5}"#));
}

#[test]
fn converting_twice_is_identical() {
    let text = wrap_section(
        "ENTITIES",
        &vec![
            "0", "CIRCLE", "10", "0.1", "40", "0.30000000000000004", //
            "0", "LWPOLYLINE", "10", "1", "20", "2", "10", "3", "20", "4", //
            "0", "DIMENSION", "1", "text",
        ]
        .join("\r\n"),
    );
    let first = convert(&text).unwrap();
    let second = convert(&text).unwrap();
    assert_eq!(first, second);
    assert!(first.contains(r#""radius":0.3"#));
}

#[test]
fn floats_are_rounded() {
    let drawing = from_section("ENTITIES", "0\r\nCIRCLE\r\n40\r\n1.00000000049\r\n10\r\n-0.0");
    assert_json_contains(&drawing, r#""center":{"x":0.0,"y":0.0,"z":0.0},"radius":1.0,"#);
}

#[test]
fn small_floats_are_not_flushed_to_zero() {
    let drawing = from_section("ENTITIES", "0\r\nCIRCLE\r\n40\r\n1.5e-10\r\n20\r\n-3.25E-12");
    assert_json_contains(&drawing, r#""center":{"x":0.0,"y":-3.25e-12,"z":0.0},"radius":1.5e-10,"#);
}

#[test]
fn unresolved_reference_in_json() {
    let text = vec![
        "0", "SECTION", "2", "BLOCKS", "0", "ENDSEC", //
        "0", "SECTION", "2", "ENTITIES", "0", "INSERT", "2", "MISSING", "0", "ENDSEC", //
        "0", "EOF",
    ]
    .join("\r\n");
    let json = convert(&text).unwrap();
    assert!(json.ends_with(
        r#""warnings":[{"warning":"UnresolvedBlockReference","block_name":"MISSING","line":11}]}"#
    ));
}

#[test]
fn pretty_json() {
    let options = ConvertOptions {
        pretty: true,
        ..Default::default()
    };
    let json = convert_with_options(&wrap_section("HEADER", ""), &options).unwrap();
    assert!(json.starts_with("{\n  \"sections\": [\n"));
}

#[test]
fn options_from_json() {
    let options: ConvertOptions =
        serde_json::from_str(r#"{"duplicate_scalars":"first_wins","pretty":false}"#).unwrap();
    let text = wrap_section("ENTITIES", "0\r\nCIRCLE\r\n40\r\n1.0\r\n40\r\n2.0");
    let json = convert_with_options(&text, &options).unwrap();
    assert!(json.contains(r#""radius":1.0"#));
}

#[test]
fn errors_are_returned_not_serialized() {
    match convert("0\nSECTION\n2\nENTITIES\n0\nLINE\n10\nabc\n") {
        Err(DxfError::InvalidNumericValue { line, .. }) => assert_eq!(8, line),
        other => panic!("expected an invalid number, found {:?}", other),
    }
}

#[test]
fn sli_mesh_json() {
    let text = concat!(
        r#"<Mesh><NodeCoords NdX="0" NdY="0" NdZ="0"/><NodeCoords NdX="5" NdY="5" NdZ="0"/>"#,
        r#"<Element Type="1"><Nodes N1="1" N2="2"/></Element></Mesh>"#
    );
    assert_eq!(
        concat!(
            r#"{"sections":[{"name":"ENTITIES","items":[{"item":"entity","kind":"LINE","#,
            r#""start_point":{"x":0.0,"y":0.0,"z":0.0},"end_point":{"x":5.0,"y":5.0,"z":0.0},"#,
            r#""thickness":0.0,"extrusion_direction":{"x":0.0,"y":0.0,"z":1.0}}]}],"warnings":[]}"#
        ),
        convert_sli(text).unwrap()
    );
}

#[test]
fn sli_errors_carry_the_line() {
    match convert_sli("<Mesh>\n<NodeCoords NdX=\"1\" NdY=\"x\" NdZ=\"0\"/>\n</Mesh>") {
        Err(e) => assert_eq!(Some(2), e.line()),
        Ok(json) => panic!("expected an error, found {}", json),
    }
}

fn every_modeled_kind() -> String {
    vec![
        "0", "SECTION", "2", "BLOCKS", //
        "0", "BLOCK", "2", "TAG", "70", "2", //
        "0", "ATTDEF", "2", "T", "3", "Tag?", "1", "v", //
        "0", "ENDBLK", //
        "0", "ENDSEC", //
        "0", "SECTION", "2", "ENTITIES", //
        "0", "LINE", "11", "1.0", //
        "0", "POINT", "50", "45.0", //
        "0", "CIRCLE", "40", "2.0", //
        "0", "ARC", "40", "2.0", "51", "90.0", //
        "0", "ELLIPSE", "11", "2.0", "40", "0.5", //
        "0", "RAY", "11", "1.0", //
        "0", "XLINE", "11", "1.0", //
        "0", "LWPOLYLINE", "90", "2", "10", "1.0", "20", "2.0", "10", "3.0", "20", "4.0", //
        "0", "POLYLINE", "66", "1", "70", "8", //
        "0", "VERTEX", "10", "1.0", "20", "1.0", "30", "1.0", //
        "0", "SEQEND", //
        "0", "TEXT", "1", "hello", //
        "0", "MTEXT", "1", "note", //
        "0", "INSERT", "2", "TAG", "66", "1", //
        "0", "ATTRIB", "2", "T", "1", "value", //
        "0", "SEQEND", //
        "0", "SOLID", "13", "1.0", //
        "0", "TRACE", "13", "1.0", //
        "0", "3DFACE", "70", "1", //
        "0", "SPLINE", "40", "0.0", "40", "1.0", //
        "10", "0.0", "20", "0.0", "30", "0.0", "10", "1.0", "20", "1.0", "30", "0.0", //
        "0", "ENDSEC", //
        "0", "EOF",
    ]
    .join("\r\n")
}

fn collect_kinds(items: &serde_json::Value, kinds: &mut Vec<String>) {
    for item in items.as_array().unwrap() {
        if let Some(kind) = item["kind"].as_str() {
            kinds.push(String::from(kind));
        }
        if item["children"].is_array() {
            collect_kinds(&item["children"], kinds);
        }
    }
}

fn assert_in_order(json: &str, expected: &[&str]) {
    let mut position = 0;
    for text in expected {
        match json[position..].find(text) {
            Some(offset) => position += offset + text.len(),
            None => panic!("expected to find {} after offset {} in\n{}", text, position, json),
        }
    }
}

#[test]
fn every_modeled_kind_round_trips() {
    let text = every_modeled_kind();
    let json = convert(&text).unwrap();
    assert_eq!(json, convert(&text).unwrap());

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["warnings"].as_array().unwrap().is_empty());
    let mut kinds = vec![];
    for section in value["sections"].as_array().unwrap() {
        collect_kinds(&section["items"], &mut kinds);
    }
    assert_eq!(
        vec![
            "BLOCK", "ATTDEF", "LINE", "POINT", "CIRCLE", "ARC", "ELLIPSE", "RAY", "XLINE",
            "LWPOLYLINE", "POLYLINE", "VERTEX", "TEXT", "MTEXT", "INSERT", "ATTRIB", "SOLID",
            "TRACE", "3DFACE", "SPLINE",
        ],
        kinds
    );

    // the serializer's own output parses back to the same document
    let reserialized = serde_json::to_string(&value).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&reserialized).unwrap();
    assert_eq!(value, reparsed);

    assert_in_order(
        &json,
        &[
            r#""kind":"BLOCK","name":"TAG""#,
            r#""end_block":{"pairs":[[0,"ENDBLK"]]}"#,
            r#""kind":"ATTDEF","attribute_tag":"T""#,
            r#""prompt":"Tag?""#,
            r#""kind":"LINE","start_point":"#,
            r#""end_point":{"x":1.0,"#,
            r#""extrusion_direction":"#,
            r#""kind":"POINT","location":"#,
            r#""angle":45.0,"#,
            r#""kind":"CIRCLE","center":"#,
            r#""radius":2.0,"#,
            r#""kind":"ARC","center":"#,
            r#""end_angle":90.0,"#,
            r#""kind":"ELLIPSE","center":"#,
            r#""major_axis":{"x":2.0,"#,
            r#""minor_axis_ratio":0.5,"#,
            r#""normal":"#,
            r#""kind":"RAY","first_point":"#,
            r#""unit_direction":{"x":1.0,"#,
            r#""kind":"XLINE","first_point":"#,
            r#""unit_direction":{"x":1.0,"#,
            r#""kind":"LWPOLYLINE","flags":0,"vertex_count":2,"#,
            r#""vertices":[{"x":1.0,"y":2.0,"#,
            r#"{"x":3.0,"y":4.0,"#,
            r#""kind":"POLYLINE","flags":8,"#,
            r#""has_vertices":true,"#,
            r#""seqend":{"pairs":[[0,"SEQEND"]]}"#,
            r#""children":[{"item":"entity","kind":"VERTEX","location":{"x":1.0,"y":1.0,"z":1.0}"#,
            r#""kind":"TEXT","location":"#,
            r#""value":"hello""#,
            r#""kind":"MTEXT","insertion_point":"#,
            r#""text":"note""#,
            r#""kind":"INSERT","name":"TAG""#,
            r#""has_attributes":true,"#,
            r#""seqend":{"pairs":[[0,"SEQEND"]]}"#,
            r#""children":[{"item":"entity","kind":"ATTRIB","attribute_tag":"T","value":"value""#,
            r#""kind":"SOLID","first_corner":"#,
            r#""fourth_corner":{"x":1.0,"#,
            r#""kind":"TRACE","first_corner":"#,
            r#""fourth_corner":{"x":1.0,"#,
            r#""kind":"3DFACE","first_corner":"#,
            r#""edge_flags":1"#,
            r#""kind":"SPLINE","normal":"#,
            r#""knot_values":[0.0,1.0]"#,
            r#""control_points":[{"x":0.0,"y":0.0,"z":0.0},{"x":1.0,"y":1.0,"z":0.0}]"#,
        ],
    );
}
