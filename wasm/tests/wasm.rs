use dxf_reader_wasm::*;
use wasm_bindgen_test::*;

const HEADER_ONLY: &str = "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n0\nENDSEC\n0\nEOF\n";

fn parse(json: &str) -> serde_json::Value {
    serde_json::from_str(json).unwrap()
}

#[wasm_bindgen_test]
fn converts_header() {
    let value = parse(&dxf_to_json(HEADER_ONLY));
    assert_eq!("HEADER", value["sections"][0]["name"]);
    assert_eq!("$ACADVER", value["sections"][0]["items"][0]["name"]);
    assert!(value["warnings"].as_array().unwrap().is_empty());
}

#[wasm_bindgen_test]
fn reports_errors_as_json() {
    let value = parse(&dxf_to_json("0\nSECTION\n2\nENTITIES\n0\nLINE\n10\nabc\n"));
    assert!(value["error"].as_str().unwrap().contains("not a valid number"));
    assert_eq!(8, value["line"]);
}

#[wasm_bindgen_test]
fn honors_options() {
    let text = "0\nSECTION\n2\nENTITIES\n0\nCIRCLE\n40\n1.0\n40\n2.0\n0\nENDSEC\n0\nEOF\n";
    let json = dxf_to_json_with_options(text, r#"{"duplicate_scalars":"first_wins"}"#);
    assert_eq!(1.0, parse(&json)["sections"][0]["items"][0]["radius"]);
    let json = dxf_to_json_with_options(text, "{}");
    assert_eq!(2.0, parse(&json)["sections"][0]["items"][0]["radius"]);
}

#[wasm_bindgen_test]
fn rejects_bad_options() {
    let value = parse(&dxf_to_json_with_options(HEADER_ONLY, "not json"));
    assert!(value["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid options"));
    assert!(value.get("line").is_none());
}

#[wasm_bindgen_test]
fn converts_sli() {
    let text = concat!(
        r#"<Mesh><NodeCoords NdX="0" NdY="0" NdZ="0"/><NodeCoords NdX="1" NdY="0" NdZ="0"/>"#,
        r#"<NodeCoords NdX="1" NdY="1" NdZ="0"/>"#,
        r#"<Element Type="2"><Nodes N1="1" N2="2" N3="3"/></Element></Mesh>"#
    );
    let value = parse(&sli_to_json(text));
    let face = &value["sections"][0]["items"][0];
    assert_eq!("3DFACE", face["kind"]);
    assert_eq!(1.0, face["third_corner"]["y"]);
    assert_eq!(1.0, face["fourth_corner"]["y"]);
}

#[wasm_bindgen_test]
fn reports_sli_errors_as_json() {
    let value = parse(&sli_to_json("<Mesh>\n<Element/>\n</Mesh>"));
    assert!(value["error"].as_str().unwrap().contains("'Type'"));
    assert_eq!(2, value["line"]);
}
