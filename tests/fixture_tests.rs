use std::fs;
use std::path::PathBuf;

use dxf_reader::entities::*;
use dxf_reader::*;
use glob::glob;

fn fixture_paths() -> Vec<PathBuf> {
    let pattern = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/*.dxf");
    let paths: Vec<PathBuf> = glob(pattern)
        .expect("valid glob pattern")
        .map(|p| p.expect("readable fixture path"))
        .collect();
    assert!(!paths.is_empty(), "no fixtures found");
    paths
}

fn fixture(name: &str) -> Drawing {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    Drawing::load_file(&path).unwrap()
}

#[test]
fn every_fixture_converts_to_valid_json() {
    for path in fixture_paths() {
        let text = fs::read_to_string(&path).unwrap();
        let json = match convert(&text) {
            Ok(json) => json,
            Err(e) => panic!("unable to convert {}: {}", path.display(), e),
        };
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["sections"].is_array(), "{}", path.display());
        assert!(value["warnings"].is_array(), "{}", path.display());
    }
}

#[test]
fn every_fixture_converts_deterministically() {
    for path in fixture_paths() {
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            convert(&text).unwrap(),
            convert(&text).unwrap(),
            "{}",
            path.display()
        );
    }
}

#[test]
fn house_fixture() {
    let drawing = fixture("house.dxf");
    assert_eq!(Some(AcadVersion::R2000), drawing.version());
    let names: Vec<_> = drawing.sections().map(|s| s.name.as_str()).collect();
    assert_eq!(vec!["HEADER", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"], names);

    let layers = drawing.table("LAYER").unwrap();
    assert_eq!(vec!["0", "walls"], layers.entry_names().collect::<Vec<_>>());

    let door = drawing.block("DOOR").unwrap();
    let contents: Vec<_> = door.child_entities().map(Entity::kind).collect();
    assert_eq!(vec!["LINE", "ARC", "ATTDEF"], contents);

    let kinds: Vec<_> = drawing.entities().map(Entity::kind).collect();
    assert_eq!(vec!["LWPOLYLINE", "INSERT", "TEXT", "MTEXT"], kinds);

    let insert = drawing.entities().nth(1).unwrap();
    assert_eq!(1, insert.child_entities().count());

    match drawing.item_by_handle("35") {
        Some(DrawingItemRef::Entity(e)) => match e.specific {
            EntityType::MText(ref mtext) => assert_eq!("Kitchen and dining area", mtext.full_text()),
            _ => panic!("expected mtext"),
        },
        other => panic!("expected mtext, found {:?}", other),
    }

    assert_eq!(
        vec![DxfWarning::UnsupportedConstruct {
            kind: String::from("HATCH"),
            line: drawing
                .section("ENTITIES")
                .and_then(|s| s.items.last())
                .map(DrawingItem::line)
                .unwrap(),
        }],
        drawing.warnings
    );
}

#[test]
fn r12_polyline_fixture() {
    let drawing = fixture("r12_polyline.dxf");
    assert_eq!(None, drawing.version());
    let entities: Vec<_> = drawing.entities().collect();
    assert_eq!(2, entities.len());
    match entities[0].specific {
        EntityType::Polyline(ref poly) => {
            assert!(poly.is_3d_polyline());
            assert!(poly.has_vertices);
        }
        _ => panic!("expected a polyline"),
    }
    assert_eq!(2, entities[0].children.len());
    assert_eq!("3DFACE", entities[1].kind());
    assert!(drawing.warnings.is_empty());
}
