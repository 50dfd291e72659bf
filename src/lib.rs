//! This crate reads text DXF CAD files into a structured document and writes that document as
//! JSON.
//!
//! # Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ``` toml
//! [dependencies]
//! dxf-reader = "0.1.0"
//! ```
//!
//! # Examples
//!
//! Convert DXF text straight to JSON:
//!
//! ``` rust
//! # fn ex() -> dxf_reader::DxfResult<()> {
//! let json = dxf_reader::convert("0\nSECTION\n2\nHEADER\n0\nENDSEC\n0\nEOF\n")?;
//! assert_eq!(r#"{"sections":[{"name":"HEADER","items":[]}],"warnings":[]}"#, json);
//! # Ok(())
//! # }
//! ```
//!
//! Open a DXF file from disk and walk its entities:
//!
//! ``` rust
//! # fn ex() -> dxf_reader::DxfResult<()> {
//! use dxf_reader::Drawing;
//! use dxf_reader::entities::*;
//!
//! let drawing = Drawing::load_file("path/to/file.dxf")?;
//! for e in drawing.entities() {
//!     println!("found {} on layer {}", e.kind(), e.layer_name());
//!     match e.specific {
//!         EntityType::Circle(ref circle) => {
//!             // do something with the circle
//!         },
//!         EntityType::Line(ref line) => {
//!             // do something with the line
//!         },
//!         _ => (),
//!     }
//! }
//! for warning in &drawing.warnings {
//!     println!("warning: {}", warning);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Entity kinds that are not modeled, and every section other than `HEADER`, `TABLES`, `BLOCKS`
//! and `ENTITIES`, are kept as raw code pairs so no data is lost in the conversion.
//!
//! SLI mesh files are read into the same document shape with `Drawing::parse_sli` and
//! `convert_sli`.

#![warn(clippy::doc_markdown)]

mod code_pair;
pub use crate::code_pair::{CodePair, RawCodePair};

mod code_pair_value;
pub use crate::code_pair_value::CodePairValue;

mod expected_type;
pub use crate::expected_type::ExpectedType;

mod code_pair_iter;
mod code_pair_put_back;

mod dxf_error;
pub use crate::dxf_error::DxfError;

mod dxf_result;
pub use crate::dxf_result::DxfResult;

mod dxf_warning;
pub use crate::dxf_warning::DxfWarning;

mod options;
pub use crate::options::{ConvertOptions, DuplicatePolicy, ParseOptions};

mod point;
pub use crate::point::Point;

mod enums;
pub use crate::enums::AcadVersion;

mod extension_data;
pub use crate::extension_data::*;

mod x_data;
pub use crate::x_data::*;

mod raw_record;
pub use crate::raw_record::RawRecord;

mod header;
pub use crate::header::HeaderVariable;

mod table;
pub use crate::table::Table;

pub mod entities;

mod entity;
pub use crate::entity::{Entity, EntityCommon};

mod entity_iter;

mod section;
pub use crate::section::{Section, PREAMBLE_SECTION_NAME};

mod drawing_item;
pub use crate::drawing_item::{DrawingItem, DrawingItemRef};

mod drawing;
pub use crate::drawing::Drawing;

mod sli;

mod json;
pub use crate::json::{
    convert, convert_sli, convert_sli_with_options, convert_with_options, round_f64,
    FLOAT_PRECISION,
};
