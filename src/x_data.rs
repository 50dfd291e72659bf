use serde::Serialize;

use crate::code_pair_put_back::CodePairPutBack;
use crate::json::serialize_f64;
use crate::{CodePair, DxfResult, Point};

pub(crate) const XDATA_APPLICATIONNAME: i32 = 1001;
const XDATA_STRING: i32 = 1000;
const XDATA_CONTROLGROUP: i32 = 1002;
const XDATA_LAYER: i32 = 1003;
const XDATA_BINARYDATA: i32 = 1004;
const XDATA_HANDLE: i32 = 1005;
const XDATA_THREEREALS: i32 = 1010;
const XDATA_WORLDSPACEPOSITION: i32 = 1011;
const XDATA_WORLDSPACEDISPLACEMENT: i32 = 1012;
const XDATA_WORLDDIRECTION: i32 = 1013;
const XDATA_REAL: i32 = 1040;
const XDATA_DISTANCE: i32 = 1041;
const XDATA_SCALEFACTOR: i32 = 1042;
const XDATA_INTEGER: i32 = 1070;
const XDATA_LONG: i32 = 1071;

/// Represents an application name and a collection of extended data.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct XData {
    pub application_name: String,
    pub items: Vec<XDataItem>,
}

/// Represents a piece of extended data.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XDataItem {
    Str(String),
    ControlGroup(Vec<XDataItem>),
    LayerName(String),
    /// Hex-encoded bytes, as written in the file.
    BinaryData(String),
    Handle(String),
    ThreeReals(Point),
    WorldSpacePosition(Point),
    WorldSpaceDisplacement(Point),
    WorldDirection(Point),
    #[serde(serialize_with = "serialize_f64")]
    Real(f64),
    #[serde(serialize_with = "serialize_f64")]
    Distance(f64),
    #[serde(serialize_with = "serialize_f64")]
    ScaleFactor(f64),
    Integer(i16),
    Long(i32),
    /// Any other pair in the extended data range.
    Other(CodePair),
}

impl XData {
    /// Reads the items following a `1001/<application>` pair.  Stops at the next application
    /// name, at the first pair outside the extended data range, or at a 0-code pair.
    pub(crate) fn read_item<I>(
        application_name: String,
        iter: &mut CodePairPutBack<I>,
    ) -> DxfResult<XData>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let mut xdata = XData {
            application_name,
            items: vec![],
        };
        loop {
            let pair = match iter.next_unless_code_0() {
                Some(Ok(pair)) => pair,
                Some(Err(e)) => return Err(e),
                None => break,
            };
            if pair.code == XDATA_APPLICATIONNAME || pair.code < XDATA_STRING {
                // new xdata or non xdata
                iter.put_back(Ok(pair));
                break;
            }
            xdata.items.push(XDataItem::read_item(pair, iter)?);
        }

        Ok(xdata)
    }
}

impl XDataItem {
    fn read_item<I>(pair: CodePair, iter: &mut CodePairPutBack<I>) -> DxfResult<XDataItem>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let item = match pair.code {
            XDATA_STRING => XDataItem::Str(pair.assert_string()?),
            XDATA_CONTROLGROUP => {
                let mut items = vec![];
                loop {
                    let inner = match iter.next_unless_code_0() {
                        Some(Ok(inner)) => inner,
                        Some(Err(e)) => return Err(e),
                        None => break,
                    };
                    if inner.code < XDATA_STRING || inner.code == XDATA_APPLICATIONNAME {
                        iter.put_back(Ok(inner));
                        break;
                    }
                    if inner.code == XDATA_CONTROLGROUP && inner.assert_string()?.trim() == "}" {
                        break;
                    }
                    items.push(XDataItem::read_item(inner, iter)?);
                }
                XDataItem::ControlGroup(items)
            }
            XDATA_LAYER => XDataItem::LayerName(pair.assert_string()?),
            XDATA_BINARYDATA => XDataItem::BinaryData(pair.assert_string()?),
            XDATA_HANDLE => XDataItem::Handle(pair.assert_handle()?),
            XDATA_THREEREALS => XDataItem::ThreeReals(XDataItem::read_point(&pair, iter)?),
            XDATA_WORLDSPACEPOSITION => {
                XDataItem::WorldSpacePosition(XDataItem::read_point(&pair, iter)?)
            }
            XDATA_WORLDSPACEDISPLACEMENT => {
                XDataItem::WorldSpaceDisplacement(XDataItem::read_point(&pair, iter)?)
            }
            XDATA_WORLDDIRECTION => XDataItem::WorldDirection(XDataItem::read_point(&pair, iter)?),
            XDATA_REAL => XDataItem::Real(pair.assert_f64()?),
            XDATA_DISTANCE => XDataItem::Distance(pair.assert_f64()?),
            XDATA_SCALEFACTOR => XDataItem::ScaleFactor(pair.assert_f64()?),
            XDATA_INTEGER => XDataItem::Integer(pair.assert_i16()?),
            XDATA_LONG => XDataItem::Long(pair.assert_i32()?),
            _ => XDataItem::Other(pair),
        };
        Ok(item)
    }
    /// Reads the y and z components that follow an x component; missing ones stay zero.
    fn read_point<I>(first: &CodePair, iter: &mut CodePairPutBack<I>) -> DxfResult<Point>
    where
        I: Iterator<Item = DxfResult<CodePair>>,
    {
        let mut point = Point::origin();
        point.set(first.code, first)?;
        for offset in &[10, 20] {
            match iter.next_unless_code_0() {
                Some(Ok(pair)) if pair.code == first.code + offset => {
                    point.set(first.code, &pair)?;
                }
                Some(Ok(pair)) => {
                    iter.put_back(Ok(pair));
                    break;
                }
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        Ok(point)
    }
}
