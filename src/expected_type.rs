/// The class of value carried by a group code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExpectedType {
    Boolean,
    Short,
    Integer,
    Long,
    Double,
    Str,
    Handle,
}

impl ExpectedType {
    /// Classifies a group code.  Codes outside the documented ranges are strings.
    pub fn expected_type(code: i32) -> ExpectedType {
        match code {
            5 => ExpectedType::Handle,
            0..=9 => ExpectedType::Str,
            10..=39 => ExpectedType::Double,
            40..=59 => ExpectedType::Double,
            60..=79 => ExpectedType::Short,
            90..=99 => ExpectedType::Integer,
            100..=102 => ExpectedType::Str,
            105 => ExpectedType::Handle,
            110..=119 => ExpectedType::Double,
            120..=129 => ExpectedType::Double,
            130..=139 => ExpectedType::Double,
            140..=149 => ExpectedType::Double,
            160..=169 => ExpectedType::Long,
            170..=179 => ExpectedType::Short,
            210..=239 => ExpectedType::Double,
            270..=279 => ExpectedType::Short,
            280..=289 => ExpectedType::Short,
            290..=299 => ExpectedType::Boolean,
            300..=309 => ExpectedType::Str,
            310..=319 => ExpectedType::Str, // hex-encoded binary chunks stay text
            320..=329 => ExpectedType::Handle,
            330..=369 => ExpectedType::Handle,
            370..=379 => ExpectedType::Short,
            380..=389 => ExpectedType::Short,
            390..=399 => ExpectedType::Handle,
            400..=409 => ExpectedType::Short,
            410..=419 => ExpectedType::Str,
            420..=429 => ExpectedType::Integer,
            430..=439 => ExpectedType::Str,
            440..=449 => ExpectedType::Integer,
            450..=459 => ExpectedType::Long,
            460..=469 => ExpectedType::Double,
            470..=479 => ExpectedType::Str,
            480..=481 => ExpectedType::Handle,
            999 => ExpectedType::Str,
            1005 => ExpectedType::Handle,
            1000..=1009 => ExpectedType::Str,
            1010..=1059 => ExpectedType::Double,
            1060..=1070 => ExpectedType::Short,
            1071 => ExpectedType::Integer,
            _ => ExpectedType::Str,
        }
    }
}
