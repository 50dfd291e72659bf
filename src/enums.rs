use std::fmt;

/// The AutoCAD release a drawing was saved by, read from the `$ACADVER` header variable.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AcadVersion {
    Version_1_0,
    Version_1_2,
    Version_1_40,
    Version_2_05,
    Version_2_10,
    Version_2_21,
    Version_2_22,
    Version_2_5,
    Version_2_6,
    R9,
    R10,
    R12,
    R13,
    R14,
    R2000,
    R2004,
    R2007,
    R2010,
    R2013,
    R2018,
}

impl AcadVersion {
    /// Parses an `$ACADVER` value.  Unknown values give `None`.
    pub fn from_version_string(val: &str) -> Option<AcadVersion> {
        let version = match val.trim() {
            "MC0.0" => AcadVersion::Version_1_0,
            "AC1.2" => AcadVersion::Version_1_2,
            "AC1.40" => AcadVersion::Version_1_40,
            "AC1.50" => AcadVersion::Version_2_05,
            "AC2.10" => AcadVersion::Version_2_10,
            "AC2.21" => AcadVersion::Version_2_21,
            "AC2.22" | "AC1001" => AcadVersion::Version_2_22,
            "AC1002" => AcadVersion::Version_2_5,
            "AC1003" => AcadVersion::Version_2_6,
            "AC1004" => AcadVersion::R9,
            "AC1006" => AcadVersion::R10,
            "AC1009" => AcadVersion::R12,
            "AC1011" | "AC1012" => AcadVersion::R13,
            "AC1014" | "14" | "14.01" => AcadVersion::R14,
            "AC1015" | "15.0" | "15.05" | "15.06" => AcadVersion::R2000,
            "AC1018" | "16.0" | "16.1" | "16.2" => AcadVersion::R2004,
            "AC1021" | "17.0" | "17.1" | "17.2" => AcadVersion::R2007,
            "AC1024" | "18.0" | "18.1" | "18.2" => AcadVersion::R2010,
            "AC1027" | "19.0" | "19.1" | "19.2" | "19.3" => AcadVersion::R2013,
            "AC1032" => AcadVersion::R2018,
            _ => return None,
        };
        Some(version)
    }
    /// Files from R2007 on are always written as UTF-8.
    pub fn is_utf8(self) -> bool {
        self >= AcadVersion::R2007
    }
}

impl fmt::Display for AcadVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_value = match self {
            AcadVersion::Version_1_0 => "MC0.0",
            AcadVersion::Version_1_2 => "AC1.2",
            AcadVersion::Version_1_40 => "AC1.40",
            AcadVersion::Version_2_05 => "AC1.50",
            AcadVersion::Version_2_10 => "AC2.10",
            AcadVersion::Version_2_21 => "AC2.21",
            AcadVersion::Version_2_22 => "AC2.22",
            AcadVersion::Version_2_5 => "AC1002",
            AcadVersion::Version_2_6 => "AC1003",
            AcadVersion::R9 => "AC1004",
            AcadVersion::R10 => "AC1006",
            AcadVersion::R12 => "AC1009",
            AcadVersion::R13 => "AC1012",
            AcadVersion::R14 => "AC1014",
            AcadVersion::R2000 => "AC1015",
            AcadVersion::R2004 => "AC1018",
            AcadVersion::R2007 => "AC1021",
            AcadVersion::R2010 => "AC1024",
            AcadVersion::R2013 => "AC1027",
            AcadVersion::R2018 => "AC1032",
        };
        write!(f, "{}", display_value)
    }
}
