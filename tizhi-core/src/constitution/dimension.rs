use std::fmt;

use serde::{Deserialize, Serialize};

/// The nine constitution dimensions of the questionnaire.
///
/// Declaration order is the canonical order: it drives output ordering
/// and tie-break resolution, so it must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constitution {
    Peace,
    QiDeficiency,
    YangDeficiency,
    YinDeficiency,
    PhlegmDamp,
    DampHeat,
    BloodStasis,
    QiDepression,
    Special,
}

impl Constitution {
    /// All dimensions in canonical order.
    pub const ALL: [Constitution; 9] = [
        Constitution::Peace,
        Constitution::QiDeficiency,
        Constitution::YangDeficiency,
        Constitution::YinDeficiency,
        Constitution::PhlegmDamp,
        Constitution::DampHeat,
        Constitution::BloodStasis,
        Constitution::QiDepression,
        Constitution::Special,
    ];

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Constitution::Peace => "peace",
            Constitution::QiDeficiency => "qi_deficiency",
            Constitution::YangDeficiency => "yang_deficiency",
            Constitution::YinDeficiency => "yin_deficiency",
            Constitution::PhlegmDamp => "phlegm_damp",
            Constitution::DampHeat => "damp_heat",
            Constitution::BloodStasis => "blood_stasis",
            Constitution::QiDepression => "qi_depression",
            Constitution::Special => "special",
        }
    }

    /// Whether this is the balanced ("peace") dimension.
    pub fn is_peace(self) -> bool {
        self == Constitution::Peace
    }
}

impl fmt::Display for Constitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
