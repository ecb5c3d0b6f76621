use serde::{Deserialize, Serialize};

use crate::constitution::Constitution;

/// One questionnaire item: its 1-based number, the dimension it feeds,
/// and whether its answer is inverted before summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: u8,
    pub dimension: Constitution,
    pub reverse_coded: bool,
}

impl Question {
    pub fn new(number: u8, dimension: Constitution, reverse_coded: bool) -> Self {
        Self {
            number,
            dimension,
            reverse_coded,
        }
    }
}
