/// Tizhi system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of questions in the questionnaire.
pub const QUESTION_COUNT: usize = 30;

/// Lowest valid answer value ("never").
pub const ANSWER_MIN: u8 = 1;

/// Highest valid answer value ("always").
pub const ANSWER_MAX: u8 = 5;

/// Number of constitution dimensions.
pub const DIMENSION_COUNT: usize = 9;
