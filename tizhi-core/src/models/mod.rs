pub mod catalog;
pub mod question;
pub mod report;

pub use catalog::{Acupoint, Course, Ingredient, Recipe};
pub use question::Question;
pub use report::Report;
