pub mod dispatch;
pub mod generate;
pub mod grades;
pub mod search;
