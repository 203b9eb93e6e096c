pub mod category;
pub mod common;
pub mod question;
pub mod quiz;
