pub mod grade;
pub mod reading;
pub mod retry;
pub mod romaji;
pub mod settings;
pub mod unicode;
