pub mod commands;
pub mod export;
pub mod kanji_source;
pub mod trace_init;
