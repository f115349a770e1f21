pub mod kana;
pub mod kanji;
pub mod sanitize;
pub mod settings;
pub mod slug;
pub mod unicode;
