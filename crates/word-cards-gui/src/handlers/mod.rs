pub mod options;
pub mod word_list;
