pub mod input_file;
pub mod input_reader;
