pub mod builtin;
pub mod json_file;
