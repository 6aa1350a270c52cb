// Reusable library API, shared by the CLI and the error-docs generator
pub mod errors;
pub mod extractor;
pub mod log;
pub mod pipeline;
pub mod record;
pub mod rung_char;
pub mod validator;
pub mod word_list;
