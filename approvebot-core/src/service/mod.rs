pub mod command_parser;
pub mod event;
pub mod message;
pub mod template;
pub mod tokenizer;
