pub mod parser;
pub mod pipeline;
pub mod validator;
