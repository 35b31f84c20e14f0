pub mod deadline;
pub mod parse;
pub mod password;
