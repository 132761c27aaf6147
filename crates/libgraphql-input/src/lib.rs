pub mod ast;
mod file_reader;
pub mod loc;
mod named_ref;
pub mod schema;
pub mod types;
mod value;
mod value_from_ast;

pub use file_reader::ReadContentError;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;
pub use value::Variables;
pub use value_from_ast::value_from_ast;
