mod default_value_resolver;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod type_validation_error;

use default_value_resolver::DefaultValueResolver;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
