use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_input::ast;
use libgraphql_input::schema::Schema;
use libgraphql_input::schema::SchemaBuilder;
use libgraphql_input::types::TypeAnnotation;
use libgraphql_input::Value;
use libgraphql_input::Variables;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CoerceCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long="schema",
        num_args=1..,
        required=true,
    )]
    schema_paths: Vec<PathBuf>,

    #[arg(
        help="The input type to convert to (e.g. `[PointInput!]!`).",
        long="type",
    )]
    type_annotation: String,

    #[arg(
        conflicts_with="value_file",
        help="The GraphQL value literal to convert (e.g. `{x: 1, y: $y}`).",
        long,
        required_unless_present="value_file",
    )]
    value: Option<String>,

    #[arg(
        help="Path to a file containing the GraphQL value literal to convert.",
        long,
    )]
    value_file: Option<PathBuf>,

    #[arg(
        conflicts_with="variables_file",
        help="Variable bindings as a JSON object (e.g. `{\"y\": 2}`).",
        long,
    )]
    variables: Option<String>,

    #[arg(
        help="Path to a file containing variable bindings as a JSON object.",
        long,
    )]
    variables_file: Option<PathBuf>,
}

impl CoerceCmd {
    fn build_schema(&self) -> anyhow::Result<Schema> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!("Scanning {} schema paths...", self.schema_paths.len());
        let mut file_paths = vec![];
        for path in &self.schema_paths {
            // A file named explicitly is loaded regardless of its extension.
            if path.is_file() {
                file_paths.push(path.to_path_buf());
                continue;
            }

            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Failed to scan schema files at/under {path:#?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let matches_ext =
                    entry_path.extension()
                        .map(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
                        .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found under {:?} (extensions: {})",
                self.schema_paths,
                self.graphql_file_exts.join(", "),
            );
        }
        log::debug!("Loading {} schema files.", file_paths.len());

        let schema = SchemaBuilder::new()
            .load_files(file_paths)?
            .build()?;
        Ok(schema)
    }

    fn load_value_ast(&self) -> anyhow::Result<ast::Value> {
        let value_src = match (&self.value, &self.value_file) {
            (Some(value), _) => value.to_owned(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read value file {path:#?}"))?,
            (None, None) => anyhow::bail!("One of --value or --value-file is required"),
        };
        Ok(ast::parse_value(value_src.trim())?)
    }

    fn load_variables(&self) -> anyhow::Result<Option<Variables>> {
        let json_src = match (&self.variables, &self.variables_file) {
            (Some(json), _) => json.to_owned(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read variables file {path:#?}"))?,
            (None, None) => return Ok(None),
        };
        let variables = serde_json::from_str::<Variables>(json_src.as_str())
            .context("Variables must be provided as a JSON object")?;
        Ok(Some(variables))
    }

    fn coerce(&self) -> anyhow::Result<Option<Value>> {
        let schema = self.build_schema()?;

        let type_annot = TypeAnnotation::parse(self.type_annotation.as_str())?;
        let type_name = type_annot.innermost_named_type_annotation().graphql_type_name();
        if !schema.contains_type(type_name) {
            anyhow::bail!("Unknown input type `{type_name}`");
        }

        let value_ast = self.load_value_ast()?;
        let variables = self.load_variables()?;
        log::debug!("Converting `{value_ast}` to `{type_annot}`.");

        Ok(schema.value_from_ast(
            Some(&value_ast),
            &type_annot,
            variables.as_ref(),
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for CoerceCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.coerce() {
            Ok(Some(value)) => match serde_json::to_string_pretty(&value) {
                Ok(json) => CommandResult::success(json),
                Err(e) => CommandResult::failure(format_args!(
                    "{} Failed to render value as JSON: {e}",
                    output_utils::RED_X,
                )),
            },

            Ok(None) => CommandResult::failure(format_args!(
                "{} No value could be determined for `{}` as `{}`.",
                output_utils::RED_X,
                self.value.as_deref().unwrap_or("<value file>"),
                self.type_annotation,
            )),

            Err(e) => CommandResult::failure(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn coerce_cmd(schema_path: &Path, type_src: &str, value_src: &str) -> CoerceCmd {
        CoerceCmd {
            graphql_file_exts: vec!["graphql".to_string(), "graphqls".to_string()],
            schema_paths: vec![schema_path.to_path_buf()],
            type_annotation: type_src.to_string(),
            value: Some(value_src.to_string()),
            value_file: None,
            variables: None,
            variables_file: None,
        }
    }

    fn schema_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("point.graphql"),
            "input Point { x: Int = 5, y: Int }",
        ).expect("write schema");
        std::fs::create_dir(dir.path().join("nested")).expect("create dir");
        std::fs::write(
            dir.path().join("nested/color.graphqls"),
            "enum Color { RED GREEN }",
        ).expect("write schema");
        // Not GraphQL: loading it would fail to parse.
        std::fs::write(dir.path().join("notes.txt"), "input {").expect("write notes");
        dir
    }

    #[test]
    fn schema_directories_are_walked_by_extension() -> anyhow::Result<()> {
        let dir = schema_dir();

        let value = coerce_cmd(dir.path(), "Point", "{y: 2}").coerce()?;
        assert_eq!(
            value.as_ref().map(|value| serde_json::to_string(value)).transpose()?,
            Some(r#"{"x":5,"y":2}"#.to_string()),
        );

        let value = coerce_cmd(dir.path(), "[Color!]", "GREEN").coerce()?;
        assert_eq!(value, Some(Value::List(vec![Value::Enum("GREEN".to_string())])));

        Ok(())
    }

    #[test]
    fn explicit_schema_file_ignores_extension_filter() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let schema_path = dir.path().join("schema.sdl");
        std::fs::write(&schema_path, "input Point { x: Int }")?;

        let value = coerce_cmd(&schema_path, "Point", "{x: 1}").coerce()?;
        assert_eq!(
            value.and_then(|value| value.as_object().and_then(|o| o.get("x")).cloned()),
            Some(Value::Int(1)),
        );
        Ok(())
    }

    #[test]
    fn value_and_variables_can_come_from_files() -> anyhow::Result<()> {
        let dir = schema_dir();
        let value_path = dir.path().join("value.txt");
        let variables_path = dir.path().join("vars.json");
        std::fs::write(&value_path, "{y: $y}\n")?;
        std::fs::write(&variables_path, r#"{"y": 3}"#)?;

        let mut cmd = coerce_cmd(dir.path(), "Point", "");
        cmd.value = None;
        cmd.value_file = Some(value_path);
        cmd.variables_file = Some(variables_path);

        let value = cmd.coerce()?;
        assert_eq!(
            value.and_then(|value| value.as_object().and_then(|o| o.get("y")).cloned()),
            Some(Value::Int(3)),
        );
        Ok(())
    }

    #[test]
    fn non_object_variables_are_rejected() {
        let dir = schema_dir();
        let mut cmd = coerce_cmd(dir.path(), "Int", "$y");
        cmd.variables = Some("[1, 2]".to_string());
        assert!(cmd.coerce().is_err());
    }

    #[test]
    fn unknown_type_is_an_error() {
        let dir = schema_dir();
        assert!(coerce_cmd(dir.path(), "[Shape]", "{}").coerce().is_err());
    }

    #[test]
    fn empty_schema_directory_is_an_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        assert!(coerce_cmd(dir.path(), "Int", "1").coerce().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn unbound_variable_reports_no_value() {
        let dir = schema_dir();
        let result = coerce_cmd(dir.path(), "Int", "$missing")
            .run(Cli { cmd: None, verbose: false })
            .await;

        assert!(result.stdout.is_none());
        let stderr = result.stderr.expect("stderr message");
        assert!(stderr.contains("No value could be determined"), "{stderr}");
    }

    #[tokio::test]
    async fn converted_value_prints_as_pretty_json() {
        let dir = schema_dir();
        let result = coerce_cmd(dir.path(), "[Int]", "7")
            .run(Cli { cmd: None, verbose: false })
            .await;

        assert!(result.stderr.is_none());
        assert_eq!(result.stdout.as_deref(), Some("[\n  7\n]"));
    }
}
