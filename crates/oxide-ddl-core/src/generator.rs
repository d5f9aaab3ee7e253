//! Statement-to-struct pipeline.

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{DdlError, Result};
use crate::extract::Extractor;
use crate::render::{format_file, format_struct, render_schema, RenderedStruct};
use crate::schema::TableSchema;

/// Converts `CREATE TABLE` statements into Go structs.
///
/// Statements are processed in order and the first error aborts the batch.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    extractor: Extractor,
}

impl Generator {
    /// Creates a generator after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::InvalidConfiguration`] if the configuration is
    /// not usable.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let extractor = Extractor::new().strict(config.strict);
        Ok(Self { config, extractor })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Extracts the schema of one statement.
    ///
    /// The statement is lower-cased first unless `preserve_case` is set.
    ///
    /// # Errors
    ///
    /// See [`Extractor::extract`].
    pub fn extract(&self, statement: &str) -> Result<TableSchema> {
        if self.config.preserve_case {
            self.extractor.extract(statement)
        } else {
            self.extractor.extract(&statement.to_lowercase())
        }
    }

    /// Resolves names, types and tags for a schema.
    #[must_use]
    pub fn render(&self, schema: &TableSchema) -> RenderedStruct {
        render_schema(schema, &self.config)
    }

    /// Extracts every statement.
    ///
    /// # Errors
    ///
    /// Returns [`DdlError::EmptyInput`] when `statements` is empty, or the
    /// first extraction error.
    pub fn extract_all<S: AsRef<str>>(&self, statements: &[S]) -> Result<Vec<TableSchema>> {
        if statements.is_empty() {
            return Err(DdlError::EmptyInput(String::from("no statements supplied")));
        }
        statements
            .iter()
            .enumerate()
            .map(|(index, statement)| {
                debug!(index, "extracting statement");
                self.extract(statement.as_ref())
            })
            .collect()
    }

    /// Renders every statement to a struct.
    ///
    /// # Errors
    ///
    /// See [`Generator::extract_all`].
    pub fn render_all<S: AsRef<str>>(&self, statements: &[S]) -> Result<Vec<RenderedStruct>> {
        let schemas = self.extract_all(statements)?;
        Ok(schemas.iter().map(|schema| self.render(schema)).collect())
    }

    /// Renders every statement to a formatted struct definition.
    ///
    /// # Errors
    ///
    /// See [`Generator::extract_all`].
    pub fn convert<S: AsRef<str>>(&self, statements: &[S]) -> Result<Vec<String>> {
        Ok(self
            .render_all(statements)?
            .iter()
            .map(format_struct)
            .collect())
    }

    /// Renders a complete Go file for the statements.
    ///
    /// # Errors
    ///
    /// See [`Generator::extract_all`].
    pub fn generate<S: AsRef<str>>(&self, statements: &[S]) -> Result<String> {
        let structs = self.render_all(statements)?;
        info!(structs = structs.len(), "generated structs");
        Ok(format_file(&structs, &self.config.package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnInfo;

    const USERS: &str = "CREATE TABLE `t_users` (\
                         `id` BIGINT(20) NOT NULL COMMENT 'Primary Key', \
                         `user_name` VARCHAR(64) NOT NULL)";

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = Generator::new(GeneratorConfig::new().with_comment_tag("")).unwrap_err();
        assert!(matches!(err, DdlError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_extract_lower_cases_by_default() {
        let generator = Generator::new(GeneratorConfig::new()).unwrap();
        let schema = generator.extract(USERS).unwrap();
        assert_eq!(schema.table_name, "t_users");
        assert_eq!(
            schema.fields[0],
            ColumnInfo::new("id", "bigint").comment("primary key")
        );
    }

    #[test]
    fn test_extract_preserving_case() {
        let generator = Generator::new(GeneratorConfig::new().preserve_case(true)).unwrap();
        let schema = generator.extract(USERS).unwrap();
        assert_eq!(
            schema.fields[0],
            ColumnInfo::new("id", "BIGINT").comment("Primary Key")
        );
        let rendered = generator.render(&schema);
        assert_eq!(rendered.fields[0].target_type.as_str(), "int64");
    }

    #[test]
    fn test_empty_batch() {
        let generator = Generator::new(GeneratorConfig::new()).unwrap();
        let err = generator.convert::<&str>(&[]).unwrap_err();
        assert!(matches!(err, DdlError::EmptyInput(_)));
    }

    #[test]
    fn test_batch_fails_fast() {
        let generator = Generator::new(GeneratorConfig::new()).unwrap();
        let err = generator
            .convert(&[USERS, "create table nope (a int)", USERS])
            .unwrap_err();
        assert!(matches!(err, DdlError::EmptyInput(_)));
    }

    #[test]
    fn test_convert() {
        let generator =
            Generator::new(GeneratorConfig::new().with_table_affix("t_", "")).unwrap();
        let out = generator.convert(&[USERS]).unwrap();
        assert_eq!(
            out,
            [concat!(
                "type Users struct {\n",
                "\tID       int64  `json:\"id\" db:\"id\" comment:\"primary key\"`\n",
                "\tUserName string `json:\"user_name\" db:\"user_name\"`\n",
                "}"
            )]
        );
    }

    #[test]
    fn test_generate_file() {
        let generator = Generator::new(GeneratorConfig::new().with_package("model")).unwrap();
        let out = generator
            .generate(&["create table `a` (`x` int)", "create table `b` (`y` date)"])
            .unwrap();
        assert_eq!(
            out,
            concat!(
                "package model\n",
                "\n",
                "import \"time\"\n",
                "\n",
                "type A struct {\n",
                "\tX int32 `json:\"x\" db:\"x\"`\n",
                "}\n",
                "\n",
                "type B struct {\n",
                "\tY time.Time `json:\"y\" db:\"y\"`\n",
                "}\n",
            )
        );
    }
}
