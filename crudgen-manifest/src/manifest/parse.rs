//! Manifest parsing from strings, with validation of the parsed values.

use std::str::FromStr;

use super::{MANIFEST_FILE, Manifest};
use crate::{Error, Result, SourceContext, validate_path, validate_project_name};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a crudgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}

/// Run the validation gate over the values a manifest supplies.
fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let project = &manifest.project;

    if let Err(err) = validate_project_name(&project.name) {
        let span = ctx.find_value_span("name", &project.name);
        return Err(ctx.config_error(err.to_string(), span));
    }

    if let Err(err) = validate_path(&project.src_dir) {
        let span = ctx.find_value_span("src_dir", &project.src_dir);
        return Err(ctx.config_error(err.to_string(), span));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DatabaseChoice, Isolation, LanguageVariant};

    #[test]
    fn test_parse_minimal() {
        let manifest: Manifest = "[project]\nname = \"shop-api\"\n".parse().unwrap();

        assert_eq!(manifest.project.name, "shop-api");
        assert_eq!(manifest.project.language, LanguageVariant::JavaScript);
        assert_eq!(manifest.project.database, DatabaseChoice::InMemory);
        assert_eq!(manifest.project.src_dir, "src");
        assert_eq!(manifest.generate.isolation, Isolation::Process);
        assert!(!manifest.generate.force);
    }

    #[test]
    fn test_parse_full() {
        let src = r#"
[project]
name = "shop-api"
language = "ts"
database = "mysql"
src_dir = "app/src"

[generate]
isolation = "in-process"
force = true
"#;
        let manifest: Manifest = src.parse().unwrap();

        assert_eq!(manifest.project.language, LanguageVariant::TypeScript);
        assert_eq!(manifest.project.database, DatabaseChoice::Relational);
        assert_eq!(manifest.project.src_dir, "app/src");
        assert_eq!(manifest.generate.isolation, Isolation::InProcess);
        assert!(manifest.generate.force);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = "[project]\nname = \n".parse::<Manifest>().unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_database_rejected() {
        let err = "[project]\nname = \"shop\"\ndatabase = \"redis\"\n"
            .parse::<Manifest>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_project_name_points_at_value() {
        let src = "[project]\nname = \"node_modules\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Config { span, message, .. } => {
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "node_modules");
                assert!(message.contains("reserved tooling"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_src_dir_traversal_rejected() {
        let src = "[project]\nname = \"shop\"\nsrc_dir = \"../outside\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::Config { span, message, .. } => {
                assert!(span.is_some());
                assert!(message.contains("unsafe path"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
