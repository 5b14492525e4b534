//! .env.example generator.

use crudgen_codegen::adapters::EnvVar;
use crudgen_core::{FileRules, SourceFile};

/// Example environment for the generated server, auth and database code.
pub struct EnvExample {
    vars: Vec<EnvVar>,
}

impl EnvExample {
    /// `storage` holds the backend's own variables, appended after the common ones.
    pub fn new(storage: Vec<EnvVar>) -> Self {
        let mut vars = vec![
            EnvVar::new("PORT", "3000"),
            EnvVar::new("NODE_ENV", "development"),
            EnvVar::new("JWT_SECRET", "change-this-secret"),
            EnvVar::new("JWT_EXPIRES_IN", "3600"),
        ];
        vars.extend(storage);
        Self { vars }
    }
}

impl SourceFile for EnvExample {
    fn path(&self) -> String {
        ".env.example".to_string()
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        self.vars
            .iter()
            .map(|var| format!("{}={}\n", var.name, var.example))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::adapters::StorageAdapter;

    use super::*;
    use crate::MysqlAdapter;

    #[test]
    fn test_common_then_backend_vars() {
        let file = EnvExample::new(MysqlAdapter.env_vars("shop")).generate();

        assert_eq!(file.path, ".env.example");
        insta::assert_snapshot!(file.content, @r"
        PORT=3000
        NODE_ENV=development
        JWT_SECRET=change-this-secret
        JWT_EXPIRES_IN=3600
        DB_HOST=localhost
        DB_PORT=3306
        DB_USER=root
        DB_PASSWORD=
        DB_NAME=shop
        ");
    }
}
