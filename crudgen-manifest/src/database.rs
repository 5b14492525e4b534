use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Storage backend the generated model layer talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatabaseChoice {
    /// MongoDB through mongoose.
    #[serde(alias = "mongodb", alias = "mongo")]
    Document,
    /// MySQL through a mysql2 connection pool.
    #[serde(alias = "mysql", alias = "sql")]
    Relational,
    /// A process-local array, reset on restart.
    #[default]
    #[serde(alias = "memory")]
    InMemory,
}

impl DatabaseChoice {
    pub const ALL: [DatabaseChoice; 3] = [
        DatabaseChoice::Document,
        DatabaseChoice::Relational,
        DatabaseChoice::InMemory,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseChoice::Document => "document",
            DatabaseChoice::Relational => "relational",
            DatabaseChoice::InMemory => "in-memory",
        }
    }

    /// Human-readable label for prompts and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            DatabaseChoice::Document => "MongoDB (mongoose)",
            DatabaseChoice::Relational => "MySQL (mysql2)",
            DatabaseChoice::InMemory => "In-memory array",
        }
    }
}

impl fmt::Display for DatabaseChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "document" | "mongodb" | "mongo" => Ok(DatabaseChoice::Document),
            "relational" | "mysql" | "sql" => Ok(DatabaseChoice::Relational),
            "in-memory" | "inmemory" | "memory" => Ok(DatabaseChoice::InMemory),
            other => Err(format!(
                "unknown database '{other}', expected one of: document, relational, in-memory"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("mongodb".parse::<DatabaseChoice>().unwrap(), DatabaseChoice::Document);
        assert_eq!("MySQL".parse::<DatabaseChoice>().unwrap(), DatabaseChoice::Relational);
        assert_eq!("memory".parse::<DatabaseChoice>().unwrap(), DatabaseChoice::InMemory);
        assert!("redis".parse::<DatabaseChoice>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for choice in DatabaseChoice::ALL {
            assert_eq!(choice.to_string().parse::<DatabaseChoice>().unwrap(), choice);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&DatabaseChoice::InMemory).unwrap();
        assert_eq!(json, "\"in-memory\"");

        let parsed: DatabaseChoice = serde_json::from_str("\"mongo\"").unwrap();
        assert_eq!(parsed, DatabaseChoice::Document);
    }
}
