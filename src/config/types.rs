use serde::Deserialize;

/// Notegen configuration, read from `config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Written verbatim into the `author` front-matter field
    pub author: String,

    /// Tags for every new note, in output order
    pub default_tags: Vec<String>,

    /// Directory where notes are written; must not be empty
    pub output_folder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.author.is_empty());
        assert!(config.default_tags.is_empty());
        assert!(config.output_folder.is_empty());
    }

    #[test]
    fn test_config_camel_case_keys() {
        let json = r#"{"author":"Jane","defaultTags":["go","notes"],"outputFolder":"out"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.author, "Jane");
        assert_eq!(config.default_tags, vec!["go", "notes"]);
        assert_eq!(config.output_folder, "out");
    }

    #[test]
    fn test_config_missing_fields_default_to_empty() {
        let config: Config = serde_json::from_str(r#"{"outputFolder":"out"}"#).unwrap();
        assert_eq!(config.author, "");
        assert!(config.default_tags.is_empty());
    }

    #[test]
    fn test_config_ignores_unknown_keys() {
        let json = r#"{"outputFolder":"out","theme":"dark"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_folder, "out");
    }
}
