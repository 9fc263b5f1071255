//! @acp:module "Docstring Configuration"
//! @acp:summary "Configuration types for docstring parsing"
//! @acp:domain docs
//! @acp:layer model

use serde::{Deserialize, Serialize};

use super::{cleandoc, Dialect};

/// @acp:summary "Docstring dialect selection"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocstringStyle {
    /// Auto-detect from content
    #[default]
    Auto,
    /// `:tag argument:` markup (Sphinx/reST fields)
    #[serde(alias = "sphinx")]
    Tag,
    /// Indented `Title:` sections (Google style)
    #[serde(alias = "google")]
    Section,
}

impl DocstringStyle {
    /// Dialect forced by this style, if any
    pub fn forced(&self) -> Option<Dialect> {
        match self {
            DocstringStyle::Auto => None,
            DocstringStyle::Tag => Some(Dialect::Tag),
            DocstringStyle::Section => Some(Dialect::Section),
        }
    }
}

impl std::fmt::Display for DocstringStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocstringStyle::Auto => write!(f, "auto"),
            DocstringStyle::Tag => write!(f, "tag"),
            DocstringStyle::Section => write!(f, "section"),
        }
    }
}

/// @acp:summary "Docstring parsing configuration"
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// Dialect to use (or auto-detect)
    #[serde(default)]
    pub style: DocstringStyle,
    /// Boilerplate docs the host attaches to undocumented objects; masked to empty
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            style: DocstringStyle::Auto,
            placeholders: default_placeholders(),
        }
    }
}

fn default_placeholders() -> Vec<String> {
    vec![
        "Initialize self.  See help(type(self)) for accurate signature.".to_string(),
        "x.__init__(...) initializes x; see help(type(x)) for signature".to_string(),
    ]
}

impl ParserConfig {
    /// @acp:summary "Check whether a cleaned docstring is host boilerplate"
    pub fn is_placeholder(&self, doc: &str) -> bool {
        self.placeholders.iter().any(|p| p == doc)
    }

    /// @acp:summary "Clean raw doc text, masking host boilerplate to empty"
    pub fn clean(&self, raw: Option<&str>) -> String {
        let doc = cleandoc(raw.unwrap_or_default()).trim().to_string();
        if self.is_placeholder(&doc) {
            return String::new();
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.style, DocstringStyle::Auto);
        assert_eq!(config.placeholders.len(), 2);
        assert!(config.is_placeholder(
            "Initialize self.  See help(type(self)) for accurate signature."
        ));
        assert!(!config.is_placeholder("Constructor"));
    }

    #[test]
    fn test_style_aliases() {
        let style: DocstringStyle = serde_json::from_str("\"sphinx\"").unwrap();
        assert_eq!(style, DocstringStyle::Tag);
        let style: DocstringStyle = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(style, DocstringStyle::Section);
        assert_eq!(style.forced(), Some(Dialect::Section));
        assert_eq!(DocstringStyle::Auto.forced(), None);
    }

    #[test]
    fn test_style_display() {
        assert_eq!(DocstringStyle::Auto.to_string(), "auto");
        assert_eq!(DocstringStyle::Tag.to_string(), "tag");
        assert_eq!(DocstringStyle::Section.to_string(), "section");
    }
}
