use serde::{Deserialize, Serialize};

/// Model used when neither the CLI nor the config file names one.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// An entry in the model picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOption {
    /// Identifier sent to the backend.
    pub id: String,
    /// Human-readable name shown in menus.
    pub label: String,
}

impl ModelOption {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// Models offered when the config file does not list any.
pub fn builtin_models() -> Vec<ModelOption> {
    vec![
        ModelOption::new("gemini-1.5-flash", "Gemini 1.5 Flash"),
        ModelOption::new("gemini-pro", "Gemini Pro"),
    ]
}

/// Finds a catalog entry by id or (case-insensitive) label.
pub fn find_model<'a>(models: &'a [ModelOption], query: &str) -> Option<&'a ModelOption> {
    models
        .iter()
        .find(|m| m.id == query)
        .or_else(|| models.iter().find(|m| m.label.eq_ignore_ascii_case(query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_models_include_default() {
        let models = builtin_models();
        assert!(models.iter().any(|m| m.id == DEFAULT_MODEL));
        assert_eq!(models.len(), 2);
    }

    #[test]
    fn test_find_model_by_id() {
        let models = builtin_models();
        let found = find_model(&models, "gemini-pro").map(|m| m.label.as_str());
        assert_eq!(found, Some("Gemini Pro"));
    }

    #[test]
    fn test_find_model_by_label() {
        let models = builtin_models();
        let found = find_model(&models, "gemini 1.5 flash").map(|m| m.id.as_str());
        assert_eq!(found, Some("gemini-1.5-flash"));
    }

    #[test]
    fn test_find_model_unknown() {
        assert!(find_model(&builtin_models(), "gpt-4o").is_none());
    }
}
