use serde::Deserialize;

fn default_active() -> bool {
    true
}

/// Input of the create-category use case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCategoryCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active", alias = "is_active")]
    pub active: bool,
}

impl CreateCategoryCommand {
    pub fn with(name: Option<String>, description: Option<String>, active: bool) -> Self {
        Self {
            name,
            description,
            active,
        }
    }
}

/// Input of the update-category use case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCategoryCommand {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default = "default_active", alias = "is_active")]
    pub active: bool,
}

impl UpdateCategoryCommand {
    pub fn with(
        id: impl Into<String>,
        name: Option<String>,
        description: Option<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            description,
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_command_defaults_to_active() {
        let command: CreateCategoryCommand =
            serde_json::from_str(r#"{"name":"Filmes","description":null}"#).unwrap();
        assert_eq!(
            command,
            CreateCategoryCommand::with(Some("Filmes".into()), None, true)
        );
    }

    #[test]
    fn update_command_accepts_is_active_alias() {
        let command: UpdateCategoryCommand =
            serde_json::from_str(r#"{"id":"123","name":null,"is_active":false}"#).unwrap();
        assert_eq!(command, UpdateCategoryCommand::with("123", None, None, false));
    }
}
