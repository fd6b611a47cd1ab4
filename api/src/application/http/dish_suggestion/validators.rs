use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestDishRequest {
    #[serde(default)]
    #[schema(example = "spicy noodle soup with beef")]
    #[validate(custom(function = "validate_not_blank", message = "Description is required"))]
    pub description: String,
    pub user_id: Option<String>,
    #[schema(example = "Helsinki")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_description_fails_validation() {
        let request = SuggestDishRequest {
            description: " \n".to_string(),
            user_id: None,
            location: None,
        };

        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("description"));
    }
}
