//! Validation rules for metadata fields

use super::field_type::FieldType;

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub field_type: FieldType,
}

impl ValidationRules {
    /// Create empty validation rules (optional text, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            field_type: FieldType::Text,
        }
    }

    /// Required text: must be non-empty after trim
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn required_number() -> Self {
        Self {
            required: true,
            field_type: FieldType::Number,
            ..Self::none()
        }
    }

    pub const fn required_reference() -> Self {
        Self {
            required: true,
            field_type: FieldType::Reference,
            ..Self::none()
        }
    }

    /// Empty is accepted; anything else must be an id
    pub const fn optional_reference() -> Self {
        Self {
            required: false,
            field_type: FieldType::Reference,
            ..Self::none()
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate the raw text of a field
    pub fn validate(&self, raw: &str, field_label: &str) -> Result<(), String> {
        let value = raw.trim();
        if value.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        match self.field_type {
            FieldType::Text => Ok(()),
            FieldType::Number => value
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(|_| ())
                .ok_or_else(|| format!("{} must be a number", field_label)),
            FieldType::Reference => value
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| format!("{} has an invalid selection", field_label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate("", "Origin").is_err());
        assert!(rules.validate("   ", "Origin").is_err());
        assert_eq!(rules.validate(" VN ", "Origin"), Ok(()));
    }

    #[test]
    fn test_optional_accepts_blank() {
        assert_eq!(ValidationRules::none().validate("", "Description"), Ok(()));
        assert_eq!(ValidationRules::optional_reference().validate("", "Packing"), Ok(()));
        assert!(ValidationRules::optional_reference()
            .validate("abc", "Packing")
            .is_err());
    }

    #[test]
    fn test_number_must_parse() {
        let rules = ValidationRules::required_number();
        assert_eq!(rules.validate("12.5", "Weight"), Ok(()));
        assert_eq!(
            rules.validate("twelve", "Weight"),
            Err("Weight must be a number".to_string())
        );
        assert!(rules.validate("NaN", "Weight").is_err());
    }

    #[test]
    fn test_reference_must_be_integer_id() {
        let rules = ValidationRules::required_reference();
        assert_eq!(rules.validate("3", "Hair style"), Ok(()));
        assert!(rules.validate("3.5", "Hair style").is_err());
        assert_eq!(
            rules.validate("", "Hair style"),
            Err("Hair style is required".to_string())
        );
    }
}
