//! Validation rules for form fields

/// Validation rules for a text field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            max_length: None,
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Validate a string value against the rules.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} é obrigatório", field_label));
        }

        let len = value.chars().count();

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} deve ter no máximo {} caracteres",
                    field_label, max
                ));
            }
        }

        Ok(())
    }
}
