#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    UnknownField(String),
    InvalidDate { field: &'static str, input: String },
    NotADate(&'static str),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::UnknownField(name) => write!(f, "unknown field '{name}'"),
            FieldError::InvalidDate { field, input } => {
                write!(f, "{field}: '{input}' is not a YYYY-MM-DD date")
            }
            FieldError::NotADate(field) => write!(f, "{field} does not hold a date"),
        }
    }
}

impl std::error::Error for FieldError {}
