use thiserror::Error;

use crate::models::Field;

/// What was wrong with a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Empty,
    NotANumber,
    NotPositive,
    Negative,
    UnknownCategory(String),
    UnsupportedFileType(String),
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Empty => write!(f, "must not be empty"),
            Problem::NotANumber => write!(f, "must be a number"),
            Problem::NotPositive => write!(f, "must be a positive number"),
            Problem::Negative => write!(f, "must not be negative"),
            Problem::UnknownCategory(name) => write!(f, "'{}' is not a known category", name),
            Problem::UnsupportedFileType(ext) if ext.is_empty() => {
                write!(f, "has no extension; only PDF, EPUB, or MOBI files are allowed")
            }
            Problem::UnsupportedFileType(ext) => {
                write!(f, "'.{}' is not allowed; only PDF, EPUB, or MOBI files are allowed", ext)
            }
            Problem::FileTooLarge { size_bytes, max_bytes } => write!(
                f,
                "is {} bytes; files must not exceed {} bytes",
                size_bytes, max_bytes
            ),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("{field} {problem}")]
    Validation { field: Field, problem: Problem },

    #[error("category '{0}' already exists")]
    Duplicate(String),

    #[error("category '{name}' is assigned to {books} book(s)")]
    InUse { name: String, books: usize },

    #[error("book '{0}' not found")]
    NotFound(String),

    #[error("category '{0}' not found")]
    CategoryNotFound(String),
}

impl CatalogueError {
    pub fn validation(field: Field, problem: Problem) -> Self {
        CatalogueError::Validation { field, problem }
    }

    /// The form field a validation failure refers to, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            CatalogueError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_the_field() {
        let err = CatalogueError::validation(Field::Year, Problem::NotANumber);
        assert_eq!(err.to_string(), "Year of Publication must be a number");
        assert_eq!(err.field(), Some(Field::Year));
    }

    #[test]
    fn non_validation_errors_have_no_field() {
        let err = CatalogueError::InUse {
            name: "Science".to_string(),
            books: 2,
        };
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "category 'Science' is assigned to 2 book(s)");
    }

    #[test]
    fn file_problems_render_readably() {
        let missing_ext = Problem::UnsupportedFileType(String::new());
        assert!(missing_ext.to_string().contains("no extension"));

        let too_large = Problem::FileTooLarge {
            size_bytes: 10,
            max_bytes: 5,
        };
        assert_eq!(too_large.to_string(), "is 10 bytes; files must not exceed 5 bytes");
    }
}
