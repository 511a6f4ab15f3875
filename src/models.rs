use serde::{Deserialize, Serialize};

/// A validated catalogue entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: String,   // validated positive integer, kept as entered
    pub isbn: String,
    pub copies: String, // validated non-negative integer, kept as entered
    pub category: String,
    pub file_path: Option<String>, // absolute path, never read
}

impl Book {
    pub fn year_number(&self) -> i32 {
        self.year.parse().unwrap_or_default()
    }

    pub fn copies_count(&self) -> u32 {
        self.copies.parse().unwrap_or_default()
    }

    /// Fields that take part in search, in form order.
    pub fn searchable_text(&self) -> [String; 8] {
        [
            self.id.clone(),
            self.title.clone(),
            self.author.clone(),
            self.publisher.clone(),
            self.year.clone(),
            self.isbn.clone(),
            self.copies.clone(),
            self.category.clone(),
        ]
    }
}

/// Raw text as entered in the book form, before validation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookForm {
    pub id: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub year: String,
    pub isbn: String,
    pub copies: String,
    pub category: String,
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        BookForm {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            year: book.year.clone(),
            isbn: book.isbn.clone(),
            copies: book.copies.clone(),
            category: book.category.clone(),
        }
    }
}

/// A file picked by the user, described without reading its contents.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub path: String,
    pub size_bytes: u64,
    pub extension: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    BookId,
    Title,
    Author,
    Publisher,
    Year,
    Isbn,
    Copies,
    Category,
    BookFile,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::BookId => "Book ID",
            Field::Title => "Book Title",
            Field::Author => "Author",
            Field::Publisher => "Publisher",
            Field::Year => "Year of Publication",
            Field::Isbn => "ISBN",
            Field::Copies => "Number of Copies",
            Field::Category => "Category",
            Field::BookFile => "Book File",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SaveOutcome {
    Inserted,
    Updated,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn republic() -> Book {
        Book {
            id: "B1".to_string(),
            title: "Republic".to_string(),
            author: "Plato".to_string(),
            publisher: "X".to_string(),
            year: "2000".to_string(),
            isbn: "123".to_string(),
            copies: "03".to_string(),
            category: "Philosophy".to_string(),
            file_path: Some("/books/plato.pdf".to_string()),
        }
    }

    #[test]
    fn form_from_book_keeps_numbers_as_entered() {
        let book = republic();
        let form = BookForm::from(&book);
        assert_eq!(form.year, "2000");
        assert_eq!(form.copies, "03");
        assert_eq!(book.year_number(), 2000);
        assert_eq!(book.copies_count(), 3);
        assert_eq!(form.category, "Philosophy");
    }

    #[test]
    fn searchable_text_leaves_out_the_file_path() {
        let fields = republic().searchable_text();
        assert!(fields.iter().all(|field| !field.contains("plato.pdf")));
        assert!(fields.contains(&"2000".to_string()));
    }

    #[test]
    fn book_serializes_in_camel_case() {
        let value = serde_json::to_value(republic()).expect("serialize");
        assert_eq!(value["filePath"], "/books/plato.pdf");
        assert_eq!(value["copies"], "03");
    }
}
