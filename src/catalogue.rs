//! The in-memory book catalogue.
//!
//! Everything lives in two `Vec`s owned by [`Catalogue`]. Lookups are linear
//! scans; the collection is filled by hand through a form and stays small.

use crate::attachment::check_file;
use crate::config::CatalogueConfig;
use crate::error::{CatalogueError, Problem, Result};
use crate::models::{Book, BookForm, Field, FileRef, SaveOutcome};

#[derive(Debug, Clone)]
pub struct Catalogue {
    config: CatalogueConfig,
    books: Vec<Book>,
    categories: Vec<String>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Catalogue::new(CatalogueConfig::default())
    }
}

impl Catalogue {
    pub fn new(config: CatalogueConfig) -> Self {
        let mut categories: Vec<String> = Vec::with_capacity(config.seed_categories.len());
        for name in &config.seed_categories {
            let name = name.trim();
            if !name.is_empty() && !categories.iter().any(|c| c == name) {
                categories.push(name.to_string());
            }
        }

        Catalogue {
            config,
            books: Vec::new(),
            categories,
        }
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    /// Insert a new record, or replace the one that shares its id.
    pub fn add_or_update(&mut self, form: &BookForm, file: Option<&FileRef>) -> Result<SaveOutcome> {
        let book = self.validate(form, file)?;

        match self.position(&book.id) {
            Some(index) => {
                log::info!("updated book {}", book.id);
                self.books[index] = book;
                Ok(SaveOutcome::Updated)
            }
            None => {
                log::info!("added book {}", book.id);
                self.books.push(book);
                Ok(SaveOutcome::Inserted)
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        let id = id.trim();
        self.books.iter().find(|book| book.id == id)
    }

    pub fn delete(&mut self, id: &str) -> Result<Book> {
        let index = self
            .position(id.trim())
            .ok_or_else(|| CatalogueError::NotFound(id.trim().to_string()))?;
        let removed = self.books.remove(index);
        log::info!("deleted book {}", removed.id);
        Ok(removed)
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Case-insensitive substring match over every field except the file path.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                book.searchable_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogueError::validation(Field::Category, Problem::Empty));
        }
        if self.has_category(name) {
            return Err(CatalogueError::Duplicate(name.to_string()));
        }
        self.categories.push(name.to_string());
        log::info!("added category {}", name);
        Ok(())
    }

    pub fn remove_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        let index = self
            .categories
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| CatalogueError::CategoryNotFound(name.to_string()))?;

        let books = self.books_in_category(name).len();
        if books > 0 {
            return Err(CatalogueError::InUse {
                name: name.to_string(),
                books,
            });
        }

        self.categories.remove(index);
        log::info!("removed category {}", name);
        Ok(())
    }

    pub fn books_in_category(&self, name: &str) -> Vec<&Book> {
        self.books.iter().filter(|book| book.category == name).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    fn validate(&self, form: &BookForm, file: Option<&FileRef>) -> Result<Book> {
        let id = required(Field::BookId, &form.id)?;
        let title = required(Field::Title, &form.title)?;
        let author = required(Field::Author, &form.author)?;
        let publisher = required(Field::Publisher, &form.publisher)?;

        let year = required(Field::Year, &form.year)?;
        let parsed_year = year
            .parse::<i64>()
            .map_err(|_| CatalogueError::validation(Field::Year, Problem::NotANumber))?;
        if parsed_year <= 0 {
            return Err(CatalogueError::validation(Field::Year, Problem::NotPositive));
        }
        i32::try_from(parsed_year)
            .map_err(|_| CatalogueError::validation(Field::Year, Problem::NotANumber))?;

        let isbn = required(Field::Isbn, &form.isbn)?;

        let copies = required(Field::Copies, &form.copies)?;
        let parsed_copies = copies
            .parse::<i64>()
            .map_err(|_| CatalogueError::validation(Field::Copies, Problem::NotANumber))?;
        if parsed_copies < 0 {
            return Err(CatalogueError::validation(Field::Copies, Problem::Negative));
        }
        u32::try_from(parsed_copies)
            .map_err(|_| CatalogueError::validation(Field::Copies, Problem::NotANumber))?;

        let category = required(Field::Category, &form.category)?;
        if !self.has_category(&category) {
            return Err(CatalogueError::validation(
                Field::Category,
                Problem::UnknownCategory(category),
            ));
        }

        if let Some(file) = file {
            check_file(file, &self.config)?;
        }

        Ok(Book {
            id,
            title,
            author,
            publisher,
            year,
            isbn,
            copies,
            category,
            file_path: file.map(|f| f.path.clone()),
        })
    }
}

fn required(field: Field, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CatalogueError::validation(field, Problem::Empty))
    } else {
        Ok(trimmed.to_string())
    }
}
