use serde::Serialize;

pub mod attachment;
pub mod catalogue;
pub mod config;
pub mod error;
pub mod models;

pub use catalogue::Catalogue;
pub use config::CatalogueConfig;
pub use error::{CatalogueError, Problem};
pub use models::{Book, BookForm, Field, FileRef, SaveOutcome};

const MIB: u64 = 1024 * 1024;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
  pub id: String,
  pub title: String,
  pub author: String,
  pub publisher: String,
  pub year: String,
  pub isbn: String,
  pub copies: String,
  pub category: String,
  pub file_path: Option<String>,
  pub file_name: Option<String>,
}

impl From<&Book> for LibraryItem {
  fn from(book: &Book) -> Self {
    LibraryItem {
      id: book.id.clone(),
      title: book.title.clone(),
      author: book.author.clone(),
      publisher: book.publisher.clone(),
      year: book.year.clone(),
      isbn: book.isbn.clone(),
      copies: book.copies.clone(),
      category: book.category.clone(),
      file_path: book.file_path.clone(),
      file_name: book.file_path.as_deref().map(attachment::file_name),
    }
  }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
  pub outcome: SaveOutcome,
  pub message: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EditableBook {
  pub form: BookForm,
  pub file_path: Option<String>,
}

/// Turn a catalogue error into the text shown to the user.
pub fn user_message(err: &CatalogueError, config: &CatalogueConfig) -> String {
  match err {
    CatalogueError::Validation { field, problem } => match problem {
      Problem::Empty if *field == Field::Category => "Please select a category".to_string(),
      Problem::Empty => format!("Please fill in all fields ({} is empty)", field),
      Problem::UnknownCategory(name) => format!("Category '{}' does not exist", name),
      Problem::UnsupportedFileType(_) => "Only PDF, EPUB, or MOBI files are allowed.".to_string(),
      Problem::FileTooLarge { .. } => format!(
        "File size must be less than {} MB.",
        config.max_file_bytes / MIB
      ),
      Problem::NotANumber | Problem::NotPositive | Problem::Negative => err.to_string(),
    },
    CatalogueError::Duplicate(_) => "This category already exists.".to_string(),
    CatalogueError::InUse { .. } => "This category is assigned to at least one book.".to_string(),
    CatalogueError::NotFound(_) => "Book not found".to_string(),
    CatalogueError::CategoryNotFound(name) => format!("Category '{}' does not exist", name),
  }
}

fn reject(catalogue: &Catalogue, action: &str, err: CatalogueError) -> String {
  log::warn!("{} rejected: {}", action, err);
  user_message(&err, catalogue.config())
}

fn require_id(id: &str) -> Result<&str, String> {
  let id = id.trim();
  if id.is_empty() {
    return Err("Please enter a Book ID".to_string());
  }
  Ok(id)
}

pub fn save_book(
  catalogue: &mut Catalogue,
  form: BookForm,
  file: Option<FileRef>,
) -> Result<SaveResult, String> {
  let outcome = match catalogue.add_or_update(&form, file.as_ref()) {
    Ok(outcome) => outcome,
    Err(err) => return Err(reject(catalogue, "save book", err)),
  };
  let message = match outcome {
    SaveOutcome::Inserted => "Book added successfully!",
    SaveOutcome::Updated => "Book updated successfully!",
  };
  Ok(SaveResult {
    outcome,
    message: message.to_string(),
  })
}

pub fn load_book_for_edit(catalogue: &Catalogue, id: String) -> Result<EditableBook, String> {
  let id = require_id(&id)?;
  let book = catalogue
    .find_by_id(id)
    .ok_or_else(|| "Book not found".to_string())?;
  Ok(EditableBook {
    form: BookForm::from(book),
    file_path: book.file_path.clone(),
  })
}

pub fn delete_book(catalogue: &mut Catalogue, id: String) -> Result<String, String> {
  let id = require_id(&id)?;
  match catalogue.delete(id) {
    Ok(_) => Ok("Book deleted successfully".to_string()),
    Err(err) => Err(reject(catalogue, "delete book", err)),
  }
}

pub fn get_library_items(catalogue: &Catalogue) -> Vec<LibraryItem> {
  catalogue.list_all().iter().map(LibraryItem::from).collect()
}

pub fn search_library_items(catalogue: &Catalogue, query: String) -> Vec<LibraryItem> {
  catalogue
    .search(&query)
    .into_iter()
    .map(LibraryItem::from)
    .collect()
}

pub fn list_categories(catalogue: &Catalogue) -> Vec<String> {
  catalogue.categories().to_vec()
}

pub fn create_category(catalogue: &mut Catalogue, name: String) -> Result<String, String> {
  match catalogue.add_category(&name) {
    Ok(()) => Ok("Category added successfully!".to_string()),
    Err(err) => Err(reject(catalogue, "add category", err)),
  }
}

pub fn delete_category(catalogue: &mut Catalogue, name: String) -> Result<String, String> {
  match catalogue.remove_category(&name) {
    Ok(()) => Ok("Category deleted successfully.".to_string()),
    Err(err) => Err(reject(catalogue, "delete category", err)),
  }
}

/// Validate a freshly picked file before it is attached to the form.
pub fn select_book_file(catalogue: &Catalogue, path: String) -> Result<FileRef, String> {
  let file = FileRef::from_path(&path).map_err(|err| {
    log::warn!("cannot read picked file {}: {}", path, err);
    format!("Cannot read file: {}", err)
  })?;
  attachment::check_file(&file, catalogue.config())
    .map_err(|err| reject(catalogue, "select file", err))?;
  Ok(file)
}

pub fn open_book_file(catalogue: &Catalogue, id: String) -> Result<(), String> {
  let id = require_id(&id)?;
  let book = catalogue
    .find_by_id(id)
    .ok_or_else(|| "Book not found".to_string())?;
  let path = book
    .file_path
    .as_deref()
    .ok_or_else(|| "No file is associated with this book.".to_string())?;
  attachment::open_file(path).map_err(|err| {
    log::warn!("open file for {} failed: {}", id, err);
    err
  })
}
