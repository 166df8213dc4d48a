use tracing::{debug, warn};
use crate::books::dto::BookDto;
use crate::client::api::{CatalogApi, ClientError, ClientResult};
use crate::client::form::{BookForm, FieldError};

pub const BOOK_ADDED: &str = "Book added successfully";
pub const BOOK_UPDATED: &str = "Book updated successfully";
pub const BOOK_DELETED: &str = "Book deleted successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: &str) -> Self {
        Self { kind: NotificationKind::Success, title: "Success".to_string(), description: description.to_string() }
    }

    pub fn error(description: &str) -> Self {
        Self { kind: NotificationKind::Error, title: "Error".to_string(), description: description.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Invalid(Vec<FieldError>),
    Failed(ClientError),
}

// BookManager owns the client side of the catalog: a disposable copy of the list,
// at most one book being edited, the form and the notifications raised so far.
pub struct BookManager<A: CatalogApi> {
    api: A,
    cache: Option<Vec<BookDto>>,
    editing: Option<BookDto>,
    form: BookForm,
    notifications: Vec<Notification>,
}

impl<A: CatalogApi> BookManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            cache: None,
            editing: None,
            form: BookForm::new(),
            notifications: Vec::new(),
        }
    }

    // cached list, fetched again after every successful mutation
    pub async fn books(&mut self) -> ClientResult<&[BookDto]> {
        if self.cache.is_none() {
            debug!("refreshing cached books");
            self.cache = Some(self.api.fetch_books().await?);
        }
        Ok(self.cache.as_deref().unwrap_or_default())
    }

    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    pub fn editing(&self) -> Option<&BookDto> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn start_edit(&mut self, book: &BookDto) {
        self.form = BookForm::from_book(book);
        self.editing = Some(book.clone());
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.reset();
    }

    // creates or updates depending on whether a book is being edited
    pub async fn submit(&mut self) -> Result<BookDto, SubmitError> {
        let values = self.form.validate().map_err(SubmitError::Invalid)?;
        let res = match &self.editing {
            Some(editing) => {
                let book = values.with_id(editing.id.as_str());
                self.api.update_book(&book).await.map(|b| (b, BOOK_UPDATED))
            }
            None => self.api.add_book(&values).await.map(|b| (b, BOOK_ADDED)),
        };
        match res {
            Ok((book, message)) => {
                self.mutated(message);
                self.editing = None;
                self.form.reset();
                Ok(book)
            }
            Err(err) => {
                self.failed(&err);
                Err(SubmitError::Failed(err))
            }
        }
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        match self.api.delete_book(id).await {
            Ok(_) => {
                self.mutated(BOOK_DELETED);
                Ok(())
            }
            Err(err) => {
                self.failed(&err);
                Err(err)
            }
        }
    }

    fn mutated(&mut self, message: &str) {
        self.cache = None;
        self.notifications.push(Notification::success(message));
    }

    fn failed(&mut self, err: &ClientError) {
        warn!(error = %err, "catalog mutation failed");
        self.notifications.push(Notification::error(err.message()));
    }
}
