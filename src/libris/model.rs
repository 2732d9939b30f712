use crate::error::{LibrisError, Result};

/// A validated book record.
///
/// Fields are private: the only way to obtain a `Book` is [`Book::new`], and the
/// only way to change one is through the setters, all of which validate before
/// assigning. A `Book` value is therefore never observably invalid.
///
/// The id is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: i64,
    title: String,
    author: String,
    year: i64,
}

impl Book {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> Result<Self> {
        let title = title.into();
        let author = author.into();

        if id <= 0 {
            return Err(LibrisError::Validation(
                "id must be greater than 0".to_string(),
            ));
        }
        validate_title(&title)?;
        validate_author(&author)?;
        validate_year(year)?;

        Ok(Self {
            id,
            title,
            author,
            year,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    pub fn set_author(&mut self, author: impl Into<String>) -> Result<()> {
        let author = author.into();
        validate_author(&author)?;
        self.author = author;
        Ok(())
    }

    pub fn set_year(&mut self, year: i64) -> Result<()> {
        validate_year(year)?;
        self.year = year;
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(LibrisError::Validation("title cannot be empty".to_string()));
    }
    Ok(())
}

fn validate_author(author: &str) -> Result<()> {
    if author.is_empty() {
        return Err(LibrisError::Validation(
            "author cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_year(year: i64) -> Result<()> {
    if year < 0 {
        return Err(LibrisError::Validation(
            "year cannot be negative".to_string(),
        ));
    }
    Ok(())
}
