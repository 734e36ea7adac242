//! A single-table SQLite book store.
//!
//! Every write happens inside a transaction that is committed when the
//! closure succeeds. A failing closure drops the transaction, which rolls it
//! back, so a half-written book never reaches the file.

use std::fmt;
use std::path::Path;

use rusqlite::{params, Connection, Transaction};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

pub const DEFAULT_DB_FILE: &str = ".books.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: String,
    pub publisher: String,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            publisher: publisher.into(),
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(title='{}', author='{}', year='{}', publisher='{}')",
            self.title, self.author, self.year, self.publisher
        )
    }
}

// ------------- BookStore -------------
pub struct BookStore {
    conn: Connection,
}

impl BookStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening book store");
        Self::with_connection(Connection::open(path)?)
    }
    pub fn in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }
    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS books (
                title text,
                author text,
                year text,
                publisher text
            );",
        )?;
        Ok(Self { conn })
    }

    fn in_transaction<T, F>(&mut self, work: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self.conn.transaction()?;
        let value = work(&tx)?;
        tx.commit()?;
        Ok(value)
    }

    pub fn add(&mut self, book: &Book) -> Result<()> {
        self.in_transaction(|tx| {
            tx.execute(
                "INSERT INTO books (title, author, year, publisher) VALUES (?1, ?2, ?3, ?4)",
                params![book.title, book.author, book.year, book.publisher],
            )?;
            Ok(())
        })?;
        info!(title = %book.title, author = %book.author, "added book");
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare("SELECT title, author, year, publisher FROM books ORDER BY rowid")?;
        let books = stmt
            .query_map([], |row| {
                Ok(Book {
                    title: row.get(0)?,
                    author: row.get(1)?,
                    year: row.get(2)?,
                    publisher: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(books)
    }

    pub fn len(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
