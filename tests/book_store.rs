use bracket::books::{Book, BookStore};

#[test]
fn in_memory_store_starts_empty() {
    let store = BookStore::in_memory().expect("store");
    assert!(store.is_empty().expect("count"));
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn books_come_back_in_insertion_order() {
    let mut store = BookStore::in_memory().expect("store");
    let dune = Book::new("Dune", "Frank Herbert", "1965", "Chilton Books");
    let solaris = Book::new("Solaris", "Stanisław Lem", "1961", "MON");
    store.add(&dune).expect("add");
    store.add(&solaris).expect("add");
    assert_eq!(store.list().expect("list"), vec![dune, solaris]);
    assert_eq!(store.len().expect("count"), 2);
}

#[test]
fn quotes_are_stored_verbatim() {
    let mut store = BookStore::in_memory().expect("store");
    let book = Book::new("It's', 'x'); DROP TABLE books; --", "O'Brien", "2001", "");
    store.add(&book).expect("add");
    assert_eq!(store.list().expect("list"), vec![book]);
}

#[test]
fn file_store_survives_reopening() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(".books.db");
    {
        let mut store = BookStore::open(&path).expect("store");
        store
            .add(&Book::new("Ubik", "Philip K. Dick", "1969", "Doubleday"))
            .expect("add");
    }
    let store = BookStore::open(&path).expect("reopen");
    let books = store.list().expect("list");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Ubik");
    assert_eq!(
        books[0].to_string(),
        "Book(title='Ubik', author='Philip K. Dick', year='1969', publisher='Doubleday')"
    );
}
