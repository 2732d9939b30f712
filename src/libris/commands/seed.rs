use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Book;
use crate::store::BookStore;

/// Sample catalog: (id, title, author, year)
pub const SAMPLE_BOOKS: [(i64, &str, &str, i64); 20] = [
    (1, "Clean Code", "Robert C. Martin", 2008),
    (2, "The Pragmatic Programmer", "Andrew Hunt & David Thomas", 1999),
    (3, "Design Patterns", "Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides", 1994),
    (4, "Refactoring", "Martin Fowler", 1999),
    (5, "Working Effectively with Legacy Code", "Michael C. Feathers", 2004),
    (
        6,
        "Introduction to Algorithms",
        "Thomas H. Cormen, Charles E. Leiserson, Ronald L. Rivest, Clifford Stein",
        2009,
    ),
    (7, "Code Complete", "Steve McConnell", 2004),
    (8, "The Clean Coder", "Robert C. Martin", 2011),
    (9, "Effective Java", "Joshua Bloch", 2018),
    (10, "Head First Design Patterns", "Eric Freeman & Elisabeth Robson", 2004),
    (11, "The Go Programming Language", "Alan A. A. Donovan & Brian W. Kernighan", 2015),
    (12, "Pro Git", "Scott Chacon & Ben Straub", 2014),
    (13, "Artificial Intelligence: A Modern Approach", "Stuart Russell & Peter Norvig", 2021),
    (
        14,
        "Structure and Interpretation of Computer Programs",
        "Harold Abelson & Gerald Jay Sussman",
        1996,
    ),
    (15, "Computer Networks", "Andrew S. Tanenbaum & David J. Wetherall", 2010),
    (
        16,
        "Operating System Concepts",
        "Abraham Silberschatz, Peter B. Galvin, Greg Gagne",
        2018,
    ),
    (
        17,
        "Compilers: Principles, Techniques, and Tools",
        "Alfred V. Aho, Monica S. Lam, Ravi Sethi, Jeffrey D. Ullman",
        2006,
    ),
    (18, "Security Engineering", "Ross Anderson", 2020),
    (19, "The Art of Computer Programming", "Donald E. Knuth", 2011),
    (20, "The Mythical Man-Month", "Frederick P. Brooks Jr.", 1995),
];

/// Load [`SAMPLE_BOOKS`] into the store, but only if it holds no books yet.
pub fn run<S: BookStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if !store.list().is_empty() {
        result.add_message(CmdMessage::info(
            "Catalog already has books, sample data not loaded.",
        ));
        return Ok(result);
    }

    let mut added = Vec::with_capacity(SAMPLE_BOOKS.len());
    for (id, title, author, year) in SAMPLE_BOOKS {
        let book = Book::new(id, title, author, year)?;
        store.add(book.clone())?;
        added.push(book);
    }

    tracing::info!(count = added.len(), "seeded sample catalog");
    result.add_message(CmdMessage::success(format!(
        "Loaded {} sample books.",
        added.len()
    )));
    Ok(result.with_affected_books(added))
}
