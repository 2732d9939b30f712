//! Interactive numbered menu.
//!
//! Reads from any `BufRead` and writes to any `Write` so the loop can be driven
//! from tests. Errors from the catalog are printed and the menu continues; only
//! I/O failures on the terminal itself end the loop with an error. End of input
//! ends the loop cleanly.

use super::print::{print_book, print_books, print_error, print_messages};
use libris::api::{BookUpdate, LibrisApi};
use libris::error::Result;
use libris::store::BookStore;
use std::io::{BufRead, Write};

const MENU: &str = "\n=== BOOK CATALOG ===
1) Add book
2) List books
3) Find book by id
4) Update book
5) Delete book
0) Quit";

pub fn run<S: BookStore, R: BufRead, W: Write>(
    api: &mut LibrisApi<S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;
        write!(out, "Option: ")?;
        out.flush()?;

        let Some(choice) = read_line(input)? else {
            writeln!(out)?;
            return Ok(());
        };

        let keep_going = match choice.as_str() {
            "1" => add_book(api, input, out)?,
            "2" => {
                let result = api.list_books()?;
                print_books(out, &result.listed_books)?;
                true
            }
            "3" => find_book(api, input, out)?,
            "4" => update_book(api, input, out)?,
            "5" => delete_book(api, input, out)?,
            "0" => {
                writeln!(out, "Bye.")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "Invalid option.")?;
                true
            }
        };

        if !keep_going {
            writeln!(out)?;
            return Ok(());
        }
    }
}

// Each action returns Ok(false) when input ran out mid-prompt.

fn add_book<S: BookStore>(
    api: &mut LibrisApi<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let Some(id) = read_int(input, out, "Id: ")? else {
        return Ok(false);
    };
    let Some(title) = prompt(input, out, "Title: ")? else {
        return Ok(false);
    };
    let Some(author) = prompt(input, out, "Author: ")? else {
        return Ok(false);
    };
    let Some(year) = read_int(input, out, "Year: ")? else {
        return Ok(false);
    };

    match api.add_book(id, title, author, year) {
        Ok(result) => print_messages(out, &result.messages)?,
        Err(e) => print_error(out, &e)?,
    }
    Ok(true)
}

fn find_book<S: BookStore>(
    api: &LibrisApi<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let Some(id) = read_int(input, out, "Id to find: ")? else {
        return Ok(false);
    };

    match api.get_book(id) {
        Ok(result) => {
            for book in &result.listed_books {
                print_book(out, book)?;
            }
        }
        Err(e) => print_error(out, &e)?,
    }
    Ok(true)
}

fn update_book<S: BookStore>(
    api: &mut LibrisApi<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let Some(id) = read_int(input, out, "Id to update: ")? else {
        return Ok(false);
    };

    let current = match api.get_book(id) {
        Ok(result) => result.listed_books,
        Err(e) => {
            print_error(out, &e)?;
            return Ok(true);
        }
    };
    for book in &current {
        writeln!(
            out,
            "Current: {} | {} | {}",
            book.title(),
            book.author(),
            book.year()
        )?;
    }

    let Some(title) = prompt(input, out, "New title (Enter to keep): ")? else {
        return Ok(false);
    };
    let Some(author) = prompt(input, out, "New author (Enter to keep): ")? else {
        return Ok(false);
    };
    let Some(year) = prompt(input, out, "New year (Enter to keep): ")? else {
        return Ok(false);
    };

    let year = if year.is_empty() {
        None
    } else {
        match year.parse::<i64>() {
            Ok(y) => Some(y),
            Err(_) => {
                writeln!(out, "Invalid year.")?;
                return Ok(true);
            }
        }
    };

    let update = BookUpdate {
        title: Some(title).filter(|t| !t.is_empty()),
        author: Some(author).filter(|a| !a.is_empty()),
        year,
    };

    match api.update_book(id, &update) {
        Ok(result) => print_messages(out, &result.messages)?,
        Err(e) => print_error(out, &e)?,
    }
    Ok(true)
}

fn delete_book<S: BookStore>(
    api: &mut LibrisApi<S>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    let Some(id) = read_int(input, out, "Id to delete: ")? else {
        return Ok(false);
    };

    match api.delete_book(id) {
        Ok(result) => print_messages(out, &result.messages)?,
        Err(e) => print_error(out, &e)?,
    }
    Ok(true)
}

/// Next line with surrounding whitespace removed, or `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    read_line(input)
}

/// Ask until the answer parses as an integer.
fn read_int(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<i64>> {
    loop {
        let Some(answer) = prompt(input, out, label)? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(out, "Please enter a valid number.")?,
        }
    }
}
