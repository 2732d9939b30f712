use colored::Colorize;
use libris::api::{CmdMessage, MessageLevel};
use libris::error::LibrisError;
use libris::model::Book;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 44;
const AUTHOR_WIDTH: usize = 36;

pub(super) fn print_messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error(out: &mut impl Write, err: &LibrisError) -> io::Result<()> {
    writeln!(out, "{} {}", "Error:".red().bold(), err)?;
    if err.is_storage() {
        // The change is held in memory and goes out with the next successful save.
        writeln!(out, "{}", "The catalog file was not updated.".yellow())?;
    }
    Ok(())
}

pub(super) fn print_books(out: &mut impl Write, books: &[Book]) -> io::Result<()> {
    if books.is_empty() {
        return writeln!(out, "No books registered.");
    }

    let id_width = books
        .iter()
        .map(|b| b.id().to_string().len())
        .max()
        .unwrap_or(1);

    for book in books {
        let idx = format!("[{:>width$}]", book.id(), width = id_width);
        writeln!(
            out,
            "{} {} {} {}",
            idx.yellow(),
            pad_to_width(book.title(), TITLE_WIDTH),
            pad_to_width(book.author(), AUTHOR_WIDTH).dimmed(),
            book.year()
        )?;
    }
    Ok(())
}

pub(super) fn print_book(out: &mut impl Write, book: &Book) -> io::Result<()> {
    writeln!(out, "{} {}", format!("[{}]", book.id()).yellow(), book.title().bold())?;
    writeln!(out, "  Author: {}", book.author())?;
    writeln!(out, "  Year:   {}", book.year())
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
