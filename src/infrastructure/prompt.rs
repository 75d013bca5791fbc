//! Interactive question/answer session

use crate::domain::Review;
use crate::error::Result;
use std::io::{BufRead, Write};

/// Print a question and read one line of answer.
///
/// The trailing line ending is stripped. End of input gives an empty answer.
pub fn ask_to<W: Write, R: BufRead>(
    writer: &mut W,
    reader: &mut R,
    question: &str,
) -> Result<String> {
    writeln!(writer, "{}", question)?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    Ok(line.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string())
}

/// Blocking prompt session over an input and output stream
pub struct PromptSession<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        PromptSession { reader, writer }
    }

    /// Write a line of text to the output
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Ask a single question
    pub fn ask(&mut self, question: &str) -> Result<String> {
        ask_to(&mut self.writer, &mut self.reader, question)
    }

    /// Ask every question of the review in order, storing answers in place
    pub fn answer_all(&mut self, review: &mut Review) -> Result<()> {
        for question in review.questions_mut() {
            question.answer = ask_to(&mut self.writer, &mut self.reader, &question.title)?;
        }
        Ok(())
    }
}
