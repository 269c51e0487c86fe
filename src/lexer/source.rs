use std::{
    io::{BufReader, ErrorKind, Read},
    rc::Rc,
};

use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// A sequential producer of characters. `None` signals end of input.
///
/// There is no seeking and no pushback; the scanner keeps its own
/// lookahead.
pub trait CharSource {
    fn next_char(&mut self) -> Option<char>;
}

impl<I: Iterator<Item = char> + ?Sized> CharSource for I {
    fn next_char(&mut self) -> Option<char> {
        self.next()
    }
}

/// Decodes UTF-8 from a byte reader one character at a time.
///
/// Invalid sequences come out as U+FFFD and are recorded; an I/O error is
/// recorded and ends the input. Neither is visible to the scanner other
/// than through the characters it receives.
pub struct ReaderSource<R: Read> {
    reader: BufReader<R>,
    file: Rc<String>,
    offset: u32,
    held_byte: Option<u8>,
    errors: Vec<Error>,
    done: bool,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R, file: Option<String>) -> ReaderSource<R> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        ReaderSource {
            reader: BufReader::new(reader),
            file: file_name,
            offset: 0,
            held_byte: None,
            errors: vec![],
            done: false,
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<Error> {
        std::mem::take(&mut self.errors)
    }

    fn error_position(&self) -> Position {
        Position(self.offset, Rc::clone(&self.file))
    }

    fn read_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.held_byte.take() {
            return Some(byte);
        }

        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    debug!(file = %self.file, offset = self.offset, "read failed: {}", err);
                    self.errors.push(Error::new(
                        ErrorImpl::Io {
                            message: err.to_string(),
                        },
                        self.error_position(),
                    ));
                    self.done = true;
                    return None;
                }
            }
        }
    }

    fn invalid(&mut self, bytes: Vec<u8>) -> char {
        debug!(file = %self.file, offset = self.offset, "invalid utf-8 sequence {:02x?}", bytes);
        self.errors
            .push(Error::new(ErrorImpl::InvalidUtf8 { bytes }, self.error_position()));
        char::REPLACEMENT_CHARACTER
    }

    fn decode(&mut self) -> Option<char> {
        let lead = self.read_byte()?;

        let width = match lead {
            0x00..=0x7f => return Some(lead as char),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Some(self.invalid(vec![lead])),
        };

        let mut bytes = vec![lead];
        while bytes.len() < width {
            match self.read_byte() {
                Some(byte @ 0x80..=0xbf) => bytes.push(byte),
                Some(byte) => {
                    // Not a continuation byte, so it starts the next character.
                    self.held_byte = Some(byte);
                    return Some(self.invalid(bytes));
                }
                None => return Some(self.invalid(bytes)),
            }
        }

        match std::str::from_utf8(&bytes) {
            Ok(decoded) => decoded.chars().next(),
            Err(_) => Some(self.invalid(bytes)),
        }
    }
}

impl<R: Read> Iterator for ReaderSource<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.done {
            return None;
        }

        let decoded = self.decode();
        match decoded {
            Some(_) => self.offset = self.offset.saturating_add(1),
            None => self.done = true,
        }
        decoded
    }
}
