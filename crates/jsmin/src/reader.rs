//! Comment-skipping reader layered on [`CharSource`].
//!
//! `//` comments vanish up to (not including) the line feed that ends them.
//! `/* */` comments collapse to a single space. Everything downstream of
//! [`CommentReader::next`] never sees a comment.

use crate::{
    error::{ErrorKind, MinifyError},
    source::{CharSource, Position},
};

#[derive(Debug)]
pub(crate) struct CommentReader<'src> {
    source: CharSource<'src>,
}

impl<'src> CommentReader<'src> {
    pub(crate) fn new(source: CharSource<'src>) -> Self {
        Self { source }
    }

    /// Raw access for the string and regex scanners, which must see comment
    /// openers as data.
    pub(crate) fn source(&mut self) -> &mut CharSource<'src> {
        &mut self.source
    }

    pub(crate) fn had_bom(&self) -> bool {
        self.source.had_bom()
    }

    /// Reads the next byte with comments elided.
    pub(crate) fn next(&mut self) -> Result<Option<u8>, MinifyError> {
        let c = self.source.get();
        if c != Some(b'/') {
            return Ok(c);
        }

        match self.source.peek() {
            Some(b'/') => Ok(self.skip_line_comment()),
            Some(b'*') => {
                let opened_at = self.source.last_position();
                self.skip_block_comment(opened_at)?;
                Ok(Some(b' '))
            }
            _ => Ok(c),
        }
    }

    fn skip_line_comment(&mut self) -> Option<u8> {
        loop {
            match self.source.get() {
                c @ (Some(b'\n') | None) => return c,
                Some(_) => {}
            }
        }
    }

    fn skip_block_comment(&mut self, opened_at: Position) -> Result<(), MinifyError> {
        // The opening `*`; it cannot double as the closing one.
        self.source.get();
        loop {
            match self.source.get() {
                Some(b'*') => {
                    if self.source.peek() == Some(b'/') {
                        self.source.get();
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => {
                    return Err(MinifyError::new(ErrorKind::UnterminatedComment, opened_at));
                }
            }
        }
    }
}
