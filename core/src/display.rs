//! Canonical textual form: `[e1, e2, ...]`.
//!
//! Elements are written with their own `Display` impl, so a collection of
//! collections formats recursively. Collections of different element types
//! can be nested by erasing them to [`Displayable`].

use alloc::boxed::Box;
use core::fmt::{self, Write};

use crate::Collection;

/// Any value that can render itself with `Display`.
pub type Displayable<'a> = Box<dyn fmt::Display + 'a>;

impl<T: fmt::Display> fmt::Display for Collection<T> {
    /// Formatter options (width, precision, ...) apply to each element.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_char(']')
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Collection<T> {
    /// Erases the element type so this collection can sit next to
    /// collections of other types inside a `Collection<Displayable>`.
    pub fn into_displayable<'a>(self) -> Displayable<'a>
    where
        T: fmt::Display + 'a,
    {
        Box::new(self)
    }
}
