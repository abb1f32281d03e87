//! Brace-delimited rendering of fixed-length arrays for diagnostics.

use std::fmt::{self, Display, Write};

/// Displays a slice as `{a, b, c}`; an empty slice renders as `{}`.
///
/// # Examples
///
/// ```
/// use spsparse::ArrayDisplay;
///
/// assert_eq!(ArrayDisplay(&[3, 5]).to_string(), "{3, 5}");
/// let empty: [i32; 0] = [];
/// assert_eq!(ArrayDisplay(&empty).to_string(), "{}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArrayDisplay<'a, T>(pub &'a [T]);

impl<T: Display> Display for ArrayDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, self.0)
    }
}

/// Writes `items` to `out` in brace-delimited form.
///
/// # Errors
///
/// Propagates any error returned by the writer.
pub fn write_array<W, T>(out: &mut W, items: &[T]) -> fmt::Result
where
    W: Write + ?Sized,
    T: Display,
{
    out.write_char('{')?;
    for (k, item) in items.iter().enumerate() {
        if k > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{item}")?;
    }
    out.write_char('}')
}

/// Renders `items` into a new string.
#[must_use]
pub fn format_array<T: Display>(items: &[T]) -> String {
    ArrayDisplay(items).to_string()
}
