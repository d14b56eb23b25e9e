//! Directive-based formatting over heterogeneous argument sequences.
//!
//! [`render`] walks a template, substituting each `%`-directive with the
//! next argument in order. `%%` renders a literal percent sign. The
//! directive count and the argument count must agree exactly; a mismatch in
//! either direction is a [`DirectiveError`], and the library performs no
//! recovery beyond returning it.

use std::fmt::{self, Display};

use thiserror::Error;

use crate::list::sealed;
use crate::tuple::Tuple;

/// The error arising when a template's directives and its arguments
/// disagree in number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DirectiveError {
    /// A directive remained in the template after every argument had been
    /// consumed.
    #[error("invalid format string: missing arguments")]
    MissingArguments,

    /// Arguments remained after the last directive was substituted.
    #[error("extra arguments provided")]
    ExtraArguments,
}

/// Substitute the arguments, in order, into the template's directives.
///
/// A directive is a `%` followed by any character other than `%`; the
/// character after the `%` belongs to the directive and is not echoed. `%%`
/// is an escaped literal percent. A lone `%` at the end of the template
/// counts as a directive.
///
/// # Examples
///
/// ```
/// use catena::format::render;
///
/// let line = render("Hello, %s! You have %d new messages.", ("Alice", 5))?;
/// assert_eq!(line, "Hello, Alice! You have 5 new messages.");
///
/// assert_eq!(render("100%% done", ())?, "100% done");
/// # Ok::<(), catena::format::DirectiveError>(())
/// ```
///
/// # Errors
///
/// [`DirectiveError::MissingArguments`] if a directive remains once the
/// arguments run out; [`DirectiveError::ExtraArguments`] if arguments remain
/// once the directives do:
///
/// ```
/// use catena::format::{render, DirectiveError};
///
/// assert_eq!(render("%d and %d", (1,)), Err(DirectiveError::MissingArguments));
/// assert_eq!(render("no directives", (1,)), Err(DirectiveError::ExtraArguments));
/// ```
pub fn render<Args>(template: &str, args: Args) -> Result<String, DirectiveError>
where
    Args: Tuple,
    Args::AsList: FormatArgs,
{
    let mut out = String::with_capacity(template.len());
    args.into_list().format_into(template, &mut out)?;
    Ok(out)
}

/// A sequence of arguments that can consume a template's directives.
///
/// Implemented for every inductive sequence whose elements are all
/// [`Display`]; each element consumes exactly one directive.
pub trait FormatArgs: sealed::Inductive + Sized {
    /// Append to `out` the rendering of `template` with `self`'s arguments.
    fn format_into(self, template: &str, out: &mut String) -> Result<(), DirectiveError>;
}

impl FormatArgs for () {
    fn format_into(self, template: &str, out: &mut String) -> Result<(), DirectiveError> {
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            if c == '%' {
                match chars.next() {
                    Some('%') => out.push('%'),
                    _ => return Err(DirectiveError::MissingArguments),
                }
            } else {
                out.push(c);
            }
        }
        Ok(())
    }
}

impl<H: Display, T: FormatArgs> FormatArgs for (H, T) {
    fn format_into(self, template: &str, out: &mut String) -> Result<(), DirectiveError> {
        let (head, rest) = self;
        let mut chars = template.chars();
        while let Some(c) = chars.next() {
            if c == '%' {
                match chars.next() {
                    Some('%') => out.push('%'),
                    _ => {
                        // Directive found: substitute the head, then hand the
                        // remaining template to the remaining arguments.
                        out.push_str(&head.to_string());
                        return rest.format_into(chars.as_str(), out);
                    }
                }
            } else {
                out.push(c);
            }
        }
        Err(DirectiveError::ExtraArguments)
    }
}

/// A sequence whose every element is [`Display`].
pub trait EachDisplay: sealed::Inductive {
    /// Write each element on its own line.
    fn fmt_each(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl EachDisplay for () {
    fn fmt_each(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl<H: Display, T: EachDisplay> EachDisplay for (H, T) {
    fn fmt_each(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0)?;
        self.1.fmt_each(f)
    }
}

/// Displays each element of a sequence on its own line.
///
/// # Examples
///
/// ```
/// use catena::format::Lines;
/// use catena::prelude::*;
///
/// let list = (7.5, "hello", 42).into_list();
/// assert_eq!(Lines(&list).to_string(), "7.5\nhello\n42\n");
/// ```
#[derive(Debug)]
pub struct Lines<'a, L>(pub &'a L);

impl<'a, L: EachDisplay> Display for Lines<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_each(f)
    }
}
