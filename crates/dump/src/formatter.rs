//! The formatter object returned by `dump!`

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::config::Separators;
use crate::error::{DumpError, DumpResult};

/// Deferred evaluator that writes one field per captured expression
///
/// Implemented by the closures `dump!` generates. Every render calls
/// [`evaluate`](Evaluate::evaluate) again; nothing is cached.
pub trait Evaluate {
    /// Evaluate the captured expressions and write them to `fields`
    fn evaluate(&self, fields: &mut Fields<'_, '_>) -> fmt::Result;
}

/// Evaluator backed by a closure that captures its environment implicitly
pub struct Deferred<F> {
    eval: F,
}

impl<F> Evaluate for Deferred<F>
where
    F: Fn(&mut Fields<'_, '_>) -> fmt::Result,
{
    fn evaluate(&self, fields: &mut Fields<'_, '_>) -> fmt::Result {
        (self.eval)(fields)
    }
}

/// Evaluator that holds explicit references to destructured bindings and
/// hands them to the closure on each call
pub struct Bound<B, F> {
    bindings: B,
    eval: F,
}

impl<B, F> Evaluate for Bound<B, F>
where
    F: Fn(&B, &mut Fields<'_, '_>) -> fmt::Result,
{
    fn evaluate(&self, fields: &mut Fields<'_, '_>) -> fmt::Result {
        (self.eval)(&self.bindings, fields)
    }
}

/// Captured expressions, their names and separators
///
/// Created by [`dump!`](crate::dump!). Renders as `{name = value, ...}` and
/// re-evaluates the captured expressions every time it is rendered.
///
/// ```rust
/// use dump::dump;
///
/// let foo = 42;
/// let bar = vec![1, 2, 3];
/// assert_eq!(dump!(foo, bar.len()).to_string(), "{foo = 42, bar.len() = 3}");
/// ```
pub struct Dump<E> {
    names: Vec<Cow<'static, str>>,
    arity: usize,
    separators: Separators,
    eval: E,
}

impl<F> Dump<Deferred<F>>
where
    F: Fn(&mut Fields<'_, '_>) -> fmt::Result,
{
    /// Build a dump from explicit names and an evaluator
    ///
    /// The evaluator must call [`Fields::field`] once per name. `dump!`
    /// generates both arguments; call this directly only when the names
    /// cannot come from source text.
    pub fn from_fn(names: Vec<Cow<'static, str>>, eval: F) -> Self {
        Self {
            arity: names.len(),
            names,
            separators: Separators::default(),
            eval: Deferred { eval },
        }
    }
}

impl<B, F> Dump<Bound<B, F>> {
    #[doc(hidden)]
    pub fn bound(names: Vec<Cow<'static, str>>, bindings: B, eval: F) -> Self
    where
        F: Fn(&B, &mut Fields<'_, '_>) -> fmt::Result,
    {
        Self {
            arity: names.len(),
            names,
            separators: Separators::default(),
            eval: Bound { bindings, eval },
        }
    }
}

impl<E> Dump<E> {
    /// Replace all display names
    ///
    /// The new list replaces the old one wholesale; the last call wins.
    /// Its length must match the number of captured expressions by the time
    /// the dump is rendered.
    pub fn with_names<I>(mut self, names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the field separator, keeping the key-value separator
    pub fn sep(mut self, field: impl Into<String>) -> Self {
        self.separators.field = field.into();
        self
    }

    /// Replace both the field and the key-value separator
    pub fn sep_kv(mut self, field: impl Into<String>, kv: impl Into<String>) -> Self {
        self.separators = Separators::new(field, kv);
        self
    }

    /// Apply a configured separator pair
    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Current display names
    pub fn names(&self) -> &[Cow<'static, str>] {
        &self.names
    }

    /// Number of captured expressions
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Current separators
    pub fn separators(&self) -> &Separators {
        &self.separators
    }

    fn check_names(&self) -> DumpResult<()> {
        if self.names.len() == self.arity {
            Ok(())
        } else {
            Err(DumpError::NameCountMismatch {
                expected: self.arity,
                actual: self.names.len(),
            })
        }
    }
}

impl<E: Evaluate> Dump<E> {
    /// Render into any `fmt::Write` sink
    ///
    /// Fails before writing anything if the name count does not match the
    /// captured expressions.
    pub fn write_to<W: fmt::Write>(&self, out: &mut W) -> DumpResult<()> {
        self.check_names()?;
        write!(out, "{}", Render(self))?;
        Ok(())
    }

    /// Render into a new string
    pub fn render(&self) -> DumpResult<String> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        let mut fields = Fields {
            out: f,
            names: &self.names,
            separators: &self.separators,
            index: 0,
        };
        self.eval.evaluate(&mut fields)?;
        fields.out.write_char('}')
    }
}

/// Writes the fields without the name check, which callers do first
struct Render<'d, E>(&'d Dump<E>);

impl<E: Evaluate> fmt::Display for Render<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_fields(f)
    }
}

impl<E: Evaluate> fmt::Display for Dump<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Err(DumpError::NameCountMismatch { expected, actual }) = self.check_names() {
            tracing::error!(
                expected,
                actual,
                names = ?self.names,
                "dump name override does not match the captured values"
            );
            return Err(fmt::Error);
        }
        self.write_fields(f)
    }
}

impl<E> fmt::Debug for Dump<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dump")
            .field("names", &self.names)
            .field("arity", &self.arity)
            .field("separators", &self.separators)
            .finish_non_exhaustive()
    }
}

/// Cursor handed to the evaluator during one render
///
/// Tracks which name comes next and places separators between fields.
pub struct Fields<'a, 'f> {
    out: &'a mut fmt::Formatter<'f>,
    names: &'a [Cow<'static, str>],
    separators: &'a Separators,
    index: usize,
}

impl Fields<'_, '_> {
    /// Write the next `name = value` pair
    ///
    /// `value` writes the value itself. `dump!` passes a closure that picks
    /// `Display`, then `Debug`, then a type-name placeholder.
    pub fn field(
        &mut self,
        value: impl FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        // Names were checked against the arity before rendering started.
        let name = self.names.get(self.index).ok_or(fmt::Error)?;
        if self.index > 0 {
            self.out.write_str(&self.separators.field)?;
        }
        self.out.write_str(name)?;
        self.out.write_str(&self.separators.kv)?;
        value(&mut *self.out)?;
        self.index += 1;
        Ok(())
    }

    /// Number of fields written so far
    pub fn written(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fmt::Write as _;

    fn names(list: &[&'static str]) -> Vec<Cow<'static, str>> {
        list.iter().copied().map(Cow::Borrowed).collect()
    }

    fn pair() -> Dump<Deferred<impl Fn(&mut Fields<'_, '_>) -> fmt::Result>> {
        Dump::from_fn(names(&["a", "b"]), |fields: &mut Fields<'_, '_>| -> fmt::Result {
            fields.field(|f| f.write_str("1"))?;
            fields.field(|f| f.write_str("2"))
        })
    }

    #[test]
    fn test_empty() {
        let dump = Dump::from_fn(Vec::new(), |_: &mut Fields<'_, '_>| Ok(()));
        assert_eq!(dump.render().unwrap(), "{}");
        assert_eq!(dump.to_string(), "{}");
        assert_eq!(dump.arity(), 0);
    }

    #[test]
    fn test_from_fn_renders_pairs() {
        assert_eq!(pair().render().unwrap(), "{a = 1, b = 2}");
    }

    #[test]
    fn test_separators() {
        assert_eq!(pair().sep("; ").render().unwrap(), "{a = 1; b = 2}");
        assert_eq!(pair().sep_kv("|", ":").render().unwrap(), "{a:1|b:2}");
        assert_eq!(
            pair().sep_kv("|", ":").sep("/").render().unwrap(),
            "{a:1/b:2}"
        );
        assert_eq!(
            pair()
                .with_separators(Separators::logfmt())
                .render()
                .unwrap(),
            "{a=1 b=2}"
        );
    }

    #[test]
    fn test_with_names_replaces_wholesale() {
        let dump = pair().with_names(["x", "y", "z"]).with_names(["p", "q"]);
        assert_eq!(dump.names(), names(&["p", "q"]).as_slice());
        assert_eq!(dump.render().unwrap(), "{p = 1, q = 2}");
    }

    #[test]
    fn test_with_names_accepts_owned_strings() {
        let dump = pair().with_names((0..2).map(|i| format!("field{i}")));
        assert_eq!(dump.render().unwrap(), "{field0 = 1, field1 = 2}");
    }

    #[test]
    fn test_name_count_mismatch() {
        let dump = pair().with_names(["only"]);
        assert_eq!(
            dump.render(),
            Err(DumpError::NameCountMismatch {
                expected: 2,
                actual: 1
            })
        );

        let mut out = String::new();
        assert!(dump.write_to(&mut out).is_err());
        assert!(out.is_empty(), "nothing is written on mismatch");
    }

    #[test]
    fn test_display_fails_on_mismatch() {
        let dump = pair().with_names(["a", "b", "c"]);
        let mut out = String::new();
        assert!(write!(out, "{dump}").is_err());
    }

    #[test]
    fn test_bound_passes_bindings() {
        let (x, y) = (3, "hello");
        let dump = Dump::bound(
            names(&["x", "y"]),
            (&x, &y),
            |&(x, y), fields: &mut Fields<'_, '_>| -> fmt::Result {
                fields.field(|f| write!(f, "{x}"))?;
                fields.field(|f| write!(f, "{y}"))
            },
        );
        assert_eq!(dump.render().unwrap(), "{x = 3, y = hello}");
    }

    #[test]
    fn test_debug_omits_values() {
        let rendered = format!("{:?}", pair());
        assert_eq!(
            rendered,
            r#"Dump { names: ["a", "b"], arity: 2, separators: Separators { field: ", ", kv: " = " }, .. }"#
        );
    }

    #[test]
    fn test_written_counts_fields() {
        let dump = Dump::from_fn(names(&["a", "b"]), |fields: &mut Fields<'_, '_>| -> fmt::Result {
            assert_eq!(fields.written(), 0);
            fields.field(|f| f.write_str("1"))?;
            assert_eq!(fields.written(), 1);
            fields.field(|f| f.write_str("2"))
        });
        assert_eq!(dump.to_string(), "{a = 1, b = 2}");
    }
}
