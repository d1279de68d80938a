//! Best-effort value rendering
//!
//! `dump!` accepts values of any type. Each value is written with the best
//! representation its type offers:
//!
//! 1. [`Display`](fmt::Display)
//! 2. [`Debug`](fmt::Debug) (containers, `Option`, tuples, raw pointers)
//! 3. a `<unprintable TYPE>` placeholder, so rendering never fails
//!
//! The choice is made at the call site through autoref method resolution:
//! the macro calls `(&&&Probe(&value)).render(f)` and the compiler picks the
//! first impl whose bounds hold, stripping one reference per step. This only
//! works where the concrete type is known, which is why the call lives in
//! the macro expansion and not in a generic function.

use std::any::type_name;
use std::fmt;

/// Borrowed value awaiting rendering
pub struct Probe<'a, T: ?Sized>(pub &'a T);

/// Render through `Display`
pub trait RenderDisplay {
    /// Write the value
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Render through `Debug`
pub trait RenderDebug {
    /// Write the value
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Render a placeholder naming the type
pub trait RenderFallback {
    /// Write the placeholder
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

// Values are written through fresh format args so width/fill flags on the
// outer formatter do not leak into individual values.

impl<T: fmt::Display + ?Sized> RenderDisplay for &&Probe<'_, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: fmt::Debug + ?Sized> RenderDebug for &Probe<'_, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<T: ?Sized> RenderFallback for Probe<'_, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<unprintable {}>", type_name::<T>())
    }
}
