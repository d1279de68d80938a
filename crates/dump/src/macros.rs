//! `dump!` and its helpers

/// Capture expressions together with their source text
///
/// Returns a [`Dump`](crate::Dump) that renders as
/// `{expr1 = value1, expr2 = value2}`. The expressions are evaluated when
/// the dump is rendered, once per render, in argument order.
///
/// ```rust
/// use dump::dump;
///
/// let foo = 42;
/// let bar = vec![1, 2, 3];
/// assert_eq!(dump!(foo, bar.len()).to_string(), "{foo = 42, bar.len() = 3}");
/// assert_eq!(dump!(2 + 2).with_names(["x"]).to_string(), "{x = 4}");
/// ```
///
/// At most 8 expressions are accepted; more is a compile error.
///
/// Bindings from a destructuring pattern can be listed before a `;` to have
/// the dump hold explicit references to them. Inside the expressions each
/// listed name then refers to a reference to the original binding:
///
/// ```rust
/// use dump::dump;
///
/// let pairs = vec![(3, Box::new(String::from("hello")))];
/// for (i, s) in &pairs {
///     let ctx = dump!(ref (i, s); i, **s);
///     assert_eq!(ctx.to_string(), "{i = 3, **s = hello}");
/// }
/// ```
#[macro_export]
macro_rules! dump {
    (ref ($($bind:ident),* $(,)?);
        $_1:expr, $_2:expr, $_3:expr, $_4:expr, $_5:expr, $_6:expr, $_7:expr, $_8:expr,
        $_9:expr $(, $rest:expr)* $(,)?) => {
        ::core::compile_error!("dump! accepts at most 8 expressions")
    };
    (ref ($($bind:ident),* $(,)?); $($e:expr),* $(,)?) => {
        $crate::Dump::bound(
            $crate::__dump_names!($($e),*),
            ($(&$bind,)*),
            |__bound, __fields: &mut $crate::Fields<'_, '_>| -> ::core::fmt::Result {
                let ($($bind,)*) = *__bound;
                $( $crate::__dump_field!(__fields, $e)?; )*
                ::core::result::Result::Ok(())
            },
        )
    };
    () => {
        $crate::Dump::from_fn(
            ::std::vec::Vec::new(),
            |_: &mut $crate::Fields<'_, '_>| ::core::result::Result::Ok(()),
        )
    };
    ($_1:expr, $_2:expr, $_3:expr, $_4:expr, $_5:expr, $_6:expr, $_7:expr, $_8:expr,
        $_9:expr $(, $rest:expr)* $(,)?) => {
        ::core::compile_error!("dump! accepts at most 8 expressions")
    };
    ($($e:expr),+ $(,)?) => {
        $crate::Dump::from_fn(
            $crate::__dump_names!($($e),+),
            |__fields: &mut $crate::Fields<'_, '_>| -> ::core::fmt::Result {
                $( $crate::__dump_field!(__fields, $e)?; )+
                ::core::result::Result::Ok(())
            },
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dump_names {
    ($($e:expr),*) => {
        ::std::vec![$(::std::borrow::Cow::Borrowed(::core::stringify!($e))),*]
    };
}

/// Writes one field, picking the value's best representation at the call
/// site where its concrete type is known.
#[doc(hidden)]
#[macro_export]
macro_rules! __dump_field {
    ($fields:ident, $e:expr) => {
        $fields.field(|__out| {
            #[allow(unused_imports)]
            use $crate::__private::{RenderDebug as _, RenderDisplay as _, RenderFallback as _};
            (&&&$crate::__private::Probe(&$e)).render(__out)
        })
    };
}
