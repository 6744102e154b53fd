use std::fmt;

/// Origin of a log call: the enclosing function and the source line.
///
/// Usually built with [`call_site!`](crate::call_site), which fills both
/// fields in at the call location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub function: &'static str,
    pub line: u32,
}

impl CallSite {
    #[must_use]
    pub const fn new(function: &'static str, line: u32) -> Self {
        Self { function, line }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function, self.line)
    }
}

/// Strips the helper item and closure frames from a `type_name` path and
/// keeps the last segment.
#[doc(hidden)]
#[must_use]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut name = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}

/// Expands to the name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::log::call_site::short_function_name(__type_name_of(__here))
    }};
}

/// Expands to a [`CallSite`] for the current function and line.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::log::call_site::CallSite::new($crate::function_name!(), line!())
    };
}
