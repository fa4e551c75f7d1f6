// Logging shims. With `tracing` off every call expands to nothing, so call sites must be
// statements, never expressions.

#[cfg(feature = "tracing")]
macro_rules! clog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "carousel", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! clog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! ctrace {
    ($($tt:tt)*) => {
        clog!(trace, $($tt)*)
    };
}

macro_rules! cdebug {
    ($($tt:tt)*) => {
        clog!(debug, $($tt)*)
    };
}

macro_rules! cwarn {
    ($($tt:tt)*) => {
        clog!(warn, $($tt)*)
    };
}
