// Same shape as the core crate's shims, under the `carousel_adapter` target.

#[cfg(feature = "tracing")]
macro_rules! alog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "carousel_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! alog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! atrace {
    ($($tt:tt)*) => {
        alog!(trace, $($tt)*)
    };
}

macro_rules! adebug {
    ($($tt:tt)*) => {
        alog!(debug, $($tt)*)
    };
}

macro_rules! awarn {
    ($($tt:tt)*) => {
        alog!(warn, $($tt)*)
    };
}
