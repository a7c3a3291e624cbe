#[cfg(feature = "tracing")]
macro_rules! ttrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "smart_table_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ttrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! tdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "smart_table_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! tdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! twarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "smart_table_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! twarn {
    ($($tt:tt)*) => {};
}
