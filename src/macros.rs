//! Leveled logging macros.
//!
//! Every level macro accepts the same shapes:
//!
//! ```ignore
//! d!("plain text");                      // taken verbatim, no formatting
//! d!("Hi, {}", name);                    // formatted
//! d!(err: &error);                       // message is the rendered error
//! d!(err: &error, "while {}", action);   // message, newline, rendered error
//! d!(in tree, "to {}", "one tree");      // any Tree instead of the global forest
//! ```
//!
//! `log!` takes a priority first: `log!(Priority::WARN, "...")` or
//! `log!(5, "...")`.

#[doc(hidden)]
#[macro_export]
macro_rules! __grove_log {
    (@call $tree:expr, $priority:expr, $err:expr, $message:expr) => {{
        use $crate::Tree as _;
        ($tree).prepare_log(
            $priority,
            $err,
            $message,
            &$crate::CallSite::new(::core::module_path!(), ::core::file!(), ::core::line!()),
        )
    }};
    ($tree:expr, $priority:expr; err: $err:expr $(,)?) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::Some($err as &(dyn ::std::error::Error + 'static)),
            ::core::option::Option::None)
    };
    ($tree:expr, $priority:expr; err: $err:expr, $fmt:literal $(,)?) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::Some($err as &(dyn ::std::error::Error + 'static)),
            ::core::option::Option::Some(::core::format_args!("{}", $fmt)))
    };
    ($tree:expr, $priority:expr; err: $err:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::Some($err as &(dyn ::std::error::Error + 'static)),
            ::core::option::Option::Some(::core::format_args!($fmt, $($arg)+)))
    };
    ($tree:expr, $priority:expr; err: $err:expr, $msg:expr $(,)?) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::Some($err as &(dyn ::std::error::Error + 'static)),
            ::core::option::Option::Some(::core::format_args!("{}", $msg)))
    };
    ($tree:expr, $priority:expr; $fmt:literal $(,)?) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::None,
            ::core::option::Option::Some(::core::format_args!("{}", $fmt)))
    };
    ($tree:expr, $priority:expr; $fmt:literal, $($arg:tt)+) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::None,
            ::core::option::Option::Some(::core::format_args!($fmt, $($arg)+)))
    };
    ($tree:expr, $priority:expr; $msg:expr $(,)?) => {
        $crate::__grove_log!(@call $tree, $priority,
            ::core::option::Option::None,
            ::core::option::Option::Some(::core::format_args!("{}", $msg)))
    };
}

/// Log at an explicit priority.
#[macro_export]
macro_rules! log {
    (in $tree:expr, $priority:expr, $($rest:tt)+) => {
        $crate::__grove_log!($tree, $crate::Priority::from($priority); $($rest)+)
    };
    ($priority:expr, $($rest:tt)+) => {
        $crate::__grove_log!($crate::global(), $crate::Priority::from($priority); $($rest)+)
    };
}

/// Log at VERBOSE.
#[macro_export]
macro_rules! v {
    (in $tree:expr, $($rest:tt)+) => { $crate::__grove_log!($tree, $crate::Priority::VERBOSE; $($rest)+) };
    ($($rest:tt)+) => { $crate::__grove_log!($crate::global(), $crate::Priority::VERBOSE; $($rest)+) };
}

/// Log at DEBUG.
#[macro_export]
macro_rules! d {
    (in $tree:expr, $($rest:tt)+) => { $crate::__grove_log!($tree, $crate::Priority::DEBUG; $($rest)+) };
    ($($rest:tt)+) => { $crate::__grove_log!($crate::global(), $crate::Priority::DEBUG; $($rest)+) };
}

/// Log at INFO.
#[macro_export]
macro_rules! i {
    (in $tree:expr, $($rest:tt)+) => { $crate::__grove_log!($tree, $crate::Priority::INFO; $($rest)+) };
    ($($rest:tt)+) => { $crate::__grove_log!($crate::global(), $crate::Priority::INFO; $($rest)+) };
}

/// Log at WARN.
#[macro_export]
macro_rules! w {
    (in $tree:expr, $($rest:tt)+) => { $crate::__grove_log!($tree, $crate::Priority::WARN; $($rest)+) };
    ($($rest:tt)+) => { $crate::__grove_log!($crate::global(), $crate::Priority::WARN; $($rest)+) };
}

/// Log at ERROR.
#[macro_export]
macro_rules! e {
    (in $tree:expr, $($rest:tt)+) => { $crate::__grove_log!($tree, $crate::Priority::ERROR; $($rest)+) };
    ($($rest:tt)+) => { $crate::__grove_log!($crate::global(), $crate::Priority::ERROR; $($rest)+) };
}

/// Log at ASSERT.
#[macro_export]
macro_rules! wtf {
    (in $tree:expr, $($rest:tt)+) => { $crate::__grove_log!($tree, $crate::Priority::ASSERT; $($rest)+) };
    ($($rest:tt)+) => { $crate::__grove_log!($crate::global(), $crate::Priority::ASSERT; $($rest)+) };
}
