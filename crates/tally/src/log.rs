//!
//! Leveled diagnostics on stderr.
//!
//! Stdout belongs to the report line, so everything here writes to stderr.
//! On the success path of the shipped binary nothing logs at all; the macro
//! exists for the failure arms and for ad-hoc debugging.
//!

use derive_more::Display;

///
/// Level
///

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Display)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Config,
    Report,
    Sum,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;
        let topic_opt: Option<&str> = $topic;
        let message = format!($fmt $(, $arg)*);

        eprintln!("{}", $crate::log::__render_line(topic_opt, level, &message));
    }};
}

///
/// Helpers
///

/// Render one line: colored, width-fixed level label, optional topic tag.
#[doc(hidden)]
#[must_use]
pub fn __render_line(topic: Option<&str>, level: Level, message: &str) -> String {
    let (color, reset) = match level {
        Level::Ok => ("\x1b[32m", "\x1b[0m"),
        Level::Info => ("\x1b[34m", "\x1b[0m"),
        Level::Warn => ("\x1b[33m", "\x1b[0m"),
        Level::Error => ("\x1b[31m", "\x1b[0m"),
        Level::Debug => ("", ""),
    };

    let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());

    match topic {
        Some(topic) => format!("{label}| [{topic}] {message}"),
        None => format!("{label}| {message}"),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_ordering_matches_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Ok);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn renders_label_topic_and_message() {
        let line = __render_line(Some(&Topic::Sum.to_string()), Level::Error, "boom");
        assert!(line.contains("ERROR"));
        assert!(line.contains("[Sum] boom"));

        let ok = __render_line(Some(&Topic::Config.to_string()), Level::Ok, "loaded");
        assert!(ok.contains("OK"));
        assert!(ok.contains("[Config] loaded"));
    }

    #[test]
    fn debug_lines_carry_no_color_codes() {
        let line = __render_line(None, Level::Debug, "plain");
        assert_eq!(line, "DEBUG| plain");
    }

    #[test]
    fn macro_arms_expand_for_both_shapes() {
        crate::log!(Topic::Report, Info, "bound {}", 10);
        crate::log!(Debug, "plain {}", "message");
    }
}
