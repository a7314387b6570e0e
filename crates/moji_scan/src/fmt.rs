//! Formatting macros with shortcode substitution.
//!
//! Each macro formats its arguments exactly like its `std` counterpart, then
//! runs the result through [`compile`](crate::compile) once.
//!
//! ```
//! use moji_scan::{emoji_error, emoji_format};
//!
//! assert_eq!(emoji_format!("I like {}", ":pizza:!"), "I like \u{1f355} !");
//! let err = emoji_error!("{} failed :x:", "build");
//! assert_eq!(err.to_string(), "build failed \u{274c} ");
//! ```

/// Error carrying a substituted message. Built by [`emoji_error!`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{text}")]
pub struct Message {
    text: String,
}

impl Message {
    /// Substitute shortcodes in `text` and wrap it.
    pub fn new(text: &str) -> Self {
        Message {
            text: crate::compile(text),
        }
    }

    /// The substituted message.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// `format!` with shortcode substitution.
#[macro_export]
macro_rules! emoji_format {
    ($($arg:tt)*) => {
        $crate::compile(&::std::format!($($arg)*))
    };
}

/// `print!` with shortcode substitution.
#[macro_export]
macro_rules! emoji_print {
    ($($arg:tt)*) => {
        ::std::print!("{}", $crate::emoji_format!($($arg)*))
    };
}

/// `println!` with shortcode substitution. The newline is not scanned.
#[macro_export]
macro_rules! emoji_println {
    () => {
        ::std::println!()
    };
    ($($arg:tt)*) => {
        ::std::println!("{}", $crate::emoji_format!($($arg)*))
    };
}

/// `write!` with shortcode substitution.
#[macro_export]
macro_rules! emoji_write {
    ($dst:expr, $($arg:tt)*) => {
        ::std::write!($dst, "{}", $crate::emoji_format!($($arg)*))
    };
}

/// `writeln!` with shortcode substitution. The newline is not scanned.
#[macro_export]
macro_rules! emoji_writeln {
    ($dst:expr $(,)?) => {
        ::std::writeln!($dst)
    };
    ($dst:expr, $($arg:tt)*) => {
        ::std::writeln!($dst, "{}", $crate::emoji_format!($($arg)*))
    };
}

/// Build a [`Message`] error from format arguments.
#[macro_export]
macro_rules! emoji_error {
    ($($arg:tt)*) => {
        $crate::Message::new(&::std::format!($($arg)*))
    };
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests;
