//! Identifier formatting shared by every backend.
//!
//! Names are split on `_` and each part is capitalized (first character
//! upper-case, the rest lower-case) before the style is applied.

/// Surface style of a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `IDLE_WAIT_`: upper-cased parts, each followed by `_`.
    Constant,
    /// `Idle Wait `: capitalized parts, each followed by a space.
    Phrase,
    /// `IdleWait`: capitalized parts, no separator.
    Function,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Constant, Style::Phrase, Style::Function];

    fn suffix(self) -> &'static str {
        match self {
            Self::Constant => "_",
            Self::Phrase => " ",
            Self::Function => "",
        }
    }
}

/// Formats `name` in `style`, keeping the trailing separator.
pub fn format(name: &str, style: Style) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for part in name.split('_') {
        let part = capitalize(part);
        match style {
            Style::Constant => out.push_str(&part.to_uppercase()),
            Style::Phrase | Style::Function => out.push_str(&part),
        }
        out.push_str(style.suffix());
    }
    out
}

/// `idle_wait` -> `IDLE_WAIT`
pub fn constant(name: &str) -> String {
    trimmed(name, Style::Constant)
}

/// `idle_wait` -> `Idle Wait`
pub fn phrase(name: &str) -> String {
    trimmed(name, Style::Phrase)
}

/// `idle_wait` -> `IdleWait`
pub fn function(name: &str) -> String {
    format(name, Style::Function)
}

/// `idle_wait` -> `IdleWaitStateAction`
pub fn action(name: &str) -> String {
    format!("{}StateAction", function(name))
}

fn trimmed(name: &str, style: Style) -> String {
    let mut out = format(name, style);
    out.truncate(out.len() - style.suffix().len());
    out
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
