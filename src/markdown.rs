//! Discord markdown formatting helpers.
//!
//! Small string builders for message content. Line-based helpers
//! ([`quote`], [`heading`], [`bullet_points`]) terminate every line with `\n`.

use std::fmt::{Display, Write};

/// Wraps text in `**bold**`.
#[must_use]
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

/// Wraps text in `*italics*`.
#[must_use]
pub fn italics(text: &str) -> String {
    format!("*{text}*")
}

/// Wraps text in `__underline__`.
#[must_use]
pub fn underline(text: &str) -> String {
    format!("__{text}__")
}

/// Wraps text in `~~strikethrough~~`.
#[must_use]
pub fn strikethrough(text: &str) -> String {
    format!("~~{text}~~")
}

/// Wraps text in single backticks.
#[must_use]
pub fn inline_code(text: &str) -> String {
    format!("`{text}`")
}

/// Wraps text in a fenced code block, optionally tagged with a language.
#[must_use]
pub fn code_block(text: &str, language: Option<&str>) -> String {
    format!("```{}\n{text}\n```", language.unwrap_or_default())
}

/// Hides text behind a `||spoiler||`.
#[must_use]
pub fn spoiler(text: &str) -> String {
    format!("||{text}||")
}

/// Prefixes every line with `> `.
#[must_use]
pub fn quote(text: &str) -> String {
    prefix_lines(text, ">")
}

/// Mention that pings a user.
#[must_use]
pub fn ping_user(user_id: u64) -> String {
    format!("<@{user_id}>")
}

/// Mention that pings a role.
#[must_use]
pub fn ping_role(role_id: u64) -> String {
    format!("<@&{role_id}>")
}

/// Masked link showing `preview` and pointing at `url`.
#[must_use]
pub fn hyperlink(url: &str, preview: &str) -> String {
    format!("[{preview}]({url})")
}

/// Heading size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    /// `#`
    #[default]
    H1,
    /// `##`
    H2,
    /// `###`
    H3,
}

impl HeadingLevel {
    const fn hashes(self) -> &'static str {
        match self {
            Self::H1 => "#",
            Self::H2 => "##",
            Self::H3 => "###",
        }
    }
}

/// Formats every line of `text` as a heading.
///
/// `depth` adds two spaces of indentation per level after the hashes.
#[must_use]
pub fn heading(text: &str, level: HeadingLevel, depth: usize) -> String {
    let spacer = format!("{}{}", level.hashes(), "  ".repeat(depth));
    prefix_lines(text, &spacer)
}

/// List marker style for [`bullet_points`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletStyle {
    /// `* item`
    #[default]
    Bullet,
    /// `1. item`
    Numbered,
}

/// Formats items as a markdown list, one item per line.
#[must_use]
pub fn bullet_points<I>(items: I, style: BulletStyle) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (index, item) in items.into_iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = match style {
            BulletStyle::Bullet => writeln!(out, "* {item}"),
            BulletStyle::Numbered => writeln!(out, "{}. {item}", index + 1),
        };
    }
    out
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    let mut out = String::with_capacity(text.len() + prefix.len() + 2);
    for line in text.split('\n') {
        let _ = writeln!(out, "{prefix} {line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_styles() {
        assert_eq!(bold("a"), "**a**");
        assert_eq!(italics("a"), "*a*");
        assert_eq!(underline("a"), "__a__");
        assert_eq!(strikethrough("a"), "~~a~~");
        assert_eq!(inline_code("a"), "`a`");
        assert_eq!(spoiler("a"), "||a||");
    }

    #[test]
    fn code_block_with_and_without_language() {
        assert_eq!(code_block("let x = 1;", Some("rust")), "```rust\nlet x = 1;\n```");
        assert_eq!(code_block("plain", None), "```\nplain\n```");
    }

    #[test]
    fn quote_prefixes_each_line() {
        assert_eq!(quote("one\ntwo"), "> one\n> two\n");
    }

    #[test]
    fn mentions() {
        assert_eq!(ping_user(42), "<@42>");
        assert_eq!(ping_role(7), "<@&7>");
    }

    #[test]
    fn hyperlink_masks_url() {
        assert_eq!(
            hyperlink("https://example.com", "docs"),
            "[docs](https://example.com)"
        );
    }

    #[test]
    fn heading_levels_and_depth() {
        assert_eq!(heading("Title", HeadingLevel::H1, 0), "# Title\n");
        assert_eq!(heading("Sub", HeadingLevel::H3, 1), "###   Sub\n");
        assert_eq!(heading("a\nb", HeadingLevel::H2, 0), "## a\n## b\n");
    }

    #[test]
    fn bullet_list() {
        assert_eq!(bullet_points(["x", "y"], BulletStyle::Bullet), "* x\n* y\n");
    }

    #[test]
    fn numbered_list_starts_at_one() {
        assert_eq!(
            bullet_points([10, 20, 30], BulletStyle::Numbered),
            "1. 10\n2. 20\n3. 30\n"
        );
    }

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(bullet_points(Vec::<String>::new(), BulletStyle::Numbered), "");
    }
}
