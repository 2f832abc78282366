//! Console output formatting for the recommendation session.

use colored::Colorize;
use lector::corpus::Article;
use std::io::Write;

/// Width of the rule printed above and below an article body.
const RULE_WIDTH: usize = 41;

/// Print the header above the similar-picks menu block.
pub(crate) fn menu_header(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "Here are some new recommendations for you:".cyan().bold()
    )?;
    writeln!(out)
}

/// Print the header above the dissimilar-picks menu block.
pub(crate) fn different_header(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        "Or if you want something different, how about:".cyan().bold()
    )?;
    writeln!(out)
}

/// Print one numbered menu entry. Numbers are 1-based and right-aligned
/// so two-digit menus line up.
pub(crate) fn menu_item(out: &mut impl Write, number: usize, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}. {}", format!("{number:>3}").bold(), title)
}

/// Print the choice prompt (no trailing newline).
pub(crate) fn prompt(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "\nYour choice? ")?;
    out.flush()
}

/// Print a full article with its corpus index.
pub(crate) fn article(out: &mut impl Write, index: usize, article: &Article) -> std::io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n")?;
    writeln!(out, "{}", format!("Article {index}").dimmed())?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{}", article.title.bold())?;
    writeln!(out)?;
    writeln!(out, "{}", article.text)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "\n")
}

/// Print the pause prompt shown after an article (no trailing newline).
pub(crate) fn press_enter(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "Press Enter to continue ")?;
    out.flush()
}

/// Print the exit message for an invalid menu choice.
pub(crate) fn goodbye(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", "Invalid choice. Goodbye!".yellow())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl Fn(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to buffer");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn test_menu_item_is_one_based_and_aligned() {
        colored::control::set_override(false);
        let line = capture(|out| menu_item(out, 10, "A Title"));
        assert_eq!(line, " 10. A Title\n");
    }

    #[test]
    fn test_article_contains_title_and_text() {
        colored::control::set_override(false);
        let art = Article {
            title: "The Title".to_string(),
            text: "Body text".to_string(),
        };
        let rendered = capture(|out| article(out, 3, &art));
        assert!(rendered.contains("Article 3"));
        assert!(rendered.contains("The Title"));
        assert!(rendered.contains("Body text"));
        assert!(rendered.contains(&"=".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_goodbye_message() {
        colored::control::set_override(false);
        let line = capture(|out| goodbye(out));
        assert_eq!(line, "Invalid choice. Goodbye!\n");
    }
}
