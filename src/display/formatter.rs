//! Markdown terminal formatting using termimad

use termimad::{gray, MadSkin};

use crate::display::terminal::ColorChoice;

/// Print a rendered note to the terminal with rich formatting (or plain fallback)
pub fn print_note(markdown: &str, color: ColorChoice) {
    if color.should_use_colors() {
        print_rich(markdown);
    } else {
        print_plain(markdown);
    }
}

/// Print with termimad styling
fn print_rich(markdown: &str) {
    let mut skin = MadSkin::default();
    customize_skin(&mut skin);
    skin.print_text(&fence_front_matter(markdown));
}

/// Wrap the front-matter block in a yaml fence so termimad keeps it verbatim
fn fence_front_matter(markdown: &str) -> String {
    let Some(rest) = markdown.strip_prefix("---\n") else {
        return markdown.to_string();
    };
    let Some(end) = rest.find("\n---\n") else {
        return markdown.to_string();
    };

    let (front_matter, body) = (&rest[..end], &rest[end + "\n---\n".len()..]);
    format!("```yaml\n---\n{}\n---\n```\n{}", front_matter, body)
}

fn customize_skin(skin: &mut MadSkin) {
    use termimad::crossterm::style::{Attribute, Color::*};

    // Heading: bold cyan
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);

    // Front matter: green on gray
    skin.code_block.set_bg(gray(2));
    skin.code_block.set_fg(Green);

    skin.bold.add_attr(Attribute::Bold);
    skin.italic.add_attr(Attribute::Italic);
}

fn print_plain(markdown: &str) {
    print!("{}", markdown);
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "---\ntitle: \"Hello\"\ntags: [\"go\"]\n---\n\n# Hello\n";

    #[test]
    fn test_fence_front_matter() {
        let fenced = fence_front_matter(NOTE);
        assert_eq!(
            fenced,
            "```yaml\n---\ntitle: \"Hello\"\ntags: [\"go\"]\n---\n```\n\n# Hello\n"
        );
    }

    #[test]
    fn test_fence_without_front_matter_is_unchanged() {
        assert_eq!(fence_front_matter("# Hello\n"), "# Hello\n");
        assert_eq!(fence_front_matter("---\nunterminated"), "---\nunterminated");
    }

    #[test]
    fn test_print_note_plain_no_panic() {
        print_note(NOTE, ColorChoice::Never);
    }

    #[test]
    fn test_print_note_rich_no_panic() {
        print_note(NOTE, ColorChoice::Always);
    }
}
