/// A rendered source excerpt with its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    /// 1-based row of the highlight start.
    pub line:     usize,
    /// 1-based column (in characters) of the highlight start.
    pub column:   usize,
    /// The source line with a caret marker underneath the highlight range.
    pub rendered: String,
}

/// Renders the source line containing `start..end` with a caret underline.
///
/// `start` and `end` are byte offsets into `source`; the highlight is
/// clamped to the line holding `start` and always spans at least one
/// character.
///
/// # Example
/// ```
/// use embex::error::excerpt::render;
///
/// let excerpt = render("2 + @ 3", 4, 5);
/// assert_eq!(excerpt.line, 1);
/// assert_eq!(excerpt.column, 5);
/// assert_eq!(excerpt.rendered, "  1 | 2 + @ 3\n    |     ^");
/// ```
#[must_use]
pub fn render(source: &str, start: usize, end: usize) -> Excerpt {
    let start = start.min(source.len());
    let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[line_start..].find('\n')
                                       .map_or(source.len(), |i| line_start + i);
    let line_text = &source[line_start..line_end];

    let line = source[..start].matches('\n').count() + 1;
    let column = source[line_start..start].chars().count() + 1;
    let width = source[start..end.clamp(start, line_end)].chars().count().max(1);

    let number = line.to_string();
    let gutter = " ".repeat(number.len() + 1);
    let padding = " ".repeat(column - 1);
    let caret = "^".repeat(width);
    let rendered = format!("  {number} | {line_text}\n  {gutter}| {padding}{caret}");

    Excerpt { line,
              column,
              rendered }
}

#[cfg(test)]
mod tests {
    use super::render;

    #[test]
    fn renders_later_lines() {
        let excerpt = render("1 + 1\n2 # 2", 8, 9);
        assert_eq!(excerpt.line, 2);
        assert_eq!(excerpt.column, 3);
        assert_eq!(excerpt.rendered, "  2 | 2 # 2\n    |   ^");
    }

    #[test]
    fn highlight_is_never_empty() {
        let excerpt = render("abc", 1, 1);
        assert!(excerpt.rendered.ends_with('^'));
    }
}
