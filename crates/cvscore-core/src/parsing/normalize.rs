/// Normalize raw extracted text into clean, line-oriented text.
///
/// Steps:
/// 1. Treat any run of `\r`/`\n` as a single line break
/// 2. Collapse spaces and tabs inside each line to one space, then trim
/// 3. Drop lines that end up empty
///
/// Line boundaries survive so that the line-oriented heuristics downstream
/// (bullets, degree lines, achievement lines) still see the layout. The
/// result is a fixed point: normalizing it again returns it unchanged.
pub fn normalize_text(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in raw.split(['\r', '\n']) {
        let mut cleaned = String::with_capacity(line.len());
        let mut pending_space = false;
        for c in line.chars() {
            if c == ' ' || c == '\t' {
                pending_space = true;
                continue;
            }
            if pending_space && !cleaned.is_empty() {
                cleaned.push(' ');
            }
            pending_space = false;
            cleaned.push(c);
        }

        // Other Unicode whitespace (NBSP, form feed) is trimmed at the edges
        // but kept verbatim inside the line.
        let trimmed = cleaned.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Iterate over the non-blank lines of normalized text.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|l| !l.is_empty())
}
