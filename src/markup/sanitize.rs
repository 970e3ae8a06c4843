//! Markup to terminal text.
//!
//! Sign-in markup comes from an external file, so nothing in it may reach the
//! terminal unfiltered. Tags are dropped, entities decoded, and every control
//! character except the line feed removed.

const DROPPED_BLOCKS: [&str; 2] = ["script", "style"];

const BLOCK_TAGS: &[&str] = &[
    "p", "div", "br", "hr", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ul", "ol", "form",
    "section", "article", "header", "footer", "main", "nav", "aside", "label", "table", "tr",
    "fieldset", "legend",
];

const ENTITIES: [(&str, &str); 5] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
];

/// Converts markup into display lines.
///
/// # Example
///
/// ```rust
/// use recipe_explorer::markup::sanitize_markup;
///
/// let lines = sanitize_markup("<h2>Sign in</h2><p>Salt &amp; pepper</p><script>x()</script>");
/// assert_eq!(lines, ["Sign in", "Salt & pepper"]);
/// ```
#[must_use]
pub fn sanitize_markup(markup: &str) -> Vec<String> {
    let without_blocks = drop_blocks(markup);
    let text = strip_tags(&without_blocks);
    let decoded = decode_entities(&text);
    let cleaned: String = decoded
        .chars()
        .filter_map(|c| match c {
            '\n' => Some('\n'),
            '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect();

    collapse_lines(&cleaned)
}

/// Removes `<script>` and `<style>` elements with their content. An unclosed
/// element swallows the rest of the input.
fn drop_blocks(markup: &str) -> String {
    let lower = markup.to_ascii_lowercase();
    let mut out = String::with_capacity(markup.len());
    let mut pos = 0;

    while pos < markup.len() {
        let next = DROPPED_BLOCKS
            .iter()
            .filter_map(|name| lower[pos..].find(&format!("<{name}")).map(|i| (pos + i, *name)))
            .min_by_key(|(start, _)| *start);

        let Some((start, name)) = next else {
            out.push_str(&markup[pos..]);
            break;
        };

        out.push_str(&markup[pos..start]);
        let closing = format!("</{name}");
        pos = lower[start..]
            .find(&closing)
            .and_then(|close| {
                let after_close = start + close;
                lower[after_close..].find('>').map(|gt| after_close + gt + 1)
            })
            .unwrap_or(markup.len());
    }

    out
}

fn strip_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            out.push('<');
            rest = after;
            continue;
        };

        render_tag(&after[..close], &mut out);
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    out
}

fn render_tag(tag: &str, out: &mut String) {
    let closing = tag.starts_with('/');
    let name: String = tag
        .trim_start_matches('/')
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    match name.as_str() {
        "input" if !closing => {
            let kind = attribute(tag, "type").unwrap_or_default();
            if kind.eq_ignore_ascii_case("hidden") {
                return;
            }
            let label = attribute(tag, "placeholder")
                .or_else(|| attribute(tag, "value"))
                .or_else(|| attribute(tag, "name"))
                .unwrap_or_else(|| "input".to_string());
            line_break(out);
            out.push_str(&format!("[ {label} ]\n"));
        }
        "button" if closing => out.push_str(" ]\n"),
        "button" => {
            line_break(out);
            out.push_str("[ ");
        }
        name if BLOCK_TAGS.contains(&name) => line_break(out),
        _ => {}
    }
}

fn line_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Value of `name="..."`, `name='...'`, or `name=bare` inside a tag body.
fn attribute(tag: &str, name: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let needle = format!("{name}=");
    let mut search_from = 0;

    while let Some(found) = lower[search_from..].find(&needle) {
        let start = search_from + found;
        search_from = start + needle.len();
        let preceded_by_space = lower[..start].ends_with(|c: char| c.is_ascii_whitespace());
        if !preceded_by_space {
            continue;
        }

        let value = &tag[start + needle.len()..];
        return Some(match value.chars().next() {
            Some(quote @ ('"' | '\'')) => value[1..]
                .split(quote)
                .next()
                .unwrap_or_default()
                .to_string(),
            _ => value
                .split(|c: char| c.is_ascii_whitespace() || c == '/')
                .next()
                .unwrap_or_default()
                .to_string(),
        });
    }

    None
}

fn decode_entities(text: &str) -> String {
    let decoded = ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain));
    decoded.replace("&amp;", "&")
}

/// Trims each line, squeezes inner whitespace, and keeps at most one blank
/// line between paragraphs.
fn collapse_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() && lines.last().map_or(true, String::is_empty) {
            continue;
        }
        lines.push(line);
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_and_style_blocks_are_removed_case_insensitively() {
        let lines = sanitize_markup(
            "<STYLE>.a{color:red}</STYLE><p>Hello</p><Script type=\"x\">alert(1)</sCrIpT >",
        );
        assert_eq!(lines, ["Hello"]);
    }

    #[test]
    fn unclosed_script_swallows_the_rest() {
        assert_eq!(sanitize_markup("<p>Keep</p><script>gone"), ["Keep"]);
    }

    #[test]
    fn escape_sequences_never_survive() {
        let lines = sanitize_markup("<p>\u{1b}[31mred\u{1b}[0m\r</p>");
        assert_eq!(lines, ["[31mred[0m"]);
        assert!(lines.iter().all(|l| !l.contains('\u{1b}')));
    }

    #[test]
    fn ampersand_is_decoded_last() {
        assert_eq!(sanitize_markup("&amp;lt;b&amp;gt;"), ["&lt;b&gt;"]);
        assert_eq!(sanitize_markup("&lt;b&gt; &quot;x&quot; it&#39;s"), ["<b> \"x\" it's"]);
    }

    #[test]
    fn inputs_and_buttons_become_placeholders() {
        let lines = sanitize_markup(
            "<form><input type=\"email\" placeholder=\"Email address\"/>\
             <input type='hidden' name='csrf'>\
             <input type=password name=password>\
             <button type=\"submit\">Sign in</button></form>",
        );
        assert_eq!(lines, ["[ Email address ]", "[ password ]", "[ Sign in ]"]);
    }

    #[test]
    fn blank_runs_collapse_to_one_line() {
        let lines = sanitize_markup("<div>One</div>\n\n\n<div></div><div>Two</div>\n\n");
        assert_eq!(lines, ["One", "", "Two"]);
    }

    #[test]
    fn stray_angle_bracket_is_kept_as_text() {
        assert_eq!(sanitize_markup("5 < 6"), ["5 < 6"]);
    }
}
