//! Inspect rewriter — expand `let html = render(...)` snapshot tests.
//!
//! Turns
//!
//! ```text
//! let html = render("div")
//! @json.inspect(html, content="<div></div>")
//! ```
//!
//! into
//!
//! ```text
//! inspect(@pug.render("div"), content="<div></div>")
//! @json.inspect(@pug.parse("div"))
//! ```
//!
//! The scan is a single forward pass. At each line the recognizers in
//! [`RECOGNIZERS`] are tried in order; the first match consumes its region and
//! emits the replacement, otherwise the line is copied through unchanged.

mod patterns;
mod shapes;

use serde::Serialize;

pub use shapes::{derive_source, RenderCall, RenderFn, Replacement, Shape};

/// A recognizer inspects the document at a cursor and declines or matches.
pub type Recognizer = fn(&[&str], usize) -> Option<Replacement>;

/// Recognizers in priority order.
pub const RECOGNIZERS: &[Recognizer] = &[shapes::single_line, shapes::pug_block, shapes::multi_line];

/// How many regions of each shape were rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ShapeCounts {
    pub single_line: usize,
    pub pug_block: usize,
    pub multi_line: usize,
}

impl ShapeCounts {
    fn record(&mut self, shape: Shape) {
        match shape {
            Shape::SingleLine => self.single_line += 1,
            Shape::PugBlock => self.pug_block += 1,
            Shape::MultiLine => self.multi_line += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.single_line + self.pug_block + self.multi_line
    }
}

/// Output of a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult<T> {
    pub output: T,
    pub changed: bool,
    pub shapes: ShapeCounts,
}

/// Rewrite a document given as lines.
pub fn rewrite(lines: &[&str]) -> RewriteResult<Vec<String>> {
    let mut output = Vec::with_capacity(lines.len());
    let mut shapes = ShapeCounts::default();
    let mut i = 0;

    while i < lines.len() {
        match RECOGNIZERS.iter().find_map(|recognize| recognize(lines, i)) {
            Some(replacement) => {
                shapes.record(replacement.shape);
                output.extend(replacement.lines);
                i += replacement.consumed;
            }
            None => {
                output.push(lines[i].to_string());
                i += 1;
            }
        }
    }

    RewriteResult {
        output,
        changed: shapes.total() > 0,
        shapes,
    }
}

/// Rewrite full file content.
///
/// Content that matches no shape comes back byte-for-byte identical. Rewritten
/// content is written with LF line endings throughout, CRLF input included.
pub fn rewrite_content(content: &str) -> RewriteResult<String> {
    let lines: Vec<&str> = content.split('\n').collect();
    let result = rewrite(&lines);

    let output = if result.changed {
        result.output.join("\n").replace("\r\n", "\n")
    } else {
        content.to_string()
    };

    RewriteResult {
        output,
        changed: result.changed,
        shapes: result.shapes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite_str(content: &str) -> String {
        rewrite_content(content).output
    }

    #[test]
    fn rewrites_single_line_render() {
        let result = rewrite(&[
            r#"let html = render("div")"#,
            r#"@json.inspect(html, content="<div></div>")"#,
        ]);
        assert!(result.changed);
        assert_eq!(
            result.output,
            vec![
                r#"inspect(@pug.render("div"), content="<div></div>")"#,
                r#"@json.inspect(@pug.parse("div"))"#,
            ]
        );
        assert_eq!(result.shapes.single_line, 1);
    }

    #[test]
    fn rewrites_render_with_locals() {
        let result = rewrite(&[
            "let html = render_with_locals(src, loc)",
            "@json.inspect(html, content=out)",
        ]);
        assert_eq!(
            result.output,
            vec![
                "inspect(@pug.render_with_locals(src, loc), content=out)",
                "@json.inspect(@pug.parse(src))",
            ]
        );
    }

    #[test]
    fn unrelated_code_is_untouched() {
        let content = "fn main {\n  let x = 1\n  println(x)\n}\n";
        let result = rewrite_content(content);
        assert!(!result.changed);
        assert_eq!(result.output, content);
        assert_eq!(result.shapes, ShapeCounts::default());
    }

    #[test]
    fn preserves_surrounding_lines_and_trailing_newline() {
        let content = concat!(
            "test \"div\" {\n",
            "  let html = render(\"div\")\n",
            "  @json.inspect(html, content=\"<div></div>\")\n",
            "}\n",
        );
        let expected = concat!(
            "test \"div\" {\n",
            "  inspect(@pug.render(\"div\"), content=\"<div></div>\")\n",
            "  @json.inspect(@pug.parse(\"div\"))\n",
            "}\n",
        );
        assert_eq!(rewrite_str(content), expected);
    }

    #[test]
    fn handles_every_shape_in_one_file() {
        let content = [
            "test \"a\" {",
            "  let html = render_pretty(\"p hi\")",
            "  @json.inspect(html, content=\"<p>hi</p>\")",
            "}",
            "",
            "test \"b\" {",
            "  let pug =",
            "    #|ul",
            "    #|  li one",
            "  let html = render(pug)",
            "  @json.inspect(html, content=\"<ul><li>one</li></ul>\")",
            "}",
            "",
            "test \"c\" {",
            "  let html = render_with_locals(\"p= name\", { \"name\": \"x\" })",
            "  @json.inspect(",
            "    html,",
            "    content=\"<p>x</p>\",",
            "  )",
            "}",
        ]
        .join("\n");

        let expected = [
            "test \"a\" {",
            "  inspect(@pug.render_pretty(\"p hi\"), content=\"<p>hi</p>\")",
            "  @json.inspect(@pug.parse(\"p hi\"))",
            "}",
            "",
            "test \"b\" {",
            "  let pug =",
            "    #|ul",
            "    #|  li one",
            "  inspect(@pug.render(pug), content=\"<ul><li>one</li></ul>\")",
            "  @json.inspect(@pug.parse(pug))",
            "}",
            "",
            "test \"c\" {",
            "  inspect(",
            "    @pug.render_with_locals(\"p= name\", { \"name\": \"x\" }),",
            "    content=\"<p>x</p>\",",
            "  )",
            "  @json.inspect(@pug.parse(\"p= name\"))",
            "}",
        ]
        .join("\n");

        let result = rewrite_content(&content);
        assert_eq!(result.output, expected);
        assert_eq!(
            result.shapes,
            ShapeCounts {
                single_line: 1,
                pug_block: 1,
                multi_line: 1,
            }
        );
    }

    #[test]
    fn rewriting_twice_is_a_no_op() {
        let content = [
            "  let pug =",
            "    #|div",
            "  let html = render(pug)",
            "  @json.inspect(html, content=\"<div></div>\")",
            "  let html = render(\"span\")",
            "  @json.inspect(",
            "    html,",
            "    content=\"<span></span>\",",
            "  )",
        ]
        .join("\n");

        let once = rewrite_content(&content);
        assert!(once.changed);
        let twice = rewrite_content(&once.output);
        assert!(!twice.changed);
        assert_eq!(twice.output, once.output);
    }

    #[test]
    fn failed_pug_block_leaves_lines_for_rescan() {
        // The declaration is copied; the render line after the literal still
        // gets a chance as a multi-line shape.
        let content = [
            "let pug =",
            "  #|div",
            "let html = render(pug)",
            "@json.inspect(",
            "  html,",
            "  content=\"<div></div>\",",
            ")",
        ]
        .join("\n");

        let result = rewrite_content(&content);
        assert_eq!(result.shapes.pug_block, 0);
        assert_eq!(result.shapes.multi_line, 1);
        assert!(result.output.starts_with("let pug =\n  #|div\ninspect(\n"));
    }

    #[test]
    fn multi_line_without_content_is_copied() {
        let content = "let html = render(s)\n@json.inspect(\n  html,\n)\n";
        let result = rewrite_content(content);
        assert!(!result.changed);
        assert_eq!(result.output, content);
    }

    #[test]
    fn crlf_lines_still_match() {
        let content = "let html = render(\"a\")\r\n@json.inspect(html, content=\"<a></a>\")\r\nend";
        let result = rewrite_content(content);
        assert!(result.changed);
        assert_eq!(
            result.output,
            "inspect(@pug.render(\"a\"), content=\"<a></a>\")\n@json.inspect(@pug.parse(\"a\"))\nend"
        );
    }

    #[test]
    fn crlf_file_is_written_with_lf_endings() {
        let content = "a\r\nlet html = render(\"a\")\r\n@json.inspect(html, content=x)\r\nb\r\n";
        let result = rewrite_content(content);
        assert!(result.changed);
        assert_eq!(
            result.output,
            "a\ninspect(@pug.render(\"a\"), content=x)\n@json.inspect(@pug.parse(\"a\"))\nb\n"
        );
    }

    #[test]
    fn crlf_multi_line_content_is_normalized() {
        let content = concat!(
            "let html = render(s)\r\n",
            "@json.inspect(\r\n",
            "  html,\r\n",
            "  content=(\r\n",
            "    #|<p></p>\r\n",
            "  ),\r\n",
            ")\r\n",
        );
        let result = rewrite_content(content);
        assert!(!result.output.contains('\r'));
        assert!(result.output.contains("  content=(\n    #|<p></p>\n  ),\n)\n"));
    }

    #[test]
    fn unchanged_crlf_file_keeps_its_bytes() {
        let content = "a\r\nb\r\n";
        let result = rewrite_content(content);
        assert!(!result.changed);
        assert_eq!(result.output, content);
    }

    #[test]
    fn empty_document() {
        let result = rewrite_content("");
        assert!(!result.changed);
        assert_eq!(result.output, "");
    }
}
