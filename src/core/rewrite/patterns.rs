//! Line patterns for the render + inspect test idiom.

use regex::Regex;
use std::sync::LazyLock;

/// `let html = render(...)`, `render_pretty(...)` or `render_with_locals(...)`.
///
/// Captures: indentation, function name, argument blob (everything between the
/// function's opening paren and the last closing paren on the line).
pub(super) static RENDER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)let\s+html\s*=\s*(render(?:_pretty|_with_locals)?)\((.+)\)\s*$").unwrap()
});

/// `@json.inspect(html, content=...)` on a single line. Captures the content value.
pub(super) static INSPECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*@json\.inspect\(html,\s*content=(.+)\)\s*$").unwrap()
});

/// `let pug =` with nothing after it; the value follows as a block literal.
pub(super) static PUG_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*let\s+pug\s*=\s*$").unwrap());

/// `content=` field of a multi-line inspect call, searched in the joined block.
/// The value stops before an optional trailing comma and the final `)`.
pub(super) static MULTILINE_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)content\s*=\s*(.+?)\s*,?\s*\)\s*$").unwrap());

/// Opening line of a multi-line inspect call, compared after trimming.
pub(super) const INSPECT_OPEN: &str = "@json.inspect(";

/// Block string literal marker.
pub(super) const LITERAL_MARKER: &str = "#|";
