//! Shape recognizers.
//!
//! Each recognizer looks at the document from a cursor position and either
//! declines or returns a [`Replacement`]: how many input lines it consumed and
//! the lines to emit in their place. Recognizers never mutate the document.

use super::patterns::{
    INSPECT_LINE, INSPECT_OPEN, LITERAL_MARKER, MULTILINE_CONTENT, PUG_DECL, RENDER_LINE,
};

/// One of the three render functions the test idiom uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFn {
    Render,
    RenderPretty,
    RenderWithLocals,
}

impl RenderFn {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "render" => Some(RenderFn::Render),
            "render_pretty" => Some(RenderFn::RenderPretty),
            "render_with_locals" => Some(RenderFn::RenderWithLocals),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFn::Render => "render",
            RenderFn::RenderPretty => "render_pretty",
            RenderFn::RenderWithLocals => "render_with_locals",
        }
    }
}

/// Which shape produced a replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    SingleLine,
    PugBlock,
    MultiLine,
}

/// A recognized region: `consumed` input lines become `lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub shape: Shape,
    pub consumed: usize,
    pub lines: Vec<String>,
}

/// A parsed `let html = <func>(<args>)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCall<'a> {
    pub indent: &'a str,
    pub func: RenderFn,
    pub args: &'a str,
}

impl<'a> RenderCall<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        let caps = RENDER_LINE.captures(line)?;
        Some(RenderCall {
            indent: caps.get(1)?.as_str(),
            func: RenderFn::from_name(caps.get(2)?.as_str())?,
            args: caps.get(3)?.as_str(),
        })
    }

    /// Template source passed to `@pug.parse`.
    pub fn source(&self) -> &'a str {
        derive_source(self.func, self.args)
    }

    /// `inspect(...)` and `@json.inspect(@pug.parse(...))` on one line each.
    fn single_line_pair(&self, content: &str) -> [String; 2] {
        [
            format!(
                "{}inspect(@pug.{}({}), content={})",
                self.indent,
                self.func.as_str(),
                self.args,
                content
            ),
            self.parse_line(),
        ]
    }

    fn parse_line(&self) -> String {
        format!("{}@json.inspect(@pug.parse({}))", self.indent, self.source())
    }
}

/// Source expression for a render call's argument blob.
///
/// `render_with_locals` takes the locals last, so the source is everything
/// before the last comma, trimmed. A blob with no comma is returned trimmed.
/// The split is textual: locals containing commas are not supported.
pub fn derive_source(func: RenderFn, args: &str) -> &str {
    match func {
        RenderFn::RenderWithLocals => match args.rsplit_once(',') {
            Some((source, _locals)) => source.trim(),
            None => args.trim(),
        },
        RenderFn::Render | RenderFn::RenderPretty => args,
    }
}

fn inspect_content(line: &str) -> Option<&str> {
    INSPECT_LINE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Shape A: render line followed by a single-line inspect.
pub fn single_line(lines: &[&str], pos: usize) -> Option<Replacement> {
    let call = RenderCall::parse(lines.get(pos)?)?;
    let content = inspect_content(lines.get(pos + 1)?)?;

    Some(Replacement {
        shape: Shape::SingleLine,
        consumed: 2,
        lines: call.single_line_pair(content).into(),
    })
}

/// Shape B: `let pug =`, a block literal, then a Shape A pair.
///
/// The declaration and literal lines are kept verbatim; only the render and
/// inspect lines are rewritten.
pub fn pug_block(lines: &[&str], pos: usize) -> Option<Replacement> {
    if !PUG_DECL.is_match(lines.get(pos)?) {
        return None;
    }

    let literal_end = lines[pos + 1..]
        .iter()
        .position(|line| !line.trim().starts_with(LITERAL_MARKER))
        .map_or(lines.len(), |offset| pos + 1 + offset);

    let call = RenderCall::parse(lines.get(literal_end)?)?;
    let content = inspect_content(lines.get(literal_end + 1)?)?;

    let mut out: Vec<String> = lines[pos..literal_end]
        .iter()
        .map(|line| line.to_string())
        .collect();
    out.extend(call.single_line_pair(content));

    Some(Replacement {
        shape: Shape::PugBlock,
        consumed: literal_end + 2 - pos,
        lines: out,
    })
}

/// Shape C: render line followed by an inspect call spread over several lines.
pub fn multi_line(lines: &[&str], pos: usize) -> Option<Replacement> {
    let call = RenderCall::parse(lines.get(pos)?)?;
    if lines.get(pos + 1)?.trim() != INSPECT_OPEN {
        return None;
    }

    let block_start = pos + 1;
    let block_end = balanced_block_end(lines, block_start);
    let block = lines[block_start..block_end].join("\n");

    let caps = MULTILINE_CONTENT.captures(&block)?;
    let content = caps.get(1)?.as_str().trim();
    let content = content.strip_suffix(',').unwrap_or(content);

    let indent = call.indent;
    Some(Replacement {
        shape: Shape::MultiLine,
        consumed: block_end - pos,
        lines: vec![
            format!("{}inspect(", indent),
            format!("{}  @pug.{}({}),", indent, call.func.as_str(), call.args),
            format!("{}  content={},", indent, content),
            format!("{})", indent),
            call.parse_line(),
        ],
    })
}

/// Exclusive end of the block starting at `start` whose running paren depth
/// first returns to zero. An unterminated block runs to the end of the document.
fn balanced_block_end(lines: &[&str], start: usize) -> usize {
    let mut depth: isize = 0;
    for (offset, line) in lines[start..].iter().enumerate() {
        depth += line.matches('(').count() as isize;
        depth -= line.matches(')').count() as isize;
        if depth == 0 {
            return start + offset + 1;
        }
    }
    lines.len()
}
