//! Source-literal output: a Google Apps Script function returning the
//! library as an object literal.
//!
//! The literal is rendered from the same serialized value as the JSON
//! artifact, so both carry identical games and categories. Only
//! `metadata.lastUpdated` may differ: by default it is rendered as
//! `new Date().toISOString()` and evaluated when the script runs.

use std::fmt::Write as _;

use pulltab_core::LibraryDocument;
use serde_json::Value;

use crate::{ExportError, LibraryWriter};

pub const DEFAULT_FUNCTION_NAME: &str = "getDefaultPullTabsLibrary";
pub const DEFAULT_FILE_NAME: &str = "gas_pulltabs_function.js";

const INDENT: &str = "  ";

/// Writes [`DEFAULT_FILE_NAME`] unless told otherwise.
#[derive(Debug, Clone)]
pub struct AppsScriptWriter {
    function_name: String,
    runtime_timestamp: bool,
}

impl AppsScriptWriter {
    /// Create a writer for the given function name.
    ///
    /// The name must be a plain identifier (`[A-Za-z_$][A-Za-z0-9_$]*`) and
    /// not a reserved word.
    pub fn new(function_name: impl Into<String>) -> Result<Self, ExportError> {
        let function_name = function_name.into();
        if !is_identifier(&function_name) {
            return Err(ExportError::InvalidFunctionName(function_name));
        }
        Ok(Self {
            function_name,
            runtime_timestamp: true,
        })
    }

    /// Render `lastUpdated` as the build timestamp instead of a runtime
    /// `new Date()` call.
    pub fn with_build_timestamp(mut self) -> Self {
        self.runtime_timestamp = false;
        self
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize, path: &[&str]) {
        if self.runtime_timestamp && path == ["metadata", "lastUpdated"] {
            out.push_str("new Date().toISOString()");
            return;
        }

        match value {
            Value::Object(map) => {
                if map.is_empty() {
                    out.push_str("{}");
                    return;
                }
                out.push_str("{\n");
                let last = map.len() - 1;
                for (i, (key, item)) in map.iter().enumerate() {
                    push_indent(out, depth + 1);
                    out.push_str(&js_key(key));
                    out.push_str(": ");
                    let mut child_path = path.to_vec();
                    child_path.push(key.as_str());
                    self.write_value(out, item, depth + 1, &child_path);
                    if i != last {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push('}');
            }
            Value::Array(items) => {
                if items.is_empty() {
                    out.push_str("[]");
                    return;
                }
                out.push_str("[\n");
                let last = items.len() - 1;
                for (i, item) in items.iter().enumerate() {
                    push_indent(out, depth + 1);
                    write_inline(out, item);
                    if i != last {
                        out.push(',');
                    }
                    out.push('\n');
                }
                push_indent(out, depth);
                out.push(']');
            }
            scalar => write_inline(out, scalar),
        }
    }
}

impl LibraryWriter for AppsScriptWriter {
    fn name(&self) -> &'static str {
        "Apps Script function"
    }

    fn render(&self, library: &LibraryDocument) -> Result<String, ExportError> {
        let value = serde_json::to_value(library)?;

        let mut out = String::new();
        let _ = writeln!(out, "function {}() {{", self.function_name);
        out.push_str(INDENT);
        out.push_str("return ");
        self.write_value(&mut out, &value, 1, &[]);
        out.push_str(";\n}\n");
        Ok(out)
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Array elements are written on one line each: `{name: "A", count: 10}`.
fn write_inline(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        // Same shortest round-trip formatting as the JSON artifact
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&js_string(s)),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_inline(out, item);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&js_key(key));
                out.push_str(": ");
                write_inline(out, item);
            }
            out.push('}');
        }
    }
}

/// Quote a string as a double-quoted script literal.
///
/// U+2028 and U+2029 are escaped because older script engines treat them as
/// line terminators inside string literals.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Object keys are bare when they are plain words, quoted otherwise (`"$1"`).
fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let bare = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if bare { key.to_string() } else { js_string(key) }
}

/// Words a function declaration cannot use as its name, strict mode included.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

fn is_identifier(name: &str) -> bool {
    if RESERVED_WORDS.contains(&name) {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "tests/apps_script_tests.rs"]
mod tests;
