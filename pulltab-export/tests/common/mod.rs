//! Test-only evaluator for the object literals in generated Apps Script.
//!
//! Understands exactly the subset the writer emits: objects with bare or
//! quoted keys, arrays, double-quoted strings, numbers, `true`, `false`,
//! `null`, and the `new Date().toISOString()` timestamp expression, which
//! evaluates to a placeholder string.

use serde_json::{Map, Value};

pub const RUNTIME_TIMESTAMP: &str = "<runtime timestamp>";

/// Evaluate `function name() { return <literal>; }` and return the literal.
pub fn eval_function(source: &str, name: &str) -> Value {
    let header = format!("function {name}() {{");
    let start = source.find(&header).expect("function header") + header.len();
    let body = &source[start..];
    let ret = body.find("return").expect("return statement") + "return".len();

    let mut parser = Parser {
        src: body[ret..].as_bytes(),
        pos: 0,
    };
    let value = parser.value();
    parser.skip_ws();
    assert_eq!(parser.peek(), Some(b';'), "expected ';' after literal");
    value
}

struct Parser<'a> {
    src: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\n' | b'\r' | b'\t')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) {
        self.skip_ws();
        assert_eq!(
            self.peek(),
            Some(byte),
            "expected '{}' at byte {}",
            byte as char,
            self.pos
        );
        self.pos += 1;
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.src[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    fn value(&mut self) -> Value {
        self.skip_ws();
        match self.peek().expect("unexpected end of input") {
            b'{' => self.object(),
            b'[' => self.array(),
            b'"' => Value::String(self.string()),
            b'-' | b'0'..=b'9' => self.number(),
            _ => {
                if self.eat_word("true") {
                    Value::Bool(true)
                } else if self.eat_word("false") {
                    Value::Bool(false)
                } else if self.eat_word("null") {
                    Value::Null
                } else if self.eat_word("new Date().toISOString()") {
                    Value::String(RUNTIME_TIMESTAMP.to_string())
                } else {
                    panic!("unexpected token at byte {}", self.pos);
                }
            }
        }
    }

    fn object(&mut self) -> Value {
        self.expect(b'{');
        let mut map = Map::new();
        self.skip_ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Value::Object(map);
        }
        loop {
            self.skip_ws();
            let key = if self.peek() == Some(b'"') {
                self.string()
            } else {
                self.bare_key()
            };
            self.expect(b':');
            let value = self.value();
            map.insert(key, value);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Value::Object(map);
                }
                other => panic!("unexpected {other:?} in object at byte {}", self.pos),
            }
        }
    }

    fn array(&mut self) -> Value {
        self.expect(b'[');
        let mut items = Vec::new();
        self.skip_ws();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Value::Array(items);
        }
        loop {
            items.push(self.value());
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Value::Array(items);
                }
                other => panic!("unexpected {other:?} in array at byte {}", self.pos),
            }
        }
    }

    fn bare_key(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_' || c == b'$')
        {
            self.pos += 1;
        }
        assert!(self.pos > start, "empty key at byte {start}");
        String::from_utf8(self.src[start..self.pos].to_vec()).unwrap()
    }

    fn string(&mut self) -> String {
        self.expect(b'"');
        let mut bytes = Vec::new();
        loop {
            let c = self.peek().expect("unterminated string");
            self.pos += 1;
            match c {
                b'"' => break,
                b'\\' => {
                    let esc = self.peek().expect("dangling escape");
                    self.pos += 1;
                    match esc {
                        b'n' => bytes.push(b'\n'),
                        b'r' => bytes.push(b'\r'),
                        b't' => bytes.push(b'\t'),
                        b'u' => {
                            let hex = std::str::from_utf8(&self.src[self.pos..self.pos + 4]).unwrap();
                            let code = u32::from_str_radix(hex, 16).unwrap();
                            self.pos += 4;
                            let ch = char::from_u32(code).expect("escaped surrogate");
                            let mut buf = [0u8; 4];
                            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                        }
                        other => bytes.push(other),
                    }
                }
                other => bytes.push(other),
            }
        }
        String::from_utf8(bytes).unwrap()
    }

    fn number(&mut self) -> Value {
        let start = self.pos;
        while matches!(self.peek(), Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9')) {
            self.pos += 1;
        }
        let text = std::str::from_utf8(&self.src[start..self.pos]).unwrap();
        serde_json::from_str(text).unwrap()
    }
}
