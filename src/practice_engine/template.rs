//! Question-text template renderer.
//!
//! Templates come from the translation tables and contain `${...}`
//! placeholders. A placeholder is either a bare variable name
//! (`${num1}`) or a conditional over one bound variable:
//!
//! ```text
//! ${b >= 0 ? "+" : ""}
//! ```
//!
//! The conditional grammar is fixed and interpreted by a hand-rolled
//! parser: `ident op integer ? "fragment" : "fragment"` with
//! `op ∈ {==, !=, >=, <=, >, <}`. Template text originates from translated
//! resource files, so nothing here may ever evaluate arbitrary code.
//!
//! Rendering fails soft: a placeholder that cannot be parsed or resolved
//! becomes the empty string and the rest of the question still renders.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// A value bound to a template variable.
///
/// Decimals are bound as [`Value::Text`] after formatting (see
/// `numeric::format_decimal`) so the question shows the operand exactly as
/// the answer option shows the result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Named bindings for one render call.
pub type Bindings<'a> = [(&'a str, Value)];

#[derive(Debug, Error, PartialEq)]
enum ExprError {
    #[error("unbound variable {0:?}")]
    UnboundVariable(String),
    #[error("variable {0:?} is not numeric")]
    NotNumeric(String),
    #[error("malformed expression at {0:?}")]
    Malformed(String),
}

/// Substitute every `${...}` placeholder in `template` against `bindings`.
///
/// Unresolvable placeholders become `""`; this never fails.
pub fn render(template: &str, bindings: &Bindings<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        match placeholder_end(body) {
            Some(end) => {
                let expr = &body[..end];
                match eval(expr, bindings) {
                    Ok(text) => out.push_str(&text),
                    Err(err) => {
                        debug!(placeholder = expr, %err, "template placeholder failed, substituting empty string");
                    }
                }
                rest = &body[end + 1..];
            }
            None => {
                // Unterminated placeholder: emit the rest verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Find the closing `}` of a placeholder body, skipping over quoted
/// fragments so a literal `}` inside quotes does not end the placeholder.
fn placeholder_end(body: &str) -> Option<usize> {
    let mut in_quotes = false;
    for (i, c) in body.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '}' if !in_quotes => return Some(i),
            _ => {}
        }
    }
    None
}

fn eval(expr: &str, bindings: &Bindings<'_>) -> Result<String, ExprError> {
    let expr = expr.trim();
    if expr.contains('?') {
        eval_conditional(expr, bindings)
    } else {
        lookup(expr, bindings).map(|v| v.to_string())
    }
}

fn lookup<'b>(name: &str, bindings: &'b Bindings<'_>) -> Result<&'b Value, ExprError> {
    bindings
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| v)
        .ok_or_else(|| ExprError::UnboundVariable(name.to_string()))
}

fn lookup_int(name: &str, bindings: &Bindings<'_>) -> Result<i64, ExprError> {
    match lookup(name, bindings)? {
        Value::Int(n) => Ok(*n),
        Value::Text(_) => Err(ExprError::NotNumeric(name.to_string())),
    }
}

/// Parse and evaluate `ident op integer ? "frag" : "frag"`.
fn eval_conditional(expr: &str, bindings: &Bindings<'_>) -> Result<String, ExprError> {
    let mut p = Parser::new(expr);

    let ident = p.ident()?;
    let op = p.comparison_op()?;
    let literal = p.integer()?;
    p.expect('?')?;
    let then_frag = p.quoted()?;
    p.expect(':')?;
    let else_frag = p.quoted()?;
    p.end()?;

    let left = lookup_int(&ident, bindings)?;
    let holds = match op {
        Cmp::Eq => left == literal,
        Cmp::Ne => left != literal,
        Cmp::Ge => left >= literal,
        Cmp::Le => left <= literal,
        Cmp::Gt => left > literal,
        Cmp::Lt => left < literal,
    };
    Ok(if holds { then_frag } else { else_frag })
}

#[derive(Debug, Clone, Copy)]
enum Cmp {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

/// Cursor over a conditional expression. Each method consumes leading
/// whitespace, then one token.
struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser { src, pos: 0 }
    }

    fn remainder(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.remainder();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    fn malformed(&self) -> ExprError {
        ExprError::Malformed(self.remainder().to_string())
    }

    fn ident(&mut self) -> Result<String, ExprError> {
        self.skip_ws();
        let rest = self.remainder();
        let len = rest
            .char_indices()
            .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
            .count();
        if len == 0 {
            return Err(self.malformed());
        }
        let ident = &rest[..len];
        self.pos += len;
        Ok(ident.to_string())
    }

    fn comparison_op(&mut self) -> Result<Cmp, ExprError> {
        self.skip_ws();
        let rest = self.remainder();
        let (op, len) = if rest.starts_with("==") {
            (Cmp::Eq, 2)
        } else if rest.starts_with("!=") {
            (Cmp::Ne, 2)
        } else if rest.starts_with(">=") {
            (Cmp::Ge, 2)
        } else if rest.starts_with("<=") {
            (Cmp::Le, 2)
        } else if rest.starts_with('>') {
            (Cmp::Gt, 1)
        } else if rest.starts_with('<') {
            (Cmp::Lt, 1)
        } else {
            return Err(self.malformed());
        };
        self.pos += len;
        Ok(op)
    }

    fn integer(&mut self) -> Result<i64, ExprError> {
        self.skip_ws();
        let rest = self.remainder();
        let sign_len = if rest.starts_with('-') { 1 } else { 0 };
        let digits = rest[sign_len..]
            .char_indices()
            .take_while(|(_, c)| c.is_ascii_digit())
            .count();
        if digits == 0 {
            return Err(self.malformed());
        }
        let len = sign_len + digits;
        let value = rest[..len].parse().map_err(|_| self.malformed())?;
        self.pos += len;
        Ok(value)
    }

    fn expect(&mut self, c: char) -> Result<(), ExprError> {
        self.skip_ws();
        if self.remainder().starts_with(c) {
            self.pos += c.len_utf8();
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    fn quoted(&mut self) -> Result<String, ExprError> {
        self.expect('"')?;
        let rest = self.remainder();
        let end = rest.find('"').ok_or_else(|| self.malformed())?;
        let frag = rest[..end].to_string();
        self.pos += end + 1;
        Ok(frag)
    }

    fn end(&mut self) -> Result<(), ExprError> {
        self.skip_ws();
        if self.remainder().is_empty() {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }
}
