use super::lexer::token::{Token, TokenKind};
use super::reader::datum::Datum;

/// The writer produces the external representation of datums and tokens.
///
/// Datum output is canonical and re-readable: what the writer prints, the
/// reader reads back to an equal datum. Token output is the line oriented
/// `(kind value)` dump the test harnesses consume.
pub struct Writer;

impl Writer {
    pub fn new() -> Self {
        Self
    }

    pub fn write_datum(&self, datum: &Datum) -> String {
        match datum {
            Datum::Boolean(true, _) => "#t".to_string(),
            Datum::Boolean(false, _) => "#f".to_string(),
            Datum::Number(v, _) => v.to_string(),
            Datum::String(v, _) => format!("\"{}\"", self.escape_string(v, false)),
            Datum::Char(v, _) => self.write_char(*v),
            Datum::Symbol(v, _) => v.clone(),
            Datum::List(elements, _) => format!("({})", self.write_all(elements)),
            Datum::ImproperList(head, tail, _) => {
                format!("({} . {})", self.write_all(head), self.write_datum(tail))
            }
            Datum::Vector(elements, _) => format!("#({})", self.write_all(elements)),
            Datum::Quote(inner, _) => format!("(quote {})", self.write_datum(inner)),
            Datum::Quasiquote(inner, _) => format!("(quasiquote {})", self.write_datum(inner)),
            Datum::Unquote(inner, _) => format!("(unquote {})", self.write_datum(inner)),
            Datum::UnquoteSplicing(inner, _) => {
                format!("(unquote-splicing {})", self.write_datum(inner))
            }
        }
    }

    /// One line per token, as `(kind value)`; string and punctuator values
    /// are wrapped in double quotes.
    pub fn write_token(&self, token: &Token) -> String {
        match token.kind() {
            TokenKind::Boolean(true) => "(boolean #t)".to_string(),
            TokenKind::Boolean(false) => "(boolean #f)".to_string(),
            TokenKind::Character(c) => format!("(character {})", self.write_char(*c)),
            TokenKind::String(v) => format!("(string \"{}\")", self.escape_string(v, true)),
            TokenKind::Number(v) => format!("(number {})", v),
            TokenKind::Identifier(v) => format!("(identifier {})", v),
            TokenKind::Punctuator(p) => format!("(punctuator \"{}\")", p),
        }
    }

    fn write_all(&self, elements: &[Datum]) -> String {
        let parts: Vec<String> = elements.iter().map(|e| self.write_datum(e)).collect();
        parts.join(" ")
    }

    fn write_char(&self, c: char) -> String {
        match c {
            ' ' => "#\\space".to_string(),
            '\n' => "#\\newline".to_string(),
            c => format!("#\\{}", c),
        }
    }

    /// Escape `"` and `\`; the token dump additionally escapes newlines,
    /// the datum representation keeps them literal so it stays re-readable.
    fn escape_string(&self, v: &str, escape_newlines: bool) -> String {
        let mut out = String::with_capacity(v.len());
        for c in v.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' if escape_newlines => out.push_str("\\n"),
                c => out.push(c),
            }
        }
        out
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Round-trip a datum to its canonical s-expression string
pub fn prettyprint(datum: &Datum) -> String {
    Writer::new().write_datum(datum)
}
