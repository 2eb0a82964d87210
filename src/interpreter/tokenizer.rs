use logos::Logos;
use num_bigint::BigInt;

use crate::{error::TokenizeError, interpreter::value::core::Value, ops::{OpInfo, OpTag}};

/// Punctuation recognized by the tokenizer.
///
/// Braces are tokenized but rejected by the parser; keeping them in the
/// token grammar leaves room for an object-literal extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Punct {
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `.`
    Dot,
}

impl Punct {
    /// The single character this punctuation token stands for.
    #[must_use]
    pub const fn literal(self) -> char {
        match self {
            Self::ParenOpen => '(',
            Self::ParenClose => ')',
            Self::BracketOpen => '[',
            Self::BracketClose => ']',
            Self::BraceOpen => '{',
            Self::BraceClose => '}',
            Self::Comma => ',',
            Self::Colon => ':',
            Self::Dot => '.',
        }
    }
}

/// A lexical operator, before the parser decides whether it is used in
/// unary or binary position.
///
/// `-` and `+` are ambiguous at the lexical level; [`Operator::unary`]
/// resolves them to the `-x` / `+x` operations when they appear in prefix
/// position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Operator {
    Pow,
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    UShr,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    StrictEqual,
    NotEqual,
    StrictNotEqual,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Not,
    BitNot,
}

impl Operator {
    /// The literal text of this operator.
    #[must_use]
    pub const fn literal(self) -> &'static str {
        match self {
            Self::Pow => "**",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::UShr => ">>>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::StrictEqual => "===",
            Self::NotEqual => "!=",
            Self::StrictNotEqual => "!==",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
            Self::And => "&&",
            Self::Or => "||",
            Self::Not => "!",
            Self::BitNot => "~",
        }
    }

    /// Returns the binary operation this operator denotes in infix
    /// position, or `None` for the purely unary `!` and `~`.
    #[must_use]
    pub fn binary(self) -> Option<&'static OpInfo> {
        let tag = match self {
            Self::Pow => OpTag::Pow,
            Self::Mul => OpTag::Mul,
            Self::Div => OpTag::Div,
            Self::Rem => OpTag::Rem,
            Self::Add => OpTag::Add,
            Self::Sub => OpTag::Sub,
            Self::Shl => OpTag::Shl,
            Self::Shr => OpTag::Shr,
            Self::UShr => OpTag::UShr,
            Self::Less => OpTag::Less,
            Self::Greater => OpTag::Greater,
            Self::LessEqual => OpTag::LessEqual,
            Self::GreaterEqual => OpTag::GreaterEqual,
            Self::Equal => OpTag::Equal,
            Self::StrictEqual => OpTag::StrictEqual,
            Self::NotEqual => OpTag::NotEqual,
            Self::StrictNotEqual => OpTag::StrictNotEqual,
            Self::BitAnd => OpTag::BitAnd,
            Self::BitXor => OpTag::BitXor,
            Self::BitOr => OpTag::BitOr,
            Self::And => OpTag::And,
            Self::Or => OpTag::Or,
            Self::Not | Self::BitNot => return None,
        };
        Some(tag.info())
    }

    /// Returns the unary operation this operator denotes in prefix
    /// position, or `None` when it has no unary reading.
    #[must_use]
    pub fn unary(self) -> Option<&'static OpInfo> {
        let tag = match self {
            Self::Not => OpTag::Not,
            Self::BitNot => OpTag::BitNot,
            Self::Sub => OpTag::Neg,
            Self::Add => OpTag::Pos,
            _ => return None,
        };
        Some(tag.info())
    }
}

/// The decoded payload of a constant token.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number. Produced when the literal contains a
    /// decimal point or an exponent, or when a digit string does not fit in
    /// an `i64`.
    Real(f64),
    /// An arbitrary-precision integer, written with a trailing `n`.
    Big(BigInt),
    /// A quoted string, unescaped.
    Str(String),
}

/// A constant token: the literal text as scanned, plus the decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    /// The literal as it appeared in the fragment.
    pub literal: String,
    /// The decoded value.
    pub value:   ConstantValue,
}

/// A token in the stream handed to the parser.
///
/// `Embedded` tokens are spliced between fragments by the tokenizer driver
/// and carry the interpolated host value unchanged; every other variant is
/// scanned from fragment text.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A host value that filled an interpolation slot.
    Embedded(Value),
    /// A numeric or string constant.
    Constant(Constant),
    /// An identifier (Unicode `XID_Start`/`XID_Continue`, plus `$` and `_`).
    Identifier(String),
    /// An operator.
    Operator(Operator),
    /// Punctuation.
    Punct(Punct),
    /// A whitespace run; dropped by default, retained on request.
    Whitespace(String),
}

impl Token {
    /// The literal text of this token, used by diagnostics.
    ///
    /// Embedded tokens have no source text and render as `${...}`.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Embedded(_) => "${...}".to_string(),
            Self::Constant(constant) => constant.literal.clone(),
            Self::Identifier(name) => name.clone(),
            Self::Operator(operator) => operator.literal().to_string(),
            Self::Punct(punct) => punct.literal().to_string(),
            Self::Whitespace(ws) => ws.clone(),
        }
    }
}

/// The raw lexeme scanned from fragment text. `Token` is this enum plus the
/// spliced `Embedded` variant, which the scanner can never produce.
#[derive(Logos, Debug, Clone, PartialEq)]
enum Lexeme {
    #[token("(", |_| Punct::ParenOpen)]
    #[token(")", |_| Punct::ParenClose)]
    #[token("[", |_| Punct::BracketOpen)]
    #[token("]", |_| Punct::BracketClose)]
    #[token("{", |_| Punct::BraceOpen)]
    #[token("}", |_| Punct::BraceClose)]
    #[token(",", |_| Punct::Comma)]
    #[token(":", |_| Punct::Colon)]
    #[token(".", |_| Punct::Dot)]
    Punct(Punct),

    #[token("**", |_| Operator::Pow)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("%", |_| Operator::Rem)]
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("<<", |_| Operator::Shl)]
    #[token(">>>", |_| Operator::UShr)]
    #[token(">>", |_| Operator::Shr)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("<", |_| Operator::Less)]
    #[token(">", |_| Operator::Greater)]
    #[token("===", |_| Operator::StrictEqual)]
    #[token("!==", |_| Operator::StrictNotEqual)]
    #[token("==", |_| Operator::Equal)]
    #[token("!=", |_| Operator::NotEqual)]
    #[token("&&", |_| Operator::And)]
    #[token("||", |_| Operator::Or)]
    #[token("&", |_| Operator::BitAnd)]
    #[token("^", |_| Operator::BitXor)]
    #[token("|", |_| Operator::BitOr)]
    #[token("!", |_| Operator::Not)]
    #[token("~", |_| Operator::BitNot)]
    Operator(Operator),

    #[regex(r"[0-9]+n", parse_big)]
    #[regex(r"[0-9]*\.?[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"'(\\.|[^'\\])*'", parse_quoted)]
    #[regex(r#""(\\.|[^"\\])*""#, parse_quoted)]
    Constant(Constant),

    #[regex(r"[$_\p{XID_Start}][$\p{XID_Continue}]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[regex(r"[ \t\n\r\f]+", |lex| lex.slice().to_string())]
    Whitespace(String),
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Punct(p) => Self::Punct(p),
            Lexeme::Operator(op) => Self::Operator(op),
            Lexeme::Constant(c) => Self::Constant(c),
            Lexeme::Identifier(name) => Self::Identifier(name),
            Lexeme::Whitespace(ws) => Self::Whitespace(ws),
        }
    }
}

/// Decodes a numeric literal without a big-integer suffix.
///
/// The literal is a float when it contains a decimal point or an exponent.
/// Digit strings that overflow `i64` fall back to `f64`.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Option<Constant> {
    let literal = lex.slice();
    let value = if literal.contains(['.', 'e', 'E']) {
        ConstantValue::Real(literal.parse().ok()?)
    } else if let Ok(n) = literal.parse::<i64>() {
        ConstantValue::Integer(n)
    } else {
        ConstantValue::Real(literal.parse().ok()?)
    };
    Some(Constant { literal: literal.to_string(),
                    value })
}

/// Decodes a big-integer literal (`123n`).
fn parse_big(lex: &logos::Lexer<Lexeme>) -> Option<Constant> {
    let literal = lex.slice();
    let digits = &literal[..literal.len() - 1];
    let value = digits.parse::<BigInt>().ok()?;
    Some(Constant { literal: literal.to_string(),
                    value:   ConstantValue::Big(value), })
}

/// Decodes a quoted string literal, unescaping `\\` and the matching quote.
/// Any other backslash pair is kept verbatim.
fn parse_quoted(lex: &logos::Lexer<Lexeme>) -> Option<Constant> {
    let literal = lex.slice();
    let quote = literal.chars().next()?;
    let body = &literal[1..literal.len() - 1];

    let mut value = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => value.push('\\'),
            Some(escaped) if escaped == quote => value.push(escaped),
            Some(other) => {
                value.push('\\');
                value.push(other);
            },
            None => value.push('\\'),
        }
    }

    Some(Constant { literal: literal.to_string(),
                    value:   ConstantValue::Str(value), })
}

/// Tokenizes a plain source string.
///
/// Equivalent to the template form with an empty value list. Whitespace
/// tokens are dropped.
///
/// # Errors
/// Returns a [`TokenizeError`] when a code point matches no token rule.
///
/// # Example
/// ```
/// use embex::interpreter::tokenizer::{Token, tokenize};
///
/// let tokens = tokenize("max(1, 2)").unwrap();
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[0], Token::Identifier("max".to_string()));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    tokenize_template_with(&[source], &[], false)
}

/// Tokenizes template fragments interleaved with embedded host values.
///
/// Produces the logical stream `f0, v0, f1, v1, ..., fn`: each fragment is
/// scanned and an `Embedded` token carrying the corresponding value is
/// spliced in between. Whitespace tokens are dropped.
///
/// # Errors
/// Returns a [`TokenizeError`] when a code point matches no token rule.
///
/// # Panics
/// Panics when `fragments` and `values` are mismatched: unless both are
/// empty, there must be exactly one more fragment than values.
pub fn tokenize_template(fragments: &[&str], values: &[Value]) -> Result<Vec<Token>, TokenizeError> {
    tokenize_template_with(fragments, values, false)
}

/// Tokenizes template fragments, optionally retaining whitespace tokens
/// for diagnostics. The parser accepts either form.
///
/// # Errors
/// Returns a [`TokenizeError`] when a code point matches no token rule.
///
/// # Panics
/// Panics when `fragments` and `values` are mismatched: unless both are
/// empty, there must be exactly one more fragment than values.
pub fn tokenize_template_with(fragments: &[&str],
                              values: &[Value],
                              keep_whitespace: bool)
                              -> Result<Vec<Token>, TokenizeError> {
    assert!(fragments.len() == values.len() + 1 || (fragments.is_empty() && values.is_empty()),
            "template shape mismatch: {} fragments cannot interleave {} values",
            fragments.len(),
            values.len());

    let mut tokens = Vec::new();
    for (index, fragment) in fragments.iter().enumerate() {
        let expanded = expand_unicode_escapes(fragment);
        let mut lexer = Lexeme::lexer(&expanded);
        while let Some(scanned) = lexer.next() {
            match scanned {
                Ok(Lexeme::Whitespace(ws)) => {
                    if keep_whitespace {
                        tokens.push(Token::Whitespace(ws));
                    }
                },
                Ok(lexeme) => tokens.push(lexeme.into()),
                Err(()) => {
                    return Err(TokenizeError::unknown_code_point(&expanded, lexer.span()));
                },
            }
        }
        if let Some(value) = values.get(index) {
            tokens.push(Token::Embedded(value.clone()));
        }
    }
    Ok(tokens)
}

/// Expands `\uXXXX` and `\u{XXXX...}` escapes to their code points.
///
/// Runs over the whole fragment before scanning. A backslash pair that is
/// not a valid unicode escape is copied through unchanged, so `\\u0041`
/// keeps its literal `u0041` and a stray `\` still reaches the scanner as
/// an unknown code point.
fn expand_unicode_escapes(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut rest = fragment;

    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some((decoded, consumed)) = decode_unicode_escape(tail) {
            out.push(decoded);
            rest = &tail[consumed..];
            continue;
        }

        out.push('\\');
        let mut chars = tail[1..].chars();
        match chars.next() {
            Some(next) => {
                out.push(next);
                rest = &tail[1 + next.len_utf8()..];
            },
            None => rest = "",
        }
    }

    out.push_str(rest);
    out
}

/// Decodes one unicode escape at the start of `tail`, returning the code
/// point and the number of bytes consumed.
fn decode_unicode_escape(tail: &str) -> Option<(char, usize)> {
    let body = tail.strip_prefix("\\u")?;

    if let Some(braced) = body.strip_prefix('{') {
        let close = braced.find('}')?;
        let digits = &braced[..close];
        if digits.is_empty() || digits.len() > 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return None;
        }
        let code_point = u32::from_str_radix(digits, 16).ok()?;
        return Some((char::from_u32(code_point)?, 3 + close + 1));
    }

    let digits = body.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let code_point = u32::from_str_radix(digits, 16).ok()?;
    Some((char::from_u32(code_point)?, 6))
}
