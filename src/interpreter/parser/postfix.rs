use std::iter::Peekable;

use crate::{
    ast::{Expr, SliceDim},
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, parse_expression},
        tokenizer::{Punct, Token},
    },
};

/// Parses the identifier after a consumed `.` and builds a property access.
///
/// # Errors
/// `ExpectedIdentifier` when the next token is not an identifier or the
/// stream ends.
pub(in crate::interpreter::parser) fn parse_property<'a, I>(tokens: &mut Peekable<I>,
                                                            object: Expr)
                                                            -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(Token::Identifier(name)) => Ok(Expr::AccessProperty { object:   Box::new(object),
                                                                   property: name.clone(), }),
        Some(other) => Err(ParseError::ExpectedIdentifier { found: other.literal() }),
        None => Err(ParseError::ExpectedIdentifier { found: "end of input".to_string() }),
    }
}

/// Parses an argument list after a consumed `(` and builds an invocation.
///
/// The list is comma-separated; an empty list and a trailing comma are both
/// accepted.
///
/// # Errors
/// - `ExpectedClosingParen` when the stream ends inside the list.
/// - `UnexpectedToken` when an argument is followed by neither `,` nor `)`.
pub(in crate::interpreter::parser) fn parse_invocation<'a, I>(tokens: &mut Peekable<I>,
                                                              callee: Expr)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut arguments = Vec::new();

    if let Some(Token::Punct(Punct::ParenClose)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Invoke { callee: Box::new(callee),
                                 arguments });
    }

    loop {
        arguments.push(parse_expression(tokens, 0)?);

        match tokens.next() {
            Some(Token::Punct(Punct::Comma)) => {
                if let Some(Token::Punct(Punct::ParenClose)) = tokens.peek() {
                    tokens.next();
                    break;
                }
            },
            Some(Token::Punct(Punct::ParenClose)) => break,
            Some(other) => return Err(ParseError::UnexpectedToken { token: other.literal() }),
            None => return Err(ParseError::ExpectedClosingParen),
        }
    }

    Ok(Expr::Invoke { callee: Box::new(callee),
                      arguments })
}

/// Parses a subscript after a consumed `[` and builds an indexing or
/// slicing node.
///
/// The subscript is a comma-separated list of dimensions; each dimension is
/// up to three optional expressions separated by at most two colons. The
/// whole bracket is a `Slicing` whenever any dimension contains a colon or
/// there is more than one dimension; otherwise it is an `Indexing`.
///
/// # Errors
/// - `EmptySubscript` for `[]`.
/// - `UnexpectedToken` for a third colon, a dimension with no content, or a
///   dimension followed by neither `,` nor `]`.
/// - `ExpectedClosingBracket` when the stream ends inside the subscript.
pub(in crate::interpreter::parser) fn parse_subscript<'a, I>(tokens: &mut Peekable<I>,
                                                             target: Expr)
                                                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(Token::Punct(Punct::BracketClose)) = tokens.peek() {
        tokens.next();
        return Err(ParseError::EmptySubscript);
    }

    let mut dimensions = Vec::new();
    let mut saw_colon = false;

    loop {
        let (dimension, had_colon) = parse_dimension(tokens)?;
        saw_colon |= had_colon;
        dimensions.push(dimension);

        match tokens.next() {
            Some(Token::Punct(Punct::Comma)) => {
                if let Some(Token::Punct(Punct::BracketClose)) = tokens.peek() {
                    tokens.next();
                    break;
                }
            },
            Some(Token::Punct(Punct::BracketClose)) => break,
            Some(other) => return Err(ParseError::UnexpectedToken { token: other.literal() }),
            None => return Err(ParseError::ExpectedClosingBracket),
        }
    }

    if !saw_colon && dimensions.len() == 1 {
        match dimensions.pop() {
            Some(SliceDim { start: Some(index),
                            end: None,
                            step: None, }) => {
                return Ok(Expr::Indexing { target: Box::new(target),
                                           index:  Box::new(index), });
            },
            _ => unreachable!("a colon-free dimension always carries exactly a start expression"),
        }
    }

    Ok(Expr::Slicing { target: Box::new(target),
                       dimensions })
}

/// Parses one dimension of a subscript: up to three optional expressions
/// separated by one or two colons, mapping positionally to
/// `(start, end, step)`.
///
/// Returns the dimension and whether it contained a colon. A dimension with
/// no colon and no expression is rejected.
fn parse_dimension<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(SliceDim, bool)>
    where I: Iterator<Item = &'a Token>
{
    let mut slots: [Option<Expr>; 3] = [None, None, None];
    let mut colons = 0usize;

    loop {
        let at_boundary = matches!(tokens.peek(),
                                   Some(Token::Punct(Punct::Colon
                                                     | Punct::Comma
                                                     | Punct::BracketClose))
                                   | None);
        if !at_boundary {
            slots[colons] = Some(parse_expression(tokens, 0)?);
        }

        if let Some(Token::Punct(Punct::Colon)) = tokens.peek() {
            if colons == 2 {
                return Err(ParseError::UnexpectedToken { token: ":".to_string() });
            }
            tokens.next();
            colons += 1;
            continue;
        }

        break;
    }

    let had_colon = colons > 0;
    let [start, end, step] = slots;

    if !had_colon && start.is_none() {
        return Err(match tokens.peek() {
                       Some(token) => ParseError::UnexpectedToken { token: token.literal() },
                       None => ParseError::UnexpectedEndOfInput,
                   });
    }

    Ok((SliceDim { start,
                   end,
                   step },
        had_colon))
}
