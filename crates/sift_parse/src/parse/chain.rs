use sift_ast::{Arguments, Literal, Stage};

use crate::{token::TokenContents, ParseError};

use super::{
    cursor::TokenCursor,
    literal::{is_identifier, parse_value},
    ParseResult,
};

/// Parses one or more stages separated by pipes, consuming all remaining input.
pub(crate) fn parse_stages(tokens: &mut TokenCursor) -> ParseResult<Vec<Stage>> {
    if tokens.peek().contents == TokenContents::Eof {
        return Err(ParseError::EmptyChain);
    }

    let mut stages = vec![parse_stage(tokens)?];
    parse_piped_stages(tokens, &mut stages)?;
    Ok(stages)
}

/// Parses `| stage` sequences until the end of input.
pub(crate) fn parse_piped_stages(
    tokens: &mut TokenCursor,
    stages: &mut Vec<Stage>,
) -> ParseResult<()> {
    loop {
        let next = tokens.next();
        match next.contents {
            TokenContents::Eof => return Ok(()),
            TokenContents::Pipe => (),
            _ => return Err(ParseError::UnexpectedToken(next)),
        }

        if tokens.peek().contents == TokenContents::Eof {
            return Err(ParseError::DanglingPipe(next.span));
        }

        stages.push(parse_stage(tokens)?);
    }
}

/// Parses a single stage: `name` or `name: args`.
fn parse_stage(tokens: &mut TokenCursor) -> ParseResult<Stage> {
    let token = tokens.next();
    let name = match &token.contents {
        TokenContents::Literal(name) if is_identifier(name) => name.clone(),
        TokenContents::Literal(_) | TokenContents::Quoted(_) => {
            return Err(ParseError::InvalidFilterName(token))
        }
        TokenContents::Pipe => return Err(ParseError::EmptyStage(token.span)),
        _ => return Err(ParseError::unexpected(token)),
    };

    let Some(colon) = tokens.next_if(|token| token.contents == TokenContents::Colon) else {
        return Ok(Stage::new(name));
    };

    if matches!(
        tokens.peek().contents,
        TokenContents::Eof | TokenContents::Pipe
    ) {
        return Err(ParseError::MissingArguments(colon.span));
    }

    Ok(Stage {
        name,
        args: parse_arguments(tokens)?,
    })
}

/// Parses a comma separated argument list.
///
/// A single mapping is treated as keyword-style options.
fn parse_arguments(tokens: &mut TokenCursor) -> ParseResult<Arguments> {
    let mut args = vec![parse_value(tokens)?];
    while tokens
        .next_if(|token| token.contents == TokenContents::Comma)
        .is_some()
    {
        args.push(parse_value(tokens)?);
    }

    let args = match <[Literal; 1]>::try_from(args) {
        Ok([Literal::Map(entries)]) => Arguments::Options(entries),
        Ok([literal]) => Arguments::Positional(vec![literal]),
        Err(args) => Arguments::Positional(args),
    };

    Ok(args)
}
