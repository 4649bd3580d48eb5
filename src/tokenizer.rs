use winnow::ascii::space0;
use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode, StrContext};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use crate::error::{Error, Result};
use crate::token::{is_token_char, TokenPair};

/// Split a `Cache-Control` value into its directives, in source order.
///
/// Names are lower-cased. An empty or whitespace-only value yields no
/// directives; an empty element between commas is an error.
pub(crate) fn tokenize(input: &str) -> Result<Vec<TokenPair>> {
    parse_directive_list().parse(input).map_err(|e| {
        let err = Error::Malformed(format!("{e}"));
        tracing::debug!(error = %err, "rejected Cache-Control value");
        err
    })
}

// Winnow parsers

/// `qdtext` (RFC 7230 3.2.6), extended to any non-control character.
fn is_qdtext(c: char) -> bool {
    c == '\t' || (!c.is_control() && c != '"' && c != '\\')
}

fn is_quoted_pair_char(c: char) -> bool {
    c == '\t' || !c.is_control()
}

fn parse_quoted_char(input: &mut &str) -> ModalResult<char> {
    alt((preceded('\\', one_of(is_quoted_pair_char)), one_of(is_qdtext))).parse_next(input)
}

fn parse_quoted_string(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    cut_err(terminated(repeat(0.., parse_quoted_char), '"'))
        .context(StrContext::Label("quoted-string"))
        .parse_next(input)
}

fn parse_value(input: &mut &str) -> ModalResult<TokenPair> {
    alt((
        parse_quoted_string.map(|s| TokenPair::quoted(String::new(), s)),
        take_while(1.., is_token_char).map(|s: &str| TokenPair::new(String::new(), s)),
    ))
    .parse_next(input)
}

fn parse_directive(input: &mut &str) -> ModalResult<TokenPair> {
    let name = take_while(1.., is_token_char)
        .context(StrContext::Label("directive name"))
        .parse_next(input)?
        .to_ascii_lowercase();
    let value = opt(preceded(
        '=',
        cut_err(parse_value).context(StrContext::Label("directive value")),
    ))
    .parse_next(input)?;
    Ok(match value {
        Some(pair) => TokenPair { name, ..pair },
        None => TokenPair::flag(name),
    })
}

pub(crate) fn parse_directive_list<'s>(
) -> impl Parser<&'s str, Vec<TokenPair>, ErrMode<ContextError>> {
    move |input: &mut &'s str| {
        space0.parse_next(input)?;
        let pairs: Vec<TokenPair> =
            separated(0.., terminated(parse_directive, space0), (',', space0)).parse_next(input)?;
        Ok(pairs)
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn token_pair() -> impl Strategy<Value = TokenPair> {
        let name = "[a-z][a-z0-9-]{0,10}";
        prop_oneof![
            name.prop_map(TokenPair::flag),
            (name, "[A-Za-z0-9!#$%&'*+.^_`|~-]{1,8}")
                .prop_map(|(n, v)| TokenPair::new(n, v)),
            (name, "[ -~\t]{0,12}").prop_map(|(n, v)| TokenPair::quoted(n, v)),
        ]
    }

    proptest! {
        #[test]
        fn canonical_rendering_round_trips(pairs in prop::collection::vec(token_pair(), 0..8)) {
            let rendered = pairs
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let reparsed = tokenize(&rendered).unwrap();
            prop_assert_eq!(reparsed, pairs);
        }
    }
}
