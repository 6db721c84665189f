//! Token stream formats

use super::FormatError;
use crate::tex::token::Token;

/// One line per token: `offset kind literal`, the literal debug-quoted
pub fn to_token_simple(tokens: &[Token<'_>]) -> String {
    let mut result = String::new();
    for token in tokens {
        result.push_str(&format!(
            "{} {} {:?}\n",
            token.offset,
            token.kind.name(),
            token.literal
        ));
    }
    result
}

/// The token stream as a JSON array of `{kind, literal, offset}`
pub fn to_token_json(tokens: &[Token<'_>]) -> Result<String, FormatError> {
    let json = serde_json::to_string_pretty(tokens)?;
    Ok(format!("{}\n", json))
}
