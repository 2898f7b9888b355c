use crate::context::RequestScope;
use crate::error::{DbError, DbResult};
use tracing::debug;

/// Characters reserved as protocol delimiters; never valid inside a token.
const RESERVED_SYMBOLS: &[u8] = b"%";

/// Token separators. Other control bytes stay inside tokens and fail validation.
const SEPARATORS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Split raw request text into tokens.
///
/// Tokens are separated by runs of spaces, tabs, newlines or carriage
/// returns. Every token must consist of printable ASCII outside the reserved
/// set; one bad character rejects the whole request. Blank input yields no tokens and no error.
pub fn parse<'a>(scope: &RequestScope, raw: &'a str) -> DbResult<Vec<&'a str>> {
    let mut tokens = Vec::new();
    for token in raw.split(SEPARATORS).filter(|t| !t.is_empty()) {
        if !token.bytes().all(is_token_byte) {
            debug!(tx = scope.tx_id(), "invalid symbol in query");
            return Err(DbError::InvalidSymbol);
        }
        tokens.push(token);
    }
    Ok(tokens)
}

fn is_token_byte(b: u8) -> bool {
    b.is_ascii_graphic() && !RESERVED_SYMBOLS.contains(&b)
}
