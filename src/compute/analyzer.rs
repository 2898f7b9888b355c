use super::query::{CommandId, Query};
use crate::context::RequestScope;
use crate::error::{DbError, DbResult};
use tracing::debug;

const SET_ARGUMENTS: usize = 2;
const GET_ARGUMENTS: usize = 1;
const DEL_ARGUMENTS: usize = 1;

/// Turn a token list into a `Query`, checking the command name and its arity.
pub fn analyze(scope: &RequestScope, tokens: &[&str]) -> DbResult<Query> {
    let Some((name, args)) = tokens.split_first() else {
        debug!(tx = scope.tx_id(), "invalid query: empty");
        return Err(DbError::InvalidCommand);
    };

    let command_id = CommandId::from_name(name);
    let expected = match command_id {
        CommandId::Set => SET_ARGUMENTS,
        CommandId::Get => GET_ARGUMENTS,
        CommandId::Del => DEL_ARGUMENTS,
        CommandId::Unknown => {
            debug!(tx = scope.tx_id(), command = *name, "invalid command");
            return Err(DbError::InvalidCommand);
        }
    };

    if args.len() != expected {
        debug!(
            tx = scope.tx_id(),
            command = command_id.name(),
            got = args.len(),
            expected,
            "invalid arguments"
        );
        return Err(DbError::InvalidArguments);
    }

    let query = Query::new(command_id, args.iter().map(|a| a.to_string()).collect());
    debug!(tx = scope.tx_id(), command = command_id.name(), "query analyzed");
    Ok(query)
}
