//! Application pages

use dioxus::prelude::ServerFnError;

mod home;
mod tools;

pub use home::*;
pub use tools::*;

/// Unwrap a server-fn error back to the message the API layer produced, so
/// backend messages reach the page verbatim instead of wrapped in transport
/// prose.
pub(crate) fn server_error_message(error: ServerFnError) -> String {
    match error {
        ServerFnError::ServerError(message) => message,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_unwrap_to_the_original_message() {
        let error = ServerFnError::new("bad url");
        assert_eq!(server_error_message(error), "bad url");
    }
}
