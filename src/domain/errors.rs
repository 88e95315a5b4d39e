// Request-level errors surfaced by handlers and middleware. The HTTP layer
// maps each variant onto a status code and JSON message.
#[derive(Debug)]
pub enum ApiError {
    // A disallowed cross-origin request; always answered, never dropped.
    OriginRejected,
    // The document store was never configured or its URI failed to parse.
    DatabaseUnavailable,
    // A referenced document does not exist; carries the noun for the message.
    NotFound(&'static str),
    // Payload failed validation; carries the reason for the message.
    Invalid(&'static str),
    // The request conflicts with stored state (duplicate account, paid order).
    Conflict(&'static str),
    // The document store refused or failed an operation.
    Storage(String),
}
