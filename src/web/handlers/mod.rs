// Request handlers, one module per endpoint.

pub mod analyze;
