// Players sign in by name only; there is no authentication.

pub mod handlers;
