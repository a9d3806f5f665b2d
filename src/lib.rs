// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB/crypto/token adapters
// - application: ports, use cases and the caller-facing error taxonomy
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
