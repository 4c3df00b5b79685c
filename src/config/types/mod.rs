//! Configuration utility types.
//!
//! | Module  | Purpose                                   |
//! |---------|-------------------------------------------|
//! | `env`   | Environment lookup (process or fixed map) |
//! | `error` | Configuration error types                 |
//! | `field` | Dotted field paths for diagnostics        |

mod env;
mod error;
mod field;

pub use env::{BASE_ENV_VAR, Env, ProcessEnv};
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, DiagnosticKind, Warning};
pub use field::FieldPath;
