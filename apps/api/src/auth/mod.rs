// Account registration, login, and opaque DB-backed bearer sessions.
// Tokens are random 256-bit values; only SHA-256 digests are persisted.

pub mod handlers;
pub mod passwords;
pub mod tokens;
