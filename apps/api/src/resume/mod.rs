// Resume analysis: text extraction plus fixed-vocabulary skill tagging.
// Extraction is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod extract;
pub mod handlers;
pub mod skills;
