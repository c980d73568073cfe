// Rule-based chat assistant: keyword intent detection plus templated,
// career-specific replies.

pub mod assistant;
pub mod handlers;
