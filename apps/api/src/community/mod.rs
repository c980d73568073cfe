// Community chat: channel messages with threading and reaction counters.

pub mod handlers;
