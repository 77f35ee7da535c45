//! Handler für Backend-Antworten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::backend::BackendReply;

/// Übernimmt eine Antwort des Backend-Workers.
pub fn apply_reply(state: &mut AppState, reply: BackendReply) {
    use_cases::backend_reply::apply(state, reply);
}
