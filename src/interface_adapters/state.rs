use crate::use_cases::SessionHandle;

#[derive(Clone)]
pub struct AppState {
    // The single running session every adapter talks to.
    pub session: SessionHandle,
}
