pub mod ssr;

pub mod helpers {
    use crate::state::session::SessionState;
    use leptos::*;

    pub fn hrd_session() -> SessionState {
        SessionState {
            username: Some("Rina".into()),
            role_id: Some("4".into()),
        }
    }

    pub fn kepala_divisi_session() -> SessionState {
        SessionState {
            username: Some("Budi".into()),
            role_id: Some("5".into()),
        }
    }

    pub fn provide_session(
        state: SessionState,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (session, set_session) = create_signal(state);
        provide_context((session, set_session));
        (session, set_session)
    }
}
