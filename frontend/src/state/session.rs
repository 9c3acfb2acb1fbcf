use leptos::*;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

/// Viewer identity restored from the login flow. Pure ambient state; the
/// screens only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
    pub role_id: Option<String>,
}

impl SessionState {
    pub fn display_name(&self) -> String {
        self.username.clone().unwrap_or_else(|| "User".to_string())
    }
}

fn restore_session() -> SessionState {
    #[cfg(target_arch = "wasm32")]
    if let Ok(storage) = crate::utils::storage::local_storage() {
        return SessionState {
            username: storage.get_item("username").ok().flatten(),
            role_id: storage.get_item("role_id").ok().flatten(),
        };
    }
    SessionState::default()
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_signal(restore_session());
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub fn logout(set_session: WriteSignal<SessionState>) {
    #[cfg(target_arch = "wasm32")]
    if let Ok(storage) = crate::utils::storage::local_storage() {
        let _ = storage.remove_item("username");
        let _ = storage.remove_item("role_id");
    }
    set_session.set(SessionState::default());
}
