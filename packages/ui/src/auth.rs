//! Session context and hooks for the UI.
//!
//! The session identity is the only state shared across pages. It lives in one
//! signal owned by [`AuthProvider`]; components get an [`AuthContext`] handle that
//! exposes reads freely but writes only through its login/register/logout/patch
//! and vault methods. The vault stays unlocked, and its document list stays held,
//! until logout or a full reload.

use api::{ApiClient, IdentityPatch, Session, SessionIdentity, VaultAccess};
use dioxus::prelude::*;
use store::{ClientConfig, DocumentList, KeyValueStore, SessionStore, VaultDocuments};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the persisted session has been read.
    pub loading: bool,
    /// Vault unlock flag; in memory only, so a reload locks the vault again.
    pub vault: VaultAccess,
    /// Vault documents fetched since the last unlock.
    pub vault_docs: VaultDocuments,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
            vault: VaultAccess::Locked,
            vault_docs: VaultDocuments::default(),
        }
    }
}

impl AuthState {
    /// Settled state for `session` with the vault locked.
    fn settled(session: Option<Session>) -> Self {
        Self {
            session,
            loading: false,
            ..Self::default()
        }
    }
}

fn session_store() -> SessionStore<impl KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
}

/// Handle on the session state.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    state: Signal<AuthState>,
    config: Signal<ClientConfig>,
}

impl AuthContext {
    pub fn loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn user(&self) -> Option<SessionIdentity> {
        self.state.read().session.as_ref().map(|s| s.user.clone())
    }

    /// Like [`AuthContext::user`] but without subscribing the caller to session changes.
    pub fn peek_user(&self) -> Option<SessionIdentity> {
        self.state.peek().session.as_ref().map(|s| s.user.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.state.read().session.as_ref().map(|s| s.user.id.clone())
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .read()
            .session
            .as_ref()
            .is_some_and(|s| s.user.is_admin())
    }

    pub fn vault_unlocked(&self) -> bool {
        self.state.read().vault.is_unlocked()
    }

    /// Endpoint configuration, read once when the provider mounts.
    pub fn config(&self) -> ClientConfig {
        self.config.peek().clone()
    }

    /// API client carrying the current bearer token, if any. Untracked, so
    /// building a client inside a resource does not tie it to session updates.
    pub fn client(&self) -> ApiClient {
        let token = self.state.peek().session.as_ref().map(|s| s.token.clone());
        ApiClient::new(self.config()).with_token(token)
    }

    /// Log in and persist the session. Errors are ready to display.
    pub async fn login(mut self, email: String, password: String) -> Result<SessionIdentity, String> {
        let session = self
            .client()
            .login(email.trim(), &password)
            .await
            .map_err(|e| e.message_or("Login failed"))?;
        self.start(session.clone());
        Ok(session.user)
    }

    /// Create an account, then behave like [`AuthContext::login`].
    pub async fn register(
        mut self,
        name: String,
        email: String,
        password: String,
    ) -> Result<SessionIdentity, String> {
        let session = self
            .client()
            .register(name.trim(), email.trim(), &password)
            .await
            .map_err(|e| e.message_or("Registration failed"))?;
        self.start(session.clone());
        Ok(session.user)
    }

    fn start(&mut self, session: Session) {
        session_store().save(&session);
        tracing::info!("Signed in as {}", session.user.id);
        self.state.set(AuthState::settled(Some(session)));
    }

    /// Drop the session locally. The server keeps no session to end.
    pub fn logout(mut self) {
        session_store().clear();
        self.state.set(AuthState::settled(None));
    }

    /// Merge a field-wise update into the identity and persist it.
    pub fn patch(mut self, patch: IdentityPatch) {
        let mut state = self.state.write();
        if let Some(session) = state.session.as_mut() {
            session.user.apply(patch);
            session_store().save_user(&session.user);
        }
    }

    /// Mark the vault unlocked. Returns `true` only on the transition.
    pub fn unlock_vault(mut self) -> bool {
        self.state.write().vault.unlock()
    }

    /// Held vault documents, if they have been fetched since the unlock.
    pub fn vault_documents(&self) -> Option<DocumentList> {
        self.state.read().vault_docs.get().cloned()
    }

    /// Untracked check used by the loader so it fetches at most once per unlock.
    pub fn vault_documents_needed(&self) -> bool {
        self.state.peek().vault_docs.needs_fetch()
    }

    pub fn hold_vault_documents(mut self, list: DocumentList) {
        self.state.write().vault_docs.fill(list);
    }

    pub fn edit_vault_documents(mut self, f: impl FnOnce(&mut DocumentList)) {
        self.state.write().vault_docs.edit(f);
    }
}

/// Get the session handle provided by [`AuthProvider`].
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provider component that owns the session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut state = use_signal(AuthState::default);

    // Restore the persisted session once mounted
    use_effect(move || {
        state.set(AuthState::settled(session_store().load()));
    });

    let config = use_signal(ClientConfig::from_env);
    use_context_provider(|| AuthContext { state, config });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        auth.logout();
        if let Some(handler) = on_logout {
            handler.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settled_state_starts_locked_and_empty() {
        let state = AuthState::settled(None);
        assert!(!state.loading);
        assert!(!state.vault.is_unlocked());
        assert!(state.vault_docs.needs_fetch());
        assert!(AuthState::default().loading);
    }

    thread_local! {
        static SEEN: std::cell::RefCell<Vec<ClientConfig>> = const { std::cell::RefCell::new(Vec::new()) };
    }

    #[component]
    fn ReadConfig() -> Element {
        let auth = use_auth();
        SEEN.with(|seen| {
            seen.borrow_mut().push(auth.config());
            seen.borrow_mut().push(auth.client().config().clone());
        });
        rsx! {}
    }

    fn ProvidedApp() -> Element {
        rsx! {
            AuthProvider { ReadConfig {} }
        }
    }

    #[test]
    fn test_provider_holds_config_for_children() {
        let mut dom = VirtualDom::new(ProvidedApp);
        dom.rebuild_in_place();

        let seen = SEEN.with(|seen| seen.borrow().clone());
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|config| *config == ClientConfig::from_env()));
    }
}
