//! One-shot permission gates.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use trestle_core::models::{AuthorizationDecision, AuthorizationState, PermissionKind};

/// Sequences a single OS authorization request for one capability.
///
/// At most one OS prompt is issued per process lifetime: the first `request`
/// moves the gate to `Requesting` synchronously and prompts; every later
/// call just reports the state it finds, whether in-flight or terminal.
/// Terminal states never regress.
pub struct PermissionGate {
    kind: PermissionKind,
    state: Mutex<AuthorizationState>,
    prompts: AtomicU32,
}

impl PermissionGate {
    pub fn new(kind: PermissionKind) -> Self {
        Self {
            kind,
            state: Mutex::new(AuthorizationState::NotRequested),
            prompts: AtomicU32::new(0),
        }
    }

    pub fn kind(&self) -> PermissionKind {
        self.kind
    }

    /// Current state, without side effects.
    pub fn state(&self) -> AuthorizationState {
        *self.lock()
    }

    /// Number of OS prompts issued so far (0 or 1).
    pub fn prompt_count(&self) -> u32 {
        self.prompts.load(Ordering::Relaxed)
    }

    /// Runs the authorization sequence, prompting the OS at most once.
    ///
    /// `prompt` is the OS suspension point; it resolves exactly once with
    /// the terminal decision.
    pub async fn request<F, Fut>(&self, prompt: F) -> AuthorizationState
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AuthorizationDecision>,
    {
        {
            let mut state = self.lock();
            if *state != AuthorizationState::NotRequested {
                debug!(
                    kind = self.kind.as_str(),
                    state = ?*state,
                    "authorization already underway or settled"
                );
                return *state;
            }
            *state = AuthorizationState::Requesting;
        }

        self.prompts.fetch_add(1, Ordering::Relaxed);
        debug!(kind = self.kind.as_str(), "requesting authorization");
        let decision = prompt().await;
        self.settle(decision.into())
    }

    /// Settles the gate as `Unavailable` without prompting, for platforms
    /// that lack the capability outright.
    pub fn resolve_unavailable(&self) -> AuthorizationState {
        let mut state = self.lock();
        if *state == AuthorizationState::NotRequested {
            *state = AuthorizationState::Unavailable;
            warn!(
                kind = self.kind.as_str(),
                "capability absent on this platform"
            );
        }
        *state
    }

    fn settle(&self, next: AuthorizationState) -> AuthorizationState {
        let mut state = self.lock();
        if *state == AuthorizationState::Requesting {
            *state = next;
        }
        match *state {
            AuthorizationState::Granted => {
                info!(kind = self.kind.as_str(), "authorization granted")
            }
            AuthorizationState::Denied => {
                info!(kind = self.kind.as_str(), "authorization denied")
            }
            AuthorizationState::Unavailable => {
                warn!(kind = self.kind.as_str(), "authorization unavailable")
            }
            _ => {}
        }
        *state
    }

    fn lock(&self) -> MutexGuard<'_, AuthorizationState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_request_prompts_and_settles() {
        let gate = PermissionGate::new(PermissionKind::Notification);
        assert_eq!(gate.state(), AuthorizationState::NotRequested);

        let state = gate
            .request(|| async { AuthorizationDecision::Granted })
            .await;
        assert_eq!(state, AuthorizationState::Granted);
        assert_eq!(gate.prompt_count(), 1);
    }

    #[tokio::test]
    async fn settled_gate_reports_state_without_prompting() {
        let gate = PermissionGate::new(PermissionKind::Tracking);
        gate.request(|| async { AuthorizationDecision::Granted })
            .await;

        let state = gate
            .request(|| async { AuthorizationDecision::Denied })
            .await;
        assert_eq!(state, AuthorizationState::Granted);
        assert_eq!(gate.prompt_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_requests_share_one_prompt() {
        use std::sync::Arc;
        use std::time::Duration;

        let gate = Arc::new(PermissionGate::new(PermissionKind::Notification));
        let first = tokio::spawn({
            let gate = gate.clone();
            async move {
                gate.request(|| async {
                    tokio::time::sleep(Duration::from_millis(10)).await;
                    AuthorizationDecision::Granted
                })
                .await
            }
        });
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }

        // Second caller observes the in-flight state; no second prompt.
        let observed = gate
            .request(|| async { AuthorizationDecision::Denied })
            .await;
        assert_eq!(observed, AuthorizationState::Requesting);
        assert_eq!(gate.prompt_count(), 1);

        assert_eq!(first.await.unwrap(), AuthorizationState::Granted);
        assert_eq!(gate.state(), AuthorizationState::Granted);
    }

    #[tokio::test]
    async fn unavailable_resolution_skips_the_prompt() {
        let gate = PermissionGate::new(PermissionKind::Tracking);
        assert_eq!(
            gate.resolve_unavailable(),
            AuthorizationState::Unavailable
        );
        assert_eq!(gate.prompt_count(), 0);

        // Terminal; a later request does not prompt either.
        let state = gate
            .request(|| async { AuthorizationDecision::Granted })
            .await;
        assert_eq!(state, AuthorizationState::Unavailable);
        assert_eq!(gate.prompt_count(), 0);
    }
}
