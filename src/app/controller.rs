//! View state and the transitions driven by user actions

use crate::constants::PROVIDER_MISSING_ALERT;
use crate::types::*;
use crate::wallet::{WalletConnector, WalletError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Wallet state shared with in-flight connect tasks
#[derive(Debug, Default)]
pub struct WalletSession {
    pub info: WalletInfo,
    pub connected: bool,
    /// Messages waiting to be shown as blocking alerts, oldest first
    pub alerts: VecDeque<String>,
    /// Connect calls that have not resolved yet
    pub in_flight: usize,
}

impl WalletSession {
    fn on_wallet_connected(&mut self, info: WalletInfo) {
        self.info = info;
        self.connected = true;
    }
}

fn lock(session: &Mutex<WalletSession>) -> MutexGuard<'_, WalletSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

type Repaint = Arc<dyn Fn() + Send + Sync>;

pub struct ViewController {
    menu_open: bool,
    active: NavSection,
    pub form: SignUpForm,
    form_errors: Vec<FormField>,
    session: Arc<Mutex<WalletSession>>,
    connector: Arc<WalletConnector>,
    runtime: Handle,
    repaint: Option<Repaint>,
}

impl ViewController {
    pub fn new(connector: WalletConnector, runtime: Handle) -> Self {
        Self {
            menu_open: false,
            active: NavSection::default(),
            form: SignUpForm::default(),
            form_errors: Vec::new(),
            session: Arc::new(Mutex::new(WalletSession::default())),
            connector: Arc::new(connector),
            runtime,
            repaint: None,
        }
    }

    /// Callback invoked whenever a connect task changes wallet state
    pub fn with_repaint(mut self, repaint: impl Fn() + Send + Sync + 'static) -> Self {
        self.repaint = Some(Arc::new(repaint));
        self
    }

    pub fn active_section(&self) -> NavSection {
        self.active
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn form_errors(&self) -> &[FormField] {
        &self.form_errors
    }

    pub fn has_provider(&self) -> bool {
        self.connector.has_provider()
    }

    /// Make `section` the active one and close the mobile menu.
    pub fn select_section(&mut self, section: NavSection) {
        if self.active != section {
            debug!(from = %self.active, to = %section, "Section selected");
        }
        self.active = section;
        self.menu_open = false;
    }

    /// Select by string id. Unknown ids leave the state untouched.
    pub fn select_section_id(&mut self, id: &str) -> Result<(), UnknownSection> {
        match id.parse() {
            Ok(section) => {
                self.select_section(section);
                Ok(())
            }
            Err(e) => {
                warn!(id, "Ignoring navigation to unknown section");
                Err(e)
            }
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Snapshot of the wallet info for rendering
    pub fn wallet(&self) -> WalletInfo {
        lock(&self.session).info.clone()
    }

    pub fn is_connected(&self) -> bool {
        lock(&self.session).connected
    }

    pub fn is_connecting(&self) -> bool {
        lock(&self.session).in_flight > 0
    }

    pub fn current_alert(&self) -> Option<String> {
        lock(&self.session).alerts.front().cloned()
    }

    pub fn alert_count(&self) -> usize {
        lock(&self.session).alerts.len()
    }

    pub fn dismiss_alert(&mut self) {
        lock(&self.session).alerts.pop_front();
    }

    /// Record a successful connection. There is no way back to disconnected.
    pub fn on_wallet_connected(&mut self, info: WalletInfo) {
        lock(&self.session).on_wallet_connected(info);
    }

    /// Start one connector call on the runtime.
    ///
    /// Calls are not serialized: if several are in flight, the one that
    /// resolves last decides the displayed wallet.
    pub fn connect_wallet(&mut self) -> JoinHandle<()> {
        lock(&self.session).in_flight += 1;
        info!("Connecting wallet");
        let connector = self.connector.clone();
        let session = self.session.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            run_connect(&connector, &session).await;
            if let Some(repaint) = repaint {
                repaint();
            }
        })
    }

    /// Validate the sign-up form and, when complete, connect the wallet.
    /// Field values are kept whatever the outcome.
    pub fn submit_signup(&mut self) -> Result<JoinHandle<()>, Vec<FormField>> {
        let invalid = self.form.invalid_fields();
        self.form_errors = invalid.clone();
        if !invalid.is_empty() {
            debug!(fields = ?invalid, "Sign-up form incomplete");
            return Err(invalid);
        }
        info!(crop = %self.form.crop_type, "Sign-up submitted");
        Ok(self.connect_wallet())
    }
}

async fn run_connect(connector: &WalletConnector, session: &Mutex<WalletSession>) {
    let result = connector.connect().await;
    let mut s = lock(session);
    s.in_flight = s.in_flight.saturating_sub(1);
    match result {
        Ok(info) => s.on_wallet_connected(info),
        Err(WalletError::ProviderUnavailable) => {
            error!("Wallet provider not available");
            s.alerts.push_back(PROVIDER_MISSING_ALERT.to_string());
        }
        Err(e @ (WalletError::UserRejected | WalletError::NoAccounts)) => {
            warn!(error = %e, "Wallet not connected");
        }
        Err(e) => error!(error = %e, "Error connecting wallet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::testing::{Scripted, ScriptedProvider};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const FIRST: &str = "0x1111111111111111111111111111111111110001";
    const SECOND: &str = "0x2222222222222222222222222222222222220002";

    fn controller(provider: Option<Arc<ScriptedProvider>>) -> ViewController {
        let provider = provider.map(|p| p as Arc<dyn crate::wallet::WalletProvider>);
        ViewController::new(WalletConnector::new(provider), Handle::current())
    }

    fn filled_form() -> SignUpForm {
        SignUpForm {
            name: "Asha Patil".into(),
            email: "asha@example.com".into(),
            farm_location: "Nashik".into(),
            crop_type: "Wheat".into(),
        }
    }

    #[tokio::test]
    async fn selecting_a_section_activates_it_and_closes_menu() {
        let mut view = controller(None);
        for section in NavSection::ALL {
            view.toggle_menu();
            assert!(view.is_menu_open());
            view.select_section(section);
            assert_eq!(view.active_section(), section);
            assert!(!view.is_menu_open());

            // idempotent
            view.select_section(section);
            assert_eq!(view.active_section(), section);
            assert!(!view.is_menu_open());
        }
    }

    #[tokio::test]
    async fn unknown_section_id_is_rejected() {
        let mut view = controller(None);
        view.select_section_id("policies").unwrap();
        view.toggle_menu();
        assert!(view.select_section_id("pricing").is_err());
        assert_eq!(view.active_section(), NavSection::Policies);
        assert!(view.is_menu_open());
    }

    #[tokio::test]
    async fn toggling_twice_restores_menu_state() {
        let mut view = controller(None);
        let before = view.is_menu_open();
        view.toggle_menu();
        view.toggle_menu();
        assert_eq!(view.is_menu_open(), before);
    }

    #[tokio::test]
    async fn successful_connect_updates_wallet_and_repaints() {
        let provider = Arc::new(ScriptedProvider::ok(FIRST, 1_234_560_000_000_000_000));
        let repaints = Arc::new(AtomicUsize::new(0));
        let counter = repaints.clone();
        let mut view = controller(Some(provider)).with_repaint(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!view.is_connected());
        view.connect_wallet().await.unwrap();

        assert!(view.is_connected());
        assert!(!view.is_connecting());
        assert_eq!(view.wallet().address(), Some("0x1111...0001"));
        assert_eq!(view.wallet().balance(), Some("1.234"));
        assert_eq!(repaints.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_provider_alerts_once_and_leaves_wallet_empty() {
        let mut view = controller(None);
        view.connect_wallet().await.unwrap();

        assert!(view.wallet().is_empty());
        assert!(!view.is_connected());
        assert_eq!(view.alert_count(), 1);
        assert_eq!(view.current_alert().as_deref(), Some(PROVIDER_MISSING_ALERT));

        view.dismiss_alert();
        assert_eq!(view.current_alert(), None);
    }

    #[tokio::test]
    async fn other_failures_are_silent() {
        for err in [
            WalletError::UserRejected,
            WalletError::NoAccounts,
            WalletError::TransientFailure("timeout".into()),
        ] {
            let mut view = controller(Some(Arc::new(ScriptedProvider::failing(err))));
            view.connect_wallet().await.unwrap();
            assert!(view.wallet().is_empty());
            assert_eq!(view.alert_count(), 0);
        }
    }

    #[tokio::test]
    async fn submit_with_full_form_connects_once_and_keeps_fields() {
        let provider = Arc::new(ScriptedProvider::failing(WalletError::UserRejected));
        let mut view = controller(Some(provider.clone()));
        view.form = filled_form();

        let handle = view.submit_signup().expect("form is complete");
        handle.await.unwrap();

        assert_eq!(provider.calls(), 1);
        assert_eq!(view.form, filled_form());
        assert!(view.form_errors().is_empty());
        assert!(!view.is_connected());
    }

    #[tokio::test]
    async fn incomplete_form_does_not_connect() {
        let provider = Arc::new(ScriptedProvider::ok(FIRST, 0));
        let mut view = controller(Some(provider.clone()));
        view.form = SignUpForm { crop_type: String::new(), ..filled_form() };

        assert_eq!(view.submit_signup().err(), Some(vec![FormField::CropType]));
        assert_eq!(view.form_errors(), &[FormField::CropType]);
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn concurrent_connects_last_resolution_wins() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Scripted {
                delay: Duration::from_millis(80),
                result: Ok(vec![FIRST.to_string()]),
                wei: 1_000_000_000_000_000_000,
            },
            Scripted {
                delay: Duration::from_millis(5),
                result: Ok(vec![SECOND.to_string()]),
                wei: 2_000_000_000_000_000_000,
            },
        ]));
        let mut view = controller(Some(provider.clone()));

        let slow = view.connect_wallet();
        let fast = view.connect_wallet();
        assert!(view.is_connecting());

        fast.await.unwrap();
        assert_eq!(view.wallet().address(), Some("0x2222...0002"));

        slow.await.unwrap();
        assert_eq!(provider.calls(), 2);
        assert_eq!(view.wallet().address(), Some("0x1111...0001"));
        assert_eq!(view.wallet().balance(), Some("1.0"));
    }

    #[tokio::test]
    async fn connected_state_survives_later_failures() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Scripted {
                delay: Duration::ZERO,
                result: Ok(vec![FIRST.to_string()]),
                wei: 0,
            },
            Scripted {
                delay: Duration::ZERO,
                result: Err(WalletError::UserRejected),
                wei: 0,
            },
        ]));
        let mut view = controller(Some(provider));

        view.connect_wallet().await.unwrap();
        view.connect_wallet().await.unwrap();
        assert!(view.is_connected());
        assert_eq!(view.wallet().address(), Some("0x1111...0001"));
    }
}
