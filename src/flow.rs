//! Metadata resolution flow and view state.
//!
//! `resolve_token` is the sequential pipeline (derive, fetch, decode, resolve
//! image); `MetadataFlow` sequences it for one view instance, owning the
//! Idle/Loading/Loaded state, the input field, and the notification policy.

use solana_sdk::pubkey::Pubkey;
use tracing::warn;

use crate::{
    core::{metadata_program_id, MetadataResult},
    metadata::{decode_metadata, TokenMetadata},
    offchain::{resolve_image, UriFetcher},
    pda::{derive_metadata_address_for_program, parse_token_address},
    rpc::{fetch_metadata_account, AccountReader},
};

/// Notification category surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Fire-and-forget sink for user-facing notifications.
pub trait NotificationSink {
    fn notify(&self, kind: NotificationKind, message: &str);
}

impl<T: NotificationSink + ?Sized> NotificationSink for &T {
    fn notify(&self, kind: NotificationKind, message: &str) {
        (**self).notify(kind, message)
    }
}

/// Stock sink that routes notifications to `tracing`.
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => tracing::info!("{}", message),
            NotificationKind::Error => tracing::error!("{}", message),
        }
    }
}

/// Successfully resolved token display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToken {
    pub metadata: TokenMetadata,
    pub image: String,
}

/// View state for one metadata view instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Loading,
    Loaded(ResolvedToken),
}

const SUCCESS_MESSAGE: &str = "Successfully fetched token metadata";
const FAILURE_MESSAGE: &str = "Failed to fetch token metadata";

/// Run the full resolution pipeline for one token address.
///
/// Exactly one RPC read and at most one HTTP fetch. Errors keep their kind so
/// callers can distinguish which stage failed; the controller flattens them
/// to a single user-facing message.
pub fn resolve_token<R, U>(
    reader: &R,
    fetcher: &U,
    program_id: &Pubkey,
    token_address: &str,
) -> MetadataResult<ResolvedToken>
where
    R: AccountReader,
    U: UriFetcher,
{
    let mint = parse_token_address(token_address)?;
    let (metadata_address, _) = derive_metadata_address_for_program(program_id, &mint);
    let data = fetch_metadata_account(reader, &metadata_address)?;
    let metadata = decode_metadata(&data)?;
    let image = resolve_image(fetcher, &metadata.uri)?;

    Ok(ResolvedToken { metadata, image })
}

/// Sequences the resolution pipeline and owns the view state.
pub struct MetadataFlow<R, U, N> {
    reader: R,
    fetcher: U,
    notifier: N,
    program_id: Pubkey,
    state: FlowState,
    input: String,
}

impl<R, U, N> MetadataFlow<R, U, N>
where
    R: AccountReader,
    U: UriFetcher,
    N: NotificationSink,
{
    pub fn new(reader: R, fetcher: U, notifier: N) -> Self {
        Self::with_program_id(reader, fetcher, notifier, metadata_program_id())
    }

    pub fn with_program_id(reader: R, fetcher: U, notifier: N, program_id: Pubkey) -> Self {
        Self {
            reader,
            fetcher,
            notifier,
            program_id,
            state: FlowState::Idle,
            input: String::new(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Submit the current input.
    ///
    /// Only runs from `Idle`; a submit while loading or showing a loaded
    /// record is a no-op. Every attempt emits exactly one notification. On
    /// success the input field is cleared; on failure it is left for
    /// correction and the state returns to `Idle`.
    pub fn submit(&mut self) {
        if !matches!(self.state, FlowState::Idle) {
            return;
        }
        if self.input.is_empty() {
            self.notifier.notify(NotificationKind::Error, FAILURE_MESSAGE);
            return;
        }

        self.state = FlowState::Loading;

        match resolve_token(&self.reader, &self.fetcher, &self.program_id, &self.input) {
            Ok(resolved) => {
                self.state = FlowState::Loaded(resolved);
                self.input.clear();
                self.notifier
                    .notify(NotificationKind::Success, SUCCESS_MESSAGE);
            }
            Err(error) => {
                warn!("metadata resolution failed: {}", error);
                self.state = FlowState::Idle;
                self.notifier.notify(NotificationKind::Error, FAILURE_MESSAGE);
            }
        }
    }

    /// Close the view, discarding any loaded record.
    pub fn close(&mut self) {
        self.state = FlowState::Idle;
        self.input.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MetadataError;
    use std::cell::RefCell;

    struct NoReader;

    impl AccountReader for NoReader {
        fn account_data(&self, _address: &Pubkey) -> MetadataResult<Option<Vec<u8>>> {
            Ok(None)
        }
    }

    struct NoFetcher;

    impl UriFetcher for NoFetcher {
        fn fetch_json(&self, uri: &str) -> MetadataResult<serde_json::Value> {
            Err(MetadataError::Network(format!("unreachable: {}", uri)))
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        notifications: RefCell<Vec<NotificationKind>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, kind: NotificationKind, _message: &str) {
            self.notifications.borrow_mut().push(kind);
        }
    }

    #[test]
    fn invalid_address_makes_no_network_call() {
        let err = resolve_token(
            &NoReader,
            &NoFetcher,
            &metadata_program_id(),
            "not-an-address",
        )
        .unwrap_err();

        assert!(matches!(err, MetadataError::InvalidAddress(_)));
    }

    #[test]
    fn missing_account_keeps_its_kind() {
        let mint = Pubkey::new_unique();

        let err = resolve_token(
            &NoReader,
            &NoFetcher,
            &metadata_program_id(),
            &mint.to_string(),
        )
        .unwrap_err();

        assert!(matches!(err, MetadataError::AccountNotFound(_)));
    }

    #[test]
    fn empty_submit_fails_without_resolving() {
        let sink = RecordingSink::default();
        let mut flow = MetadataFlow::new(NoReader, NoFetcher, &sink);

        flow.submit();

        assert!(matches!(flow.state(), FlowState::Idle));
        assert_eq!(
            sink.notifications.borrow().as_slice(),
            &[NotificationKind::Error]
        );
    }

    #[test]
    fn failed_submit_leaves_the_input_for_correction() {
        let sink = RecordingSink::default();
        let mut flow = MetadataFlow::new(NoReader, NoFetcher, &sink);
        let mint = Pubkey::new_unique().to_string();

        flow.set_input(mint.clone());
        flow.submit();

        assert!(matches!(flow.state(), FlowState::Idle));
        assert_eq!(flow.input(), mint);
        assert_eq!(
            sink.notifications.borrow().as_slice(),
            &[NotificationKind::Error]
        );
    }

    #[test]
    fn close_resets_to_an_empty_form() {
        let sink = RecordingSink::default();
        let mut flow = MetadataFlow::new(NoReader, NoFetcher, &sink);

        flow.set_input("anything");
        flow.close();

        assert!(matches!(flow.state(), FlowState::Idle));
        assert_eq!(flow.input(), "");
    }
}
