//! The bridge controller: owns the engine channel and the bridge state.
//!
//! Every engine-directed operation tolerates a missing channel: it logs
//! and does nothing. The exception is [`BridgeController::get_content`],
//! which fails with [`BridgeError::ChannelNotReady`] instead of returning a
//! request that could never resolve.

use std::time::{Duration, Instant};

use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use scribe_common::{
    BridgeError, BridgeEvent, BridgeState, EditorStatus, EventBus, Panel, ParaType, SessionId,
};
use scribe_config::ScribeConfig;
use scribe_webview::{EditorEvent, EngineChannel, EngineCommand, InitPayload};

use crate::commands;
use crate::keyboard::{KeyboardDebouncer, DEFAULT_KEYBOARD_DEBOUNCE};
use crate::pending::{ContentRequest, ContentSlot};
use crate::subscription::StateReceiver;
use crate::toolbar::{self, PanelInput};

/// Construction options for a [`BridgeController`].
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub keyboard_debounce: Duration,
    /// Capacity of the broadcast event bus.
    pub event_capacity: usize,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            keyboard_debounce: DEFAULT_KEYBOARD_DEBOUNCE,
            event_capacity: 64,
        }
    }
}

impl BridgeOptions {
    pub fn from_config(config: &ScribeConfig) -> Self {
        Self {
            keyboard_debounce: Duration::from_millis(u64::from(config.keyboard.debounce_ms)),
            ..Default::default()
        }
    }
}

/// A mounted engine channel and its session bookkeeping.
struct Mounted<C> {
    channel: C,
    session: SessionId,
    initialized: bool,
}

/// Synchronizes host UI state with the embedded engine.
pub struct BridgeController<C: EngineChannel> {
    mounted: Option<Mounted<C>>,
    state: watch::Sender<BridgeState>,
    events: EventBus,
    content: ContentSlot,
    keyboard: KeyboardDebouncer,
}

impl<C: EngineChannel> BridgeController<C> {
    pub fn new(options: BridgeOptions) -> Self {
        let (state, _) = watch::channel(BridgeState::default());
        Self {
            mounted: None,
            state,
            events: EventBus::new(options.event_capacity),
            content: ContentSlot::default(),
            keyboard: KeyboardDebouncer::new(options.keyboard_debounce),
        }
    }

    // =========================================================================
    // CHANNEL LIFECYCLE
    // =========================================================================

    /// Attach the engine channel. Any previously mounted channel is
    /// unmounted first and returned.
    pub fn mount(&mut self, channel: C) -> Option<C> {
        let previous = self.unmount();
        let session = SessionId::new();
        info!(session = %session, "engine channel mounted");
        self.mounted = Some(Mounted {
            channel,
            session,
            initialized: false,
        });
        self.events.publish(BridgeEvent::ChannelMounted);
        previous
    }

    /// Detach the engine channel.
    ///
    /// Cancels the keyboard timer and fails a waiting content request with
    /// [`BridgeError::ChannelClosed`].
    pub fn unmount(&mut self) -> Option<C> {
        let mounted = self.mounted.take()?;
        self.keyboard.cancel();
        if let Some(id) = self.content.fail(BridgeError::ChannelClosed) {
            debug!(request_id = %id, "content request closed by unmount");
        }
        info!(session = %mounted.session, "engine channel unmounted");
        self.events.publish(BridgeEvent::ChannelUnmounted);
        Some(mounted.channel)
    }

    pub fn is_ready(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn session(&self) -> Option<&SessionId> {
        self.mounted.as_ref().map(|m| &m.session)
    }

    // =========================================================================
    // STATE ACCESS
    // =========================================================================

    /// Borrow the current state.
    pub fn state(&self) -> watch::Ref<'_, BridgeState> {
        self.state.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> StateReceiver {
        StateReceiver::new(self.state.subscribe())
    }

    /// Subscribe to discrete bridge events.
    pub fn events(&self) -> broadcast::Receiver<BridgeEvent> {
        self.events.subscribe()
    }

    /// Whether `value` differs from the content last pushed to the engine.
    pub fn needs_content_update(&self, value: &str) -> bool {
        self.state.borrow().content != value
    }

    // =========================================================================
    // CONTENT
    // =========================================================================

    /// Send the one-time initialization payload to the engine.
    ///
    /// Ignored without a channel, and ignored with a warning if this
    /// channel was already initialized.
    pub fn initialize(&mut self, initial_content: &str, content_style: &str, placeholder: Option<&str>) {
        let Some(mounted) = self.mounted.as_mut() else {
            debug!("initialize ignored: engine channel not ready");
            return;
        };
        if mounted.initialized {
            warn!(session = %mounted.session, "initialize ignored: channel already initialized");
            return;
        }

        let payload = InitPayload {
            content: initial_content.to_string(),
            content_style: content_style.to_string(),
            placeholder: placeholder.map(str::to_string),
        };
        if let Err(e) = mounted.channel.send_command(&EngineCommand::Init(payload)) {
            warn!(session = %mounted.session, error = %e, "failed to send init payload");
            return;
        }
        mounted.initialized = true;
        info!(session = %mounted.session, content_len = initial_content.len(), "engine initialized");

        self.state.send_if_modified(|s| {
            if s.content == initial_content {
                return false;
            }
            s.content = initial_content.to_string();
            true
        });
    }

    /// Replace the engine's document. Silently dropped when the channel is
    /// not ready; the caller retries once it is.
    pub fn update_content(&mut self, content: &str) {
        if !self.is_ready() {
            debug!(content_len = content.len(), "update_content dropped: engine channel not ready");
            return;
        }
        if !self.send(EngineCommand::SetContent(content.to_string())) {
            return;
        }
        self.state.send_if_modified(|s| {
            if s.content == content {
                return false;
            }
            s.content = content.to_string();
            true
        });
        self.events.publish(BridgeEvent::ContentPushed);
    }

    /// Ask the engine for its current content.
    ///
    /// The returned request resolves from [`on_message`](Self::on_message)
    /// when the `getContent` reply arrives. Only one request may be in
    /// flight; a second call fails with [`BridgeError::RequestInFlight`].
    pub fn get_content(&mut self) -> Result<ContentRequest, BridgeError> {
        let Some(mounted) = self.mounted.as_ref() else {
            return Err(BridgeError::ChannelNotReady);
        };

        let request = self.content.open()?;
        if let Err(e) = mounted.channel.send_command(&EngineCommand::RequestContent) {
            warn!(request_id = %request.id(), error = %e, "failed to request content");
            self.content.fail(BridgeError::Channel(e.clone()));
            return Err(BridgeError::Channel(e));
        }
        debug!(request_id = %request.id(), "content requested");
        Ok(request)
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    /// Forward a formatting command, then blur the engine.
    ///
    /// Toolbar-driven commands always dismiss the on-screen keyboard, so
    /// every command is followed by a focus release.
    pub fn dispatch_command(&mut self, command_id: &str, show_ui: bool, value: Option<&str>) {
        if !self.is_ready() {
            debug!(command_id, "command dropped: engine channel not ready");
            return;
        }
        debug!(command_id, show_ui, ?value, "dispatching command");
        self.send(EngineCommand::Exec {
            command_id: command_id.to_string(),
            show_ui,
            value: value.map(str::to_string),
        });
        self.send(EngineCommand::Blur);
    }

    /// Toggle an inline or block format by its engine name.
    pub fn toggle_format(&mut self, format: &str) {
        self.dispatch_command(commands::TOGGLE_FORMAT, false, Some(format));
    }

    pub fn undo(&mut self) {
        self.dispatch_command(commands::UNDO, false, None);
    }

    pub fn redo(&mut self) {
        self.dispatch_command(commands::REDO, false, None);
    }

    /// Switch the current block to `para`.
    pub fn set_paragraph_type(&mut self, para: ParaType) {
        let (command_id, value) = commands::paragraph_command(para);
        self.dispatch_command(command_id, false, value);
    }

    pub fn insert_link(&mut self, url: &str) {
        self.dispatch_command(commands::INSERT_LINK, false, Some(url));
    }

    pub fn remove_link(&mut self) {
        self.dispatch_command(commands::UNLINK, false, None);
    }

    // =========================================================================
    // PANELS
    // =========================================================================

    /// Show the formatting panel. Blurs the engine first so the keyboard
    /// does not compete with the panel for space.
    pub fn show_format_panel(&mut self) {
        self.show_panel(PanelInput::ShowFormat);
    }

    /// Show the link panel. Blurs the engine first, keeping its selection.
    pub fn show_link_panel(&mut self) {
        self.show_panel(PanelInput::ShowLink);
    }

    /// Return to the default toolbar and give editing focus back.
    pub fn dismiss_panels(&mut self) {
        self.apply_panel(PanelInput::Dismiss);
        if self.is_ready() {
            self.send(EngineCommand::Focus);
        }
    }

    fn show_panel(&mut self, input: PanelInput) {
        if !self.is_ready() {
            debug!(?input, "panel change ignored: engine channel not ready");
            return;
        }
        self.send(EngineCommand::Blur);
        self.apply_panel(input);
    }

    fn apply_panel(&mut self, input: PanelInput) {
        let mut next = Panel::Default;
        let changed = self.state.send_if_modified(|s| {
            next = toolbar::transition(s.panel, input);
            if next == s.panel {
                return false;
            }
            s.panel = next;
            true
        });
        if changed {
            debug!(?input, panel = ?next, "panel changed");
            self.events.publish(BridgeEvent::PanelChanged(next));
        }
    }

    // =========================================================================
    // KEYBOARD
    // =========================================================================

    /// The host OS reported the on-screen keyboard opening.
    pub fn on_keyboard_show(&mut self, now: Instant) {
        let task = self.keyboard.arm(now);
        debug!(task = task.id, "keyboard show debounced");
    }

    /// The host OS reported the keyboard hiding. Cancels a pending show.
    pub fn on_keyboard_hide(&mut self) {
        if let Some(task) = self.keyboard.cancel() {
            debug!(task = task.id, "keyboard show cancelled by hide");
        }
    }

    /// Run due timers. Returns `true` if the keyboard debounce fired.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        if !self.keyboard.poll(now) {
            return false;
        }
        debug!("keyboard show settled");
        self.apply_panel(PanelInput::KeyboardSettled);
        true
    }

    /// When the host loop should next call [`poll_timers`](Self::poll_timers).
    pub fn next_deadline(&self) -> Option<Instant> {
        self.keyboard.deadline()
    }

    // =========================================================================
    // INGRESS
    // =========================================================================

    /// Single entry point for raw engine messages.
    ///
    /// Malformed messages are logged, published as
    /// [`BridgeEvent::ProtocolError`] and returned; state is left untouched
    /// and the channel stays up.
    pub fn on_message(&mut self, raw: &str) -> Result<(), BridgeError> {
        match EditorEvent::decode(raw) {
            Ok(event) => {
                self.handle_event(event);
                Ok(())
            }
            Err(e) => {
                warn!(body_len = raw.len(), error = %e, "engine message rejected");
                self.events.publish(BridgeEvent::ProtocolError(e.to_string()));
                Err(e)
            }
        }
    }

    /// Fold an already-decoded engine event into the bridge.
    pub fn handle_event(&mut self, event: EditorEvent) {
        match event {
            EditorEvent::UpdateStatus(status) => self.apply_status(status),
            EditorEvent::GetContent { html } => {
                let len = html.len();
                match self.content.resolve(html) {
                    Some(id) => {
                        debug!(request_id = %id, content_len = len, "content request resolved");
                        self.events.publish(BridgeEvent::ContentReceived);
                    }
                    None => debug!(content_len = len, "unsolicited content reply discarded"),
                }
            }
            EditorEvent::Unknown(kind) => {
                debug!(kind = %kind, "ignoring unknown engine message");
            }
        }
    }

    fn apply_status(&mut self, status: EditorStatus) {
        self.state.send_if_modified(|s| {
            let changed = s.text_status != status;
            s.text_status = status;
            changed
        });
        self.events.publish(BridgeEvent::StatusUpdated(status));
    }

    /// Send a command through the mounted channel. Returns whether it was
    /// handed to the channel.
    fn send(&self, command: EngineCommand) -> bool {
        let Some(mounted) = self.mounted.as_ref() else {
            return false;
        };
        match mounted.channel.send_command(&command) {
            Ok(()) => true,
            Err(e) => {
                warn!(command = command.name(), error = %e, "engine command not delivered");
                false
            }
        }
    }
}

impl<C: EngineChannel> Default for BridgeController<C> {
    fn default() -> Self {
        Self::new(BridgeOptions::default())
    }
}

#[cfg(test)]
mod tests;
