use std::cell::{Cell, RefCell};
use std::rc::Rc;

use scribe_common::{ChannelError, UndoState};
use scribe_webview::script::js_string;

use super::*;

const MS: Duration = Duration::from_millis(1);

/// Records every script sent; can be switched to fail.
#[derive(Clone, Default)]
struct Recorder {
    sent: Rc<RefCell<Vec<String>>>,
    failing: Rc<Cell<bool>>,
}

impl Recorder {
    fn scripts(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    fn clear(&self) {
        self.sent.borrow_mut().clear();
    }
}

impl EngineChannel for Recorder {
    fn send(&self, script: &str) -> Result<(), ChannelError> {
        if self.failing.get() {
            return Err(ChannelError::Unavailable);
        }
        self.sent.borrow_mut().push(script.to_string());
        Ok(())
    }
}

fn mounted() -> (BridgeController<Recorder>, Recorder) {
    let rec = Recorder::default();
    let mut bridge = BridgeController::default();
    bridge.mount(rec.clone());
    (bridge, rec)
}

fn status_message(payload: &str) -> String {
    format!(r#"{{"type":"updateStatus","payload":{payload}}}"#)
}

fn content_message(html: &str) -> String {
    format!(
        r#"{{"type":"getContent","payload":{{"html":{}}}}}"#,
        js_string(html)
    )
}

fn script(command: EngineCommand) -> String {
    command.to_script()
}

fn blur() -> String {
    script(EngineCommand::Blur)
}

// =============================================================================
// STATUS
// =============================================================================

#[test]
fn status_update_replaces_whole_status() {
    let (mut bridge, _) = mounted();
    bridge
        .on_message(&status_message(
            r#"{"bold":true,"italic":true,"underline":false,"strikethrough":false,"paraType":"h1","undo":{"hasUndo":true,"hasRedo":false}}"#,
        ))
        .unwrap();
    bridge
        .on_message(&status_message(r#"{"underline":true}"#))
        .unwrap();

    let status = bridge.state().text_status;
    assert_eq!(
        status,
        EditorStatus {
            underline: true,
            ..EditorStatus::default()
        }
    );
    assert_eq!(status.para_type, ParaType::P);
    assert_eq!(status.undo, UndoState::default());
}

#[test]
fn list_aliases_are_accepted() {
    let (mut bridge, _) = mounted();
    bridge
        .on_message(&status_message(r#"{"paraType":"UL"}"#))
        .unwrap();
    assert_eq!(bridge.state().text_status.para_type, ParaType::Ul);
}

#[test]
fn malformed_message_leaves_state_untouched() {
    let (mut bridge, _) = mounted();
    bridge
        .on_message(&status_message(r#"{"bold":true}"#))
        .unwrap();
    let before = bridge.state().clone();
    let mut events = bridge.events();

    for raw in [
        "not json",
        r#"{"payload":{}}"#,
        r#"{"type":"updateStatus","payload":{"bold":"yes"}}"#,
        r#"{"type":"getContent","payload":{}}"#,
    ] {
        let err = bridge.on_message(raw).unwrap_err();
        assert!(matches!(err, BridgeError::Protocol(_)), "{raw}: {err:?}");
    }

    assert_eq!(*bridge.state(), before);
    assert!(bridge.is_ready());
    assert!(matches!(
        events.try_recv().unwrap(),
        BridgeEvent::ProtocolError(_)
    ));
}

#[test]
fn unknown_message_types_are_ignored() {
    let (mut bridge, rec) = mounted();
    let before = bridge.state().clone();
    bridge
        .on_message(r#"{"type":"selectionChanged","payload":{"x":1}}"#)
        .unwrap();
    assert_eq!(*bridge.state(), before);
    assert!(rec.scripts().is_empty());
}

// =============================================================================
// CONTENT
// =============================================================================

#[test]
fn initialize_sends_payload_once_per_channel() {
    let (mut bridge, rec) = mounted();
    bridge.initialize("<p>Hi</p>", "body {}", Some("Write…"));
    bridge.initialize("<p>Again</p>", "body {}", None);

    let scripts = rec.scripts();
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].starts_with("window.scribe.init("));
    assert!(scripts[0].contains("<p>Hi</p>"));
    assert_eq!(bridge.state().content, "<p>Hi</p>");

    // A fresh channel gets its own init.
    let second = Recorder::default();
    bridge.mount(second.clone());
    bridge.initialize("<p>Again</p>", "body {}", None);
    assert_eq!(second.scripts().len(), 1);
}

#[test]
fn initialize_without_channel_is_a_no_op() {
    let mut bridge = BridgeController::<Recorder>::default();
    bridge.initialize("<p>Hi</p>", "", None);
    assert_eq!(bridge.state().content, "");
}

#[test]
fn update_content_pushes_and_records() {
    let (mut bridge, rec) = mounted();
    assert!(bridge.needs_content_update("<p>New</p>"));
    bridge.update_content("<p>New</p>");

    assert_eq!(
        rec.scripts(),
        [script(EngineCommand::SetContent("<p>New</p>".into()))]
    );
    assert!(!bridge.needs_content_update("<p>New</p>"));
}

#[test]
fn update_content_without_channel_is_dropped() {
    let mut bridge = BridgeController::<Recorder>::default();
    bridge.update_content("<p>Lost</p>");
    assert!(bridge.needs_content_update("<p>Lost</p>"));
}

#[tokio::test]
async fn get_content_resolves_exactly_once() {
    let (mut bridge, rec) = mounted();
    let request = bridge.get_content().unwrap();
    assert_eq!(rec.scripts(), [script(EngineCommand::RequestContent)]);

    bridge.on_message(&content_message("<p>X</p>")).unwrap();
    // A second reply finds nothing waiting.
    bridge.on_message(&content_message("<p>Y</p>")).unwrap();

    assert_eq!(request.await.unwrap(), "<p>X</p>");
}

#[tokio::test]
async fn content_round_trips_opaquely() {
    let (mut bridge, _) = mounted();
    let html = "<p data-x=\"1\">a&amp;b <em>é</em>\n\t</p><!-- c -->";
    bridge.update_content(html);

    let request = bridge.get_content().unwrap();
    bridge.on_message(&content_message(html)).unwrap();
    assert_eq!(request.await.unwrap(), html);
}

#[test]
fn get_content_without_channel_fails_immediately() {
    let mut bridge = BridgeController::<Recorder>::default();
    assert_eq!(
        bridge.get_content().unwrap_err(),
        BridgeError::ChannelNotReady
    );
    assert!(!bridge.content.is_waiting());
}

#[test]
fn concurrent_get_content_is_refused() {
    let (mut bridge, rec) = mounted();
    let _first = bridge.get_content().unwrap();
    assert_eq!(
        bridge.get_content().unwrap_err(),
        BridgeError::RequestInFlight
    );
    assert_eq!(rec.scripts().len(), 1);
}

#[tokio::test]
async fn abandoned_request_does_not_block_the_next() {
    let (mut bridge, _) = mounted();
    drop(bridge.get_content().unwrap());

    let second = bridge.get_content().unwrap();
    bridge.on_message(&content_message("<p>2</p>")).unwrap();
    assert_eq!(second.await.unwrap(), "<p>2</p>");
}

#[tokio::test]
async fn get_content_send_failure_frees_the_slot() {
    let (mut bridge, rec) = mounted();
    rec.failing.set(true);
    assert_eq!(
        bridge.get_content().unwrap_err(),
        BridgeError::Channel(ChannelError::Unavailable)
    );

    rec.failing.set(false);
    assert!(bridge.get_content().is_ok());
}

#[tokio::test]
async fn unmount_closes_pending_request() {
    let (mut bridge, _) = mounted();
    let request = bridge.get_content().unwrap();
    assert!(bridge.unmount().is_some());
    assert_eq!(request.await.unwrap_err(), BridgeError::ChannelClosed);
}

#[tokio::test]
async fn dropping_controller_closes_pending_request() {
    let (mut bridge, _) = mounted();
    let request = bridge.get_content().unwrap();
    drop(bridge);
    assert_eq!(request.await.unwrap_err(), BridgeError::ChannelClosed);
}

// =============================================================================
// COMMANDS
// =============================================================================

#[test]
fn dispatch_sends_command_then_blur() {
    let (mut bridge, rec) = mounted();
    bridge.dispatch_command("mceToggleFormat", false, Some("bold"));

    assert_eq!(
        rec.scripts(),
        [
            r#"tinymce.activeEditor.execCommand("mceToggleFormat", false, "bold");"#.to_string(),
            blur(),
        ]
    );
}

#[test]
fn dispatch_without_value_sends_exactly_command_then_blur() {
    let (mut bridge, rec) = mounted();
    bridge.dispatch_command("bold", false, None);

    assert_eq!(
        rec.scripts(),
        [
            r#"tinymce.activeEditor.execCommand("bold", false, null);"#.to_string(),
            blur(),
        ]
    );
}

#[test]
fn each_convenience_command_is_followed_by_blur() {
    let (mut bridge, rec) = mounted();
    bridge.undo();
    bridge.insert_link("https://example.com");

    assert_eq!(
        rec.scripts(),
        [
            r#"tinymce.activeEditor.execCommand("Undo", false, null);"#.to_string(),
            blur(),
            r#"tinymce.activeEditor.execCommand("mceInsertLink", false, "https://example.com");"#
                .to_string(),
            blur(),
        ]
    );
}

#[test]
fn dispatch_without_channel_is_a_no_op() {
    let mut bridge = BridgeController::<Recorder>::default();
    bridge.dispatch_command("Undo", false, None);
    assert!(!bridge.is_ready());
}

#[test]
fn convenience_commands_map_to_engine_commands() {
    let (mut bridge, rec) = mounted();
    bridge.toggle_format("italic");
    bridge.undo();
    bridge.redo();
    bridge.set_paragraph_type(ParaType::Ol);
    bridge.set_paragraph_type(ParaType::H2);
    bridge.insert_link("https://example.com");
    bridge.remove_link();

    let exec: Vec<String> = rec
        .scripts()
        .into_iter()
        .filter(|s| *s != blur())
        .collect();
    assert_eq!(
        exec,
        [
            r#"tinymce.activeEditor.execCommand("mceToggleFormat", false, "italic");"#,
            r#"tinymce.activeEditor.execCommand("Undo", false, null);"#,
            r#"tinymce.activeEditor.execCommand("Redo", false, null);"#,
            r#"tinymce.activeEditor.execCommand("InsertOrderedList", false, null);"#,
            r#"tinymce.activeEditor.execCommand("mceToggleFormat", false, "h2");"#,
            r#"tinymce.activeEditor.execCommand("mceInsertLink", false, "https://example.com");"#,
            r#"tinymce.activeEditor.execCommand("unlink", false, null);"#,
        ]
    );
    assert_eq!(rec.scripts().len(), 14);
}

// =============================================================================
// PANELS
// =============================================================================

#[test]
fn show_format_panel_blurs_then_switches() {
    let (mut bridge, rec) = mounted();
    bridge.show_format_panel();

    assert_eq!(rec.scripts(), [blur()]);
    assert_eq!(bridge.state().panel, Panel::Format);
}

#[test]
fn panels_are_mutually_exclusive() {
    let (mut bridge, _) = mounted();
    bridge.show_format_panel();
    bridge.show_link_panel();
    assert!(bridge.state().showing_link());
    assert!(!bridge.state().showing_format());

    bridge.show_format_panel();
    assert!(bridge.state().showing_format());
    assert!(!bridge.state().showing_link());
}

#[test]
fn dismiss_returns_to_default_and_refocuses() {
    let (mut bridge, rec) = mounted();
    bridge.show_link_panel();
    rec.clear();

    bridge.dismiss_panels();
    assert_eq!(bridge.state().panel, Panel::Default);
    assert_eq!(rec.scripts(), [script(EngineCommand::Focus)]);
}

#[test]
fn panel_requests_without_channel() {
    let mut bridge = BridgeController::<Recorder>::default();
    bridge.show_format_panel();
    assert_eq!(bridge.state().panel, Panel::Default);
    bridge.show_link_panel();
    assert_eq!(bridge.state().panel, Panel::Default);
    bridge.dismiss_panels();
    assert_eq!(bridge.state().panel, Panel::Default);
}

#[test]
fn panel_change_notifies_subscribers() {
    let (mut bridge, _) = mounted();
    let mut rx = bridge.subscribe();
    let mut events = bridge.events();
    assert!(!rx.has_changed());

    bridge.show_format_panel();
    assert!(rx.has_changed());
    assert_eq!(rx.take().panel, Panel::Format);
    assert!(matches!(
        events.try_recv().unwrap(),
        BridgeEvent::PanelChanged(Panel::Format)
    ));

    // Showing the same panel again is not a change.
    bridge.show_format_panel();
    assert!(!rx.has_changed());
}

// =============================================================================
// KEYBOARD
// =============================================================================

#[test]
fn settled_keyboard_collapses_format_panel() {
    let t0 = Instant::now();
    let (mut bridge, _) = mounted();
    bridge.show_format_panel();

    bridge.on_keyboard_show(t0);
    assert_eq!(bridge.next_deadline(), Some(t0 + 100 * MS));
    assert!(!bridge.poll_timers(t0 + 50 * MS));
    assert!(bridge.state().showing_format());

    assert!(bridge.poll_timers(t0 + 100 * MS));
    assert_eq!(bridge.state().panel, Panel::Default);
    assert_eq!(bridge.next_deadline(), None);
}

#[test]
fn hide_within_window_cancels_show() {
    let t0 = Instant::now();
    let (mut bridge, _) = mounted();
    bridge.show_format_panel();

    bridge.on_keyboard_show(t0);
    bridge.on_keyboard_hide();
    assert!(!bridge.poll_timers(t0 + 500 * MS));
    assert!(bridge.state().showing_format());
}

#[test]
fn show_burst_fires_once_after_last_show() {
    let t0 = Instant::now();
    let (mut bridge, _) = mounted();
    bridge.show_format_panel();

    bridge.on_keyboard_show(t0);
    bridge.on_keyboard_show(t0 + 20 * MS);
    bridge.on_keyboard_show(t0 + 40 * MS);

    assert!(!bridge.poll_timers(t0 + 100 * MS));
    assert!(bridge.poll_timers(t0 + 140 * MS));
    assert!(!bridge.poll_timers(t0 + 300 * MS));
}

#[test]
fn settled_keyboard_keeps_link_panel_open() {
    let t0 = Instant::now();
    let (mut bridge, _) = mounted();
    bridge.show_link_panel();

    bridge.on_keyboard_show(t0);
    assert!(bridge.poll_timers(t0 + 100 * MS));
    assert!(bridge.state().showing_link());
}

#[test]
fn debounce_follows_options() {
    let t0 = Instant::now();
    let mut bridge = BridgeController::<Recorder>::new(BridgeOptions {
        keyboard_debounce: Duration::from_millis(250),
        ..Default::default()
    });
    bridge.on_keyboard_show(t0);
    assert_eq!(bridge.next_deadline(), Some(t0 + 250 * MS));
}

#[test]
fn unmount_cancels_keyboard_timer() {
    let t0 = Instant::now();
    let (mut bridge, _) = mounted();
    bridge.on_keyboard_show(t0);
    bridge.unmount();
    assert_eq!(bridge.next_deadline(), None);
    assert!(!bridge.poll_timers(t0 + 500 * MS));
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn mount_replaces_previous_channel() {
    let (mut bridge, first) = mounted();
    let first_session = bridge.session().cloned();

    let previous = bridge.mount(Recorder::default());
    assert!(previous.is_some_and(|p| Rc::ptr_eq(&p.sent, &first.sent)));
    assert_ne!(bridge.session().cloned(), first_session);
}

#[test]
fn lifecycle_events_are_published() {
    let mut bridge = BridgeController::<Recorder>::default();
    let mut events = bridge.events();
    bridge.mount(Recorder::default());
    bridge.unmount();

    assert!(matches!(events.try_recv().unwrap(), BridgeEvent::ChannelMounted));
    assert!(matches!(
        events.try_recv().unwrap(),
        BridgeEvent::ChannelUnmounted
    ));
    assert!(bridge.unmount().is_none());
}

#[test]
fn options_from_config() {
    let mut config = ScribeConfig::default();
    config.keyboard.debounce_ms = 40;
    let options = BridgeOptions::from_config(&config);
    assert_eq!(options.keyboard_debounce, Duration::from_millis(40));
}
