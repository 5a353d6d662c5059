//! Host -> engine commands, rendered as JavaScript for injection.
//!
//! Every command is fire-and-forget: the snippet is evaluated in the
//! webview and nothing is returned. String arguments are JSON-encoded, so
//! content passes through as an opaque value whatever it contains.

use serde::{Deserialize, Serialize};

/// One-time initialization payload handed to the engine page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitPayload {
    pub content: String,
    pub content_style: String,
    /// Serialized as `null` when absent.
    pub placeholder: Option<String>,
}

/// A command the host can send to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Init(InitPayload),
    SetContent(String),
    /// Ask the engine to post its current content back as `getContent`.
    RequestContent,
    Exec {
        command_id: String,
        show_ui: bool,
        value: Option<String>,
    },
    /// Release input focus so the on-screen keyboard dismisses.
    Blur,
    /// Restore editing focus.
    Focus,
}

impl EngineCommand {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            EngineCommand::Init(_) => "init",
            EngineCommand::SetContent(_) => "set_content",
            EngineCommand::RequestContent => "request_content",
            EngineCommand::Exec { .. } => "exec",
            EngineCommand::Blur => "blur",
            EngineCommand::Focus => "focus",
        }
    }

    /// Render the JavaScript snippet for this command.
    pub fn to_script(&self) -> String {
        match self {
            EngineCommand::Init(payload) => {
                let config =
                    serde_json::to_string(payload).unwrap_or_else(|_| "{}".to_string());
                format!("window.scribe.init({config});\ntrue;")
            }
            EngineCommand::SetContent(content) => {
                format!("tinymce.activeEditor.setContent({});", js_string(content))
            }
            EngineCommand::RequestContent => {
                "window.scribe.post(\"getContent\", { html: tinymce.activeEditor.getContent() });"
                    .to_string()
            }
            EngineCommand::Exec {
                command_id,
                show_ui,
                value,
            } => {
                let value = match value {
                    Some(v) => js_string(v),
                    None => "null".to_string(),
                };
                format!(
                    "tinymce.activeEditor.execCommand({}, {show_ui}, {value});",
                    js_string(command_id)
                )
            }
            EngineCommand::Blur => {
                "document.activeElement && document.activeElement.blur();".to_string()
            }
            EngineCommand::Focus => "tinymce.activeEditor.focus();".to_string(),
        }
    }
}

/// Encode a Rust string as a JavaScript string literal.
pub fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

/// Glue injected into the engine page before any page script runs.
///
/// Defines `window.scribe` on top of wry's `window.ipc` primitive and a
/// `window.ReactNativeWebView` shim so engine pages written against that
/// API post through the same channel.
pub const ENGINE_GLUE_SCRIPT: &str = r#"
(function() {
    var scribe = window.scribe = window.scribe || {};
    scribe.post = function(type, payload) {
        window.ipc.postMessage(JSON.stringify({
            type: type,
            payload: payload === undefined ? null : payload
        }));
    };
    // The page registers `scribe.onInit`; the host calls `scribe.init`.
    scribe.init = function(config) {
        scribe.config = config;
        if (typeof scribe.onInit === 'function') {
            scribe.onInit(config);
        }
    };
    window.ReactNativeWebView = window.ReactNativeWebView || {
        postMessage: function(raw) {
            window.ipc.postMessage(raw);
        }
    };
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_payload_encodes_missing_placeholder_as_null() {
        let payload = InitPayload {
            content: "<p>Hello world!</p>".into(),
            content_style: "body { font-family: sans-serif; }".into(),
            placeholder: None,
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "content": "<p>Hello world!</p>",
                "content_style": "body { font-family: sans-serif; }",
                "placeholder": null,
            })
        );
    }

    #[test]
    fn init_script_calls_glue_and_evaluates_truthy() {
        let script = EngineCommand::Init(InitPayload {
            content: String::new(),
            content_style: String::new(),
            placeholder: Some("Start writing…".into()),
        })
        .to_script();
        assert!(script.starts_with("window.scribe.init({"));
        assert!(script.contains("\"placeholder\":\"Start writing…\""));
        assert!(script.ends_with("true;"));
    }

    #[test]
    fn set_content_escapes_markup() {
        let content = "<p class=\"x\">it's\n</script><b>bold</b></p>";
        let script = EngineCommand::SetContent(content.into()).to_script();
        assert_eq!(
            script,
            format!("tinymce.activeEditor.setContent({});", js_string(content))
        );
        // The embedded literal decodes back to the exact input.
        let literal = script
            .strip_prefix("tinymce.activeEditor.setContent(")
            .and_then(|s| s.strip_suffix(");"))
            .unwrap();
        let decoded: String = serde_json::from_str(literal).unwrap();
        assert_eq!(decoded, content);
    }

    #[test]
    fn exec_without_value_passes_null() {
        let script = EngineCommand::Exec {
            command_id: "mceToggleFormat".into(),
            show_ui: false,
            value: None,
        }
        .to_script();
        assert_eq!(
            script,
            "tinymce.activeEditor.execCommand(\"mceToggleFormat\", false, null);"
        );
    }

    #[test]
    fn exec_with_value() {
        let script = EngineCommand::Exec {
            command_id: "mceInsertLink".into(),
            show_ui: true,
            value: Some("https://example.com/?q=\"x\"".into()),
        }
        .to_script();
        assert_eq!(
            script,
            r#"tinymce.activeEditor.execCommand("mceInsertLink", true, "https://example.com/?q=\"x\"");"#
        );
    }

    #[test]
    fn request_content_posts_back_get_content() {
        let script = EngineCommand::RequestContent.to_script();
        assert!(script.contains("\"getContent\""));
        assert!(script.contains("tinymce.activeEditor.getContent()"));
    }

    #[test]
    fn focus_commands() {
        assert!(EngineCommand::Blur.to_script().contains(".blur()"));
        assert_eq!(
            EngineCommand::Focus.to_script(),
            "tinymce.activeEditor.focus();"
        );
    }

    #[test]
    fn glue_defines_post_and_shim() {
        assert!(ENGINE_GLUE_SCRIPT.contains("scribe.post"));
        assert!(ENGINE_GLUE_SCRIPT.contains("window.ipc.postMessage"));
        assert!(ENGINE_GLUE_SCRIPT.contains("ReactNativeWebView"));
    }
}
