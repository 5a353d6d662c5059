//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Scribe Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[editor]
# initial_content = "<p>Hello world!</p>"
# content_style = "body { font-family: sans-serif; }"
# placeholder = "Start writing…"

[keyboard]
# Delay before a keyboard-show collapses the format panel.
# debounce_ms = 100     # 1-1000

[webview]
# devtools = false
# user_agent = "Scribe/0.1"
# assets_dir = "assets"
# entry = "editor.html"

[logging]
# level = "info"        # trace, debug, info, warn, error
"##
    .to_string()
}
