//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# winview Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Window Overview"
# default_width = 400      # minimum; grows to fit the overview
# default_height = 400
# background = "#ececec"
# text = "#000000"

[thumbnail]
# reference_width = 1920
# reference_height = 1080
# scale = 0.1              # 0.01-1.0, thumbnail = reference * scale
# shrink = 0.95            # 0.1-1.0, margin around the screenshot
# background = "#ffffff"

[icons]
# size = 32                # 8-256

[icons.overrides]
# Class-group name = image file shown instead of the window's own icon.
Alacritty = "Alacritty.png"

[layout]
# mode = "grouped"         # grouped, flat
# spacing = 10             # 0-100

[refresh]
# interval_ms = 1000       # 0 disables timed repaints, otherwise 100-60000

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
