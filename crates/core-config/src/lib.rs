//! Status formatter configuration.
//!
//! `StatusConfig` is the flat, typed snapshot the renderer reads once per call. The host
//! owns persistence: it hands the formatter an opaque key/value blob (camelCase keys) which
//! deserializes into this struct and serializes back unchanged. Every field has a default,
//! unknown keys are ignored, and the historical `cursorSeperator` / `rangeSeperator`
//! spellings are accepted on input.
//!
//! Option + custom pairs: separators, the display pattern, the cursor line pattern, the
//! padding step and the frontmatter phrase each come as a named preset selector plus a
//! free-form fallback used only when the selector is `custom`. `StatusConfig::effective`
//! performs that lookup so render code never inspects selectors directly.
//!
//! Frontmatter polarity: a single `frontmatterExcludedFromPercent` flag (default `false`).
//! When set, wordy percentages are measured from the line after the frontmatter's closing
//! fence and cursors inside the block show the frontmatter phrase.
//!
//! File support mirrors the editor config loader: `load_from` reads TOML, falling back to
//! defaults on a missing or malformed file (logged, never fatal).

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::{info, warn};

pub mod options;
pub mod settings;

pub use options::{
    CursorLinePatternOption, CursorSeparatorOption, FrontmatterPhrase, FuzzyAmount,
    PaddingStepOption, PatternOption, RangeSeparatorOption, SelectionMode,
};
pub use settings::{SettingError, SettingKey, SettingKind, SettingValue};

/// File name looked up in the working directory and the platform config dir.
pub const CONFIG_FILE_NAME: &str = "cursor-status.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusConfig {
    /// Cursors listed individually before collapsing to "N cursors". 0 disables output.
    pub number_cursors: u32,
    pub selection_mode: SelectionMode,
    pub display_char_count: bool,
    pub display_total_lines: bool,
    pub display_cursor_lines: bool,
    pub display_pattern: String,
    pub display_pattern_option: PatternOption,
    #[serde(alias = "cursorSeperator")]
    pub cursor_separator: String,
    pub cursor_separator_option: CursorSeparatorOption,
    #[serde(alias = "rangeSeperator")]
    pub range_separator: String,
    pub range_separator_option: RangeSeparatorOption,
    pub cursor_line_pattern: String,
    pub cursor_line_pattern_option: CursorLinePatternOption,
    pub status_bar_padding: bool,
    pub padding_step: u32,
    pub padding_step_option: PaddingStepOption,
    pub wordy_display: bool,
    pub fuzzy_amount: FuzzyAmount,
    pub frontmatter_excluded_from_percent: bool,
    pub frontmatter_string: FrontmatterPhrase,
    pub frontmatter_string_custom: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            number_cursors: 1,
            selection_mode: SelectionMode::default(),
            display_char_count: true,
            display_total_lines: true,
            display_cursor_lines: false,
            display_pattern: "ch:ln/ct".to_string(),
            display_pattern_option: PatternOption::default(),
            cursor_separator: " / ".to_string(),
            cursor_separator_option: CursorSeparatorOption::default(),
            range_separator: "->".to_string(),
            range_separator_option: RangeSeparatorOption::default(),
            cursor_line_pattern: "[lc]".to_string(),
            cursor_line_pattern_option: CursorLinePatternOption::default(),
            status_bar_padding: false,
            padding_step: 9,
            padding_step_option: PaddingStepOption::default(),
            wordy_display: false,
            fuzzy_amount: FuzzyAmount::default(),
            frontmatter_excluded_from_percent: false,
            frontmatter_string: FrontmatterPhrase::default(),
            frontmatter_string_custom: "frontmatter".to_string(),
        }
    }
}

/// Strings and numbers the renderer actually uses after preset resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveOptions<'a> {
    pub display_pattern: &'a str,
    pub cursor_separator: &'a str,
    pub range_separator: &'a str,
    pub cursor_line_pattern: &'a str,
    pub padding_step: u32,
    pub frontmatter_phrase: &'a str,
}

impl StatusConfig {
    /// Resolve every option selector to its effective value.
    pub fn effective(&self) -> EffectiveOptions<'_> {
        EffectiveOptions {
            display_pattern: self
                .display_pattern_option
                .preset()
                .unwrap_or(&self.display_pattern),
            cursor_separator: self
                .cursor_separator_option
                .preset()
                .unwrap_or(&self.cursor_separator),
            range_separator: self
                .range_separator_option
                .preset()
                .unwrap_or(&self.range_separator),
            cursor_line_pattern: self
                .cursor_line_pattern_option
                .preset()
                .unwrap_or(&self.cursor_line_pattern),
            padding_step: self.padding_step_option.preset().unwrap_or(self.padding_step),
            frontmatter_phrase: self
                .frontmatter_string
                .preset()
                .unwrap_or(&self.frontmatter_string_custom),
        }
    }

    /// Parse a TOML settings blob. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to the TOML form accepted by `from_toml_str`.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml_string()?)?;
        info!(target: "config", file = %path.display(), "config_saved");
        Ok(())
    }
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("cursor-status").join(CONFIG_FILE_NAME);
    }
    local
}

/// Load settings from `path` (or the discovered location). Unreadable or malformed files
/// yield the defaults.
pub fn load_from(path: Option<PathBuf>) -> Result<StatusConfig> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(StatusConfig::default());
    };
    match StatusConfig::from_toml_str(&content) {
        Ok(cfg) => Ok(cfg),
        Err(e) => {
            warn!(target: "config", file = %path.display(), error = %e, "config_parse_failed");
            Ok(StatusConfig::default())
        }
    }
}
