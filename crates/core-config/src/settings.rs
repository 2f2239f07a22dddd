//! Settings-surface editing: named keys, typed values, validated text edits and resets.
//!
//! A settings UI edits one key at a time from raw text. `apply_text` is the single
//! validation boundary: numeric keys reject anything that is not a whole non-negative
//! integer, the previous value is kept, and the returned `SettingError` carries the warning
//! to show the user. Resets are table driven: `default_value(key)` reads the key out of
//! `StatusConfig::default()`, so the defaults live in exactly one place.

use crate::StatusConfig;
use crate::options::{
    CursorLinePatternOption, CursorSeparatorOption, FrontmatterPhrase, FuzzyAmount,
    PaddingStepOption, PatternOption, RangeSeparatorOption, SelectionMode, named_options,
};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

named_options! {
    /// Every persisted setting, by its camelCase key.
    pub enum SettingKey {
        NumberCursors => "numberCursors",
        SelectionMode => "selectionMode",
        DisplayCharCount => "displayCharCount",
        DisplayTotalLines => "displayTotalLines",
        DisplayCursorLines => "displayCursorLines",
        DisplayPattern => "displayPattern",
        DisplayPatternOption => "displayPatternOption",
        CursorSeparator => "cursorSeparator" | "cursorSeperator",
        CursorSeparatorOption => "cursorSeparatorOption",
        RangeSeparator => "rangeSeparator" | "rangeSeperator",
        RangeSeparatorOption => "rangeSeparatorOption",
        CursorLinePattern => "cursorLinePattern",
        CursorLinePatternOption => "cursorLinePatternOption",
        StatusBarPadding => "statusBarPadding",
        PaddingStep => "paddingStep",
        PaddingStepOption => "paddingStepOption",
        WordyDisplay => "wordyDisplay",
        FuzzyAmount => "fuzzyAmount",
        FrontmatterExcludedFromPercent => "frontmatterExcludedFromPercent",
        FrontmatterString => "frontmatterString",
        FrontmatterStringCustom => "frontmatterStringCustom",
    }
}

/// Value shape a key accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Number,
    Flag,
    Text,
    /// One of a fixed set of option names (see `SettingKey::choices`).
    Choice,
}

impl SettingKey {
    /// Resolve a persisted key name.
    pub fn parse(name: &str) -> Result<Self, SettingError> {
        Self::from_name(name).ok_or_else(|| SettingError::UnknownSetting(name.to_string()))
    }

    pub fn kind(self) -> SettingKind {
        match self {
            SettingKey::NumberCursors | SettingKey::PaddingStep => SettingKind::Number,
            SettingKey::DisplayCharCount
            | SettingKey::DisplayTotalLines
            | SettingKey::DisplayCursorLines
            | SettingKey::StatusBarPadding
            | SettingKey::WordyDisplay
            | SettingKey::FrontmatterExcludedFromPercent => SettingKind::Flag,
            SettingKey::DisplayPattern
            | SettingKey::CursorSeparator
            | SettingKey::RangeSeparator
            | SettingKey::CursorLinePattern
            | SettingKey::FrontmatterStringCustom => SettingKind::Text,
            SettingKey::SelectionMode
            | SettingKey::DisplayPatternOption
            | SettingKey::CursorSeparatorOption
            | SettingKey::RangeSeparatorOption
            | SettingKey::CursorLinePatternOption
            | SettingKey::PaddingStepOption
            | SettingKey::FuzzyAmount
            | SettingKey::FrontmatterString => SettingKind::Choice,
        }
    }

    /// Accepted option names for a choice key; empty for every other kind.
    pub fn choices(self) -> Vec<&'static str> {
        fn names<T: Copy>(all: &[T], name: fn(T) -> &'static str) -> Vec<&'static str> {
            all.iter().map(|v| name(*v)).collect()
        }
        match self {
            SettingKey::SelectionMode => names(SelectionMode::ALL, SelectionMode::as_str),
            SettingKey::DisplayPatternOption => names(PatternOption::ALL, PatternOption::as_str),
            SettingKey::CursorSeparatorOption => {
                names(CursorSeparatorOption::ALL, CursorSeparatorOption::as_str)
            }
            SettingKey::RangeSeparatorOption => {
                names(RangeSeparatorOption::ALL, RangeSeparatorOption::as_str)
            }
            SettingKey::CursorLinePatternOption => {
                names(CursorLinePatternOption::ALL, CursorLinePatternOption::as_str)
            }
            SettingKey::PaddingStepOption => {
                names(PaddingStepOption::ALL, PaddingStepOption::as_str)
            }
            SettingKey::FuzzyAmount => names(FuzzyAmount::ALL, FuzzyAmount::as_str),
            SettingKey::FrontmatterString => {
                names(FrontmatterPhrase::ALL, FrontmatterPhrase::as_str)
            }
            _ => Vec::new(),
        }
    }

    // Separators keep their surrounding spaces; every other free-text value is trimmed.
    fn keeps_whitespace(self) -> bool {
        matches!(self, SettingKey::CursorSeparator | SettingKey::RangeSeparator)
    }
}

/// A single setting value. Choice keys carry their option name as `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Number(u32),
    Flag(bool),
    Text(String),
}

impl SettingValue {
    fn kind_name(&self) -> &'static str {
        match self {
            SettingValue::Number(_) => "number",
            SettingValue::Flag(_) => "boolean",
            SettingValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Number(n) => write!(f, "{n}"),
            SettingValue::Flag(b) => write!(f, "{b}"),
            SettingValue::Text(s) => f.write_str(s),
        }
    }
}

/// Rejected setting edit. The `Display` text is the warning shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingError {
    #[error("\"{value}\" is not a full number, unable to save.")]
    NotANumber { key: SettingKey, value: String },
    #[error("\"{value}\" is not true or false, unable to save.")]
    NotAFlag { key: SettingKey, value: String },
    #[error("\"{value}\" is not a valid choice for {key}, unable to save.")]
    UnknownOption { key: SettingKey, value: String },
    #[error("{key} does not accept a {found} value")]
    WrongType { key: SettingKey, found: &'static str },
    #[error("unknown setting \"{0}\"")]
    UnknownSetting(String),
}

/// Default for one key.
pub fn default_value(key: SettingKey) -> SettingValue {
    StatusConfig::default().get(key)
}

/// Full `(key, default)` table in declaration order.
pub fn defaults() -> Vec<(SettingKey, SettingValue)> {
    let base = StatusConfig::default();
    SettingKey::ALL.iter().map(|k| (*k, base.get(*k))).collect()
}

fn choice<T>(
    key: SettingKey,
    raw: &str,
    from_name: fn(&str) -> Option<T>,
) -> Result<T, SettingError> {
    from_name(raw).ok_or_else(|| SettingError::UnknownOption {
        key,
        value: raw.to_string(),
    })
}

impl StatusConfig {
    /// Current value of `key`.
    pub fn get(&self, key: SettingKey) -> SettingValue {
        use SettingValue::{Flag, Number, Text};
        match key {
            SettingKey::NumberCursors => Number(self.number_cursors),
            SettingKey::SelectionMode => Text(self.selection_mode.as_str().into()),
            SettingKey::DisplayCharCount => Flag(self.display_char_count),
            SettingKey::DisplayTotalLines => Flag(self.display_total_lines),
            SettingKey::DisplayCursorLines => Flag(self.display_cursor_lines),
            SettingKey::DisplayPattern => Text(self.display_pattern.clone()),
            SettingKey::DisplayPatternOption => Text(self.display_pattern_option.as_str().into()),
            SettingKey::CursorSeparator => Text(self.cursor_separator.clone()),
            SettingKey::CursorSeparatorOption => {
                Text(self.cursor_separator_option.as_str().into())
            }
            SettingKey::RangeSeparator => Text(self.range_separator.clone()),
            SettingKey::RangeSeparatorOption => Text(self.range_separator_option.as_str().into()),
            SettingKey::CursorLinePattern => Text(self.cursor_line_pattern.clone()),
            SettingKey::CursorLinePatternOption => {
                Text(self.cursor_line_pattern_option.as_str().into())
            }
            SettingKey::StatusBarPadding => Flag(self.status_bar_padding),
            SettingKey::PaddingStep => Number(self.padding_step),
            SettingKey::PaddingStepOption => Text(self.padding_step_option.as_str().into()),
            SettingKey::WordyDisplay => Flag(self.wordy_display),
            SettingKey::FuzzyAmount => Text(self.fuzzy_amount.as_str().into()),
            SettingKey::FrontmatterExcludedFromPercent => {
                Flag(self.frontmatter_excluded_from_percent)
            }
            SettingKey::FrontmatterString => Text(self.frontmatter_string.as_str().into()),
            SettingKey::FrontmatterStringCustom => Text(self.frontmatter_string_custom.clone()),
        }
    }

    /// Store a typed value. On error nothing changes.
    pub fn set(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingError> {
        let previous = self.get(key);
        self.assign(key, value)?;
        let current = self.get(key);
        if previous != current {
            info!(target: "config", key = %key, value = %current, "setting_changed");
        }
        Ok(())
    }

    /// Validate and store a raw text edit from the settings UI.
    pub fn apply_text(&mut self, key: SettingKey, raw: &str) -> Result<(), SettingError> {
        let parsed = match key.kind() {
            SettingKind::Number => raw
                .trim()
                .parse::<u32>()
                .map(SettingValue::Number)
                .map_err(|_| SettingError::NotANumber {
                    key,
                    value: raw.to_string(),
                }),
            SettingKind::Flag => match raw.trim() {
                "true" => Ok(SettingValue::Flag(true)),
                "false" => Ok(SettingValue::Flag(false)),
                _ => Err(SettingError::NotAFlag {
                    key,
                    value: raw.to_string(),
                }),
            },
            SettingKind::Text if key.keeps_whitespace() => Ok(SettingValue::Text(raw.to_string())),
            SettingKind::Text | SettingKind::Choice => {
                Ok(SettingValue::Text(raw.trim().to_string()))
            }
        };
        let result = parsed.and_then(|value| self.set(key, value));
        if let Err(e) = &result {
            warn!(target: "config", key = %key, error = %e, "setting_rejected");
        }
        result
    }

    /// `apply_text` addressed by persisted key name.
    pub fn apply_named(&mut self, name: &str, raw: &str) -> Result<(), SettingError> {
        let key = SettingKey::parse(name)?;
        self.apply_text(key, raw)
    }

    /// Restore one key to its default.
    pub fn reset(&mut self, key: SettingKey) {
        self.reset_from(key, &StatusConfig::default());
    }

    /// Restore every key to its default.
    pub fn reset_all(&mut self) {
        let defaults = StatusConfig::default();
        for key in SettingKey::ALL {
            self.reset_from(*key, &defaults);
        }
    }

    fn reset_from(&mut self, key: SettingKey, defaults: &StatusConfig) {
        match key {
            SettingKey::NumberCursors => self.number_cursors = defaults.number_cursors,
            SettingKey::SelectionMode => self.selection_mode = defaults.selection_mode,
            SettingKey::DisplayCharCount => self.display_char_count = defaults.display_char_count,
            SettingKey::DisplayTotalLines => {
                self.display_total_lines = defaults.display_total_lines
            }
            SettingKey::DisplayCursorLines => {
                self.display_cursor_lines = defaults.display_cursor_lines
            }
            SettingKey::DisplayPattern => {
                self.display_pattern.clone_from(&defaults.display_pattern)
            }
            SettingKey::DisplayPatternOption => {
                self.display_pattern_option = defaults.display_pattern_option
            }
            SettingKey::CursorSeparator => {
                self.cursor_separator.clone_from(&defaults.cursor_separator)
            }
            SettingKey::CursorSeparatorOption => {
                self.cursor_separator_option = defaults.cursor_separator_option
            }
            SettingKey::RangeSeparator => {
                self.range_separator.clone_from(&defaults.range_separator)
            }
            SettingKey::RangeSeparatorOption => {
                self.range_separator_option = defaults.range_separator_option
            }
            SettingKey::CursorLinePattern => {
                self.cursor_line_pattern.clone_from(&defaults.cursor_line_pattern)
            }
            SettingKey::CursorLinePatternOption => {
                self.cursor_line_pattern_option = defaults.cursor_line_pattern_option
            }
            SettingKey::StatusBarPadding => self.status_bar_padding = defaults.status_bar_padding,
            SettingKey::PaddingStep => self.padding_step = defaults.padding_step,
            SettingKey::PaddingStepOption => {
                self.padding_step_option = defaults.padding_step_option
            }
            SettingKey::WordyDisplay => self.wordy_display = defaults.wordy_display,
            SettingKey::FuzzyAmount => self.fuzzy_amount = defaults.fuzzy_amount,
            SettingKey::FrontmatterExcludedFromPercent => {
                self.frontmatter_excluded_from_percent = defaults.frontmatter_excluded_from_percent
            }
            SettingKey::FrontmatterString => self.frontmatter_string = defaults.frontmatter_string,
            SettingKey::FrontmatterStringCustom => self
                .frontmatter_string_custom
                .clone_from(&defaults.frontmatter_string_custom),
        }
        info!(target: "config", key = %key, value = %self.get(key), "setting_reset");
    }

    fn assign(&mut self, key: SettingKey, value: SettingValue) -> Result<(), SettingError> {
        use SettingValue::{Flag, Number, Text};
        match (key, value) {
            (SettingKey::NumberCursors, Number(n)) => self.number_cursors = n,
            (SettingKey::PaddingStep, Number(n)) => self.padding_step = n,
            (SettingKey::DisplayCharCount, Flag(b)) => self.display_char_count = b,
            (SettingKey::DisplayTotalLines, Flag(b)) => self.display_total_lines = b,
            (SettingKey::DisplayCursorLines, Flag(b)) => self.display_cursor_lines = b,
            (SettingKey::StatusBarPadding, Flag(b)) => self.status_bar_padding = b,
            (SettingKey::WordyDisplay, Flag(b)) => self.wordy_display = b,
            (SettingKey::FrontmatterExcludedFromPercent, Flag(b)) => {
                self.frontmatter_excluded_from_percent = b
            }
            (SettingKey::DisplayPattern, Text(s)) => self.display_pattern = s,
            (SettingKey::CursorSeparator, Text(s)) => self.cursor_separator = s,
            (SettingKey::RangeSeparator, Text(s)) => self.range_separator = s,
            (SettingKey::CursorLinePattern, Text(s)) => self.cursor_line_pattern = s,
            (SettingKey::FrontmatterStringCustom, Text(s)) => self.frontmatter_string_custom = s,
            (SettingKey::SelectionMode, Text(s)) => {
                self.selection_mode = choice(key, &s, SelectionMode::from_name)?
            }
            (SettingKey::DisplayPatternOption, Text(s)) => {
                self.display_pattern_option = choice(key, &s, PatternOption::from_name)?
            }
            (SettingKey::CursorSeparatorOption, Text(s)) => {
                self.cursor_separator_option = choice(key, &s, CursorSeparatorOption::from_name)?
            }
            (SettingKey::RangeSeparatorOption, Text(s)) => {
                self.range_separator_option = choice(key, &s, RangeSeparatorOption::from_name)?
            }
            (SettingKey::CursorLinePatternOption, Text(s)) => {
                self.cursor_line_pattern_option =
                    choice(key, &s, CursorLinePatternOption::from_name)?
            }
            (SettingKey::PaddingStepOption, Text(s)) => {
                self.padding_step_option = choice(key, &s, PaddingStepOption::from_name)?
            }
            (SettingKey::FuzzyAmount, Text(s)) => {
                self.fuzzy_amount = choice(key, &s, FuzzyAmount::from_name)?
            }
            (SettingKey::FrontmatterString, Text(s)) => {
                self.frontmatter_string = choice(key, &s, FrontmatterPhrase::from_name)?
            }
            (key, value) => {
                return Err(SettingError::WrongType {
                    key,
                    found: value.kind_name(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_a_default_of_its_kind() {
        for (key, value) in defaults() {
            let ok = matches!(
                (key.kind(), &value),
                (SettingKind::Number, SettingValue::Number(_))
                    | (SettingKind::Flag, SettingValue::Flag(_))
                    | (SettingKind::Text, SettingValue::Text(_))
                    | (SettingKind::Choice, SettingValue::Text(_))
            );
            assert!(ok, "{key} default {value:?} does not match its kind");
        }
        assert_eq!(defaults().len(), SettingKey::ALL.len());
    }

    #[test]
    fn non_integer_keeps_previous_value() {
        let mut cfg = StatusConfig::default();
        cfg.apply_text(SettingKey::NumberCursors, "4").unwrap();
        let err = cfg.apply_text(SettingKey::NumberCursors, "four").unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"four\" is not a full number, unable to save."
        );
        assert_eq!(cfg.number_cursors, 4);

        let err = cfg.apply_text(SettingKey::PaddingStep, "3x").unwrap_err();
        assert!(matches!(err, SettingError::NotANumber { key: SettingKey::PaddingStep, .. }));
        assert_eq!(cfg.padding_step, 9);
        assert!(cfg.apply_text(SettingKey::PaddingStep, "-2").is_err());
    }

    #[test]
    fn numbers_accept_surrounding_whitespace() {
        let mut cfg = StatusConfig::default();
        cfg.apply_text(SettingKey::PaddingStep, " 12 ").unwrap();
        assert_eq!(cfg.padding_step, 12);
    }

    #[test]
    fn choices_validated_against_option_names() {
        let mut cfg = StatusConfig::default();
        cfg.apply_text(SettingKey::SelectionMode, " end ").unwrap();
        assert_eq!(cfg.selection_mode, SelectionMode::End);
        let err = cfg.apply_text(SettingKey::SelectionMode, "middle").unwrap_err();
        assert!(matches!(err, SettingError::UnknownOption { .. }));
        assert_eq!(cfg.selection_mode, SelectionMode::End);
        assert_eq!(
            SettingKey::FrontmatterString.choices(),
            vec!["frontmatter", "metadata", "preamble", "custom"]
        );
        assert!(SettingKey::NumberCursors.choices().is_empty());
    }

    #[test]
    fn patterns_trimmed_separators_verbatim() {
        let mut cfg = StatusConfig::default();
        cfg.apply_text(SettingKey::DisplayPattern, "  ln:ch  ").unwrap();
        cfg.apply_text(SettingKey::CursorSeparator, " ; ").unwrap();
        assert_eq!(cfg.display_pattern, "ln:ch");
        assert_eq!(cfg.cursor_separator, " ; ");
    }

    #[test]
    fn flags_parse_true_false_only() {
        let mut cfg = StatusConfig::default();
        cfg.apply_text(SettingKey::WordyDisplay, "true").unwrap();
        assert!(cfg.wordy_display);
        assert!(cfg.apply_text(SettingKey::WordyDisplay, "yes").is_err());
        assert!(cfg.wordy_display);
    }

    #[test]
    fn typed_set_rejects_mismatched_value() {
        let mut cfg = StatusConfig::default();
        let err = cfg
            .set(SettingKey::NumberCursors, SettingValue::Flag(true))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "numberCursors does not accept a boolean value"
        );
    }

    #[test]
    fn reset_restores_defaults() {
        let mut cfg = StatusConfig::default();
        cfg.apply_named("rangeSeperator", " => ").unwrap();
        cfg.apply_named("fuzzyAmount", "onlypercent").unwrap();
        cfg.apply_named("numberCursors", "7").unwrap();
        cfg.reset(SettingKey::RangeSeparator);
        assert_eq!(cfg.range_separator, "->");
        assert_eq!(cfg.fuzzy_amount, FuzzyAmount::OnlyPercent);
        cfg.reset_all();
        assert_eq!(cfg, StatusConfig::default());
    }

    #[test]
    fn each_key_resets_independently() {
        let mut cfg = StatusConfig {
            number_cursors: 5,
            selection_mode: SelectionMode::Begin,
            display_char_count: false,
            display_total_lines: false,
            display_cursor_lines: true,
            display_pattern: "ln".into(),
            display_pattern_option: PatternOption::Custom,
            cursor_separator: ", ".into(),
            cursor_separator_option: CursorSeparatorOption::Custom,
            range_separator: "..".into(),
            range_separator_option: RangeSeparatorOption::Custom,
            cursor_line_pattern: "#lc".into(),
            cursor_line_pattern_option: CursorLinePatternOption::Custom,
            status_bar_padding: true,
            padding_step: 4,
            padding_step_option: PaddingStepOption::Custom,
            wordy_display: true,
            fuzzy_amount: FuzzyAmount::VeryWordy,
            frontmatter_excluded_from_percent: true,
            frontmatter_string: FrontmatterPhrase::Custom,
            frontmatter_string_custom: "header".into(),
        };
        for key in SettingKey::ALL {
            assert_ne!(cfg.get(*key), default_value(*key), "{key} starts non-default");
            cfg.reset(*key);
            assert_eq!(cfg.get(*key), default_value(*key), "{key} after reset");
        }
        assert_eq!(cfg, StatusConfig::default());
    }

    #[test]
    fn unknown_key_name() {
        let mut cfg = StatusConfig::default();
        let err = cfg.apply_named("includeFrontmatter", "true").unwrap_err();
        assert_eq!(
            err,
            SettingError::UnknownSetting("includeFrontmatter".into())
        );
    }
}
