//! Named option selectors.
//!
//! Every enumerated setting is persisted by its lowercase key (`"full"`, `"slash"`, ...),
//! so the host's settings blob stays readable and round-trips verbatim. `named_options!`
//! keeps the Rust variant, the persisted key and any historical aliases in one table.

macro_rules! named_options {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal $(| $alias:literal)* ),+ $(,)?
        }
        $(default = $default:ident;)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Persisted key for this option.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $key),+
                }
            }

            /// Parse a persisted key (or historical alias).
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($key $(| $alias)* => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    $name::$default
                }
            }
        )?

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::from_name(&raw)
                    .ok_or_else(|| serde::de::Error::unknown_variant(&raw, &[$($key),+]))
            }
        }
    };
}

pub(crate) use named_options;

named_options! {
    /// Which part of a selection is shown.
    pub enum SelectionMode {
        Begin => "begin",
        End => "end",
        Full => "full",
    }
    default = Full;
}

named_options! {
    /// Display pattern source.
    pub enum PatternOption {
        Preset => "preset",
        Custom => "custom",
    }
    default = Preset;
}

named_options! {
    /// Separator placed between the positions of multiple cursors.
    pub enum CursorSeparatorOption {
        Slash => "slash",
        Pipe => "pipe",
        Tilde => "tilde",
        Ampersand => "ampersand",
        Custom => "custom",
    }
    default = Slash;
}

named_options! {
    /// Separator placed between the two ends of a selection.
    pub enum RangeSeparatorOption {
        Arrow => "arrow",
        Dash => "dash",
        Tilde => "tilde",
        Custom => "custom",
    }
    default = Arrow;
}

named_options! {
    /// Bracket style for the per-cursor line count annotation.
    pub enum CursorLinePatternOption {
        Square => "square",
        Curly => "curly",
        Parens => "parens",
        Pointy => "pointy",
        Custom => "custom",
    }
    default = Square;
}

named_options! {
    /// Step the status width is rounded up to when padding.
    pub enum PaddingStepOption {
        Low => "low",
        Medium => "medium",
        High => "high",
        Custom => "custom",
    }
    default = Medium;
}

named_options! {
    /// How percent-through-document is turned into words.
    pub enum FuzzyAmount {
        VeryWordy => "verywordy",
        LittleWordy => "littewordy" | "littlewordy",
        StrictPercent => "strictpercent",
        LowFuzzyPercent => "lowfuzzypercent",
        HighFuzzyPercent => "highfuzzypercent",
        OnlyPercent => "onlypercent",
    }
    default = StrictPercent;
}

named_options! {
    /// Word shown while the cursor sits inside the frontmatter.
    pub enum FrontmatterPhrase {
        Frontmatter => "frontmatter",
        Metadata => "metadata",
        Preamble => "preamble",
        Custom => "custom",
    }
    default = Frontmatter;
}

impl PatternOption {
    pub const fn preset(self) -> Option<&'static str> {
        match self {
            PatternOption::Preset => Some("ch:ln/ct"),
            PatternOption::Custom => None,
        }
    }
}

impl CursorSeparatorOption {
    pub const fn preset(self) -> Option<&'static str> {
        match self {
            CursorSeparatorOption::Slash => Some(" / "),
            CursorSeparatorOption::Pipe => Some(" | "),
            CursorSeparatorOption::Tilde => Some(" ~ "),
            CursorSeparatorOption::Ampersand => Some(" & "),
            CursorSeparatorOption::Custom => None,
        }
    }
}

impl RangeSeparatorOption {
    pub const fn preset(self) -> Option<&'static str> {
        match self {
            RangeSeparatorOption::Arrow => Some("->"),
            RangeSeparatorOption::Dash => Some("-"),
            RangeSeparatorOption::Tilde => Some("~"),
            RangeSeparatorOption::Custom => None,
        }
    }
}

impl CursorLinePatternOption {
    pub const fn preset(self) -> Option<&'static str> {
        match self {
            CursorLinePatternOption::Square => Some("[lc]"),
            CursorLinePatternOption::Curly => Some("{lc}"),
            CursorLinePatternOption::Parens => Some("(lc)"),
            CursorLinePatternOption::Pointy => Some("<lc>"),
            CursorLinePatternOption::Custom => None,
        }
    }
}

impl PaddingStepOption {
    pub const fn preset(self) -> Option<u32> {
        match self {
            PaddingStepOption::Low => Some(6),
            PaddingStepOption::Medium => Some(9),
            PaddingStepOption::High => Some(12),
            PaddingStepOption::Custom => None,
        }
    }
}

impl FrontmatterPhrase {
    pub const fn preset(self) -> Option<&'static str> {
        match self {
            FrontmatterPhrase::Frontmatter => Some("frontmatter"),
            FrontmatterPhrase::Metadata => Some("metadata"),
            FrontmatterPhrase::Preamble => Some("preamble"),
            FrontmatterPhrase::Custom => None,
        }
    }
}
