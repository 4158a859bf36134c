use serde::Deserialize;
use thiserror::Error;

/// Settings read by the math recognizers.
///
/// Every field has a default, so a host can embed this in its own
/// configuration and only spell out what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MathOptions {
    /// Register the `\( … \)` recognizer.
    pub inline: bool,
    /// Register the `\[ … \]` recognizer.
    pub block: bool,
    /// Whether the host recognizes indented code. When it does, a fence may
    /// be indented by less than one tab stop; otherwise by any amount.
    pub indented_code: bool,
    /// Width of a tab stop, in columns.
    pub tab_size: usize,
}

impl Default for MathOptions {
    fn default() -> Self {
        Self {
            inline: true,
            block: true,
            indented_code: true,
            tab_size: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("tab_size must be at least 1")]
    ZeroTabSize,
}

impl MathOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.tab_size == 0 {
            return Err(OptionsError::ZeroTabSize);
        }
        Ok(())
    }

    /// Returns how many spaces or tabs may precede a block fence.
    pub fn max_fence_indent(&self) -> usize {
        if self.indented_code {
            self.tab_size.saturating_sub(1)
        } else {
            usize::MAX
        }
    }
}
