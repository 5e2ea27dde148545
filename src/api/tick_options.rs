use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};

/// Serializable tick request settings shared by numeric and time axes.
///
/// Missing fields deserialize to the defaults, so hosts can persist only what
/// they change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOptions {
    /// Desired number of ticks; the selected scale may differ slightly.
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    /// Keep ticks within the data range instead of covering it.
    #[serde(default)]
    pub inside: bool,
    /// Return time ticks as datetimes rather than epoch seconds.
    #[serde(default = "default_as_datetime")]
    pub as_datetime: bool,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            tick_count: default_tick_count(),
            inside: false,
            as_datetime: default_as_datetime(),
        }
    }
}

impl TickOptions {
    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_inside(mut self, inside: bool) -> Self {
        self.inside = inside;
        self
    }

    #[must_use]
    pub fn with_as_datetime(mut self, as_datetime: bool) -> Self {
        self.as_datetime = as_datetime;
        self
    }

    pub fn validate(self) -> TickResult<Self> {
        if self.tick_count < 2 {
            return Err(TickError::InvalidTickCount {
                tick_count: self.tick_count,
            });
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> TickResult<Self> {
        let options: Self = serde_json::from_str(input).map_err(|e| {
            TickError::InvalidData(format!("failed to parse tick options json: {e}"))
        })?;
        options.validate()
    }

    pub fn to_json_pretty(self) -> TickResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            TickError::InvalidData(format!("failed to serialize tick options json: {e}"))
        })
    }
}

fn default_tick_count() -> usize {
    5
}

fn default_as_datetime() -> bool {
    true
}
