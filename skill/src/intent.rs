//! Intents the skill answers.

use std::fmt;
use std::str::FromStr;

use crate::SkillError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillIntent {
    /// Full health check.
    HowAreThings,
    WhatAreYouDoing,
    WhoDaMan,
}

impl SkillIntent {
    pub const ALL: [SkillIntent; 3] = [Self::HowAreThings, Self::WhatAreYouDoing, Self::WhoDaMan];

    /// Intent file name registered with the host.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::HowAreThings => "HowAreThings.intent",
            Self::WhatAreYouDoing => "WhatAreYouDoing.intent",
            Self::WhoDaMan => "WhoDaMan.intent",
        }
    }
}

impl fmt::Display for SkillIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for SkillIntent {
    type Err = SkillError;

    /// Accepts the intent file name with or without the `.intent` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let name = name.strip_suffix(".intent").unwrap_or(name);
        Self::ALL
            .into_iter()
            .find(|intent| intent.file_name().trim_end_matches(".intent").eq_ignore_ascii_case(name))
            .ok_or_else(|| SkillError::UnknownIntent(s.to_string()))
    }
}
