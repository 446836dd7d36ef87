//! Canned small-talk replies.

use rand::Rng;

const NAME_SLOT: &str = "{name}";

const WHAT_ARE_YOU_DOING: &[&str] = &[
    "Just hanging out with you, {name}.",
    "Keeping an eye on things for you, {name}.",
    "Waiting for you to ask me something, {name}.",
    "Counting electrons, {name}. It's a living.",
];

const WHO_DA_MAN: &[&str] = &[
    "You are, {name}!",
    "{name} is the man!",
    "That would be you, {name}.",
    "Everyone knows it's {name}.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    WhatAreYouDoing,
    WhoDaMan,
}

impl Dialog {
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            Self::WhatAreYouDoing => WHAT_ARE_YOU_DOING,
            Self::WhoDaMan => WHO_DA_MAN,
        }
    }

    /// Pick one template uniformly at random and fill in `name`.
    pub fn render<R: Rng>(&self, name: &str, rng: &mut R) -> String {
        let templates = self.templates();
        let template = templates[rng.random_range(0..templates.len())];
        template.replace(NAME_SLOT, name)
    }
}
