//! Reaction picker state.
//!
//! The menu mirrors pointer hover over its container: open on enter, closed
//! on leave. A chosen reaction is logged and has no other effect.

#[cfg(test)]
#[path = "reactions_test.rs"]
mod reactions_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Love,
    Haha,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [Reaction::Like, Reaction::Love, Reaction::Haha];

    pub fn label(self) -> &'static str {
        match self {
            Self::Like => "Like",
            Self::Love => "Love",
            Self::Haha => "Haha",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReactionMenu {
    pub open: bool,
}

impl ReactionMenu {
    pub fn pointer_enter(&mut self) {
        self.open = true;
    }

    pub fn pointer_leave(&mut self) {
        self.open = false;
    }
}

/// Log a chosen reaction and return the logged line.
pub fn report_reaction(reaction: Reaction) -> String {
    let line = format!("selected reaction: {}", reaction.label());
    leptos::logging::log!("{line}");
    line
}
