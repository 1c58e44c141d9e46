//! Tag input for a project's technology list.
//!
//! The list itself belongs to the caller (the project form); this component
//! only edits it. Empty and exact-duplicate entries are dropped silently.

/// Labels offered as one-click additions.
pub const QUICK_PICKS: [&str; 7] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Next.js",
    "Node.js",
    "Tailwind CSS",
    "Prisma",
];

/// Keystrokes the free-text field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Enter,
    Other,
}

/// Free-text draft plus the add/remove operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechnologyInput {
    draft: String,
}

impl TechnologyInput {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Add `value` to `technologies`. Returns `true` if it was added.
    ///
    /// The draft is cleared only when something was added.
    pub fn add(&mut self, technologies: &mut Vec<String>, value: &str) -> bool {
        let added = push_unique(technologies, value);
        if added {
            self.draft.clear();
        }
        added
    }

    /// Add the quick pick at `index`. Out-of-range indices are ignored.
    pub fn add_quick_pick(&mut self, technologies: &mut Vec<String>, index: usize) -> bool {
        match QUICK_PICKS.get(index) {
            Some(pick) => self.add(technologies, pick),
            None => false,
        }
    }

    /// Add the current draft (the "Add" action).
    pub fn submit_draft(&mut self, technologies: &mut Vec<String>) -> bool {
        let draft = std::mem::take(&mut self.draft);
        let added = self.add(technologies, &draft);
        if !added {
            self.draft = draft;
        }
        added
    }

    /// React to a keystroke in the free-text field. Enter submits the draft.
    pub fn handle_key(&mut self, key: InputKey, technologies: &mut Vec<String>) -> bool {
        match key {
            InputKey::Enter => self.submit_draft(technologies),
            InputKey::Other => false,
        }
    }

    /// Remove the entry at `index`, returning it.
    pub fn remove(technologies: &mut Vec<String>, index: usize) -> Option<String> {
        (index < technologies.len()).then(|| technologies.remove(index))
    }
}

fn push_unique(technologies: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || technologies.iter().any(|t| t == value) {
        return false;
    }
    technologies.push(value.to_string());
    true
}
