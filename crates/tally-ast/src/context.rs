//! Participants known to a single parse.

use smol_str::SmolStr;

/// The participant names the lexer recognises as members.
///
/// Names are kept in insertion order. Duplicates are dropped, comparing
/// case-insensitively, because member matching is case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParticipantContext {
    members: Vec<SmolStr>,
}

impl ParticipantContext {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut context = Self::default();
        for name in members {
            let name = name.as_ref().trim();
            if name.is_empty() || context.find(name).is_some() {
                continue;
            }
            context.members.push(SmolStr::from(name));
        }
        context
    }

    pub fn members(&self) -> &[SmolStr] {
        &self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Find the member matching `name`, ignoring case.
    pub fn find(&self, name: &str) -> Option<&SmolStr> {
        self.members
            .iter()
            .find(|member| member.to_lowercase() == name.to_lowercase())
    }
}
