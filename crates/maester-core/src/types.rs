//! Houses, characters, and page selectors.
//!
//! These are the view-facing shapes of the directory. They carry no
//! behavior beyond derivation from what the API returned: a character
//! is alive exactly when no death date is present, and nothing here is
//! persisted or mutated after construction.

use serde::{Deserialize, Serialize};

use crate::ids::CharacterId;

// ============================================================================
// Character
// ============================================================================

/// A full character record, as shown on the detail view.
///
/// The API uses empty strings for unknown values; they are kept as-is
/// and filtered at render time. `titles` and `aliases` preserve the
/// order the API returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name (may be empty for unnamed characters).
    pub name: String,

    /// Gender as reported by the API.
    pub gender: String,

    /// Culture, or empty when unknown.
    pub culture: String,

    /// Birth date phrase (e.g., "In 283 AC"), or empty.
    pub born: String,

    /// Death date phrase, or empty for living characters.
    pub died: String,

    /// Titles held, in API order.
    pub titles: Vec<String>,

    /// Known aliases, in API order.
    pub aliases: Vec<String>,
}

impl Character {
    /// Whether the character is alive.
    ///
    /// Derived, not stored: the absence of a death date means alive.
    pub fn alive(&self) -> bool {
        self.died.is_empty()
    }

    /// Collapses the full record into the summary used by member lines.
    pub fn summary(&self) -> CharacterSummary {
        CharacterSummary::new(self.name.clone(), &self.died)
    }
}

/// The slice of a character shown on a sworn-member line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSummary {
    /// Character name.
    pub name: String,

    /// Whether the character is alive (no death date present).
    pub alive: bool,

    /// Death description ("Died in {date}"), present only for the dead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_info: Option<String>,
}

impl CharacterSummary {
    /// Builds a summary from a name and the raw death-date field.
    ///
    /// An empty `died` yields an alive summary with no death
    /// description; anything else yields a deceased summary embedding
    /// the date.
    pub fn new<S: Into<String>>(name: S, died: &str) -> Self {
        Self {
            name: name.into(),
            alive: died.is_empty(),
            death_info: if died.is_empty() {
                None
            } else {
                Some(format!("Died in {died}"))
            },
        }
    }
}

// ============================================================================
// House
// ============================================================================

/// A house record, as shown on the listing view.
///
/// Sworn members are reference URLs, not embedded objects; each is
/// resolved by its own fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    /// House name.
    pub name: String,

    /// Member reference URLs, in API order.
    pub sworn_members: Vec<String>,
}

impl House {
    /// Parses the character ids out of the member reference URLs.
    ///
    /// References the API hands out are well-formed, so failures are
    /// per-entry: each element pairs the raw URL with the parse result.
    pub fn member_ids(&self) -> impl Iterator<Item = (&str, Option<CharacterId>)> {
        self.sworn_members
            .iter()
            .map(|url| (url.as_str(), CharacterId::from_url(url).ok()))
    }
}

// ============================================================================
// Page
// ============================================================================

/// 1-based selector for a fixed-size slice of the house collection.
///
/// Construction clamps to a minimum of 1, so a request for page zero
/// (or below, had the type allowed it) cannot be expressed. There is no
/// client-side upper bound; a page past the end of the collection comes
/// back from the API as an empty array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page(u32);

impl Page {
    /// Items per page, fixed by the application.
    pub const SIZE: u32 = 10;

    /// The first page.
    pub const FIRST: Page = Page(1);

    /// Creates a page selector, clamping to a minimum of 1.
    pub fn new(n: u32) -> Self {
        Self(n.max(1))
    }

    /// The 1-based page number.
    pub fn number(&self) -> u32 {
        self.0
    }

    /// The following page.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The preceding page, saturating at page 1.
    pub fn prev(&self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn character(died: &str) -> Character {
        Character {
            name: "Jon Snow".to_string(),
            gender: "Male".to_string(),
            culture: "Northmen".to_string(),
            born: "In 283 AC".to_string(),
            died: died.to_string(),
            titles: vec!["Lord Commander of the Night's Watch".to_string()],
            aliases: vec!["Lord Snow".to_string()],
        }
    }

    #[test]
    fn test_character_without_death_date_is_alive() {
        let c = character("");
        assert!(c.alive());
        assert_eq!(c.summary().death_info, None);
    }

    #[test]
    fn test_character_with_death_date_is_dead() {
        let c = character("In 299 AC, at Castle Black");
        assert!(!c.alive());
        let summary = c.summary();
        assert!(!summary.alive);
        assert_eq!(
            summary.death_info.as_deref(),
            Some("Died in In 299 AC, at Castle Black")
        );
    }

    #[test]
    fn test_summary_embeds_death_date() {
        let s = CharacterSummary::new("Eddard Stark", "In 299 AC");
        assert!(!s.alive);
        assert_eq!(s.death_info.as_deref(), Some("Died in In 299 AC"));
    }

    #[test]
    fn test_summary_alive_has_no_death_info() {
        let s = CharacterSummary::new("Arya Stark", "");
        assert!(s.alive);
        assert!(s.death_info.is_none());
    }

    #[test]
    fn test_house_member_ids() {
        let house = House {
            name: "House Stark of Winterfell".to_string(),
            sworn_members: vec![
                "https://anapioficeandfire.com/api/characters/2".to_string(),
                "https://anapioficeandfire.com/api/characters/broken".to_string(),
            ],
        };
        let ids: Vec<_> = house.member_ids().collect();
        assert_eq!(ids[0].1, Some(CharacterId::new(2)));
        assert_eq!(ids[1].1, None);
    }

    #[test]
    fn test_page_clamps_to_one() {
        assert_eq!(Page::new(0).number(), 1);
        assert_eq!(Page::new(1).number(), 1);
        assert_eq!(Page::new(7).number(), 7);
    }

    #[test]
    fn test_page_prev_saturates() {
        assert_eq!(Page::FIRST.prev(), Page::FIRST);
        assert_eq!(Page::new(3).prev(), Page::new(2));
    }

    #[test]
    fn test_page_next() {
        assert_eq!(Page::FIRST.next(), Page::new(2));
    }

    #[test]
    fn test_page_default_is_first() {
        assert_eq!(Page::default(), Page::FIRST);
    }

    #[test]
    fn test_page_size_is_fixed() {
        assert_eq!(Page::SIZE, 10);
    }
}
