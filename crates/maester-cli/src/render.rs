//! Plain-text rendering for the directory views.
//!
//! Every function here builds a `String` from already-fetched data, so
//! the view layer can be tested without a network. Wording follows the
//! original directory: "This house has no sworn members", "No houses
//! available on this page.", "Member data not found.".

use std::collections::HashMap;

use maester_core::{Character, CharacterId, CharacterSummary, House, Page, Result};

/// Resolved sworn members, keyed by their reference URL.
///
/// A member whose fetch failed keeps its error so the line can render a
/// fallback instead of aborting the listing.
pub type MemberLookup = HashMap<String, Result<CharacterSummary>>;

/// Renders a full houses page.
pub fn houses_page(page: Page, houses: &[House], members: &MemberLookup) -> String {
    if houses.is_empty() {
        return "No houses available on this page.\n".to_string();
    }
    let mut out = format!("Houses (page {page})\n");
    for house in houses {
        out.push('\n');
        out.push_str(&house_block(house, members));
    }
    out
}

/// Renders one house and its member lines.
pub fn house_block(house: &House, members: &MemberLookup) -> String {
    let mut out = format!("{}\n", house.name);
    if house.sworn_members.is_empty() {
        out.push_str("  This house has no sworn members\n");
        return out;
    }
    for url in &house.sworn_members {
        out.push_str(&member_line(url, members.get(url)));
        out.push('\n');
    }
    out
}

/// Renders one sworn-member line.
///
/// The character id parsed from the reference URL is appended so the
/// line cross-links to `maester character <id>`.
pub fn member_line(url: &str, outcome: Option<&Result<CharacterSummary>>) -> String {
    let Some(Ok(member)) = outcome else {
        return "  - Member data not found.".to_string();
    };
    let link = CharacterId::from_url(url)
        .map(|id| format!(" [id {id}]"))
        .unwrap_or_default();
    if member.alive {
        format!("  - {} (Alive){link}", member.name)
    } else {
        format!(
            "  - {} (Deceased: {}){link}",
            member.name,
            member.death_info.as_deref().unwrap_or("Died")
        )
    }
}

/// Renders the character detail view.
pub fn character_detail(character: &Character) -> String {
    let mut out = format!("{}\n\n", character.name);
    out.push_str(&format!("Gender: {}\n", character.gender));
    out.push_str(&format!("Culture: {}\n", character.culture));
    out.push_str(&format!("Born: {}\n", character.born));
    if character.alive() {
        out.push_str("Status: Alive\n");
    } else {
        out.push_str(&format!("Died: {}\n", character.died));
    }
    push_list(&mut out, "Titles", &character.titles);
    push_list(&mut out, "Aliases", &character.aliases);
    out
}

// The API pads unknown values with empty strings; those entries are
// dropped rather than rendered as blank bullets.
fn push_list(out: &mut String, label: &str, items: &[String]) {
    out.push_str(&format!("\n{label}:\n"));
    let mut empty = true;
    for item in items.iter().filter(|s| !s.is_empty()) {
        out.push_str(&format!("  - {item}\n"));
        empty = false;
    }
    if empty {
        out.push_str("  (none)\n");
    }
}
