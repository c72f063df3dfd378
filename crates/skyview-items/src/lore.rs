//! Lore tokenizer and stat rule table.
//!
//! Lore is free text. Two kinds of line matter to classification: stat
//! lines (`<Stat Name>: <number>`) anywhere in the lore, and the final
//! rarity line (`<TIER> <TYPE>`). Both are parsed here without touching
//! the item record so they can be tested alone.

use skyview_nbt::strip_formatting;
use skyview_types::{ItemType, Rarity, StatName};

/// Lore stat labels in match order.
pub const STAT_RULES: [(&str, StatName); 12] = [
    ("Damage", StatName::Damage),
    ("Health", StatName::Health),
    ("Defense", StatName::Defense),
    ("Strength", StatName::Strength),
    ("Speed", StatName::Speed),
    ("Crit Chance", StatName::CritChance),
    ("Crit Damage", StatName::CritDamage),
    ("Bonus Attack Speed", StatName::BonusAttackSpeed),
    ("Intelligence", StatName::Intelligence),
    ("Sea Creature Chance", StatName::SeaCreatureChance),
    ("Magic Find", StatName::MagicFind),
    ("Pet Luck", StatName::PetLuck),
];

// ---------------------------------------------------------------------------
// Stat lines
// ---------------------------------------------------------------------------

/// What a single colour-stripped lore line says about stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatLine {
    /// No `name: value` shape, or a name outside the rule table.
    Ignored,
    /// A known stat with its value.
    Stat(StatName, f64),
    /// A known stat whose value is not a number.
    Unparseable(StatName),
}

/// Split `line` at its first colon and match the label against
/// [`STAT_RULES`].
pub fn parse_stat_line(line: &str) -> StatLine {
    let Some((label, rest)) = line.split_once(':') else {
        return StatLine::Ignored;
    };
    let Some(stat) = STAT_RULES
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, stat)| *stat)
    else {
        return StatLine::Ignored;
    };
    leading_number(rest).map_or(StatLine::Unparseable(stat), |value| {
        StatLine::Stat(stat, value)
    })
}

/// The leading signed decimal of `text`, commas removed.
///
/// `" +1,250 (+20)"` reads as `1250`; `" 15%"` reads as `15`.
pub fn leading_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|ch| *ch != ',').collect();
    let end = cleaned
        .char_indices()
        .find(|&(index, ch)| {
            let sign = index == 0 && (ch == '+' || ch == '-');
            !(sign || ch.is_ascii_digit() || ch == '.')
        })
        .map_or(cleaned.len(), |(index, _)| index);
    cleaned.get(..end)?.parse::<f64>().ok().filter(|value| value.is_finite())
}

// ---------------------------------------------------------------------------
// Rarity line
// ---------------------------------------------------------------------------

/// The parsed last lore line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityLine {
    /// Rarity from the colour code, falling back to the word.
    pub rarity: Option<Rarity>,
    /// The tier word as printed.
    pub word: String,
    /// Whether the word and the colour name different rarities.
    pub localized: bool,
    /// The type label, lowercased, if one followed the tier word.
    pub type_label: Option<String>,
}

impl RarityLine {
    /// Resolve the type label to a known category.
    ///
    /// `hatccessory` counts as an accessory; `dungeon <type>` resolves to
    /// `<type>` and reports `true` as the second value.
    pub fn item_type(&self) -> (Option<ItemType>, bool) {
        let Some(label) = self.type_label.as_deref() else {
            return (None, false);
        };
        let (label, dungeon) = label
            .strip_prefix("dungeon")
            .map_or((label, false), |rest| (rest.trim(), true));
        let label = if label == "hatccessory" { "accessory" } else { label };
        (ItemType::from_label(label), dungeon)
    }
}

/// Parse the rarity line from its raw (formatted) form.
///
/// The colour code right after the first `§` decides the rarity. Upgraded
/// items wrap the line in an obfuscated `a ` ... ` a` marker, and some tiers
/// are prefixed with `VERY `; both are removed before splitting.
pub fn parse_rarity_line(raw: &str) -> RarityLine {
    let color = raw
        .strip_prefix('\u{a7}')
        .and_then(|rest| rest.chars().next());
    let mut text = strip_formatting(raw);

    if let Some(inner) = text.strip_prefix("a ") {
        let inner = inner.strip_suffix(" a").unwrap_or(inner);
        text = inner.to_owned();
    }
    if let Some(rest) = text.strip_prefix("VERY ") {
        text = rest.to_owned();
    }

    let (word, tail) = text
        .split_once(' ')
        .map_or((text.as_str(), None), |(word, tail)| (word, Some(tail)));

    let word_rarity = Rarity::from_word(word);
    let color_rarity = color.and_then(Rarity::from_color_code);
    let rarity = color_rarity.or(word_rarity);

    RarityLine {
        rarity,
        word: word.to_owned(),
        localized: color_rarity.is_some() && word_rarity != color_rarity,
        type_label: tail
            .map(|tail| tail.trim().to_lowercase())
            .filter(|tail| !tail.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_lines_take_the_leading_number() {
        assert_eq!(
            parse_stat_line("Damage: +120"),
            StatLine::Stat(StatName::Damage, 120.0)
        );
        assert_eq!(
            parse_stat_line("Health: +1,250 HP"),
            StatLine::Stat(StatName::Health, 1250.0)
        );
        assert_eq!(
            parse_stat_line("Crit Chance: +15% (+5%)"),
            StatLine::Stat(StatName::CritChance, 15.0)
        );
        assert_eq!(
            parse_stat_line("Speed: -5"),
            StatLine::Stat(StatName::Speed, -5.0)
        );
    }

    #[test]
    fn unknown_labels_are_ignored() {
        assert_eq!(parse_stat_line("Mining Speed: +50"), StatLine::Ignored);
        assert_eq!(parse_stat_line("Gear Score: 400"), StatLine::Ignored);
        assert_eq!(parse_stat_line("no colon here"), StatLine::Ignored);
        // Labels match exactly; leading text is not trimmed away.
        assert_eq!(parse_stat_line("Bonus Damage: +5"), StatLine::Ignored);
    }

    #[test]
    fn known_label_without_number_is_unparseable() {
        assert_eq!(
            parse_stat_line("Strength: lots"),
            StatLine::Unparseable(StatName::Strength)
        );
    }

    #[test]
    fn rarity_line_splits_tier_and_type() {
        let line = parse_rarity_line("\u{a7}6\u{a7}lLEGENDARY SWORD");
        assert_eq!(line.rarity, Some(Rarity::Legendary));
        assert!(!line.localized);
        assert_eq!(line.item_type(), (Some(ItemType::Sword), false));
    }

    #[test]
    fn multi_word_types_stay_whole() {
        let line = parse_rarity_line("\u{a7}9\u{a7}lRARE FISHING ROD");
        assert_eq!(line.item_type(), (Some(ItemType::FishingRod), false));
    }

    #[test]
    fn dungeon_and_hatccessory_labels() {
        let dungeon = parse_rarity_line("\u{a7}5\u{a7}lEPIC DUNGEON BOW");
        assert_eq!(dungeon.item_type(), (Some(ItemType::Bow), true));

        let hat = parse_rarity_line("\u{a7}a\u{a7}lUNCOMMON HATCCESSORY");
        assert_eq!(hat.item_type(), (Some(ItemType::Accessory), false));
    }

    #[test]
    fn recombobulated_marker_and_intensifier_are_removed() {
        let line = parse_rarity_line("\u{a7}d\u{a7}l\u{a7}ka\u{a7}r \u{a7}d\u{a7}lMYTHIC BOOTS \u{a7}d\u{a7}l\u{a7}ka");
        assert_eq!(line.rarity, Some(Rarity::Mythic));
        assert_eq!(line.item_type(), (Some(ItemType::Boots), false));

        let very = parse_rarity_line("\u{a7}c\u{a7}lVERY SPECIAL");
        assert_eq!(very.rarity, Some(Rarity::Special));
        assert_eq!(very.type_label, None);
    }

    #[test]
    fn colour_wins_over_word() {
        let line = parse_rarity_line("\u{a7}6\u{a7}lLEGENDARIO ESPADA");
        assert_eq!(line.rarity, Some(Rarity::Legendary));
        assert!(line.localized);
        assert_eq!(line.item_type(), (None, false));
    }

    #[test]
    fn uncoloured_line_falls_back_to_word() {
        let line = parse_rarity_line("RARE ACCESSORY");
        assert_eq!(line.rarity, Some(Rarity::Rare));
        assert!(!line.localized);
    }
}
