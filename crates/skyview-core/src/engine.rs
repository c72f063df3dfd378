//! The profile engine.
//!
//! [`ProfileEngine::process`] turns one member of one profile into a
//! [`ProfileReport`]. It is synchronous and deterministic: the same input,
//! enrichment and reference tables always serialize to the same bytes.

use std::sync::Arc;
use std::time::Duration;

use skyview_items::{assemble, bag_sizes, collections};
use skyview_stats::{
    ProgressionBonuses, aggregate, fairy_bonus, fairy_souls, kills, pet_bonus, pet_score_bonus,
    pet_summary, skill_bonus, skill_summary, slayer_bonus, slayer_summary,
};
use skyview_types::{MemberInfo, ProfileInput, ProfileReport, ReferenceData};
use tracing::info;

use crate::error::EngineError;
use crate::lookup::{Enrichment, LookupStore, enrich};

/// Computes reports against one set of reference tables.
#[derive(Debug, Clone)]
pub struct ProfileEngine {
    reference: Arc<ReferenceData>,
}

impl ProfileEngine {
    /// Create an engine over shared reference tables.
    pub const fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// The reference tables in use.
    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Fetch lookups, then process.
    ///
    /// Lookup failures never fail the call; see [`crate::lookup`].
    pub async fn process_with_lookups<S: LookupStore>(
        &self,
        input: &ProfileInput,
        store: &S,
        limit: Duration,
    ) -> Result<ProfileReport, EngineError> {
        let enrichment = enrich(store, input, limit).await;
        self.process(input, &enrichment)
    }

    /// Build the report for [`ProfileInput::uuid`] on [`ProfileInput::profile`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownMember`] if the player is not on the
    /// profile, or [`EngineError::Decode`] if one of its top-level inventory
    /// sections cannot be decoded.
    pub fn process(&self, input: &ProfileInput, enrichment: &Enrichment) -> Result<ProfileReport, EngineError> {
        let reference = self.reference();
        let profile = &input.profile;
        let Some(member) = input.member() else {
            return Err(EngineError::UnknownMember {
                uuid: input.uuid.clone(),
                profile_id: profile.profile_id.clone(),
            });
        };

        let collections = collections(&input.uuid, profile, &enrichment.display_names);
        let bag_sizes = bag_sizes(&collections, reference);
        let mut inventory = assemble(&input.uuid, member, &bag_sizes, reference)?;

        let skills = skill_summary(&member.experience, &input.achievements, reference);
        let slayers = slayer_summary(member, reference);
        let mut gaps = Vec::new();
        let pets = pet_summary(&member.pets, &enrichment.item_metadata, reference, &mut gaps);

        let bonuses = ProgressionBonuses {
            fairy: fairy_bonus(member.fairy_exchanges),
            skills: skill_bonus(&skills, reference),
            slayers: slayer_bonus(&slayers, reference),
            pet_score: pet_score_bonus(pets.pet_score, reference),
            pets: pet_bonus(&pets.pets),
        };
        let aggregated = aggregate(&mut inventory, &bonuses, &member.collection, reference);

        let members = profile
            .members
            .iter()
            .filter(|(uuid, _)| **uuid != input.uuid)
            .map(|(uuid, other)| MemberInfo {
                uuid: uuid.clone(),
                display_name: enrichment.display_name(uuid),
                last_save: other.last_save,
            })
            .collect();

        info!(
            uuid = %input.uuid,
            profile_id = %profile.profile_id,
            items = inventory.items.len(),
            pets = pets.pets.len(),
            average_level = skills.average_level,
            warnings = inventory.warnings.len(),
            gaps = gaps.len(),
            "profile processed"
        );

        Ok(ProfileReport {
            uuid: input.uuid.clone(),
            display_name: enrichment.display_name(&input.uuid),
            profile_id: profile.profile_id.clone(),
            cute_name: profile.cute_name.clone(),
            members,

            items: inventory.items,
            armor: inventory.armor,
            wardrobe: inventory.wardrobe,
            weapons: inventory.weapons,
            rods: inventory.rods,
            talismans: inventory.talismans,
            highest_rarity_sword: inventory.highest_rarity_sword,
            highest_rarity_bow: inventory.highest_rarity_bow,
            highest_rarity_rod: inventory.highest_rarity_rod,
            armor_set: inventory.armor_set,
            no_inventory: inventory.no_inventory,
            bag_sizes,

            stats: aggregated.stats,
            base_stats: aggregated.base_stats,
            fairy_bonus: bonuses.fairy,
            skill_bonus: bonuses.skills,
            slayer_bonus: bonuses.slayers,
            pet_score_bonus: bonuses.pet_score,
            pet_bonus: bonuses.pets,
            weapon_stats: aggregated.weapon_stats,

            skills,
            slayers,
            pets,
            collections,
            fairy_souls: fairy_souls(member.fairy_souls_collected, reference.max_fairy_souls),

            purse: member.coin_purse,
            bank: profile.banking.map(|banking| banking.balance),
            kills: kills::kills(&member.stats, reference),
            deaths: kills::deaths(&member.stats, reference),
            fishing: kills::fishing(&member.stats),
            current_area: member.current_area.clone(),
            current_area_name: member
                .current_area
                .as_ref()
                .and_then(|area| reference.area_names.get(area))
                .cloned(),
            wardrobe_equipped_slot: member.wardrobe_equipped_slot,
            last_save: member.last_save,
            first_join: member.first_join,

            warnings: inventory.warnings,
            gaps,
        })
    }
}
