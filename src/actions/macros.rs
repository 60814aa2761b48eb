//! Macro planning: semantic game commands compiled to gesture chains
//! against the current detection list.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Hotkeys;
use crate::input::{Key, Point};
use crate::perception::{Detection, ObjectClass};

use super::chain::ActionChain;

/// A semantic game command realized as an ordered gesture sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroCommand {
    UngarrisonTownCenter,
    BuildHouse { at: Point },
    BuildMill { at: Point },
    QueueVillager,
}

impl MacroCommand {
    /// The detection class this command needs on screen to be actionable.
    pub fn required_class(&self) -> ObjectClass {
        match self {
            MacroCommand::UngarrisonTownCenter | MacroCommand::QueueVillager => {
                ObjectClass::TownCenter
            }
            MacroCommand::BuildHouse { .. } | MacroCommand::BuildMill { .. } => {
                ObjectClass::Villager
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MacroCommand::UngarrisonTownCenter => "ungarrison town center",
            MacroCommand::BuildHouse { .. } => "build house",
            MacroCommand::BuildMill { .. } => "build mill",
            MacroCommand::QueueVillager => "queue villager",
        }
    }
}

/// Compile a macro into its gesture chain, or `None` when no object of the
/// required class is on screen (the caller logs and moves on).
pub fn plan(
    command: MacroCommand,
    detections: &[Detection],
    hotkeys: &Hotkeys,
    rng: &mut impl Rng,
) -> Option<ActionChain> {
    let required = command.required_class();
    let candidates: Vec<&Detection> =
        detections.iter().filter(|d| d.class == required).collect();
    let anchor = select_target(&candidates, rng)?.bounds.center();

    let mut chain = ActionChain::new();
    match command {
        MacroCommand::UngarrisonTownCenter => {
            chain.add_click(anchor);
            chain.add_key(Key::Char(hotkeys.ungarrison));
        }
        MacroCommand::BuildHouse { at } => {
            chain.add_click(anchor);
            chain.add_key(Key::Char(hotkeys.build_menu));
            chain.add_key(Key::Char(hotkeys.house));
            chain.add_click(at);
        }
        MacroCommand::BuildMill { at } => {
            chain.add_click(anchor);
            chain.add_key(Key::Char(hotkeys.build_menu));
            chain.add_key(Key::Char(hotkeys.mill));
            chain.add_click(at);
        }
        MacroCommand::QueueVillager => {
            chain.add_click(anchor);
            chain.add_key(Key::Char(hotkeys.queue_villager));
        }
    }
    Some(chain)
}

/// Pick among same-class candidates uniformly at random.
///
/// This is a stand-in for a real targeting heuristic (nearest-to-cursor,
/// least-recently-used, ...); keep replacements confined to this function.
fn select_target<'a>(candidates: &[&'a Detection], rng: &mut impl Rng) -> Option<&'a Detection> {
    candidates.choose(rng).copied()
}
