//! Default animation ID tables
//!
//! Used when no catalog file exists yet. Each role maps to a fixed,
//! ordered list; gaps in the ids (e.g. no 3 for shooter attacks) are
//! intentional and mirror the animator controller's parameter values.

use crate::catalog::{IdentifierCatalog, NamedIdentifier, Role};

/// Weapon/stance names shared across roles
pub mod names {
    pub const UNARMED: &str = "Unarmed";
    pub const SWORD: &str = "Sword";
    pub const SWORD_RANDOM: &str = "RandomSword";
    pub const TWO_HAND: &str = "2Hand";
    pub const SHOOTER: &str = "Shooter";
    pub const BOW: &str = "Bow";
    pub const DUAL_SWORD: &str = "DualSword";
    pub const SHIELD: &str = "Shield";
}

use names::*;

const MELEE_MOVEMENT: &[(&str, i32)] = &[(UNARMED, 1), (SWORD, 2), (TWO_HAND, 3)];

const MELEE_ATTACK: &[(&str, i32)] = &[(UNARMED, 0), (SWORD, 1), (SWORD_RANDOM, 2), (TWO_HAND, 3)];

const SHOOTER_MOVEMENT: &[(&str, i32)] = &[
    (UNARMED, 0),
    (SHOOTER, 1),
    (SWORD, 2),
    (TWO_HAND, 3),
    (BOW, 4),
];

const SHOOTER_ATTACK: &[(&str, i32)] = &[
    (UNARMED, 0),
    (SWORD, 1),
    (SWORD_RANDOM, 2),
    (TWO_HAND, 4),
    (DUAL_SWORD, 5),
];

const DEFENCE: &[(&str, i32)] = &[(UNARMED, 0), (SWORD, 1), (SHIELD, 3)];

/// The raw (name, id) table for a role
pub fn default_table(role: Role) -> &'static [(&'static str, i32)] {
    match role {
        Role::MeleeMovement => MELEE_MOVEMENT,
        Role::MeleeAttack => MELEE_ATTACK,
        Role::ShooterMovement => SHOOTER_MOVEMENT,
        Role::ShooterAttack => SHOOTER_ATTACK,
        Role::Defence => DEFENCE,
    }
}

/// Default identifiers for a single role
pub fn default_ids(role: Role) -> Vec<NamedIdentifier> {
    default_table(role)
        .iter()
        .map(|&(name, id)| NamedIdentifier::new(name, id))
        .collect()
}

/// Build the catalog a fresh project starts with
pub fn build_defaults() -> IdentifierCatalog {
    let mut catalog = IdentifierCatalog::new();
    for role in Role::ALL {
        catalog.set_ids(role, default_ids(role));
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(catalog: &IdentifierCatalog, role: Role) -> Vec<(&str, i32)> {
        catalog
            .ids(role)
            .iter()
            .map(|n| (n.name.as_str(), n.id))
            .collect()
    }

    #[test]
    fn test_defaults_are_deterministic() {
        assert_eq!(build_defaults(), build_defaults());
    }

    #[test]
    fn test_default_tables() {
        let catalog = build_defaults();

        assert_eq!(
            pairs(&catalog, Role::MeleeMovement),
            vec![("Unarmed", 1), ("Sword", 2), ("2Hand", 3)]
        );
        assert_eq!(
            pairs(&catalog, Role::MeleeAttack),
            vec![("Unarmed", 0), ("Sword", 1), ("RandomSword", 2), ("2Hand", 3)]
        );
        assert_eq!(
            pairs(&catalog, Role::ShooterMovement),
            vec![("Unarmed", 0), ("Shooter", 1), ("Sword", 2), ("2Hand", 3), ("Bow", 4)]
        );
        assert_eq!(
            pairs(&catalog, Role::ShooterAttack),
            vec![("Unarmed", 0), ("Sword", 1), ("RandomSword", 2), ("2Hand", 4), ("DualSword", 5)]
        );
        assert_eq!(
            pairs(&catalog, Role::Defence),
            vec![("Unarmed", 0), ("Sword", 1), ("Shield", 3)]
        );
    }

    #[test]
    fn test_shooter_attack_skips_three() {
        let ids: Vec<i32> = default_ids(Role::ShooterAttack).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 4, 5]);
    }

    #[test]
    fn test_melee_attack_differs_from_movement() {
        let catalog = build_defaults();
        assert_ne!(
            catalog.ids(Role::MeleeAttack),
            catalog.ids(Role::MeleeMovement)
        );
    }

    #[test]
    fn test_catalog_total() {
        assert_eq!(build_defaults().len(), 3 + 4 + 5 + 5 + 3);
    }
}
