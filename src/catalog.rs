//! Animation ID catalog data model
//!
//! A catalog is five ordered lists of named animation IDs, one per role.
//! Order only matters for display; ids are not checked for uniqueness or
//! ordering, they are whatever the animation controller expects.

use serde::{Deserialize, Serialize};

/// One animation identifier: a display label and the integer the
/// animation controller switches on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamedIdentifier {
    pub name: String,
    pub id: i32,
}

impl NamedIdentifier {
    pub fn new(name: impl Into<String>, id: i32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// Which list of the catalog an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    MeleeMovement,
    MeleeAttack,
    ShooterMovement,
    ShooterAttack,
    Defence,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::MeleeMovement,
        Role::MeleeAttack,
        Role::ShooterMovement,
        Role::ShooterAttack,
        Role::Defence,
    ];

    /// Field name of this role's array in the JSON file
    pub fn json_key(&self) -> &'static str {
        match self {
            Role::MeleeMovement => "meleeMovementIds",
            Role::MeleeAttack => "meleeAttackIds",
            Role::ShooterMovement => "shooterMovementIds",
            Role::ShooterAttack => "shooterAttackIds",
            Role::Defence => "defenceIds",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::MeleeMovement => "Melee Movement",
            Role::MeleeAttack => "Melee Attack",
            Role::ShooterMovement => "Shooter Movement",
            Role::ShooterAttack => "Shooter Attack",
            Role::Defence => "Defence",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Role::MeleeMovement | Role::MeleeAttack => Category::Melee,
            Role::ShooterMovement | Role::ShooterAttack => Category::Shooter,
            Role::Defence => Category::Defence,
        }
    }

    /// Look up a role by category and id kind
    ///
    /// Defence has no movement/attack split, so both kinds map to it.
    pub fn from_parts(category: Category, kind: IdKind) -> Role {
        match (category, kind) {
            (Category::Melee, IdKind::Movement) => Role::MeleeMovement,
            (Category::Melee, IdKind::Attack) => Role::MeleeAttack,
            (Category::Shooter, IdKind::Movement) => Role::ShooterMovement,
            (Category::Shooter, IdKind::Attack) => Role::ShooterAttack,
            (Category::Defence, _) => Role::Defence,
        }
    }
}

/// Kind of identifier within a combat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Movement,
    Attack,
}

impl IdKind {
    pub fn label(&self) -> &'static str {
        match self {
            IdKind::Movement => "Movement IDs",
            IdKind::Attack => "Attack IDs",
        }
    }
}

/// Combat category the editor window switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Melee,
    Shooter,
    Defence,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Melee, Category::Shooter, Category::Defence];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Melee => "Melee",
            Category::Shooter => "Shooter",
            Category::Defence => "Defence",
        }
    }

    /// Roles shown for this category, in column order
    pub fn roles(&self) -> &'static [Role] {
        match self {
            Category::Melee => &[Role::MeleeMovement, Role::MeleeAttack],
            Category::Shooter => &[Role::ShooterMovement, Role::ShooterAttack],
            Category::Defence => &[Role::Defence],
        }
    }

    pub fn from_index(i: usize) -> Option<Category> {
        Category::ALL.get(i).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The full set of animation IDs edited by the tool
///
/// Field order matches the on-disk layout. Every list is always written,
/// even when empty, and every list is required when reading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdentifierCatalog {
    pub melee_movement_ids: Vec<NamedIdentifier>,
    pub shooter_movement_ids: Vec<NamedIdentifier>,
    pub melee_attack_ids: Vec<NamedIdentifier>,
    pub shooter_attack_ids: Vec<NamedIdentifier>,
    pub defence_ids: Vec<NamedIdentifier>,
}

impl IdentifierCatalog {
    /// Create a catalog with all five lists empty
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self, role: Role) -> &[NamedIdentifier] {
        match role {
            Role::MeleeMovement => &self.melee_movement_ids,
            Role::MeleeAttack => &self.melee_attack_ids,
            Role::ShooterMovement => &self.shooter_movement_ids,
            Role::ShooterAttack => &self.shooter_attack_ids,
            Role::Defence => &self.defence_ids,
        }
    }

    pub fn ids_mut(&mut self, role: Role) -> &mut Vec<NamedIdentifier> {
        match role {
            Role::MeleeMovement => &mut self.melee_movement_ids,
            Role::MeleeAttack => &mut self.melee_attack_ids,
            Role::ShooterMovement => &mut self.shooter_movement_ids,
            Role::ShooterAttack => &mut self.shooter_attack_ids,
            Role::Defence => &mut self.defence_ids,
        }
    }

    /// Replace one role's list wholesale
    pub fn set_ids(&mut self, role: Role, ids: Vec<NamedIdentifier>) {
        *self.ids_mut(role) = ids;
    }

    /// Iterate over (role, list) pairs in `Role::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &[NamedIdentifier])> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.ids(role)))
    }

    /// Total number of identifiers across all roles
    pub fn len(&self) -> usize {
        Role::ALL.iter().map(|&role| self.ids(role).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_catalog_is_empty() {
        let catalog = IdentifierCatalog::new();
        assert!(catalog.is_empty());
        for (_, ids) in catalog.iter() {
            assert!(ids.is_empty());
        }
    }

    #[test]
    fn test_roles_are_independent() {
        let mut catalog = IdentifierCatalog::new();
        catalog.ids_mut(Role::MeleeMovement).push(NamedIdentifier::new("Sword", 2));

        assert_eq!(catalog.ids(Role::MeleeMovement).len(), 1);
        assert!(catalog.ids(Role::MeleeAttack).is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_empty_lists_are_serialized() {
        let json = serde_json::to_value(IdentifierCatalog::new()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        for role in Role::ALL {
            assert_eq!(obj[role.json_key()], serde_json::json!([]));
        }
    }

    #[test]
    fn test_field_names_match_file_format() {
        let mut catalog = IdentifierCatalog::new();
        catalog.ids_mut(Role::ShooterAttack).push(NamedIdentifier::new("Bow", 4));

        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(
            json,
            r#"{"meleeMovementIds":[],"shooterMovementIds":[],"meleeAttackIds":[],"shooterAttackIds":[{"name":"Bow","id":4}],"defenceIds":[]}"#
        );
    }

    #[test]
    fn test_missing_list_is_rejected() {
        let json = r#"{"meleeMovementIds":[],"shooterMovementIds":[],"meleeAttackIds":[],"shooterAttackIds":[]}"#;
        assert!(serde_json::from_str::<IdentifierCatalog>(json).is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let json = r#"{"meleeMovementIds":[],"shooterMovementIds":[],"meleeAttackIds":[],"shooterAttackIds":[],"defenceIds":[],"version":2}"#;
        assert!(serde_json::from_str::<IdentifierCatalog>(json).is_err());
    }

    #[test]
    fn test_duplicate_ids_are_accepted() {
        let json = r#"{"meleeMovementIds":[{"name":"A","id":3},{"name":"B","id":3},{"name":"C","id":1}],"shooterMovementIds":[],"meleeAttackIds":[],"shooterAttackIds":[],"defenceIds":[]}"#;
        let catalog: IdentifierCatalog = serde_json::from_str(json).unwrap();
        let ids: Vec<i32> = catalog.ids(Role::MeleeMovement).iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![3, 3, 1]);
    }

    #[test]
    fn test_role_lookup() {
        assert_eq!(Role::from_parts(Category::Melee, IdKind::Attack), Role::MeleeAttack);
        assert_eq!(Role::from_parts(Category::Shooter, IdKind::Movement), Role::ShooterMovement);
        assert_eq!(Role::from_parts(Category::Defence, IdKind::Attack), Role::Defence);
        for role in Role::ALL {
            assert!(role.category().roles().contains(&role));
        }
    }

    #[test]
    fn test_category_index_round_trip() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(3), None);
    }
}
