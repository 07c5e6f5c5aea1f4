//! The single level: one player, one target

use rand::Rng;

use super::entity::{Behavior, Entity, EntityKind};
use super::player;
use crate::engine::SpriteLoader;

/// Entities of the running level, in update/render order
#[derive(Debug, Clone, Default)]
pub struct Level {
    entities: Vec<Entity>,
}

impl Level {
    /// Allocate the level once, when it joins the game
    pub fn alloc<R: Rng>(loader: &mut dyn SpriteLoader, rng: &mut R) -> Self {
        let mut level = Self::default();
        player::spawn(&mut level, loader, rng);
        level.add_entity(EntityKind::Target, rng);
        level
    }

    /// Add an entity of `kind` and run its start hook
    ///
    /// Returns `None` if the level already holds an entity of that kind.
    pub fn add_entity<R: Rng>(&mut self, kind: EntityKind, rng: &mut R) -> Option<&mut Entity> {
        if self.find(kind).is_some() {
            log::warn!("Level already has a {kind:?}, not adding another");
            return None;
        }

        let mut entity = Entity::new(Behavior::for_kind(kind));
        entity.start(rng);
        self.entities.push(entity);
        self.entities.last_mut()
    }

    pub fn find(&self, kind: EntityKind) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind() == kind)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_SPAWN;
    use crate::engine::SpriteLibrary;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_alloc_spawns_player_then_target() {
        let mut rng = Pcg32::seed_from_u64(5);
        let level = Level::alloc(&mut SpriteLibrary::with_player_sprite(), &mut rng);

        let kinds: Vec<_> = level.entities().iter().map(Entity::kind).collect();
        assert_eq!(kinds, vec![EntityKind::Player, EntityKind::Target]);
        assert_eq!(
            level.find(EntityKind::Player).map(Entity::pos),
            Some(PLAYER_SPAWN)
        );
        assert!(
            level
                .find(EntityKind::Target)
                .and_then(Entity::collider)
                .is_some()
        );
    }

    #[test]
    fn test_second_target_is_refused() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut level = Level::alloc(&mut SpriteLibrary::with_player_sprite(), &mut rng);

        assert!(level.add_entity(EntityKind::Target, &mut rng).is_none());
        assert_eq!(level.entities().len(), 2);
    }
}
