//! Player behavior
//!
//! The player is a 10×10 sprite steered with the d-pad. Back ends the session.

use glam::IVec2;
use rand::Rng;

use super::entity::{Behavior, Entity, EntityKind};
use super::level::Level;
use super::state::GameState;
use crate::consts::*;
use crate::engine::{Canvas, GameKey, InputState, SessionControl, Sprite, SpriteLoader};

/// Lowest position the player center may take (half footprint from the edge)
pub const PLAYFIELD_MIN: IVec2 = IVec2::splat(PLAYER_HALF_EXTENT);
/// Highest position the player center may take
pub const PLAYFIELD_MAX: IVec2 = IVec2::new(
    SCREEN_WIDTH - PLAYER_HALF_EXTENT,
    SCREEN_HEIGHT - PLAYER_HALF_EXTENT,
);

/// Per-entity player context
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Missing when the host could not provide the sprite
    pub sprite: Option<Sprite>,
}

/// Add the player to `level` at the spawn point and load its sprite
///
/// Returns false if the level already has a player.
pub fn spawn<R: Rng>(level: &mut Level, loader: &mut dyn SpriteLoader, rng: &mut R) -> bool {
    let Some(player) = level.add_entity(EntityKind::Player, rng) else {
        return false;
    };

    player.set_pos(PLAYER_SPAWN);
    // Box is centered on the player position
    player.add_rect_collider(PLAYER_SIZE, PLAYER_SIZE);

    let sprite = loader.load_sprite(PLAYER_SPRITE);
    match &sprite {
        Some(sprite) => log::debug!("Player sprite loaded as #{}", sprite.id()),
        None => log::warn!("Player sprite {PLAYER_SPRITE:?} not found, drawing score only"),
    }
    if let Behavior::Player(state) = player.behavior_mut() {
        state.sprite = sprite;
    }
    true
}

/// Clamp a player position so the whole footprint stays on screen
#[inline]
pub fn clamp_to_playfield(pos: IVec2) -> IVec2 {
    pos.clamp(PLAYFIELD_MIN, PLAYFIELD_MAX)
}

/// Move by held directions, then handle Back
pub fn update(player: &mut Entity, input: InputState, session: &mut dyn SessionControl) {
    let mut pos = player.pos();

    if input.is_held(GameKey::Up) {
        pos.y -= PLAYER_STEP;
    }
    if input.is_held(GameKey::Down) {
        pos.y += PLAYER_STEP;
    }
    if input.is_held(GameKey::Left) {
        pos.x -= PLAYER_STEP;
    }
    if input.is_held(GameKey::Right) {
        pos.x += PLAYER_STEP;
    }

    player.set_pos(clamp_to_playfield(pos));

    if input.is_pressed(GameKey::Back) {
        log::debug!("Back pressed, requesting stop");
        session.request_stop();
    }
}

/// Draw the sprite centered on the player, then the score overlay
pub fn render(player: &Entity, state: &PlayerState, canvas: &mut dyn Canvas, game: &GameState) {
    let pos = player.pos();

    if let Some(sprite) = &state.sprite {
        canvas.draw_sprite(
            sprite,
            pos.x - PLAYER_HALF_EXTENT,
            pos.y - PLAYER_HALF_EXTENT,
        );
    }

    canvas.draw_text(
        SCORE_TEXT_POS.x,
        SCORE_TEXT_POS.y,
        &format!("Score: {}", game.score()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DrawCall, RecordingCanvas, SpriteLibrary, StopFlag};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn spawned(loader: &mut dyn SpriteLoader) -> Level {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut level = Level::default();
        assert!(spawn(&mut level, loader, &mut rng));
        level
    }

    fn player_mut(level: &mut Level) -> &mut Entity {
        level
            .entities_mut()
            .iter_mut()
            .find(|e| e.kind() == EntityKind::Player)
            .unwrap()
    }

    #[test]
    fn test_spawn_sets_position_collider_and_sprite() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let player = player_mut(&mut level);

        assert_eq!(player.pos(), IVec2::new(64, 32));
        assert_eq!(
            player.collider(),
            Some(&crate::engine::Collider::Rect {
                width: 10,
                height: 10,
            })
        );
        match player.behavior() {
            Behavior::Player(state) => {
                assert_eq!(
                    state.sprite.as_ref().map(Sprite::name),
                    Some(PLAYER_SPRITE)
                )
            }
            other => panic!("unexpected behavior {other:?}"),
        }
    }

    #[test]
    fn test_spawn_twice_is_refused() {
        let mut loader = SpriteLibrary::with_player_sprite();
        let mut level = spawned(&mut loader);
        let mut rng = Pcg32::seed_from_u64(2);
        assert!(!spawn(&mut level, &mut loader, &mut rng));
        assert_eq!(level.entities().len(), 1);
    }

    #[test]
    fn test_up_for_ten_frames() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let player = player_mut(&mut level);
        let mut stop = StopFlag::default();

        for _ in 0..10 {
            update(player, InputState::holding(&[GameKey::Up]), &mut stop);
        }
        assert_eq!(player.pos(), IVec2::new(64, 12));
        assert!(!stop.stop_requested());
    }

    #[test]
    fn test_diagonal_is_additive() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let player = player_mut(&mut level);
        let mut stop = StopFlag::default();

        update(
            player,
            InputState::holding(&[GameKey::Down, GameKey::Left]),
            &mut stop,
        );
        assert_eq!(player.pos(), IVec2::new(62, 34));
    }

    #[test]
    fn test_clamp_pins_to_edges() {
        assert_eq!(clamp_to_playfield(IVec2::new(-10, 200)), IVec2::new(5, 59));
        assert_eq!(clamp_to_playfield(IVec2::new(124, 4)), IVec2::new(123, 5));
        assert_eq!(clamp_to_playfield(IVec2::new(64, 32)), IVec2::new(64, 32));
    }

    #[test]
    fn test_back_requests_stop_whatever_else_is_held() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let player = player_mut(&mut level);
        let mut stop = StopFlag::default();

        let input = InputState::holding(&[GameKey::Up, GameKey::Right, GameKey::Ok])
            .with_pressed(GameKey::Back);
        update(player, input, &mut stop);
        assert!(stop.stop_requested());
        // Movement still applies on the stopping frame
        assert_eq!(player.pos(), IVec2::new(66, 30));
    }

    #[test]
    fn test_held_back_without_press_does_not_stop() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let player = player_mut(&mut level);
        let mut stop = StopFlag::default();

        update(player, InputState::holding(&[GameKey::Back]), &mut stop);
        assert!(!stop.stop_requested());
    }

    #[test]
    fn test_render_draws_centered_sprite_and_score() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let mut game = GameState::new();
        game.award_point();
        game.award_point();

        let mut canvas = RecordingCanvas::default();
        let player = player_mut(&mut level);
        player.render(&mut canvas, &game);

        assert_eq!(
            canvas.calls,
            vec![
                DrawCall::Sprite {
                    name: PLAYER_SPRITE.to_string(),
                    x: 59,
                    y: 27,
                },
                DrawCall::Text {
                    x: 0,
                    y: 7,
                    text: "Score: 2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_sprite_still_draws_score() {
        let mut level = spawned(&mut SpriteLibrary::default());
        let mut canvas = RecordingCanvas::default();
        player_mut(&mut level).render(&mut canvas, &GameState::new());

        assert_eq!(
            canvas.calls,
            vec![DrawCall::Text {
                x: 0,
                y: 7,
                text: "Score: 0".to_string(),
            }]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
        let game = GameState::new();
        let player = player_mut(&mut level);
        let before = player.pos();

        let mut first = RecordingCanvas::default();
        let mut second = RecordingCanvas::default();
        player.render(&mut first, &game);
        player.render(&mut second, &game);

        assert_eq!(first.calls, second.calls);
        assert_eq!(player.pos(), before);
        assert_eq!(game.score(), 0);
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_playfield(masks in proptest::collection::vec(0u8..16, 0..300)) {
            let mut level = spawned(&mut SpriteLibrary::with_player_sprite());
            let player = player_mut(&mut level);
            let mut stop = StopFlag::default();

            for held in masks {
                update(player, InputState { held, pressed: 0 }, &mut stop);
                let pos = player.pos();
                prop_assert!((5..=123).contains(&pos.x));
                prop_assert!((5..=59).contains(&pos.y));
            }
            prop_assert!(!stop.stop_requested());
        }
    }
}
