//! Collision detection for the ball
//!
//! All tests run on the ball's square bounding box at the end of a step;
//! there is no swept test, so per-tick displacement must stay small
//! relative to entity sizes.
//!
//! [`resolve`] is pure: it reports the single highest-priority outcome and
//! leaves applying it to the tick.

use glam::IVec2;

use super::state::{Ball, BlockGrid, Paddle, Rect};
use crate::consts::NUM_ZONES;

/// Paddle bounce velocities, one row per zone (left to right).
/// Steep near the center, flatter and faster near the edges.
pub const REFLECTION_TABLE: [IVec2; NUM_ZONES] = [
    IVec2::new(-9, -4),
    IVec2::new(-7, -5),
    IVec2::new(-7, -4),
    IVec2::new(-6, -5),
    IVec2::new(-4, -7),
    IVec2::new(4, -7),
    IVec2::new(6, -5),
    IVec2::new(7, -4),
    IVec2::new(7, -5),
    IVec2::new(9, -4),
];

/// A paddle slice, always within `1..=NUM_ZONES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zone(u8);

impl Zone {
    /// Zone hit at `offset` pixels from the paddle's left edge
    pub fn from_offset(offset: i32, zone_width: i32) -> Self {
        let offset = offset.max(1);
        let zone = (offset / zone_width.max(1) + 1).clamp(1, NUM_ZONES as i32);
        Zone(zone as u8)
    }

    /// 1-based zone number
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Outgoing ball velocity for this zone
    pub fn velocity(self) -> IVec2 {
        REFLECTION_TABLE[usize::from(self.0) - 1]
    }
}

/// Which velocity component a bounce inverts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Diagonal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Heading {
    pub fn of(velocity: IVec2) -> Self {
        match (velocity.x < 0, velocity.y < 0) {
            (false, false) => Heading::DownRight,
            (true, false) => Heading::DownLeft,
            (false, true) => Heading::UpRight,
            (true, true) => Heading::UpLeft,
        }
    }
}

/// The single outcome applied in a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Ball box reached the bottom of the playfield
    FloorExit,
    /// Ball struck the paddle in the given zone
    Paddle { zone: Zone },
    /// Ball struck the block at `index`; `invert` is the axis to flip
    Block { index: usize, invert: Axis },
    /// Ball struck a side wall while moving toward it
    Wall,
    /// Ball struck the ceiling while moving up
    Ceiling,
}

/// Ball box bottom at or below the paddle top, horizontally overlapping it
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    let bbox = ball.bbox();
    let rect = paddle.rect();
    bbox.bottom() >= rect.top() && bbox.right() >= rect.left() && bbox.left() <= rect.right()
}

/// Zone of the paddle under the ball's center
pub fn paddle_zone(ball: &Ball, paddle: &Paddle) -> Zone {
    Zone::from_offset(ball.center.x - paddle.x(), paddle.zone_width())
}

/// Guess the struck face from the heading and the ball's vertical position.
///
/// Horizontal position is ignored, so glancing hits can pick the wrong face.
pub fn block_bounce_axis(ball: &Ball, block: &Rect) -> Axis {
    match Heading::of(ball.velocity) {
        Heading::DownRight | Heading::DownLeft => {
            if ball.center.y < block.top() {
                Axis::Y
            } else {
                Axis::X
            }
        }
        Heading::UpRight | Heading::UpLeft => {
            if ball.center.y < block.bottom() {
                Axis::X
            } else {
                Axis::Y
            }
        }
    }
}

fn hits_side_wall(bbox: &Rect, velocity: IVec2, screen_width: i32) -> bool {
    (bbox.left() <= 0 && velocity.x < 0) || (bbox.right() >= screen_width && velocity.x > 0)
}

fn hits_ceiling(bbox: &Rect, velocity: IVec2) -> bool {
    bbox.top() <= 0 && velocity.y < 0
}

/// Find the highest-priority collision for the ball's current position.
///
/// Order: floor exit, paddle, first overlapping block, side walls, ceiling.
pub fn resolve(ball: &Ball, paddle: &Paddle, blocks: &BlockGrid, screen: IVec2) -> Option<Collision> {
    let bbox = ball.bbox();

    if bbox.bottom() >= screen.y {
        return Some(Collision::FloorExit);
    }

    if paddle_overlap(ball, paddle) {
        return Some(Collision::Paddle {
            zone: paddle_zone(ball, paddle),
        });
    }

    if let Some(index) = blocks.first_overlap(&bbox) {
        let block = blocks.get(index)?;
        return Some(Collision::Block {
            index,
            invert: block_bounce_axis(ball, &block.rect()),
        });
    }

    if hits_side_wall(&bbox, ball.velocity, screen.x) {
        return Some(Collision::Wall);
    }

    if hits_ceiling(&bbox, ball.velocity) {
        return Some(Collision::Ceiling);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::layout::Layout;
    use crate::sim::state::Block;

    const SCREEN: IVec2 = IVec2::new(910, 720);

    fn paddle() -> Paddle {
        Paddle::from_layout(&Layout::default())
    }

    fn ball_at(x: i32, y: i32, vx: i32, vy: i32) -> Ball {
        let mut ball = Ball::new(IVec2::new(x, y), 30, IVec2::new(vx, vy));
        ball.launch();
        ball
    }

    #[test]
    fn test_zone_table_fidelity() {
        let zone_width = 150 / NUM_ZONES as i32;
        assert_eq!(Zone::from_offset(1, zone_width).velocity(), IVec2::new(-9, -4));
        assert_eq!(Zone::from_offset(75, zone_width).velocity(), IVec2::new(4, -7));
        assert_eq!(Zone::from_offset(149, zone_width).velocity(), IVec2::new(9, -4));
    }

    #[test]
    fn test_zone_clamps_out_of_range_offsets() {
        assert_eq!(Zone::from_offset(-40, 15).get(), 1);
        assert_eq!(Zone::from_offset(0, 15).get(), 1);
        assert_eq!(Zone::from_offset(150, 15).get(), 10);
        assert_eq!(Zone::from_offset(10_000, 15).get(), 10);
    }

    #[test]
    fn test_every_table_row_has_nonzero_components() {
        for v in REFLECTION_TABLE {
            assert_ne!(v.x, 0);
            assert!(v.y < 0, "paddle bounces must send the ball up");
        }
    }

    #[test]
    fn test_paddle_hit_end_to_end_scenario() {
        // Paddle left edge at 40, ball center 115 -> offset 75 -> zone 6
        let paddle = paddle();
        let ball = ball_at(115, 650 - 14, 2, 3);
        assert!(paddle_overlap(&ball, &paddle));
        let outcome = resolve(&ball, &paddle, &BlockGrid::default(), SCREEN);
        let Some(Collision::Paddle { zone }) = outcome else {
            panic!("expected paddle hit, got {outcome:?}");
        };
        assert_eq!(zone.get(), 6);
        assert_eq!(zone.velocity(), IVec2::new(4, -7));
    }

    #[test]
    fn test_paddle_miss_beside_paddle() {
        let paddle = paddle();
        // Box spans 200..230, paddle spans 40..190
        let ball = ball_at(215, 640, 2, 3);
        assert!(!paddle_overlap(&ball, &paddle));
        // Box spans 175..205, touches the paddle's right edge
        let ball = ball_at(190, 640, 2, 3);
        assert!(paddle_overlap(&ball, &paddle));
    }

    #[test]
    fn test_floor_beats_paddle() {
        let paddle = paddle();
        let ball = ball_at(115, 705, 2, 3);
        assert_eq!(
            resolve(&ball, &paddle, &BlockGrid::default(), SCREEN),
            Some(Collision::FloorExit)
        );
    }

    #[test]
    fn test_paddle_beats_block() {
        // Block sitting on the paddle's row, overlapped by the same box
        let blocks = BlockGrid::from_blocks(vec![Block::new(Rect::new(40, 630, 150, 20), 1)]);
        let ball = ball_at(115, 640, 2, 3);
        match resolve(&ball, &paddle(), &blocks, SCREEN) {
            Some(Collision::Paddle { zone }) => assert_eq!(zone.get(), 6),
            other => panic!("expected a paddle hit, got {other:?}"),
        }
    }

    #[test]
    fn test_first_block_in_order_wins() {
        let blocks = BlockGrid::from_blocks(vec![
            Block::new(Rect::new(100, 100, 80, 20), 1),
            Block::new(Rect::new(100, 125, 80, 20), 1),
        ]);
        // Box 115..145 vertically overlaps both blocks
        let ball = ball_at(140, 130, 2, 3);
        let outcome = resolve(&ball, &paddle(), &blocks, SCREEN);
        assert!(matches!(outcome, Some(Collision::Block { index: 0, .. })));
    }

    #[test]
    fn test_block_beats_wall() {
        let blocks = BlockGrid::from_blocks(vec![Block::new(Rect::new(0, 100, 80, 20), 1)]);
        let ball = ball_at(15, 120, -2, 3);
        let outcome = resolve(&ball, &paddle(), &blocks, SCREEN);
        assert!(matches!(outcome, Some(Collision::Block { .. })));
    }

    #[test]
    fn test_face_heuristic() {
        let block = Rect::new(100, 100, 80, 20);

        // Moving down, center above the top edge: top face
        let ball = ball_at(140, 90, 3, 4);
        assert_eq!(block_bounce_axis(&ball, &block), Axis::Y);
        // Moving down, center already below the top edge: side face
        let ball = ball_at(95, 110, 3, 4);
        assert_eq!(block_bounce_axis(&ball, &block), Axis::X);
        // Moving up, center above the bottom edge: side face
        let ball = ball_at(185, 110, -3, -4);
        assert_eq!(block_bounce_axis(&ball, &block), Axis::X);
        // Moving up, center below the bottom edge: bottom face
        let ball = ball_at(140, 130, -3, -4);
        assert_eq!(block_bounce_axis(&ball, &block), Axis::Y);
    }

    #[test]
    fn test_walls_only_when_moving_toward_them() {
        let paddle = paddle();
        let empty = BlockGrid::default();

        let ball = ball_at(15, 300, -2, 3);
        assert_eq!(resolve(&ball, &paddle, &empty, SCREEN), Some(Collision::Wall));
        let ball = ball_at(15, 300, 2, 3);
        assert_eq!(resolve(&ball, &paddle, &empty, SCREEN), None);

        let ball = ball_at(895, 300, 2, 3);
        assert_eq!(resolve(&ball, &paddle, &empty, SCREEN), Some(Collision::Wall));
    }

    #[test]
    fn test_wall_beats_ceiling_in_corner() {
        let ball = ball_at(15, 15, -2, -3);
        assert_eq!(
            resolve(&ball, &paddle(), &BlockGrid::default(), SCREEN),
            Some(Collision::Wall)
        );
        let ball = ball_at(300, 15, -2, -3);
        assert_eq!(
            resolve(&ball, &paddle(), &BlockGrid::default(), SCREEN),
            Some(Collision::Ceiling)
        );
    }
}
