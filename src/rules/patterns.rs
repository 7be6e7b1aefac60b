use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Predefined patterns for seeding the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// Three blocks; a still life
    StillLife,
    /// A short line that dies out quickly
    DeadEnd,
    /// A pattern that grows indefinitely
    GliderGun,
    /// A small oscillator
    Blinker,
    /// A diagonal spaceship
    Glider,
    /// A period-2 oscillator made of two blocks
    Beacon,
    /// A small oscillator
    Toad,
    /// A methuselah
    RPentomino,
    /// Vanishes after 130 generations on an unbounded plane
    Diehard,
    /// A horizontal spaceship
    LightweightSpaceship,
    /// A period-3 oscillator
    Pulsar,
}

#[rustfmt::skip]
const STILL_LIFE: &[(i32, i32)] = &[
    (0, 0), (0, 1), (1, 0), (1, 1),
    (3, 0), (3, 1), (4, 0), (4, 1),
    (-3, -3), (-3, -2), (-2, -3), (-2, -2),
];

#[rustfmt::skip]
const DEAD_END: &[(i32, i32)] = &[(0, 0), (0, 1), (0, 2)];

#[rustfmt::skip]
const GLIDER_GUN: &[(i32, i32)] = &[
    // Left block
    (0, -4), (0, -3), (1, -4), (1, -3),

    // Left ship
    (10, -4), (10, -3), (10, -2),
    (11, -5), (11, -1),
    (12, -6), (12, 0),
    (13, -6), (13, 0),
    (14, -3),
    (15, -5), (15, -1),
    (16, -4), (16, -3), (16, -2),
    (17, -3),

    // Right ship
    (20, -6), (20, -5), (20, -4),
    (21, -6), (21, -5), (21, -4),
    (22, -7), (22, -3),
    (24, -7), (24, -3), (24, -2), (24, -8),

    // Right block
    (34, -5), (34, -4), (35, -5), (35, -4),
];

#[rustfmt::skip]
const BLINKER: &[(i32, i32)] = &[(0, 0), (0, 1), (0, 2)];

#[rustfmt::skip]
const GLIDER: &[(i32, i32)] = &[(0, 0), (1, 1), (2, 1), (0, 2), (1, 2)];

#[rustfmt::skip]
const BEACON: &[(i32, i32)] = &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)];

#[rustfmt::skip]
const TOAD: &[(i32, i32)] = &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)];

#[rustfmt::skip]
const R_PENTOMINO: &[(i32, i32)] = &[(0, 1), (1, 1), (1, 0), (1, 2), (2, 0)];

#[rustfmt::skip]
const DIEHARD: &[(i32, i32)] = &[
    (7, 0),
    (1, 1), (2, 1),
    (2, 2),
    (6, 2), (7, 2), (8, 2),
];

#[rustfmt::skip]
const LWSS: &[(i32, i32)] = &[
    (1, 0), (4, 0),
    (0, 1), (0, 2),
    (4, 1), (4, 2),
    (1, 3), (2, 3), (3, 3), (4, 3),
];

#[rustfmt::skip]
const PULSAR: &[(i32, i32)] = &[
    (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
    (0, 2), (5, 2), (7, 2), (12, 2),
    (0, 3), (5, 3), (7, 3), (12, 3),
    (0, 4), (5, 4), (7, 4), (12, 4),
    (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),

    (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
    (0, 8), (5, 8), (7, 8), (12, 8),
    (0, 9), (5, 9), (7, 9), (12, 9),
    (0, 10), (5, 10), (7, 10), (12, 10),
    (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
];

impl Pattern {
    pub const ALL: [Pattern; 11] = [
        Pattern::StillLife,
        Pattern::DeadEnd,
        Pattern::GliderGun,
        Pattern::Blinker,
        Pattern::Glider,
        Pattern::Beacon,
        Pattern::Toad,
        Pattern::RPentomino,
        Pattern::Diehard,
        Pattern::LightweightSpaceship,
        Pattern::Pulsar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::StillLife => "stillLife",
            Pattern::DeadEnd => "deadEnd",
            Pattern::GliderGun => "gliderGun",
            Pattern::Blinker => "blinker",
            Pattern::Glider => "glider",
            Pattern::Beacon => "beacon",
            Pattern::Toad => "toad",
            Pattern::RPentomino => "rPentomino",
            Pattern::Diehard => "DIEHARD",
            Pattern::LightweightSpaceship => "LWSS",
            Pattern::Pulsar => "PULSAR",
        }
    }

    /// Offsets `(dx, dy)` relative to the grid's midpoint.
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::StillLife => STILL_LIFE,
            Pattern::DeadEnd => DEAD_END,
            Pattern::GliderGun => GLIDER_GUN,
            Pattern::Blinker => BLINKER,
            Pattern::Glider => GLIDER,
            Pattern::Beacon => BEACON,
            Pattern::Toad => TOAD,
            Pattern::RPentomino => R_PENTOMINO,
            Pattern::Diehard => DIEHARD,
            Pattern::LightweightSpaceship => LWSS,
            Pattern::Pulsar => PULSAR,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// Mirror applied after rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flip {
    #[default]
    None,
    /// Negates `dx`.
    Horizontal,
    /// Negates `dy`.
    Vertical,
}

/// Rotation then flip, applied to each pattern offset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub rotation_degrees: f64,
    pub flip: Flip,
}

impl Transform {
    pub fn new(rotation_degrees: f64, flip: Flip) -> Self {
        Self { rotation_degrees, flip }
    }

    /// Rotates with plain trig and rounds to the nearest cell, ties toward
    /// positive infinity. Angles that are not multiples of 90 can merge
    /// two offsets into one cell or leave gaps.
    pub fn apply(&self, (dx, dy): (i32, i32)) -> (i64, i64) {
        let (mut x, mut y) = (i64::from(dx), i64::from(dy));

        if self.rotation_degrees != 0.0 {
            let (sin, cos) = self.rotation_degrees.to_radians().sin_cos();
            let (fx, fy) = (f64::from(dx), f64::from(dy));
            x = round_half_up(fx * cos - fy * sin);
            y = round_half_up(fx * sin + fy * cos);
        }

        match self.flip {
            Flip::None => {}
            Flip::Horizontal => x = -x,
            Flip::Vertical => y = -y,
        }

        (x, y)
    }
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform() {
        let t = Transform::default();
        assert_eq!(t.apply((3, -2)), (3, -2));
    }

    #[test]
    fn quarter_turns_are_exact() {
        let t = Transform::new(90.0, Flip::None);
        assert_eq!(t.apply((1, 0)), (0, 1));
        assert_eq!(t.apply((2, 1)), (-1, 2));

        let t = Transform::new(180.0, Flip::None);
        assert_eq!(t.apply((2, 1)), (-2, -1));

        let t = Transform::new(270.0, Flip::None);
        assert_eq!(t.apply((2, 1)), (1, -2));
    }

    #[test]
    fn flips_follow_rotation() {
        assert_eq!(Transform::new(0.0, Flip::Horizontal).apply((2, 1)), (-2, 1));
        assert_eq!(Transform::new(0.0, Flip::Vertical).apply((2, 1)), (2, -1));
        // rotate (1,0) to (0,1), then negate dy
        assert_eq!(Transform::new(90.0, Flip::Vertical).apply((1, 0)), (0, -1));
    }

    #[test]
    fn odd_angles_round_and_may_collide() {
        let t = Transform::new(45.0, Flip::None);
        // (1,0) -> (0.707, 0.707); (1,1) -> (0, 1.414)
        assert_eq!(t.apply((1, 0)), (1, 1));
        assert_eq!(t.apply((1, 1)), (0, 1));
        assert_eq!(t.apply((0, 1)), (-1, 1));
    }

    #[test]
    fn ties_round_up() {
        // 30 degrees: (0,1) -> (-0.5, 0.866)
        let t = Transform::new(30.0, Flip::None);
        assert_eq!(t.apply((0, 1)), (0, 1));
        assert_eq!(round_half_up(-1.5), -1);
        assert_eq!(round_half_up(2.5), 3);
    }

    #[test]
    fn names_parse_back() {
        for p in Pattern::ALL {
            assert_eq!(p.name().parse::<Pattern>().unwrap(), p);
        }
        assert_eq!("lwss".parse::<Pattern>().unwrap(), Pattern::LightweightSpaceship);
        assert!(matches!("nope".parse::<Pattern>(), Err(Error::UnknownPattern(_))));
    }

    #[test]
    fn preset_sizes() {
        assert_eq!(Pattern::Glider.offsets().len(), 5);
        assert_eq!(Pattern::GliderGun.offsets().len(), 36);
        assert_eq!(Pattern::Pulsar.offsets().len(), 48);
    }
}
