//! Fixed color tables used by the display states.

use crate::led::{Color, EFBAR_NUM, TOTAL_NUM};

pub const STARLIGHT_BLUE: Color = Color::new(0x06, 0xff, 0xa1);
pub const STARLIGHT_ORANGE: Color = Color::new(0xff, 0x3a, 0x1a);

/// Blue/orange loop sized for the bar, rotated through the dragon head.
pub const CIRCULAR_DRAGON_HEAD: [Color; EFBAR_NUM] = [
    Color::new(0x06, 0xff, 0xa1),
    Color::new(0x05, 0xd8, 0xb8),
    Color::new(0x04, 0xa0, 0xd0),
    Color::new(0x20, 0x60, 0xe0),
    Color::new(0x60, 0x40, 0xc0),
    Color::new(0xa0, 0x30, 0x80),
    Color::new(0xd0, 0x30, 0x40),
    Color::new(0xff, 0x3a, 0x1a),
    Color::new(0xff, 0x70, 0x10),
    Color::new(0xa0, 0xc0, 0x40),
    Color::new(0x40, 0xf0, 0x80),
];

/// Loop spanning every LED on the badge.
pub const CIRCULAR_FULL: [Color; TOTAL_NUM] = [
    Color::new(0x06, 0xff, 0xa1),
    Color::new(0x06, 0xe8, 0xb0),
    Color::new(0x05, 0xc8, 0xc4),
    Color::new(0x04, 0xa0, 0xd8),
    Color::new(0x10, 0x78, 0xe8),
    Color::new(0x30, 0x50, 0xe0),
    Color::new(0x60, 0x38, 0xc0),
    Color::new(0x90, 0x30, 0x90),
    Color::new(0xc0, 0x30, 0x60),
    Color::new(0xe8, 0x34, 0x30),
    Color::new(0xff, 0x3a, 0x1a),
    Color::new(0xff, 0x60, 0x10),
    Color::new(0xf0, 0x90, 0x10),
    Color::new(0xc0, 0xb8, 0x30),
    Color::new(0x80, 0xd8, 0x50),
    Color::new(0x40, 0xf0, 0x78),
    Color::new(0x18, 0xff, 0x90),
];

/// DiegoTeki flag as shown on the bar.
pub const DIEGOTEKI: [Color; EFBAR_NUM] = [
    Color::new(0x1a, 0x1a, 0x2e),
    Color::new(0x4b, 0x00, 0x82),
    Color::new(0x80, 0x00, 0x80),
    Color::new(0xc7, 0x15, 0x85),
    Color::new(0xff, 0x14, 0x93),
    Color::new(0xff, 0x69, 0xb4),
    Color::new(0xff, 0xb6, 0xc1),
    Color::new(0xff, 0xd7, 0x00),
    Color::new(0xff, 0xa5, 0x00),
    Color::new(0xff, 0x45, 0x00),
    Color::new(0x8b, 0x00, 0x00),
];

/// DiegoTeki colors spread over the whole badge.
pub const DIEGOTEKI_CIRCULAR: [Color; TOTAL_NUM] = [
    Color::new(0x4b, 0x00, 0x82),
    Color::new(0x66, 0x00, 0x81),
    Color::new(0x80, 0x00, 0x80),
    Color::new(0xa3, 0x0a, 0x83),
    Color::new(0xc7, 0x15, 0x85),
    Color::new(0xe3, 0x14, 0x8c),
    Color::new(0xff, 0x14, 0x93),
    Color::new(0xff, 0x3e, 0xa4),
    Color::new(0xff, 0x69, 0xb4),
    Color::new(0xff, 0x8f, 0xba),
    Color::new(0xff, 0xb6, 0xc1),
    Color::new(0xff, 0xc6, 0x60),
    Color::new(0xff, 0xd7, 0x00),
    Color::new(0xff, 0xbe, 0x00),
    Color::new(0xff, 0xa5, 0x00),
    Color::new(0xff, 0x75, 0x00),
    Color::new(0xff, 0x45, 0x00),
];
