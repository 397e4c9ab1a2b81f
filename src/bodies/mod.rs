mod ball;

pub use ball::{Ball, BallParams};

use bitflags::bitflags;

bitflags! {
    /// Per-ball state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BallFlags: u8 {
        /// The ball is asleep and skipped by integration and collision
        const SLEEPING = 1 << 0;

        /// The ball is allowed to fall asleep when it comes to rest
        const CAN_SLEEP = 1 << 1;
    }
}
