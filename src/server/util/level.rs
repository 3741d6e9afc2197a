//! Crew leveling rules.
//!
//! A crew member's level is a pure function of their accumulated XP. Every write path that
//! changes XP must store a level derived through this module (or the equivalent SQL
//! expression in the user repository) so that the two never drift apart.

/// Experience points required to advance one level.
///
/// Used by `level_for_xp` and by the bulk level recomputation issued by the reward engine.
pub const XP_PER_LEVEL: i64 = 500;

/// Computes the level for the provided XP total.
///
/// Levels start at 1 and increase by one for every `XP_PER_LEVEL` points:
/// `level = floor(xp / 500) + 1`. Negative XP never occurs in stored data and is clamped
/// to level 1.
///
/// # Arguments
/// - `xp` - Accumulated experience points
///
/// # Returns
/// The level derived from `xp`, always at least 1.
///
/// # Example
/// ```ignore
/// assert_eq!(level_for_xp(0), 1);
/// assert_eq!(level_for_xp(500), 2);
/// assert_eq!(level_for_xp(1100), 3);
/// ```
pub fn level_for_xp(xp: i64) -> i32 {
    let level = xp.max(0) / XP_PER_LEVEL + 1;

    i32::try_from(level).unwrap_or(i32::MAX)
}
