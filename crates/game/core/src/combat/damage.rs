//! Damage mitigation, application, and healing.

/// Smallest amount of damage a landed attack can deal.
///
/// Defence can never reduce an attack below this, so no crawler is invulnerable.
pub const MINIMUM_DAMAGE: i32 = 1;

/// Calculate the damage that gets through the defender's defence.
///
/// # Formula
///
/// ```text
/// actual_damage = max(MINIMUM_DAMAGE, damage - defence)
/// ```
///
/// Defence is flat mitigation. Armor and other equipment are expected to
/// layer their own mitigation on top of this in a later revision.
///
/// Both inputs are already validated as non-negative, so the subtraction
/// cannot overflow.
pub fn mitigate_damage(damage: i32, defence: i32) -> i32 {
    debug_assert!(damage >= 0 && defence >= 0);
    (damage - defence).max(MINIMUM_DAMAGE)
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: i32, actual_damage: i32) -> i32 {
    current_hp.saturating_sub(actual_damage).max(0)
}

/// Apply healing to current HP.
///
/// # Returns
///
/// New HP value (clamped to `max_hp`)
pub fn apply_heal(current_hp: i32, amount: i32, max_hp: i32) -> i32 {
    current_hp.saturating_add(amount).min(max_hp)
}
