//! Duration estimation from a speed.

/// Duration in ms needed to cover `start..end` at `speed` units per second.
///
/// Rounded to the nearest millisecond and clamped to `1..=i16::MAX`, the
/// range of a record's `duration`. A zero speed yields the maximum.
pub fn speed_to_time(speed: u16, start: i32, end: i32) -> i16 {
    if speed == 0 {
        return i16::MAX;
    }
    let distance = (end as i64 - start as i64).unsigned_abs();
    let speed = speed as u64;
    let ms = (distance * 1000 + speed / 2) / speed;
    ms.clamp(1, i16::MAX as u64) as i16
}
