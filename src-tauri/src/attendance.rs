use serde::{Deserialize, Serialize};

/// Outcome of one attendance check. Recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Every roster entry, in input order.
    pub roster: Vec<String>,
    /// Roster entries matched to a detected participant.
    pub present: Vec<String>,
    /// Roster entries with no match.
    pub absent: Vec<String>,
    /// Everything the page reported, matched or not.
    pub detected: Vec<String>,
    /// Rounded percentage of the roster that is present.
    pub rate: u32,
}

impl AttendanceReport {
    /// Partition `roster` against `detected`, keeping roster order in both halves.
    pub fn compute(roster: Vec<String>, detected: Vec<String>) -> Self {
        let (present, absent): (Vec<String>, Vec<String>) = roster
            .iter()
            .cloned()
            .partition(|member| is_present(member, &detected));
        let rate = attendance_rate(present.len(), roster.len());

        Self {
            roster,
            present,
            absent,
            detected,
            rate,
        }
    }
}

/// Case-sensitive substring match in either direction, so "Alice Kim"
/// matches "Alice Kim (Host)" and "Alice" matches "Alice Kim". Loose on
/// purpose: short names can match strangers.
pub fn is_present(member: &str, detected: &[String]) -> bool {
    detected
        .iter()
        .any(|name| name.contains(member) || member.contains(name.as_str()))
}

/// round(present / total * 100), or 0 for an empty roster.
pub fn attendance_rate(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((present as f64 / total as f64) * 100.0).round() as u32
}
