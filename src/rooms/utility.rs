/// Stand-in for any field the roster leaves out.
pub const UNAVAILABLE: &str = "Unavailable";

/// Returns `value`, or [`UNAVAILABLE`] when it is absent or empty.
pub fn or_unavailable(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => UNAVAILABLE.to_string(),
    }
}

/// Extracts the room number from a facility description such as
/// `"Klarman Hall KG70"`, i.e. its last whitespace-separated token.
///
/// Returns `None` for placeholder or blank descriptions; those meetings are
/// not assigned to any room.
pub fn room_number(facility: &str) -> Option<&str> {
    if facility == UNAVAILABLE {
        return None;
    }
    facility.split_whitespace().next_back()
}
