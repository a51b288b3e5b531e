//! Card face labels, display-only

/// Face label for a rank: A, 2-10, J, Q, K
pub fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    }
}

/// Accept a rank as a number or a face letter (case-insensitive)
pub fn parse_rank(s: &str) -> Result<u32, String> {
    match s.trim().to_ascii_uppercase().as_str() {
        "A" => Ok(1),
        "J" => Ok(11),
        "Q" => Ok(12),
        "K" => Ok(13),
        other => other
            .parse::<u32>()
            .map_err(|_| format!("'{}' is not a card rank", s)),
    }
}
