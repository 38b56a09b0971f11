use chrono::NaiveTime;

/// Format one leaderboard line.
///
/// # Examples
///
/// ```
/// use quake_core::formatting::format_ranking_line;
///
/// assert_eq!(format_ranking_line(1, "Zeh", 20), "1. Zeh - 20 kills");
/// assert_eq!(format_ranking_line(4, "Mal", -3), "4. Mal - -3 kills");
/// ```
pub fn format_ranking_line(rank: usize, player: &str, kills: i64) -> String {
    format!("{}. {} - {} kills", rank, player, kills)
}

/// Parse the leading timestamp token of a log line as a game clock value.
///
/// Server logs prefix every line with the elapsed match time, e.g.
/// `"  0:00 InitGame: ..."` or `" 20:37 ShutdownGame:"`. The first
/// whitespace-separated token is read as `%H:%M`; anything that does not
/// fit (including minute counts past 23) yields `None`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use quake_core::formatting::parse_game_clock;
///
/// assert_eq!(parse_game_clock("  0:00 InitGame: \\sv_floodProtect\\1"),
///            NaiveTime::from_hms_opt(0, 0, 0));
/// assert_eq!(parse_game_clock("20:37 ShutdownGame:"),
///            NaiveTime::from_hms_opt(20, 37, 0));
/// assert_eq!(parse_game_clock("InitGame:"), None);
/// assert_eq!(parse_game_clock(""), None);
/// ```
pub fn parse_game_clock(line: &str) -> Option<NaiveTime> {
    let token = line.split_whitespace().next()?;
    NaiveTime::parse_from_str(token, "%H:%M").ok()
}

/// Format a game clock value as zero-padded `HH:MM`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use quake_core::formatting::format_game_clock;
///
/// let t = NaiveTime::from_hms_opt(1, 5, 0).unwrap();
/// assert_eq!(format_game_clock(t), "01:05");
/// ```
pub fn format_game_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
