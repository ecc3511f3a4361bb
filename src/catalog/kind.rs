//! Query discriminators for catalog requests.

use std::fmt;
use std::str::FromStr;

/// Media entity discriminator: movie, TV, or both ("all").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Tv,
    All,
}

impl MediaKind {
    /// Path segment used by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
            MediaKind::All => "all",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "movie" | "movies" => Ok(MediaKind::Movie),
            "tv" | "series" | "show" | "shows" => Ok(MediaKind::Tv),
            "all" => Ok(MediaKind::All),
            other => Err(format!("unknown media kind: {}", other)),
        }
    }
}

/// Trending window discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    Day,
    Week,
}

impl TimeWindow {
    /// Path segment used by the catalog API.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" | "today" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            other => Err(format!("unknown time window: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_round_trip() {
        assert_eq!("movie".parse::<MediaKind>().unwrap(), MediaKind::Movie);
        assert_eq!("TV".parse::<MediaKind>().unwrap(), MediaKind::Tv);
        assert_eq!("all".parse::<MediaKind>().unwrap(), MediaKind::All);
        assert_eq!(MediaKind::Tv.as_str(), "tv");
    }

    #[test]
    fn test_media_kind_rejects_unknown() {
        assert!("music".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_time_window_parse() {
        assert_eq!("day".parse::<TimeWindow>().unwrap(), TimeWindow::Day);
        assert_eq!("week".parse::<TimeWindow>().unwrap(), TimeWindow::Week);
        assert!("month".parse::<TimeWindow>().is_err());
    }
}
