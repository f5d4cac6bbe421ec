use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{ParseEnumError, Status};

/// Membership plan tier. Each tier has a fixed validity period.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MembershipType {
    General,
    Premium,
    Vip,
}

impl MembershipType {
    pub const ALL: [MembershipType; 3] = [Self::General, Self::Premium, Self::Vip];

    /// Validity period of the plan, in days.
    pub fn duration_days(&self) -> u64 {
        match self {
            Self::General => 180,
            Self::Premium => 365,
            Self::Vip => 730,
        }
    }

    /// Last day of a membership starting on `start_date`.
    pub fn end_date(&self, start_date: NaiveDate) -> NaiveDate {
        start_date
            .checked_add_days(Days::new(self.duration_days()))
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Premium => "premium",
            Self::Vip => "vip",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Premium => "Premium",
            Self::Vip => "VIP",
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MembershipType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "general" => Ok(Self::General),
            "premium" => Ok(Self::Premium),
            "vip" => Ok(Self::Vip),
            _ => Err(ParseEnumError::new("membership type", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub membership_type: MembershipType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_per_tier() {
        let start = date(2024, 1, 15);
        assert_eq!(MembershipType::General.end_date(start), date(2024, 7, 13));
        assert_eq!(MembershipType::Premium.end_date(start), date(2025, 1, 14));
        assert_eq!(MembershipType::Vip.end_date(start), date(2026, 1, 14));
    }

    #[test]
    fn test_end_date_crosses_leap_day() {
        let start = date(2024, 2, 1);
        assert_eq!(
            (MembershipType::Premium.end_date(start) - start).num_days(),
            365
        );
    }

    #[test]
    fn test_parse_accepts_labels() {
        assert_eq!("VIP".parse::<MembershipType>().unwrap(), MembershipType::Vip);
        assert_eq!(
            "premium".parse::<MembershipType>().unwrap(),
            MembershipType::Premium
        );
        assert!("gold".parse::<MembershipType>().is_err());
    }
}
