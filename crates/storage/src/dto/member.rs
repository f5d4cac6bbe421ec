use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Member, MembershipType, Status};

/// Request payload for registering a new member
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberRequest {
    #[validate(
        length(min = 1, max = 255, message = "Name is required"),
        custom(function = "super::validate_not_blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 255, message = "Email is required"),
        custom(function = "super::validate_not_blank")
    )]
    pub email: String,

    #[validate(length(max = 50))]
    #[serde(default)]
    pub phone: Option<String>,

    pub membership_type: MembershipType,

    pub start_date: NaiveDate,
}

impl CreateMemberRequest {
    /// Membership end date implied by the plan tier.
    pub fn end_date(&self) -> NaiveDate {
        self.membership_type.end_date(self.start_date)
    }

    /// Phone number with blank input treated as absent.
    pub fn normalized_phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct MemberFilter {
    /// Only return members with this status
    pub status: Option<Status>,
}

/// Active member whose membership ends within the warning window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExpiringMember {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub end_date: NaiveDate,
    /// Days from today until `end_date`; zero or negative once expired
    pub days_left: i64,
    pub expired: bool,
}

impl ExpiringMember {
    pub fn from_member(member: Member, today: NaiveDate) -> Self {
        let days_left = (member.end_date - today).num_days();
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            end_date: member.end_date,
            days_left,
            expired: days_left <= 0,
        }
    }
}
