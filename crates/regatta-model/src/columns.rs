//! Canonical column names.
//!
//! These strings are shared with the field-mapping configuration: a mapping
//! entry's `name` must be one of them for the column to survive normalization.

pub const CREW_ID: &str = "crew id";
pub const BOAT_TYPE: &str = "boat type";
pub const CLUB: &str = "club";
pub const CREW_NAME: &str = "crew name";
pub const CREW_LETTER: &str = "crew letter";
pub const SEATS: &str = "seats";
pub const VERIFIED: &str = "verified";
pub const CAPTAIN: &str = "captain";
pub const CAPTAIN_NAME: &str = "captain name";
pub const COX: &str = "cox";
pub const COX_NAME: &str = "cox name";

pub const MEMBER_ID: &str = "member id";
pub const NAME: &str = "name";
pub const GENDER: &str = "gender";
pub const DOB: &str = "dob";
pub const MEMBERSHIP_NUMBER: &str = "sr member number";
pub const MEMBERSHIP_TYPE: &str = "membership type";
pub const MEMBERSHIP_EXPIRY: &str = "membership expiry";
pub const ROWING_POINTS: &str = "rowing points";
pub const ROWING_NOVICE: &str = "rowing novice";
pub const SCULLING_POINTS: &str = "sculling points";
pub const SCULLING_NOVICE: &str = "sculling novice";
pub const PRIMARY_CLUB: &str = "primary club";
pub const ADDITIONAL_CLUBS: &str = "additional clubs";
pub const FIRST_LICENCE: &str = "first licence start date";
pub const COMPOSITE_CLUBS: &str = "composite clubs";

// Derived during preparation.
pub const COMPOSITE: &str = "composite";
pub const ENTERING_CLUB: &str = "entering club";
pub const POSITION: &str = "position";

/// Teams report columns, in canonical order.
pub const ENTRY_COLUMNS: &[&str] = &[
    CREW_ID,
    BOAT_TYPE,
    CLUB,
    CREW_NAME,
    CREW_LETTER,
    SEATS,
    VERIFIED,
    CAPTAIN,
    CAPTAIN_NAME,
    COX,
    COX_NAME,
];

/// Team members report columns, in canonical order.
pub const MEMBER_COLUMNS: &[&str] = &[
    BOAT_TYPE,
    CLUB,
    CREW_ID,
    CREW_LETTER,
    CREW_NAME,
    MEMBER_ID,
    NAME,
    GENDER,
    DOB,
    MEMBERSHIP_NUMBER,
    MEMBERSHIP_TYPE,
    MEMBERSHIP_EXPIRY,
    ROWING_POINTS,
    ROWING_NOVICE,
    SCULLING_POINTS,
    SCULLING_NOVICE,
    PRIMARY_CLUB,
    ADDITIONAL_CLUBS,
    FIRST_LICENCE,
    COMPOSITE_CLUBS,
];

/// Community members (roster) report columns, in canonical order.
pub const ROSTER_COLUMNS: &[&str] = &[
    MEMBER_ID,
    NAME,
    DOB,
    GENDER,
    MEMBERSHIP_NUMBER,
    MEMBERSHIP_TYPE,
    MEMBERSHIP_EXPIRY,
    ROWING_POINTS,
    ROWING_NOVICE,
    SCULLING_POINTS,
    SCULLING_NOVICE,
    PRIMARY_CLUB,
    ADDITIONAL_CLUBS,
    FIRST_LICENCE,
    COMPOSITE_CLUBS,
];

/// Y/N columns of the teams report.
pub const ENTRY_FLAG_COLUMNS: &[&str] = &[COX, VERIFIED, CAPTAIN];

/// Y/N columns of the team members and community members reports.
pub const MEMBER_FLAG_COLUMNS: &[&str] = &[ROWING_NOVICE, SCULLING_NOVICE];

/// Entry fields copied onto a synthesized cox record.
pub const COX_CREW_COLUMNS: &[&str] = &[CREW_ID, CREW_NAME, CREW_LETTER, CLUB, BOAT_TYPE];

/// Person fields pulled from the roster for a matched cox.
pub const COX_LOOKUP_COLUMNS: &[&str] = &[
    MEMBER_ID,
    MEMBERSHIP_NUMBER,
    GENDER,
    DOB,
    MEMBERSHIP_TYPE,
    MEMBERSHIP_EXPIRY,
    PRIMARY_CLUB,
    ADDITIONAL_CLUBS,
    FIRST_LICENCE,
    COMPOSITE_CLUBS,
    ROWING_NOVICE,
    SCULLING_NOVICE,
    ROWING_POINTS,
    SCULLING_POINTS,
];

/// Position sentinel for coxswains.
pub const COX_POSITION: &str = "C";

/// Literal marker a composite crew carries in its club name.
pub const COMPOSITE_MARKER: &str = "(composite)";

/// Crew id prefix the teams report adds to its identifiers.
pub const TEAM_ID_PREFIX: &str = "teams/";
