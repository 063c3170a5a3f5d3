/// Longest bookable stay, in nights.
pub const MAX_STAY_NIGHTS: u32 = 365;

/// Longest accepted guest name or email.
pub const MAX_NAME_LEN: usize = 200;

/// Longest accepted free-text field (special requests).
pub const MAX_TEXT_LEN: usize = 500;
