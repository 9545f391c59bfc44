//! Hard caps on caller input. Exceeding any of them is `LimitExceeded`.

pub const MAX_RESOURCES: usize = 10_000;
pub const MAX_NAME_LEN: usize = 256;
pub const MAX_DESCRIPTION_LEN: usize = 2_048;

/// Longest stay a single commit may cover.
pub const MAX_STAY_NIGHTS: u32 = 366;

/// Widest window `free_ranges` will scan.
pub const MAX_QUERY_WINDOW_DAYS: u32 = 3 * 366;
