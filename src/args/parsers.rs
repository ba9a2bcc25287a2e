use super::types::{PositiveU64, PositiveUsize, TimeoutSecs};
use crate::error::ValidationError;

pub(super) fn parse_positive_u64(s: &str) -> Result<PositiveU64, ValidationError> {
    s.parse::<PositiveU64>()
}

pub(super) fn parse_positive_usize(s: &str) -> Result<PositiveUsize, ValidationError> {
    s.parse::<PositiveUsize>()
}

pub(super) fn parse_timeout_secs(s: &str) -> Result<TimeoutSecs, ValidationError> {
    s.parse::<TimeoutSecs>()
}
