use crate::limits::*;
use crate::model::*;

use super::EngineError;

pub(crate) fn validate_stay(range: &StayRange) -> Result<(), EngineError> {
    if range.nights() > MAX_STAY_NIGHTS {
        return Err(EngineError::LimitExceeded("stay too long"));
    }
    Ok(())
}

pub(crate) fn validate_window(window: &StayRange) -> Result<(), EngineError> {
    if window.nights() > MAX_QUERY_WINDOW_DAYS {
        return Err(EngineError::LimitExceeded("query window too wide"));
    }
    Ok(())
}

/// A retired resource behaves as if it had never existed.
pub(crate) fn check_live(rs: &ResourceState) -> Result<(), EngineError> {
    if rs.retired {
        return Err(EngineError::NotFound(rs.id.clone()));
    }
    Ok(())
}

/// Any committed day inside `range` is a conflict; the earliest one is reported.
pub(crate) fn check_no_conflict(rs: &ResourceState, range: &StayRange) -> Result<(), EngineError> {
    match rs.first_clash(range) {
        Some(day) => Err(EngineError::Conflict {
            resource_id: rs.id.clone(),
            day,
        }),
        None => Ok(()),
    }
}
