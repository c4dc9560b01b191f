use super::TimeWindow;
use crate::model::graph::EdgeId;
use bambam_street_core::model::mode::{TraverseMode, TraverseModeSet};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TurnRestrictionType {
    /// turning from `from` onto `to` is forbidden
    NoTurn,
    /// from `from`, only `to` may be taken
    OnlyTurn,
}

/// a rule limiting which edge may follow another, for some modes and times.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TurnRestriction {
    pub from: EdgeId,
    pub to: EdgeId,
    pub restriction_type: TurnRestrictionType,
    pub modes: TraverseModeSet,
    /// when set, the restriction only applies inside this window
    pub time: Option<TimeWindow>,
}

impl TurnRestriction {
    pub fn new(
        from: EdgeId,
        to: EdgeId,
        restriction_type: TurnRestrictionType,
        modes: TraverseModeSet,
    ) -> TurnRestriction {
        TurnRestriction {
            from,
            to,
            restriction_type,
            modes,
            time: None,
        }
    }

    pub fn with_time_window(mut self, window: TimeWindow) -> TurnRestriction {
        self.time = Some(window);
        self
    }

    /// true if this restriction constrains the given mode at the given time.
    pub fn applies(&self, mode: TraverseMode, time: &DateTime<Utc>) -> bool {
        self.modes.contains(mode) && self.active(time)
    }

    pub fn active(&self, time: &DateTime<Utc>) -> bool {
        match &self.time {
            None => true,
            Some(window) => window.contains(time),
        }
    }

    /// copy of this restriction between different edges, keeping mode and time.
    pub fn rewired(&self, from: EdgeId, to: EdgeId) -> TurnRestriction {
        TurnRestriction {
            from,
            to,
            ..self.clone()
        }
    }
}
