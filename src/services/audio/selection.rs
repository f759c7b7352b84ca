use super::{AudioSession, SessionInfo};

/// Errors raised while narrowing the session snapshot
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Exactly one match was required but nothing matched
    #[error("no matching sessions")]
    NoMatches,

    /// Exactly one match was required but several matched
    #[error("multiple matching sessions")]
    MultipleMatches {
        /// Number of sessions that matched
        count: usize,
    },

    /// The requested index is outside the filtered set
    #[error("no matching session at index {index}")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of sessions that matched
        count: usize,
    },
}

/// Predicates and constraints used to pick sessions from a snapshot
///
/// All predicates that are set must hold for a session to be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCriteria {
    /// Case-sensitive substring of the display name
    pub display_name_contains: Option<String>,
    /// Process name, compared case-insensitively
    pub process_name: Option<String>,
    /// Owning process id
    pub process_id: Option<u32>,
    /// Collapse the filtered set to this position
    pub only_index: Option<usize>,
    /// Fail unless exactly one session matches
    pub require_exactly_one: bool,
}

impl SelectionCriteria {
    /// Whether the session metadata satisfies every predicate that is set.
    ///
    /// A session without a process is treated as having process name `""`
    /// and no process id.
    pub fn matches(&self, info: &SessionInfo) -> bool {
        if let Some(part) = &self.display_name_contains {
            if !info.display_name.contains(part.as_str()) {
                return false;
            }
        }

        if let Some(wanted) = &self.process_name {
            let name = info.process_name().unwrap_or("");
            if name.to_lowercase() != wanted.to_lowercase() {
                return false;
            }
        }

        if let Some(pid) = self.process_id {
            if info.process_id() != Some(pid) {
                return false;
            }
        }

        true
    }
}

/// A session picked by [`select`], with the index it is reported under
#[derive(Debug)]
pub struct SelectedSession<'a, S> {
    /// Index shown in listings and action logs
    pub display_index: usize,
    /// The selected session
    pub session: &'a S,
}

/// Pick the sessions matching `criteria`, preserving snapshot order.
///
/// The exactly-one constraint is checked first, then the index collapse.
/// Both apply to the filtered set. When an index is given the single
/// remaining session keeps that index as its display index.
///
/// # Errors
/// Returns `SelectionError` if the exactly-one constraint fails or the
/// index is outside the filtered set
pub fn select<'a, S: AudioSession>(
    sessions: &'a [S],
    criteria: &SelectionCriteria,
) -> Result<Vec<SelectedSession<'a, S>>, SelectionError> {
    let matching: Vec<&S> = sessions
        .iter()
        .filter(|session| criteria.matches(session.info()))
        .collect();

    if criteria.require_exactly_one {
        match matching.len() {
            0 => return Err(SelectionError::NoMatches),
            1 => {}
            count => return Err(SelectionError::MultipleMatches { count }),
        }
    }

    if let Some(index) = criteria.only_index {
        let session = matching
            .get(index)
            .copied()
            .ok_or(SelectionError::IndexOutOfRange {
                index,
                count: matching.len(),
            })?;
        return Ok(vec![SelectedSession {
            display_index: index,
            session,
        }]);
    }

    Ok(matching
        .into_iter()
        .enumerate()
        .map(|(display_index, session)| SelectedSession {
            display_index,
            session,
        })
        .collect())
}
