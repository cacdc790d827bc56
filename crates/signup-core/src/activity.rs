use crate::error::{Result, SignupError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Capacity hint shown to students. Signups are not checked against it.
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Open places left against the capacity hint, floored at zero.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// All activities keyed by name. Keys are fixed once built; only rosters change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    activities: BTreeMap<String, Activity>,
}

impl Directory {
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { activities }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Activity)> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Add `email` to the roster of `activity` and return the confirmation message.
    pub fn signup(&mut self, activity: &str, email: &str) -> Result<String> {
        let entry = self.find_mut(activity)?;
        if entry.has_participant(email) {
            return Err(SignupError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        entry.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity}"))
    }

    /// Remove `email` from the roster of `activity` and return the confirmation message.
    pub fn unregister(&mut self, activity: &str, email: &str) -> Result<String> {
        let entry = self.find_mut(activity)?;
        let pos = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| SignupError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;
        entry.participants.remove(pos);
        Ok(format!("Unregistered {email} from {activity}"))
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Activity> {
        self.activities
            .get_mut(name)
            .ok_or_else(|| SignupError::ActivityNotFound(name.to_string()))
    }
}

impl FromIterator<(String, Activity)> for Directory {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_only() -> Directory {
        [(
            "Chess Club".to_string(),
            Activity::new("Chess", "Fridays", 12).with_participants(["michael@mergington.edu"]),
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn signup_appends_once() {
        let mut dir = chess_only();
        let msg = dir.signup("Chess Club", "a@x.edu").unwrap();
        assert_eq!(msg, "Signed up a@x.edu for Chess Club");

        let roster = &dir.get("Chess Club").unwrap().participants;
        assert_eq!(roster.iter().filter(|p| *p == "a@x.edu").count(), 1);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn duplicate_signup_leaves_roster_unchanged() {
        let mut dir = chess_only();
        let before = dir.clone();
        let err = dir.signup("Chess Club", "michael@mergington.edu").unwrap_err();
        assert!(matches!(err, SignupError::AlreadySignedUp { .. }));
        assert_eq!(err.to_string(), "Student already signed up for this activity");
        assert_eq!(dir, before);
    }

    #[test]
    fn signup_unknown_activity() {
        let mut dir = chess_only();
        let before = dir.clone();
        let err = dir.signup("Knitting", "a@x.edu").unwrap_err();
        assert!(matches!(err, SignupError::ActivityNotFound(ref n) if n == "Knitting"));
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(dir, before);
    }

    #[test]
    fn unregister_removes_exactly_that_email() {
        let mut dir = chess_only();
        dir.signup("Chess Club", "a@x.edu").unwrap();
        let msg = dir.unregister("Chess Club", "a@x.edu").unwrap();
        assert_eq!(msg, "Unregistered a@x.edu from Chess Club");
        assert_eq!(
            dir.get("Chess Club").unwrap().participants,
            vec!["michael@mergington.edu".to_string()]
        );
    }

    #[test]
    fn unregister_absent_participant() {
        let mut dir = chess_only();
        let before = dir.clone();
        let err = dir.unregister("Chess Club", "nobody@x.edu").unwrap_err();
        assert!(matches!(err, SignupError::ParticipantNotFound { .. }));
        assert_eq!(err.to_string(), "Participant not found for this activity");
        assert_eq!(dir, before);
    }

    #[test]
    fn unregister_unknown_activity() {
        let mut dir = chess_only();
        let err = dir.unregister("Knitting", "a@x.edu").unwrap_err();
        assert_eq!(err.to_string(), "Activity not found");
    }

    #[test]
    fn email_match_is_exact() {
        let mut dir = chess_only();
        dir.signup("Chess Club", "Michael@mergington.edu").unwrap();
        assert_eq!(dir.get("Chess Club").unwrap().participants.len(), 2);
    }

    #[test]
    fn capacity_is_not_enforced() {
        let mut dir: Directory = [("Tiny".to_string(), Activity::new("d", "s", 1))]
            .into_iter()
            .collect();
        dir.signup("Tiny", "a@x.edu").unwrap();
        dir.signup("Tiny", "b@x.edu").unwrap();
        let tiny = dir.get("Tiny").unwrap();
        assert_eq!(tiny.participants.len(), 2);
        assert_eq!(tiny.spots_left(), 0);
    }

    #[test]
    fn serializes_as_name_keyed_map() {
        let json = serde_json::to_value(chess_only()).unwrap();
        let chess = &json["Chess Club"];
        assert_eq!(chess["description"], "Chess");
        assert_eq!(chess["schedule"], "Fridays");
        assert_eq!(chess["max_participants"], 12);
        assert_eq!(chess["participants"][0], "michael@mergington.edu");
    }
}
