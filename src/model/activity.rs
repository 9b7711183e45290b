use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity; invalid data (more participants than seats) reads as 0.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityList {
    entries: Vec<(String, Activity)>,
}

impl ActivityList {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, a)| (name.as_str(), a))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, a)| a)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityList {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = ActivityList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    // Later duplicates win, matching JSON object semantics.
                    if let Some(slot) = entries.iter_mut().find(|(n, _)| *n == name) {
                        *slot = (name, activity);
                    } else {
                        entries.push((name, activity));
                    }
                }
                Ok(ActivityList { entries })
            }
        }

        deserializer.deserialize_map(ListVisitor)
    }
}

#[cfg(test)]
#[path = "../tests/model/activity_tests.rs"]
mod tests;
