//! # Activity Registry
//!
//! In-memory roster of every extracurricular activity, keyed by activity
//! name. The activity set is fixed at startup; only the participant lists
//! change, through [`Registry::signup`] and [`Registry::unregister`].
use std::collections::HashMap;

use serde::Serialize;

use crate::{error::ApiError, utils::validate_email};

#[derive(Serialize, Clone)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

pub struct Registry {
    activities: HashMap<String, Activity>,
}

impl Registry {
    /// Registry pre-populated with the school's activity roster, all
    /// participant lists empty.
    pub fn seed() -> Self {
        let mut activities = HashMap::new();

        for (name, description, schedule, max_participants) in SEED_ACTIVITIES {
            activities.insert(
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: Vec::new(),
                },
            );
        }

        Self { activities }
    }

    pub fn snapshot(&self) -> HashMap<String, Activity> {
        self.activities.clone()
    }

    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<(), ApiError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(ApiError::UnknownActivity)?;

        validate_email(email)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(ApiError::AlreadyRegistered);
        }

        if activity.participants.len() >= activity.max_participants as usize {
            return Err(ApiError::ActivityFull);
        }

        activity.participants.push(email.to_string());

        Ok(())
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<(), ApiError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(ApiError::UnknownActivity)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(ApiError::NotRegistered)?;

        activity.participants.remove(position);

        Ok(())
    }
}

const SEED_ACTIVITIES: &[(&str, &str, &str, u32)] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
    ),
];
