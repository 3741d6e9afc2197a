use entity::station_mission::Difficulty;

use crate::server::data::mission::NewMission;

/// A mission shipped with every new station.
pub struct StarterMission {
    pub title: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub xp_reward: i64,
    pub min_level: i32,
}

impl From<&StarterMission> for NewMission {
    fn from(mission: &StarterMission) -> Self {
        Self {
            title: mission.title.to_string(),
            description: mission.description.to_string(),
            location: mission.location.to_string(),
            duration: mission.duration.to_string(),
            difficulty: mission.difficulty,
            xp_reward: mission.xp_reward,
            min_level: mission.min_level,
        }
    }
}

/// Starter catalogue, matched against existing missions by title.
pub const STARTER_MISSIONS: [StarterMission; 8] = [
    StarterMission {
        title: "Mars Surface Exploration",
        description: "Explore the surface of Mars and collect soil and rock samples for \
            analysis. Watch out for dust storms.",
        location: "Mars",
        duration: "3 hours",
        difficulty: Difficulty::Easy,
        xp_reward: 100,
        min_level: 1,
    },
    StarterMission {
        title: "Europa Orbit",
        description: "Hold orbit around Europa and scan the ice layer for signs of a \
            subsurface ocean.",
        location: "Europa",
        duration: "6 hours",
        difficulty: Difficulty::Medium,
        xp_reward: 250,
        min_level: 3,
    },
    StarterMission {
        title: "Space Station Repair",
        description: "Repair the damaged solar panels on the international space station. \
            Requires a spacewalk.",
        location: "ISS Orbit",
        duration: "4 hours",
        difficulty: Difficulty::Medium,
        xp_reward: 200,
        min_level: 2,
    },
    StarterMission {
        title: "Titan Landing",
        description: "Land on Titan, Saturn's largest moon, and study its methane lakes and \
            thick atmosphere.",
        location: "Titan",
        duration: "12 hours",
        difficulty: Difficulty::Hard,
        xp_reward: 500,
        min_level: 5,
    },
    StarterMission {
        title: "Asteroid Belt Expedition",
        description: "Navigate the asteroid belt between Mars and Jupiter to mine rare \
            minerals.",
        location: "Asteroid Belt",
        duration: "8 hours",
        difficulty: Difficulty::Hard,
        xp_reward: 400,
        min_level: 4,
    },
    StarterMission {
        title: "Neptune Flyby",
        description: "Fly past Neptune to photograph the Great Dark Spot and measure its \
            extreme winds.",
        location: "Neptune",
        duration: "24 hours",
        difficulty: Difficulty::Extreme,
        xp_reward: 1000,
        min_level: 8,
    },
    StarterMission {
        title: "Lunar Colony Supply Run",
        description: "Deliver supplies and equipment to the colony at the lunar south pole.",
        location: "Moon",
        duration: "2 hours",
        difficulty: Difficulty::Easy,
        xp_reward: 75,
        min_level: 1,
    },
    StarterMission {
        title: "Callisto Rescue",
        description: "Rescue a research team stranded on Callisto after an equipment \
            failure.",
        location: "Callisto",
        duration: "10 hours",
        difficulty: Difficulty::Extreme,
        xp_reward: 1200,
        min_level: 10,
    },
];
