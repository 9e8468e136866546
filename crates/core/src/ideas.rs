//! Project idea generator.
//!
//! A deterministic placeholder for a future recommendation service: three
//! fixed idea templates are filled in with the caller's skill level, time
//! budget, component list and first preferred category. The simulated
//! inference latency lives in the HTTP layer; this module never sleeps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{new_doc_id, DocId, Timestamp};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Components assumed when the caller lists none.
pub const DEFAULT_COMPONENTS: &[&str] = &["ESP32", "DHT22", "Servo Motor"];

/// Categories assumed when the caller lists none. Only the first is used.
pub const DEFAULT_CATEGORIES: &[&str] = &["IoT", "Automation", "Environmental"];

/// Number of ideas produced per request.
pub const IDEAS_PER_REQUEST: usize = 3;

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Skill level an idea is pitched at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(CoreError::Validation(format!(
                "skill must be one of beginner, intermediate, advanced (got '{other}')"
            ))),
        }
    }
}

/// Estimated build-time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatedTime {
    #[serde(rename = "lt-2h")]
    UnderTwoHours,
    #[default]
    #[serde(rename = "2-5h")]
    TwoToFiveHours,
    #[serde(rename = "5-10h")]
    FiveToTenHours,
    #[serde(rename = "10h-plus")]
    OverTenHours,
}

impl EstimatedTime {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnderTwoHours => "lt-2h",
            Self::TwoToFiveHours => "2-5h",
            Self::FiveToTenHours => "5-10h",
            Self::OverTenHours => "10h-plus",
        }
    }
}

impl fmt::Display for EstimatedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimatedTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lt-2h" => Ok(Self::UnderTwoHours),
            "2-5h" => Ok(Self::TwoToFiveHours),
            "5-10h" => Ok(Self::FiveToTenHours),
            "10h-plus" => Ok(Self::OverTenHours),
            other => Err(CoreError::Validation(format!(
                "time must be one of lt-2h, 2-5h, 5-10h, 10h-plus (got '{other}')"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Body of `POST /api/projects/generate`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateIdeasRequest {
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub components: Option<Vec<String>>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A generated project idea. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub id: DocId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(rename = "estimatedTime")]
    pub estimated_time: EstimatedTime,
    pub components: Vec<String>,
    pub category: String,
    pub instructions: Vec<String>,
    pub created_at: Timestamp,
}

/// Caller preferences with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaPreferences {
    pub difficulty: Difficulty,
    pub estimated_time: EstimatedTime,
    pub components: Vec<String>,
    pub category: String,
}

impl IdeaPreferences {
    /// Resolve a request into concrete preferences.
    ///
    /// Absent or empty values fall back to the defaults; a present skill or
    /// time label outside the enumerations is a validation error.
    pub fn resolve(request: &GenerateIdeasRequest) -> Result<Self, CoreError> {
        let difficulty = match non_empty(request.skill.as_deref()) {
            Some(skill) => skill.parse()?,
            None => Difficulty::default(),
        };
        let estimated_time = match non_empty(request.time.as_deref()) {
            Some(time) => time.parse()?,
            None => EstimatedTime::default(),
        };

        let components = match request.components.as_deref() {
            Some(list) if !list.is_empty() => list.to_vec(),
            _ => DEFAULT_COMPONENTS.iter().map(|c| c.to_string()).collect(),
        };
        let category = request
            .categories
            .as_deref()
            .and_then(|list| list.first())
            .cloned()
            .unwrap_or_else(|| DEFAULT_CATEGORIES[0].to_string());

        Ok(Self {
            difficulty,
            estimated_time,
            components,
            category,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

struct IdeaTemplate {
    title: &'static str,
    description: &'static str,
    /// `None` takes the caller's preferred category.
    category: Option<&'static str>,
    extra_components: &'static [&'static str],
    instructions: &'static [&'static str],
}

const TEMPLATES: [IdeaTemplate; IDEAS_PER_REQUEST] = [
    IdeaTemplate {
        title: "Smart Home Air Quality Monitor",
        description: "Build a connected monitor that tracks temperature and humidity, \
                      displays status, and sends alerts when thresholds are exceeded.",
        category: None,
        extra_components: &["OLED Display"],
        instructions: &[
            "Wire the sensor to the microcontroller and verify readings via serial monitor.",
            "Display live metrics on the OLED with color-coded thresholds.",
            "Push readings to a cloud endpoint and configure alert rules.",
            "Enclose the device and test in different rooms.",
        ],
    },
    IdeaTemplate {
        title: "Automated Plant Watering System",
        description: "Create a soil-moisture-based watering setup that irrigates plants \
                      automatically and logs activity.",
        category: Some("Automation"),
        extra_components: &["Soil Moisture Sensor", "Relay Module", "Pump"],
        instructions: &[
            "Calibrate the moisture sensor to determine dry thresholds.",
            "Control a pump using a relay and implement safety delays.",
            "Log watering events and moisture trends for analysis.",
            "Add a manual override and status LED.",
        ],
    },
    IdeaTemplate {
        title: "Obstacle-Avoiding Robot",
        description: "Assemble a simple robot that navigates autonomously by detecting \
                      obstacles and adjusting its path.",
        category: Some("Robotics"),
        extra_components: &["Ultrasonic Sensor", "Motor Driver"],
        instructions: &[
            "Mount motors and connect the driver to the controller.",
            "Integrate the ultrasonic sensor and read distance values.",
            "Implement basic avoidance logic with turn-and-forward behavior.",
            "Tune speed and sensitivity; test in a small course.",
        ],
    },
];

/// Produce the fixed, ordered set of ideas for the given preferences.
pub fn generate_ideas(preferences: &IdeaPreferences, now: Timestamp) -> Vec<ProjectIdea> {
    TEMPLATES
        .iter()
        .map(|t| ProjectIdea {
            id: new_doc_id(),
            title: t.title.to_string(),
            description: t.description.to_string(),
            difficulty: preferences.difficulty,
            estimated_time: preferences.estimated_time,
            components: preferences
                .components
                .iter()
                .cloned()
                .chain(t.extra_components.iter().map(|c| c.to_string()))
                .collect(),
            category: t
                .category
                .map(str::to_string)
                .unwrap_or_else(|| preferences.category.clone()),
            instructions: t.instructions.iter().map(|s| s.to_string()).collect(),
            created_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn generate(request: GenerateIdeasRequest) -> Vec<ProjectIdea> {
        let prefs = IdeaPreferences::resolve(&request).unwrap();
        generate_ideas(&prefs, Utc::now())
    }

    #[test]
    fn empty_request_uses_defaults() {
        let ideas = generate(GenerateIdeasRequest::default());
        assert_eq!(ideas.len(), IDEAS_PER_REQUEST);

        for idea in &ideas {
            assert_eq!(idea.difficulty, Difficulty::Beginner);
            assert_eq!(idea.estimated_time, EstimatedTime::TwoToFiveHours);
            assert_eq!(&idea.components[..3], ["ESP32", "DHT22", "Servo Motor"]);
            assert!(!idea.id.is_empty());
        }
        assert_eq!(ideas[0].components.last().unwrap(), "OLED Display");
        assert_eq!(ideas[0].category, "IoT");
        assert_eq!(ideas[1].category, "Automation");
        assert_eq!(ideas[2].category, "Robotics");
    }

    #[test]
    fn caller_inputs_are_interpolated() {
        let ideas = generate(GenerateIdeasRequest {
            skill: Some("advanced".into()),
            categories: Some(vec!["Wearables".into(), "Music".into()]),
            components: Some(vec!["Arduino Uno".into()]),
            time: Some("10h-plus".into()),
            notes: Some("for a school fair".into()),
        });

        assert_eq!(ideas[0].category, "Wearables");
        assert_eq!(
            ideas[1].components,
            ["Arduino Uno", "Soil Moisture Sensor", "Relay Module", "Pump"]
        );
        assert!(ideas.iter().all(|i| i.difficulty == Difficulty::Advanced));
        assert!(ideas
            .iter()
            .all(|i| i.estimated_time == EstimatedTime::OverTenHours));
    }

    #[test]
    fn empty_strings_and_lists_fall_back() {
        let prefs = IdeaPreferences::resolve(&GenerateIdeasRequest {
            skill: Some(String::new()),
            categories: Some(vec![]),
            components: Some(vec![]),
            time: Some(String::new()),
            notes: None,
        })
        .unwrap();
        assert_eq!(prefs.difficulty, Difficulty::Beginner);
        assert_eq!(prefs.estimated_time, EstimatedTime::TwoToFiveHours);
        assert_eq!(prefs.components.len(), 3);
        assert_eq!(prefs.category, "IoT");
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let request = GenerateIdeasRequest {
            skill: Some("expert".into()),
            ..Default::default()
        };
        assert_matches!(
            IdeaPreferences::resolve(&request),
            Err(CoreError::Validation(_))
        );

        let request = GenerateIdeasRequest {
            time: Some("forever".into()),
            ..Default::default()
        };
        assert_matches!(
            IdeaPreferences::resolve(&request),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn wire_names_match_client_contract() {
        let ideas = generate(GenerateIdeasRequest::default());
        let json = serde_json::to_value(&ideas[0]).unwrap();
        assert_eq!(json["difficulty"], "beginner");
        assert_eq!(json["estimatedTime"], "2-5h");
        assert!(json["created_at"].is_string());
    }
}
