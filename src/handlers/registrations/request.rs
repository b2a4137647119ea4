//! Registration request DTOs

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::constants::ROUND_COUNT;

/// Create registration request
///
/// Missing strings and lists deserialize to empty values so that absent
/// fields surface as validation errors rather than body rejections.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "collegeName is required"))]
    pub college_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "collegeAddress is required"))]
    pub college_address: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "facultyIncharge is required"))]
    pub faculty_incharge: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "contactNumber is required"))]
    pub contact_number: String,

    /// Events entered by this college; at least one
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one event is required"), nested)]
    pub events: Vec<EventRequest>,
}

/// One event inside a create request
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "eventName is required"))]
    pub event_name: String,

    /// Not cross-checked against `member_names`
    #[validate(required(message = "membersCount is required"), range(min = 0))]
    pub members_count: Option<i64>,

    #[serde(default)]
    pub member_names: Vec<String>,
}

/// Update marks request
///
/// Every round is overwritten: a round left out of the body is stored as 0,
/// not carried over from the previous marks.
///
/// Rounds accept JSON numbers or numeric strings (`"10"`); `null` and `""`
/// count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMarksRequest {
    #[serde(default, deserialize_with = "deserialize_round")]
    pub round1: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_round")]
    pub round2: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_round")]
    pub round3: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_round")]
    pub round4: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_round")]
    pub round5: Option<f64>,
}

impl UpdateMarksRequest {
    pub fn rounds(&self) -> [Option<f64>; ROUND_COUNT] {
        [self.round1, self.round2, self.round3, self.round4, self.round5]
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoundValue {
    Number(f64),
    Text(String),
}

fn deserialize_round<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RoundValue>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RoundValue::Number(n)) => Ok(Some(n)),
        Some(RoundValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>().map(Some).map_err(|_| {
                serde::de::Error::custom(format!("round value '{}' is not a number", text))
            })
        }
    }
}
