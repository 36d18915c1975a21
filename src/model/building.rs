use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Building row from the upstream `/api/buildings` listing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Building {
    pub id: String,

    #[serde(default)]
    pub organization_name: String,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

/// A building with its catalog photo attached when the name reconciled.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DecoratedBuilding {
    #[serde(flatten)]
    pub building: Building,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub match_score: Option<f64>,
}

/// Machine type. Anything but `washer`/`dryer`, including `null`, is `Other`.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MachineKind {
    Washer,
    Dryer,
    #[default]
    Other,
}

impl<'de> Deserialize<'de> for MachineKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kind = Option::<String>::deserialize(deserializer)?;
        Ok(match kind.as_deref() {
            Some("washer") => MachineKind::Washer,
            Some("dryer") => MachineKind::Dryer,
            _ => MachineKind::Other,
        })
    }
}

/// Machine state as reported upstream. Unrecognised codes are kept verbatim
/// in `Other`, a missing code is `Unknown`; both count as errors.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MachineStatus {
    Available,
    InUse,
    Complete,
    Unavailable,
    #[default]
    Unknown,
    Other(String),
}

impl MachineStatus {
    pub fn parse(code: &str) -> Self {
        match code {
            "AVAILABLE" => MachineStatus::Available,
            "IN_USE" => MachineStatus::InUse,
            "COMPLETE" => MachineStatus::Complete,
            "UNAVAILABLE" => MachineStatus::Unavailable,
            "" => MachineStatus::Unknown,
            other => MachineStatus::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            MachineStatus::Available => "AVAILABLE",
            MachineStatus::InUse => "IN_USE",
            MachineStatus::Complete => "COMPLETE",
            MachineStatus::Unavailable => "UNAVAILABLE",
            MachineStatus::Unknown => "",
            MachineStatus::Other(code) => code,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            MachineStatus::Unavailable | MachineStatus::Unknown | MachineStatus::Other(_)
        )
    }

    pub fn color(&self) -> StatusColor {
        match self {
            MachineStatus::Available => StatusColor::Blue,
            MachineStatus::InUse => StatusColor::Yellow,
            MachineStatus::Complete => StatusColor::Green,
            MachineStatus::Unavailable | MachineStatus::Unknown | MachineStatus::Other(_) => {
                StatusColor::Red
            }
        }
    }
}

impl Serialize for MachineStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for MachineStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = Option::<String>::deserialize(deserializer)?;
        Ok(code.map_or(MachineStatus::Unknown, |c| MachineStatus::parse(&c)))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Seconds left on a cycle. `null`, negative and non-finite values read as 0.
fn lenient_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let secs = Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0);
    if secs.is_finite() && secs > 0.0 {
        Ok(secs as u64)
    } else {
        Ok(0)
    }
}

/// Color family shared by status chips, cards and charts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Blue,
    Yellow,
    Green,
    Red,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Machine {
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub room_id: String,

    #[serde(default, rename = "type")]
    pub kind: MachineKind,

    #[serde(default)]
    pub status: MachineStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub number: u32,

    #[serde(default, deserialize_with = "lenient_seconds")]
    pub remaining_seconds: u64,

    #[serde(default)]
    pub estimated_end: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub control_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub room_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub building_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub building_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Room {
    pub room_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub room_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub building_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub machines: Vec<Machine>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct MachineStats {
    pub total_machines: usize,
    pub total_washers: usize,
    pub total_dryers: usize,
    pub washers_in_use: usize,
    pub dryers_in_use: usize,
    pub washers_available: usize,
    pub dryers_available: usize,
    pub washer_usage_percent: f64,
    pub dryer_usage_percent: f64,
    pub total_in_use: usize,
    pub total_available: usize,
    pub total_error: usize,

    #[serde(default)]
    pub washers_complete: usize,

    #[serde(default)]
    pub dryers_complete: usize,

    #[serde(default)]
    pub washers_error: usize,

    #[serde(default)]
    pub dryers_error: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BuildingRooms {
    pub building_id: String,

    #[serde(default)]
    pub building_name: String,

    #[serde(default)]
    pub rooms: Option<Vec<Room>>,
}

/// Payload of `/api/buildings/{id}/machines`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BuildingMachines {
    pub building: BuildingRooms,

    #[serde(default)]
    pub stats: Option<MachineStats>,
}

/// Upstream response envelope.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub status: u16,

    pub data: T,
}
