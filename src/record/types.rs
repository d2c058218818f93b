use serde::{Deserialize, Serialize};

/// Value read for any usage quantity the record leaves out.
pub const ABSENT_QUANTITY: f64 = 0.0;

/// Crop diversity assumed when the record leaves it out (a single crop).
pub const DEFAULT_CROP_DIVERSITY: u32 = 1;

fn default_crop_diversity() -> u32 {
    DEFAULT_CROP_DIVERSITY
}

/// How a plot is irrigated.
///
/// Strings outside the known set are kept as `Other` so a record with a typo
/// still scores (with the table's default irrigation factor) instead of
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum IrrigationType {
    Flood,
    Drip,
    Sprinkler,
    Rainfed,
    Other(String),
}

impl IrrigationType {
    pub fn as_str(&self) -> &str {
        match self {
            IrrigationType::Flood => "flood",
            IrrigationType::Drip => "drip",
            IrrigationType::Sprinkler => "sprinkler",
            IrrigationType::Rainfed => "rainfed",
            IrrigationType::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, IrrigationType::Other(_))
    }

    /// Flood and sprinkler systems lose enough energy to be worth converting.
    pub fn benefits_from_drip(&self) -> bool {
        matches!(self, IrrigationType::Flood | IrrigationType::Sprinkler)
    }
}

impl From<String> for IrrigationType {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "flood" => IrrigationType::Flood,
            "drip" => IrrigationType::Drip,
            "sprinkler" => IrrigationType::Sprinkler,
            "rainfed" => IrrigationType::Rainfed,
            _ => IrrigationType::Other(s),
        }
    }
}

impl From<IrrigationType> for String {
    fn from(t: IrrigationType) -> Self {
        t.as_str().to_string()
    }
}

/// How produce and inputs are moved around the farm.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum TransportMethod {
    Manual,
    BullockCart,
    Tractor,
    Truck,
    Other(String),
}

impl TransportMethod {
    pub fn as_str(&self) -> &str {
        match self {
            TransportMethod::Manual => "manual",
            TransportMethod::BullockCart => "bullock_cart",
            TransportMethod::Tractor => "tractor",
            TransportMethod::Truck => "truck",
            TransportMethod::Other(s) => s,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, TransportMethod::Other(_))
    }

    /// Motorised methods burn fuel per hectare served.
    pub fn is_motorised(&self) -> bool {
        matches!(self, TransportMethod::Tractor | TransportMethod::Truck)
    }
}

impl From<String> for TransportMethod {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => TransportMethod::Manual,
            "bullock_cart" => TransportMethod::BullockCart,
            "tractor" => TransportMethod::Tractor,
            "truck" => TransportMethod::Truck,
            _ => TransportMethod::Other(s),
        }
    }
}

impl From<TransportMethod> for String {
    fn from(t: TransportMethod) -> Self {
        t.as_str().to_string()
    }
}

/// Fertilizer applied over the season, in kg.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FertilizerUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthetic: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic: Option<f64>,
}

/// Pesticide applied over the season, in litres.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PesticideUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organic: Option<f64>,
}

/// Fuel and power consumed: diesel and petrol in litres, electricity in kWh.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FuelUsage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diesel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petrol: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity: Option<f64>,
}

/// A farm's resource usage for one footprint calculation.
///
/// Every usage group is optional. The accessor methods are the only place
/// absent values are resolved, always to [`ABSENT_QUANTITY`].
///
/// Example YAML:
/// ```yaml
/// areaHectares: 2.5
/// fertilizerUsage: { synthetic: 100, organic: 40 }
/// fuelUsage: { diesel: 30 }
/// irrigationHours: 20
/// irrigationType: flood
/// transportMethod: tractor
/// cropDiversity: 2
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UsageRecord {
    pub area_hectares: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fertilizer_usage: Option<FertilizerUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pesticide_usage: Option<PesticideUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_usage: Option<FuelUsage>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_hours: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub irrigation_type: Option<IrrigationType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_method: Option<TransportMethod>,

    #[serde(default)]
    pub conservation_agriculture: bool,

    #[serde(default)]
    pub mulching: bool,

    #[serde(default = "default_crop_diversity")]
    pub crop_diversity: u32,
}

impl UsageRecord {
    /// A record for `area_hectares` with no usage at all.
    pub fn new(area_hectares: f64) -> Self {
        Self {
            area_hectares,
            fertilizer_usage: None,
            pesticide_usage: None,
            fuel_usage: None,
            irrigation_hours: None,
            irrigation_type: None,
            transport_method: None,
            conservation_agriculture: false,
            mulching: false,
            crop_diversity: DEFAULT_CROP_DIVERSITY,
        }
    }

    pub fn synthetic_fertilizer(&self) -> f64 {
        self.fertilizer_usage
            .as_ref()
            .and_then(|f| f.synthetic)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn organic_fertilizer(&self) -> f64 {
        self.fertilizer_usage
            .as_ref()
            .and_then(|f| f.organic)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn chemical_pesticide(&self) -> f64 {
        self.pesticide_usage
            .as_ref()
            .and_then(|p| p.chemical)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn organic_pesticide(&self) -> f64 {
        self.pesticide_usage
            .as_ref()
            .and_then(|p| p.organic)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn diesel(&self) -> f64 {
        self.fuel_usage
            .as_ref()
            .and_then(|f| f.diesel)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn petrol(&self) -> f64 {
        self.fuel_usage
            .as_ref()
            .and_then(|f| f.petrol)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn electricity(&self) -> f64 {
        self.fuel_usage
            .as_ref()
            .and_then(|f| f.electricity)
            .unwrap_or(ABSENT_QUANTITY)
    }

    pub fn irrigation_hours(&self) -> f64 {
        self.irrigation_hours.unwrap_or(ABSENT_QUANTITY)
    }

    /// Irrigated hectare-hours: hours of irrigation spread over the whole area.
    pub fn irrigation_load(&self) -> f64 {
        self.irrigation_hours() * self.area_hectares
    }

    pub fn uses_drip(&self) -> bool {
        self.irrigation_type == Some(IrrigationType::Drip)
    }
}
