use serde::{Deserialize, Serialize};

use crate::record::{IrrigationType, TransportMethod};

/// kg CO2e per kg of fertilizer applied.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FertilizerFactors {
    pub synthetic: f64,
    pub organic: f64,
}

/// kg CO2e per litre of pesticide applied.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PesticideFactors {
    pub chemical: f64,
    pub organic: f64,
}

/// kg CO2e per litre of fuel, or per kWh of electricity.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FuelFactors {
    pub diesel: f64,
    pub petrol: f64,
    pub electricity: f64,
}

/// kg CO2e per irrigated hectare-hour.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IrrigationFactors {
    pub flood: f64,
    pub sprinkler: f64,
    pub drip: f64,
    pub rainfed: f64,
    /// Used when the record has no irrigation type or one not listed above
    pub fallback: f64,
}

/// kg CO2e per hectare served.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TransportFactors {
    pub manual: f64,
    pub bullock_cart: f64,
    pub tractor: f64,
    pub truck: f64,
    /// Used when the record has no transport method or one not listed above
    pub fallback: f64,
}

/// Emission factors for every (category, subtype) pair the engine knows.
///
/// The table is plain data: the engine only ever borrows it, so a loaded table
/// is immutable for the rest of the process. Any field left out of a config
/// file takes its [`EmissionFactorTable::STANDARD`] value.
///
/// Example YAML:
/// ```yaml
/// factors:
///   fuel:
///     diesel: 2.7
///   irrigation:
///     fallback: 0.4
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct EmissionFactorTable {
    pub fertilizer: FertilizerFactors,
    pub pesticide: PesticideFactors,
    pub fuel: FuelFactors,
    pub irrigation: IrrigationFactors,
    pub transport: TransportFactors,
}

impl EmissionFactorTable {
    pub const STANDARD: EmissionFactorTable = EmissionFactorTable {
        fertilizer: FertilizerFactors {
            synthetic: 4.5,
            organic: 0.8,
        },
        pesticide: PesticideFactors {
            chemical: 2.5,
            organic: 0.4,
        },
        fuel: FuelFactors {
            diesel: 2.68,
            petrol: 2.31,
            electricity: 0.82,
        },
        irrigation: IrrigationFactors {
            flood: 0.5,
            sprinkler: 0.3,
            drip: 0.15,
            rainfed: 0.0,
            fallback: 0.5,
        },
        transport: TransportFactors {
            manual: 0.0,
            bullock_cart: 0.05,
            tractor: 0.9,
            truck: 1.2,
            fallback: 0.0,
        },
    };

    pub fn irrigation_factor(&self, irrigation: Option<&IrrigationType>) -> f64 {
        match irrigation {
            Some(IrrigationType::Flood) => self.irrigation.flood,
            Some(IrrigationType::Sprinkler) => self.irrigation.sprinkler,
            Some(IrrigationType::Drip) => self.irrigation.drip,
            Some(IrrigationType::Rainfed) => self.irrigation.rainfed,
            Some(IrrigationType::Other(_)) | None => self.irrigation.fallback,
        }
    }

    pub fn transport_factor(&self, transport: Option<&TransportMethod>) -> f64 {
        match transport {
            Some(TransportMethod::Manual) => self.transport.manual,
            Some(TransportMethod::BullockCart) => self.transport.bullock_cart,
            Some(TransportMethod::Tractor) => self.transport.tractor,
            Some(TransportMethod::Truck) => self.transport.truck,
            Some(TransportMethod::Other(_)) | None => self.transport.fallback,
        }
    }

    /// Flatten the table into (category, subtype, factor, unit) rows, in a stable order.
    pub fn entries(&self) -> Vec<FactorEntry> {
        vec![
            FactorEntry::new("fertilizer", "synthetic", self.fertilizer.synthetic, "kg"),
            FactorEntry::new("fertilizer", "organic", self.fertilizer.organic, "kg"),
            FactorEntry::new("pesticide", "chemical", self.pesticide.chemical, "L"),
            FactorEntry::new("pesticide", "organic", self.pesticide.organic, "L"),
            FactorEntry::new("fuel", "diesel", self.fuel.diesel, "L"),
            FactorEntry::new("fuel", "petrol", self.fuel.petrol, "L"),
            FactorEntry::new("fuel", "electricity", self.fuel.electricity, "kWh"),
            FactorEntry::new("irrigation", "flood", self.irrigation.flood, "ha*h"),
            FactorEntry::new("irrigation", "sprinkler", self.irrigation.sprinkler, "ha*h"),
            FactorEntry::new("irrigation", "drip", self.irrigation.drip, "ha*h"),
            FactorEntry::new("irrigation", "rainfed", self.irrigation.rainfed, "ha*h"),
            FactorEntry::new("irrigation", "fallback", self.irrigation.fallback, "ha*h"),
            FactorEntry::new("transport", "manual", self.transport.manual, "ha"),
            FactorEntry::new("transport", "bullock_cart", self.transport.bullock_cart, "ha"),
            FactorEntry::new("transport", "tractor", self.transport.tractor, "ha"),
            FactorEntry::new("transport", "truck", self.transport.truck, "ha"),
            FactorEntry::new("transport", "fallback", self.transport.fallback, "ha"),
        ]
    }
}

impl Default for EmissionFactorTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Default for FertilizerFactors {
    fn default() -> Self {
        EmissionFactorTable::STANDARD.fertilizer
    }
}

impl Default for PesticideFactors {
    fn default() -> Self {
        EmissionFactorTable::STANDARD.pesticide
    }
}

impl Default for FuelFactors {
    fn default() -> Self {
        EmissionFactorTable::STANDARD.fuel
    }
}

impl Default for IrrigationFactors {
    fn default() -> Self {
        EmissionFactorTable::STANDARD.irrigation
    }
}

impl Default for TransportFactors {
    fn default() -> Self {
        EmissionFactorTable::STANDARD.transport
    }
}

/// One row of a flattened [`EmissionFactorTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct FactorEntry {
    pub category: &'static str,
    pub subtype: &'static str,
    pub factor: f64,
    /// Denominator of the factor: kg CO2e per `unit`
    pub unit: &'static str,
}

impl FactorEntry {
    fn new(category: &'static str, subtype: &'static str, factor: f64, unit: &'static str) -> Self {
        Self {
            category,
            subtype,
            factor,
            unit,
        }
    }
}
