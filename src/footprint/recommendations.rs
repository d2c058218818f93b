use serde::{Deserialize, Serialize};

use super::engine::round2;
use super::factors::EmissionFactorTable;
use crate::record::UsageRecord;

/// How urgently a recommendation should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: lower ranks are listed first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationCategory {
    Fertilizer,
    Pesticide,
    Irrigation,
    Energy,
    Transport,
    CropRotation,
    ConservationAgriculture,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: RecommendationCategory,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Estimated kg CO2e avoided by following the recommendation, when it can be computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_savings_kg: Option<f64>,
}

/// Build the recommendation list for a record, highest priority first.
///
/// Rules are evaluated in a fixed order and fire independently. The final
/// sort is stable, so recommendations of equal priority keep rule order.
pub fn generate_recommendations(
    record: &UsageRecord,
    factors: &EmissionFactorTable,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let synthetic = record.synthetic_fertilizer();
    if synthetic > 0.0 {
        let savings = synthetic * (factors.fertilizer.synthetic - factors.fertilizer.organic);
        recommendations.push(Recommendation {
            category: RecommendationCategory::Fertilizer,
            title: "Switch to organic fertilizer".to_string(),
            description: format!(
                "Replace {} kg of synthetic fertilizer with compost, vermicompost or green manure.",
                synthetic
            ),
            priority: Priority::High,
            co2_savings_kg: Some(round2(savings)),
        });
    }

    let chemical = record.chemical_pesticide();
    if chemical > 0.0 {
        let savings = chemical * (factors.pesticide.chemical - factors.pesticide.organic);
        recommendations.push(Recommendation {
            category: RecommendationCategory::Pesticide,
            title: "Adopt bio-pesticides and integrated pest management".to_string(),
            description: format!(
                "Replace {} L of chemical pesticide with neem-based or other biological controls.",
                chemical
            ),
            priority: Priority::High,
            co2_savings_kg: Some(round2(savings)),
        });
    }

    if let Some(irrigation) = record
        .irrigation_type
        .as_ref()
        .filter(|t| t.benefits_from_drip())
    {
        let current = factors.irrigation_factor(Some(irrigation));
        let savings = record.irrigation_load() * (current - factors.irrigation.drip);
        recommendations.push(Recommendation {
            category: RecommendationCategory::Irrigation,
            title: "Install drip irrigation".to_string(),
            description: format!(
                "Drip lines use far less pumping energy and water than {} irrigation.",
                irrigation.as_str()
            ),
            priority: Priority::Medium,
            co2_savings_kg: Some(round2(savings)),
        });
    }

    let (diesel, petrol, electricity) = (record.diesel(), record.petrol(), record.electricity());
    if diesel + petrol + electricity > 0.0 {
        let savings = diesel * factors.fuel.diesel
            + petrol * factors.fuel.petrol
            + electricity * factors.fuel.electricity;
        recommendations.push(Recommendation {
            category: RecommendationCategory::Energy,
            title: "Move pumps and machinery to solar power".to_string(),
            description: "Solar pumps remove the fuel and grid emissions of irrigation and farm machinery."
                .to_string(),
            priority: Priority::Medium,
            co2_savings_kg: Some(round2(savings)),
        });
    }

    if let Some(transport) = record.transport_method.as_ref().filter(|t| t.is_motorised()) {
        let savings = record.area_hectares * factors.transport_factor(Some(transport));
        recommendations.push(Recommendation {
            category: RecommendationCategory::Transport,
            title: "Share or reduce motorised transport".to_string(),
            description: format!(
                "Pool {} trips with neighbouring farms or use bullock carts for short hauls.",
                transport.as_str()
            ),
            priority: Priority::Low,
            co2_savings_kg: Some(round2(savings)),
        });
    }

    recommendations.push(Recommendation {
        category: RecommendationCategory::CropRotation,
        title: "Practice crop rotation".to_string(),
        description: "Rotate cereals with legumes to fix nitrogen and cut fertilizer demand."
            .to_string(),
        priority: Priority::Medium,
        co2_savings_kg: None,
    });

    recommendations.push(Recommendation {
        category: RecommendationCategory::ConservationAgriculture,
        title: "Adopt conservation agriculture".to_string(),
        description: "Minimum tillage, residue retention and cover crops build soil carbon."
            .to_string(),
        priority: Priority::High,
        co2_savings_kg: None,
    });

    recommendations.sort_by_key(|r| r.priority.rank());
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FertilizerUsage, FuelUsage, IrrigationType, PesticideUsage, TransportMethod};

    fn categories(recs: &[Recommendation]) -> Vec<RecommendationCategory> {
        recs.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_empty_record_gets_always_on_rules() {
        let recs = generate_recommendations(&UsageRecord::new(1.0), &EmissionFactorTable::STANDARD);
        assert_eq!(
            categories(&recs),
            vec![
                RecommendationCategory::ConservationAgriculture,
                RecommendationCategory::CropRotation,
            ]
        );
        assert!(recs.iter().all(|r| r.co2_savings_kg.is_none()));
    }

    #[test]
    fn test_fertilizer_savings() {
        let mut record = UsageRecord::new(1.0);
        record.fertilizer_usage = Some(FertilizerUsage {
            synthetic: Some(100.0),
            organic: None,
        });
        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        let fertilizer = &recs[0];
        assert_eq!(fertilizer.category, RecommendationCategory::Fertilizer);
        assert_eq!(fertilizer.priority, Priority::High);
        // 100 * (4.5 - 0.8)
        assert_eq!(fertilizer.co2_savings_kg, Some(370.0));
    }

    #[test]
    fn test_pesticide_savings() {
        let mut record = UsageRecord::new(1.0);
        record.pesticide_usage = Some(PesticideUsage {
            chemical: Some(10.0),
            organic: None,
        });
        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        let pesticide = recs
            .iter()
            .find(|r| r.category == RecommendationCategory::Pesticide)
            .unwrap();
        // 10 * (2.5 - 0.4)
        assert_eq!(pesticide.co2_savings_kg, Some(21.0));
    }

    #[test]
    fn test_flood_irrigation_savings() {
        let mut record = UsageRecord::new(2.0);
        record.irrigation_hours = Some(10.0);
        record.irrigation_type = Some(IrrigationType::Flood);
        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        let irrigation = recs
            .iter()
            .find(|r| r.category == RecommendationCategory::Irrigation)
            .unwrap();
        // 10h * 2ha * (0.5 - 0.15)
        assert_eq!(irrigation.co2_savings_kg, Some(7.0));
        assert_eq!(irrigation.priority, Priority::Medium);
    }

    #[test]
    fn test_drip_and_unknown_irrigation_get_no_irrigation_rule() {
        for irrigation in [
            IrrigationType::Drip,
            IrrigationType::Rainfed,
            IrrigationType::Other("canal".to_string()),
        ] {
            let mut record = UsageRecord::new(1.0);
            record.irrigation_hours = Some(10.0);
            record.irrigation_type = Some(irrigation);
            let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
            assert!(!recs
                .iter()
                .any(|r| r.category == RecommendationCategory::Irrigation));
        }
    }

    #[test]
    fn test_energy_savings_cover_all_fuels() {
        let mut record = UsageRecord::new(1.0);
        record.fuel_usage = Some(FuelUsage {
            diesel: Some(10.0),
            petrol: Some(10.0),
            electricity: Some(100.0),
        });
        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        let energy = recs
            .iter()
            .find(|r| r.category == RecommendationCategory::Energy)
            .unwrap();
        // 26.8 + 23.1 + 82
        assert_eq!(energy.co2_savings_kg, Some(131.9));
    }

    #[test]
    fn test_transport_rule_only_for_motorised() {
        let mut record = UsageRecord::new(4.0);
        record.transport_method = Some(TransportMethod::BullockCart);
        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        assert!(!recs
            .iter()
            .any(|r| r.category == RecommendationCategory::Transport));

        record.transport_method = Some(TransportMethod::Truck);
        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        let transport = recs.last().unwrap();
        assert_eq!(transport.category, RecommendationCategory::Transport);
        assert_eq!(transport.priority, Priority::Low);
        // 4ha * 1.2
        assert_eq!(transport.co2_savings_kg, Some(4.8));
    }

    #[test]
    fn test_sorted_by_priority_with_stable_ties() {
        let mut record = UsageRecord::new(1.0);
        record.fertilizer_usage = Some(FertilizerUsage {
            synthetic: Some(10.0),
            organic: None,
        });
        record.pesticide_usage = Some(PesticideUsage {
            chemical: Some(1.0),
            organic: None,
        });
        record.irrigation_hours = Some(5.0);
        record.irrigation_type = Some(IrrigationType::Sprinkler);
        record.fuel_usage = Some(FuelUsage {
            diesel: Some(5.0),
            petrol: None,
            electricity: None,
        });
        record.transport_method = Some(TransportMethod::Tractor);

        let recs = generate_recommendations(&record, &EmissionFactorTable::STANDARD);
        assert_eq!(
            categories(&recs),
            vec![
                RecommendationCategory::Fertilizer,
                RecommendationCategory::Pesticide,
                RecommendationCategory::ConservationAgriculture,
                RecommendationCategory::Irrigation,
                RecommendationCategory::Energy,
                RecommendationCategory::CropRotation,
                RecommendationCategory::Transport,
            ]
        );
        assert!(recs
            .windows(2)
            .all(|w| w[0].priority.rank() <= w[1].priority.rank()));
    }

    #[test]
    fn test_substituted_table_changes_savings() {
        let mut table = EmissionFactorTable::STANDARD;
        table.fertilizer.synthetic = 2.8;
        let mut record = UsageRecord::new(1.0);
        record.fertilizer_usage = Some(FertilizerUsage {
            synthetic: Some(10.0),
            organic: None,
        });
        let recs = generate_recommendations(&record, &table);
        // 10 * (2.8 - 0.8)
        assert_eq!(recs[0].co2_savings_kg, Some(20.0));
    }
}
