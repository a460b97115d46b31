//! Scores and orders candidate hospitals for a department.

use crate::config::TriageConfig;
use crate::geo;
use crate::models::{Hospital, OperationalStatus};

use super::types::RankedHospital;

/// Intensity below which the reason string notes "Low intensity".
const LOW_INTENSITY: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct HospitalRanker {
    config: TriageConfig,
}

impl HospitalRanker {
    pub fn new(config: TriageConfig) -> Self {
        Self { config }
    }

    /// Rank hospitals for a patient location. Closed hospitals are excluded
    /// outright; the rest are scored (lower is better), sorted with hospital
    /// id as the deterministic tie-break, and truncated to `max_results`.
    pub fn rank(
        &self,
        hospitals: &[Hospital],
        patient_lat: f64,
        patient_lon: f64,
        max_results: usize,
    ) -> Vec<RankedHospital> {
        let mut ranked: Vec<RankedHospital> = hospitals
            .iter()
            .filter(|h| !h.operational_status.is_closed())
            .map(|h| self.score_hospital(h, patient_lat, patient_lon))
            .collect();

        ranked.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.hospital_id.cmp(&b.hospital_id))
        });
        ranked.truncate(max_results);
        ranked
    }

    fn score_hospital(
        &self,
        hospital: &Hospital,
        patient_lat: f64,
        patient_lon: f64,
    ) -> RankedHospital {
        let distance_km = geo::distance_km(
            patient_lat,
            patient_lon,
            hospital.latitude,
            hospital.longitude,
        );
        let norm_dist = geo::normalize_distance(distance_km, self.config.max_distance_km);
        let intensity = hospital.current_intensity;
        let status_penalty = hospital.operational_status.penalty();

        let score = self.config.distance_weight * norm_dist
            + self.config.intensity_weight * intensity
            + self.config.status_weight * status_penalty;

        RankedHospital {
            hospital_id: hospital.id,
            name: hospital.name.clone(),
            address: hospital.address.clone(),
            district: hospital.district.clone(),
            distance_km,
            intensity,
            operational_status: hospital.operational_status,
            score,
            reason: build_reason(hospital, distance_km),
        }
    }
}

fn build_reason(hospital: &Hospital, distance_km: f64) -> String {
    let mut reason = format!("Distance: {distance_km:.2} km");
    if hospital.current_intensity < LOW_INTENSITY {
        reason.push_str(", Low intensity");
    }
    if hospital.operational_status == OperationalStatus::Operational {
        reason.push_str(", Fully operational");
    }
    reason
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    // Patient at Victoria Park; hospital offsets picked so 1 degree of
    // latitude is ~111 km.
    const PATIENT_LAT: f64 = 22.2820;
    const PATIENT_LON: f64 = 114.1890;

    fn hospital(
        name: &str,
        km_north: f64,
        intensity: f64,
        status: OperationalStatus,
    ) -> Hospital {
        Hospital {
            id: Uuid::new_v4(),
            name: name.to_string(),
            address: format!("{name} Road"),
            district: "Hong Kong Island".to_string(),
            latitude: PATIENT_LAT + km_north / 111.0,
            longitude: PATIENT_LON,
            capacity: 400,
            current_intensity: intensity,
            operational_status: status,
            department_ids: vec![],
        }
    }

    fn ranker() -> HospitalRanker {
        HospitalRanker::new(TriageConfig::default())
    }

    #[test]
    fn closed_hospitals_are_never_ranked() {
        let hospitals = vec![
            hospital("Open", 1.0, 0.9, OperationalStatus::Operational),
            hospital("Epidemic", 0.1, 0.0, OperationalStatus::ClosedEpidemic),
            hospital("Closed", 0.2, 0.0, OperationalStatus::ClosedOther),
        ];

        let ranked = ranker().rank(&hospitals, PATIENT_LAT, PATIENT_LON, 10);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Open");
    }

    #[test]
    fn near_operational_beats_far_partial() {
        // A: 2 km away, intensity 0.2, operational -> 0.4*0.04 + 0.3*0.2 = 0.076
        // B: 10 km away, intensity 0.1, partial   -> 0.4*0.2 + 0.3*0.1 + 0.3*0.5 = 0.26
        let a = hospital("A", 2.0, 0.2, OperationalStatus::Operational);
        let b = hospital("B", 10.0, 0.1, OperationalStatus::PartialService);

        let ranked = ranker().rank(&[b, a], PATIENT_LAT, PATIENT_LON, 5);
        assert_eq!(ranked[0].name, "A");
        assert!(ranked[0].score < ranked[1].score);
        assert!((ranked[0].score - 0.076).abs() < 0.01);
        assert!((ranked[1].score - 0.26).abs() < 0.01);
    }

    #[test]
    fn output_is_sorted_ascending_and_truncated() {
        let hospitals: Vec<Hospital> = (1..=8)
            .map(|i| {
                hospital(
                    &format!("H{i}"),
                    i as f64 * 3.0,
                    0.1 * i as f64,
                    OperationalStatus::Operational,
                )
            })
            .collect();

        let ranked = ranker().rank(&hospitals, PATIENT_LAT, PATIENT_LON, 5);
        assert_eq!(ranked.len(), 5);
        for pair in ranked.windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }

    #[test]
    fn score_ties_break_on_hospital_id() {
        let a = hospital("Same A", 5.0, 0.3, OperationalStatus::Operational);
        let b = hospital("Same B", 5.0, 0.3, OperationalStatus::Operational);
        let lower_id = a.id.min(b.id);

        let ranked = ranker().rank(&[a.clone(), b.clone()], PATIENT_LAT, PATIENT_LON, 5);
        assert_eq!(ranked[0].hospital_id, lower_id);

        let reversed = ranker().rank(&[b, a], PATIENT_LAT, PATIENT_LON, 5);
        assert_eq!(reversed[0].hospital_id, lower_id);
    }

    #[test]
    fn reason_mentions_distance_intensity_and_status() {
        let h = hospital("Calm", 2.0, 0.1, OperationalStatus::Operational);
        let ranked = ranker().rank(&[h], PATIENT_LAT, PATIENT_LON, 5);
        let reason = &ranked[0].reason;
        assert!(reason.starts_with("Distance: "));
        assert!(reason.contains("Low intensity"));
        assert!(reason.contains("Fully operational"));

        let busy = hospital("Busy", 2.0, 0.8, OperationalStatus::PartialService);
        let ranked = ranker().rank(&[busy], PATIENT_LAT, PATIENT_LON, 5);
        let reason = &ranked[0].reason;
        assert!(!reason.contains("Low intensity"));
        assert!(!reason.contains("Fully operational"));
    }

    #[test]
    fn distant_hospital_score_saturates_at_the_cap() {
        // 100 km away with the 50 km default cap: distance term maxes at 0.4.
        let far = hospital("Far", 100.0, 0.0, OperationalStatus::Operational);
        let ranked = ranker().rank(&[far], PATIENT_LAT, PATIENT_LON, 5);
        assert!((ranked[0].score - 0.4).abs() < 1e-9);
    }
}
