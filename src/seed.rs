//! Demo reference dataset: Hong Kong public hospitals, departments, and
//! symptom definitions.
//!
//! Hospital names match the `hospName` values published by the A&E feed so
//! the intensity refresh finds them. Ids are generated fresh per call;
//! nothing here assumes stable ids across runs.

use uuid::Uuid;

use crate::directory::DirectorySnapshot;
use crate::models::{Department, Hospital, OperationalStatus, SymptomDefinition};

struct DepartmentSeed(&'static str, &'static str);
struct SymptomSeed(&'static str, &'static str, u32, &'static [&'static str]);
struct HospitalSeed {
    name: &'static str,
    address: &'static str,
    district: &'static str,
    latitude: f64,
    longitude: f64,
    capacity: u32,
    status: OperationalStatus,
    department_codes: &'static [&'static str],
}

const DEPARTMENTS: &[DepartmentSeed] = &[
    DepartmentSeed("Cardiology", "CAR"),
    DepartmentSeed("Urology", "URO"),
    DepartmentSeed("Neurology", "NEU"),
    DepartmentSeed("Orthopedics", "ORT"),
    DepartmentSeed("Dermatology", "DER"),
    DepartmentSeed("Gastroenterology", "GAS"),
    DepartmentSeed("Ophthalmology", "OPH"),
    DepartmentSeed("Otolaryngology", "ENT"),
    DepartmentSeed("Pulmonology", "PUL"),
    DepartmentSeed("Endocrinology", "END"),
];

const SYMPTOMS: &[SymptomSeed] = &[
    SymptomSeed("kidney pain", "URO", 1, &["renal pain", "flank pain", "kidney discomfort", "urinary pain"]),
    SymptomSeed("heart pain", "CAR", 1, &["chest pain", "cardiac pain", "chest tightness", "palpitations"]),
    SymptomSeed("migraine", "NEU", 2, &["headache", "throbbing head", "light sensitivity", "aura"]),
    SymptomSeed("back injury", "ORT", 2, &["fracture", "sprain", "joint pain", "bone pain"]),
    SymptomSeed("skin rash", "DER", 2, &["itchy skin", "red patches", "eczema", "dermatitis"]),
    SymptomSeed("stomach ache", "GAS", 2, &["abdominal pain", "bloating", "acid reflux", "indigestion"]),
    SymptomSeed("blurred vision", "OPH", 2, &["vision loss", "eye pain", "double vision", "dry eyes"]),
    SymptomSeed("sore throat", "ENT", 3, &["ear pain", "blocked nose", "sinus", "hoarseness"]),
    SymptomSeed("shortness of breath", "PUL", 1, &["wheezing", "cough", "respiratory distress", "asthma"]),
    SymptomSeed("excessive thirst", "END", 2, &["fatigue", "weight change", "blood sugar", "hormone"]),
];

const HOSPITALS: &[HospitalSeed] = &[
    HospitalSeed {
        name: "Queen Elizabeth Hospital",
        address: "30 Gascoigne Road, Yau Ma Tei",
        district: "Yau Tsim Mong",
        latitude: 22.3089,
        longitude: 114.1748,
        capacity: 1800,
        status: OperationalStatus::Operational,
        department_codes: &["CAR", "URO", "NEU", "ORT", "DER", "GAS", "OPH"],
    },
    HospitalSeed {
        name: "Queen Mary Hospital",
        address: "102 Pok Fu Lam Road",
        district: "Southern",
        latitude: 22.2704,
        longitude: 114.1315,
        capacity: 1700,
        status: OperationalStatus::Operational,
        department_codes: &["CAR", "NEU", "GAS", "ENT", "PUL", "END"],
    },
    HospitalSeed {
        name: "Ruttonjee Hospital",
        address: "266 Queen's Road East, Wan Chai",
        district: "Wan Chai",
        latitude: 22.2759,
        longitude: 114.1747,
        capacity: 600,
        status: OperationalStatus::Operational,
        department_codes: &["CAR", "URO", "PUL"],
    },
    HospitalSeed {
        name: "Pamela Youde Nethersole Eastern Hospital",
        address: "3 Lok Man Road, Chai Wan",
        district: "Eastern",
        latitude: 22.2620,
        longitude: 114.2367,
        capacity: 1600,
        status: OperationalStatus::PartialService,
        department_codes: &["CAR", "URO", "ORT", "OPH", "END"],
    },
    HospitalSeed {
        name: "Prince of Wales Hospital",
        address: "30-32 Ngan Shing Street, Sha Tin",
        district: "Sha Tin",
        latitude: 22.3800,
        longitude: 114.2013,
        capacity: 1650,
        status: OperationalStatus::Operational,
        department_codes: &["NEU", "ORT", "DER", "ENT", "PUL"],
    },
    HospitalSeed {
        name: "Princess Margaret Hospital",
        address: "2-10 Princess Margaret Hospital Road, Lai Chi Kok",
        district: "Kwai Tsing",
        latitude: 22.3409,
        longitude: 114.1348,
        capacity: 1400,
        status: OperationalStatus::Operational,
        department_codes: &["CAR", "NEU", "GAS", "ENT", "PUL", "END"],
    },
    HospitalSeed {
        name: "Tuen Mun Hospital",
        address: "23 Tsing Chung Koon Road, Tuen Mun",
        district: "Tuen Mun",
        latitude: 22.4070,
        longitude: 113.9764,
        capacity: 1900,
        status: OperationalStatus::Operational,
        department_codes: &["CAR", "URO", "ORT", "GAS", "OPH", "END"],
    },
];

/// Build a fully wired demo snapshot.
pub fn demo_snapshot() -> DirectorySnapshot {
    let departments: Vec<Department> = DEPARTMENTS
        .iter()
        .map(|DepartmentSeed(name, code)| Department {
            id: Uuid::new_v4(),
            name: (*name).to_string(),
            code: (*code).to_string(),
        })
        .collect();

    let department_id = |code: &str| -> Uuid {
        departments
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.id)
            .unwrap_or_else(|| panic!("unknown department code {code}"))
    };

    let symptoms = SYMPTOMS
        .iter()
        .map(|SymptomSeed(text, code, priority, keywords)| SymptomDefinition {
            id: Uuid::new_v4(),
            text: (*text).to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            department_id: department_id(code),
            priority: *priority,
        })
        .collect();

    let hospitals = HOSPITALS
        .iter()
        .map(|seed| Hospital {
            id: Uuid::new_v4(),
            name: seed.name.to_string(),
            address: seed.address.to_string(),
            district: seed.district.to_string(),
            latitude: seed.latitude,
            longitude: seed.longitude,
            capacity: seed.capacity,
            current_intensity: 0.0,
            operational_status: seed.status,
            department_ids: seed.department_codes.iter().map(|c| department_id(c)).collect(),
        })
        .collect();

    DirectorySnapshot {
        hospitals,
        departments,
        symptoms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_internally_consistent() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.departments.len(), 10);
        assert_eq!(snapshot.symptoms.len(), 10);
        assert_eq!(snapshot.hospitals.len(), 7);

        for symptom in &snapshot.symptoms {
            assert!(snapshot.departments.iter().any(|d| d.id == symptom.department_id));
        }
        for hospital in &snapshot.hospitals {
            assert!(!hospital.department_ids.is_empty());
            for dept in &hospital.department_ids {
                assert!(snapshot.departments.iter().any(|d| d.id == *dept));
            }
        }
    }

    #[test]
    fn every_department_has_at_least_one_hospital() {
        let snapshot = demo_snapshot();
        for dept in &snapshot.departments {
            assert!(
                snapshot.hospitals.iter().any(|h| h.offers_department(dept.id)),
                "{} has no hospitals",
                dept.code
            );
        }
    }
}
