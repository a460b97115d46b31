pub mod department;
pub mod enums;
pub mod hospital;
pub mod symptom;

pub use department::Department;
pub use enums::OperationalStatus;
pub use hospital::Hospital;
pub use symptom::SymptomDefinition;
