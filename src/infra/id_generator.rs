use uuid::Uuid;

use crate::pipeline::IdGenerator;

/// Random v4 UUIDs, one per created entity.
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
